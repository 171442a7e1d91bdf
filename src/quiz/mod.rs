//! Quiz generation and answer bookkeeping

use crate::render::{splice, Markup};
use crate::scan::TargetMatcher;
use crate::selection::SelectionStore;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One line of the answer key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerEntry {
    /// Blank number, starting at 1
    pub number: u32,
    /// The original picked text for that blank
    pub word: String,
}

/// A generated quiz: blanked-out text plus its answer key.
///
/// Produced atomically by one generation pass and replaced wholesale by
/// the next; never patched incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    /// The source text with every target occurrence replaced by its
    /// numbered blank marker
    pub text: String,
    /// One entry per distinct target, in ascending number order
    pub answers: Vec<AnswerEntry>,
}

impl QuizResult {
    /// Number of distinct blanked targets
    pub fn blank_count(&self) -> usize {
        self.answers.len()
    }
}

/// Generate a quiz from the current text and selection.
///
/// Returns None when the selection set is empty (the caller keeps any
/// prior quiz untouched). Numbering is assigned by first-appearance
/// offset in the text: walking occurrences left to right, each distinct
/// target gets the next number the first time it is seen, so the
/// numbering is independent of the order targets were picked in. Picked
/// targets that no longer occur in the text get no number and no answer
/// entry.
pub fn generate(text: &str, picks: &SelectionStore, markup: &Markup) -> Option<QuizResult> {
    if picks.is_empty() {
        return None;
    }
    let matcher = TargetMatcher::build(picks.iter())?;
    let spans = matcher.scan(text);

    let mut numbers: FxHashMap<String, u32> = FxHashMap::default();
    let mut answers: Vec<AnswerEntry> = Vec::with_capacity(picks.len());
    for span in &spans {
        let word = span.text(text);
        if !numbers.contains_key(word) {
            let number = answers.len() as u32 + 1;
            numbers.insert(word.to_string(), number);
            answers.push(AnswerEntry {
                number,
                word: word.to_string(),
            });
        }
    }

    // Every span's word was numbered above
    let quiz_text = splice(text, &spans, |matched| markup.blank(numbers[matched]));

    log::debug!(
        "generated quiz: {} occurrence(s), {} answer(s)",
        spans.len(),
        answers.len()
    );

    Some(QuizResult {
        text: quiz_text,
        answers,
    })
}
