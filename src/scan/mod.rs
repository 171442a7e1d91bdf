//! Single-pass target matching
//!
//! All picked targets are compiled into one alternation of escaped
//! literals and the text is scanned once, producing a non-overlapping
//! span list. Replacing span-by-span avoids the double-substitution
//! problem of sequential per-target replacement when one target is a
//! substring of another.

use regex::Regex;
use smallvec::SmallVec;

/// A matched target occurrence as a byte range into the scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    /// Slice the matched text out of the scanned source
    pub fn text<'t>(&self, source: &'t str) -> &'t str {
        &source[self.start..self.end]
    }
}

/// Spans found in one scan, leftmost-first
pub type SpanList = SmallVec<[MatchSpan; 8]>;

/// Compiled matcher over the current target set
pub struct TargetMatcher {
    pattern: Regex,
}

impl TargetMatcher {
    /// Compile a matcher for the given targets.
    ///
    /// Every target is escaped so regex metacharacters match literally.
    /// Branches are ordered longest-first (ties broken lexically), so at
    /// any position the longest picked target wins; the overall scan is
    /// leftmost-first and never yields overlapping spans.
    ///
    /// Returns None when no non-empty targets are given, or if the
    /// alternation exceeds the regex engine's compiled-size limit.
    pub fn build<'a>(targets: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        let mut words: Vec<&str> = targets.into_iter().filter(|w| !w.is_empty()).collect();
        if words.is_empty() {
            return None;
        }
        words.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        words.dedup();

        let alternation = words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");

        match Regex::new(&alternation) {
            Ok(pattern) => Some(Self { pattern }),
            Err(err) => {
                log::debug!("target pattern rejected: {err}");
                None
            }
        }
    }

    /// Scan the text once, returning every target occurrence
    pub fn scan(&self, text: &str) -> SpanList {
        let spans: SpanList = self
            .pattern
            .find_iter(text)
            .map(|m| MatchSpan {
                start: m.start(),
                end: m.end(),
            })
            .collect();
        log::trace!("scan found {} span(s)", spans.len());
        spans
    }
}
