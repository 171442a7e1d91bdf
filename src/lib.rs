//! Mini-Cloze: a fill-in-the-blank quiz engine core
//!
//! This crate provides the transformation engine behind a cloze-quiz
//! editor:
//! - a selection store for the words/phrases picked as blanks
//! - a highlight (preview) view marking every picked occurrence
//! - quiz generation with deterministic blank numbering and an answer key
//!
//! The engine is pure state + string transforms with no host
//! dependencies; the UI feeds events in and renders the returned strings.

pub mod quiz;
pub mod render;
pub mod scan;
pub mod selection;
pub mod source;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmSession;

// Re-export primary types
pub use quiz::{AnswerEntry, QuizResult};
pub use render::Markup;
pub use scan::{MatchSpan, SpanList, TargetMatcher};
pub use selection::SelectionStore;
pub use source::SourceText;

/// Which derived view the UI is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Editing the text and picking targets; shows the highlight view
    #[default]
    Select,
    /// Showing the generated quiz, frozen until regeneration
    Quiz,
}

/// A UI event, applied to the session as one atomic step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The editor text changed (full replacement)
    TextEdited(String),
    /// The user selected a word/phrase to blank out
    WordPicked(String),
    /// The user clicked a highlighted occurrence; the payload is the
    /// wrapper's literal inner text
    HighlightClicked(String),
    /// All picks discarded
    PicksCleared,
    /// The generate button was pressed
    GeneratePressed,
    /// The UI switched between select and quiz view
    ModeSwitched(Mode),
}

/// Memoized highlight rendering keyed by input versions
struct HighlightCache {
    text_version: u64,
    picks_version: u64,
    rendered: String,
}

/// The main session state combining all components
pub struct Session {
    pub source: SourceText,
    pub picks: SelectionStore,
    pub mode: Mode,
    markup: Markup,
    last_quiz: Option<QuizResult>,
    highlight_cache: Option<HighlightCache>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create an empty session with default markup
    pub fn new() -> Self {
        Self::with_markup(Markup::default())
    }

    /// Create an empty session with custom output markup
    pub fn with_markup(markup: Markup) -> Self {
        Self {
            source: SourceText::new(),
            picks: SelectionStore::new(),
            mode: Mode::Select,
            markup,
            last_quiz: None,
            highlight_cache: None,
        }
    }

    /// Create a session with initial text content
    pub fn with_text(text: &str) -> Self {
        let mut session = Self::new();
        session.source = SourceText::from_text(text);
        session
    }

    /// Get the output markup in use
    pub fn markup(&self) -> &Markup {
        &self.markup
    }

    /// Replace the source text (editor change event). Returns true if
    /// the text actually changed.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        self.source.replace(text)
    }

    /// Pick a word/phrase as a blank target. Empty and whitespace-only
    /// input is ignored; re-picking is a no-op.
    pub fn pick(&mut self, raw: &str) -> bool {
        self.picks.add(raw)
    }

    /// Pick the word under a byte offset in the source text.
    ///
    /// Input-boundary helper for double-click selection; offsets on
    /// whitespace or punctuation pick nothing.
    pub fn pick_at(&mut self, byte_offset: usize) -> bool {
        match self.source.word_at(byte_offset) {
            Some(word) => self.picks.add(word),
            None => false,
        }
    }

    /// Remove a target entirely. A click on any one highlighted
    /// occurrence deselects every occurrence of that target.
    pub fn unpick(&mut self, payload: &str) -> bool {
        self.picks.remove(payload)
    }

    /// Discard all picks
    pub fn clear_picks(&mut self) {
        self.picks.clear();
    }

    /// Switch between select and quiz view
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Generate a quiz from the current text and picks.
    ///
    /// With an empty selection this is a no-op: the prior quiz (if any)
    /// is kept and the mode does not change. On success the new quiz
    /// replaces the old one wholesale, the mode switches to Quiz, and
    /// the picks are left standing so the quiz can be regenerated after
    /// further edits.
    pub fn generate(&mut self) -> bool {
        match quiz::generate(self.source.as_str(), &self.picks, &self.markup) {
            Some(result) => {
                self.last_quiz = Some(result);
                self.mode = Mode::Quiz;
                true
            }
            None => false,
        }
    }

    /// The last generated quiz, if any
    pub fn last_quiz(&self) -> Option<&QuizResult> {
        self.last_quiz.as_ref()
    }

    /// The answer key of the last generated quiz (empty if none)
    pub fn answer_key(&self) -> &[AnswerEntry] {
        self.last_quiz
            .as_ref()
            .map(|quiz| quiz.answers.as_slice())
            .unwrap_or(&[])
    }

    /// The string to render for the current mode.
    ///
    /// Select mode returns the highlight view, memoized on the source
    /// and selection versions and recomputed exactly when either
    /// changes. Quiz mode returns the frozen text of the last generated
    /// quiz, or the raw source if none was ever generated.
    pub fn view(&mut self) -> &str {
        match self.mode {
            Mode::Quiz => match &self.last_quiz {
                Some(quiz) => &quiz.text,
                None => self.source.as_str(),
            },
            Mode::Select => {
                let stale = self.highlight_cache.as_ref().map_or(true, |cache| {
                    cache.text_version != self.source.version()
                        || cache.picks_version != self.picks.version()
                });
                if stale {
                    let rendered =
                        render::highlight(self.source.as_str(), &self.picks, &self.markup);
                    self.highlight_cache = Some(HighlightCache {
                        text_version: self.source.version(),
                        picks_version: self.picks.version(),
                        rendered,
                    });
                }
                match &self.highlight_cache {
                    Some(cache) => &cache.rendered,
                    None => self.source.as_str(),
                }
            }
        }
    }

    /// Apply a UI event as one atomic transition
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::TextEdited(text) => {
                self.set_text(text);
            }
            InputEvent::WordPicked(word) => {
                self.pick(&word);
            }
            InputEvent::HighlightClicked(payload) => {
                self.unpick(&payload);
            }
            InputEvent::PicksCleared => self.clear_picks(),
            InputEvent::GeneratePressed => {
                self.generate();
            }
            InputEvent::ModeSwitched(mode) => self.set_mode(mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_session() {
        let mut session = Session::new();
        assert_eq!(session.view(), "");
        assert_eq!(session.mode, Mode::Select);
    }

    #[test]
    fn test_highlight_view_follows_picks() {
        let mut session = Session::with_text("cat cat dog");
        session.pick("cat");
        assert_eq!(session.view(), "<mark>cat</mark> <mark>cat</mark> dog");
    }

    #[test]
    fn test_click_deselects_every_occurrence() {
        let mut session = Session::with_text("cat cat dog");
        session.pick("cat");
        assert_eq!(session.view(), "<mark>cat</mark> <mark>cat</mark> dog");

        // A click on one highlighted occurrence removes the target, so
        // both occurrences un-highlight on the next render
        session.unpick("cat");
        assert_eq!(session.view(), "cat cat dog");
        assert!(session.picks.is_empty());
    }

    #[test]
    fn test_view_is_invalidated_by_text_change() {
        let mut session = Session::with_text("cat dog");
        session.pick("cat");
        assert_eq!(session.view(), "<mark>cat</mark> dog");

        session.set_text("dog cat");
        assert_eq!(session.view(), "dog <mark>cat</mark>");
    }

    #[test]
    fn test_view_is_invalidated_by_pick_change() {
        let mut session = Session::with_text("cat dog");
        session.pick("cat");
        assert_eq!(session.view(), "<mark>cat</mark> dog");

        session.pick("dog");
        assert_eq!(session.view(), "<mark>cat</mark> <mark>dog</mark>");
    }

    #[test]
    fn test_generate_switches_to_quiz_view() {
        let mut session = Session::with_text("cat cat dog");
        session.pick("cat");
        assert!(session.generate());
        assert_eq!(session.mode, Mode::Quiz);
        assert_eq!(session.view(), "(No.1) (No.1) dog");
        assert_eq!(session.answer_key().len(), 1);
        assert_eq!(session.answer_key()[0].word, "cat");
    }

    #[test]
    fn test_generate_with_empty_selection_is_a_noop() {
        let mut session = Session::with_text("cat dog");
        session.pick("cat");
        session.generate();
        let quiz = session.last_quiz().cloned();

        session.clear_picks();
        assert!(!session.generate());
        assert_eq!(session.last_quiz().cloned(), quiz);
    }

    #[test]
    fn test_quiz_view_is_frozen_until_regeneration() {
        let mut session = Session::with_text("cat dog");
        session.pick("cat");
        session.generate();
        assert_eq!(session.view(), "(No.1) dog");

        // Editing the text does not touch the generated quiz
        session.set_text("cat bird");
        assert_eq!(session.view(), "(No.1) dog");

        // Picks are left standing, so regeneration works from them
        assert!(session.generate());
        assert_eq!(session.view(), "(No.1) bird");
    }

    #[test]
    fn test_mode_switch_back_to_select_is_fresh() {
        let mut session = Session::with_text("cat dog");
        session.pick("cat");
        session.generate();

        session.set_text("dog cat");
        session.set_mode(Mode::Select);
        assert_eq!(session.view(), "dog <mark>cat</mark>");
    }

    #[test]
    fn test_quiz_mode_without_quiz_falls_back_to_source() {
        let mut session = Session::with_text("cat dog");
        session.set_mode(Mode::Quiz);
        assert_eq!(session.view(), "cat dog");
    }

    #[test]
    fn test_pick_at_offset() {
        let mut session = Session::with_text("The quick brown fox");
        assert!(session.pick_at(5));
        assert!(session.picks.contains("quick"));
        // Whitespace picks nothing
        assert!(!session.pick_at(3));
    }

    #[test]
    fn test_apply_events() {
        let mut session = Session::new();
        session.apply(InputEvent::TextEdited("cat cat dog".to_string()));
        session.apply(InputEvent::WordPicked("cat".to_string()));
        session.apply(InputEvent::GeneratePressed);
        assert_eq!(session.view(), "(No.1) (No.1) dog");

        session.apply(InputEvent::ModeSwitched(Mode::Select));
        session.apply(InputEvent::HighlightClicked("cat".to_string()));
        assert_eq!(session.view(), "cat cat dog");
    }
}
