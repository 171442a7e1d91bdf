//! Source text owned by the engine
//!
//! The UI replaces the text wholesale on every editor change; the engine
//! treats it as opaque Unicode.

use unicode_segmentation::UnicodeSegmentation;

/// The editable source text with change tracking
#[derive(Debug, Clone, Default)]
pub struct SourceText {
    text: String,
    /// Monotonic version counter, bumped on every actual change
    version: u64,
}

impl SourceText {
    /// Create an empty source text
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source text with initial content
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            version: 0,
        }
    }

    /// Get the current version
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Get the full text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Get total text length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the text is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the whole text. Returns true if the content changed.
    ///
    /// Writing identical content is not a change and does not bump the
    /// version, so derived-view caches stay valid.
    pub fn replace(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.text {
            return false;
        }
        self.text = text;
        self.version += 1;
        true
    }

    /// Find the word containing the given byte offset.
    ///
    /// Used by the input boundary to turn a click/double-click position
    /// into a selectable word. Offsets that fall on whitespace or
    /// punctuation yield None.
    pub fn word_at(&self, byte_offset: usize) -> Option<&str> {
        self.text
            .unicode_word_indices()
            .find(|(start, word)| *start <= byte_offset && byte_offset < start + word.len())
            .map(|(_, word)| word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_source() {
        let source = SourceText::new();
        assert_eq!(source.len(), 0);
        assert!(source.is_empty());
        assert_eq!(source.version(), 0);
    }

    #[test]
    fn test_replace_bumps_version() {
        let mut source = SourceText::from_text("Hello");
        assert!(source.replace("Hello World"));
        assert_eq!(source.version(), 1);
        assert_eq!(source.as_str(), "Hello World");
    }

    #[test]
    fn test_replace_identical_is_not_a_change() {
        let mut source = SourceText::from_text("Hello");
        assert!(!source.replace("Hello"));
        assert_eq!(source.version(), 0);
    }

    #[test]
    fn test_word_at() {
        let source = SourceText::from_text("The quick brown fox");
        assert_eq!(source.word_at(0), Some("The"));
        assert_eq!(source.word_at(5), Some("quick"));
        assert_eq!(source.word_at(18), Some("fox"));
        // Offset on the space between words
        assert_eq!(source.word_at(3), None);
        // Past the end
        assert_eq!(source.word_at(100), None);
    }

    #[test]
    fn test_word_at_unicode() {
        let source = SourceText::from_text("café crème");
        assert_eq!(source.word_at(0), Some("café"));
        assert_eq!(source.word_at(6), Some("crème"));
    }
}
