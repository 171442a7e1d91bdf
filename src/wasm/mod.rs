//! WASM bindings for the quiz session

use crate::{InputEvent, Mode, Session};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM-exposed session wrapper
#[wasm_bindgen]
pub struct WasmSession {
    session: Session,
}

#[wasm_bindgen]
impl WasmSession {
    /// Create a new empty session
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: Session::new(),
        }
    }

    /// Create a session with initial text
    #[wasm_bindgen(js_name = withText)]
    pub fn with_text(text: &str) -> Self {
        Self {
            session: Session::with_text(text),
        }
    }

    /// Replace the source text (textarea change event)
    #[wasm_bindgen(js_name = setText)]
    pub fn set_text(&mut self, text: &str) {
        self.session.apply(InputEvent::TextEdited(text.to_string()));
    }

    /// Get the raw source text
    #[wasm_bindgen(js_name = getText)]
    pub fn get_text(&self) -> String {
        self.session.source.as_str().to_string()
    }

    /// Pick a selected word/phrase as a blank target
    pub fn pick(&mut self, raw: &str) {
        self.session.apply(InputEvent::WordPicked(raw.to_string()));
    }

    /// Pick the word under a byte offset (double-click selection)
    #[wasm_bindgen(js_name = pickAt)]
    pub fn pick_at(&mut self, byte_offset: usize) -> bool {
        self.session.pick_at(byte_offset)
    }

    /// Handle a click on a highlight wrapper; the payload is the
    /// element's literal inner text
    #[wasm_bindgen(js_name = clickWord)]
    pub fn click_word(&mut self, payload: &str) {
        self.session
            .apply(InputEvent::HighlightClicked(payload.to_string()));
    }

    /// Discard all picks
    #[wasm_bindgen(js_name = clearPicks)]
    pub fn clear_picks(&mut self) {
        self.session.apply(InputEvent::PicksCleared);
    }

    /// Number of picked targets
    #[wasm_bindgen(js_name = pickCount)]
    pub fn pick_count(&self) -> usize {
        self.session.picks.len()
    }

    /// Generate a quiz from the current text and picks. Returns false
    /// (and changes nothing) when no targets are picked.
    pub fn generate(&mut self) -> bool {
        self.session.generate()
    }

    /// Switch between select and quiz view
    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&mut self, quiz_mode: bool) {
        let mode = if quiz_mode { Mode::Quiz } else { Mode::Select };
        self.session.apply(InputEvent::ModeSwitched(mode));
    }

    /// The string to render for the current mode
    pub fn view(&mut self) -> String {
        self.session.view().to_string()
    }

    /// The answer key of the last generated quiz as a JSON array of
    /// `{number, word}` entries
    #[wasm_bindgen(js_name = answerKey)]
    pub fn answer_key(&self) -> String {
        let entries: Vec<AnswerEntryData> = self
            .session
            .answer_key()
            .iter()
            .map(|entry| AnswerEntryData {
                number: entry.number,
                word: entry.word.clone(),
            })
            .collect();
        serde_json::to_string(&entries).unwrap_or_else(|_| "[]".to_string())
    }
}

impl Default for WasmSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable answer entry for JS
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerEntryData {
    pub number: u32,
    pub word: String,
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_session_round_trip() {
        let mut session = WasmSession::with_text("cat cat dog");
        session.pick("cat");
        assert!(session.generate());
        assert_eq!(session.view(), "(No.1) (No.1) dog");
        assert_eq!(session.answer_key(), r#"[{"number":1,"word":"cat"}]"#);
    }
}
