//! Web Speech API engine.
use a11ykit_core::SpeechEngine;
use wasm_bindgen::JsValue;
use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance};

use crate::dom;

/// `window.speechSynthesis`, or nothing when the browser lacks it.
#[derive(Debug, Clone, Default)]
pub struct WebSpeech {
    synth: Option<SpeechSynthesis>,
}

impl WebSpeech {
    /// Check the current window for speech synthesis support.
    #[must_use]
    pub fn detect() -> Self {
        let synth = dom::window().and_then(|win| {
            let present = js_sys::Reflect::has(&win, &JsValue::from_str("speechSynthesis"))
                .unwrap_or(false);
            if present {
                win.speech_synthesis().ok()
            } else {
                None
            }
        });
        if synth.is_none() {
            log::info!("speech synthesis unavailable; text-to-speech disabled");
        }
        Self { synth }
    }

    /// Engine that never speaks, for pages rendered outside a browser.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { synth: None }
    }
}

impl SpeechEngine for WebSpeech {
    fn is_available(&self) -> bool {
        self.synth.is_some()
    }

    fn play(&self, text: &str) {
        let Some(synth) = self.synth.as_ref() else {
            return;
        };
        match SpeechSynthesisUtterance::new_with_text(text) {
            Ok(utterance) => synth.speak(&utterance),
            Err(err) => dom::console_warn(&format!(
                "a11ykit: could not create utterance: {}",
                dom::js_error_message(&err)
            )),
        }
    }

    fn cancel(&self) {
        if let Some(synth) = self.synth.as_ref() {
            synth.cancel();
        }
    }

    fn is_speaking(&self) -> bool {
        self.synth
            .as_ref()
            .is_some_and(|synth| synth.speaking() || synth.pending())
    }
}
