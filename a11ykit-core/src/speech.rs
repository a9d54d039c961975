//! Speech gate: at most one utterance in flight, newest request wins.
use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::LOG_TARGET_SPEECH;

/// Platform speech synthesis.
///
/// Methods take `&self` because engines are shared between the manager and
/// hover listeners; implementations use interior mutability where needed.
pub trait SpeechEngine {
    /// Whether the platform can synthesize speech at all.
    fn is_available(&self) -> bool;

    /// Start speaking `text`. Fire and forget.
    fn play(&self, text: &str);

    /// Stop whatever is playing. Must be safe to call when idle.
    fn cancel(&self);

    /// Whether an utterance is queued or still playing.
    fn is_speaking(&self) -> bool;
}

struct SpeakerInner<E> {
    engine: E,
    current: RefCell<Option<String>>,
}

/// Cloneable handle around a [`SpeechEngine`] that enforces last-write-wins.
pub struct Speaker<E: SpeechEngine> {
    inner: Rc<SpeakerInner<E>>,
}

impl<E: SpeechEngine> Clone for Speaker<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E: SpeechEngine> Speaker<E> {
    pub fn new(engine: E) -> Self {
        Self {
            inner: Rc::new(SpeakerInner {
                engine,
                current: RefCell::new(None),
            }),
        }
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.inner.engine.is_available()
    }

    /// Preempt any current utterance and play `text`.
    ///
    /// Silently does nothing beyond the cancel when speech is unavailable or
    /// the text is blank.
    pub fn speak(&self, text: &str) {
        self.stop();
        if !self.inner.engine.is_available() {
            log::debug!(target: LOG_TARGET_SPEECH, "speech unavailable, dropping utterance");
            return;
        }
        if text.trim().is_empty() {
            return;
        }
        self.inner.engine.play(text);
        *self.inner.current.borrow_mut() = Some(text.to_string());
    }

    /// Cancel the current utterance. Idempotent.
    pub fn stop(&self) {
        if self.inner.engine.is_available() {
            self.inner.engine.cancel();
        }
        self.inner.current.borrow_mut().take();
    }

    /// Text of the utterance still in flight. Cleared by [`Self::stop`] and
    /// once the engine finishes on its own.
    #[must_use]
    pub fn current(&self) -> Option<String> {
        if !self.inner.engine.is_speaking() {
            self.inner.current.borrow_mut().take();
        }
        self.inner.current.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessSpeech;

    #[test]
    fn new_utterance_preempts_previous() {
        let engine = HeadlessSpeech::default();
        let speaker = Speaker::new(engine.clone());
        speaker.speak("a");
        speaker.speak("b");
        assert_eq!(engine.playing().as_deref(), Some("b"));
        assert_eq!(engine.spoken(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(speaker.current().as_deref(), Some("b"));
    }

    #[test]
    fn unavailable_engine_is_silent() {
        let engine = HeadlessSpeech::unavailable();
        let speaker = Speaker::new(engine.clone());
        speaker.speak("hello");
        speaker.stop();
        assert!(engine.playing().is_none());
        assert!(engine.spoken().is_empty());
        assert_eq!(engine.cancel_count(), 0);
        assert!(speaker.current().is_none());
    }

    #[test]
    fn stop_is_idempotent() {
        let engine = HeadlessSpeech::default();
        let speaker = Speaker::new(engine.clone());
        speaker.speak("one");
        speaker.stop();
        speaker.stop();
        assert!(engine.playing().is_none());
        assert!(speaker.current().is_none());
    }

    #[test]
    fn blank_text_only_cancels() {
        let engine = HeadlessSpeech::default();
        let speaker = Speaker::new(engine.clone());
        speaker.speak("first");
        speaker.speak("   ");
        assert!(engine.playing().is_none());
        assert_eq!(engine.spoken(), vec!["first".to_string()]);
    }

    #[test]
    fn clones_share_the_gate() {
        let engine = HeadlessSpeech::default();
        let speaker = Speaker::new(engine.clone());
        let hover_side = speaker.clone();
        speaker.speak("page");
        hover_side.speak("button");
        assert_eq!(speaker.current().as_deref(), Some("button"));
        assert_eq!(engine.playing().as_deref(), Some("button"));
    }

    #[test]
    fn finished_utterance_is_no_longer_current() {
        let engine = HeadlessSpeech::default();
        let speaker = Speaker::new(engine.clone());
        speaker.speak("short");
        assert_eq!(speaker.current().as_deref(), Some("short"));
        engine.finish();
        assert!(speaker.current().is_none());
        assert_eq!(engine.cancel_count(), 1);
    }
}
