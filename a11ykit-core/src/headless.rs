//! In-memory adapters.
//!
//! `HeadlessPresentation` and `HeadlessSpeech` record what the manager asked
//! for instead of touching a page. They back the unit tests, the logic mode
//! of the tester and server-side rendering of the widget.
use smallvec::SmallVec;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use crate::presentation::{Effect, HoverHandler, HoverSubscription, Presentation, StyleProperty};
use crate::speech::SpeechEngine;
use crate::text::HoverTarget;

#[derive(Default)]
pub struct HeadlessPresentation {
    effects: SmallVec<[Effect; 4]>,
    styles: HashMap<StyleProperty, f64>,
    page_text: String,
    listeners: BTreeMap<u64, HoverHandler>,
    next_id: u64,
    attached: usize,
    detached: usize,
}

impl HeadlessPresentation {
    #[must_use]
    pub fn with_page_text(text: impl Into<String>) -> Self {
        Self {
            page_text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_active(&self, effect: Effect) -> bool {
        self.effects.contains(&effect)
    }

    #[must_use]
    pub fn active_effects(&self) -> Vec<Effect> {
        self.effects.to_vec()
    }

    #[must_use]
    pub fn style(&self, property: StyleProperty) -> Option<f64> {
        self.styles.get(&property).copied()
    }

    #[must_use]
    pub fn hover_listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Total attach and detach calls seen so far.
    #[must_use]
    pub const fn listener_churn(&self) -> (usize, usize) {
        (self.attached, self.detached)
    }

    /// Simulate the pointer entering `target`.
    pub fn hover(&self, target: &HoverTarget) {
        for handler in self.listeners.values() {
            handler(target.clone());
        }
    }
}

impl Presentation for HeadlessPresentation {
    fn set_effect(&mut self, effect: Effect, on: bool) {
        let present = self.effects.contains(&effect);
        if on && !present {
            self.effects.push(effect);
        } else if !on && present {
            self.effects.retain(|e| *e != effect);
        }
    }

    fn set_style(&mut self, property: StyleProperty, value: f64) {
        self.styles.insert(property, value);
    }

    fn page_text(&self) -> String {
        self.page_text.clone()
    }

    fn subscribe_hover(&mut self, handler: HoverHandler) -> HoverSubscription {
        self.next_id += 1;
        self.attached += 1;
        self.listeners.insert(self.next_id, handler);
        HoverSubscription::new(self.next_id)
    }

    fn unsubscribe_hover(&mut self, subscription: HoverSubscription) {
        if self.listeners.remove(&subscription.id()).is_some() {
            self.detached += 1;
        } else {
            log::warn!("detach requested for unknown hover listener {subscription:?}");
        }
    }
}

#[derive(Debug, Default)]
struct SpeechLog {
    unavailable: bool,
    playing: Option<String>,
    spoken: Vec<String>,
    cancels: usize,
}

/// Speech engine that remembers what it was asked to say.
///
/// Clones share one log, so a test can keep a handle while the manager owns
/// another.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSpeech {
    log: Rc<RefCell<SpeechLog>>,
}

impl HeadlessSpeech {
    /// Engine that reports speech synthesis as missing.
    #[must_use]
    pub fn unavailable() -> Self {
        let engine = Self::default();
        engine.log.borrow_mut().unavailable = true;
        engine
    }

    #[must_use]
    pub fn playing(&self) -> Option<String> {
        self.log.borrow().playing.clone()
    }

    #[must_use]
    pub fn spoken(&self) -> Vec<String> {
        self.log.borrow().spoken.clone()
    }

    #[must_use]
    pub fn cancel_count(&self) -> usize {
        self.log.borrow().cancels
    }

    /// Mark the current utterance as finished, as a real engine would.
    pub fn finish(&self) {
        self.log.borrow_mut().playing = None;
    }
}

impl SpeechEngine for HeadlessSpeech {
    fn is_available(&self) -> bool {
        !self.log.borrow().unavailable
    }

    fn play(&self, text: &str) {
        let mut log = self.log.borrow_mut();
        log.playing = Some(text.to_string());
        log.spoken.push(text.to_string());
    }

    fn cancel(&self) {
        let mut log = self.log.borrow_mut();
        log.playing = None;
        log.cancels += 1;
    }

    fn is_speaking(&self) -> bool {
        self.log.borrow().playing.is_some()
    }
}
