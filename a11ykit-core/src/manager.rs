//! Accessibility state manager.
//!
//! Owns the [`AccessibilitySettings`], keeps its invariants and pushes every
//! change to the presentation adapter. All calls happen on the UI thread.
use crate::action::A11yAction;
use crate::constants::{LOG_TARGET_MANAGER, SETTINGS_STORAGE_KEY};
use crate::numbers::percent_for_step;
use crate::presentation::{Effect, HoverSubscription, Presentation, StyleProperty};
use crate::settings::{AccessibilitySettings, CvdMode};
use crate::speech::{SpeechEngine, Speaker};
use crate::storage::{NullStorage, SettingsStorage, load_settings, save_settings};
use crate::text::hover_utterance;

pub struct A11yManager<P, E, S = NullStorage>
where
    P: Presentation,
    E: SpeechEngine + 'static,
    S: SettingsStorage,
{
    settings: AccessibilitySettings,
    baseline: AccessibilitySettings,
    presentation: P,
    speaker: Speaker<E>,
    storage: S,
    storage_key: String,
    hover: Option<HoverSubscription>,
}

impl<P, E> A11yManager<P, E, NullStorage>
where
    P: Presentation,
    E: SpeechEngine + 'static,
{
    /// Manager with default settings that never persists.
    pub fn new(presentation: P, engine: E) -> Self {
        Self::from_parts(
            presentation,
            engine,
            NullStorage,
            SETTINGS_STORAGE_KEY,
            AccessibilitySettings::default(),
        )
    }
}

impl<P, E, S> A11yManager<P, E, S>
where
    P: Presentation,
    E: SpeechEngine + 'static,
    S: SettingsStorage,
{
    /// Manager seeded from `storage[key]`, writing back on every change.
    ///
    /// Nothing is applied to the page until [`Self::apply_all`] runs.
    pub fn with_storage(presentation: P, engine: E, storage: S, key: &str) -> Self {
        let settings = load_settings(&storage, key);
        Self::from_parts(presentation, engine, storage, key, settings)
    }

    /// Replace the state [`Self::reset`] returns to, and start from it.
    ///
    /// The toolbar starts its slider on the midpoint notch rather than 100%.
    #[must_use]
    pub fn with_baseline(mut self, baseline: AccessibilitySettings) -> Self {
        self.settings = baseline.clone();
        self.baseline = baseline;
        self
    }

    fn from_parts(
        presentation: P,
        engine: E,
        storage: S,
        key: &str,
        settings: AccessibilitySettings,
    ) -> Self {
        Self {
            settings,
            baseline: AccessibilitySettings::default(),
            presentation,
            speaker: Speaker::new(engine),
            storage,
            storage_key: key.to_string(),
            hover: None,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &AccessibilitySettings {
        &self.settings
    }

    #[must_use]
    pub const fn presentation(&self) -> &P {
        &self.presentation
    }

    #[must_use]
    pub const fn speaker(&self) -> &Speaker<E> {
        &self.speaker
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub const fn baseline(&self) -> &AccessibilitySettings {
        &self.baseline
    }

    /// Whether the current state equals the reset target.
    #[must_use]
    pub fn at_baseline(&self) -> bool {
        self.settings == self.baseline
    }

    #[must_use]
    pub const fn hover_attached(&self) -> bool {
        self.hover.is_some()
    }

    /// Push the complete current state to the page.
    pub fn apply_all(&mut self) {
        let s = self.settings.clone();
        self.presentation
            .set_effect(Effect::HighContrast, s.high_contrast);
        self.presentation
            .set_style(StyleProperty::FontScale, s.font_size);
        self.presentation.set_style(StyleProperty::PageScale, s.scale);
        self.apply_cvd(s.cvd_mode);
        self.presentation
            .set_effect(Effect::EasyUsability, s.easy_usability);
        if s.tts_hover {
            self.attach_hover();
        } else {
            self.detach_hover();
        }
    }

    pub fn set_high_contrast(&mut self, on: bool) {
        log::debug!(target: LOG_TARGET_MANAGER, "high contrast -> {on}");
        self.settings.high_contrast = on;
        self.presentation.set_effect(Effect::HighContrast, on);
        self.persist();
    }

    /// Set the root font size in percent, clamped to the supported range.
    pub fn set_text_size(&mut self, percent: f64) {
        let percent = AccessibilitySettings::clamp_font_size(percent);
        log::debug!(target: LOG_TARGET_MANAGER, "font size -> {percent}%");
        self.settings.font_size = percent;
        self.presentation
            .set_style(StyleProperty::FontScale, percent);
        self.persist();
    }

    /// Set the font size from a toolbar slider notch.
    pub fn set_text_size_step(&mut self, step: i32) {
        self.set_text_size(percent_for_step(step));
    }

    pub fn set_scale(&mut self, factor: f64) {
        let factor = AccessibilitySettings::clamp_scale(factor);
        log::debug!(target: LOG_TARGET_MANAGER, "page scale -> {factor}");
        self.settings.scale = factor;
        self.presentation.set_style(StyleProperty::PageScale, factor);
        self.persist();
    }

    /// Select a CVD filter. Selecting one mode clears the other.
    pub fn set_cvd_mode(&mut self, mode: CvdMode) {
        log::debug!(target: LOG_TARGET_MANAGER, "cvd mode -> {mode:?}");
        self.settings.cvd_mode = mode;
        self.apply_cvd(mode);
        self.persist();
    }

    fn apply_cvd(&mut self, mode: CvdMode) {
        let wanted = mode.effect();
        for effect in [Effect::CvdRedGreen, Effect::CvdGeneral] {
            self.presentation
                .set_effect(effect, wanted == Some(effect));
        }
    }

    pub fn set_easy_usability(&mut self, on: bool) {
        log::debug!(target: LOG_TARGET_MANAGER, "easy usability -> {on}");
        self.settings.easy_usability = on;
        self.presentation.set_effect(Effect::EasyUsability, on);
        self.persist();
    }

    /// Read hovered text aloud. Enabling twice keeps a single listener;
    /// disabling detaches it and silences speech.
    pub fn set_tts_hover(&mut self, on: bool) {
        log::debug!(target: LOG_TARGET_MANAGER, "tts hover -> {on}");
        self.settings.tts_hover = on;
        if on {
            self.attach_hover();
        } else {
            self.detach_hover();
            self.speaker.stop();
        }
        self.persist();
    }

    fn attach_hover(&mut self) {
        if self.hover.is_some() {
            return;
        }
        let speaker = self.speaker.clone();
        let subscription = self.presentation.subscribe_hover(Box::new(move |target| {
            if let Some(text) = hover_utterance(&target) {
                speaker.speak(&text);
            }
        }));
        self.hover = Some(subscription);
    }

    fn detach_hover(&mut self) {
        if let Some(subscription) = self.hover.take() {
            self.presentation.unsubscribe_hover(subscription);
        }
    }

    /// Speak `text`, preempting anything already playing.
    pub fn speak(&self, text: &str) {
        self.speaker.speak(text);
    }

    pub fn stop_speech(&self) {
        self.speaker.stop();
    }

    /// Speak the whole visible page as one utterance.
    pub fn read_page(&self) {
        self.speaker.stop();
        let text = self.presentation.page_text();
        self.speaker.speak(&text);
    }

    /// Restore the baseline, revert every effect, detach hover and silence
    /// speech.
    pub fn reset(&mut self) {
        log::debug!(target: LOG_TARGET_MANAGER, "reset");
        self.settings = self.baseline.clone();
        self.apply_all();
        self.speaker.stop();
        self.persist();
    }

    /// Route a UI action to the matching operation.
    pub fn dispatch(&mut self, action: A11yAction) {
        match action {
            A11yAction::ToggleHighContrast => self.set_high_contrast(!self.settings.high_contrast),
            A11yAction::SetTextSize(percent) => self.set_text_size(percent),
            A11yAction::SetTextStep(step) => self.set_text_size_step(step),
            A11yAction::SetScale(factor) => self.set_scale(factor),
            A11yAction::ToggleCvd(mode) => {
                let next = if self.settings.cvd_mode == mode {
                    CvdMode::None
                } else {
                    mode
                };
                self.set_cvd_mode(next);
            }
            A11yAction::ToggleTtsHover => self.set_tts_hover(!self.settings.tts_hover),
            A11yAction::ToggleEasyUsability => {
                self.set_easy_usability(!self.settings.easy_usability);
            }
            A11yAction::ReadPage => self.read_page(),
            A11yAction::StopSpeech => self.stop_speech(),
            A11yAction::Reset => self.reset(),
        }
    }

    fn persist(&self) {
        save_settings(&self.storage, &self.storage_key, &self.settings);
    }
}

impl<P, E, S> Drop for A11yManager<P, E, S>
where
    P: Presentation,
    E: SpeechEngine + 'static,
    S: SettingsStorage,
{
    fn drop(&mut self) {
        self.detach_hover();
        self.speaker.stop();
    }
}
