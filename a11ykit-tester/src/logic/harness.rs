use a11ykit_core::{
    A11yManager, HeadlessPresentation, HeadlessSpeech, MemoryStorage, Variant, WidgetConfig,
};

pub type HeadlessManager = A11yManager<HeadlessPresentation, HeadlessSpeech, MemoryStorage>;

const SAMPLE_PAGE: &str = "Welcome\nOpening hours are nine to five.\nContact us";

/// A mounted widget wired to in-memory adapters.
///
/// `storage` is the shared backing map; the manager writes to it only when
/// the variant persists, as in the browser.
pub struct Harness {
    pub manager: HeadlessManager,
    pub speech: HeadlessSpeech,
    pub storage: MemoryStorage,
    pub variant: Variant,
}

impl Harness {
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self::with_storage(variant, MemoryStorage::default())
    }

    #[must_use]
    pub fn muted(variant: Variant) -> Self {
        Self::build(variant, MemoryStorage::default(), HeadlessSpeech::unavailable())
    }

    #[must_use]
    pub fn with_storage(variant: Variant, storage: MemoryStorage) -> Self {
        Self::build(variant, storage, HeadlessSpeech::default())
    }

    fn build(variant: Variant, storage: MemoryStorage, speech: HeadlessSpeech) -> Self {
        let config = WidgetConfig {
            variant,
            ..WidgetConfig::default_config()
        };
        let backing = if config.persists() {
            storage.clone()
        } else {
            storage.disabled()
        };
        let mut manager = A11yManager::with_storage(
            HeadlessPresentation::with_page_text(SAMPLE_PAGE),
            speech.clone(),
            backing,
            &config.storage_key,
        );
        if variant == Variant::Toolbar {
            manager = manager.with_baseline(variant.baseline());
        }
        manager.apply_all();
        Self {
            manager,
            speech,
            storage,
            variant,
        }
    }

    /// Tear the widget down and mount a fresh one over the same storage.
    #[must_use]
    pub fn reload(self) -> Self {
        let Self {
            manager,
            storage,
            variant,
            ..
        } = self;
        drop(manager);
        Self::with_storage(variant, storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use a11ykit_core::A11yAction;
    use a11ykit_core::constants::SETTINGS_STORAGE_KEY;

    #[test]
    fn reload_keeps_panel_settings() {
        let mut harness = Harness::new(Variant::Panel);
        harness.manager.dispatch(A11yAction::ToggleEasyUsability);
        let harness = harness.reload();
        assert!(harness.manager.settings().easy_usability);
    }

    #[test]
    fn toolbar_writes_nothing() {
        let mut harness = Harness::new(Variant::Toolbar);
        harness.manager.dispatch(A11yAction::ToggleHighContrast);
        assert!(harness.storage.get(SETTINGS_STORAGE_KEY).is_none());
    }

    #[test]
    fn toolbar_mounts_on_its_baseline() {
        let harness = Harness::new(Variant::Toolbar);
        assert!(harness.manager.at_baseline());
        assert!((harness.manager.settings().font_size - 136.88).abs() < 1e-9);
    }
}
