//! Settings persistence seam.
use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::rc::Rc;

use crate::constants::LOG_TARGET_STORAGE;
use crate::settings::AccessibilitySettings;

/// Trait for abstracting the single key-value entry the panel persists to.
/// Platform-specific implementations should provide this
pub trait SettingsStorage {
    type Error: std::error::Error + 'static;

    /// Read the raw value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Replace the raw value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// Storage that never persists anything; used by the toolbar variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStorage;

impl SettingsStorage for NullStorage {
    type Error = Infallible;

    fn read(&self, _key: &str) -> Result<Option<String>, Self::Error> {
        Ok(None)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Shared in-memory map. Clones see the same entries.
///
/// A [`Self::disabled`] view shares the map but reads nothing and drops
/// writes, like the browser store of a widget that does not persist.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    enabled: bool,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self {
            entries: Rc::default(),
            enabled: true,
        }
    }
}

impl MemoryStorage {
    /// Inert view over the same entries.
    #[must_use]
    pub fn disabled(&self) -> Self {
        Self {
            entries: Rc::clone(&self.entries),
            enabled: false,
        }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl SettingsStorage for MemoryStorage {
    type Error = Infallible;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(if self.enabled { self.get(key) } else { None })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        if self.enabled {
            self.insert(key, value);
        }
        Ok(())
    }
}

/// Load persisted settings, falling back to defaults on a missing entry,
/// a read failure or a corrupt blob.
#[must_use]
pub fn load_settings<S: SettingsStorage>(storage: &S, key: &str) -> AccessibilitySettings {
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return AccessibilitySettings::default(),
        Err(err) => {
            log::warn!(target: LOG_TARGET_STORAGE, "failed to read {key}: {err}");
            return AccessibilitySettings::default();
        }
    };
    AccessibilitySettings::from_json(&raw).unwrap_or_else(|err| {
        log::warn!(target: LOG_TARGET_STORAGE, "discarding corrupt settings under {key}: {err}");
        AccessibilitySettings::default()
    })
}

/// Persist `settings`. Failures are logged and swallowed.
pub fn save_settings<S: SettingsStorage>(storage: &S, key: &str, settings: &AccessibilitySettings) {
    let json = match settings.to_json() {
        Ok(json) => json,
        Err(err) => {
            log::warn!(target: LOG_TARGET_STORAGE, "failed to encode settings: {err}");
            return;
        }
    };
    if let Err(err) = storage.write(key, &json) {
        log::warn!(target: LOG_TARGET_STORAGE, "failed to write {key}: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::CvdMode;

    const KEY: &str = "a11y.settings";

    #[derive(Debug, thiserror::Error)]
    #[error("quota exceeded")]
    struct QuotaError;

    struct BrokenStorage;

    impl SettingsStorage for BrokenStorage {
        type Error = QuotaError;

        fn read(&self, _key: &str) -> Result<Option<String>, Self::Error> {
            Err(QuotaError)
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), Self::Error> {
            Err(QuotaError)
        }
    }

    #[test]
    fn missing_entry_yields_defaults() {
        let storage = MemoryStorage::default();
        assert!(load_settings(&storage, KEY).is_default());
    }

    #[test]
    fn corrupt_entry_yields_defaults() {
        let storage = MemoryStorage::default();
        storage.insert(KEY, "{not json");
        assert!(load_settings(&storage, KEY).is_default());
        storage.insert(KEY, r#"{"cvdMode":"sepia"}"#);
        assert!(load_settings(&storage, KEY).is_default());
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let storage = MemoryStorage::default();
        let settings = AccessibilitySettings {
            high_contrast: true,
            font_size: 140.0,
            scale: 1.2,
            cvd_mode: CvdMode::General,
            tts_hover: false,
            easy_usability: true,
        };
        save_settings(&storage, KEY, &settings);
        assert_eq!(load_settings(&storage, KEY), settings);
    }

    #[test]
    fn failing_storage_degrades_quietly() {
        save_settings(&BrokenStorage, KEY, &AccessibilitySettings::default());
        assert!(load_settings(&BrokenStorage, KEY).is_default());
    }

    #[test]
    fn null_storage_never_remembers() {
        let storage = NullStorage;
        let settings = AccessibilitySettings {
            high_contrast: true,
            ..AccessibilitySettings::default()
        };
        save_settings(&storage, KEY, &settings);
        assert!(load_settings(&storage, KEY).is_default());
    }

    #[test]
    fn disabled_view_ignores_shared_entries() {
        let storage = MemoryStorage::default();
        storage.insert(KEY, r#"{"highContrast":true}"#);
        let view = storage.disabled();
        assert!(!view.is_enabled());
        assert!(load_settings(&view, KEY).is_default());

        save_settings(&view, KEY, &AccessibilitySettings::default());
        assert_eq!(storage.get(KEY).as_deref(), Some(r#"{"highContrast":true}"#));
    }
}
