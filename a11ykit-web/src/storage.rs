//! `localStorage`-backed settings store.
use a11ykit_core::SettingsStorage;
use gloo::storage::{LocalStorage, Storage};

use crate::dom;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Web-specific settings storage using localStorage.
///
/// A disabled store reads nothing and drops writes; the toolbar variant and
/// pages that opt out of persistence use it.
#[derive(Debug, Clone, Copy)]
pub struct LocalSettingsStorage {
    enabled: bool,
}

impl LocalSettingsStorage {
    #[must_use]
    pub const fn new() -> Self {
        Self { enabled: true }
    }

    #[must_use]
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn raw() -> Result<web_sys::Storage, WebStorageError> {
        dom::window()
            .ok_or_else(|| WebStorageError::Storage("window unavailable".to_string()))?
            .local_storage()
            .map_err(|err| WebStorageError::Storage(dom::js_error_message(&err)))?
            .ok_or_else(|| WebStorageError::Storage("localStorage unavailable".to_string()))
    }
}

impl Default for LocalSettingsStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStorage for LocalSettingsStorage {
    type Error = WebStorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        if !self.enabled {
            return Ok(None);
        }
        Self::raw()?
            .get_item(key)
            .map_err(|err| WebStorageError::Storage(dom::js_error_message(&err)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        if !self.enabled {
            return Ok(());
        }
        Self::raw()?
            .set_item(key, value)
            .map_err(|err| WebStorageError::Storage(dom::js_error_message(&err)))
    }
}

/// Remove the stored settings entry.
pub fn clear(key: &str) {
    LocalStorage::delete(key);
}
