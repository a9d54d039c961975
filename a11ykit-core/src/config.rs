//! Widget configuration
use serde::{Deserialize, Serialize};

use crate::constants::{SETTINGS_STORAGE_KEY, TEXT_STEP_DEFAULT};
use crate::numbers::percent_for_step;
use crate::settings::AccessibilitySettings;

const DEFAULT_WIDGET_DATA: &str = include_str!("../../a11ykit-web/static/assets/data/widget.json");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which UI the widget mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Always-visible toolbar with a 20-notch text slider; nothing persists.
    Toolbar,
    /// Floating button that opens a settings panel; settings persist.
    #[default]
    Panel,
}

impl Variant {
    /// Settings the widget starts from and resets to.
    #[must_use]
    pub fn baseline(self) -> AccessibilitySettings {
        match self {
            Self::Toolbar => AccessibilitySettings {
                font_size: percent_for_step(TEXT_STEP_DEFAULT),
                ..AccessibilitySettings::default()
            },
            Self::Panel => AccessibilitySettings::default(),
        }
    }
}

/// Screen corner the widget is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopRight,
    TopLeft,
    #[default]
    BottomRight,
    BottomLeft,
}

impl Position {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::TopRight => "a11y-pos-top-right",
            Self::TopLeft => "a11y-pos-top-left",
            Self::BottomRight => "a11y-pos-bottom-right",
            Self::BottomLeft => "a11y-pos-bottom-left",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    #[serde(default)]
    pub variant: Variant,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default = "default_label")]
    pub label: String,
    #[serde(default = "default_true")]
    pub persist: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            storage_key: default_storage_key(),
            position: Position::default(),
            label: default_label(),
            persist: true,
        }
    }
}

impl WidgetConfig {
    /// Parse a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or names an unknown variant.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_WIDGET_DATA).unwrap_or_default()
    }

    #[must_use]
    pub fn default_config() -> Self {
        Self::load_from_static()
    }

    /// Whether settings should be written to storage. The toolbar never
    /// persists regardless of the `persist` flag.
    #[must_use]
    pub const fn persists(&self) -> bool {
        self.persist && matches!(self.variant, Variant::Panel)
    }
}

fn default_storage_key() -> String {
    SETTINGS_STORAGE_KEY.to_string()
}

fn default_label() -> String {
    "Accessibility Toolbar".to_string()
}

const fn default_true() -> bool {
    true
}
