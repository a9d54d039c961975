//! The accessibility settings record and its invariants.
use serde::{Deserialize, Serialize};

use crate::constants::{
    FONT_SIZE_DEFAULT_PCT, FONT_SIZE_MAX_PCT, FONT_SIZE_MIN_PCT, SCALE_DEFAULT, SCALE_MAX,
    SCALE_MIN,
};
use crate::numbers::clamp_or;
use crate::presentation::Effect;

/// Color-vision-deficiency filter selection. Only one can be active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CvdMode {
    #[default]
    None,
    RedGreen,
    General,
}

impl CvdMode {
    /// Filter effect backing this mode, if any.
    #[must_use]
    pub const fn effect(self) -> Option<Effect> {
        match self {
            Self::None => None,
            Self::RedGreen => Some(Effect::CvdRedGreen),
            Self::General => Some(Effect::CvdGeneral),
        }
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

/// Current toggle state of the widget.
///
/// Serialized with camelCase keys; fields missing from a stored blob take
/// their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessibilitySettings {
    pub high_contrast: bool,
    /// Root font size as a percentage of the page default.
    pub font_size: f64,
    /// Page zoom factor.
    pub scale: f64,
    pub cvd_mode: CvdMode,
    pub tts_hover: bool,
    pub easy_usability: bool,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            high_contrast: false,
            font_size: FONT_SIZE_DEFAULT_PCT,
            scale: SCALE_DEFAULT,
            cvd_mode: CvdMode::None,
            tts_hover: false,
            easy_usability: false,
        }
    }
}

impl AccessibilitySettings {
    /// Clamp a requested font size into the supported percentage range.
    #[must_use]
    pub fn clamp_font_size(percent: f64) -> f64 {
        clamp_or(
            percent,
            FONT_SIZE_MIN_PCT,
            FONT_SIZE_MAX_PCT,
            FONT_SIZE_DEFAULT_PCT,
        )
    }

    /// Clamp a requested page scale into the supported range.
    #[must_use]
    pub fn clamp_scale(factor: f64) -> f64 {
        clamp_or(factor, SCALE_MIN, SCALE_MAX, SCALE_DEFAULT)
    }

    /// Copy with every numeric field forced back into range.
    ///
    /// Applied to blobs read from storage, which may have been edited by hand
    /// or written by an older build.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.font_size = Self::clamp_font_size(self.font_size);
        self.scale = Self::clamp_scale(self.scale);
        self
    }

    /// Whether every field matches the defaults.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Parse a persisted JSON blob.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob is not valid JSON for this record.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Serialize to the persisted JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_state() {
        let settings = AccessibilitySettings::default();
        assert!(!settings.high_contrast);
        assert!((settings.font_size - 100.0).abs() < f64::EPSILON);
        assert!((settings.scale - 1.0).abs() < f64::EPSILON);
        assert_eq!(settings.cvd_mode, CvdMode::None);
        assert!(!settings.tts_hover);
        assert!(!settings.easy_usability);
        assert!(settings.is_default());
    }

    #[test]
    fn partial_blob_round_trips() {
        let json = r#"{"highContrast":false,"fontSize":100,"scale":1,"easyUsability":false}"#;
        let parsed = AccessibilitySettings::from_json(json).unwrap();
        assert_eq!(parsed, AccessibilitySettings::default());

        let written = parsed.to_json().unwrap();
        let reparsed = AccessibilitySettings::from_json(&written).unwrap();
        assert_eq!(parsed, reparsed);
    }

    #[test]
    fn serialized_keys_are_camel_case() {
        let settings = AccessibilitySettings {
            cvd_mode: CvdMode::RedGreen,
            tts_hover: true,
            ..AccessibilitySettings::default()
        };
        let json = settings.to_json().unwrap();
        assert!(json.contains("\"highContrast\""));
        assert!(json.contains("\"fontSize\""));
        assert!(json.contains("\"cvdMode\":\"redGreen\""));
        assert!(json.contains("\"ttsHover\":true"));
    }

    #[test]
    fn sanitized_clamps_stored_numbers() {
        let json = r#"{"fontSize":900,"scale":0.1}"#;
        let parsed = AccessibilitySettings::from_json(json).unwrap();
        assert!((parsed.font_size - 200.0).abs() < f64::EPSILON);
        assert!((parsed.scale - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn cvd_modes_map_to_filter_effects() {
        assert_eq!(CvdMode::None.effect(), None);
        assert_eq!(CvdMode::RedGreen.effect(), Some(Effect::CvdRedGreen));
        assert_eq!(CvdMode::General.effect(), Some(Effect::CvdGeneral));
    }
}
