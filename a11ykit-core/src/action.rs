//! User intents emitted by the widget UI.
use serde::{Deserialize, Serialize};

use crate::settings::CvdMode;

/// One button press or slider move, routed through
/// [`crate::A11yManager::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "camelCase")]
pub enum A11yAction {
    ToggleHighContrast,
    /// Font size in percent.
    SetTextSize(f64),
    /// Toolbar slider notch.
    SetTextStep(i32),
    SetScale(f64),
    /// Switch to `mode`, or back to no filter if `mode` is already active.
    ToggleCvd(CvdMode),
    ToggleTtsHover,
    ToggleEasyUsability,
    ReadPage,
    StopSpeech,
    Reset,
}

impl A11yAction {
    /// Whether the action can change persisted settings.
    #[must_use]
    pub const fn mutates_settings(self) -> bool {
        !matches!(self, Self::ReadPage | Self::StopSpeech)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_use_tagged_json() {
        let json = serde_json::to_string(&A11yAction::SetTextStep(4)).unwrap();
        assert_eq!(json, r#"{"action":"setTextStep","value":4}"#);

        let parsed: A11yAction =
            serde_json::from_str(r#"{"action":"toggleCvd","value":"general"}"#).unwrap();
        assert_eq!(parsed, A11yAction::ToggleCvd(CvdMode::General));

        let unit: A11yAction = serde_json::from_str(r#"{"action":"reset"}"#).unwrap();
        assert_eq!(unit, A11yAction::Reset);
    }

    #[test]
    fn speech_actions_leave_settings_alone() {
        assert!(!A11yAction::ReadPage.mutates_settings());
        assert!(!A11yAction::StopSpeech.mutates_settings());
        assert!(A11yAction::Reset.mutates_settings());
    }
}
