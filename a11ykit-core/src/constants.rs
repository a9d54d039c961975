//! Ranges, defaults and fixed names shared by every a11ykit surface.
//!
//! The slider mapping and clamp bounds live here so the toolbar, the panel
//! and the persisted form all agree on them.

/// Key of the single persisted settings entry.
pub const SETTINGS_STORAGE_KEY: &str = "a11y.settings";

// Text size -----------------------------------------------------------------
pub const FONT_SIZE_MIN_PCT: f64 = 60.0;
pub const FONT_SIZE_MAX_PCT: f64 = 200.0;
pub const FONT_SIZE_DEFAULT_PCT: f64 = 100.0;

/// Number of notches on the toolbar text-size slider (`0..=TEXT_STEP_MAX`).
pub const TEXT_STEP_MAX: i32 = 19;
pub const TEXT_STEP_DEFAULT: i32 = 9;
/// Percentage at notch zero.
pub const TEXT_STEP_BASE_PCT: f64 = 80.0;
/// Percentage added per notch.
pub const TEXT_STEP_INCREMENT_PCT: f64 = 6.32;

// Page scale ----------------------------------------------------------------
pub const SCALE_MIN: f64 = 0.8;
pub const SCALE_MAX: f64 = 1.5;
pub const SCALE_DEFAULT: f64 = 1.0;

// Logging targets -----------------------------------------------------------
pub(crate) const LOG_TARGET_MANAGER: &str = "a11ykit::manager";
pub(crate) const LOG_TARGET_STORAGE: &str = "a11ykit::storage";
pub(crate) const LOG_TARGET_SPEECH: &str = "a11ykit::speech";
