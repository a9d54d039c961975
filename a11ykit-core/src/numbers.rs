//! Numeric helpers for slider mappings and range clamping.

use num_traits::cast::cast;

use crate::constants::{TEXT_STEP_BASE_PCT, TEXT_STEP_INCREMENT_PCT, TEXT_STEP_MAX};

/// Clamp `value` into `[min, max]`, substituting `fallback` for NaN.
///
/// Infinities clamp to the matching bound like any other out-of-range input.
#[must_use]
pub fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        return fallback;
    }
    value.clamp(min, max)
}

/// Round a f64 and clamp it to the i32 range, returning 0 for NaN values.
#[must_use]
pub fn round_f64_to_i32(value: f64) -> i32 {
    if value.is_nan() {
        return 0;
    }
    let min = cast::<i32, f64>(i32::MIN).unwrap_or(f64::MIN);
    let max = cast::<i32, f64>(i32::MAX).unwrap_or(f64::MAX);
    cast::<f64, i32>(value.clamp(min, max).round()).unwrap_or(0)
}

/// Linear notch-to-percentage mapping of the toolbar slider.
///
/// Steps outside `0..=TEXT_STEP_MAX` are clamped first.
#[must_use]
pub fn percent_for_step(step: i32) -> f64 {
    let step = step.clamp(0, TEXT_STEP_MAX);
    f64::from(step).mul_add(TEXT_STEP_INCREMENT_PCT, TEXT_STEP_BASE_PCT)
}

/// Nearest slider notch for a percentage, used to position the slider thumb.
#[must_use]
pub fn step_for_percent(percent: f64) -> i32 {
    let raw = (percent - TEXT_STEP_BASE_PCT) / TEXT_STEP_INCREMENT_PCT;
    round_f64_to_i32(raw).clamp(0, TEXT_STEP_MAX)
}
