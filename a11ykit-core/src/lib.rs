//! a11ykit core
//!
//! Platform-agnostic state management for the a11ykit accessibility widget.
//! This crate owns the toggle state and its rules; page effects, speech and
//! storage are reached through the traits in [`presentation`], [`speech`] and
//! [`storage`].

pub mod action;
pub mod config;
pub mod constants;
pub mod headless;
pub mod manager;
pub mod numbers;
pub mod presentation;
pub mod settings;
pub mod speech;
pub mod storage;
pub mod text;

// Re-export commonly used types
pub use action::A11yAction;
pub use config::{ConfigError, Position, Variant, WidgetConfig};
pub use headless::{HeadlessPresentation, HeadlessSpeech};
pub use manager::A11yManager;
pub use numbers::{percent_for_step, step_for_percent};
pub use presentation::{Effect, HoverHandler, HoverSubscription, Presentation, StyleProperty};
pub use settings::{AccessibilitySettings, CvdMode};
pub use speech::{SpeechEngine, Speaker};
pub use storage::{MemoryStorage, NullStorage, SettingsStorage, load_settings, save_settings};
pub use text::{HoverTarget, NodeKind, hover_utterance, normalize_text};
