use a11ykit_core::{
    A11yAction, A11yManager, AccessibilitySettings, CvdMode, Effect, HeadlessPresentation,
    HeadlessSpeech, HoverTarget, MemoryStorage, StyleProperty, WidgetConfig, load_settings,
};

type Manager<S = a11ykit_core::NullStorage> = A11yManager<HeadlessPresentation, HeadlessSpeech, S>;

fn fresh() -> (Manager, HeadlessSpeech) {
    let speech = HeadlessSpeech::default();
    let page = HeadlessPresentation::with_page_text("Headline\nBody copy");
    (A11yManager::new(page, speech.clone()), speech)
}

fn font_size(m: &Manager) -> f64 {
    m.presentation()
        .style(StyleProperty::FontScale)
        .unwrap_or(f64::NAN)
}

const EVERY_ACTION: [A11yAction; 12] = [
    A11yAction::ToggleHighContrast,
    A11yAction::SetTextSize(250.0),
    A11yAction::SetTextStep(12),
    A11yAction::SetScale(1.4),
    A11yAction::ToggleCvd(CvdMode::RedGreen),
    A11yAction::ToggleCvd(CvdMode::General),
    A11yAction::ToggleTtsHover,
    A11yAction::ToggleEasyUsability,
    A11yAction::ReadPage,
    A11yAction::ToggleTtsHover,
    A11yAction::ToggleTtsHover,
    A11yAction::StopSpeech,
];

#[test]
fn text_steps_clamp_to_nearest_bound() {
    let (mut m, _) = fresh();
    for step in [-100, -1, i32::MIN] {
        m.set_text_size_step(step);
        assert!((font_size(&m) - 80.0).abs() < 1e-9, "step {step}");
    }
    for step in [20, 99, i32::MAX] {
        m.set_text_size_step(step);
        assert!((font_size(&m) - 200.0).abs() < 1e-9, "step {step}");
    }
}

#[test]
fn percentages_clamp_to_nearest_bound() {
    let (mut m, _) = fresh();
    for pct in [-5.0, 0.0, 59.9, f64::NEG_INFINITY] {
        m.set_text_size(pct);
        assert!((font_size(&m) - 60.0).abs() < f64::EPSILON, "pct {pct}");
    }
    for pct in [200.1, 1_000.0, f64::INFINITY] {
        m.set_text_size(pct);
        assert!((font_size(&m) - 200.0).abs() < f64::EPSILON, "pct {pct}");
    }
    m.set_text_size(f64::NAN);
    assert!((font_size(&m) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn cvd_switch_never_leaves_both_filters_on() {
    let (mut m, _) = fresh();
    for (first, second) in [
        (CvdMode::RedGreen, CvdMode::General),
        (CvdMode::General, CvdMode::RedGreen),
    ] {
        m.set_cvd_mode(first);
        m.set_cvd_mode(second);
        assert_eq!(m.settings().cvd_mode, second);
        let filters: Vec<Effect> = m
            .presentation()
            .active_effects()
            .into_iter()
            .filter(|e| matches!(e, Effect::CvdRedGreen | Effect::CvdGeneral))
            .collect();
        assert_eq!(filters, vec![second.effect().unwrap()]);
    }
}

#[test]
fn reset_after_any_prefix_of_actions_restores_defaults() {
    for len in 0..=EVERY_ACTION.len() {
        let (mut m, speech) = fresh();
        for action in &EVERY_ACTION[..len] {
            m.dispatch(*action);
        }
        m.reset();
        assert!(m.settings().is_default(), "after {len} actions");
        assert!(speech.playing().is_none(), "after {len} actions");
        assert_eq!(m.presentation().hover_listener_count(), 0);
        assert!(m.presentation().active_effects().is_empty());
    }
}

#[test]
fn hover_listener_pairs_attach_with_detach() {
    let (mut m, _) = fresh();
    m.set_tts_hover(true);
    m.set_tts_hover(true);
    m.set_tts_hover(false);
    m.set_tts_hover(false);
    m.set_tts_hover(true);
    m.reset();
    assert_eq!(m.presentation().listener_churn(), (2, 2));
}

#[test]
fn latest_utterance_wins() {
    let (mut m, speech) = fresh();
    m.speak("a");
    m.speak("b");
    assert_eq!(speech.playing().as_deref(), Some("b"));

    m.set_tts_hover(true);
    m.presentation().hover(&HoverTarget::element("hovered link"));
    assert_eq!(speech.playing().as_deref(), Some("hovered link"));
    m.read_page();
    assert_eq!(speech.playing().as_deref(), Some("Headline\nBody copy"));
}

#[test]
fn missing_speech_support_is_silent() {
    let speech = HeadlessSpeech::unavailable();
    let mut m = A11yManager::new(HeadlessPresentation::default(), speech.clone());
    m.set_tts_hover(true);
    m.presentation().hover(&HoverTarget::element("text"));
    m.read_page();
    m.speak("hello");
    m.stop_speech();
    assert!(speech.spoken().is_empty());
    assert!(m.speaker().current().is_none());
}

#[test]
fn panel_settings_survive_a_reload() {
    let cfg = WidgetConfig::default();
    let storage = MemoryStorage::default();
    {
        let mut m: Manager<MemoryStorage> = A11yManager::with_storage(
            HeadlessPresentation::default(),
            HeadlessSpeech::default(),
            storage.clone(),
            &cfg.storage_key,
        );
        m.dispatch(A11yAction::ToggleHighContrast);
        m.dispatch(A11yAction::SetScale(1.25));
        m.dispatch(A11yAction::ToggleCvd(CvdMode::RedGreen));
    }
    let stored = load_settings(&storage, &cfg.storage_key);
    assert_eq!(
        stored,
        AccessibilitySettings {
            high_contrast: true,
            scale: 1.25,
            cvd_mode: CvdMode::RedGreen,
            ..AccessibilitySettings::default()
        }
    );

    let mut reloaded: Manager<MemoryStorage> = A11yManager::with_storage(
        HeadlessPresentation::default(),
        HeadlessSpeech::default(),
        storage,
        &cfg.storage_key,
    );
    reloaded.apply_all();
    assert!(reloaded.presentation().is_active(Effect::HighContrast));
    assert!(reloaded.presentation().is_active(Effect::CvdRedGreen));
    assert_eq!(
        reloaded.presentation().style(StyleProperty::PageScale),
        Some(1.25)
    );
}

#[test]
fn documented_blob_round_trips() {
    let json = r#"{"highContrast":false,"fontSize":100,"scale":1,"easyUsability":false}"#;
    let storage = MemoryStorage::default();
    storage.insert("a11y.settings", json);
    let loaded = load_settings(&storage, "a11y.settings");
    let again = AccessibilitySettings::from_json(&loaded.to_json().unwrap()).unwrap();
    assert_eq!(loaded, again);
    assert!(!again.high_contrast);
    assert!((again.font_size - 100.0).abs() < f64::EPSILON);
    assert!((again.scale - 1.0).abs() < f64::EPSILON);
    assert!(!again.easy_usability);
}
