use a11ykit_core::constants::SETTINGS_STORAGE_KEY;
use a11ykit_core::{A11yAction, CvdMode, Effect, StyleProperty, Variant};
use anyhow::Result;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, LogicCheck, ScenarioCtx, TestScenario, ensure};
use crate::logic::Harness;

const EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BrowserPlan {
    TextSizeClamp,
    CvdExclusive,
    ResetDefaults,
    HoverToggle,
    SpeechPreempt,
    PersistenceRoundtrip,
}

#[derive(Debug, Clone, Copy)]
pub struct CatalogScenario {
    pub key: &'static str,
    pub description: &'static str,
    check: LogicCheck,
    plan: BrowserPlan,
}

pub const CATALOG: [CatalogScenario; 6] = [
    CatalogScenario {
        key: "text-size-clamp",
        description: "Text size and slider steps stay inside 60%-200%",
        check: text_size_clamp,
        plan: BrowserPlan::TextSizeClamp,
    },
    CatalogScenario {
        key: "cvd-exclusive",
        description: "At most one colour vision filter is active",
        check: cvd_exclusive,
        plan: BrowserPlan::CvdExclusive,
    },
    CatalogScenario {
        key: "reset-defaults",
        description: "Reset reverts every effect and detaches hover speech",
        check: reset_defaults,
        plan: BrowserPlan::ResetDefaults,
    },
    CatalogScenario {
        key: "hover-idempotent",
        description: "Hover speech attaches one listener and detaches it cleanly",
        check: hover_idempotent,
        plan: BrowserPlan::HoverToggle,
    },
    CatalogScenario {
        key: "speech-preempt",
        description: "A new utterance cancels the one in flight",
        check: speech_preempt,
        plan: BrowserPlan::SpeechPreempt,
    },
    CatalogScenario {
        key: "persistence-roundtrip",
        description: "Panel settings survive a reload; toolbar settings do not",
        check: persistence_roundtrip,
        plan: BrowserPlan::PersistenceRoundtrip,
    },
];

#[must_use]
pub fn find_catalog_scenario(key: &str) -> Option<CatalogScenario> {
    CATALOG.iter().copied().find(|scenario| scenario.key == key)
}

fn font_size_is(harness: &Harness, expected: f64) -> Result<()> {
    let applied = harness
        .manager
        .presentation()
        .style(StyleProperty::FontScale)
        .unwrap_or(f64::NAN);
    let stored = harness.manager.settings().font_size;
    ensure(
        (applied - expected).abs() < EPSILON && (stored - expected).abs() < EPSILON,
        || format!("expected font size {expected}, stored {stored}, applied {applied}"),
    )
}

fn text_size_clamp() -> Result<()> {
    let mut harness = Harness::new(Variant::Panel);
    harness.manager.set_text_size(500.0);
    font_size_is(&harness, 200.0)?;
    harness.manager.set_text_size(10.0);
    font_size_is(&harness, 60.0)?;
    harness.manager.set_text_size(f64::NAN);
    font_size_is(&harness, 100.0)?;
    harness.manager.set_text_size_step(25);
    font_size_is(&harness, 200.0)?;
    harness.manager.set_text_size_step(-3);
    font_size_is(&harness, 80.0)?;
    harness.manager.set_text_size_step(9);
    font_size_is(&harness, 136.88)
}

fn cvd_exclusive() -> Result<()> {
    let mut harness = Harness::new(Variant::Toolbar);
    harness
        .manager
        .dispatch(A11yAction::ToggleCvd(CvdMode::RedGreen));
    harness
        .manager
        .dispatch(A11yAction::ToggleCvd(CvdMode::General));
    let page = harness.manager.presentation();
    ensure(
        page.is_active(Effect::CvdGeneral) && !page.is_active(Effect::CvdRedGreen),
        || format!("expected only the general filter, got {:?}", page.active_effects()),
    )?;

    harness
        .manager
        .dispatch(A11yAction::ToggleCvd(CvdMode::General));
    let page = harness.manager.presentation();
    ensure(
        !page.is_active(Effect::CvdGeneral) && !page.is_active(Effect::CvdRedGreen),
        || "toggling the active filter should clear it".to_string(),
    )?;
    ensure(harness.manager.settings().cvd_mode.is_none(), || {
        "cvd mode should be none".to_string()
    })
}

fn reset_defaults() -> Result<()> {
    for variant in [Variant::Toolbar, Variant::Panel] {
        let mut harness = Harness::new(variant);
        for action in [
            A11yAction::ToggleHighContrast,
            A11yAction::SetTextSize(180.0),
            A11yAction::SetScale(1.3),
            A11yAction::ToggleCvd(CvdMode::RedGreen),
            A11yAction::ToggleTtsHover,
            A11yAction::ToggleEasyUsability,
            A11yAction::ReadPage,
        ] {
            harness.manager.dispatch(action);
        }
        harness.manager.dispatch(A11yAction::Reset);

        let page = harness.manager.presentation();
        ensure(harness.manager.at_baseline(), || {
            format!("{variant:?} did not return to its baseline")
        })?;
        ensure(page.active_effects().is_empty(), || {
            format!("{variant:?} kept effects {:?}", page.active_effects())
        })?;
        ensure(page.hover_listener_count() == 0, || {
            format!("{variant:?} left a hover listener attached")
        })?;
        ensure(harness.speech.playing().is_none(), || {
            format!("{variant:?} kept speaking after reset")
        })?;
    }
    Ok(())
}

fn hover_idempotent() -> Result<()> {
    let mut harness = Harness::new(Variant::Panel);
    for _ in 0..3 {
        harness.manager.set_tts_hover(true);
    }
    let page = harness.manager.presentation();
    ensure(page.hover_listener_count() == 1, || {
        format!("expected one listener, found {}", page.hover_listener_count())
    })?;

    harness.manager.set_tts_hover(false);
    harness.manager.set_tts_hover(false);
    let churn = harness.manager.presentation().listener_churn();
    ensure(churn == (1, 1), || {
        format!("expected one attach and one detach, got {churn:?}")
    })
}

fn speech_preempt() -> Result<()> {
    let harness = Harness::new(Variant::Panel);
    harness.manager.speak("first");
    harness.manager.speak("second");
    ensure(
        harness.speech.playing().as_deref() == Some("second"),
        || format!("expected the latest utterance, got {:?}", harness.speech.playing()),
    )?;
    ensure(harness.speech.cancel_count() >= 2, || {
        "each utterance should cancel the previous one".to_string()
    })?;
    harness.speech.finish();
    let current = harness.manager.speaker().current();
    ensure(current.is_none(), || {
        format!("finished utterance still reported as {current:?}")
    })?;
    harness.manager.speak("third");
    harness.manager.stop_speech();
    ensure(harness.speech.playing().is_none(), || {
        "stop should silence speech".to_string()
    })?;

    let muted = Harness::muted(Variant::Panel);
    muted.manager.read_page();
    ensure(muted.speech.spoken().is_empty(), || {
        "an unavailable engine must stay silent".to_string()
    })
}

fn persistence_roundtrip() -> Result<()> {
    let mut panel = Harness::new(Variant::Panel);
    panel.manager.dispatch(A11yAction::ToggleHighContrast);
    panel.manager.dispatch(A11yAction::SetTextSize(150.0));
    let expected = panel.manager.settings().clone();
    let panel = panel.reload();
    ensure(panel.manager.settings() == &expected, || {
        format!("panel reloaded as {:?}", panel.manager.settings())
    })?;
    ensure(
        panel
            .manager
            .presentation()
            .is_active(Effect::HighContrast),
        || "reloaded panel did not re-apply high contrast".to_string(),
    )?;

    let mut toolbar = Harness::new(Variant::Toolbar);
    toolbar.manager.dispatch(A11yAction::ToggleHighContrast);
    let stored = toolbar.storage.get(SETTINGS_STORAGE_KEY);
    ensure(stored.is_none(), || {
        format!("toolbar wrote settings {stored:?}")
    })?;
    let toolbar = toolbar.reload();
    ensure(toolbar.manager.at_baseline(), || {
        "toolbar should start from its baseline after reload".to_string()
    })
}

async fn browser_text_size(driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
    ctx.open(driver).await?;
    ctx.bridge.dispatch(A11yAction::SetTextSize(500.0)).await?;
    let state = ctx.bridge.state().await?;
    let size = state.require_settings()?.font_size;
    ensure((size - 200.0).abs() < EPSILON, || {
        format!("font size {size} after requesting 500%")
    })?;
    let css = ctx.bridge.root_style("font-size").await?;
    ensure(css == "200%", || format!("html font-size is {css:?}"))?;

    ctx.bridge.dispatch(A11yAction::SetTextStep(-4)).await?;
    let size = ctx.bridge.state().await?.require_settings()?.font_size;
    ensure((size - 80.0).abs() < EPSILON, || {
        format!("font size {size} after stepping below zero")
    })
}

async fn browser_cvd(driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
    ctx.open(driver).await?;
    ctx.bridge
        .dispatch(A11yAction::ToggleCvd(CvdMode::RedGreen))
        .await?;
    ctx.bridge
        .dispatch(A11yAction::ToggleCvd(CvdMode::General))
        .await?;
    let state = ctx.bridge.state().await?;
    ensure(
        state.has_class("a11y-cvd-general") && !state.has_class("a11y-cvd-redgreen"),
        || format!("root classes {:?}", state.root_classes),
    )
}

async fn browser_reset(driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
    let initial = ctx.open(driver).await?;
    for action in [
        A11yAction::ToggleHighContrast,
        A11yAction::ToggleEasyUsability,
        A11yAction::ToggleCvd(CvdMode::General),
        A11yAction::ToggleTtsHover,
    ] {
        ctx.bridge.dispatch(action).await?;
    }
    ctx.bridge.dispatch(A11yAction::Reset).await?;
    let state = ctx.bridge.state().await?;
    ensure(state.root_classes.is_empty(), || {
        format!("classes left after reset: {:?}", state.root_classes)
    })?;
    ensure(!state.hover_attached, || {
        "hover listener survived reset".to_string()
    })?;
    ensure(state.settings == initial.settings, || {
        format!("settings after reset {:?}", state.settings)
    })
}

async fn browser_hover(driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
    ctx.open(driver).await?;
    ctx.bridge.dispatch(A11yAction::ToggleTtsHover).await?;
    ensure(ctx.bridge.state().await?.hover_attached, || {
        "hover listener not attached".to_string()
    })?;
    ctx.bridge.dispatch(A11yAction::ToggleTtsHover).await?;
    ensure(!ctx.bridge.state().await?.hover_attached, || {
        "hover listener not detached".to_string()
    })
}

async fn browser_speech(driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
    let state = ctx.open(driver).await?;
    if !state.speech_available {
        log::info!("speech synthesis unavailable; checking silence only");
        ctx.bridge.dispatch(A11yAction::ReadPage).await?;
        let speaking = ctx.bridge.state().await?.speaking;
        return ensure(speaking.is_none(), || format!("speaking {speaking:?}"));
    }
    ctx.bridge.dispatch(A11yAction::ReadPage).await?;
    ensure(ctx.bridge.state().await?.speaking.is_some(), || {
        "read page did not start speaking".to_string()
    })?;
    ctx.bridge.dispatch(A11yAction::StopSpeech).await?;
    ensure(ctx.bridge.state().await?.speaking.is_none(), || {
        "stop did not silence speech".to_string()
    })
}

async fn browser_persistence(driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
    ctx.open(driver).await?;
    ctx.bridge.clear_storage().await?;
    let fresh = ctx.reload(driver).await?;
    ctx.bridge.dispatch(A11yAction::ToggleHighContrast).await?;
    let reloaded = ctx.reload(driver).await?;
    let high_contrast = reloaded.require_settings()?.high_contrast;
    let outcome = ensure(high_contrast == fresh.persists, || {
        format!(
            "high contrast {high_contrast} after reload, persistence {}",
            fresh.persists
        )
    });
    ctx.bridge.clear_storage().await?;
    outcome
}

#[async_trait::async_trait]
impl BrowserScenario for CatalogScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        match self.plan {
            BrowserPlan::TextSizeClamp => browser_text_size(driver, ctx).await,
            BrowserPlan::CvdExclusive => browser_cvd(driver, ctx).await,
            BrowserPlan::ResetDefaults => browser_reset(driver, ctx).await,
            BrowserPlan::HoverToggle => browser_hover(driver, ctx).await,
            BrowserPlan::SpeechPreempt => browser_speech(driver, ctx).await,
            BrowserPlan::PersistenceRoundtrip => browser_persistence(driver, ctx).await,
        }
    }
}

impl CombinedScenario for CatalogScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(self.key, self.check))
    }
}
