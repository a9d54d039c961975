use a11ykit_core::{A11yAction, Effect, Variant};
use anyhow::{Context, Result};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario, ensure};
use crate::logic::Harness;

pub struct Smoke;

const CONTRAST_CLASS: &str = "a11y-high-contrast";

fn smoke_logic() -> Result<()> {
    for variant in [Variant::Toolbar, Variant::Panel] {
        let mut harness = Harness::new(variant);
        ensure(harness.manager.presentation().active_effects().is_empty(), || {
            format!("{variant:?} mounted with effects applied")
        })?;
        harness.manager.dispatch(A11yAction::ToggleHighContrast);
        ensure(
            harness
                .manager
                .presentation()
                .is_active(Effect::HighContrast),
            || format!("{variant:?} did not apply high contrast"),
        )?;
    }
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for Smoke {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let state = ctx.open(driver).await?;
        ctx.bridge.dispatch(A11yAction::Reset).await?;
        if state.variant == Variant::Panel {
            driver
                .find(By::Id("a11y-panel-toggle"))
                .await
                .context("finding panel toggle")?
                .click()
                .await?;
        }

        let contrast = driver
            .find(By::Id("a11y-contrast-btn"))
            .await
            .context("finding contrast button")?;
        contrast.click().await?;
        let pressed = contrast.attr("aria-pressed").await?.unwrap_or_default();
        let after = ctx.bridge.state().await?;
        if ctx.verbose {
            println!("   root classes after click: {:?}", after.root_classes);
        }
        ensure(after.has_class(CONTRAST_CLASS), || {
            format!("missing {CONTRAST_CLASS}: {:?}", after.root_classes)
        })?;
        ensure(pressed == "true", || format!("aria-pressed is {pressed:?}"))?;

        contrast.click().await?;
        let restored = ctx.bridge.state().await?;
        ensure(!restored.has_class(CONTRAST_CLASS), || {
            "second click did not remove high contrast".to_string()
        })
    }
}

impl CombinedScenario for Smoke {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("smoke", smoke_logic))
    }
}
