use anyhow::{Result, bail};
use std::time::Duration;
use thirtyfour::prelude::*;

use crate::browser::{BridgeState, TestBridge};

pub mod catalog;
pub mod smoke;

use catalog::find_catalog_scenario;

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub bridge: TestBridge<'a>,
    pub verbose: bool,
}

impl ScenarioCtx<'_> {
    /// Load the page and wait for the widget to mount.
    pub async fn open(&self, driver: &WebDriver) -> Result<BridgeState> {
        driver.goto(&self.base_url).await?;
        self.wait_for_mount().await
    }

    /// Reload the page and wait for the widget to mount again.
    pub async fn reload(&self, driver: &WebDriver) -> Result<BridgeState> {
        driver.refresh().await?;
        self.wait_for_mount().await
    }

    async fn wait_for_mount(&self) -> Result<BridgeState> {
        for _ in 0..MOUNT_POLLS {
            if self.bridge.ensure_available().await.is_ok() {
                let state = self.bridge.state().await?;
                if state.mounted {
                    return Ok(state);
                }
            }
            tokio::time::sleep(MOUNT_POLL_INTERVAL).await;
        }
        bail!("widget did not mount at {}", self.base_url)
    }
}

const MOUNT_POLLS: usize = 50;
const MOUNT_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub type LogicCheck = fn() -> Result<()>;

// Logic test scenario
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub check: LogicCheck,
}

impl TestScenario {
    #[must_use]
    pub fn new(name: impl Into<String>, check: LogicCheck) -> Self {
        Self {
            name: name.into(),
            check,
        }
    }
}

// Browser test scenario
#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

// Combined scenario that can run both logic and browser tests
pub trait CombinedScenario: BrowserScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario>;
}

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::Smoke)),
        other => find_catalog_scenario(other)
            .map(|scenario| Box::new(scenario) as Box<dyn CombinedScenario + Send + Sync>),
    }
}

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    let mut entries = vec![("smoke", "Mount the widget and toggle high contrast by clicking")];
    entries.extend(
        catalog::CATALOG
            .iter()
            .map(|scenario| (scenario.key, scenario.description)),
    );
    entries
}

/// Every registered scenario key, used to expand `--scenarios all`.
#[must_use]
pub fn all_scenario_keys() -> Vec<String> {
    list_scenarios()
        .into_iter()
        .map(|(key, _)| key.to_string())
        .collect()
}

pub(crate) fn ensure(condition: bool, message: impl FnOnce() -> String) -> Result<()> {
    if condition {
        Ok(())
    } else {
        bail!(message())
    }
}
