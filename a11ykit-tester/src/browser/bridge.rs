use a11ykit_core::{A11yAction, AccessibilitySettings, Variant};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use thirtyfour::prelude::*;

/// Snapshot returned by `window.__a11yTest.state()`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BridgeState {
    pub mounted: bool,
    #[serde(default)]
    pub variant: Variant,
    #[serde(default)]
    pub persists: bool,
    pub settings: Option<AccessibilitySettings>,
    pub hover_attached: bool,
    pub speech_available: bool,
    pub speaking: Option<String>,
    #[serde(default)]
    pub root_classes: Vec<String>,
}

impl BridgeState {
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.root_classes.iter().any(|c| c == class)
    }

    /// Settings of a mounted widget.
    ///
    /// # Errors
    /// Fails when the widget has not mounted yet.
    pub fn require_settings(&self) -> Result<&AccessibilitySettings> {
        self.settings
            .as_ref()
            .context("widget reported no settings; is it mounted?")
    }
}

#[derive(Debug, Clone)]
pub struct TestBridge<'a> {
    driver: &'a WebDriver,
}

impl<'a> TestBridge<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    pub async fn ensure_available(&self) -> Result<()> {
        let result = self
            .driver
            .execute("return !!window.__a11yTest", vec![])
            .await?;
        if !result.json().as_bool().unwrap_or(false) {
            bail!("__a11yTest is not available. Did you pass ?test=1 to the page?");
        }
        Ok(())
    }

    pub async fn state(&self) -> Result<BridgeState> {
        let result = self
            .driver
            .execute("return window.__a11yTest.state()", vec![])
            .await?;
        let raw = result
            .json()
            .as_str()
            .context("bridge state() did not return a string")?
            .to_string();
        serde_json::from_str(&raw).context("parsing bridge state")
    }

    pub async fn dispatch(&self, action: A11yAction) -> Result<()> {
        let payload = serde_json::to_string(&action)?;
        let result = self
            .driver
            .execute(
                "return window.__a11yTest.dispatch(arguments[0])",
                vec![payload.clone().into()],
            )
            .await?;
        if !result.json().as_bool().unwrap_or(false) {
            bail!("bridge rejected action {payload}");
        }
        Ok(())
    }

    pub async fn clear_storage(&self) -> Result<()> {
        self.driver
            .execute("window.__a11yTest.clearStorage()", vec![])
            .await?;
        Ok(())
    }

    /// Inline style value on `<html>`, e.g. `font-size`.
    pub async fn root_style(&self, property: &str) -> Result<String> {
        let result = self
            .driver
            .execute(
                "return document.documentElement.style.getPropertyValue(arguments[0])",
                vec![property.into()],
            )
            .await?;
        Ok(result.json().as_str().unwrap_or_default().to_string())
    }
}
