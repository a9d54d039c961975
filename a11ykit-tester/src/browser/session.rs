use std::str::FromStr;
use std::time::Duration;
use thirtyfour::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserKind {
    Chrome,
    Edge,
    Firefox,
    Safari,
}

impl BrowserKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Chrome => "chrome",
            Self::Edge => "edge",
            Self::Firefox => "firefox",
            Self::Safari => "safari",
        }
    }

    /// Local driver endpoint used when no hub is configured.
    #[must_use]
    pub const fn default_driver_url(self) -> &'static str {
        match self {
            Self::Chrome => "http://localhost:9515",
            Self::Edge => "http://localhost:17556",
            Self::Firefox => "http://localhost:4444",
            Self::Safari => "http://localhost:4445",
        }
    }
}

impl FromStr for BrowserKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chrome" => Ok(Self::Chrome),
            "edge" => Ok(Self::Edge),
            "firefox" => Ok(Self::Firefox),
            "safari" => Ok(Self::Safari),
            other => Err(format!("unknown browser {other}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BrowserConfig {
    pub headless: bool,
    pub implicit_wait_secs: u64,
    pub remote_hub: Option<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            implicit_wait_secs: 3,
            remote_hub: None,
        }
    }
}

impl BrowserConfig {
    #[must_use]
    pub fn driver_url(&self, kind: BrowserKind) -> String {
        self.remote_hub
            .clone()
            .unwrap_or_else(|| kind.default_driver_url().to_string())
    }
}

pub async fn new_session(kind: BrowserKind, cfg: &BrowserConfig) -> WebDriverResult<WebDriver> {
    let url = cfg.driver_url(kind);
    let driver = match kind {
        BrowserKind::Chrome => {
            let mut caps = DesiredCapabilities::chrome();
            if cfg.headless {
                caps.set_headless()?;
            }
            caps.add_arg("--autoplay-policy=no-user-gesture-required")?;
            WebDriver::new(&url, caps).await?
        }
        BrowserKind::Edge => {
            let mut caps = DesiredCapabilities::edge();
            if cfg.headless {
                caps.set_headless()?;
            }
            WebDriver::new(&url, caps).await?
        }
        BrowserKind::Firefox => {
            let mut caps = DesiredCapabilities::firefox();
            if cfg.headless {
                caps.set_headless()?;
            }
            WebDriver::new(&url, caps).await?
        }
        BrowserKind::Safari => WebDriver::new(&url, DesiredCapabilities::safari()).await?,
    };

    driver
        .set_implicit_wait_timeout(Duration::from_secs(cfg.implicit_wait_secs))
        .await?;
    log::debug!("{} session ready at {url}", kind.label());
    Ok(driver)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_names_parse_case_insensitively() {
        assert_eq!("Chrome".parse::<BrowserKind>(), Ok(BrowserKind::Chrome));
        assert_eq!(" firefox ".parse::<BrowserKind>(), Ok(BrowserKind::Firefox));
        assert!("netscape".parse::<BrowserKind>().is_err());
    }

    #[test]
    fn hub_overrides_local_driver() {
        let local = BrowserConfig::default();
        assert_eq!(local.driver_url(BrowserKind::Edge), "http://localhost:17556");
        let grid = BrowserConfig {
            remote_hub: Some("http://grid:4444/wd/hub".to_string()),
            ..BrowserConfig::default()
        };
        assert_eq!(grid.driver_url(BrowserKind::Safari), "http://grid:4444/wd/hub");
    }
}
