use anyhow::{Context, Result};
use chrono::Utc;
use std::{fs, path::Path};
use thirtyfour::prelude::*;

pub fn artifacts_dir(base: &str, browser: &str, scenario: &str) -> String {
    let ts = Utc::now().format("%Y%m%dT%H%M%S");
    format!("{base}/{browser}/{scenario}/{ts}")
}

/// Save a screenshot, the DOM, the bridge state and the error chain for a
/// failed browser scenario.
pub async fn capture_artifacts(driver: &WebDriver, dir: &str, err: &anyhow::Error) -> Result<()> {
    let screenshot = driver.screenshot_as_png().await.ok();
    let source = driver.source().await.ok();
    let state = driver
        .execute(
            "return window.__a11yTest && window.__a11yTest.state && window.__a11yTest.state()",
            vec![],
        )
        .await
        .ok()
        .and_then(|ret| ret.json().as_str().map(str::to_string));

    write_artifact_files(
        Path::new(dir),
        screenshot.as_deref(),
        source.as_deref(),
        state.as_deref(),
        &format!("{err:#}"),
    )
}

fn write_artifact_files(
    dir: &Path,
    screenshot: Option<&[u8]>,
    source: Option<&str>,
    state: Option<&str>,
    error_chain: &str,
) -> Result<()> {
    fs::create_dir_all(dir).context("creating artifacts dir")?;

    if let Some(png) = screenshot {
        let _ = fs::write(dir.join("screenshot.png"), png);
    }
    if let Some(src) = source {
        let _ = fs::write(dir.join("dom.html"), src);
    }
    if let Some(raw) = state {
        let pretty = serde_json::from_str::<serde_json::Value>(raw)
            .and_then(|v| serde_json::to_string_pretty(&v))
            .unwrap_or_else(|_| raw.to_string());
        let _ = fs::write(dir.join("state.json"), pretty);
    }
    let _ = fs::write(dir.join("error.txt"), error_chain);

    Ok(())
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        assert_eq!(
            split_csv(" cvd-exclusive, ,reset-defaults "),
            vec!["cvd-exclusive", "reset-defaults"]
        );
    }

    #[test]
    fn artifacts_dir_includes_browser_and_scenario() {
        let dir = artifacts_dir("target/out", "firefox", "smoke");
        assert!(dir.starts_with("target/out/firefox/smoke/"));
    }

    #[test]
    fn artifact_files_keep_raw_state_when_not_json() {
        let base = std::env::temp_dir().join(format!(
            "a11ykit-artifacts-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        write_artifact_files(&base, None, Some("<html />"), Some("not json"), "boom")
            .expect("write artifacts");

        assert!(!base.join("screenshot.png").exists());
        assert!(base.join("dom.html").exists());
        assert_eq!(
            fs::read_to_string(base.join("state.json")).unwrap(),
            "not json"
        );
        assert_eq!(fs::read_to_string(base.join("error.txt")).unwrap(), "boom");
    }
}
