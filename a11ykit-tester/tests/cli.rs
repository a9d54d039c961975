use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "a11ykit-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_a11ykit-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("persistence-roundtrip"));
}

#[test]
fn cli_logic_run_passes_with_json_report() {
    let exe = env!("CARGO_BIN_EXE_a11ykit-tester");
    let output_path = temp_path("logic");
    let status = Command::new(exe)
        .args([
            "--mode",
            "logic",
            "--scenarios",
            "all",
            "--iterations",
            "2",
            "--report",
            "json",
            "--output",
        ])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(output_path).expect("read report"))
            .expect("json report");
    let entries = report.as_array().expect("array");
    assert_eq!(entries.len(), 7);
    assert!(entries.iter().all(|e| e["passed"] == true));
}

#[test]
fn cli_survives_unknown_browser() {
    let exe = env!("CARGO_BIN_EXE_a11ykit-tester");
    let output = Command::new(exe)
        .args([
            "--mode",
            "browser",
            "--browsers",
            "netscape",
            "--report",
            "json",
        ])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown browser"));
}
