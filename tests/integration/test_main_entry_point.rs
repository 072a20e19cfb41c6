// main.rsとエントリーポイントのテスト
use std::process::{Command, Output};
use tempfile::TempDir;

fn dispatch_bench(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dispatch_bench"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

#[test]
fn test_cli_help() {
    let output = dispatch_bench(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("dispatch_bench"));
    assert!(stdout.contains("run"));
    assert!(stdout.contains("verify"));
    assert!(stdout.contains("info"));
}

#[test]
fn test_cli_version() {
    let output = dispatch_bench(&["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("dispatch_bench"));
}

#[test]
fn test_cli_info() {
    let output = dispatch_bench(&["info"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("UpCounter"));
    assert!(stdout.contains("Box<dyn Counter>"));
}

#[test]
fn test_cli_verify_aligned() {
    let output = dispatch_bench(&["verify", "-n", "256"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("unswitched"));
    assert!(!stdout.contains("❌"));
}

#[test]
fn test_cli_verify_unaligned_fails() {
    let output = dispatch_bench(&["verify", "-n", "100", "-s", "unswitched"]);

    assert!(!output.status.success());
}

#[test]
fn test_cli_verify_unaligned_with_masking() {
    let output = dispatch_bench(&[
        "verify",
        "-n",
        "100",
        "--policy",
        "mask-trailing",
        "-s",
        "unswitched",
    ]);

    assert!(output.status.success());
}

#[test]
fn test_cli_run_writes_report() {
    let temp_dir = TempDir::new().unwrap();
    let report_path = temp_dir.path().join("report.json");

    let output = dispatch_bench(&[
        "run",
        "-n",
        "128",
        "-i",
        "3",
        "-q",
        "--report",
        report_path.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["results"].as_array().unwrap().len(), 6);
    assert_eq!(report["config"]["fixture"]["len"], 128);
}

#[test]
fn test_cli_run_rejects_invalid_probability() {
    let output = dispatch_bench(&["run", "-q", "--up-probability", "1.5"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("up_probability"));
}

#[test]
fn test_cli_run_with_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bench.json");
    std::fs::write(
        &config_path,
        r#"{ "fixture": { "len": 64 }, "iterations": 2, "strategies": ["tagged-match"] }"#,
    )
    .unwrap();

    let output = dispatch_bench(&["run", "-c", config_path.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("tagged-match"));
}
