//! CLI integration tests

use std::process::Command;

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "dbrisk-cli", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI help should succeed");
    assert!(
        stdout.contains("Diabetes Risk Predictor"),
        "Should show app name"
    );
    assert!(stdout.contains("predict"), "Should show predict command");
    assert!(stdout.contains("schema"), "Should show schema command");
    assert!(stdout.contains("templates"), "Should show templates command");
}

/// Test that the CLI shows version
#[test]
fn test_cli_version() {
    let output = Command::new("cargo")
        .args(["run", "-p", "dbrisk-cli", "--", "--version"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI version should succeed");
    assert!(stdout.contains("dbrisk"), "Should show binary name");
}

/// Test predict subcommand help
#[test]
fn test_predict_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "dbrisk-cli", "--", "predict", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Predict help should succeed");
    assert!(stdout.contains("--template"), "Should show template option");
    assert!(stdout.contains("--set"), "Should show set option");
    assert!(stdout.contains("--input"), "Should show input option");
}

/// Test global options
#[test]
fn test_global_options() {
    let output = Command::new("cargo")
        .args(["run", "-p", "dbrisk-cli", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("--model"), "Should show model option");
    assert!(stdout.contains("DBRISK_MODEL"), "Should show env var");
    assert!(stdout.contains("--checksum"), "Should show checksum option");
    assert!(stdout.contains("--format"), "Should show format option");
    assert!(stdout.contains("table"), "Should show table format");
    assert!(stdout.contains("json"), "Should show json format");
}

/// Test that predict without a configured artifact fails cleanly
#[test]
fn test_predict_without_model_fails() {
    let output = Command::new("cargo")
        .args(["run", "-p", "dbrisk-cli", "--", "predict"])
        .env_remove("DBRISK_MODEL")
        .env("HOME", std::env::temp_dir())
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Predict without model should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("--model") || stderr.contains("DBRISK_MODEL"),
        "Should point at the model flag"
    );
}

/// Test that a missing artifact file is fatal before any prediction
#[test]
fn test_predict_missing_artifact_fails() {
    let output = Command::new("cargo")
        .args([
            "run",
            "-p",
            "dbrisk-cli",
            "--",
            "--model",
            "/nonexistent/model.onnx",
            "predict",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Missing artifact should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("artifact") || stderr.contains("not found"),
        "Should report the load failure"
    );
}

/// Test invalid command error handling
#[test]
fn test_invalid_command() {
    let output = Command::new("cargo")
        .args(["run", "-p", "dbrisk-cli", "--", "invalid-command"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("invalid"),
        "Should show error message"
    );
}
