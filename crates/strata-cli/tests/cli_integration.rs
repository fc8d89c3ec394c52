//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the token library.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command pointed at an empty config file
fn cli_cmd(dir: &TempDir) -> Command {
    let config = write_config(dir, "{}");
    let mut cmd = Command::cargo_bin("strata").expect("Failed to find strata binary");
    cmd.arg("--config").arg(config);
    cmd
}

fn write_config(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("theme.json");
    std::fs::write(&path, json).expect("Failed to write config");
    path
}

// ============================================================================
// Tokens Command Tests
// ============================================================================

#[test]
fn test_tokens_json_default() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .arg("tokens")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mode\": \"light\""))
        .stdout(predicate::str::contains("\"semantic\""))
        .stdout(predicate::str::contains("\"component\""));
}

#[test]
fn test_tokens_css_dark() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["--mode", "dark", "tokens", "--format", "css"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(":root {"))
        .stdout(predicate::str::contains("--semantic-text-primary: #f9fafb;"));
}

#[test]
fn test_tokens_reduced_motion() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["tokens", "--format", "css", "--reduced-motion"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--semantic-motion-hover-duration: 0ms;"));
}

#[test]
fn test_tokens_unknown_state_fails() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["tokens", "--state", "wobbly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown interaction state"));
}

// ============================================================================
// Get Command Tests
// ============================================================================

#[test]
fn test_get_semantic_token() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["get", "semantic.text.primary"])
        .assert()
        .success()
        .stdout("#111827\n");
}

#[test]
fn test_get_follows_mode() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["get", "semantic.text.primary", "--mode", "dark"])
        .assert()
        .success()
        .stdout("#f9fafb\n");
}

#[test]
fn test_get_base_token() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["get", "base.colors.blue.s600"])
        .assert()
        .success()
        .stdout("#2563eb\n");
}

#[test]
fn test_get_unknown_path_fails() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["get", "semantic.text.sparkle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown token path"));
}

// ============================================================================
// Lint Command Tests
// ============================================================================

#[test]
fn test_lint_passes() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .arg("lint")
        .assert()
        .success()
        .stdout(predicate::str::contains("OK:"))
        .stdout(predicate::str::contains("trace to base"));
}

// ============================================================================
// Status Command Tests
// ============================================================================

#[test]
fn test_status_error() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["status", "error"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: error"))
        .stdout(predicate::str::contains("Severity: High"))
        .stdout(predicate::str::contains("Shape: Circle"))
        .stdout(predicate::str::contains("Announce: assertive"));
}

#[test]
fn test_status_alias_and_polite() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["status", "warn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: warning"))
        .stdout(predicate::str::contains("Announce: polite"));
}

#[test]
fn test_status_unknown_fails() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["status", "sparkly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown status"));
}

// ============================================================================
// Palette Command Tests
// ============================================================================

#[test]
fn test_palette_lists_colors() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["palette", "categorical"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Palette: categorical"))
        .stdout(predicate::str::contains("  0: #2563eb"))
        .stdout(predicate::str::contains("  9: "));
}

#[test]
fn test_palette_index_wraps() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["palette", "categorical", "--index", "10"])
        .assert()
        .success()
        .stdout("#2563eb\n");
}

#[test]
fn test_palette_unknown_fails() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["palette", "rainbow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown chart palette"));
}

// ============================================================================
// Density Command Tests
// ============================================================================

#[test]
fn test_density_presets() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["density", "compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Row height: 36px"));

    cli_cmd(&dir)
        .args(["density", "standard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Row height: 52px"));
}

#[test]
fn test_density_unknown_fails() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["density", "cozy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown density level"));
}

// ============================================================================
// Icon Command Tests
// ============================================================================

#[test]
fn test_icon_svg() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["icon", "search"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<svg"))
        .stdout(predicate::str::contains("viewBox=\"0 0 24 24\""))
        .stdout(predicate::str::contains("stroke=\"currentColor\""));
}

#[test]
fn test_icon_filled_library() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["icon", "search", "--library", "filled"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fill=\"currentColor\""));
}

#[test]
fn test_icon_paths_only() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["icon", "check", "--paths"])
        .assert()
        .success()
        .stdout("M20 6 9 17l-5-5\n");
}

#[test]
fn test_icon_unknown_fails() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["icon", "unicorn"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown icon"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_config_mode_applies() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, r#"{"mode":"dark"}"#);

    Command::cargo_bin("strata")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .args(["get", "semantic.text.primary"])
        .assert()
        .success()
        .stdout("#f9fafb\n");
}

#[test]
fn test_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, r#"{"mode":"dark"}"#);

    Command::cargo_bin("strata")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .args(["--mode", "light", "get", "semantic.text.primary"])
        .assert()
        .success()
        .stdout("#111827\n");
}

#[test]
fn test_config_icon_library_applies() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, r#"{"icon_library":"filled"}"#);

    Command::cargo_bin("strata")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .args(["icon", "search"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fill=\"currentColor\""));
}

#[test]
fn test_missing_config_fails() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("strata")
        .unwrap()
        .arg("--config")
        .arg(dir.path().join("absent.json"))
        .arg("lint")
        .assert()
        .failure();
}

#[test]
fn test_bad_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, r#"{"mode":"sepia"}"#);

    Command::cargo_bin("strata")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .arg("lint")
        .assert()
        .failure();
}

// ============================================================================
// Help Tests
// ============================================================================

#[test]
fn test_help() {
    Command::cargo_bin("strata")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tokens"))
        .stdout(predicate::str::contains("lint"))
        .stdout(predicate::str::contains("palette"));
}
