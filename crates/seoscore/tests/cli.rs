//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("SEOSCORE_LOG_DIR", std::env::temp_dir().join("seoscore-test-logs"));
    cmd
}

const GOOD_INPUT: &str = r#"{
    "title": "Understanding the New Law on Digital Contracts in 2024.",
    "description": "A practical guide to how the reformed legislation changes commercial tenancy disputes, deposits and early termination rights.",
    "content": "The court ruled on the lease.",
    "keywords": ["lease"]
}"#;

const EMPTY_INPUT: &str = r#"{"title":"","description":"","content":"","keywords":[]}"#;

fn analyze_stdin(input: &str) -> serde_json::Value {
    let output = cmd()
        .arg("analyze")
        .write_stdin(input)
        .assert()
        .success();
    serde_json::from_slice(&output.get_output().stdout).expect("analyze should print JSON")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("analyze"));
}

#[test]
fn long_help_lists_environment() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("SEOSCORE_LOG_DIR"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["config"]["scoring"]["title"]["min"], 50);
}

// =============================================================================
// Analyze Command
// =============================================================================

#[test]
fn analyze_reads_stdin() {
    let json = analyze_stdin(GOOD_INPUT);
    assert_eq!(json["title"]["score"], 100);
    assert_eq!(json["description"]["score"], 100);
    assert!(json["overall"].as_u64().unwrap() <= 100);
}

#[test]
fn analyze_dash_reads_stdin() {
    cmd()
        .args(["analyze", "-"])
        .write_stdin(EMPTY_INPUT)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"overall\""));
}

#[test]
fn analyze_empty_input_scores() {
    let json = analyze_stdin(EMPTY_INPUT);
    assert_eq!(json["title"]["score"], 55);
    assert_eq!(json["keywords"]["score"], 0);
    assert_eq!(json["readability"]["level"], "Easy");
}

#[test]
fn analyze_reads_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("page.json");
    fs::write(&path, GOOD_INPUT).unwrap();

    cmd()
        .args(["analyze", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"per_keyword\""));
}

#[test]
fn analyze_summary_is_human_readable() {
    cmd()
        .args(["--color", "never", "analyze", "--summary"])
        .write_stdin(GOOD_INPUT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall:"))
        .stdout(predicate::str::contains("Suggestions:"));
}

#[test]
fn analyze_json_flag_wins_over_summary() {
    let output = cmd()
        .args(["--json", "analyze", "--summary"])
        .write_stdin(EMPTY_INPUT)
        .assert()
        .success();
    let json: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert!(json["overall"].is_u64());
}

#[test]
fn analyze_malformed_json_fails() {
    cmd()
        .arg("analyze")
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid analysis input"));
}

#[test]
fn analyze_missing_field_fails() {
    cmd()
        .arg("analyze")
        .write_stdin(r#"{"title":"","description":"","content":""}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("keywords"));
}

#[test]
fn analyze_missing_file_fails() {
    cmd()
        .args(["analyze", "/nonexistent/page.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn analyze_min_score_gate_fails() {
    cmd()
        .args(["analyze", "--min-score", "90"])
        .write_stdin(EMPTY_INPUT)
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"overall\""))
        .stderr(predicate::str::contains("below minimum 90"));
}

#[test]
fn analyze_min_score_out_of_range_rejected() {
    cmd()
        .args(["analyze", "--min-score", "101"])
        .write_stdin(EMPTY_INPUT)
        .assert()
        .code(2);
}

#[test]
fn analyze_min_score_from_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("seoscore.toml"), "min_overall_score = 99\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "analyze"])
        .write_stdin(EMPTY_INPUT)
        .assert()
        .failure()
        .stderr(predicate::str::contains("below minimum 99"));
}

#[test]
fn analyze_input_limit_from_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("seoscore.toml"), "max_input_bytes = 10\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "analyze"])
        .write_stdin(EMPTY_INPUT)
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Chdir Flag
// =============================================================================

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}
