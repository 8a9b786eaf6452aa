//! Integration tests for the circo binary.
//!
//! These tests verify end-to-end behavior including:
//! - Program listing and structure display
//! - Session runs driven to completion
//! - Config overrides
//! - Failure paths for unknown programs

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("circo"))
}

/// Write a config file into a temp dir and return both
fn config_file(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).expect("Failed to write config");
    (dir, path)
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Circuit training session builder and runner",
        ));
}

#[test]
fn test_default_command_lists_programs() {
    cli()
        .assert()
        .success()
        .stdout(predicate::str::contains("Cardio Intense"))
        .stdout(predicate::str::contains("HIIT Express"));
}

#[test]
fn test_list_shows_summaries() {
    cli()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("min"))
        .stdout(predicate::str::contains("exercises"))
        .stdout(predicate::str::contains("kcal"));
}

#[test]
fn test_list_json_is_parseable() {
    let output = cli().arg("list").arg("--json").output().unwrap();
    assert!(output.status.success());

    let programs: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("list --json produced invalid JSON");
    let array = programs.as_array().expect("expected a JSON array");
    assert_eq!(array.len(), 3);
    assert!(array[0]["structure"]["warmup"]["exercises"].is_array());
}

#[test]
fn test_show_prints_structure() {
    cli()
        .arg("show")
        .arg("HIIT Express")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tabata"))
        .stdout(predicate::str::contains("Sprint in place"))
        .stdout(predicate::str::contains("playback steps"));
}

#[test]
fn test_show_is_case_insensitive() {
    cli()
        .arg("show")
        .arg("hiit express")
        .assert()
        .success()
        .stdout(predicate::str::contains("HIIT Express"));
}

#[test]
fn test_show_unknown_program_fails() {
    cli().arg("show").arg("Nonexistent").assert().failure();
}

#[test]
fn test_run_fast_completes_session() {
    cli()
        .arg("run")
        .arg("HIIT Express")
        .arg("--fast")
        .arg("--skip-preparation")
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting 'HIIT Express'"))
        .stdout(predicate::str::contains("Session complete"));
}

#[test]
fn test_run_fast_announces_every_round() {
    cli()
        .arg("run")
        .arg("HIIT Express")
        .arg("--fast")
        .arg("--skip-preparation")
        .assert()
        .success()
        // Tabata circuit runs 8 rounds of the same exercise.
        .stdout(predicate::str::contains("round 8"));
}

#[test]
fn test_run_unknown_program_fails() {
    cli()
        .arg("run")
        .arg("Nonexistent")
        .arg("--fast")
        .assert()
        .failure();
}

#[test]
fn test_run_reports_weekly_goal_from_config() {
    let (_dir, path) = config_file(
        "[goal]\nplanned_days = [\"mon\", \"tue\", \"wed\", \"thu\", \"fri\", \"sat\", \"sun\"]\n",
    );

    cli()
        .arg("run")
        .arg("HIIT Express")
        .arg("--fast")
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        // Every day is planned, so today's completion always counts.
        .stdout(predicate::str::contains(
            "1 of 7 planned days completed this week",
        ));
}

#[test]
fn test_invalid_config_is_rejected() {
    let (_dir, path) = config_file("[goal]\nplanned_days = [\"someday\"]\n");

    cli()
        .arg("list")
        .arg("--config")
        .arg(&path)
        .assert()
        .failure();
}

#[test]
fn test_custom_kcal_rate_changes_estimates() {
    let (_dir, path) = config_file("[estimation]\nkcal_per_active_minute = 100.0\n");

    let output = cli()
        .arg("list")
        .arg("--json")
        .arg("--config")
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let programs: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let default_output = cli().arg("list").arg("--json").output().unwrap();
    let defaults: serde_json::Value = serde_json::from_slice(&default_output.stdout).unwrap();

    let boosted = programs[0]["calories"].as_u64().unwrap();
    let baseline = defaults[0]["calories"].as_u64().unwrap();
    assert!(boosted > baseline);
}

#[test]
fn test_goal_layout() {
    cli()
        .arg("goal")
        .arg("--days")
        .arg("mon,wed,fri")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 day(s) per week"));
}

#[test]
fn test_goal_rejects_unknown_day() {
    cli()
        .arg("goal")
        .arg("--days")
        .arg("mon,funday")
        .assert()
        .failure();
}

#[test]
fn test_goal_without_days_prompts() {
    cli()
        .arg("goal")
        .assert()
        .success()
        .stdout(predicate::str::contains("No training days planned"));
}
