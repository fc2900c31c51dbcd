//! Binary integration tests
//!
//! Runs the issuetrack binary as a subprocess. Each test points
//! ISSUETRACK_CONFIG_DIR at its own temp dir so the init/default-workbook
//! flow never touches the real user config.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn issuetrack(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("issuetrack").unwrap();
    cmd.env("ISSUETRACK_CONFIG_DIR", config_dir.path());
    cmd
}

#[test]
fn test_version_flag() {
    let dir = TempDir::new().unwrap();
    issuetrack(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("issuetrack"));
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    issuetrack(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn test_init_creates_workbook() {
    let config = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let workbook = dir.path().join("tracker.xlsx");

    issuetrack(&config)
        .arg("init")
        .arg(&workbook)
        .assert()
        .success()
        .stdout(predicate::str::contains("Workbook created"));

    assert!(workbook.exists());
    assert!(config.path().join("config.json").exists());
}

#[test]
fn test_init_refuses_existing_without_force() {
    let config = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let workbook = dir.path().join("tracker.xlsx");

    issuetrack(&config).arg("init").arg(&workbook).assert().success();
    issuetrack(&config)
        .arg("init")
        .arg(&workbook)
        .assert()
        .failure()
        .stdout(predicate::str::contains("New tracking workbook").not())
        .stderr(predicate::str::contains("already exists"));
    issuetrack(&config)
        .arg("init")
        .arg(&workbook)
        .arg("--force")
        .assert()
        .success();
}

#[test]
fn test_update_uses_configured_default_workbook() {
    let config = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let workbook = dir.path().join("tracker.xlsx");

    issuetrack(&config).arg("init").arg(&workbook).assert().success();

    let batch = dir.path().join("batch.json");
    std::fs::write(&batch, r#"[{"Title": "A", "Status": "OPEN"}]"#).unwrap();

    // No -w flag: falls back to the workbook init just configured
    issuetrack(&config)
        .arg("update")
        .arg(&batch)
        .assert()
        .success()
        .stdout(predicate::str::contains("New:"));
}

#[test]
fn test_update_from_stdin() {
    let config = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let workbook = dir.path().join("tracker.xlsx");

    issuetrack(&config)
        .arg("update")
        .arg("-")
        .arg("-w")
        .arg(&workbook)
        .write_stdin(r#"[{"Title": "From stdin", "Status": "OPEN"}]"#)
        .assert()
        .success();

    assert!(workbook.exists());
}

#[test]
fn test_update_without_workbook_or_config_fails() {
    let config = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let batch = dir.path().join("batch.json");
    std::fs::write(&batch, r#"[{"Title": "A"}]"#).unwrap();

    issuetrack(&config)
        .arg("update")
        .arg(&batch)
        .assert()
        .failure()
        .stderr(predicate::str::contains("none configured"));
}

#[test]
fn test_stats_reports_counts() {
    let config = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let workbook = dir.path().join("tracker.xlsx");

    let batch = dir.path().join("batch.json");
    std::fs::write(
        &batch,
        r#"[
            {"Title": "A", "Status": "OPEN", "Priority": "High"},
            {"Title": "B", "Status": "OPEN", "Priority": "Low"}
        ]"#,
    )
    .unwrap();

    issuetrack(&config)
        .arg("update")
        .arg(&batch)
        .arg("-w")
        .arg(&workbook)
        .assert()
        .success();

    issuetrack(&config)
        .arg("stats")
        .arg("-w")
        .arg(&workbook)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total issues: 2"))
        .stdout(predicate::str::contains("OPEN"));
}
