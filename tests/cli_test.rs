use assert_cmd::Command;
use predicates::prelude::*;

fn cleansweep() -> Command {
    Command::cargo_bin("cleansweep").unwrap()
}

// ─── Help & version ──────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    cleansweep()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("trash files"))
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("clean"))
        .stdout(predicate::str::contains("files"))
        .stdout(predicate::str::contains("pics"))
        .stdout(predicate::str::contains("storage"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn test_version_flag() {
    cleansweep()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cleansweep"));
}

// ─── Scan command ────────────────────────────────────────────────────────────

#[test]
fn test_scan_quiet_mode() {
    cleansweep().args(["scan", "--quiet"]).assert().success();
}

#[test]
fn test_scan_json_output() {
    cleansweep()
        .args(["scan", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total_bytes"))
        .stdout(predicate::str::contains("roots"));
}

// ─── Clean command (non-destructive paths only) ──────────────────────────────

#[test]
fn test_clean_without_selection_is_safe() {
    // With no --categories/--all the command only reports
    cleansweep().arg("clean").assert().success();
}

#[test]
fn test_clean_all_dry_run() {
    cleansweep()
        .args(["clean", "--all", "--dry-run", "--quiet"])
        .assert()
        .success();
}

// ─── Files command ───────────────────────────────────────────────────────────

#[test]
fn test_files_clean_requires_a_filter() {
    cleansweep()
        .args(["files", "clean"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Refusing"));
}

#[test]
fn test_files_rejects_unknown_kind() {
    cleansweep()
        .args(["files", "list", "--kind", "spreadsheet"])
        .assert()
        .failure();
}

// ─── Config command ──────────────────────────────────────────────────────────

#[test]
fn test_config_show() {
    cleansweep()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max_scan_depth"));
}

#[test]
fn test_config_set_unknown_key_fails() {
    cleansweep()
        .args(["config", "set", "bogus_key", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

// ─── Status command ──────────────────────────────────────────────────────────

#[test]
fn test_status() {
    cleansweep()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("CleanSweep Status"))
        .stdout(predicate::str::contains("scan roots"));
}

// ─── Storage command ─────────────────────────────────────────────────────────

#[test]
fn test_storage_json() {
    cleansweep()
        .args(["storage", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total"))
        .stdout(predicate::str::contains("available"));
}

// ─── Completions ─────────────────────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    cleansweep()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cleansweep"));
}

// ─── Invalid invocations ─────────────────────────────────────────────────────

#[test]
fn test_no_subcommand_shows_help() {
    cleansweep()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
