//! Binary-level tests for the exit sentinels and CLI surface.
//!
//! These run the real `xanter` binary, which carries the placeholder
//! libxante adapter: every path up to engine init is fully exercised, and
//! paths that need a live engine report the backend as unavailable.
//!
//! Sentinel `-1` surfaces as process status 255 on Unix.

use assert_cmd::Command;
use predicates::prelude::*;

fn xanter() -> Command {
    Command::cargo_bin("xanter").expect("binary should build")
}

#[test]
fn help_prints_usage_and_exits_one() {
    xanter()
        .arg("-h")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("JTF"));
}

#[test]
fn help_wins_over_other_flags() {
    xanter().args(["-h", "-D", "/tmp/auth.db"]).assert().code(1);
}

#[test]
fn version_exits_two() {
    xanter()
        .arg("-v")
        .assert()
        .code(2)
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_option_exits_with_failure() {
    xanter()
        .arg("-Z")
        .assert()
        .code(255)
        .stderr(predicate::str::contains("error"));
}

#[test]
fn missing_schema_exits_with_failure() {
    xanter()
        .assert()
        .code(255)
        .stderr(predicate::str::contains("JTF"));
}

#[test]
fn missing_credentials_exit_with_failure() {
    xanter()
        .args(["-j", "app.jtf"])
        .assert()
        .code(255)
        .stderr(predicate::str::contains("username"));
}

#[test]
fn create_auth_db_exits_three_even_without_a_backend() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db = dir.path().join("auth.db");
    xanter()
        .args(["-D", db.to_str().expect("utf-8 path")])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not implemented"));
}

#[test]
fn application_run_reports_missing_backend() {
    xanter()
        .args(["-j", "app.jtf", "-u", "alice", "-p", "secret"])
        .assert()
        .code(255)
        .stderr(predicate::str::contains("libxante backend"));
}
