//! E2E tests for `walletbook activity`.

use predicates::prelude::*;
use walletbook::test_utils::{TestDir, make_test_snapshot_json};

mod common;

use common::fixtures::{SnapshotBuilder, book_cmd, tx};

fn write_default_snapshot(dir: &TestDir) -> std::path::PathBuf {
    dir.create_file("accounts.json", &make_test_snapshot_json());
    dir.file_path("accounts.json")
}

#[test]
fn human_activity_lists_classified_rows() {
    let dir = TestDir::new();
    let snapshot = write_default_snapshot(&dir);

    book_cmd(dir.path())
        .arg("activity")
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("Recent transfer transactions (3)"))
        .stdout(predicate::str::contains("Internal transfer"))
        .stdout(predicate::str::contains("+1.500 SEM"))
        .stdout(predicate::str::contains("-2.000 SEM"))
        .stdout(predicate::str::contains("0x0d").not());
}

#[test]
fn json_activity_is_newest_first() {
    let dir = TestDir::new();
    let snapshot = write_default_snapshot(&dir);

    let output = book_cmd(dir.path())
        .arg("activity")
        .arg("--snapshot")
        .arg(&snapshot)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let relations: Vec<&str> = value["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["relation"].as_str().unwrap())
        .collect();
    assert_eq!(relations, vec!["CYCLE", "OUTBOUND", "INBOUND"]);
}

#[test]
fn names_from_book_label_counterparties() {
    let dir = TestDir::new();
    let snapshot = write_default_snapshot(&dir);

    book_cmd(dir.path())
        .args(["book", "put", "carol", "0x0c"])
        .assert()
        .success();

    book_cmd(dir.path())
        .arg("activity")
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("carol (0x0c)"));
}

#[test]
fn type_and_limit_flags() {
    let dir = TestDir::new();
    let snapshot = write_default_snapshot(&dir);

    let output = book_cmd(dir.path())
        .arg("activity")
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["--type", "vote", "--limit", "1", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = value["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["type"], "VOTE");
}

#[test]
fn default_limit_is_six() {
    let dir = TestDir::new();
    let transactions = (0..10u8)
        .map(|i| tx(i, 0xaa, 0xcc, 1_000_000_000, 1_500_000_000_000 + i64::from(i)))
        .collect();
    let snapshot = SnapshotBuilder::new()
        .account(0xaa, transactions)
        .write(&dir, "ten.json");

    let output = book_cmd(dir.path())
        .arg("activity")
        .arg("--snapshot")
        .arg(&snapshot)
        .arg("--json")
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["data"].as_array().unwrap().len(), 6);
}

#[test]
fn limit_from_env_is_validated() {
    let dir = TestDir::new();
    let snapshot = write_default_snapshot(&dir);

    book_cmd(dir.path())
        .env("WALLETBOOK_LIMIT", "0")
        .arg("activity")
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("WB-C002"));
}

#[test]
fn unknown_type_is_rejected() {
    let dir = TestDir::new();
    let snapshot = write_default_snapshot(&dir);

    book_cmd(dir.path())
        .arg("activity")
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["--type", "mint"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("WB-I011"));
}

#[test]
fn missing_snapshot_exits_not_found() {
    let dir = TestDir::new();
    book_cmd(dir.path())
        .arg("activity")
        .arg("--snapshot")
        .arg(dir.file_path("missing.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("WB-I002"));
}

#[test]
fn malformed_snapshot_is_parse_error() {
    let dir = TestDir::new();
    dir.create_file("bad.json", "{\"accounts\": 5}");

    book_cmd(dir.path())
        .arg("activity")
        .arg("--snapshot")
        .arg(dir.file_path("bad.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("WB-I003"));
}

#[test]
fn markdown_activity() {
    let dir = TestDir::new();
    let snapshot = write_default_snapshot(&dir);

    book_cmd(dir.path())
        .arg("activity")
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["--format", "md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| relation | time | amount | counterparty |"))
        .stdout(predicate::str::contains("| cycle |"));
}
