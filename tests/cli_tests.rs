//! End-to-end CLI tests.
//!
//! Each test runs the binary against its own temp data directory via
//! `VOCABVAULT_DATA_DIR`, with HOME pointed at the same directory so no
//! real config file leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PASSWORD: &str = "correct horse battery";

fn vocabvault(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vocabvault").unwrap();
    cmd.env("VOCABVAULT_DATA_DIR", dir.path())
        .env("HOME", dir.path())
        .env("NO_COLOR", "1");
    cmd
}

fn signup(dir: &TempDir, username: &str) {
    vocabvault(dir)
        .args([
            "signup",
            "--username",
            username,
            "--email",
            &format!("{}@example.com", username),
            "--password",
            PASSWORD,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("account created"));
}

#[test]
fn test_init_reports_empty_store() {
    let dir = TempDir::new().unwrap();

    vocabvault(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("vault initialized"))
        .stdout(predicate::str::contains("0"));
}

#[test]
fn test_signup_logs_in() {
    let dir = TempDir::new().unwrap();
    signup(&dir, "alice");

    vocabvault(&dir)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("alice"))
        .stdout(predicate::str::contains("alice@example.com"));
}

#[test]
fn test_signup_rejects_duplicate_account() {
    let dir = TempDir::new().unwrap();
    signup(&dir, "alice");

    vocabvault(&dir)
        .args([
            "signup",
            "--username",
            "alice",
            "--email",
            "other@example.com",
            "--password",
            PASSWORD,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_signup_rejects_bad_email_and_weak_password() {
    let dir = TempDir::new().unwrap();

    vocabvault(&dir)
        .args([
            "signup", "--username", "bob", "--email", "not-an-email", "--password", PASSWORD,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid email address"));

    vocabvault(&dir)
        .args([
            "signup",
            "--username",
            "bob",
            "--email",
            "bob@example.com",
            "--password",
            "short",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 8 characters"));
}

#[test]
fn test_login_rejects_wrong_password() {
    let dir = TempDir::new().unwrap();
    signup(&dir, "alice");

    vocabvault(&dir)
        .args(["login", "--username", "alice", "--password", "wrong password"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid username or password"));
}

#[test]
fn test_logout_login_roundtrip() {
    let dir = TempDir::new().unwrap();
    signup(&dir, "alice");

    vocabvault(&dir).arg("logout").assert().success();

    vocabvault(&dir)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("not logged in"));

    vocabvault(&dir)
        .args(["login", "--username", "alice", "--password", PASSWORD])
        .assert()
        .success()
        .stdout(predicate::str::contains("logged in as"));
}

#[test]
fn test_add_and_list() {
    let dir = TempDir::new().unwrap();
    signup(&dir, "alice");

    vocabvault(&dir)
        .args(["add", "ephemeral", "lasting a very short time"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added ephemeral"));

    vocabvault(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ephemeral"))
        .stdout(predicate::str::contains("1 words"));

    let output = vocabvault(&dir)
        .args(["list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let items: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["word"], "ephemeral");
    // Default category derives from the first letter
    assert_eq!(items[0]["category"], "E");
}

#[test]
fn test_vocabulary_commands_require_login() {
    let dir = TempDir::new().unwrap();
    signup(&dir, "alice");
    vocabvault(&dir).arg("logout").assert().success();

    vocabvault(&dir)
        .args(["add", "ephemeral", "short-lived"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not logged in"))
        .stdout(predicate::str::contains("vocabvault login"));
}

#[test]
fn test_edit_and_rm() {
    let dir = TempDir::new().unwrap();
    signup(&dir, "alice");

    vocabvault(&dir)
        .args(["add", "ephemeral", "short-lived"])
        .assert()
        .success();

    let output = vocabvault(&dir)
        .args(["list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let items: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let id = items[0]["id"].as_str().unwrap().to_string();

    vocabvault(&dir)
        .args(["edit", &id, "--definition", "lasting a very short time"])
        .assert()
        .success()
        .stdout(predicate::str::contains("updated ephemeral"));

    vocabvault(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("lasting a very short time"));

    vocabvault(&dir)
        .args(["rm", &id])
        .assert()
        .success();

    vocabvault(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("no words stored"));
}

#[test]
fn test_edit_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    signup(&dir, "alice");

    vocabvault(&dir)
        .args(["edit", "no-such-id", "--word", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_export_import_doubles_collection() {
    let dir = TempDir::new().unwrap();
    signup(&dir, "alice");

    vocabvault(&dir)
        .args(["add", "ephemeral", "short-lived"])
        .assert()
        .success();
    vocabvault(&dir)
        .args(["add", "zephyr", "a gentle breeze"])
        .assert()
        .success();

    let bundle = dir.path().join("bundle.json");
    vocabvault(&dir)
        .args(["export", "--output", bundle.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("exported to"));

    let document = std::fs::read_to_string(&bundle).unwrap();
    assert!(document.contains("\"exportDate\""));
    assert!(!document.contains("passwordHash"));

    vocabvault(&dir)
        .args(["import", bundle.to_str().unwrap()])
        .assert()
        .success();

    let output = vocabvault(&dir)
        .args(["list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let items: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(items.as_array().unwrap().len(), 4);
}

#[test]
fn test_import_garbage_fails() {
    let dir = TempDir::new().unwrap();
    signup(&dir, "alice");

    let bogus = dir.path().join("bogus.json");
    std::fs::write(&bogus, "not json").unwrap();

    vocabvault(&dir)
        .args(["import", bogus.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a vocabulary bundle"));
}

#[test]
fn test_export_to_stdout_is_plain_json() {
    let dir = TempDir::new().unwrap();
    signup(&dir, "alice");

    vocabvault(&dir)
        .args(["add", "ephemeral", "short-lived"])
        .assert()
        .success();

    let output = vocabvault(&dir)
        .arg("export")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let bundle: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(bundle["username"], "alice");
    assert_eq!(bundle["vocabularies"].as_array().unwrap().len(), 1);
}
