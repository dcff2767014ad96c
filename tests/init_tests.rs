//! Integration tests for init and config commands

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::bodylog_cmd;

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    bodylog_cmd().arg("init").arg(temp.path()).assert().success();

    assert!(temp.path().join(".bodylog").exists());

    let config_path = temp.path().join(".bodylog/config.toml");
    assert!(config_path.exists());

    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("videos_file = \"videos.txt\""));
    assert!(content.contains("journal_file = \"body_log.csv\""));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    bodylog_cmd().arg("init").arg(temp.path()).assert().success();
    bodylog_cmd().arg("init").arg(temp.path()).assert().failure();
}

#[test]
fn test_config_get_videos_file() {
    let temp = TempDir::new().unwrap();

    bodylog_cmd().arg("init").arg(temp.path()).assert().success();

    bodylog_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("videos_file")
        .assert()
        .success()
        .stdout(predicate::str::contains("videos.txt"));
}

#[test]
fn test_config_set_videos_file() {
    let temp = TempDir::new().unwrap();

    bodylog_cmd().arg("init").arg(temp.path()).assert().success();

    bodylog_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("videos_file")
        .arg("data/videos_all.txt")
        .assert()
        .success();

    bodylog_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("videos_file")
        .assert()
        .success()
        .stdout(predicate::str::contains("data/videos_all.txt"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();

    bodylog_cmd().arg("init").arg(temp.path()).assert().success();

    bodylog_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("videos_file = videos.txt"))
        .stdout(predicate::str::contains("journal_file = body_log.csv"))
        .stdout(predicate::str::contains("created = "));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();

    bodylog_cmd().arg("init").arg(temp.path()).assert().success();

    bodylog_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("nope")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_commands_outside_journal_fail_with_exit_code_2() {
    let temp = TempDir::new().unwrap();

    bodylog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Not a bodylog directory"));
}
