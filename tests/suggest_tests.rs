//! Integration tests for the parts and suggest commands

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::bodylog_cmd;

fn init_journal_with_catalog(temp: &TempDir, catalog: &str) {
    bodylog_cmd().arg("init").arg(temp.path()).assert().success();
    fs::write(temp.path().join("videos.txt"), catalog).unwrap();
}

#[test]
fn test_parts_lists_headings_in_file_order() {
    let temp = TempDir::new().unwrap();
    init_journal_with_catalog(
        &temp,
        "골반\nhttps://example.com/a\n허리/등\nhttps://example.com/b\n무릎\nhttps://example.com/c\n",
    );

    bodylog_cmd()
        .current_dir(temp.path())
        .arg("parts")
        .assert()
        .success()
        .stdout(predicate::str::diff("골반\n허리/등\n무릎\n"));
}

#[test]
fn test_parts_without_catalog_file() {
    let temp = TempDir::new().unwrap();
    bodylog_cmd().arg("init").arg(temp.path()).assert().success();

    bodylog_cmd()
        .current_dir(temp.path())
        .arg("parts")
        .assert()
        .success()
        .stdout(predicate::str::contains("No body parts found"));
}

#[test]
fn test_suggest_prints_video_url() {
    let temp = TempDir::new().unwrap();
    init_journal_with_catalog(&temp, "무릎\nhttps://example.com/knee\n");

    bodylog_cmd()
        .current_dir(temp.path())
        .args(["suggest", "무릎"])
        .assert()
        .success()
        .stdout(predicate::str::diff("https://example.com/knee\n"));
}

#[test]
fn test_suggest_normalizes_shorts_links() {
    let temp = TempDir::new().unwrap();
    init_journal_with_catalog(&temp, "무릎\nhttps://youtube.com/shorts/abc123?x=1\n");

    bodylog_cmd()
        .current_dir(temp.path())
        .args(["suggest", "무릎"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "https://www.youtube.com/watch?v=abc123\n",
        ));
}

#[test]
fn test_suggest_is_sticky_across_runs() {
    let temp = TempDir::new().unwrap();
    init_journal_with_catalog(
        &temp,
        "무릎\nhttps://example.com/a\nhttps://example.com/b\nhttps://example.com/c\n",
    );

    let first = bodylog_cmd()
        .current_dir(temp.path())
        .args(["suggest", "무릎"])
        .assert()
        .success();
    let first_out = String::from_utf8(first.get_output().stdout.clone()).unwrap();

    let second = bodylog_cmd()
        .current_dir(temp.path())
        .args(["suggest", "무릎"])
        .assert()
        .success();
    let second_out = String::from_utf8(second.get_output().stdout.clone()).unwrap();

    assert_eq!(first_out, second_out);
}

#[test]
fn test_suggest_part_change_draws_from_new_part() {
    let temp = TempDir::new().unwrap();
    init_journal_with_catalog(
        &temp,
        "무릎\nhttps://example.com/knee\n목\nhttps://example.com/neck\n",
    );

    bodylog_cmd()
        .current_dir(temp.path())
        .args(["suggest", "무릎"])
        .assert()
        .success()
        .stdout(predicate::str::contains("knee"));

    bodylog_cmd()
        .current_dir(temp.path())
        .args(["suggest", "목"])
        .assert()
        .success()
        .stdout(predicate::str::contains("neck"));
}

#[test]
fn test_suggest_reroll_stays_within_part() {
    let temp = TempDir::new().unwrap();
    init_journal_with_catalog(&temp, "무릎\nhttps://example.com/knee\n");

    bodylog_cmd()
        .current_dir(temp.path())
        .args(["suggest", "무릎"])
        .assert()
        .success();

    // Single registered video, so a reroll must land on it again
    bodylog_cmd()
        .current_dir(temp.path())
        .args(["suggest", "무릎", "--reroll"])
        .assert()
        .success()
        .stdout(predicate::str::diff("https://example.com/knee\n"));
}

#[test]
fn test_suggest_unknown_part_exit_code() {
    let temp = TempDir::new().unwrap();
    init_journal_with_catalog(&temp, "무릎\nhttps://example.com/knee\n");

    bodylog_cmd()
        .current_dir(temp.path())
        .args(["suggest", "팔꿈치"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Unknown body part"));
}

#[test]
fn test_suggest_part_without_videos() {
    let temp = TempDir::new().unwrap();
    init_journal_with_catalog(&temp, "무릎\n");

    bodylog_cmd()
        .current_dir(temp.path())
        .args(["suggest", "무릎"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No videos registered"));
}

#[test]
fn test_orphan_links_are_ignored() {
    let temp = TempDir::new().unwrap();
    init_journal_with_catalog(
        &temp,
        "https://example.com/orphan\n무릎\nhttps://example.com/knee\n",
    );

    bodylog_cmd()
        .current_dir(temp.path())
        .arg("parts")
        .assert()
        .success()
        .stdout(predicate::str::diff("무릎\n"));

    bodylog_cmd()
        .current_dir(temp.path())
        .args(["suggest", "무릎"])
        .assert()
        .success()
        .stdout(predicate::str::diff("https://example.com/knee\n"));
}
