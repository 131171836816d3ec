//! Integration tests for trend command

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::moodlog_cmd;

fn init_journal(temp: &TempDir) {
    moodlog_cmd().arg("init").arg(temp.path()).assert().success();
}

fn log_entry(temp: &TempDir, mood: &str, category: &str, date: &str, time: &str) {
    moodlog_cmd()
        .current_dir(temp.path())
        .args(["log", mood, "-c", category, "--date", date, "--at", time])
        .assert()
        .success();
}

#[test]
fn test_trend_improving_week() {
    let temp = TempDir::new().unwrap();
    init_journal(&temp);
    // Daily averages Mon..Fri: 2, 2, -, 8, 9. Halves [2, 2] and [8, 9].
    log_entry(&temp, "sad", "personal", "2025-06-02", "09:00");
    log_entry(&temp, "sad", "personal", "2025-06-03", "09:00");
    log_entry(&temp, "happy", "personal", "2025-06-05", "09:00");
    log_entry(&temp, "excited", "personal", "2025-06-06", "09:00");

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["trend", "2025-06-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Week of Jun 2 - Jun 8"))
        .stdout(predicate::str::contains("Personal trend: improving (+6.5) 📈"))
        .stdout(predicate::str::contains("Day  Personal").not());
}

#[test]
fn test_trend_declining_week() {
    let temp = TempDir::new().unwrap();
    init_journal(&temp);
    log_entry(&temp, "excited", "personal", "2025-06-02", "09:00");
    log_entry(&temp, "happy", "personal", "2025-06-03", "09:00");
    log_entry(&temp, "sad", "personal", "2025-06-05", "09:00");
    log_entry(&temp, "sad", "personal", "2025-06-06", "09:00");

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["trend", "2025-06-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Personal trend: declining (-6.5) 📉"));
}

#[test]
fn test_trend_change_at_half_point_is_stable() {
    let temp = TempDir::new().unwrap();
    init_journal(&temp);
    // Daily averages 5, 5, 5, 6: halves differ by exactly 0.5.
    log_entry(&temp, "neutral", "personal", "2025-06-02", "09:00");
    log_entry(&temp, "neutral", "personal", "2025-06-03", "09:00");
    log_entry(&temp, "neutral", "personal", "2025-06-04", "09:00");
    log_entry(&temp, "happy", "personal", "2025-06-05", "08:00");
    log_entry(&temp, "sad", "personal", "2025-06-05", "13:00");
    log_entry(&temp, "happy", "personal", "2025-06-05", "20:00");

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["trend", "2025-06-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Personal trend: stable (+0.5) ➖"));
}

#[test]
fn test_trend_single_day_is_stable() {
    let temp = TempDir::new().unwrap();
    init_journal(&temp);
    log_entry(&temp, "excited", "personal", "2025-06-02", "09:00");

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["trend", "2025-06-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Personal trend: stable (0.0) ➖"));
}

#[test]
fn test_trend_category_filter() {
    let temp = TempDir::new().unwrap();
    init_journal(&temp);
    log_entry(&temp, "sad", "personal", "2025-06-02", "09:00");
    log_entry(&temp, "calm", "professional", "2025-06-03", "09:00");
    log_entry(&temp, "happy", "professional", "2025-06-05", "09:00");

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["trend", "2025-06-04", "-c", "professional"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Professional trend: improving (+1.0) 📈"))
        .stdout(predicate::str::contains("Personal trend").not());
}

#[test]
fn test_trend_previous_week() {
    let temp = TempDir::new().unwrap();
    init_journal(&temp);
    log_entry(&temp, "calm", "personal", "2025-05-27", "09:00");
    log_entry(&temp, "sad", "personal", "2025-05-30", "09:00");

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["trend", "2025-06-04", "--prev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Week of May 26 - Jun 1"))
        .stdout(predicate::str::contains("Personal trend: declining (-5.0) 📉"));
}

#[test]
fn test_trend_invalid_category_fails() {
    let temp = TempDir::new().unwrap();
    init_journal(&temp);

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["trend", "2025-06-04", "-c", "work"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid category"));
}
