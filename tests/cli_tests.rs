
use predicates::prelude::*;
use tempfile::tempdir;
use test_helpers::{setup_open_ended, tenten_command};

#[test]
fn test_status_before_setup_reports_setup_required() {
    let dir = tempdir().unwrap();

    tenten_command(dir.path())
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No journal program configured yet"));
}

#[test]
fn test_record_before_setup_reports_setup_required() {
    let dir = tempdir().unwrap();

    tenten_command(dir.path())
        .args(["record", "-g", "anything"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tenten setup"));
}

#[test]
fn test_setup_rejects_invalid_date() {
    let dir = tempdir().unwrap();

    tenten_command(dir.path())
        .args(["setup", "--start-date", "01-01-2024", "--reminder", "07:30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected YYYY-MM-DD"));
}

#[test]
fn test_setup_rejects_invalid_reminder_time() {
    let dir = tempdir().unwrap();

    tenten_command(dir.path())
        .args(["setup", "--start-date", "2024-01-01", "--reminder", "25:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid reminder time"));
}

#[test]
fn test_setup_rejects_zero_length_program() {
    let dir = tempdir().unwrap();

    tenten_command(dir.path())
        .args([
            "setup",
            "--start-date",
            "2024-01-01",
            "--reminder",
            "07:30",
            "--length",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid program length"));
}

#[test]
fn test_setup_refuses_to_clobber_without_force() {
    let dir = tempdir().unwrap();
    setup_open_ended(dir.path());

    tenten_command(dir.path())
        .args(["setup", "--start-date", "2021-01-01", "--reminder", "08:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_setup_with_force_replaces_the_program() {
    let dir = tempdir().unwrap();
    setup_open_ended(dir.path());

    tenten_command(dir.path())
        .args([
            "setup",
            "--start-date",
            "2021-06-01",
            "--reminder",
            "08:00",
            "--force",
        ])
        .assert()
        .success();

    tenten_command(dir.path())
        .arg("settings")
        .assert()
        .success()
        .stdout(predicate::str::contains("2021-06-01"));
}

#[test]
fn test_record_with_no_content_is_rejected() {
    let dir = tempdir().unwrap();
    setup_open_ended(dir.path());

    tenten_command(dir.path())
        .arg("record")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "at least one gratitude or intention",
        ));
}

#[test]
fn test_record_with_only_whitespace_content_is_rejected() {
    let dir = tempdir().unwrap();
    setup_open_ended(dir.path());

    tenten_command(dir.path())
        .args(["record", "-g", "   ", "-i", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "at least one gratitude or intention",
        ));
}

#[test]
fn test_record_before_program_start_saves_nothing() {
    let dir = tempdir().unwrap();

    tenten_command(dir.path())
        .args(["setup", "--start-date", "2999-01-01", "--reminder", "07:30"])
        .assert()
        .success();

    tenten_command(dir.path())
        .args(["record", "-g", "early bird"])
        .assert()
        .success()
        .stdout(predicate::str::contains("begins on 2999-01-01"));

    tenten_command(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries recorded: 0"));
}

#[test]
fn test_record_after_program_end_saves_nothing() {
    let dir = tempdir().unwrap();

    tenten_command(dir.path())
        .args([
            "setup",
            "--start-date",
            "2020-01-01",
            "--reminder",
            "07:30",
            "--length",
            "5",
        ])
        .assert()
        .success();

    tenten_command(dir.path())
        .args(["record", "-g", "too late"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ended on 2020-01-05"));

    tenten_command(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Program completed on 2020-01-05"));
}

#[test]
fn test_status_before_start_names_the_start_date() {
    let dir = tempdir().unwrap();

    tenten_command(dir.path())
        .args(["setup", "--start-date", "2999-01-01", "--reminder", "07:30"])
        .assert()
        .success();

    tenten_command(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Program begins on 2999-01-01"));
}

#[test]
fn test_settings_show_reports_current_values() {
    let dir = tempdir().unwrap();
    setup_open_ended(dir.path());

    tenten_command(dir.path())
        .arg("settings")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("07:30")
                .and(predicate::str::contains("open-ended"))
                .and(predicate::str::contains("off")),
        );
}

#[test]
fn test_settings_update_reminder_and_notifications() {
    let dir = tempdir().unwrap();
    setup_open_ended(dir.path());

    tenten_command(dir.path())
        .args(["settings", "--reminder", "21:15", "--notifications", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings updated."));

    tenten_command(dir.path())
        .arg("settings")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("21:15")
                .and(predicate::str::contains("Notifications:   on")),
        );
}

#[test]
fn test_settings_rejects_invalid_reminder_time() {
    let dir = tempdir().unwrap();
    setup_open_ended(dir.path());

    tenten_command(dir.path())
        .args(["settings", "--reminder", "nine thirty"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid reminder time"));
}

#[test]
fn test_remind_with_notifications_off_exits_cleanly() {
    let dir = tempdir().unwrap();
    setup_open_ended(dir.path());

    tenten_command(dir.path())
        .arg("remind")
        .assert()
        .success()
        .stdout(predicate::str::contains("Notifications are off"));
}

#[test]
fn test_reset_without_yes_deletes_nothing() {
    let dir = tempdir().unwrap();
    setup_open_ended(dir.path());

    tenten_command(dir.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"));

    tenten_command(dir.path()).arg("status").assert().success();
}

#[test]
fn test_reset_with_yes_returns_to_first_run() {
    let dir = tempdir().unwrap();
    setup_open_ended(dir.path());

    tenten_command(dir.path())
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Journal reset"));

    tenten_command(dir.path())
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No journal program configured yet"));
}

#[test]
fn test_history_on_empty_store() {
    let dir = tempdir().unwrap();
    setup_open_ended(dir.path());

    tenten_command(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet"));
}

#[test]
fn test_export_on_empty_store_prints_header_only() {
    let dir = tempdir().unwrap();

    tenten_command(dir.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("date,gratitude_1,"));
}
