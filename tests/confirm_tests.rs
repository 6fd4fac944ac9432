//! Two-phase disambiguation over separate CLI invocations.

use predicates::str::contains;

mod common;
use common::{rc, setup, write_config, write_phone_roster};

#[test]
fn test_ambiguous_submit_saves_pending_state() {
    let te = setup("ambiguous_pending");
    write_config(&te, &[]);
    write_phone_roster(&te);

    rc().args([
        "--config",
        &te.config,
        "--at",
        "2024-01-01 09:00:00",
        "submit",
        "1234",
    ])
    .assert()
    .success()
    .stdout(contains("Multiple people share"))
    .stdout(contains("1. Jo Lee"))
    .stdout(contains("2. Sam Kim"));

    assert!(te.pending_path().exists());
    // Nothing is appended until the choice is confirmed.
    assert!(te.log_lines().is_empty());
}

#[test]
fn test_confirm_by_choice_appends_once_and_clears_state() {
    let te = setup("confirm_choice");
    write_config(&te, &[]);
    write_phone_roster(&te);

    rc().args([
        "--config",
        &te.config,
        "--at",
        "2024-01-01 09:00:00",
        "submit",
        "1234",
    ])
    .assert()
    .success();

    rc().args([
        "--config",
        &te.config,
        "--at",
        "2024-01-01 09:01:00",
        "confirm",
        "--choice",
        "2",
    ])
    .assert()
    .success()
    .stdout(contains("Sam Kim logged at 09:01:00 on 2024-01-01"));

    assert!(!te.pending_path().exists());
    let lines = te.log_lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "1234,Sam Kim,2024-01-01,09:01:00");

    // The state was consumed: a second confirm has nothing to work on.
    rc().args(["--config", &te.config, "confirm", "--choice", "1"])
        .assert()
        .failure()
        .stderr(contains("No pending selection"));
}

#[test]
fn test_confirm_by_name_is_case_insensitive() {
    let te = setup("confirm_name");
    write_config(&te, &[]);
    write_phone_roster(&te);

    rc().args([
        "--config",
        &te.config,
        "--at",
        "2024-01-01 09:00:00",
        "submit",
        "1234",
    ])
    .assert()
    .success();

    rc().args([
        "--config",
        &te.config,
        "--at",
        "2024-01-01 09:01:00",
        "confirm",
        "--name",
        "jo lee",
    ])
    .assert()
    .success()
    .stdout(contains("Jo Lee logged"));
}

#[test]
fn test_confirm_revalidates_the_duplicate_rule() {
    let te = setup("confirm_duplicate");
    write_config(&te, &[]);
    write_phone_roster(&te);

    rc().args([
        "--config",
        &te.config,
        "--at",
        "2024-01-01 09:00:00",
        "submit",
        "1234",
    ])
    .assert()
    .success();
    rc().args([
        "--config",
        &te.config,
        "--at",
        "2024-01-01 09:01:00",
        "confirm",
        "--choice",
        "1",
    ])
    .assert()
    .success();

    // Same person tries again later that day through the two-step path.
    rc().args([
        "--config",
        &te.config,
        "--at",
        "2024-01-01 18:00:00",
        "submit",
        "1234",
    ])
    .assert()
    .success();
    rc().args([
        "--config",
        &te.config,
        "--at",
        "2024-01-01 18:01:00",
        "confirm",
        "--choice",
        "1",
    ])
    .assert()
    .success()
    .stdout(contains("already been logged for today"));

    assert_eq!(te.log_lines().len(), 2); // header + Jo Lee once
    assert!(!te.pending_path().exists());
}

#[test]
fn test_confirm_rejects_a_name_outside_the_candidates() {
    let te = setup("confirm_outsider");
    write_config(&te, &[]);
    write_phone_roster(&te);

    rc().args([
        "--config",
        &te.config,
        "--at",
        "2024-01-01 09:00:00",
        "submit",
        "1234",
    ])
    .assert()
    .success();

    rc().args([
        "--config",
        &te.config,
        "--at",
        "2024-01-01 09:01:00",
        "confirm",
        "--name",
        "Ana Diaz",
    ])
    .assert()
    .failure()
    .stderr(contains("not one of the pending candidates"));

    // The pending state survives a bad choice.
    assert!(te.pending_path().exists());
}

#[test]
fn test_stale_pending_state_is_rejected() {
    let te = setup("confirm_stale");
    write_config(&te, &[]);
    write_phone_roster(&te);

    rc().args([
        "--config",
        &te.config,
        "--at",
        "2024-01-01 23:50:00",
        "submit",
        "1234",
    ])
    .assert()
    .success();

    rc().args([
        "--config",
        &te.config,
        "--at",
        "2024-01-02 00:10:00",
        "confirm",
        "--choice",
        "1",
    ])
    .assert()
    .failure()
    .stderr(contains("stale"));
}

#[test]
fn test_cancel_clears_pending_state() {
    let te = setup("cancel_pending");
    write_config(&te, &[]);
    write_phone_roster(&te);

    rc().args([
        "--config",
        &te.config,
        "--at",
        "2024-01-01 09:00:00",
        "submit",
        "1234",
    ])
    .assert()
    .success();
    assert!(te.pending_path().exists());

    rc().args(["--config", &te.config, "cancel"])
        .assert()
        .success()
        .stdout(contains("Pending selection discarded"));
    assert!(!te.pending_path().exists());

    rc().args(["--config", &te.config, "cancel"])
        .assert()
        .success()
        .stdout(contains("No pending selection to cancel"));
}
