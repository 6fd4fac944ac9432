//! Retention housekeeping through the CLI: the explicit purge command,
//! the automatic purge at the top of every submission, and the windowed
//! admin view.

use predicates::str::contains;

mod common;
use common::{rc, setup, write_config, write_id_roster};

#[test]
fn test_purge_today_policy_drops_older_days() {
    let te = setup("purge_today");
    write_config(&te, &[("retention", "today")]);
    write_id_roster(&te);

    // Two days of entries. The retention purge runs at the top of every
    // submit, so day one's record is dropped when day two begins.
    rc().args([
        "--config",
        &te.config,
        "--at",
        "2024-01-01 09:00:00",
        "submit",
        "a1",
    ])
    .assert()
    .success();
    rc().args([
        "--config",
        &te.config,
        "--at",
        "2024-01-02 09:00:00",
        "submit",
        "b2",
    ])
    .assert()
    .success();

    rc().args(["--config", &te.config, "--at", "2024-01-02 10:00:00", "status"])
        .assert()
        .success()
        .stdout(contains("Total entries: 1"));

    let lines = te.log_lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("Sam Kim"));
}

#[test]
fn test_explicit_purge_with_none_policy_is_a_noop() {
    let te = setup("purge_none");
    write_config(&te, &[]);
    write_id_roster(&te);

    rc().args(["--config", &te.config, "purge", "--force"])
        .assert()
        .success()
        .stdout(contains("nothing to purge"));
}

#[test]
fn test_explicit_purge_reports_dropped_count() {
    let te = setup("purge_count");
    write_config(&te, &[]);
    write_id_roster(&te);

    // Seed with no retention, then purge under a "today" policy.
    rc().args([
        "--config",
        &te.config,
        "--at",
        "2024-01-01 09:00:00",
        "submit",
        "a1",
    ])
    .assert()
    .success();
    rc().args([
        "--config",
        &te.config,
        "--at",
        "2024-01-02 09:00:00",
        "submit",
        "b2",
    ])
    .assert()
    .success();

    write_config(&te, &[("retention", "today")]);

    rc().args([
        "--config",
        &te.config,
        "--at",
        "2024-01-02 12:00:00",
        "purge",
        "--force",
    ])
    .assert()
    .success()
    .stdout(contains("Removed 1 stale record(s); 1 kept."));

    rc().args([
        "--config",
        &te.config,
        "--at",
        "2024-01-02 12:00:00",
        "purge",
        "--force",
    ])
    .assert()
    .success()
    .stdout(contains("No stale records to purge"));
}

#[test]
fn test_rolling_policy_keeps_the_overnight_window() {
    let te = setup("purge_rolling");
    write_config(&te, &[("retention", "rolling=19:00/10:00")]);
    write_id_roster(&te);

    // Dinner-time entry on day one.
    rc().args([
        "--config",
        &te.config,
        "--at",
        "2024-01-01 20:00:00",
        "submit",
        "a1",
    ])
    .assert()
    .success();

    // Early next morning (before 10:00): the overnight window still holds
    // yesterday evening's record.
    rc().args([
        "--config",
        &te.config,
        "--at",
        "2024-01-02 08:00:00",
        "submit",
        "b2",
    ])
    .assert()
    .success();

    rc().args(["--config", &te.config, "--at", "2024-01-02 08:30:00", "status"])
        .assert()
        .success()
        .stdout(contains("Total entries: 2"));

    // Past the morning boundary the window moves to tonight: both old
    // records fall outside it.
    rc().args([
        "--config",
        &te.config,
        "--at",
        "2024-01-02 11:00:00",
        "purge",
        "--force",
    ])
    .assert()
    .success()
    .stdout(contains("Removed 2 stale record(s); 0 kept."));
}

#[test]
fn test_list_window_filters_the_view_without_writing() {
    let te = setup("list_window");
    // Seed without retention so the automatic purge stays out of the way.
    write_config(&te, &[]);
    write_id_roster(&te);

    rc().args([
        "--config",
        &te.config,
        "--at",
        "2024-01-01 18:00:00",
        "submit",
        "a1",
    ])
    .assert()
    .success();
    rc().args([
        "--config",
        &te.config,
        "--at",
        "2024-01-01 20:00:00",
        "submit",
        "b2",
    ])
    .assert()
    .success();

    write_config(&te, &[("retention", "rolling=19:00/10:00")]);

    // Early-morning admin view: only the evening entry is inside the
    // window.
    rc().args([
        "--config",
        &te.config,
        "--at",
        "2024-01-02 08:00:00",
        "list",
        "--window",
    ])
    .assert()
    .success()
    .stdout(contains("Sam Kim"))
    .stdout(contains("1 entries."));

    // The view filter never rewrites the store.
    assert_eq!(te.log_lines().len(), 3);
}
