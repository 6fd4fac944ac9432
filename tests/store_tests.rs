//! Store backends: version stamps, snapshot caching, round trips.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rollcall::models::record::AttendanceRecord;
use rollcall::models::roster::RosterKind;
use rollcall::store::csv::CsvStore;
use rollcall::store::sqlite::{SqliteStore, load_ops, oplog};
use rollcall::store::{LogStore, StoreHandle};
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_file(name: &str, ext: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_store.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

fn at(date: &str, time: &str) -> NaiveDateTime {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_time(NaiveTime::parse_from_str(time, "%H:%M:%S").unwrap())
}

fn record(key: &str, name: &str, date: &str, time: &str) -> AttendanceRecord {
    AttendanceRecord::new(key, name, at(date, time))
}

#[test]
fn missing_csv_log_loads_as_empty() {
    let path = temp_file("csv_missing", "csv");
    let mut store = CsvStore::new(path, RosterKind::PhoneLast4);

    assert!(store.load().unwrap().is_empty());
    assert_eq!(store.version().unwrap(), 0);
}

#[test]
fn csv_append_survives_a_reload_from_disk() {
    let path = temp_file("csv_roundtrip", "csv");

    let mut store = CsvStore::new(path.clone(), RosterKind::PhoneLast4);
    store
        .append(&record("1234", "Jo Lee", "2024-01-01", "09:00:00"))
        .unwrap();
    store
        .append(&record("0042", "Ana Diaz", "2024-01-01", "09:05:00"))
        .unwrap();

    // A fresh store instance sees exactly what was written.
    let mut reopened = CsvStore::new(path.clone(), RosterKind::PhoneLast4);
    let log = reopened.load().unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].display_name, "Jo Lee");
    assert_eq!(log[1].time_str(), "09:05:00");

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("Last4,Name,Date,Time"));
}

#[test]
fn csv_version_stamp_bumps_on_every_write() {
    let path = temp_file("csv_version", "csv");
    let mut store = CsvStore::new(path, RosterKind::StudentId);

    assert_eq!(store.version().unwrap(), 0);
    store
        .append(&record("a1", "Jo Lee", "2024-01-01", "09:00:00"))
        .unwrap();
    assert_eq!(store.version().unwrap(), 1);

    store.replace(&Vec::new()).unwrap();
    assert_eq!(store.version().unwrap(), 2);
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn handle_snapshot_follows_writes_through_the_store() {
    let path = temp_file("handle_cache", "csv");
    let mut handle = StoreHandle::new(Box::new(CsvStore::new(path, RosterKind::StudentId)));

    assert!(handle.snapshot().unwrap().is_empty());
    // Unchanged stamp: the snapshot is stable across repeated reads.
    assert!(handle.snapshot().unwrap().is_empty());

    handle
        .append(&record("a1", "Jo Lee", "2024-01-01", "09:00:00"))
        .unwrap();

    let log = handle.snapshot().unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].display_name, "Jo Lee");
}

#[test]
fn sqlite_round_trip_and_durable_version_stamp() {
    let path = temp_file("sqlite_roundtrip", "sqlite");

    let mut store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.version().unwrap(), 0);

    store
        .append(&record("1234", "Jo Lee", "2024-01-01", "09:00:00"))
        .unwrap();
    store
        .append(&record("1234", "Sam Kim", "2024-01-01", "09:01:00"))
        .unwrap();
    assert_eq!(store.version().unwrap(), 2);

    // The stamp rides on PRAGMA user_version: a reopen still sees it.
    drop(store);
    let mut reopened = SqliteStore::open(&path).unwrap();
    assert_eq!(reopened.version().unwrap(), 2);

    let log = reopened.load().unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log[1].display_name, "Sam Kim");
}

#[test]
fn sqlite_replace_rewrites_the_whole_log() {
    let path = temp_file("sqlite_replace", "sqlite");

    let mut store = SqliteStore::open(&path).unwrap();
    store
        .append(&record("1234", "Jo Lee", "2024-01-01", "20:00:00"))
        .unwrap();
    store
        .append(&record("0042", "Ana Diaz", "2024-01-02", "08:00:00"))
        .unwrap();

    let kept = vec![record("0042", "Ana Diaz", "2024-01-02", "08:00:00")];
    store.replace(&kept).unwrap();

    let log = store.load().unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].display_name, "Ana Diaz");
    assert_eq!(store.version().unwrap(), 3);
}

#[test]
fn ops_log_records_and_lists_newest_first() {
    let path = temp_file("sqlite_ops", "sqlite");
    let store = SqliteStore::open(&path).unwrap();

    oplog(store.conn(), at("2024-01-01", "09:00:00"), "submit", "Jo Lee logged").unwrap();
    oplog(store.conn(), at("2024-01-01", "10:00:00"), "purge", "2 dropped").unwrap();

    let rows = load_ops(store.conn()).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].1, "purge");
    assert_eq!(rows[1].1, "submit");
    assert_eq!(rows[1].0, "2024-01-01 09:00:00");
}
