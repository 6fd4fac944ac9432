//! Log store abstraction.
//!
//! The ledger (core::ledger) never touches files: it works on snapshots
//! supplied by a `LogStore`, so a different backing store can serialize
//! writes without changing the ledger's contract.

pub mod csv;
pub mod sqlite;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::record::{AttendanceLog, AttendanceRecord};
use crate::models::roster::RosterKind;
use chrono::NaiveDateTime;

/// Persistent home of the attendance log.
///
/// `version()` is a monotonically increasing stamp bumped by every write
/// that goes through the store; callers re-fetch a snapshot only when the
/// stamp changes. Writers that bypass the store (or the process) remain
/// invisible: single-writer deployments only.
pub trait LogStore {
    fn load(&mut self) -> AppResult<AttendanceLog>;

    /// Persist one new record. Conceptually an append; backends are free
    /// to rewrite the whole file if that is their native write model.
    fn append(&mut self, record: &AttendanceRecord) -> AppResult<()>;

    /// Replace the full log (housekeeping purges).
    fn replace(&mut self, log: &AttendanceLog) -> AppResult<()>;

    fn version(&mut self) -> AppResult<u64>;

    /// Record an operations-log line, where the backend supports one.
    fn note(&mut self, _when: NaiveDateTime, _operation: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }
}

/// Open the configured backend.
pub fn open_store(cfg: &Config, kind: RosterKind) -> AppResult<Box<dyn LogStore>> {
    match cfg.store.trim().to_ascii_lowercase().as_str() {
        "csv" => Ok(Box::new(csv::CsvStore::new(cfg.log_path(), kind))),
        "sqlite" => Ok(Box::new(sqlite::SqliteStore::open(&cfg.database_path())?)),
        other => Err(AppError::Config(format!(
            "invalid store backend '{}' (expected csv or sqlite)",
            other
        ))),
    }
}

/// Snapshot cache keyed on the store's version stamp.
pub struct StoreHandle {
    store: Box<dyn LogStore>,
    cached: Option<(u64, AttendanceLog)>,
}

impl StoreHandle {
    pub fn new(store: Box<dyn LogStore>) -> Self {
        Self {
            store,
            cached: None,
        }
    }

    pub fn open(cfg: &Config, kind: RosterKind) -> AppResult<Self> {
        Ok(Self::new(open_store(cfg, kind)?))
    }

    /// Current snapshot, re-read only when the version stamp moved.
    pub fn snapshot(&mut self) -> AppResult<AttendanceLog> {
        let version = self.store.version()?;
        if let Some((cached_version, log)) = &self.cached
            && *cached_version == version
        {
            return Ok(log.clone());
        }

        let log = self.store.load()?;
        self.cached = Some((version, log.clone()));
        Ok(log)
    }

    pub fn append(&mut self, record: &AttendanceRecord) -> AppResult<()> {
        self.store.append(record)?;
        self.cached = None;
        Ok(())
    }

    pub fn replace(&mut self, log: &AttendanceLog) -> AppResult<()> {
        self.store.replace(log)?;
        self.cached = None;
        Ok(())
    }

    pub fn version(&mut self) -> AppResult<u64> {
        self.store.version()
    }

    pub fn note(&mut self, when: NaiveDateTime, operation: &str, message: &str) -> AppResult<()> {
        self.store.note(when, operation, message)
    }
}
