//! The attendance reconciliation step: identifier lookup, duplicate
//! suppression, append.
//!
//! Stateless between calls; all state lives in the externally supplied
//! roster and log snapshots. Persisting the updated log is the caller's
//! responsibility (see store::LogStore).

use crate::errors::{AppError, AppResult};
use crate::models::record::{AttendanceLog, AttendanceRecord};
use crate::models::roster::{Roster, RosterEntry, RosterKind};
use chrono::{NaiveDate, NaiveDateTime};

/// Outcome of an identifier lookup against the roster.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    NotFound,
    Unique(RosterEntry),
    /// More than one entry shares the key; the submitter must pick a name
    /// before anything is appended.
    Ambiguous(Vec<RosterEntry>),
}

/// Outcome of one submission against the current log snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Logged(AttendanceRecord),
    DuplicateRejected,
}

/// High-level business logic for submissions.
pub struct Ledger;

impl Ledger {
    /// Normalize the submitted text for the roster's matching mode.
    ///
    /// Last-4 mode requires exactly 4 digits; nothing is looked up when the
    /// format check fails.
    pub fn normalize_key(raw: &str, kind: RosterKind) -> AppResult<String> {
        let trimmed = raw.trim();
        match kind {
            RosterKind::StudentId => {
                if trimmed.is_empty() {
                    return Err(AppError::MalformedInput(
                        "identifier must not be empty".to_string(),
                    ));
                }
                Ok(trimmed.to_lowercase())
            }
            RosterKind::PhoneLast4 => {
                if trimmed.len() != 4 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
                    return Err(AppError::MalformedInput(
                        "please enter exactly 4 digits".to_string(),
                    ));
                }
                Ok(trimmed.to_string())
            }
        }
    }

    /// Lookup with an already-normalized key.
    pub fn lookup(key: &str, roster: &Roster) -> Resolution {
        let matches = roster.matches(key);
        match matches.len() {
            0 => Resolution::NotFound,
            1 => Resolution::Unique(matches[0].clone()),
            _ => Resolution::Ambiguous(matches.into_iter().cloned().collect()),
        }
    }

    /// Normalize and look up in one step.
    pub fn resolve(raw: &str, roster: &Roster) -> AppResult<Resolution> {
        let key = Self::normalize_key(raw, roster.kind)?;
        Ok(Self::lookup(&key, roster))
    }

    /// True when the log already holds a record for this person today.
    ///
    /// The rule matches on the display name (case-insensitive, trimmed),
    /// not on the roster identifier: the same person is recognized even
    /// when the submitted key text varies between visits.
    pub fn already_logged(log: &[AttendanceRecord], name: &str, date: NaiveDate) -> bool {
        let needle = name.trim().to_lowercase();
        log.iter()
            .any(|r| r.date == date && r.display_name.trim().to_lowercase() == needle)
    }

    /// Append a record for `name` unless the duplicate rule rejects it.
    ///
    /// On success the log grows by exactly one record; on rejection it is
    /// left untouched. The append is in-memory only.
    pub fn submit(
        submitted_key: &str,
        name: &str,
        when: NaiveDateTime,
        log: &mut AttendanceLog,
    ) -> SubmitOutcome {
        if Self::already_logged(log, name, when.date()) {
            return SubmitOutcome::DuplicateRejected;
        }

        let record = AttendanceRecord::new(submitted_key, name, when);
        log.push(record.clone());
        SubmitOutcome::Logged(record)
    }
}
