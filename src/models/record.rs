use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// One row of the attendance log.
///
/// Created exactly once per successful submission and never mutated
/// afterwards. The name is copied from the roster at submission time, so
/// the log stays valid even if the roster later changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceRecord {
    pub submitted_key: String,
    pub display_name: String,
    pub date: NaiveDate, // log "Date" column, "YYYY-MM-DD"
    pub time: NaiveTime, // log "Time" column, "HH:MM:SS"
}

impl AttendanceRecord {
    pub fn new(submitted_key: &str, display_name: &str, when: NaiveDateTime) -> Self {
        Self {
            submitted_key: submitted_key.to_string(),
            display_name: display_name.trim().to_string(),
            date: when.date(),
            time: when.time(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

/// Insertion-ordered append log. The in-memory value is always a snapshot
/// of the backing store, never a live view.
pub type AttendanceLog = Vec<AttendanceRecord>;
