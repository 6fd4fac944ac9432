//! Time-window policies: the daily submission window and the retention
//! window used for log housekeeping. Both are configuration, not code;
//! the parsers accept the compact strings used in the config file.

use crate::errors::{AppError, AppResult};
use crate::models::record::{AttendanceLog, AttendanceRecord};
use chrono::{Duration, NaiveDateTime, NaiveTime};

pub fn parse_hhmm(s: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| AppError::InvalidTime(s.trim().to_string()))
}

/// Daily submission window ("HH:MM-HH:MM"); "none" disables the gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubmissionWindow {
    Open,
    Daily { start: NaiveTime, end: NaiveTime },
}

impl SubmissionWindow {
    pub fn parse(s: &str) -> AppResult<Self> {
        let t = s.trim();
        if t.is_empty() || t.eq_ignore_ascii_case("none") {
            return Ok(SubmissionWindow::Open);
        }

        let Some((start_raw, end_raw)) = t.split_once('-') else {
            return Err(AppError::Config(format!(
                "invalid submission_window '{}' (expected HH:MM-HH:MM or none)",
                t
            )));
        };

        let start = parse_hhmm(start_raw)?;
        let end = parse_hhmm(end_raw)?;
        if end <= start {
            return Err(AppError::Config(format!(
                "submission_window '{}' ends before it starts",
                t
            )));
        }

        Ok(SubmissionWindow::Daily { start, end })
    }

    pub fn contains(&self, now: NaiveDateTime) -> bool {
        match self {
            SubmissionWindow::Open => true,
            SubmissionWindow::Daily { start, end } => {
                let t = now.time();
                t >= *start && t <= *end
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            SubmissionWindow::Open => "always open".to_string(),
            SubmissionWindow::Daily { start, end } => {
                format!(
                    "open daily {}-{}",
                    start.format("%H:%M"),
                    end.format("%H:%M")
                )
            }
        }
    }
}

/// Which log rows survive housekeeping, relative to "now".
///
/// - `none`: keep everything.
/// - `today`: keep only the current calendar date.
/// - `after=HH:MM`: once the hour has passed, drop rows older than today
///   at that hour.
/// - `rolling=EV/MO`: meal-service style. After the morning boundary keep
///   rows at/after today's evening boundary; before it, keep rows at/after
///   yesterday's evening boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RetentionPolicy {
    None,
    Today,
    After(NaiveTime),
    Rolling {
        evening: NaiveTime,
        morning: NaiveTime,
    },
}

impl RetentionPolicy {
    pub fn parse(s: &str) -> AppResult<Self> {
        let t = s.trim();
        if t.is_empty() || t.eq_ignore_ascii_case("none") {
            return Ok(RetentionPolicy::None);
        }
        if t.eq_ignore_ascii_case("today") {
            return Ok(RetentionPolicy::Today);
        }
        if let Some(rest) = t.strip_prefix("after=") {
            return Ok(RetentionPolicy::After(parse_hhmm(rest)?));
        }
        if let Some(rest) = t.strip_prefix("rolling=") {
            let Some((evening_raw, morning_raw)) = rest.split_once('/') else {
                return Err(AppError::Config(format!(
                    "invalid retention '{}' (expected rolling=HH:MM/HH:MM)",
                    t
                )));
            };
            return Ok(RetentionPolicy::Rolling {
                evening: parse_hhmm(evening_raw)?,
                morning: parse_hhmm(morning_raw)?,
            });
        }

        Err(AppError::Config(format!(
            "invalid retention '{}' (expected none, today, after=HH:MM or rolling=HH:MM/HH:MM)",
            t
        )))
    }

    /// Earliest timestamp kept, relative to `now`. `None` keeps everything.
    pub fn cutoff(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            RetentionPolicy::None => None,
            RetentionPolicy::Today => Some(now.date().and_time(NaiveTime::MIN)),
            RetentionPolicy::After(hour) => {
                if now.time() >= *hour {
                    Some(now.date().and_time(*hour))
                } else {
                    None
                }
            }
            RetentionPolicy::Rolling { evening, morning } => {
                if now.time() > *morning {
                    Some(now.date().and_time(*evening))
                } else {
                    Some((now.date() - Duration::days(1)).and_time(*evening))
                }
            }
        }
    }
}

/// Pure timestamp filter: keep only records inside the retention window
/// relative to `now`. Never inspects identifiers or names.
pub fn purge_stale(
    log: &[AttendanceRecord],
    now: NaiveDateTime,
    policy: RetentionPolicy,
) -> AttendanceLog {
    match policy.cutoff(now) {
        None => log.to_vec(),
        Some(cutoff) => log
            .iter()
            .filter(|r| r.timestamp() >= cutoff)
            .cloned()
            .collect(),
    }
}
