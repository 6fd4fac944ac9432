//! Default backend: the log is a tabular CSV file with columns
//! `[Student ID|Last4, Name, Date, Time]`, read fully before every
//! interaction and rewritten fully after every write. A missing file loads
//! as an empty log (first interaction on a fresh deployment).

use crate::errors::{AppError, AppResult};
use crate::models::record::{AttendanceLog, AttendanceRecord};
use crate::models::roster::RosterKind;
use crate::store::LogStore;
use chrono::{NaiveDate, NaiveTime};
use std::path::PathBuf;

pub struct CsvStore {
    path: PathBuf,
    kind: RosterKind,
    /// Bumped on every write through this store. Writes from outside the
    /// process are not observed, by design.
    writes: u64,
}

impl CsvStore {
    pub fn new(path: PathBuf, kind: RosterKind) -> Self {
        Self {
            path,
            kind,
            writes: 0,
        }
    }

    fn read_all(&self) -> AppResult<AttendanceLog> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = csv::Reader::from_path(&self.path)?;
        let mut log = Vec::new();

        for record in rdr.records() {
            let record = record?;
            let field = |i: usize| record.get(i).unwrap_or("").trim().to_string();

            let date_str = field(2);
            let time_str = field(3);
            let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(date_str.clone()))?;
            let time = parse_log_time(&time_str)?;

            log.push(AttendanceRecord {
                submitted_key: field(0),
                display_name: field(1),
                date,
                time,
            });
        }

        Ok(log)
    }

    fn write_all(&mut self, log: &AttendanceLog) -> AppResult<()> {
        let mut wtr =
            csv::Writer::from_path(&self.path).map_err(|e| AppError::Persistence(e.to_string()))?;

        wtr.write_record([self.kind.log_header(), "Name", "Date", "Time"])
            .map_err(|e| AppError::Persistence(e.to_string()))?;

        for r in log {
            wtr.write_record([
                r.submitted_key.as_str(),
                r.display_name.as_str(),
                &r.date_str(),
                &r.time_str(),
            ])
            .map_err(|e| AppError::Persistence(e.to_string()))?;
        }

        wtr.flush()
            .map_err(|e| AppError::Persistence(e.to_string()))?;

        self.writes += 1;
        Ok(())
    }
}

/// Log files written by older variants carry HH:MM times.
fn parse_log_time(s: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| AppError::InvalidTime(s.to_string()))
}

impl LogStore for CsvStore {
    fn load(&mut self) -> AppResult<AttendanceLog> {
        self.read_all()
    }

    fn append(&mut self, record: &AttendanceRecord) -> AppResult<()> {
        // Full-file rewrite semantics, even though conceptually this is
        // an append log.
        let mut log = self.read_all()?;
        log.push(record.clone());
        self.write_all(&log)
    }

    fn replace(&mut self, log: &AttendanceLog) -> AppResult<()> {
        self.write_all(log)
    }

    fn version(&mut self) -> AppResult<u64> {
        Ok(self.writes)
    }
}
