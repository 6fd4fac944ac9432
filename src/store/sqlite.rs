//! Alternate backend: the same append log kept as SQLite rows.
//!
//! The version stamp rides on `PRAGMA user_version`, so it is bumped
//! durably and visible to any process that goes through the store. An
//! `ops` table keeps a small operations log (submits, purges, backups),
//! printable with `rollcall log --print`.

use crate::errors::{AppError, AppResult};
use crate::models::record::{AttendanceLog, AttendanceRecord};
use crate::store::LogStore;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rusqlite::{Connection, Row, params};
use std::path::Path;

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> AppResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS attendance (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                submitted_key TEXT NOT NULL,
                name TEXT NOT NULL,
                date TEXT NOT NULL,
                time TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS ops (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp TEXT NOT NULL,
                operation TEXT NOT NULL,
                message TEXT NOT NULL
            );",
        )?;
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    fn bump_version(&self) -> AppResult<()> {
        let v: i64 = self
            .conn
            .query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        self.conn.pragma_update(None, "user_version", v + 1)?;
        Ok(())
    }
}

fn map_row(row: &Row) -> rusqlite::Result<AttendanceRecord> {
    let date_str: String = row.get("date")?;
    let time_str: String = row.get("time")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let time = NaiveTime::parse_from_str(&time_str, "%H:%M:%S").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(time_str.clone())),
        )
    })?;

    Ok(AttendanceRecord {
        submitted_key: row.get("submitted_key")?,
        display_name: row.get("name")?,
        date,
        time,
    })
}

impl LogStore for SqliteStore {
    fn load(&mut self) -> AppResult<AttendanceLog> {
        let mut stmt = self.conn.prepare(
            "SELECT submitted_key, name, date, time
             FROM attendance
             ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn append(&mut self, record: &AttendanceRecord) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO attendance (submitted_key, name, date, time)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                record.submitted_key,
                record.display_name,
                record.date_str(),
                record.time_str(),
            ],
        )?;
        self.bump_version()
    }

    fn replace(&mut self, log: &AttendanceLog) -> AppResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM attendance", [])?;
        for r in log {
            tx.execute(
                "INSERT INTO attendance (submitted_key, name, date, time)
                 VALUES (?1, ?2, ?3, ?4)",
                params![r.submitted_key, r.display_name, r.date_str(), r.time_str()],
            )?;
        }
        tx.commit()?;
        self.bump_version()
    }

    fn version(&mut self) -> AppResult<u64> {
        let v: i64 = self
            .conn
            .query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        Ok(v as u64)
    }

    fn note(&mut self, when: NaiveDateTime, operation: &str, message: &str) -> AppResult<()> {
        oplog(&self.conn, when, operation, message)
    }
}

/// Write one line into the `ops` table.
pub fn oplog(
    conn: &Connection,
    when: NaiveDateTime,
    operation: &str,
    message: &str,
) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO ops (timestamp, operation, message)
         VALUES (?1, ?2, ?3)",
    )?;

    stmt.execute(params![
        when.format("%Y-%m-%d %H:%M:%S").to_string(),
        operation,
        message
    ])?;

    Ok(())
}

/// All ops rows, newest first.
pub fn load_ops(conn: &Connection) -> AppResult<Vec<(String, String, String)>> {
    let mut stmt = conn.prepare(
        "SELECT timestamp, operation, message
         FROM ops
         ORDER BY id DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
