//! Unified application error type.
//! All modules (store, core, cli, roster) return AppError to keep the error
//! handling consistent and easy to manage.
//!
//! "No roster match" and "already logged today" are deliberately NOT here:
//! they are regular interaction outcomes (see core::ledger), not failures.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Source files
    // ---------------------------
    #[error("Required file not found: {0}")]
    SourceMissing(String),

    #[error("Could not detect roster columns. Headers found: {detected}")]
    SchemaUnrecognized { detected: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Interaction errors
    // ---------------------------
    #[error("Submissions are closed right now ({0})")]
    WindowClosed(String),

    #[error("No pending selection: nothing to confirm")]
    NoPending,

    #[error("Pending selection is stale: {0}")]
    StaleSession(String),

    #[error("'{0}' is not one of the pending candidates")]
    NotACandidate(String),

    #[error("Admin password missing or incorrect")]
    Unauthorized,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Persistence
    // ---------------------------
    #[error("Failed to persist the attendance log: {0}")]
    Persistence(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
