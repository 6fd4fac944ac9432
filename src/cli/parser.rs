use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::utils::date::parse_datetime;
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rollcall
/// CLI application to log attendance against a roster file
#[derive(Parser)]
#[command(
    name = "rollcall",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance logging CLI: look up a roster key, block same-day duplicates, append to the log",
    long_about = None
)]
pub struct Cli {
    /// Override config file path (useful for tests or multiple deployments)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Pin the wall clock, "YYYY-MM-DD HH:MM[:SS]" (tests)
    #[arg(global = true, long = "at", hide = true)]
    pub at: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective "now": the pinned --at instant, or the local wall clock.
    pub fn now(&self) -> AppResult<NaiveDateTime> {
        match &self.at {
            Some(s) => parse_datetime(s).ok_or_else(|| AppError::InvalidDate(s.clone())),
            None => Ok(chrono::Local::now().naive_local()),
        }
    }

    /// Active config file path.
    pub fn config_file(&self) -> PathBuf {
        match &self.config {
            Some(p) => PathBuf::from(p),
            None => Config::config_file(),
        }
    }

    /// Session-scoped pending state lives next to the active config file.
    pub fn pending_file(&self) -> PathBuf {
        let cfg_file = self.config_file();
        match cfg_file.parent() {
            Some(dir) => dir.join("pending.json"),
            None => PathBuf::from("pending.json"),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and data directory
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Log one attendance submission
    Submit {
        /// Identifier as typed: a student ID, or the last 4 digits of the phone number
        key: String,
    },

    /// Confirm a pending ambiguous submission
    Confirm {
        /// 1-based index into the candidate list shown by `submit`
        #[arg(long = "choice", conflicts_with = "name")]
        choice: Option<usize>,

        /// Candidate name exactly as shown by `submit`
        #[arg(long = "name")]
        name: Option<String>,
    },

    /// Discard a pending ambiguous submission
    Cancel,

    /// Show public entry counters
    Status,

    /// View the attendance log (admin)
    List {
        /// Filter by period.
        ///
        /// Supported formats: YYYY, YYYY-MM, YYYY-MM-DD, and ranges like
        /// YYYY-MM:YYYY-MM. Special value "all" shows the entire log.
        /// If omitted, the entire log is shown.
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges)"
        )]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's records")]
        now: bool,

        #[arg(
            long = "window",
            help = "Apply the configured retention window to the view"
        )]
        window: bool,

        #[arg(long = "password", help = "Admin password (required when configured)")]
        password: Option<String>,
    },

    /// Drop log records outside the configured retention window
    Purge {
        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Export the attendance log in various formats
    Export {
        /// Export format: csv, json, xlsx
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Date range to export.
        ///
        /// Supported formats: YYYY, YYYY-MM, YYYY-MM-DD, and ranges like
        /// YYYY-MM-DD:YYYY-MM-DD. Special value "all" exports everything.
        /// If omitted, all records are exported.
        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,

        #[arg(long = "password", help = "Admin password (required when configured)")]
        password: Option<String>,
    },

    /// Create a backup copy of the log store
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup into a .zip
        #[arg(long)]
        compress: bool,
    },

    /// Manage the SQLite store (sqlite backend only)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal operations log (sqlite backend only)
    Log {
        #[arg(long = "print", help = "Print rows from the internal ops table")]
        print: bool,
    },
}
