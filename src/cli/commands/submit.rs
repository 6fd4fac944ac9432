use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::ledger::{Ledger, Resolution, SubmitOutcome};
use crate::core::session::PendingDisambiguation;
use crate::core::window::{RetentionPolicy, SubmissionWindow, purge_stale};
use crate::errors::{AppError, AppResult};
use crate::roster::{self, MatchMode};
use crate::store::StoreHandle;
use crate::ui::messages::{info, success, warning};

/// Handle one attendance submission: housekeeping, lookup, duplicate
/// check, append, persist.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Submit { key } = &cli.command {
        let now = cli.now()?;

        //
        // 1. Submission window gate, before any roster work
        //
        let window = SubmissionWindow::parse(&cfg.submission_window)?;
        if !window.contains(now) {
            return Err(AppError::WindowClosed(window.describe()));
        }

        //
        // 2. Load the roster snapshot
        //
        let mode = MatchMode::parse(&cfg.match_mode)?;
        let roster = roster::load_roster(&cfg.roster_path(), mode)?;
        let mut store = StoreHandle::open(cfg, roster.kind)?;

        //
        // 3. Retention housekeeping, as every interaction does
        //
        let retention = RetentionPolicy::parse(&cfg.retention)?;
        let mut log = store.snapshot()?;
        let kept = purge_stale(&log, now, retention);
        if kept.len() != log.len() {
            let dropped = log.len() - kept.len();
            store.replace(&kept)?;
            store.note(now, "purge", &format!("{} stale record(s) dropped", dropped))?;
            log = kept;
        }

        //
        // 4. Resolve and reconcile
        //
        let key_norm = Ledger::normalize_key(key, roster.kind)?;
        match Ledger::lookup(&key_norm, &roster) {
            Resolution::NotFound => {
                warning(format!("No roster entry found for '{}'.", key_norm));
            }

            Resolution::Unique(entry) => {
                match Ledger::submit(&key_norm, &entry.display_name, now, &mut log) {
                    SubmitOutcome::Logged(record) => {
                        store.append(&record)?;
                        store.note(
                            now,
                            "submit",
                            &format!("{} logged", record.display_name),
                        )?;
                        success(format!(
                            "{} logged at {} on {}",
                            record.display_name,
                            record.time_str(),
                            record.date_str()
                        ));
                    }
                    SubmitOutcome::DuplicateRejected => {
                        warning("You have already been logged for today.");
                    }
                }
            }

            Resolution::Ambiguous(entries) => {
                let candidates: Vec<String> =
                    entries.iter().map(|e| e.display_name.clone()).collect();

                let pending = PendingDisambiguation {
                    submitted_key: key_norm.clone(),
                    candidates: candidates.clone(),
                    date: now.date(),
                };
                pending.save(&cli.pending_file())?;

                warning(format!(
                    "Multiple people share the {} '{}'. Select your name:",
                    roster.kind.describe(),
                    key_norm
                ));
                for (i, name) in candidates.iter().enumerate() {
                    println!("  {}. {}", i + 1, name);
                }
                info("Confirm with `rollcall confirm --choice N` (or --name \"...\"); `rollcall cancel` discards.");
            }
        }
    }

    Ok(())
}
