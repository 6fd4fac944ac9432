use crate::cli::commands::open_handle;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::ledger::{Ledger, SubmitOutcome};
use crate::core::session::PendingDisambiguation;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Second step of the disambiguation protocol: consume the pending
/// candidate set, re-validate the duplicate rule against a fresh log
/// snapshot, then append.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Confirm { choice, name } = &cli.command {
        let now = cli.now()?;
        let pending_path = cli.pending_file();

        let pending = PendingDisambiguation::load(&pending_path)?;
        pending.ensure_fresh(now.date())?;

        let chosen = pending.choose(*choice, name.as_deref())?;

        // The log may have moved since the first step; never trust the
        // earlier snapshot.
        let mut store = open_handle(cfg)?;
        let mut log = store.snapshot()?;

        match Ledger::submit(&pending.submitted_key, &chosen, now, &mut log) {
            SubmitOutcome::Logged(record) => {
                store.append(&record)?;
                store.note(
                    now,
                    "submit",
                    &format!("{} logged (disambiguated)", record.display_name),
                )?;
                PendingDisambiguation::clear(&pending_path)?;
                success(format!(
                    "{} logged at {} on {}",
                    record.display_name,
                    record.time_str(),
                    record.date_str()
                ));
            }
            SubmitOutcome::DuplicateRejected => {
                PendingDisambiguation::clear(&pending_path)?;
                warning("You have already been logged for today.");
            }
        }
    }

    Ok(())
}
