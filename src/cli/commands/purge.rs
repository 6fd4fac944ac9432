use crate::cli::commands::open_handle;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::window::{RetentionPolicy, purge_stale};
use crate::errors::AppResult;
use crate::ui::messages::{ask_yes_no, info, success};

/// Explicit retention-window purge (the same housekeeping `submit` runs
/// automatically, but interactive and with a confirmation step).
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Purge { force } = &cli.command {
        let now = cli.now()?;

        let retention = RetentionPolicy::parse(&cfg.retention)?;
        if retention == RetentionPolicy::None {
            info("Retention policy is 'none'; nothing to purge.");
            return Ok(());
        }

        let mut store = open_handle(cfg)?;
        let log = store.snapshot()?;
        let kept = purge_stale(&log, now, retention);
        let dropped = log.len() - kept.len();

        if dropped == 0 {
            info("No stale records to purge.");
            return Ok(());
        }

        if !*force && !ask_yes_no(format!("Remove {} stale record(s)?", dropped))? {
            info("Purge cancelled.");
            return Ok(());
        }

        store.replace(&kept)?;
        store.note(now, "purge", &format!("{} stale record(s) dropped", dropped))?;
        success(format!(
            "Removed {} stale record(s); {} kept.",
            dropped,
            kept.len()
        ));
    }

    Ok(())
}
