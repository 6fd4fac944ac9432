use crate::cli::commands::{require_admin, store_kind};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::window::{RetentionPolicy, purge_stale};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;
use crate::utils::table::Table;

/// Admin view of the attendance log.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        now: today_only,
        window,
        password,
    } = &cli.command
    {
        require_admin(cfg, password.as_deref())?;

        let now = cli.now()?;
        let kind = store_kind(cfg)?;
        let mut store = crate::store::StoreHandle::open(cfg, kind)?;
        let mut log = store.snapshot()?;

        // View-only filter: nothing is written back here.
        if *window {
            let retention = RetentionPolicy::parse(&cfg.retention)?;
            log = purge_stale(&log, now, retention);
        }

        if *today_only {
            log.retain(|r| r.date == now.date());
        } else if let Some(p) = period
            && let Some((start, end)) = ExportLogic::date_bounds(&Some(p.clone()))?
        {
            log.retain(|r| r.date >= start && r.date <= end);
        }

        if log.is_empty() {
            info("No entries in this view.");
            return Ok(());
        }

        let mut table = Table::new(&[kind.log_header(), "Name", "Date", "Time"]);
        for r in &log {
            table.add_row(vec![
                r.submitted_key.clone(),
                r.display_name.clone(),
                r.date_str(),
                r.time_str(),
            ]);
        }

        println!("{}", table.render());
        println!("{} entries.", log.len());
    }

    Ok(())
}
