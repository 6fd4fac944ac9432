use crate::cli::commands::open_handle;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Public counters, no admin gate (mirrors the entry counter shown on the
/// submission form).
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let now = cli.now()?;

    let mut store = open_handle(cfg)?;
    let log = store.snapshot()?;
    let today = log.iter().filter(|r| r.date == now.date()).count();

    println!("Total entries: {}", log.len());
    println!("Today:         {}", today);

    Ok(())
}
