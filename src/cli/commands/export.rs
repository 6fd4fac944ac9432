use crate::cli::commands::{open_handle, require_admin};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

/// Export the attendance log (admin).
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
        password,
    } = &cli.command
    {
        require_admin(cfg, password.as_deref())?;

        let mut store = open_handle(cfg)?;
        let log = store.snapshot()?;

        ExportLogic::export(&log, format.clone(), file, range, *force)?;
    }

    Ok(())
}
