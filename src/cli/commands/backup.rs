use crate::cli::commands::open_handle;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;

/// Create a backup copy of the active log store.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = &cli.command {
        let final_path = BackupLogic::backup(cfg, file, *compress)?;

        // Non-blocking ops note (sqlite backend only).
        let now = cli.now()?;
        if let Ok(mut store) = open_handle(cfg)
            && let Err(e) = store.note(now, "backup", &final_path.to_string_lossy())
        {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }
    }

    Ok(())
}
