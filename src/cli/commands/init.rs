use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with defaults (existing files are kept)
pub fn handle(cli: &Cli) -> AppResult<()> {
    let config_path = cli.config_file();
    let path = Config::init_all(&config_path)?;
    let cfg = Config::load_from(&path)?;

    println!("⚙️  Initializing rollcall…");
    println!("📄 Config file : {}", path.display());
    println!("📋 Roster      : {}", cfg.roster);
    println!("🗒️  Log         : {}", cfg.log);

    // The roster is an external, read-only collaborator; init never
    // creates it.
    if !cfg.roster_path().exists() {
        warning(format!(
            "Roster file not found yet: {}",
            cfg.roster_path().display()
        ));
        info("Drop the roster CSV in place before the first submission.");
    }

    println!("🎉 rollcall initialization completed!");
    Ok(())
}
