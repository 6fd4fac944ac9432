//! rollcall library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod roster;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Submit { .. } => cli::commands::submit::handle(cli, cfg),
        Commands::Confirm { .. } => cli::commands::confirm::handle(cli, cfg),
        Commands::Cancel => cli::commands::cancel::handle(cli),
        Commands::Status => cli::commands::status::handle(cli, cfg),
        Commands::List { .. } => cli::commands::list::handle(cli, cfg),
        Commands::Purge { .. } => cli::commands::purge::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(cli, cfg),
        Commands::Db { .. } => cli::commands::db::handle(cli, cfg),
        Commands::Log { .. } => cli::commands::log::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. load config once; --config overrides the default location
    let cfg = Config::load_from(&cli.config_file())?;

    // 3. hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
