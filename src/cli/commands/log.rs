use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::sqlite::{SqliteStore, load_ops};
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if matches!(&cli.command, Commands::Log { print: true }) {
        if !cfg.store.trim().eq_ignore_ascii_case("sqlite") {
            return Err(AppError::Config(
                "the log command requires store = sqlite".to_string(),
            ));
        }

        let store = SqliteStore::open(&cfg.database_path())?;
        let rows = load_ops(store.conn())?;

        if rows.is_empty() {
            info("Operations log is empty.");
            return Ok(());
        }

        let mut table = Table::new(&["Timestamp", "Operation", "Message"]);
        for (timestamp, operation, message) in rows {
            table.add_row(vec![timestamp, operation, message]);
        }
        println!("{}", table.render());
    }

    Ok(())
}
