use crate::cli::parser::Cli;
use crate::core::session::PendingDisambiguation;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};

pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = cli.pending_file();

    if PendingDisambiguation::exists(&path) {
        PendingDisambiguation::clear(&path)?;
        info("Pending selection discarded.");
    } else {
        warning("No pending selection to cancel.");
    }

    Ok(())
}
