pub mod backup;
pub mod cancel;
pub mod config;
pub mod confirm;
pub mod db;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod purge;
pub mod status;
pub mod submit;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::roster::RosterKind;
use crate::roster::{self, MatchMode};
use crate::store::StoreHandle;

/// Plaintext password gate for the admin-facing commands. An empty
/// configured password leaves the gate open.
pub(crate) fn require_admin(cfg: &Config, given: Option<&str>) -> AppResult<()> {
    if cfg.admin_password.is_empty() {
        return Ok(());
    }
    match given {
        Some(p) if p == cfg.admin_password => Ok(()),
        _ => Err(AppError::Unauthorized),
    }
}

/// Key kind for store access: derived from the roster when it is readable,
/// from the configured match mode otherwise (admin commands must work even
/// when the roster file is temporarily absent).
pub(crate) fn store_kind(cfg: &Config) -> AppResult<RosterKind> {
    let mode = MatchMode::parse(&cfg.match_mode)?;
    match roster::load_roster(&cfg.roster_path(), mode) {
        Ok(r) => Ok(r.kind),
        Err(_) => Ok(mode.fallback_kind()),
    }
}

/// Open the configured store with the appropriate key kind.
pub(crate) fn open_handle(cfg: &Config) -> AppResult<StoreHandle> {
    let kind = store_kind(cfg)?;
    StoreHandle::open(cfg, kind)
}
