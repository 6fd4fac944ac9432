//! Two-step disambiguation state.
//!
//! When a submitted key matches more than one roster entry, the candidate
//! set is held here between the `submit` and `confirm` invocations, as an
//! explicit protocol state rather than an implicit re-render. Cleared on
//! confirm or cancel; a pending file from a previous calendar day is stale.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingDisambiguation {
    pub submitted_key: String,
    pub candidates: Vec<String>,
    pub date: NaiveDate,
}

impl PendingDisambiguation {
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Other(format!("failed to encode pending state: {}", e)))?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::NoPending);
        }
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| AppError::Other(format!("corrupt pending state: {}", e)))
    }

    pub fn clear(path: &Path) -> AppResult<()> {
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    pub fn exists(path: &Path) -> bool {
        path.exists()
    }

    /// A pending choice saved on a previous day no longer applies.
    pub fn ensure_fresh(&self, today: NaiveDate) -> AppResult<()> {
        if self.date != today {
            return Err(AppError::StaleSession(format!(
                "saved on {}, run submit again",
                self.date
            )));
        }
        Ok(())
    }

    /// Resolve the explicit choice: a 1-based index into the candidate
    /// list, or a name matched case-insensitively against it.
    pub fn choose(&self, choice: Option<usize>, name: Option<&str>) -> AppResult<String> {
        if let Some(i) = choice {
            if i == 0 || i > self.candidates.len() {
                return Err(AppError::MalformedInput(format!(
                    "choice must be between 1 and {}",
                    self.candidates.len()
                )));
            }
            return Ok(self.candidates[i - 1].clone());
        }

        if let Some(n) = name {
            let needle = n.trim().to_lowercase();
            if let Some(candidate) = self
                .candidates
                .iter()
                .find(|c| c.trim().to_lowercase() == needle)
            {
                return Ok(candidate.clone());
            }
            return Err(AppError::NotACandidate(n.trim().to_string()));
        }

        Err(AppError::MalformedInput(
            "pass --choice N or --name NAME".to_string(),
        ))
    }
}
