//! Roster file loading and column auto-detection.
//!
//! The roster is a CSV file with a header row. One column must be
//! recognizable as the name, and one as the matching key (an explicit ID
//! column or a phone-style column). Detection fails closed: when a required
//! column cannot be identified, the error carries the headers that were
//! actually found so the file can be corrected.

use crate::errors::{AppError, AppResult};
use crate::models::roster::{Roster, RosterEntry, RosterKind};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

const NAME_CANDIDATES: &[&str] = &["name", "studentname", "fullname", "traineename"];
const ID_CANDIDATES: &[&str] = &["studentid", "id", "rollno", "rollnumber"];
const PHONE_CANDIDATES: &[&str] = &[
    "phone",
    "phonenumber",
    "mobile",
    "mobilenumber",
    "contact",
    "contactnumber",
    "number",
];

/// Requested matching mode (config `match_mode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Prefer an ID column, fall back to a phone column.
    Auto,
    Id,
    Last4,
}

impl MatchMode {
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(MatchMode::Auto),
            "id" => Ok(MatchMode::Id),
            "last4" => Ok(MatchMode::Last4),
            other => Err(AppError::Config(format!(
                "invalid match_mode '{}' (expected auto, id or last4)",
                other
            ))),
        }
    }

    /// Key kind used when the roster itself cannot be consulted.
    pub fn fallback_kind(&self) -> RosterKind {
        match self {
            MatchMode::Last4 => RosterKind::PhoneLast4,
            _ => RosterKind::StudentId,
        }
    }
}

/// Header normalization: case-insensitive, spaces and underscores ignored.
fn norm_header(h: &str) -> String {
    h.trim().to_lowercase().replace([' ', '_'], "")
}

/// Strip everything that is not a digit.
pub fn digits_only(s: &str) -> String {
    static NON_DIGIT: OnceLock<Regex> = OnceLock::new();
    let re = NON_DIGIT.get_or_init(|| Regex::new(r"\D").unwrap());
    re.replace_all(s, "").into_owned()
}

/// Last 4 digits of a digit-only string; `None` when too short to match.
pub fn last4(digits: &str) -> Option<&str> {
    if digits.len() >= 4 {
        Some(&digits[digits.len() - 4..])
    } else {
        None
    }
}

/// Load the roster and build its key index.
///
/// Key derivation happens here, once per load: lowercasing for ID rosters,
/// digit-stripping plus last-4 extraction for phone rosters.
pub fn load_roster(path: &Path, mode: MatchMode) -> AppResult<Roster> {
    if !path.exists() {
        return Err(AppError::SourceMissing(path.display().to_string()));
    }

    let mut rdr = csv::Reader::from_path(path)?;
    let headers = rdr.headers()?.clone();

    // Normalized header -> column position, skipping export artifacts
    // ("Unnamed: 3" and friends).
    let mut norm_cols: Vec<(String, usize)> = Vec::new();
    for (i, h) in headers.iter().enumerate() {
        let n = norm_header(h);
        if n.is_empty() || n.starts_with("unnamed") {
            continue;
        }
        norm_cols.push((n, i));
    }

    let find = |candidates: &[&str]| -> Option<usize> {
        for candidate in candidates {
            for (norm, col) in &norm_cols {
                if norm == candidate {
                    return Some(*col);
                }
            }
        }
        None
    };

    let name_col = find(NAME_CANDIDATES);
    let id_col = find(ID_CANDIDATES);
    let phone_col = find(PHONE_CANDIDATES);

    let detected = headers
        .iter()
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    let Some(name_col) = name_col else {
        return Err(AppError::SchemaUnrecognized { detected });
    };

    let (kind, key_col) = match mode {
        MatchMode::Id => (RosterKind::StudentId, id_col),
        MatchMode::Last4 => (RosterKind::PhoneLast4, phone_col),
        MatchMode::Auto => match id_col {
            Some(c) => (RosterKind::StudentId, Some(c)),
            None => (RosterKind::PhoneLast4, phone_col),
        },
    };
    let Some(key_col) = key_col else {
        return Err(AppError::SchemaUnrecognized { detected });
    };

    let mut entries = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let display_name = record.get(name_col).unwrap_or("").trim();
        if display_name.is_empty() {
            continue;
        }

        let raw_key = record.get(key_col).unwrap_or("");
        let identifier = match kind {
            RosterKind::StudentId => raw_key.trim().to_lowercase(),
            RosterKind::PhoneLast4 => last4(&digits_only(raw_key))
                .unwrap_or_default()
                .to_string(),
        };

        entries.push(RosterEntry {
            identifier,
            display_name: display_name.to_string(),
        });
    }

    Ok(Roster::new(kind, entries))
}
