use serde::Serialize;
use std::collections::HashMap;

/// Which kind of key the roster matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RosterKind {
    /// Explicit ID column, matched case-insensitively.
    StudentId,
    /// Phone column, matched on the last 4 digits.
    PhoneLast4,
}

impl RosterKind {
    /// Header used for the key column of the log store.
    pub fn log_header(&self) -> &'static str {
        match self {
            RosterKind::StudentId => "Student ID",
            RosterKind::PhoneLast4 => "Last4",
        }
    }

    /// Human label for prompts and messages.
    pub fn describe(&self) -> &'static str {
        match self {
            RosterKind::StudentId => "student ID",
            RosterKind::PhoneLast4 => "last 4 digits of the phone number",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterEntry {
    /// Normalized matching key (lowercased ID, or last-4 digit string).
    /// Empty when the source row had no usable key.
    pub identifier: String,
    pub display_name: String,
}

/// In-memory roster snapshot.
///
/// Entries are immutable for the lifetime of a session; the roster is
/// reloaded wholesale from its source file, never diffed. The key index is
/// built once per load, so lookups never re-derive keys per call.
#[derive(Debug)]
pub struct Roster {
    pub kind: RosterKind,
    entries: Vec<RosterEntry>,
    index: HashMap<String, Vec<usize>>,
}

impl Roster {
    pub fn new(kind: RosterKind, entries: Vec<RosterEntry>) -> Self {
        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, entry) in entries.iter().enumerate() {
            // Rows without a usable key (e.g. a phone number with fewer
            // than 4 digits) stay in the roster but are unmatchable.
            if entry.identifier.is_empty() {
                continue;
            }
            index.entry(entry.identifier.clone()).or_default().push(i);
        }
        Self {
            kind,
            entries,
            index,
        }
    }

    /// All entries whose key equals the already-normalized identifier.
    /// Several people may legitimately share a key.
    pub fn matches(&self, key: &str) -> Vec<&RosterEntry> {
        self.index
            .get(key)
            .map(|ids| ids.iter().map(|&i| &self.entries[i]).collect())
            .unwrap_or_default()
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
