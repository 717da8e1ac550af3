// src/history/mod.rs
use serde::{Serialize, Deserialize};

use crate::models::HistoryEntry;

pub const HISTORY_CAPACITY: usize = 10;

pub const CSV_HEADER: &str = "Password,Timestamp";
pub const TXT_HEADER: &str = "Password History";

/// Recently generated passwords, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from previously saved entries, keeping at most
    /// `HISTORY_CAPACITY` of them.
    pub fn from_entries(mut entries: Vec<HistoryEntry>) -> Self {
        entries.truncate(HISTORY_CAPACITY);
        Self { entries }
    }

    /// Prepend a password to the history.
    ///
    /// Empty passwords and repeats of the current head are ignored. Returns
    /// whether the history changed.
    pub fn record(&mut self, password: &str, timestamp: &str) -> bool {
        if password.is_empty() {
            return false;
        }

        if self.entries.first().map_or(false, |head| head.password == password) {
            return false;
        }

        self.entries.insert(0, HistoryEntry {
            password: password.to_string(),
            timestamp: timestamp.to_string(),
        });
        self.entries.truncate(HISTORY_CAPACITY);

        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// CSV rendering of the history, or `None` when there is nothing to export.
    pub fn export_csv(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let rows = self
            .entries
            .iter()
            .map(|entry| format!("{},{}\n", quote_csv(&entry.password), quote_csv(&entry.timestamp)));

        Some(std::iter::once(format!("{}\n", CSV_HEADER)).chain(rows).collect())
    }

    /// Plain-text rendering of the history, or `None` when empty.
    pub fn export_txt(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let lines = self
            .entries
            .iter()
            .map(|entry| format!("[{}] {}\n", entry.timestamp, entry.password));

        Some(std::iter::once(format!("{}\n\n", TXT_HEADER)).chain(lines).collect())
    }
}

// Symbols include '"', so every field is quoted and inner quotes doubled
fn quote_csv(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
