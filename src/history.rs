//! Submission history records and local filtering

use serde::{Deserialize, Serialize};

/// One past submission as returned by the history service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub filename: String,
    pub language: String,
    pub dc: f64,
    pub cc: f64,
    /// Server-formatted timestamp, displayed verbatim
    pub timestamp: String,
    /// The submitted source text
    pub code: String,
}

/// Filter entries by case-insensitive substring match on filename or language
///
/// Runs over the already-fetched list; no server round-trip. An empty term
/// matches everything.
pub fn filter_history<'a>(entries: &'a [HistoryEntry], term: &str) -> Vec<&'a HistoryEntry> {
    let term = term.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            entry.filename.to_lowercase().contains(&term)
                || entry.language.to_lowercase().contains(&term)
        })
        .collect()
}
