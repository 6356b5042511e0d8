//! Journal-timeline state: the entry list plus its filter controls.
//!
//! DESIGN
//! ======
//! Separating list state from the single-entry pages keeps filter/search
//! presentation concerns out of the editing flow. Filtering is pure over
//! the loaded items so the timeline can re-render without refetching.

#[cfg(test)]
#[path = "journal_test.rs"]
mod journal_test;

use crate::net::types::JournalEntry;

/// Emotion filter options offered by the timeline dropdown.
pub const EMOTION_FILTERS: [&str; 6] = ["All", "Joy", "Sadness", "Anger", "Fear", "Neutral"];

/// Shared journal list state backed by the REST client.
#[derive(Clone, Debug, PartialEq)]
pub struct JournalState {
    pub items: Vec<JournalEntry>,
    pub loading: bool,
    pub error: Option<String>,
    /// One of `EMOTION_FILTERS`.
    pub filter: String,
    pub search: String,
}

impl Default for JournalState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            filter: "All".to_owned(),
            search: String::new(),
        }
    }
}

impl JournalState {
    /// Entries passing the emotion filter and search term, newest first.
    /// Entries without a timestamp sort last.
    pub fn visible(&self) -> Vec<JournalEntry> {
        let mut entries: Vec<JournalEntry> = self
            .items
            .iter()
            .filter(|entry| matches_filter(entry, &self.filter))
            .filter(|entry| matches_search(entry, &self.search))
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries
    }
}

/// Whether an entry's dominant emotion passes the dropdown filter.
pub fn matches_filter(entry: &JournalEntry, filter: &str) -> bool {
    if filter == "All" {
        return true;
    }
    entry
        .top_emotion()
        .is_some_and(|emotion| emotion.name.eq_ignore_ascii_case(filter))
}

/// Case-insensitive substring match over title and content. A blank term
/// matches everything.
pub fn matches_search(entry: &JournalEntry, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    entry.display_title().to_lowercase().contains(&needle)
        || entry.content.to_lowercase().contains(&needle)
}
