//! Most-recent-first search history, capped and deduplicated.

use pokedex_core::constants::{SEARCH_HISTORY_CAPACITY, SEARCH_HISTORY_KEY};
use pokedex_core::sanitize_search_term;

use crate::error::StorageError;
use crate::store::KeyValueStore;

/// Search history persisted as a JSON array under a fixed key.
///
/// Invariant: at most 5 sanitized, non-empty, distinct entries, newest first.
#[derive(Debug)]
pub struct SearchHistory<S> {
    store: S,
    entries: Vec<String>,
}

impl<S: KeyValueStore> SearchHistory<S> {
    /// Loads the stored history. Unreadable data yields an empty history.
    pub fn load(store: S) -> Self {
        let entries = read_entries(&store);
        Self { store, entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Records an explicitly submitted term. Returns `Ok(false)` when the term
    /// sanitizes to nothing and nothing was written.
    ///
    /// # Errors
    /// Returns an error if the store cannot be written.
    pub fn add(&mut self, term: &str) -> Result<bool, StorageError> {
        let term = sanitize_search_term(term);
        if term.is_empty() {
            return Ok(false);
        }

        let mut history = read_entries(&self.store);
        history.retain(|item| *item != term);
        history.insert(0, term);
        history.truncate(SEARCH_HISTORY_CAPACITY);

        let encoded = serde_json::to_string(&history).map_err(|e| {
            StorageError::DataCorruption { context: "encoding search history".to_owned(), source: e }
        })?;
        self.store.set(SEARCH_HISTORY_KEY, &encoded)?;
        self.entries = history;
        Ok(true)
    }
}

fn read_entries<S: KeyValueStore>(store: &S) -> Vec<String> {
    let raw = match store.get(SEARCH_HISTORY_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read search history");
            return Vec::new();
        },
    };
    let stored: Vec<String> = match serde_json::from_str(&raw) {
        Ok(stored) => stored,
        Err(e) => {
            tracing::warn!(error = %e, "stored search history is not a string array");
            return Vec::new();
        },
    };

    let mut entries: Vec<String> = Vec::with_capacity(SEARCH_HISTORY_CAPACITY);
    for term in stored.iter().map(|t| sanitize_search_term(t)) {
        if !term.is_empty() && !entries.contains(&term) {
            entries.push(term);
        }
        if entries.len() == SEARCH_HISTORY_CAPACITY {
            break;
        }
    }
    entries
}
