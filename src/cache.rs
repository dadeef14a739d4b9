use std::collections::HashMap;

use crate::suggestion::Suggestion;

/// Suggestion lists keyed by the exact query that produced them
///
/// Owned by the host and lent to the fetch orchestration; entries live for
/// the whole session.
#[derive(Debug, Default)]
pub struct SuggestionCache {
    entries: HashMap<String, Vec<Suggestion>>,
}

impl SuggestionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, query: &str) -> Option<&[Suggestion]> {
        self.entries.get(query).map(Vec::as_slice)
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.contains_key(query)
    }

    pub fn insert(&mut self, query: impl Into<String>, suggestions: Vec<Suggestion>) {
        self.entries.insert(query.into(), suggestions);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod cache_tests;
