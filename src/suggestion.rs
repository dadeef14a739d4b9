//! Suggestion records
//!
//! Sources hand back loosely shaped JSON records. Everything past the fetch
//! boundary works with validated [`Suggestion`] values only.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identity of a suggestion within one list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SuggestionId {
    Number(u64),
    Text(String),
}

impl fmt::Display for SuggestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionId::Number(n) => write!(f, "{}", n),
            SuggestionId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for SuggestionId {
    fn from(id: u64) -> Self {
        SuggestionId::Number(id)
    }
}

impl From<&str> for SuggestionId {
    fn from(id: &str) -> Self {
        SuggestionId::Text(id.to_string())
    }
}

impl From<String> for SuggestionId {
    fn from(id: String) -> Self {
        SuggestionId::Text(id)
    }
}

/// One candidate shown in the dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: SuggestionId,
    pub name: String,
}

impl Suggestion {
    pub fn new(id: impl Into<SuggestionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A record as delivered by a source, before validation
///
/// Unknown fields are ignored, so whole user objects from a REST API
/// deserialize fine.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawSuggestion {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
}

impl RawSuggestion {
    /// Validate into a [`Suggestion`]; `None` if `id` or `name` is unusable
    pub fn validate(&self) -> Option<Suggestion> {
        let id = match self.id.as_ref()? {
            Value::Number(n) => SuggestionId::Number(n.as_u64()?),
            Value::String(s) => SuggestionId::Text(s.clone()),
            _ => return None,
        };
        let name = self.name.as_ref()?.as_str()?.to_string();
        Some(Suggestion { id, name })
    }
}

impl From<Suggestion> for RawSuggestion {
    fn from(suggestion: Suggestion) -> Self {
        let id = match suggestion.id {
            SuggestionId::Number(n) => Value::from(n),
            SuggestionId::Text(s) => Value::from(s),
        };
        Self {
            id: Some(id),
            name: Some(Value::from(suggestion.name)),
        }
    }
}

/// Turn raw records into a list safe to render
///
/// Records without a usable id or name are skipped. Ids must be unique
/// within a list, so later duplicates are dropped.
pub fn sanitize(raw: Vec<RawSuggestion>) -> Vec<Suggestion> {
    let mut seen = HashSet::new();
    let mut suggestions = Vec::with_capacity(raw.len());

    for record in raw {
        let Some(suggestion) = record.validate() else {
            log::debug!("Skipping malformed suggestion record: {:?}", record);
            continue;
        };
        if !seen.insert(suggestion.id.clone()) {
            log::warn!("Dropping duplicate suggestion id {}", suggestion.id);
            continue;
        }
        suggestions.push(suggestion);
    }

    suggestions
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
