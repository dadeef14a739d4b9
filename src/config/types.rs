// Configuration type definitions

use serde::Deserialize;

use crate::debounce::DEFAULT_DEBOUNCE_MS;

pub const DEFAULT_REMOTE_URL: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_MOCK_LATENCY_MS: u64 = 500;
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Suggestion source selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Built-in fruit list with simulated latency
    Mock,
    /// JSON API queried with `?name_like=<query>`
    #[default]
    Remote,
}

/// Suggestion source configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub kind: SourceKind,
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

fn default_url() -> String {
    DEFAULT_REMOTE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_latency_ms() -> u64 {
    DEFAULT_MOCK_LATENCY_MS
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            kind: SourceKind::default(),
            url: default_url(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            latency_ms: DEFAULT_MOCK_LATENCY_MS,
        }
    }
}

/// Autocomplete widget configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct AutocompleteConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Clear the query after committing with Enter
    #[serde(default)]
    pub clear_query_on_enter: bool,
    /// Clear the query after committing with a click
    #[serde(default = "default_true")]
    pub clear_query_on_click: bool,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default)]
    pub title: Option<String>,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_true() -> bool {
    true
}

fn default_placeholder() -> String {
    "Search Users...".to_string()
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        AutocompleteConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            clear_query_on_enter: false,
            clear_query_on_click: true,
            placeholder: default_placeholder(),
            title: None,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
    #[serde(default)]
    pub source: SourceConfig,
}
