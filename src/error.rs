use thiserror::Error;

/// Errors surfaced while starting autosuggest
#[derive(Debug, Error)]
pub enum AutosuggestError {
    #[error("Invalid config file {path}: {message}")]
    Config { path: String, message: String },

    #[error("Invalid suggestion source: {0}")]
    Source(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
