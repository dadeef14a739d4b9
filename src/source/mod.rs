//! Suggestion sources
//!
//! Defines the SuggestionSource trait, FetchError, and the factory that picks
//! a source from configuration.

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use thiserror::Error;

use crate::config::{SourceConfig, SourceKind};
use crate::error::AutosuggestError;
use crate::suggestion::RawSuggestion;

mod mock;
mod remote;

pub use mock::MockSource;
pub use remote::RemoteSource;

/// Errors a source can resolve with
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("Decode error: {0}")]
    Decode(String),
}

/// Anything that can answer a query with suggestion records
///
/// The returned future owns everything it needs so it can run on the fetch
/// worker independently of the caller.
pub trait SuggestionSource: Send + Sync + 'static {
    fn fetch(&self, query: &str) -> BoxFuture<'static, Result<Vec<RawSuggestion>, FetchError>>;
}

/// Build the configured source
pub fn from_config(config: &SourceConfig) -> Result<Arc<dyn SuggestionSource>, AutosuggestError> {
    match config.kind {
        SourceKind::Mock => Ok(Arc::new(MockSource::new(Duration::from_millis(
            config.latency_ms,
        )))),
        SourceKind::Remote => {
            let url = config.url.trim();
            if url.is_empty() {
                return Err(AutosuggestError::Source(
                    "Missing or empty url in [source] config".to_string(),
                ));
            }
            let client = RemoteSource::new(url, Duration::from_millis(config.timeout_ms))?;
            Ok(Arc::new(client))
        }
    }
}
