//! Suggestion fetching
//!
//! `worker` runs source futures off the UI thread; `feed` decides when to
//! fetch and which resolutions the host should apply.

mod feed;
mod worker;

pub use feed::{FeedAction, SuggestionFeed};
pub use worker::spawn_worker;

use crate::suggestion::Suggestion;

/// Request sent to the fetch worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub query: String,
    /// Sequence number used to discard stale resolutions
    pub request_id: u64,
}

/// How a fetch ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded(Vec<Suggestion>),
    Failed(String),
}

/// Resolution sent back from the fetch worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub query: String,
    pub request_id: u64,
    pub outcome: FetchOutcome,
}
