//! Fetch orchestration
//!
//! Decides, for each requested query, whether to clear the list, answer from
//! the cache, or dispatch a fetch. Every dispatched fetch carries a
//! monotonically increasing request id; a resolution is applied only if it
//! belongs to the most recent request, so a slow response can never
//! overwrite fresher suggestions. Stale resolutions are still cached.

use std::collections::HashMap;

use super::{FetchOutcome, FetchRequest, FetchResponse};
use crate::cache::SuggestionCache;
use crate::suggestion::Suggestion;

/// What the host should do after a query is requested
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedAction {
    /// Empty query: clear the suggestion list, no fetch
    Clear,
    /// Cache hit: replace the suggestion list synchronously
    Apply(Vec<Suggestion>),
    /// Cache miss: send this request to the fetch worker
    Dispatch(FetchRequest),
    /// A fetch for this exact query is already in flight
    Await,
}

#[derive(Debug, Default)]
pub struct SuggestionFeed {
    next_request_id: u64,
    /// Request whose resolution should be applied, if any
    current: Option<u64>,
    /// Outstanding fetches by query
    in_flight: HashMap<String, u64>,
}

impl SuggestionFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a (debounced) query request
    pub fn request(&mut self, query: &str, cache: &SuggestionCache) -> FeedAction {
        if query.is_empty() {
            self.current = None;
            return FeedAction::Clear;
        }

        if let Some(hit) = cache.get(query) {
            log::debug!("Cache hit for {:?}", query);
            self.current = None;
            return FeedAction::Apply(hit.to_vec());
        }

        if let Some(&request_id) = self.in_flight.get(query) {
            self.current = Some(request_id);
            return FeedAction::Await;
        }

        self.next_request_id = self.next_request_id.wrapping_add(1);
        let request_id = self.next_request_id;
        self.in_flight.insert(query.to_string(), request_id);
        self.current = Some(request_id);

        FeedAction::Dispatch(FetchRequest {
            query: query.to_string(),
            request_id,
        })
    }

    /// Handle a resolution from the fetch worker
    ///
    /// Successful results are cached under their exact query. Returns the
    /// list to show when this response belongs to the latest request; a
    /// failed fetch yields an empty list and is not cached.
    pub fn resolve(
        &mut self,
        response: FetchResponse,
        cache: &mut SuggestionCache,
    ) -> Option<Vec<Suggestion>> {
        if self.in_flight.get(&response.query) == Some(&response.request_id) {
            self.in_flight.remove(&response.query);
        }

        let suggestions = match response.outcome {
            FetchOutcome::Loaded(suggestions) => {
                cache.insert(response.query.clone(), suggestions.clone());
                suggestions
            }
            FetchOutcome::Failed(_) => Vec::new(),
        };

        if self.current != Some(response.request_id) {
            log::debug!(
                "Discarding stale response for {:?} (request {}, current {:?})",
                response.query,
                response.request_id,
                self.current
            );
            return None;
        }

        self.current = None;
        Some(suggestions)
    }

    /// Forget a dispatched request that never reached the worker
    pub fn abandon(&mut self, request: &FetchRequest) {
        if self.in_flight.get(&request.query) == Some(&request.request_id) {
            self.in_flight.remove(&request.query);
        }
        if self.current == Some(request.request_id) {
            self.current = None;
        }
    }

    /// Whether the latest request is still waiting on the worker
    pub fn is_loading(&self) -> bool {
        self.current.is_some()
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }
}

#[cfg(test)]
#[path = "feed_tests.rs"]
mod feed_tests;
