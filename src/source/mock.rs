//! In-memory fruit source with simulated latency

use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;

use super::{FetchError, SuggestionSource};
use crate::suggestion::{RawSuggestion, Suggestion};

const FRUITS: [(u64, &str); 5] = [
    (1, "Apple"),
    (2, "Banana"),
    (3, "Orange"),
    (4, "Grape"),
    (5, "Mango"),
];

#[derive(Debug, Clone)]
pub struct MockSource {
    latency: Duration,
    items: Vec<Suggestion>,
}

impl MockSource {
    pub fn new(latency: Duration) -> Self {
        let items = FRUITS
            .iter()
            .map(|(id, name)| Suggestion::new(*id, *name))
            .collect();
        Self { latency, items }
    }

    /// Items whose name contains `query`, ignoring case
    pub fn matching(&self, query: &str) -> Vec<Suggestion> {
        let query_lower = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&query_lower))
            .cloned()
            .collect()
    }
}

impl SuggestionSource for MockSource {
    fn fetch(&self, query: &str) -> BoxFuture<'static, Result<Vec<RawSuggestion>, FetchError>> {
        let latency = self.latency;
        let matches = self.matching(query);

        async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            Ok(matches.into_iter().map(RawSuggestion::from).collect())
        }
        .boxed()
    }
}
