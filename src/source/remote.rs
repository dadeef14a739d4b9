//! JSON API source
//!
//! Issues `GET <url>?name_like=<query>` and decodes a JSON array of records.

use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;

use super::{FetchError, SuggestionSource};
use crate::error::AutosuggestError;
use crate::suggestion::RawSuggestion;

const QUERY_PARAM: &str = "name_like";

#[derive(Debug, Clone)]
pub struct RemoteSource {
    client: reqwest::Client,
    url: String,
}

impl RemoteSource {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, AutosuggestError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AutosuggestError::Source(e.to_string()))?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SuggestionSource for RemoteSource {
    fn fetch(&self, query: &str) -> BoxFuture<'static, Result<Vec<RawSuggestion>, FetchError>> {
        let request = self.client.get(&self.url).query(&[(QUERY_PARAM, query)]);

        async move {
            let response = request
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            response
                .json::<Vec<RawSuggestion>>()
                .await
                .map_err(|e| FetchError::Decode(e.to_string()))
        }
        .boxed()
    }
}
