//! Fetch worker thread
//!
//! Runs a current-thread tokio runtime on a background thread. Each request
//! becomes its own task, so slow fetches overlap instead of queueing, and
//! resolutions are posted back over a std channel that the event loop
//! drains without blocking.

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use tokio::sync::mpsc::UnboundedReceiver;

use super::{FetchOutcome, FetchRequest, FetchResponse};
use crate::source::SuggestionSource;
use crate::suggestion::sanitize;

/// Spawn the fetch worker thread
///
/// The worker exits once every request sender has been dropped.
pub fn spawn_worker(
    source: Arc<dyn SuggestionSource>,
    request_rx: UnboundedReceiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        worker_loop(source, request_rx, response_tx);
    })
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    source: Arc<dyn SuggestionSource>,
    mut request_rx: UnboundedReceiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("Failed to start fetch runtime: {}", e);
            return;
        }
    };

    runtime.block_on(async move {
        while let Some(request) = request_rx.recv().await {
            log::debug!("Fetching {:?} (request {})", request.query, request.request_id);
            let source = Arc::clone(&source);
            let response_tx = response_tx.clone();
            tokio::spawn(async move {
                let response = resolve_guarded(source, request).await;
                if response_tx.send(response).is_err() {
                    log::debug!("Event loop gone, dropping fetch response");
                }
            });
        }
    });

    log::debug!("Fetch worker shutting down");
}

/// Run one fetch in its own task; a panicked fetch resolves as `Failed`
async fn resolve_guarded(
    source: Arc<dyn SuggestionSource>,
    request: FetchRequest,
) -> FetchResponse {
    let query = request.query.clone();
    let request_id = request.request_id;

    match tokio::spawn(async move { resolve(source.as_ref(), request).await }).await {
        Ok(response) => response,
        Err(e) => {
            log::error!("Fetch task for {:?} died: {}", query, e);
            FetchResponse {
                query,
                request_id,
                outcome: FetchOutcome::Failed(format!("fetch task failed: {}", e)),
            }
        }
    }
}

/// Run one fetch to completion
///
/// A rejected fetch never escapes as an error; it becomes
/// [`FetchOutcome::Failed`] so the host can fall back to an empty list.
async fn resolve(source: &dyn SuggestionSource, request: FetchRequest) -> FetchResponse {
    let outcome = match source.fetch(&request.query).await {
        Ok(raw) => FetchOutcome::Loaded(sanitize(raw)),
        Err(e) => {
            log::warn!("Fetch for {:?} failed: {}", request.query, e);
            FetchOutcome::Failed(e.to_string())
        }
    };

    FetchResponse {
        query: request.query,
        request_id: request.request_id,
        outcome,
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
