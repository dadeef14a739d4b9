use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedSender;

use super::user_renderer::UserRenderer;
use crate::autocomplete::{AutocompleteState, CommitBehavior, InputProps, OptionHitbox};
use crate::cache::SuggestionCache;
use crate::config::Config;
use crate::debounce::Debouncer;
use crate::fetch::{FeedAction, FetchRequest, FetchResponse, SuggestionFeed};
use crate::suggestion::Suggestion;

/// Upper bound on how long the event loop blocks, so fetch responses get picked up
pub const IDLE_POLL: Duration = Duration::from_millis(50);

/// Host application state
pub struct App {
    pub autocomplete: AutocompleteState,
    pub suggestions: Vec<Suggestion>,
    pub selected: Option<Suggestion>,
    pub cache: SuggestionCache,
    pub feed: SuggestionFeed,
    pub debouncer: Debouncer<String>,
    pub renderer: UserRenderer,
    /// Option rows from the last render, for mouse selection
    pub option_hitboxes: Vec<OptionHitbox>,
    pub should_quit: bool,
    request_tx: Option<UnboundedSender<FetchRequest>>,
    response_rx: Option<Receiver<FetchResponse>>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let settings = &config.autocomplete;

        let mut props = InputProps::new().with_placeholder(settings.placeholder.clone());
        if let Some(title) = &settings.title {
            props = props.with_title(title.clone());
        }
        let behavior = CommitBehavior {
            clear_query_on_enter: settings.clear_query_on_enter,
            clear_query_on_click: settings.clear_query_on_click,
        };

        Self {
            autocomplete: AutocompleteState::new(props, behavior),
            suggestions: Vec::new(),
            selected: None,
            cache: SuggestionCache::new(),
            feed: SuggestionFeed::new(),
            debouncer: Debouncer::new(Duration::from_millis(settings.debounce_ms)),
            renderer: UserRenderer,
            option_hitboxes: Vec::new(),
            should_quit: false,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Attach the fetch worker's channels
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<FetchRequest>,
        response_rx: Receiver<FetchResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Drop the request sender so the worker can shut down
    pub fn close_channels(&mut self) {
        self.request_tx = None;
        self.response_rx = None;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn query(&self) -> &str {
        self.autocomplete.query()
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected.as_ref().map(|s| s.name.as_str())
    }

    /// Fetch-or-cache decision for a settled query
    pub fn request_suggestions(&mut self, query: &str) {
        match self.feed.request(query, &self.cache) {
            FeedAction::Clear => self.set_suggestions(Vec::new()),
            FeedAction::Apply(suggestions) => self.set_suggestions(suggestions),
            FeedAction::Dispatch(request) => self.dispatch(request),
            FeedAction::Await => {}
        }
    }

    fn dispatch(&mut self, request: FetchRequest) {
        let Some(request_tx) = &self.request_tx else {
            log::warn!("No fetch worker, dropping request for {:?}", request.query);
            self.feed.abandon(&request);
            self.set_suggestions(Vec::new());
            return;
        };

        if let Err(e) = request_tx.send(request) {
            log::warn!("Fetch worker gone: {}", e);
            self.feed.abandon(&e.0);
            self.set_suggestions(Vec::new());
        }
    }

    /// Apply any fetch resolutions that arrived. Returns true if something changed.
    pub fn drain_responses(&mut self) -> bool {
        let mut changed = false;

        while let Some(response_rx) = &self.response_rx {
            match response_rx.try_recv() {
                Ok(response) => {
                    changed = true;
                    if let Some(suggestions) = self.feed.resolve(response, &mut self.cache) {
                        self.set_suggestions(suggestions);
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::debug!("Fetch worker disconnected");
                    self.response_rx = None;
                }
            }
        }

        changed
    }

    /// Advance timers and channels. Returns true if state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.drain_responses();

        if let Some(query) = self.debouncer.poll_at(now) {
            self.request_suggestions(&query);
            changed = true;
        }

        changed
    }

    /// How long the event loop may block before the next tick is due
    pub fn next_wakeup(&self, now: Instant) -> Duration {
        self.debouncer
            .time_until_due(now)
            .map_or(IDLE_POLL, |due| due.min(IDLE_POLL))
    }

    /// Replace the suggestion list; the highlight starts over
    pub fn set_suggestions(&mut self, suggestions: Vec<Suggestion>) {
        self.suggestions = suggestions;
        self.autocomplete.on_suggestions_changed();
    }

    pub fn on_suggestion_selected(&mut self, suggestion: Suggestion) {
        log::debug!("Selected {} ({})", suggestion.name, suggestion.id);
        self.selected = Some(suggestion);
        self.set_suggestions(Vec::new());
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
