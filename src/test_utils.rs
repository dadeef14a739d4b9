#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Sender};

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::app::App;
    use crate::config::Config;
    use crate::fetch::{FetchRequest, FetchResponse};
    use crate::suggestion::Suggestion;

    pub const FRUITS: [&str; 5] = ["Apple", "Banana", "Orange", "Grape", "Mango"];

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// The first `count` fruits, ids starting at 1
    pub fn fruit_suggestions(count: usize) -> Vec<Suggestion> {
        FRUITS
            .iter()
            .take(count)
            .enumerate()
            .map(|(i, name)| Suggestion::new(i as u64 + 1, *name))
            .collect()
    }

    /// App with no worker attached
    pub fn test_app() -> App {
        App::new(&Config::default())
    }

    /// App wired to channels the test plays the worker on
    pub fn test_app_with_channels() -> (App, UnboundedReceiver<FetchRequest>, Sender<FetchResponse>) {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();

        let mut app = test_app();
        app.set_channels(request_tx, response_rx);

        (app, request_rx, response_tx)
    }
}
