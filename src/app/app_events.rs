use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::App;
use super::mouse_click;
use crate::autocomplete::AutocompleteEvent;

impl App {
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::FocusGained => self.handle_focus_gained(),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Only process key press events (avoid duplicates on terminals reporting releases)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            _ => {
                let event = self.autocomplete.handle_key(key, &self.suggestions);
                self.apply_autocomplete_event(event);
            }
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            mouse_click::handle_click(self, mouse.column, mouse.row);
        }
    }

    /// Re-request suggestions for a query left in the input
    pub fn handle_focus_gained(&mut self) {
        let query = self.query().to_string();
        if !query.is_empty() {
            self.debouncer.schedule(query);
        }
    }

    pub fn apply_autocomplete_event(&mut self, event: AutocompleteEvent) {
        match event {
            AutocompleteEvent::QueryChanged(query) => self.debouncer.schedule(query),
            AutocompleteEvent::Selected {
                suggestion,
                query_cleared,
            } => {
                if query_cleared {
                    self.debouncer.schedule(String::new());
                }
                self.on_suggestion_selected(suggestion);
            }
            AutocompleteEvent::Navigated | AutocompleteEvent::Ignored => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
