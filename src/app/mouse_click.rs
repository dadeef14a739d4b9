//! Mouse click handling
//!
//! Resolves a click against the option rows painted in the last frame.

use super::app_state::App;

pub fn handle_click(app: &mut App, column: u16, row: u16) {
    let Some(index) = clicked_option(app, column, row) else {
        return;
    };

    let event = app.autocomplete.select_index(index, &app.suggestions);
    app.apply_autocomplete_event(event);
}

fn clicked_option(app: &App, column: u16, row: u16) -> Option<usize> {
    app.option_hitboxes
        .iter()
        .find(|hitbox| hitbox.contains(column, row))
        .map(|hitbox| hitbox.index)
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
