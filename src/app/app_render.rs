use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use super::user_renderer::NO_SUGGESTIONS;
use crate::autocomplete::render_autocomplete;

pub const HEADING: &str = "Search your favourite user";
pub const HINT: &str = "Let's begin the search, e.g. type Le";
pub const SEARCHING: &str = "Searching...";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1), // heading
            Constraint::Length(1), // hint
            Constraint::Length(1), // selected value
            Constraint::Length(3), // input
            Constraint::Min(0),    // body
            Constraint::Length(1), // status line
        ])
        .split(frame.area());

        frame.render_widget(
            Paragraph::new(HEADING).style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            layout[0],
        );
        frame.render_widget(
            Paragraph::new(HINT).style(Style::default().fg(Color::DarkGray)),
            layout[1],
        );
        if let Some(name) = self.selected_name() {
            frame.render_widget(
                Paragraph::new(format!("Selected User: {}", name))
                    .style(Style::default().fg(Color::Red)),
                layout[2],
            );
        }

        if self.shows_empty_result() {
            frame.render_widget(
                Paragraph::new(NO_SUGGESTIONS).style(Style::default().fg(Color::DarkGray)),
                layout[4],
            );
        }
        self.render_status_line(frame, layout[5]);

        // Popup may cover everything but the status line
        let bounds = Rect {
            height: layout[5].y.saturating_sub(frame.area().y),
            ..frame.area()
        };
        let view = self.autocomplete.view(&self.suggestions, Some(&self.renderer));
        self.option_hitboxes =
            render_autocomplete(frame, &self.autocomplete, &view, layout[3], bounds);
    }

    /// The current query settled on an empty result
    fn shows_empty_result(&self) -> bool {
        !self.debouncer.is_pending()
            && self
                .cache
                .get(self.query())
                .is_some_and(|suggestions| suggestions.is_empty())
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        if self.feed.is_loading() {
            spans.push(Span::styled(
                format!("{} ", SEARCHING),
                Style::default().fg(Color::Yellow),
            ));
        }
        spans.push(Span::styled(
            format!("cached: {} ", self.cache.len()),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled(
            "│ ↑↓ navigate · Enter select · click select · Esc quit",
            Style::default().fg(Color::DarkGray),
        ));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
