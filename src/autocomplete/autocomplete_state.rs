use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};
use tui_textarea::{CursorMove, TextArea};

use super::input_props::InputProps;
use crate::suggestion::Suggestion;

/// Whether committing a suggestion clears the query
///
/// Keyboard and pointer commits are configured separately; the defaults
/// keep the query after Enter and clear it after a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitBehavior {
    pub clear_query_on_enter: bool,
    pub clear_query_on_click: bool,
}

impl Default for CommitBehavior {
    fn default() -> Self {
        Self {
            clear_query_on_enter: false,
            clear_query_on_click: true,
        }
    }
}

/// Outcome of feeding an input event to the widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutocompleteEvent {
    /// The query text changed; the host should request suggestions
    QueryChanged(String),
    /// A suggestion was committed
    Selected {
        suggestion: Suggestion,
        /// The commit also emptied the query
        query_cleared: bool,
    },
    /// Arrow navigation was handled (possibly a no-op at the list edges)
    Navigated,
    /// Nothing happened
    Ignored,
}

/// Autocomplete widget state: the query and the highlighted suggestion
///
/// The suggestion list itself belongs to the host and is passed in where
/// it matters.
pub struct AutocompleteState {
    input: TextArea<'static>,
    highlight: Option<usize>,
    props: InputProps,
    behavior: CommitBehavior,
}

impl AutocompleteState {
    pub fn new(props: InputProps, behavior: CommitBehavior) -> Self {
        let input = build_input(&props, "");
        Self {
            input,
            highlight: None,
            props,
            behavior,
        }
    }

    pub fn query(&self) -> &str {
        self.input.lines()[0].as_ref()
    }

    pub fn input(&self) -> &TextArea<'static> {
        &self.input
    }

    pub fn props(&self) -> &InputProps {
        &self.props
    }

    pub fn behavior(&self) -> CommitBehavior {
        self.behavior
    }

    /// Highlighted position, `None` when nothing is highlighted
    pub fn highlight_index(&self) -> Option<usize> {
        self.highlight
    }

    /// Replace the query programmatically
    pub fn set_query(&mut self, text: &str) -> AutocompleteEvent {
        if self.query() == text {
            return AutocompleteEvent::Ignored;
        }
        self.input = build_input(&self.props, text);
        AutocompleteEvent::QueryChanged(text.to_string())
    }

    /// Empty the query. Returns true if there was anything to clear.
    pub fn clear_query(&mut self) -> bool {
        matches!(self.set_query(""), AutocompleteEvent::QueryChanged(_))
    }

    pub fn reset_highlight(&mut self) {
        self.highlight = None;
    }

    /// The host replaced the suggestion list
    pub fn on_suggestions_changed(&mut self) {
        self.reset_highlight();
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent, suggestions: &[Suggestion]) -> AutocompleteEvent {
        match key.code {
            KeyCode::Down => {
                self.highlight_next(suggestions.len());
                AutocompleteEvent::Navigated
            }
            KeyCode::Up => {
                self.highlight_previous();
                AutocompleteEvent::Navigated
            }
            KeyCode::Enter => self.commit_highlighted(suggestions),
            // Terminals report Ctrl+M as Enter's twin; never let it insert a newline
            KeyCode::Char('m') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.commit_highlighted(suggestions)
            }
            KeyCode::Tab | KeyCode::BackTab => AutocompleteEvent::Ignored,
            _ => {
                let before = self.query().to_string();
                self.input.input(key);
                if self.query() != before {
                    AutocompleteEvent::QueryChanged(self.query().to_string())
                } else {
                    AutocompleteEvent::Ignored
                }
            }
        }
    }

    /// Move the highlight down, stopping at the last suggestion
    pub fn highlight_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.highlight = Some(match self.highlight {
            None => 0,
            Some(i) => (i + 1).min(len - 1),
        });
    }

    /// Move the highlight up, stopping at the first suggestion
    pub fn highlight_previous(&mut self) {
        if let Some(i) = self.highlight
            && i > 0
        {
            self.highlight = Some(i - 1);
        }
    }

    /// Commit the highlighted suggestion (Enter)
    pub fn commit_highlighted(&mut self, suggestions: &[Suggestion]) -> AutocompleteEvent {
        let Some(suggestion) = self.highlight.and_then(|i| suggestions.get(i)).cloned() else {
            return AutocompleteEvent::Ignored;
        };

        self.highlight = None;
        let query_cleared = self.behavior.clear_query_on_enter && self.clear_query();

        AutocompleteEvent::Selected {
            suggestion,
            query_cleared,
        }
    }

    /// Commit the suggestion at `index` (click)
    pub fn select_index(&mut self, index: usize, suggestions: &[Suggestion]) -> AutocompleteEvent {
        let Some(suggestion) = suggestions.get(index).cloned() else {
            return AutocompleteEvent::Ignored;
        };

        self.highlight = None;
        let query_cleared = self.behavior.clear_query_on_click && self.clear_query();

        AutocompleteEvent::Selected {
            suggestion,
            query_cleared,
        }
    }
}

/// Single-line input configured from the caller's props
fn build_input(props: &InputProps, text: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![text.to_string()]);

    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", props.resolved_title()))
            .border_style(Style::default().fg(Color::Cyan)),
    );
    textarea.set_cursor_line_style(Style::default());
    if let Some(placeholder) = props.resolved_placeholder() {
        textarea.set_placeholder_text(placeholder);
    }
    if let Some(style) = props.style {
        textarea.set_style(style);
    }
    textarea.move_cursor(CursorMove::End);

    textarea
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
