//! Autocomplete rendering
//!
//! Paints the input box and, when the view carries a dropdown, the
//! suggestion popup anchored to it.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::autocomplete_state::AutocompleteState;
use super::view::{AutocompleteView, Dropdown, OptionItem};
use crate::widgets::popup;

pub const MAX_VISIBLE_SUGGESTIONS: usize = 10;
const MAX_POPUP_WIDTH: usize = 60;
const MIN_POPUP_WIDTH: usize = 20;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 2;

const SELECTED_MARKER: &str = "► ";
const UNSELECTED_MARKER: &str = "  ";

/// Screen rows occupied by an option, used to route mouse clicks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionHitbox {
    pub area: Rect,
    pub index: usize,
}

impl OptionHitbox {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.right()
            && row >= self.area.y
            && row < self.area.bottom()
    }
}

/// Draw the input and its dropdown, returning where each visible option landed
///
/// `bounds` is the region the popup may occupy, normally the whole frame.
pub fn render_autocomplete(
    frame: &mut Frame,
    state: &AutocompleteState,
    view: &AutocompleteView,
    input_area: Rect,
    bounds: Rect,
) -> Vec<OptionHitbox> {
    frame.render_widget(state.input(), input_area);

    match &view.dropdown {
        Some(dropdown) => render_dropdown(frame, dropdown, input_area, bounds),
        None => Vec::new(),
    }
}

fn render_dropdown(
    frame: &mut Frame,
    dropdown: &Dropdown,
    input_area: Rect,
    bounds: Rect,
) -> Vec<OptionHitbox> {
    let container = &dropdown.container;
    let options = dropdown.options();
    if options.is_empty() {
        return Vec::new();
    }

    let visible_count = options.len().min(MAX_VISIBLE_SUGGESTIONS);
    let popup_height = (container.header.len() + visible_count) as u16 + POPUP_BORDER_HEIGHT;
    let popup_width = popup_width(dropdown);

    let popup_area =
        popup::dropdown_popup(input_area, bounds, popup_width, popup_height, POPUP_OFFSET_X);
    if popup_area.height <= POPUP_BORDER_HEIGHT || popup_area.width <= POPUP_BORDER_HEIGHT {
        return Vec::new();
    }

    popup::clear_area(frame, popup_area);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(container.border_style);
    if let Some(title) = &container.title {
        block = block.title(format!(" {} ", title));
    }
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let header_rows = (container.header.len() as u16).min(inner.height);
    if header_rows > 0 {
        let header_area = Rect {
            height: header_rows,
            ..inner
        };
        frame.render_widget(Paragraph::new(container.header.clone()), header_area);
    }

    let rows = (inner.height - header_rows) as usize;
    let shown = visible_count.min(rows);
    let offset = scroll_offset(dropdown.selected_option().map(|o| o.index), shown);

    options
        .iter()
        .skip(offset)
        .take(shown)
        .enumerate()
        .map(|(row, option)| {
            let area = Rect {
                x: inner.x,
                y: inner.y + header_rows + row as u16,
                width: inner.width,
                height: 1,
            };
            render_option(frame, option, area);
            OptionHitbox {
                area,
                index: option.index,
            }
        })
        .collect()
}

fn render_option(frame: &mut Frame, option: &OptionItem, area: Rect) {
    let marker = if option.selected {
        SELECTED_MARKER
    } else {
        UNSELECTED_MARKER
    };

    let mut spans = vec![Span::raw(marker)];
    spans.extend(option.content.spans.iter().cloned());
    let line = Line::from(spans);

    let row_style = if option.selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    frame.render_widget(Paragraph::new(line).style(row_style), area);
}

/// First option index to show so the selected option stays in view
pub fn scroll_offset(selected: Option<usize>, visible: usize) -> usize {
    match selected {
        Some(index) if visible > 0 && index >= visible => index + 1 - visible,
        _ => 0,
    }
}

fn popup_width(dropdown: &Dropdown) -> u16 {
    let container = &dropdown.container;

    let option_width = dropdown
        .options()
        .iter()
        .map(|o| line_width(&o.content) + SELECTED_MARKER.width())
        .max()
        .unwrap_or(0);
    let header_width = container.header.iter().map(line_width).max().unwrap_or(0);
    let title_width = container.title.as_deref().map(|t| t.width() + 2).unwrap_or(0);

    let content_width = option_width
        .max(header_width)
        .max(title_width)
        .clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH);

    content_width as u16 + POPUP_PADDING
}

fn line_width(line: &Line<'_>) -> usize {
    line.spans.iter().map(|s| s.content.width()).sum()
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
