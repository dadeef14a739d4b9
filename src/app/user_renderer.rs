//! Demo renderer for user suggestions

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

use crate::autocomplete::{
    OptionItem, RenderContext, RenderError, SuggestionRenderer, SuggestionsContainer,
};
use crate::highlight::highlight_line;
use crate::suggestion::Suggestion;

pub const SUGGESTIONS_HEADER: &str = "Suggestions:";
pub const NO_SUGGESTIONS: &str = "No suggestions";

/// Highlights query matches and frames the list under a header
#[derive(Debug, Clone, Copy, Default)]
pub struct UserRenderer;

impl UserRenderer {
    pub fn match_style() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    fn row_style(active: bool) -> Style {
        if active {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    }
}

impl SuggestionRenderer for UserRenderer {
    fn render_suggestions(
        &self,
        suggestions: &[Suggestion],
        ctx: &RenderContext<'_>,
    ) -> Result<Vec<Line<'static>>, RenderError> {
        Ok(suggestions
            .iter()
            .enumerate()
            .map(|(i, suggestion)| {
                let active = ctx.highlight_index == Some(i);
                highlight_line(
                    &suggestion.name,
                    ctx.query,
                    Self::row_style(active),
                    Self::match_style(),
                )
            })
            .collect())
    }

    fn render_container(
        &self,
        options: Vec<OptionItem>,
        _query: &str,
    ) -> Result<SuggestionsContainer, RenderError> {
        let header = if options.is_empty() {
            Line::styled(NO_SUGGESTIONS, Style::default().fg(Color::DarkGray))
        } else {
            Line::styled(
                SUGGESTIONS_HEADER,
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::UNDERLINED),
            )
        };

        Ok(SuggestionsContainer::plain(options)
            .with_header(vec![header])
            .with_border_style(Style::default().fg(Color::DarkGray)))
    }
}

#[cfg(test)]
#[path = "user_renderer_tests.rs"]
mod user_renderer_tests;
