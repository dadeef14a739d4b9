//! Suggestion rendering capability
//!
//! The widget never decides what a suggestion looks like. A host supplies a
//! [`SuggestionRenderer`] that turns suggestions into lines and, optionally,
//! wraps the resulting options in its own container.

use ratatui::text::Line;
use thiserror::Error;

use super::view::{OptionItem, SuggestionsContainer};
use crate::suggestion::Suggestion;

/// What a renderer gets to see besides the suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext<'a> {
    pub query: &'a str,
    pub highlight_index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("renderer produced {actual} items for {expected} suggestions")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("renderer failed: {0}")]
    Failed(String),
}

pub trait SuggestionRenderer {
    /// One line per suggestion, in the same order
    fn render_suggestions(
        &self,
        suggestions: &[Suggestion],
        ctx: &RenderContext<'_>,
    ) -> Result<Vec<Line<'static>>, RenderError>;

    /// Wrap the option list; the default is a bare container
    fn render_container(
        &self,
        options: Vec<OptionItem>,
        _query: &str,
    ) -> Result<SuggestionsContainer, RenderError> {
        Ok(SuggestionsContainer::plain(options))
    }
}

/// Shows each suggestion's name unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl SuggestionRenderer for PlainRenderer {
    fn render_suggestions(
        &self,
        suggestions: &[Suggestion],
        _ctx: &RenderContext<'_>,
    ) -> Result<Vec<Line<'static>>, RenderError> {
        Ok(suggestions
            .iter()
            .map(|s| Line::from(s.name.clone()))
            .collect())
    }
}
