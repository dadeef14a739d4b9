//! Structural view of the widget
//!
//! Describes what the widget shows before anything is painted: the input
//! with its attributes and, when there is something to show, the dropdown
//! with the combobox / listbox / option roles assistive tooling expects.

use std::collections::BTreeMap;

use ratatui::style::Style;
use ratatui::text::Line;

use super::autocomplete_state::AutocompleteState;
use super::renderer::{RenderContext, RenderError, SuggestionRenderer};
use crate::suggestion::{Suggestion, SuggestionId};

pub const OPTION_ID_PREFIX: &str = "autosuggest-option-";

pub const COMBOBOX_ATTRIBUTES: [(&str, &str); 3] = [
    ("role", "combobox"),
    ("aria-haspopup", "listbox"),
    ("aria-expanded", "true"),
];

pub const LISTBOX_ATTRIBUTES: [(&str, &str); 1] = [("role", "listbox")];

pub fn option_id(index: usize) -> String {
    format!("{}{}", OPTION_ID_PREFIX, index)
}

/// One rendered suggestion wrapped as a selectable option
#[derive(Debug, Clone, PartialEq)]
pub struct OptionItem {
    pub id: String,
    /// Position in the suggestion list; clicks resolve through this
    pub index: usize,
    pub key: SuggestionId,
    pub selected: bool,
    pub content: Line<'static>,
}

impl OptionItem {
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("role", "option".to_string()),
            ("id", self.id.clone()),
            ("aria-selected", self.selected.to_string()),
        ]
    }
}

/// Wrapper around the option list, built by the renderer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionsContainer {
    pub title: Option<String>,
    /// Lines shown above the options
    pub header: Vec<Line<'static>>,
    pub options: Vec<OptionItem>,
    pub border_style: Style,
}

impl SuggestionsContainer {
    pub fn plain(options: Vec<OptionItem>) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_header(mut self, header: Vec<Line<'static>>) -> Self {
        self.header = header;
        self
    }

    pub fn with_border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dropdown {
    pub container: SuggestionsContainer,
}

impl Dropdown {
    pub fn combobox_attributes(&self) -> &'static [(&'static str, &'static str)] {
        &COMBOBOX_ATTRIBUTES
    }

    pub fn listbox_attributes(&self) -> &'static [(&'static str, &'static str)] {
        &LISTBOX_ATTRIBUTES
    }

    pub fn options(&self) -> &[OptionItem] {
        &self.container.options
    }

    pub fn selected_option(&self) -> Option<&OptionItem> {
        self.options().iter().find(|o| o.selected)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputView {
    pub attributes: BTreeMap<String, String>,
}

impl InputView {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AutocompleteView {
    pub input: InputView,
    pub dropdown: Option<Dropdown>,
}

impl AutocompleteView {
    /// Roles in document order
    pub fn roles(&self) -> Vec<&str> {
        let mut roles: Vec<&str> = self.input.attribute("role").into_iter().collect();

        if let Some(dropdown) = &self.dropdown {
            roles.push(COMBOBOX_ATTRIBUTES[0].1);
            roles.push(LISTBOX_ATTRIBUTES[0].1);
            roles.extend(dropdown.options().iter().map(|_| "option"));
        }

        roles
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles().contains(&role)
    }
}

impl AutocompleteState {
    /// Build the view for the current state
    ///
    /// No dropdown is produced when there are no suggestions or no renderer.
    /// A failing renderer only loses the dropdown; the input always renders.
    pub fn view(
        &self,
        suggestions: &[Suggestion],
        renderer: Option<&dyn SuggestionRenderer>,
    ) -> AutocompleteView {
        let input = InputView {
            attributes: self.props().merged_attributes(self.query()),
        };

        let dropdown = match renderer {
            Some(renderer) if !suggestions.is_empty() => {
                match self.build_dropdown(suggestions, renderer) {
                    Ok(dropdown) => Some(dropdown),
                    Err(e) => {
                        log::warn!("Dropping suggestion dropdown: {}", e);
                        None
                    }
                }
            }
            _ => None,
        };

        AutocompleteView { input, dropdown }
    }

    fn build_dropdown(
        &self,
        suggestions: &[Suggestion],
        renderer: &dyn SuggestionRenderer,
    ) -> Result<Dropdown, RenderError> {
        let ctx = RenderContext {
            query: self.query(),
            highlight_index: self.highlight_index(),
        };

        let lines = renderer.render_suggestions(suggestions, &ctx)?;
        if lines.len() != suggestions.len() {
            return Err(RenderError::LengthMismatch {
                expected: suggestions.len(),
                actual: lines.len(),
            });
        }

        let options = lines
            .into_iter()
            .zip(suggestions)
            .enumerate()
            .map(|(index, (content, suggestion))| OptionItem {
                id: option_id(index),
                index,
                key: suggestion.id.clone(),
                selected: self.highlight_index() == Some(index),
                content,
            })
            .collect();

        let container = renderer.render_container(options, self.query())?;
        Ok(Dropdown { container })
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod view_tests;
