//! Pass-through configuration for the query input

use std::collections::BTreeMap;

use ratatui::style::Style;

/// Title used when neither a title nor a placeholder is configured
pub const DEFAULT_INPUT_TITLE: &str = "Search";

/// Attributes the widget always owns; caller values for these are ignored
pub const WIDGET_OWNED_ATTRIBUTES: [&str; 5] =
    ["role", "aria-autocomplete", "autocomplete", "type", "value"];

/// Caller-supplied input configuration
///
/// Recognized fields configure the rendered input. Anything else rides along
/// in `attributes` and shows up in the input's accessibility view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputProps {
    pub placeholder: Option<String>,
    pub title: Option<String>,
    pub style: Option<Style>,
    pub attributes: BTreeMap<String, String>,
}

impl InputProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Placeholder field, else a caller `placeholder` attribute
    pub fn resolved_placeholder(&self) -> Option<&str> {
        self.placeholder
            .as_deref()
            .or_else(|| self.attributes.get("placeholder").map(String::as_str))
    }

    /// Title field, else a caller `title` attribute, else the placeholder,
    /// else "Search"
    pub fn resolved_title(&self) -> &str {
        self.title
            .as_deref()
            .or_else(|| self.attributes.get("title").map(String::as_str))
            .or_else(|| self.resolved_placeholder())
            .unwrap_or(DEFAULT_INPUT_TITLE)
    }

    /// Caller attributes merged under the widget's own
    pub fn merged_attributes(&self, query: &str) -> BTreeMap<String, String> {
        let mut attributes: BTreeMap<String, String> = self
            .attributes
            .iter()
            .filter(|(name, _)| !WIDGET_OWNED_ATTRIBUTES.contains(&name.as_str()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        attributes.insert(
            "placeholder".to_string(),
            self.resolved_placeholder().unwrap_or_default().to_string(),
        );
        attributes.insert("title".to_string(), self.resolved_title().to_string());

        attributes.insert("role".to_string(), "combobox".to_string());
        attributes.insert("aria-autocomplete".to_string(), "list".to_string());
        attributes.insert("autocomplete".to_string(), "off".to_string());
        attributes.insert("type".to_string(), "text".to_string());
        attributes.insert("value".to_string(), query.to_string());

        attributes
    }
}
