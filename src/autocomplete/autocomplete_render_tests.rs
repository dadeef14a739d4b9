//! Tests for autocomplete rendering

use super::*;
use crate::autocomplete::{
    CommitBehavior, InputProps, PlainRenderer, RenderContext, RenderError, SuggestionRenderer,
    SuggestionsContainer,
};
use crate::suggestion::Suggestion;
use crate::test_utils::test_helpers::{fruit_suggestions, key};
use proptest::prelude::*;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::KeyCode;

const TEST_WIDTH: u16 = 40;

struct HeadedRenderer;

impl SuggestionRenderer for HeadedRenderer {
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

    fn render_container(
        &self,
        options: Vec<OptionItem>,
        _query: &str,
    ) -> Result<SuggestionsContainer, RenderError> {
        Ok(SuggestionsContainer::plain(options)
            .with_title("Users")
            .with_header(vec![Line::from("Suggestions:")]))
    }
}

fn state_with_query(query: &str) -> AutocompleteState {
    let mut state = AutocompleteState::new(InputProps::default(), CommitBehavior::default());
    state.set_query(query);
    state
}

fn numbered_suggestions(count: usize) -> Vec<Suggestion> {
    (0..count)
        .map(|i| Suggestion::new(i as u64, format!("Item {}", i)))
        .collect()
}

/// Render into a fresh terminal, returning the buffer and the hitboxes
fn draw(
    state: &AutocompleteState,
    suggestions: &[Suggestion],
    renderer: Option<&dyn SuggestionRenderer>,
    height: u16,
    input_area: Rect,
) -> (Buffer, Vec<OptionHitbox>) {
    let mut terminal = Terminal::new(TestBackend::new(TEST_WIDTH, height)).unwrap();
    let view = state.view(suggestions, renderer);
    let mut hitboxes = Vec::new();

    terminal
        .draw(|f| {
            let bounds = f.area();
            hitboxes = render_autocomplete(f, state, &view, input_area, bounds);
        })
        .unwrap();

    (terminal.backend().buffer().clone(), hitboxes)
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

const TOP_INPUT: Rect = Rect {
    x: 0,
    y: 0,
    width: TEST_WIDTH,
    height: 3,
};

#[test]
fn test_input_only_without_dropdown() {
    let state = state_with_query("zzz");
    let (buffer, hitboxes) = draw(&state, &[], Some(&PlainRenderer), 12, TOP_INPUT);

    assert!(hitboxes.is_empty());
    assert!(row_text(&buffer, 0).contains("Search"));
    assert!(row_text(&buffer, 1).contains("zzz"));
    assert_eq!(row_text(&buffer, 3).trim(), "");
}

#[test]
fn test_dropdown_below_input() {
    let state = state_with_query("a");
    let suggestions = fruit_suggestions(3);
    let (buffer, hitboxes) = draw(&state, &suggestions, Some(&PlainRenderer), 12, TOP_INPUT);

    assert!(row_text(&buffer, 4).contains("  Apple"));
    assert!(row_text(&buffer, 5).contains("  Banana"));
    assert!(row_text(&buffer, 6).contains("  Orange"));

    let indices: Vec<usize> = hitboxes.iter().map(|h| h.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert_eq!(hitboxes[0].area, Rect::new(3, 4, 22, 1));
    assert_eq!(hitboxes[2].area.y, 6);
}

#[test]
fn test_selected_option_marker_and_style() {
    let mut state = state_with_query("a");
    let suggestions = fruit_suggestions(3);
    state.handle_key(key(KeyCode::Down), &suggestions);
    state.handle_key(key(KeyCode::Down), &suggestions);

    let (buffer, _) = draw(&state, &suggestions, Some(&PlainRenderer), 12, TOP_INPUT);

    assert!(row_text(&buffer, 5).contains("► Banana"));
    assert!(row_text(&buffer, 4).contains("  Apple"));
    assert_eq!(buffer[(3, 5)].bg, Color::Cyan);
    assert_eq!(buffer[(3, 5)].fg, Color::Black);
    assert_ne!(buffer[(3, 4)].bg, Color::Cyan);
}

#[test]
fn test_dropdown_flips_above_at_bottom_of_screen() {
    let state = state_with_query("a");
    let suggestions = fruit_suggestions(3);
    let input_area = Rect::new(0, 9, TEST_WIDTH, 3);

    let (buffer, hitboxes) = draw(&state, &suggestions, Some(&PlainRenderer), 12, input_area);

    assert_eq!(hitboxes[0].area.y, 5);
    assert!(row_text(&buffer, 5).contains("Apple"));
    assert!(row_text(&buffer, 10).contains('a'));
}

#[test]
fn test_container_title_and_header() {
    let state = state_with_query("a");
    let suggestions = fruit_suggestions(2);
    let (buffer, hitboxes) = draw(&state, &suggestions, Some(&HeadedRenderer), 12, TOP_INPUT);

    assert!(row_text(&buffer, 3).contains("Users"));
    assert!(row_text(&buffer, 4).contains("Suggestions:"));
    assert!(row_text(&buffer, 5).contains("Apple"));
    assert_eq!(hitboxes[0].area.y, 5);
}

#[test]
fn test_long_list_scrolls_to_selection() {
    let mut state = state_with_query("Item");
    let suggestions = numbered_suggestions(12);
    for _ in 0..12 {
        state.handle_key(key(KeyCode::Down), &suggestions);
    }

    let (buffer, hitboxes) = draw(&state, &suggestions, Some(&PlainRenderer), 20, TOP_INPUT);

    assert_eq!(hitboxes.len(), MAX_VISIBLE_SUGGESTIONS);
    assert_eq!(hitboxes.first().map(|h| h.index), Some(2));
    assert_eq!(hitboxes.last().map(|h| h.index), Some(11));
    assert!(row_text(&buffer, 13).contains("► Item 11"));
}

#[test]
fn test_no_room_for_popup_yields_no_hitboxes() {
    let state = state_with_query("a");
    let suggestions = fruit_suggestions(3);

    let (_, hitboxes) = draw(&state, &suggestions, Some(&PlainRenderer), 4, TOP_INPUT);

    assert!(hitboxes.is_empty());
}

#[test]
fn test_hitbox_contains() {
    let hitbox = OptionHitbox {
        area: Rect::new(3, 4, 22, 1),
        index: 0,
    };

    assert!(hitbox.contains(3, 4));
    assert!(hitbox.contains(24, 4));
    assert!(!hitbox.contains(25, 4));
    assert!(!hitbox.contains(10, 5));
    assert!(!hitbox.contains(2, 4));
}

#[test]
fn test_scroll_offset() {
    assert_eq!(scroll_offset(None, 10), 0);
    assert_eq!(scroll_offset(Some(9), 10), 0);
    assert_eq!(scroll_offset(Some(10), 10), 1);
    assert_eq!(scroll_offset(Some(3), 0), 0);
}

proptest! {
    #[test]
    fn prop_selection_always_visible(selected in 0usize..200, visible in 1usize..20) {
        let offset = scroll_offset(Some(selected), visible);
        prop_assert!(offset <= selected);
        prop_assert!(selected < offset + visible);
    }
}
