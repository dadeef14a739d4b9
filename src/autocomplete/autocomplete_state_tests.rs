//! Tests for AutocompleteState

use super::*;
use crate::test_utils::test_helpers::{fruit_suggestions, key, key_with_mods};
use proptest::prelude::*;

fn state() -> AutocompleteState {
    AutocompleteState::new(InputProps::default(), CommitBehavior::default())
}

fn type_text(state: &mut AutocompleteState, text: &str) -> Vec<AutocompleteEvent> {
    text.chars()
        .map(|c| state.handle_key(key(KeyCode::Char(c)), &[]))
        .collect()
}

mod query_tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = state();
        assert_eq!(state.query(), "");
        assert_eq!(state.highlight_index(), None);
    }

    #[test]
    fn test_typing_reports_each_change() {
        let mut state = state();

        let events = type_text(&mut state, "app");

        assert_eq!(
            events,
            vec![
                AutocompleteEvent::QueryChanged("a".to_string()),
                AutocompleteEvent::QueryChanged("ap".to_string()),
                AutocompleteEvent::QueryChanged("app".to_string()),
            ]
        );
        assert_eq!(state.query(), "app");
    }

    #[test]
    fn test_backspace_to_empty_reports_empty_query() {
        let mut state = state();
        type_text(&mut state, "a");

        let event = state.handle_key(key(KeyCode::Backspace), &[]);

        assert_eq!(event, AutocompleteEvent::QueryChanged(String::new()));
    }

    #[test]
    fn test_cursor_movement_is_not_a_change() {
        let mut state = state();
        type_text(&mut state, "ab");

        assert_eq!(
            state.handle_key(key(KeyCode::Left), &[]),
            AutocompleteEvent::Ignored
        );
        assert_eq!(state.query(), "ab");
    }

    #[test]
    fn test_enter_never_inserts_newline() {
        let mut state = state();
        type_text(&mut state, "ab");

        state.handle_key(key(KeyCode::Enter), &[]);
        state.handle_key(key_with_mods(KeyCode::Char('m'), KeyModifiers::CONTROL), &[]);

        assert_eq!(state.input().lines().len(), 1);
        assert_eq!(state.query(), "ab");
    }

    #[test]
    fn test_tab_is_ignored() {
        let mut state = state();
        assert_eq!(state.handle_key(key(KeyCode::Tab), &[]), AutocompleteEvent::Ignored);
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_set_query_reports_only_real_changes() {
        let mut state = state();

        assert_eq!(
            state.set_query("Le"),
            AutocompleteEvent::QueryChanged("Le".to_string())
        );
        assert_eq!(state.set_query("Le"), AutocompleteEvent::Ignored);
        assert_eq!(state.query(), "Le");
    }

    #[test]
    fn test_typing_after_set_query_appends() {
        let mut state = state();
        state.set_query("Le");

        type_text(&mut state, "a");

        assert_eq!(state.query(), "Lea");
    }

    #[test]
    fn test_clear_query() {
        let mut state = state();
        assert!(!state.clear_query());

        state.set_query("abc");
        assert!(state.clear_query());
        assert_eq!(state.query(), "");
    }
}

mod navigation_tests {
    use super::*;

    #[test]
    fn test_down_up_scenario_lands_on_first() {
        let suggestions = fruit_suggestions(2);
        let mut state = state();

        state.handle_key(key(KeyCode::Down), &suggestions);
        state.handle_key(key(KeyCode::Down), &suggestions);
        state.handle_key(key(KeyCode::Up), &suggestions);

        assert_eq!(state.highlight_index(), Some(0));
    }

    #[test]
    fn test_down_stops_at_last() {
        let suggestions = fruit_suggestions(2);
        let mut state = state();

        for _ in 0..5 {
            state.handle_key(key(KeyCode::Down), &suggestions);
        }

        assert_eq!(state.highlight_index(), Some(1));
    }

    #[test]
    fn test_down_on_empty_list_is_noop() {
        let mut state = state();

        assert_eq!(
            state.handle_key(key(KeyCode::Down), &[]),
            AutocompleteEvent::Navigated
        );
        assert_eq!(state.highlight_index(), None);
    }

    #[test]
    fn test_up_stops_at_first() {
        let suggestions = fruit_suggestions(3);
        let mut state = state();

        state.handle_key(key(KeyCode::Down), &suggestions);
        state.handle_key(key(KeyCode::Up), &suggestions);
        state.handle_key(key(KeyCode::Up), &suggestions);

        assert_eq!(state.highlight_index(), Some(0));
    }

    #[test]
    fn test_up_without_highlight_stays_unhighlighted() {
        let suggestions = fruit_suggestions(3);
        let mut state = state();

        state.handle_key(key(KeyCode::Up), &suggestions);

        assert_eq!(state.highlight_index(), None);
    }

    #[test]
    fn test_suggestions_changed_resets_highlight() {
        let suggestions = fruit_suggestions(3);
        let mut state = state();
        state.handle_key(key(KeyCode::Down), &suggestions);

        state.on_suggestions_changed();

        assert_eq!(state.highlight_index(), None);
    }

    #[test]
    fn test_navigation_does_not_touch_query() {
        let suggestions = fruit_suggestions(3);
        let mut state = state();
        state.set_query("an");

        state.handle_key(key(KeyCode::Down), &suggestions);
        state.handle_key(key(KeyCode::Up), &suggestions);

        assert_eq!(state.query(), "an");
    }
}

mod commit_tests {
    use super::*;

    #[test]
    fn test_enter_without_highlight_selects_nothing() {
        let suggestions = fruit_suggestions(2);
        let mut state = state();

        assert_eq!(
            state.handle_key(key(KeyCode::Enter), &suggestions),
            AutocompleteEvent::Ignored
        );
    }

    #[test]
    fn test_enter_commits_highlighted_and_keeps_query() {
        let suggestions = fruit_suggestions(2);
        let mut state = state();
        state.set_query("a");
        state.handle_key(key(KeyCode::Down), &suggestions);
        state.handle_key(key(KeyCode::Down), &suggestions);

        let event = state.handle_key(key(KeyCode::Enter), &suggestions);

        assert_eq!(
            event,
            AutocompleteEvent::Selected {
                suggestion: suggestions[1].clone(),
                query_cleared: false,
            }
        );
        assert_eq!(state.highlight_index(), None);
        assert_eq!(state.query(), "a");
    }

    #[test]
    fn test_enter_clears_query_when_configured() {
        let suggestions = fruit_suggestions(2);
        let behavior = CommitBehavior {
            clear_query_on_enter: true,
            ..CommitBehavior::default()
        };
        let mut state = AutocompleteState::new(InputProps::default(), behavior);
        state.set_query("a");
        state.handle_key(key(KeyCode::Down), &suggestions);

        let event = state.handle_key(key(KeyCode::Enter), &suggestions);

        assert_eq!(
            event,
            AutocompleteEvent::Selected {
                suggestion: suggestions[0].clone(),
                query_cleared: true,
            }
        );
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_click_selects_exact_item_and_clears_query() {
        let suggestions = fruit_suggestions(5);
        let mut state = state();

        for (i, suggestion) in suggestions.iter().enumerate() {
            state.set_query("a");
            let event = state.select_index(i, &suggestions);
            assert_eq!(
                event,
                AutocompleteEvent::Selected {
                    suggestion: suggestion.clone(),
                    query_cleared: true,
                }
            );
            assert_eq!(state.query(), "");
        }
    }

    #[test]
    fn test_click_keeps_query_when_configured() {
        let suggestions = fruit_suggestions(2);
        let behavior = CommitBehavior {
            clear_query_on_click: false,
            ..CommitBehavior::default()
        };
        let mut state = AutocompleteState::new(InputProps::default(), behavior);
        state.set_query("a");

        let event = state.select_index(0, &suggestions);

        assert!(matches!(
            event,
            AutocompleteEvent::Selected {
                query_cleared: false,
                ..
            }
        ));
        assert_eq!(state.query(), "a");
    }

    #[test]
    fn test_click_out_of_range_is_ignored() {
        let suggestions = fruit_suggestions(2);
        let mut state = state();

        assert_eq!(state.select_index(2, &suggestions), AutocompleteEvent::Ignored);
    }

    #[test]
    fn test_click_resets_highlight() {
        let suggestions = fruit_suggestions(3);
        let mut state = state();
        state.handle_key(key(KeyCode::Down), &suggestions);

        state.select_index(2, &suggestions);

        assert_eq!(state.highlight_index(), None);
    }
}

#[derive(Debug, Clone, Copy)]
enum Nav {
    Down,
    Up,
    Enter,
    Replace(usize),
}

fn nav_strategy() -> impl Strategy<Value = Nav> {
    prop_oneof![
        Just(Nav::Down),
        Just(Nav::Up),
        Just(Nav::Enter),
        (0usize..6).prop_map(Nav::Replace),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // The highlight never leaves [-1, len - 1], whatever the key sequence
    #[test]
    fn prop_highlight_stays_in_bounds(
        initial_len in 0usize..6,
        steps in prop::collection::vec(nav_strategy(), 0..40),
    ) {
        let mut suggestions = fruit_suggestions(initial_len);
        let mut state = state();

        for step in steps {
            match step {
                Nav::Down => { state.handle_key(key(KeyCode::Down), &suggestions); }
                Nav::Up => { state.handle_key(key(KeyCode::Up), &suggestions); }
                Nav::Enter => {
                    let had_highlight = state.highlight_index().is_some();
                    let event = state.handle_key(key(KeyCode::Enter), &suggestions);
                    let selected = matches!(event, AutocompleteEvent::Selected { .. });
                    prop_assert_eq!(selected, had_highlight);
                }
                Nav::Replace(len) => {
                    suggestions = fruit_suggestions(len);
                    state.on_suggestions_changed();
                }
            }

            if let Some(i) = state.highlight_index() {
                prop_assert!(i < suggestions.len());
            }
        }
    }
}
