//! Event handling and state transition logic.
//!
//! The list widget reports user input as [`Event`]s. [`handle_event`] mutates
//! the [`ListState`] and returns the [`Action`]s the control must execute.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `Open`, `Close`
//! - **Search**: `Char`, `Backspace`, `ClearSearch`
//! - **Selection**: `Select`, `SelectIndex`
//! - **Focus**: `Blur`
//!
//! # Example
//!
//! ```rust
//! use tzselect::app::{handle_event, Event, ListState};
//!
//! let mut state = ListState::new(vec![]);
//! let (should_render, actions) = handle_event(&mut state, &Event::KeyDown);
//! assert!(should_render);
//! assert!(actions.is_empty());
//! ```

use super::modes::MenuState;
use super::{Action, ListState};

/// Input reported by the list widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Opens the menu.
    Open,
    /// Closes the menu without selecting.
    Close,
    /// Moves the cursor down (opens the menu if closed).
    KeyDown,
    /// Moves the cursor up (opens the menu if closed).
    KeyUp,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Clears the query; closes the menu if the query was already empty.
    ClearSearch,
    /// Picks the option under the cursor.
    Select,
    /// Picks the option at a position of the visible (filtered) list.
    SelectIndex(usize),
    /// The widget lost focus.
    Blur,
}

/// Processes an event, mutates list state and returns actions to execute.
///
/// Returns `(should_render, actions)`. Selecting closes the menu and clears
/// the query; selecting with nothing under the cursor is a no-op.
pub fn handle_event(state: &mut ListState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Open => {
            state.menu = MenuState::Open;
            (true, vec![])
        }
        Event::Close => {
            close_menu(state);
            (true, vec![])
        }
        Event::KeyDown => {
            if state.menu.is_open() {
                state.move_selection_down();
            } else {
                state.menu = MenuState::Open;
            }
            (true, vec![])
        }
        Event::KeyUp => {
            if state.menu.is_open() {
                state.move_selection_up();
            } else {
                state.menu = MenuState::Open;
            }
            (true, vec![])
        }
        Event::Char(c) => {
            state.menu = MenuState::Open;
            state.search_query.push(*c);
            state.selected_index = 0;
            state.apply_search_filter();
            (true, vec![])
        }
        Event::Backspace => {
            if state.search_query.pop().is_none() {
                return (false, vec![]);
            }
            state.apply_search_filter();
            (true, vec![])
        }
        Event::ClearSearch => {
            if state.search_query.is_empty() {
                state.menu = MenuState::Closed;
            } else {
                tracing::debug!(query = %state.search_query, "clearing search");
                state.search_query.clear();
                state.apply_search_filter();
            }
            (true, vec![])
        }
        Event::Select => {
            let Some(option) = state.highlighted().cloned() else {
                tracing::debug!("nothing under cursor");
                return (false, vec![]);
            };
            select(state, option)
        }
        Event::SelectIndex(index) => {
            let Some(option) = state.visible(*index).cloned() else {
                tracing::debug!(index, "select index out of range");
                return (false, vec![]);
            };
            select(state, option)
        }
        Event::Blur => {
            close_menu(state);
            (true, vec![Action::Blur])
        }
    }
}

fn select(state: &mut ListState, option: crate::TimezoneOption) -> (bool, Vec<Action>) {
    tracing::debug!(value = %option.value, label = %option.label, "option selected");
    close_menu(state);
    (true, vec![Action::Change(option)])
}

fn close_menu(state: &mut ListState) {
    state.menu = MenuState::Closed;
    if !state.search_query.is_empty() {
        state.search_query.clear();
        state.apply_search_filter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TimezoneOption;

    fn option(value: &str, label: &str) -> TimezoneOption {
        TimezoneOption {
            value: value.to_string(),
            label: label.to_string(),
            offset: 0.0,
            abbrev: String::new(),
            alt_name: String::new(),
        }
    }

    fn sample() -> ListState {
        ListState::new(vec![
            option("Pacific/Honolulu", "(GMT-10:00) Hawaii"),
            option("America/Juneau", "(GMT-9:00) Alaska"),
        ])
    }

    #[test]
    fn first_key_opens_menu_without_moving() {
        let mut state = sample();
        handle_event(&mut state, &Event::KeyDown);
        assert!(state.menu.is_open());
        assert_eq!(state.selected_index, 0);
        handle_event(&mut state, &Event::KeyDown);
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn typing_then_select_emits_change() {
        let mut state = sample();
        for c in "alaska".chars() {
            handle_event(&mut state, &Event::Char(c));
        }
        let (render, actions) = handle_event(&mut state, &Event::Select);
        assert!(render);
        assert_eq!(
            actions,
            vec![Action::Change(option("America/Juneau", "(GMT-9:00) Alaska"))]
        );
        assert!(!state.menu.is_open());
        assert!(state.search_query.is_empty());
        assert_eq!(state.filtered.len(), 2);
    }

    #[test]
    fn select_with_no_match_does_nothing() {
        let mut state = sample();
        handle_event(&mut state, &Event::Char('z'));
        let (render, actions) = handle_event(&mut state, &Event::Select);
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn select_index_uses_visible_positions() {
        let mut state = sample();
        let (_, actions) = handle_event(&mut state, &Event::SelectIndex(1));
        assert_eq!(actions.len(), 1);
        let (_, actions) = handle_event(&mut state, &Event::SelectIndex(5));
        assert!(actions.is_empty());
    }

    #[test]
    fn clear_search_then_close() {
        let mut state = sample();
        handle_event(&mut state, &Event::Char('h'));
        handle_event(&mut state, &Event::ClearSearch);
        assert!(state.search_query.is_empty());
        assert!(state.menu.is_open());
        handle_event(&mut state, &Event::ClearSearch);
        assert!(!state.menu.is_open());
    }

    #[test]
    fn backspace_on_empty_query_skips_render() {
        let mut state = sample();
        assert_eq!(handle_event(&mut state, &Event::Backspace), (false, vec![]));
    }

    #[test]
    fn blur_closes_and_notifies() {
        let mut state = sample();
        handle_event(&mut state, &Event::Open);
        let (_, actions) = handle_event(&mut state, &Event::Blur);
        assert_eq!(actions, vec![Action::Blur]);
        assert!(!state.menu.is_open());
    }
}
