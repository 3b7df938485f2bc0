//! List state and view model computation.
//!
//! [`ListState`] owns the built options together with the transient UI state
//! around them: the search query, the filtered subset, the cursor and whether
//! the menu is open. View models are computed on demand from a state snapshot.
//!
//! # Example
//!
//! ```rust
//! use tzselect::app::ListState;
//! use tzselect::TimezoneOption;
//!
//! let options = vec![TimezoneOption {
//!     value: "Pacific/Honolulu".into(),
//!     label: "(GMT-10:00) Hawaii".into(),
//!     offset: -10.0,
//!     abbrev: "HAST".into(),
//!     alt_name: "Hawaii-Aleutian Standard Time".into(),
//! }];
//! let mut state = ListState::new(options);
//! state.search_query = "hawaii".to_string();
//! state.apply_search_filter();
//! assert_eq!(state.highlighted().unwrap().value, "Pacific/Honolulu");
//! ```

use super::modes::MenuState;
use crate::domain::TimezoneOption;
use crate::ui::viewmodel::{DisplayItem, ListView};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Options plus search, cursor and menu state.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// All options, in offset order.
    options: Vec<TimezoneOption>,

    /// Indices into `options` that match the current search query.
    ///
    /// Recomputed by `apply_search_filter()` after state changes.
    pub filtered: Vec<usize>,

    /// Zero-based cursor position within `filtered`.
    ///
    /// Clamped by `apply_search_filter()`. Wraps around during navigation.
    pub selected_index: usize,

    /// Current search query. Whitespace-separated tokens must all match.
    pub search_query: String,

    /// Whether the option menu is visible.
    pub menu: MenuState,
}

impl ListState {
    /// Creates list state over `options` with an empty query and closed menu.
    #[must_use]
    pub fn new(options: Vec<TimezoneOption>) -> Self {
        let mut state = Self {
            options,
            ..Self::default()
        };
        state.apply_search_filter();
        state
    }

    #[must_use]
    pub fn options(&self) -> &[TimezoneOption] {
        &self.options
    }

    /// Replaces the options, keeping the query and re-filtering.
    pub fn set_options(&mut self, options: Vec<TimezoneOption>) {
        self.options = options;
        self.apply_search_filter();
    }

    /// Moves the cursor down by one, wrapping to the top. No-op on an empty list.
    pub fn move_selection_down(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered.len();
    }

    /// Moves the cursor up by one, wrapping to the bottom. No-op on an empty list.
    pub fn move_selection_up(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Option under the cursor, if any.
    #[must_use]
    pub fn highlighted(&self) -> Option<&TimezoneOption> {
        self.filtered
            .get(self.selected_index)
            .and_then(|&index| self.options.get(index))
    }

    /// Option at position `index` of the filtered list.
    #[must_use]
    pub fn visible(&self, index: usize) -> Option<&TimezoneOption> {
        self.filtered.get(index).and_then(|&i| self.options.get(i))
    }

    /// Moves the cursor onto the option with `value`, if it is visible.
    pub fn focus_value(&mut self, value: &str) {
        if let Some(position) = self
            .filtered
            .iter()
            .position(|&index| self.options[index].value == value)
        {
            self.selected_index = position;
        }
    }

    /// Filters options by label against the search query.
    ///
    /// # Filtering Algorithm
    ///
    /// 1. **Tokenization**: Split query by whitespace, lowercase
    /// 2. **Token Matching**: Every token must fuzzy-match the lowercased label
    /// 3. **Index Clamping**: Keep the cursor within the filtered bounds
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!("apply_search_filter",
            total_options = self.options.len(),
            query_len = self.search_query.len(),
        )
        .entered();

        let tokens: Vec<String> = self
            .search_query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        let matcher = if tokens.is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        self.filtered = self
            .options
            .iter()
            .enumerate()
            .filter(|(_, option)| {
                matcher.as_ref().map_or(true, |m| {
                    let label = option.label.to_lowercase();
                    tokens.iter().all(|token| m.fuzzy_match(&label, token).is_some())
                })
            })
            .map(|(index, _)| index)
            .collect();

        if self.filtered.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered.len() - 1);
        }

        tracing::debug!(filtered_count = self.filtered.len(), "search filter applied");
    }

    /// Computes a renderable view model.
    ///
    /// `selected` is the resolved current value; `rows` limits how many options
    /// are included, windowed around the cursor.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Center the window on the cursor
    /// 2. Shift it back when it would run past the end of the list
    /// 3. Report the cursor relative to the window
    #[must_use]
    pub fn compute_viewmodel(&self, selected: Option<&TimezoneOption>, rows: usize) -> ListView {
        let selected_label = selected.map(|option| option.label.clone());

        if !self.menu.is_open() || self.filtered.is_empty() {
            return ListView {
                items: vec![],
                cursor: 0,
                selected_label,
                search_query: self.search_query.clone(),
                menu_open: self.menu.is_open(),
                match_count: self.filtered.len(),
            };
        }

        let rows = rows.max(1);
        let mut visible_start = self.selected_index.saturating_sub(rows / 2);
        let visible_end = (visible_start + rows).min(self.filtered.len());
        if visible_end - visible_start < rows && self.filtered.len() >= rows {
            visible_start = visible_end.saturating_sub(rows);
        }

        let matcher = if self.search_query.trim().is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        let items = self.filtered[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative, &index)| {
                let option = &self.options[index];
                DisplayItem {
                    label: option.label.clone(),
                    value: option.value.clone(),
                    is_highlighted: visible_start + relative == self.selected_index,
                    is_selected: selected.is_some_and(|s| s.value == option.value),
                    highlight_ranges: matcher
                        .as_ref()
                        .map_or_else(Vec::new, |m| self.compute_highlight_ranges(&option.label, m)),
                }
            })
            .collect();

        ListView {
            items,
            cursor: self.selected_index.saturating_sub(visible_start),
            selected_label,
            search_query: self.search_query.clone(),
            menu_open: true,
            match_count: self.filtered.len(),
        }
    }

    /// Character ranges of `text` matched by the search query, coalesced into
    /// `(start, end)` runs with exclusive ends.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        let Some((_score, indices)) = matcher.fuzzy_indices(text, self.search_query.trim()) else {
            return vec![];
        };

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
            option("Europe/London", "(GMT+0:00) Edinburgh, London"),
        ])
    }

    #[test]
    fn navigation_wraps() {
        let mut state = sample();
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn navigation_on_empty_list_is_noop() {
        let mut state = ListState::new(vec![]);
        state.move_selection_down();
        state.move_selection_up();
        assert_eq!(state.selected_index, 0);
        assert!(state.highlighted().is_none());
    }

    #[test]
    fn every_token_must_match() {
        let mut state = sample();
        state.search_query = "edin lon".to_string();
        state.apply_search_filter();
        assert_eq!(state.filtered, vec![2]);

        state.search_query = "edin hawaii".to_string();
        state.apply_search_filter();
        assert!(state.filtered.is_empty());
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn filter_clamps_cursor() {
        let mut state = sample();
        state.selected_index = 2;
        state.search_query = "alaska".to_string();
        state.apply_search_filter();
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.highlighted().unwrap().value, "America/Juneau");
    }

    #[test]
    fn focus_value_moves_cursor() {
        let mut state = sample();
        state.focus_value("Europe/London");
        assert_eq!(state.selected_index, 2);
        state.focus_value("Asia/Tokyo");
        assert_eq!(state.selected_index, 2);
    }

    #[test]
    fn closed_menu_has_no_items() {
        let state = sample();
        let view = state.compute_viewmodel(None, 10);
        assert!(view.items.is_empty());
        assert!(!view.menu_open);
        assert_eq!(view.match_count, 3);
    }

    #[test]
    fn viewmodel_windows_around_cursor() {
        let mut state = sample();
        state.menu = MenuState::Open;
        state.selected_index = 2;
        let selected = option("America/Juneau", "(GMT-9:00) Alaska");
        let view = state.compute_viewmodel(Some(&selected), 2);

        let values: Vec<_> = view.items.iter().map(|i| i.value.as_str()).collect();
        assert_eq!(values, vec!["America/Juneau", "Europe/London"]);
        assert_eq!(view.cursor, 1);
        assert!(view.items[0].is_selected);
        assert!(view.items[1].is_highlighted);
        assert_eq!(view.selected_label.as_deref(), Some("(GMT-9:00) Alaska"));
    }

    #[test]
    fn highlight_ranges_are_coalesced() {
        let mut state = sample();
        state.menu = MenuState::Open;
        state.search_query = "hawaii".to_string();
        state.apply_search_filter();
        let view = state.compute_viewmodel(None, 10);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].highlight_ranges, vec![(12, 18)]);
    }
}
