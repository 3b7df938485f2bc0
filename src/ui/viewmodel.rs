//! View model types representing renderable list state.
//!
//! View models are computed by `ListState::compute_viewmodel()` and handed to
//! a [`ListWidget`](super::ListWidget). They contain no business logic, only
//! display-ready data.
//!
//! # Example
//!
//! ```rust
//! use tzselect::ui::{DisplayItem, ListView};
//!
//! let view = ListView {
//!     items: vec![DisplayItem {
//!         label: "(GMT-10:00) Hawaii".to_string(),
//!         value: "Pacific/Honolulu".to_string(),
//!         is_highlighted: true,
//!         is_selected: false,
//!         highlight_ranges: vec![(12, 18)],
//!     }],
//!     cursor: 0,
//!     selected_label: None,
//!     search_query: "hawaii".to_string(),
//!     menu_open: true,
//!     match_count: 1,
//! };
//! assert_eq!(view.items[view.cursor].value, "Pacific/Honolulu");
//! ```

/// Complete view model for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    /// Visible window of the filtered options. Empty while the menu is closed.
    pub items: Vec<DisplayItem>,

    /// Cursor position within `items`.
    pub cursor: usize,

    /// Label of the resolved current value, if any.
    pub selected_label: Option<String>,

    /// Current search query text.
    pub search_query: String,

    /// Whether the menu is open.
    pub menu_open: bool,

    /// Number of options matching the query, visible or not.
    pub match_count: usize,
}

/// One visible option row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub label: String,

    /// Zone id of the option.
    pub value: String,

    /// Whether the cursor is on this row.
    pub is_highlighted: bool,

    /// Whether this row is the resolved current value.
    pub is_selected: bool,

    /// Character ranges of `label` to highlight (fuzzy search matches).
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}
