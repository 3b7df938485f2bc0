//! Menu state for the list.
//!
//! The option list is either hidden behind the control or open for
//! navigation and type-to-search.
//!
//! # Example
//!
//! ```rust
//! use tzselect::app::modes::MenuState;
//!
//! let menu = MenuState::from_flag(Some("true"));
//! assert!(menu.is_open());
//! ```

/// Visibility of the option menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    /// Only the control (selected label or placeholder) is visible.
    ///
    /// Navigation keys and typed characters open the menu.
    #[default]
    Closed,

    /// The filtered option list is visible.
    ///
    /// Accepts j/k style navigation, type-to-search, and selection.
    Open,
}

impl MenuState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Parses a host flag such as the `menu_is_open` passthrough value.
    ///
    /// `"true"`, `"1"` and `"yes"` open the menu; anything else, including a
    /// missing flag, keeps it closed.
    #[must_use]
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag.map(str::trim) {
            Some("true" | "1" | "yes") => Self::Open,
            _ => Self::Closed,
        }
    }
}
