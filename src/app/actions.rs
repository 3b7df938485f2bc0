//! Actions representing side effects to be executed by the control.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! control executes them in order by invoking the host's callbacks.
//!
//! # Example
//!
//! ```rust
//! use tzselect::app::Action;
//!
//! let actions = vec![Action::Blur];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::domain::TimezoneOption;

/// Commands produced by the event handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The user picked an option; forwarded to `on_change`.
    Change(TimezoneOption),

    /// The list lost focus; forwarded to `on_blur`.
    Blur,
}
