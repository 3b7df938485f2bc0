//! Application layer coordinating list state, events, and actions.
//!
//! This module sits between the host's list widget and the core option logic
//! in [`crate::select`].
//!
//! # Architecture
//!
//! ```text
//! Widget Input → Events → Event Handler → State Mutations → Actions → Callbacks
//!                                                                  (on_change, on_blur)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`control`]: The [`TimezoneSelect`] control and its props
//! - [`handler`]: Event processing logic and state transitions
//! - [`modes`]: Menu open/closed state
//! - [`state`]: List state and view model computation

pub mod actions;
pub mod control;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use control::{Props, TimezoneSelect, MENU_IS_OPEN};
pub use handler::{handle_event, Event};
pub use modes::MenuState;
pub use state::ListState;
