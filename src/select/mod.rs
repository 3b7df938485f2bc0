//! Core option logic: building labeled options and resolving values to them.
//!
//! Everything here is a pure function of its inputs and the instant passed in.
//!
//! ```text
//! ZoneRegistry ──build_options──▶ Vec<TimezoneOption>
//!                                        │
//! CurrentValue ──────────resolve─────────┤──▶ Option<&TimezoneOption>
//!                                        │
//!                          (ids with '/') fuzzy_match
//! ```
//!
//! # Modules
//!
//! - [`builder`]: Option construction, offset formatting, label composition
//! - [`resolve`](mod@resolve): Exact-then-fuzzy value resolution
//! - [`fuzzy`]: Offset and name-similarity scoring

pub mod builder;
pub mod fuzzy;
pub mod resolve;

pub use builder::{build_options, compose_label, format_offset};
pub use fuzzy::fuzzy_match;
pub use resolve::resolve;
