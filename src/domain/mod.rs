//! Domain layer for the timezone select control.
//!
//! Plain data types with no dependency on the time library or the list widget.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`option`]: Timezone option model and label policy
//! - [`registry`]: Ordered zone id → display name table
//! - [`value`]: Caller-supplied current value shapes

pub mod error;
pub mod option;
pub mod registry;
pub mod value;

pub use error::{Result, TzSelectError};
pub use option::{AltNameFilter, LabelPolicy, LabelStyle, TimezoneOption, DEFAULT_MAX_ABBR_LENGTH};
pub use registry::ZoneRegistry;
pub use value::CurrentValue;
