//! Time library adapter.
//!
//! Everything the control needs to know about real timezones goes through this
//! module: the current instant ([`clock`]), offsets and DST state from
//! `chrono-tz` ([`zone`]), and the human-facing names ([`names`]).

pub mod clock;
pub mod names;
pub mod zone;

pub use clock::{Clock, FixedClock, SystemClock};
pub use names::{names_for, ZoneName, ZoneNames};
pub use zone::{lookup, ZoneSnapshot};
