//! Presentation layer between the control and the host's list widget.
//!
//! The control never draws anything itself. It computes a [`ListView`] and
//! hands it, with the passthrough settings, to whatever implements
//! [`ListWidget`].
//!
//! # Architecture
//!
//! ```text
//! ListState → compute_viewmodel → ListView → ListWidget::render → host output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable list state
//! - [`widget`]: The widget trait and a plain-text implementation
//! - [`helpers`]: Shared rendering utilities (highlighting, truncation)
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use tzselect::app::{Props, TimezoneSelect};
//! use tzselect::tz::FixedClock;
//! use tzselect::ui::TextList;
//!
//! let clock = FixedClock(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap());
//! let select = TimezoneSelect::with_clock(Props::default(), clock);
//!
//! let mut widget = TextList::new();
//! select.render(&mut widget, 10);
//! assert_eq!(widget.lines(), ["Select..."]);
//! ```

pub mod helpers;
pub mod viewmodel;
pub mod widget;

pub use viewmodel::{DisplayItem, ListView};
pub use widget::{ListWidget, TextList, MAX_WIDTH, PLACEHOLDER};
