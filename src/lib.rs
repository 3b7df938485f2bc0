//! tzselect: a timezone selection control.
//!
//! tzselect turns a table of IANA zone ids into a sorted list of selectable
//! options and keeps a host-owned "current value" pointed at one of them:
//! - Labels carry the live GMT offset, e.g. `(GMT+1:00) Amsterdam, Berlin`
//! - Optional abbreviation or long-name suffixes, DST-aware
//! - Options sorted ascending by current offset
//! - Zone ids outside the table resolve to the closest option by offset,
//!   DST behavior and name similarity
//! - Search-as-you-type filtering for the host's list widget

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Control (app/control)                              │  ← Host entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Select Layer  │   │ Time Layer    │
//! │ (ui/)         │   │ (select/)     │   │ (tz/)         │
//! │ - View models │   │ - Build       │   │ - Clock       │
//! │ - Widget seam │   │ - Resolve     │   │ - chrono-tz   │
//! │ - Text widget │   │ - Fuzzy match │   │ - Zone names  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Options, label policy, registry, current value   │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                    │  ← Optional
//! │  - tracing-subscriber setup                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Control, list state, event/action model
//! - [`domain`]: Core domain types (options, registry, values, errors)
//! - [`select`]: Option building and value resolution
//! - [`tz`]: Clock, zone lookup and zone names
//! - [`ui`]: View models and the list widget seam
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! Hosts either pass a key/value map ([`Config::from_map`]) or a TOML file
//! ([`Config::from_file`]):
//!
//! ```toml
//! label_style = "abbrev"
//! max_abbr_length = 4
//! alt_name_filter = "any"
//! value = "Europe/Rome"
//! trace_level = "debug"
//!
//! [timezones]
//! "America/Lima" = "Pittsburgh"
//! "Europe/Berlin" = "Frankfurt"
//!
//! [passthrough]
//! placeholder = "Please Select a Timezone"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use tzselect::{initialize, Config, Event};
//!
//! let config = Config {
//!     value: Some("Europe/Rome".to_string()),
//!     ..Default::default()
//! };
//!
//! let mut select = initialize(&config).on_change(|option| {
//!     println!("picked {}", option.value);
//! });
//!
//! // Europe/Rome is not in the bundled table; it resolves by similarity.
//! assert_eq!(select.selected().unwrap().value, "Europe/Amsterdam");
//!
//! select.handle(&Event::KeyDown);
//! select.handle(&Event::Select);
//! ```
//!
//! # Key Design Decisions
//!
//! ## Labels Reflect "Now"
//!
//! Offsets, DST state and abbreviations are computed at build time from the
//! control's [`Clock`](tz::Clock). Tests pin the instant with
//! [`FixedClock`](tz::FixedClock); hosts call
//! [`TimezoneSelect::rebuild`] to refresh long-lived controls.
//!
//! ## Resolution Is Never Cached
//!
//! The current value belongs to the host. The control resolves it against the
//! built options on every read, so a new value or new options are reflected
//! immediately.
//!
//! ## Immutable View Models
//!
//! Widgets receive computed [`ListView`](ui::ListView)s:
//! - Clear separation between state and display
//! - Enables easier testing and validation
//! - Pre-computes fuzzy match highlighting

pub mod app;
pub mod domain;
pub mod observability;
pub mod select;
pub mod tz;
pub mod ui;

pub use app::{handle_event, Action, Event, MenuState, Props, TimezoneSelect};
pub use domain::{
    AltNameFilter, CurrentValue, LabelPolicy, LabelStyle, Result, TimezoneOption, TzSelectError,
    ZoneRegistry,
};
pub use select::{build_options, fuzzy_match, resolve};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tz::{Clock, SystemClock};

/// Control configuration.
///
/// # Example
///
/// ```toml
/// label_style = "altName"
/// alt_name_filter = "reject_slash"
/// trace_level = "tzselect=debug"
/// trace_file = "/tmp/tzselect.log"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Label suffix style: `original`, `altName` or `abbrev`.
    ///
    /// Unknown styles fall back to `original`. Default: `original`
    pub label_style: LabelStyle,

    /// Abbreviation truncation length for the `abbrev` style.
    ///
    /// `None` keeps the default of 4.
    pub max_abbr_length: Option<usize>,

    /// Which long names may be appended: `any` or `reject_slash`. Default: `any`
    pub alt_name_filter: AltNameFilter,

    /// Zones to offer instead of the bundled table, in display order.
    pub timezones: Option<ZoneRegistry>,

    /// Initial current value, a zone id.
    pub value: Option<String>,

    /// Tracing level or filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// File to append trace output to. Default: stderr
    pub trace_file: Option<String>,

    /// Settings forwarded verbatim to the list widget.
    pub passthrough: BTreeMap<String, String>,
}

impl Config {
    /// Parses configuration from a host key/value map.
    ///
    /// # Parameters
    ///
    /// * `config` - Configuration map from the host
    ///
    /// # Parsing Rules
    ///
    /// - `label_style`: String → [`LabelStyle`] (unknown → `original`)
    /// - `max_abbr_length`: String → `usize` (ignored on parse error)
    /// - `alt_name_filter`: `reject_slash` → [`AltNameFilter::RejectSlash`], anything else → `Any`
    /// - `timezones`: JSON object of zone id → name (ignored on parse error)
    /// - `value`, `trace_level`, `trace_file`: copied as-is
    /// - every other key: forwarded to the widget as passthrough
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use tzselect::{Config, LabelStyle};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("label_style".to_string(), "abbrev".to_string());
    /// map.insert("timezones".to_string(), r#"{"America/Lima": "Pittsburgh"}"#.to_string());
    /// map.insert("placeholder".to_string(), "Pick one".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.label_style, LabelStyle::Abbrev);
    /// assert_eq!(config.timezones.unwrap().get("America/Lima"), Some("Pittsburgh"));
    /// assert_eq!(config.passthrough["placeholder"], "Pick one");
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let mut parsed = Self::default();

        for (key, raw) in config {
            match key.as_str() {
                "label_style" => parsed.label_style = LabelStyle::from(raw.trim()),
                "max_abbr_length" => {
                    parsed.max_abbr_length = raw.trim().parse::<usize>().ok();
                    if parsed.max_abbr_length.is_none() {
                        tracing::debug!(raw = %raw, "invalid max_abbr_length, using default");
                    }
                }
                "alt_name_filter" => {
                    parsed.alt_name_filter = match raw.trim() {
                        "reject_slash" => AltNameFilter::RejectSlash,
                        _ => AltNameFilter::Any,
                    };
                }
                "timezones" => {
                    parsed.timezones = serde_json::from_str::<ZoneRegistry>(raw)
                        .map_err(|e| {
                            tracing::debug!(error = %e, "invalid timezones table, using default");
                        })
                        .ok();
                }
                "value" => parsed.value = Some(raw.clone()),
                "trace_level" => parsed.trace_level = Some(raw.clone()),
                "trace_file" => parsed.trace_file = Some(raw.clone()),
                _ => {
                    parsed.passthrough.insert(key.clone(), raw.clone());
                }
            }
        }

        parsed
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`TzSelectError::Toml`] if the text is not valid TOML or a
    /// field has the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`TzSelectError::Io`] if the file can't be read, or
    /// [`TzSelectError::Toml`] if it doesn't parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading config file");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Label policy assembled from the style, length and filter settings.
    #[must_use]
    pub fn policy(&self) -> LabelPolicy {
        let defaults = LabelPolicy::default();
        LabelPolicy {
            style: self.label_style,
            max_abbr_length: self.max_abbr_length.unwrap_or(defaults.max_abbr_length),
            alt_name_filter: self.alt_name_filter,
        }
    }

    /// Control props described by this configuration.
    #[must_use]
    pub fn props(&self) -> Props {
        Props {
            value: self
                .value
                .as_deref()
                .map_or(CurrentValue::Invalid, CurrentValue::from),
            policy: self.policy(),
            timezones: self.timezones.clone().unwrap_or_default(),
            passthrough: self.passthrough.clone(),
        }
    }
}

/// Initializes a control from configuration.
///
/// # Parameters
///
/// * `config` - Control configuration
///
/// # Returns
///
/// A [`TimezoneSelect`] reading the system clock, with options already built.
///
/// # Example
///
/// ```rust
/// use tzselect::{initialize, Config};
///
/// let select = initialize(&Config::default());
/// assert!(!select.options().is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> TimezoneSelect {
    initialize_with_clock(config, SystemClock)
}

/// Initializes a control from configuration with an explicit clock.
#[must_use]
pub fn initialize_with_clock<C: Clock>(config: &Config, clock: C) -> TimezoneSelect<C> {
    let props = config.props();
    tracing::debug!(
        zone_count = props.timezones.len(),
        style = %props.policy.style,
        "initializing timezone select"
    );
    TimezoneSelect::with_clock(props, clock)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_map_is_lenient() {
        let mut map = BTreeMap::new();
        map.insert("max_abbr_length".to_string(), "many".to_string());
        map.insert("timezones".to_string(), "not json".to_string());
        map.insert("label_style".to_string(), "fancy".to_string());

        let config = Config::from_map(&map);
        assert_eq!(config.policy(), LabelPolicy::default());
        assert!(config.timezones.is_none());
        assert!(config.passthrough.is_empty());
    }

    #[test]
    fn from_toml_reads_every_section() {
        let config = Config::from_toml_str(
            r#"
            label_style = "altName"
            max_abbr_length = 3
            alt_name_filter = "reject_slash"
            value = "America/Lima"

            [timezones]
            "Europe/Berlin" = "Frankfurt"
            "America/Lima" = "Pittsburgh"

            [passthrough]
            placeholder = "Pick a zone"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.policy(),
            LabelPolicy {
                style: LabelStyle::AltName,
                max_abbr_length: 3,
                alt_name_filter: AltNameFilter::RejectSlash,
            }
        );
        let ids: Vec<_> = config.timezones.as_ref().unwrap().iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["Europe/Berlin", "America/Lima"]);
        assert_eq!(config.props().value, CurrentValue::Id("America/Lima".to_string()));
        assert_eq!(config.passthrough["placeholder"], "Pick a zone");
    }

    #[test]
    fn from_toml_rejects_wrong_types() {
        let err = Config::from_toml_str("max_abbr_length = \"four\"").unwrap_err();
        assert!(matches!(err, TzSelectError::Toml(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::from_file("/nonexistent/tzselect.toml").unwrap_err();
        assert!(matches!(err, TzSelectError::Io(_)));
    }
}
