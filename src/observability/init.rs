//! Tracing initialization and subscriber setup.
//!
//! This module configures the `tracing-subscriber` pipeline that turns the
//! crate's `tracing` spans and events into formatted log lines.

use crate::Config;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LEVEL: &str = "info";

/// Initializes the tracing subscriber.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters spans and events by the configured trace level
/// 2. Formats them as plain text lines
/// 3. Appends them to `trace_file`, or writes to stderr when none is set
///
/// # Parameters
///
/// * `config` - Configuration carrying `trace_level` and `trace_file`
///
/// # Trace Level Resolution
///
/// Level is determined by:
/// 1. `config.trace_level` if set (any `EnvFilter` directive, e.g. `tzselect=debug`)
/// 2. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates `trace_file` if it doesn't exist
/// - Falls back to stderr if the file can't be opened
/// - Idempotent: Safe to call multiple times (only first call takes effect)
///
/// # Example
///
/// ```rust
/// use tzselect::observability::init_tracing;
/// use tzselect::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let file = config.trace_file.as_ref().and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
    });

    let (file_layer, stderr_layer) = match file {
        Some(file) => (
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(Mutex::new(file)),
            ),
            None,
        ),
        None => (
            None,
            Some(fmt::layer().with_target(true).with_writer(std::io::stderr)),
        ),
    };

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(file_layer)
        .with(stderr_layer);

    let _ = subscriber.try_init();
}
