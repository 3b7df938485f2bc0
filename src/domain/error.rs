//! Error types for the timezone select control.
//!
//! This module defines the centralized error type [`TzSelectError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Option building and value resolution never surface these errors to the caller:
//! an unknown zone is turned into a skipped entry or a `None` match at the call site.
//! Configuration loading is the only public path that returns them.

use thiserror::Error;

/// The main error type for timezone select operations.
///
/// # Examples
///
/// ```
/// use tzselect::TzSelectError;
///
/// fn validate_style(style: &str) -> Result<(), TzSelectError> {
///     Err(TzSelectError::Config(format!("unsupported style: {style}")))
/// }
///
/// assert!(validate_style("fancy").is_err());
/// ```
#[derive(Debug, Error)]
pub enum TzSelectError {
    /// The time library does not know the zone id.
    ///
    /// Raised by [`crate::tz::lookup`]. Callers in the option builder and the
    /// fuzzy matcher treat it as "skip this entry" / "no match".
    #[error("Unknown timezone: {0}")]
    UnknownZone(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when configuration values are malformed beyond what the lenient
    /// parsers can default.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from reading configuration files or opening the trace file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML configuration could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON value could not be parsed or converted.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for timezone select operations.
///
/// This is a type alias for `std::result::Result<T, TzSelectError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, TzSelectError>;
