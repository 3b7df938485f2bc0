//! Structured logging built on `tracing`.
//!
//! The option builder, value resolver, fuzzy matcher, list filtering and event
//! handler all emit `tracing` spans and debug events. Nothing is recorded until
//! the host installs a subscriber, either its own or the one set up here.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → trace file (append) | stderr
//! ```
//!
//! # Configuration
//!
//! Trace output is controlled via:
//! 1. `trace_level` config option (default `"info"`)
//! 2. `trace_file` config option (default: stderr)
//!
//! # Usage
//!
//! Initialize tracing before creating the control:
//!
//! ```rust
//! use tzselect::observability::init_tracing;
//! use tzselect::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("control initialized");
//! ```
//!
//! # Modules
//!
//! - `init`: Subscriber setup

mod init;

pub use init::init_tracing;
