#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is a process-wide logging facade. Callers log literal text,
//! catalog templates addressed by stable identifiers (`D001`, `I200`, ...)
//! with positional arguments, or captured errors. Each record is routed to
//! the console, a plain-text file and an HTML report according to per-sink
//! thresholds.
//!
//! # Design
//!
//! - [`LoggerConfig`] describes sinks, environment and catalogs.
//! - [`Logger`] owns the merged [`catalog::CombinedCatalog`] and the sinks.
//!   It is built once by [`Logger::build`] or [`LoggerBuilder`] and then only
//!   read.
//! - [`LoggerCell`] guards lazy construction so that exactly one logger is
//!   built however many threads race for it; [`global`], [`configure`] and
//!   [`shutdown`] wrap a process-wide cell.
//! - [`Channel`] binds a logger to a category.
//! - [`ErrorReport`] turns an error into a message plus frames for the `E001`
//!   template.
//! - With the `tracing-bridge` feature, [`tracing_bridge::FacadeLayer`]
//!   forwards `tracing` events into a logger.
//!
//! # Invariants
//!
//! - A record reaches a sink iff the root threshold and the sink threshold
//!   accept its severity; the HTML sink additionally requires `WARN` or above
//!   outside the `development` environment.
//! - Each sink sits behind its own lock, so a record is written to a sink as
//!   one unit and a failing sink never blocks the others.
//! - Logging calls never return errors and never panic on sink failure.
//! - Configuration is read once. After the logger exists, [`configure`]
//!   returns [`ConfigError::AlreadyInitialized`].
//!
//! # Examples
//!
//! ```
//! use logging::{ErrorReport, Logger, LoggerConfig, NO_ARGS};
//! use logging_sink::Level;
//! use test_support::CaptureSink;
//!
//! let capture = CaptureSink::new();
//! let logger = Logger::builder(LoggerConfig::default().with_build_info("missing.properties"))
//!     .with_sink("capture", Level::Debug, capture.clone())
//!     .build();
//!
//! logger.info_template("db", "I200", NO_ARGS);
//! logger.error_report("db", &ErrorReport::new("boom", ["frameA", "frameB"]));
//!
//! let texts = capture.texts();
//! assert_eq!(texts[1], "Connection to the database was established.");
//! assert_eq!(texts[2], "The following error occurred: boom\nframeA\nframeB");
//! ```
//!
//! # See also
//!
//! - `catalog` for catalog sources and template formatting.
//! - `logging-sink` for levels, records and sink implementations.

mod build_info;
mod cell;
mod channel;
mod config;
mod facade;
mod report;
mod routing;
#[cfg(feature = "tracing-bridge")]
pub mod tracing_bridge;

pub use build_info::{
    BRANCH_KEY, BuildInfo, BuildInfoError, DEFAULT_BUILD_INFO_PATH, NUMBER_KEY, TIME_KEY,
    VERSION_KEY,
};
pub use cell::{LoggerCell, configure, global, is_initialized, shutdown};
pub use channel::Channel;
pub use config::{
    ConfigError, DEFAULT_ENVIRONMENT, DEFAULT_LOG_DIR, DEVELOPMENT_ENVIRONMENT, LoggerConfig,
    SinkSettings,
};
pub use facade::{LOGGER_CATEGORY, Logger, LoggerBuilder, NO_ARGS};
pub use logging_sink::Level;
pub use report::{ErrorReport, format_frames};
pub use routing::{EnvironmentFilter, SinkKind};
