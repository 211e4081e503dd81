#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` holds the pieces of the logging facade that deal with a
//! single record after it has been formatted: the [`Level`] scale, the
//! [`Record`] itself, and the sinks that render records to the console, to a
//! plain-text file, or to an HTML file.
//!
//! # Design
//!
//! Every destination implements [`LogSink`]. Plain-text destinations are a
//! [`MessageSink`] wrapping an [`std::io::Write`] implementor together with a
//! reusable scratch buffer, so a record is rendered once and written with a
//! single `write_all`. [`HtmlSink`] produces a self-contained HTML document
//! with one table row per record. Callers control whether text lines end with
//! a newline by selecting a [`LineMode`].
//!
//! # Invariants
//!
//! - `Level` is totally ordered `All < Trace < ... < Fatal < Off`; the two
//!   sentinels are only meaningful as thresholds.
//! - A sink never filters. Threshold checks happen before a record reaches it.
//! - File-backed sinks flush after every record so each line is complete on
//!   disk before `emit` returns.
//!
//! # Errors
//!
//! Sink operations surface [`std::io::Error`] values from the underlying
//! writer unchanged. Swallowing them is the router's decision, not the sink's.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{Level, LogSink, MessageSink, Record};
//!
//! let mut sink = MessageSink::new(Vec::new());
//! sink.emit(&Record::new(Level::Warn, "cache", "evicting").with_thread("main"))?;
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert!(output.ends_with("WARN  [main] cache - evicting\n"));
//! # Ok::<(), std::io::Error>(())
//! ```

mod format;
mod level;
mod line_mode;
mod record;
mod sink;

pub use format::{TIMESTAMP_FORMAT, format_timestamp, render_line};
pub use level::{Level, ParseLevelError};
pub use line_mode::LineMode;
pub use record::Record;
pub use sink::{HtmlSink, LogSink, MessageSink};
