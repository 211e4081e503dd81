//! crates/logging/src/channel.rs
//! A logger bound to one category.

use logging_sink::Level;

use crate::facade::Logger;
use crate::report::ErrorReport;

/// Borrowed `(logger, category)` pair.
///
/// Components hold a `Channel` instead of repeating their category on every
/// call. The category only labels output; it never affects routing.
///
/// # Examples
///
/// ```
/// use logging::{Logger, LoggerConfig};
/// use logging_sink::Level;
/// use test_support::CaptureSink;
///
/// let capture = CaptureSink::new();
/// let logger = Logger::builder(LoggerConfig::default().with_build_info("missing.properties"))
///     .with_sink("capture", Level::All, capture.clone())
///     .build();
///
/// let db = logger.channel("db");
/// db.info_template("I200", logging::NO_ARGS);
///
/// let last = capture.records().pop().unwrap();
/// assert_eq!(last.category(), "db");
/// assert_eq!(last.text(), "Connection to the database was established.");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Channel<'a> {
    logger: &'a Logger,
    category: &'a str,
}

impl<'a> Channel<'a> {
    pub(crate) const fn new(logger: &'a Logger, category: &'a str) -> Self {
        Self { logger, category }
    }

    /// The category records are tagged with.
    #[must_use]
    pub const fn category(&self) -> &'a str {
        self.category
    }

    /// The underlying logger.
    #[must_use]
    pub const fn logger(&self) -> &'a Logger {
        self.logger
    }

    /// Logs literal text at `level`.
    pub fn log(&self, level: Level, text: &str) {
        self.logger.log(level, self.category, text);
    }

    /// Logs template `id` at `level`.
    pub fn log_template<S: AsRef<str>>(&self, level: Level, id: &str, args: &[S]) {
        self.logger.log_template(level, self.category, id, args);
    }

    /// Logs text at `TRACE`.
    pub fn trace(&self, text: &str) {
        self.log(Level::Trace, text);
    }

    /// Logs text at `DEBUG`.
    pub fn debug(&self, text: &str) {
        self.log(Level::Debug, text);
    }

    /// Logs text at `INFO`.
    pub fn info(&self, text: &str) {
        self.log(Level::Info, text);
    }

    /// Logs text at `WARN`.
    pub fn warn(&self, text: &str) {
        self.log(Level::Warn, text);
    }

    /// Logs text at `ERROR`.
    pub fn error(&self, text: &str) {
        self.log(Level::Error, text);
    }

    /// Logs text at `FATAL`.
    pub fn fatal(&self, text: &str) {
        self.log(Level::Fatal, text);
    }

    /// Logs template `id` at `TRACE`.
    pub fn trace_template<S: AsRef<str>>(&self, id: &str, args: &[S]) {
        self.log_template(Level::Trace, id, args);
    }

    /// Logs template `id` at `DEBUG`.
    pub fn debug_template<S: AsRef<str>>(&self, id: &str, args: &[S]) {
        self.log_template(Level::Debug, id, args);
    }

    /// Logs template `id` at `INFO`.
    pub fn info_template<S: AsRef<str>>(&self, id: &str, args: &[S]) {
        self.log_template(Level::Info, id, args);
    }

    /// Logs template `id` at `WARN`.
    pub fn warn_template<S: AsRef<str>>(&self, id: &str, args: &[S]) {
        self.log_template(Level::Warn, id, args);
    }

    /// Logs template `id` at `ERROR`.
    pub fn error_template<S: AsRef<str>>(&self, id: &str, args: &[S]) {
        self.log_template(Level::Error, id, args);
    }

    /// Logs template `id` at `FATAL`.
    pub fn fatal_template<S: AsRef<str>>(&self, id: &str, args: &[S]) {
        self.log_template(Level::Fatal, id, args);
    }

    /// Logs a captured error at `ERROR`.
    pub fn error_report(&self, report: &ErrorReport) {
        self.logger.error_report(self.category, report);
    }

    /// Logs a captured error at `FATAL`.
    pub fn fatal_report(&self, report: &ErrorReport) {
        self.logger.fatal_report(self.category, report);
    }
}
