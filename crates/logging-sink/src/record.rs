//! crates/logging-sink/src/record.rs
//! A single message on its way from the facade to the sinks.

use std::thread;

use time::OffsetDateTime;

use crate::level::Level;

/// One formatted log message together with the context every sink renders.
///
/// The text is final: template substitution has already happened by the time
/// a record is built. Records are cheap to clone so the router can hand the
/// same record to several sinks.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    level: Level,
    category: String,
    thread: String,
    timestamp: OffsetDateTime,
    text: String,
}

impl Record {
    /// Creates a record stamped with the current time and the calling thread.
    ///
    /// The local UTC offset is used when the platform can determine it
    /// safely; otherwise the timestamp is in UTC.
    pub fn new(level: Level, category: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level,
            category: category.into(),
            thread: current_thread_label(),
            timestamp: OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc()),
            text: text.into(),
        }
    }

    /// Replaces the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: OffsetDateTime) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Replaces the thread label.
    #[must_use]
    pub fn with_thread(mut self, thread: impl Into<String>) -> Self {
        self.thread = thread.into();
        self
    }

    /// Severity of the record.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Logical source of the record, usually a module or component name.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Name of the thread that produced the record.
    #[must_use]
    pub fn thread(&self) -> &str {
        &self.thread
    }

    /// Time the record was created.
    #[must_use]
    pub const fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    /// Final message text; may span several lines.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

fn current_thread_label() -> String {
    let current = thread::current();
    match current.name() {
        Some(name) => name.to_owned(),
        None => format!("{:?}", current.id()),
    }
}
