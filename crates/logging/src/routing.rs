//! crates/logging/src/routing.rs
//! Threshold routing of records to independently locked sinks.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use logging_sink::{Level, LogSink, Record};

use crate::config::LoggerConfig;

/// Which destination a route feeds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SinkKind {
    /// Standard output.
    Console,
    /// Plain-text file.
    TextFile,
    /// HTML report.
    HtmlFile,
    /// A sink supplied through [`LoggerBuilder::with_sink`](crate::LoggerBuilder::with_sink).
    Custom(String),
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Console => f.write_str("console"),
            Self::TextFile => f.write_str("text-file"),
            Self::HtmlFile => f.write_str("html-file"),
            Self::Custom(name) => f.write_str(name),
        }
    }
}

/// Environment-dependent acceptance rule layered on top of a sink threshold.
///
/// In `development` every record passes; in any other environment only
/// `WARN` and above pass.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EnvironmentFilter {
    floor: Level,
}

impl EnvironmentFilter {
    /// Filter for the environment named in `config`.
    #[must_use]
    pub fn for_config(config: &LoggerConfig) -> Self {
        let floor = if config.is_development() {
            Level::All
        } else {
            Level::Warn
        };
        Self { floor }
    }

    /// Lowest severity the filter lets through.
    #[must_use]
    pub const fn floor(self) -> Level {
        self.floor
    }

    /// Reports whether a record of `severity` passes.
    #[must_use]
    pub fn accepts(self, severity: Level) -> bool {
        self.floor.accepts(severity)
    }
}

pub(crate) struct Route {
    kind: SinkKind,
    threshold: Level,
    filter: Option<EnvironmentFilter>,
    sink: Mutex<Box<dyn LogSink>>,
}

impl Route {
    pub(crate) fn new(kind: SinkKind, threshold: Level, sink: Box<dyn LogSink>) -> Self {
        Self {
            kind,
            threshold,
            filter: None,
            sink: Mutex::new(sink),
        }
    }

    pub(crate) fn with_filter(mut self, filter: EnvironmentFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    fn accepts(&self, severity: Level) -> bool {
        self.threshold.accepts(severity)
            && self.filter.is_none_or(|filter| filter.accepts(severity))
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("kind", &self.kind)
            .field("threshold", &self.threshold)
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

/// Delivers each record to every route whose threshold and filter accept it.
///
/// Routes are isolated. When a sink returns an error, panics, or sits behind
/// a poisoned lock, that route drops the record and the failure is counted.
/// The remaining routes still receive it and the caller never sees the
/// failure.
#[derive(Debug)]
pub(crate) struct Router {
    root: Level,
    routes: Vec<Route>,
    failures: AtomicU64,
}

impl Router {
    pub(crate) const fn new(root: Level, routes: Vec<Route>) -> Self {
        Self {
            root,
            routes,
            failures: AtomicU64::new(0),
        }
    }

    /// Reports whether at least one route would take a record of `severity`.
    pub(crate) fn enabled(&self, severity: Level) -> bool {
        self.root.accepts(severity) && self.routes.iter().any(|route| route.accepts(severity))
    }

    pub(crate) fn dispatch(&self, record: &Record) {
        if !self.root.accepts(record.level()) {
            return;
        }
        for route in &self.routes {
            if route.accepts(record.level()) {
                self.deliver(route, |sink| sink.emit(record));
            }
        }
    }

    pub(crate) fn flush(&self) {
        for route in &self.routes {
            self.deliver(route, |sink| sink.flush());
        }
    }

    pub(crate) fn finish(&self) {
        for route in &self.routes {
            self.deliver(route, |sink| sink.finish());
        }
    }

    pub(crate) fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    pub(crate) fn kinds(&self) -> impl Iterator<Item = &SinkKind> {
        self.routes.iter().map(|route| &route.kind)
    }

    fn deliver<F>(&self, route: &Route, op: F)
    where
        F: FnOnce(&mut dyn LogSink) -> std::io::Result<()>,
    {
        let outcome = match route.sink.lock() {
            Ok(mut sink) => match panic::catch_unwind(AssertUnwindSafe(|| op(&mut **sink))) {
                Ok(result) => result.map_err(|error| error.to_string()),
                Err(_) => Err("sink panicked".to_owned()),
            },
            Err(_) => Err("sink lock poisoned".to_owned()),
        };
        if let Err(error) = outcome {
            self.failures.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(sink = %route.kind, %error, "log sink dropped a record");
        }
    }
}
