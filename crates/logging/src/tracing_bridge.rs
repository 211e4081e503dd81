//! crates/logging/src/tracing_bridge.rs
//! Bridge that forwards `tracing` events into a [`Logger`].
//!
//! [`FacadeLayer`] is a `tracing-subscriber` layer. Each event becomes one
//! literal record: the event target is the category, the `message` field
//! plus any other fields (as `name=value`) is the text, and the tracing
//! level maps onto [`Level`]. Events raised while the layer is already
//! forwarding on the same thread are dropped, so the logger's own
//! diagnostics never loop back into it.
//!
//! ```rust,ignore
//! use logging::tracing_bridge::init_tracing;
//!
//! logging::configure(logging::LoggerConfig::default().with_console(logging_sink::Level::Info))?;
//! init_tracing()?;
//!
//! tracing::info!(target: "app::db", table = "users", "created table");
//! ```

use std::borrow::Borrow;
use std::cell::Cell;
use std::fmt::{self, Write as _};

use logging_sink::Level;
use tracing::Subscriber;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::facade::Logger;

thread_local! {
    static FORWARDING: Cell<bool> = const { Cell::new(false) };
}

/// A tracing layer that logs every event through a [`Logger`].
///
/// `L` is anything that borrows a logger: `&'static Logger` for the global
/// instance, or `Arc<Logger>` for an injected one.
#[derive(Clone, Debug)]
pub struct FacadeLayer<L> {
    logger: L,
}

impl<L> FacadeLayer<L>
where
    L: Borrow<Logger>,
{
    /// Creates a layer that forwards into `logger`.
    #[must_use]
    pub const fn new(logger: L) -> Self {
        Self { logger }
    }

    /// Map a tracing level to a record severity.
    #[must_use]
    pub fn map_level(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::TRACE => Level::Trace,
            tracing::Level::DEBUG => Level::Debug,
            tracing::Level::INFO => Level::Info,
            tracing::Level::WARN => Level::Warn,
            _ => Level::Error,
        }
    }
}

impl FacadeLayer<&'static Logger> {
    /// A layer forwarding into the process-wide logger.
    #[must_use]
    pub fn global() -> Self {
        Self::new(crate::global())
    }
}

impl<S, L> Layer<S> for FacadeLayer<L>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    L: Borrow<Logger> + 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let logger = self.logger.borrow();
        let metadata = event.metadata();
        let level = Self::map_level(metadata.level());
        if !logger.enabled(level) {
            return;
        }
        if FORWARDING.with(|flag| flag.replace(true)) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        logger.log(level, metadata.target(), &visitor.finish());

        FORWARDING.with(|flag| flag.set(false));
    }
}

/// Visitor to extract the message and remaining fields from an event.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn field(&mut self, field: &Field) -> &mut String {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        self.fields.push_str(field.name());
        self.fields.push('=');
        &mut self.fields
    }

    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.field(field), "{value:?}");
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.field(field).push_str(value);
        }
    }
}

/// Installs a global subscriber whose only layer forwards into [`crate::global`].
///
/// # Errors
///
/// Fails if a global default subscriber is already set.
pub fn init_tracing() -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(FacadeLayer::global())
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LoggerConfig;
    use std::sync::Arc;
    use test_support::{CaptureSink, FailingSink};
    use tracing_subscriber::layer::SubscriberExt;

    fn logger(capture: &CaptureSink, threshold: Level) -> Arc<Logger> {
        Arc::new(
            Logger::builder(LoggerConfig::default().with_build_info("/nonexistent"))
                .with_sink("capture", threshold, capture.clone())
                .build(),
        )
    }

    #[test]
    fn levels_map_one_to_one() {
        type Bridge = FacadeLayer<Arc<Logger>>;
        assert_eq!(Bridge::map_level(&tracing::Level::TRACE), Level::Trace);
        assert_eq!(Bridge::map_level(&tracing::Level::DEBUG), Level::Debug);
        assert_eq!(Bridge::map_level(&tracing::Level::INFO), Level::Info);
        assert_eq!(Bridge::map_level(&tracing::Level::WARN), Level::Warn);
        assert_eq!(Bridge::map_level(&tracing::Level::ERROR), Level::Error);
    }

    #[test]
    fn events_become_records() {
        let capture = CaptureSink::new();
        let subscriber = tracing_subscriber::registry()
            .with(FacadeLayer::new(logger(&capture, Level::All)));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "app::db", table = "users", rows = 3, "created table");
        });
        let last = capture.records().pop().expect("record");
        assert_eq!(last.category(), "app::db");
        assert_eq!(last.level(), Level::Info);
        assert_eq!(last.text(), "created table table=users rows=3");
    }

    #[test]
    fn events_below_threshold_are_skipped() {
        let capture = CaptureSink::new();
        let subscriber = tracing_subscriber::registry()
            .with(FacadeLayer::new(logger(&capture, Level::Warn)));
        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!(target: "app", "noise");
            tracing::error!(target: "app", "signal");
        });
        assert_eq!(capture.texts(), ["signal"]);
    }

    #[test]
    fn sink_failure_diagnostics_do_not_loop_back() {
        let capture = CaptureSink::new();
        let logger = Arc::new(
            Logger::builder(LoggerConfig::default().with_build_info("/nonexistent"))
                .with_sink("failing", Level::All, FailingSink)
                .with_sink("capture", Level::All, capture.clone())
                .build(),
        );
        let before = capture.len();
        let subscriber =
            tracing_subscriber::registry().with(FacadeLayer::new(Arc::clone(&logger)));
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(target: "app", "once");
        });
        assert_eq!(capture.len(), before + 1);
        assert_eq!(capture.texts().last().map(String::as_str), Some("once"));
    }
}
