//! crates/logging/src/cell.rs
//! Once-only construction of a shared logger.

use std::mem;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};

use crate::config::{ConfigError, LoggerConfig};
use crate::facade::Logger;

enum Pending {
    Open(Option<LoggerConfig>),
    Sealed,
}

/// Lazily built logger with a single-construction guarantee.
///
/// The cell starts Uninitialized. [`configure`](Self::configure) may be called
/// any number of times while it is; the last configuration wins. The first
/// call to [`get`](Self::get) seals the configuration and builds the logger;
/// racing callers block until that build finishes and all observe the same
/// instance. Once Ready the cell never goes back, and further `configure`
/// calls return [`ConfigError::AlreadyInitialized`].
pub struct LoggerCell {
    instance: OnceLock<Logger>,
    pending: Mutex<Pending>,
    constructions: AtomicUsize,
}

impl LoggerCell {
    /// Creates an Uninitialized cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            instance: OnceLock::new(),
            pending: Mutex::new(Pending::Open(None)),
            constructions: AtomicUsize::new(0),
        }
    }

    /// Stores the configuration used by the first [`get`](Self::get).
    pub fn configure(&self, config: LoggerConfig) -> Result<(), ConfigError> {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        match &mut *pending {
            Pending::Open(slot) => {
                *slot = Some(config);
                Ok(())
            }
            Pending::Sealed => Err(ConfigError::AlreadyInitialized),
        }
    }

    /// Returns the logger, building it on first use.
    ///
    /// Without a prior [`configure`](Self::configure) the default
    /// [`LoggerConfig`] is used.
    pub fn get(&self) -> &Logger {
        self.instance.get_or_init(|| {
            let config = {
                let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
                match mem::replace(&mut *pending, Pending::Sealed) {
                    Pending::Open(config) => config.unwrap_or_default(),
                    Pending::Sealed => LoggerConfig::default(),
                }
            };
            self.constructions.fetch_add(1, Ordering::SeqCst);
            Logger::build(config)
        })
    }

    /// The logger if it was already built.
    #[must_use]
    pub fn get_if_ready(&self) -> Option<&Logger> {
        self.instance.get()
    }

    /// Reports whether the cell is Ready.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.instance.get().is_some()
    }

    /// How many loggers this cell has built; at most one.
    #[must_use]
    pub fn constructions(&self) -> usize {
        self.constructions.load(Ordering::SeqCst)
    }
}

impl Default for LoggerCell {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: LoggerCell = LoggerCell::new();

/// The process-wide logger, built on first call.
///
/// Call [`configure`] beforehand to choose sinks and catalogs. The logger lives
/// in a `static` and is never dropped, so call [`shutdown`] before the process
/// exits to close the HTML report.
pub fn global() -> &'static Logger {
    GLOBAL.get()
}

/// Finishes the process-wide logger's sinks if it was built.
///
/// Writes the HTML report footer and flushes everything. Does nothing when
/// [`global`] was never called.
pub fn shutdown() {
    if let Some(logger) = GLOBAL.get_if_ready() {
        logger.finish();
    }
}

/// Configures the process-wide logger before its first use.
///
/// # Errors
///
/// Returns [`ConfigError::AlreadyInitialized`] once [`global`] has built the
/// logger; the running logger is left untouched.
pub fn configure(config: LoggerConfig) -> Result<(), ConfigError> {
    GLOBAL.configure(config)
}

/// Reports whether the process-wide logger was built.
#[must_use]
pub fn is_initialized() -> bool {
    GLOBAL.is_ready()
}
