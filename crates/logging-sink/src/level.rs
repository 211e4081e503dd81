//! crates/logging-sink/src/level.rs
//! Totally ordered severity levels shared by records and sink thresholds.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a record, or the minimum severity a sink accepts.
///
/// Ordering is `All < Trace < Debug < Info < Warn < Error < Fatal < Off`.
/// `All` and `Off` are threshold sentinels: as a threshold `All` accepts every
/// record and `Off` accepts none. They are never valid record severities.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Level {
    /// Threshold sentinel accepting every record.
    All,
    /// Very fine-grained tracing.
    Trace,
    /// Diagnostic detail for developers.
    Debug,
    /// Normal progress messages.
    Info,
    /// Something unexpected that the program recovered from.
    Warn,
    /// An operation failed.
    Error,
    /// The program cannot continue.
    Fatal,
    /// Threshold sentinel accepting nothing.
    Off,
}

impl Level {
    /// Record severities in ascending order.
    pub const SEVERITIES: [Self; 6] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
    ];

    /// Returns the uppercase label used in rendered output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Off => "OFF",
        }
    }

    /// Reports whether the level is one of the `All`/`Off` sentinels.
    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        matches!(self, Self::All | Self::Off)
    }

    /// Reports whether a threshold of `self` lets a record of `severity` through.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::Level;
    ///
    /// assert!(Level::Warn.accepts(Level::Error));
    /// assert!(!Level::Warn.accepts(Level::Info));
    /// assert!(Level::All.accepts(Level::Trace));
    /// assert!(!Level::Off.accepts(Level::Fatal));
    /// ```
    #[must_use]
    pub fn accepts(self, severity: Self) -> bool {
        !severity.is_sentinel() && severity >= self
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when parsing a [`Level`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognised severity level '{input}'")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    /// The text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_uppercase().as_str() {
            "ALL" => Ok(Self::All),
            "TRACE" => Ok(Self::Trace),
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARN" | "WARNING" => Ok(Self::Warn),
            "ERROR" => Ok(Self::Error),
            "FATAL" => Ok(Self::Fatal),
            "OFF" => Ok(Self::Off),
            _ => Err(ParseLevelError {
                input: input.to_owned(),
            }),
        }
    }
}
