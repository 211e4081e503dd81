//! crates/catalog/src/error.rs
//! Errors raised while locating and parsing message catalogs.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error produced by [`properties::parse`](crate::properties::parse).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    /// A `\u` escape was not followed by four hexadecimal digits.
    #[error("line {line}: malformed \\uXXXX escape")]
    MalformedUnicodeEscape {
        /// One-based physical line number where the logical line starts.
        line: usize,
    },
    /// A `\uXXXX` escape named a surrogate or otherwise invalid scalar value.
    #[error("line {line}: \\u{code:04X} is not a valid character")]
    InvalidCharacter {
        /// One-based physical line number where the logical line starts.
        line: usize,
        /// The offending code unit.
        code: u32,
    },
}

impl ParseError {
    /// Returns the line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::MalformedUnicodeEscape { line } | Self::InvalidCharacter { line, .. } => *line,
        }
    }
}

/// Failure to load a single catalog source.
///
/// A failed source never aborts a [`CombinedCatalog`](crate::CombinedCatalog)
/// build; the error is handed back to the caller, which decides whether the
/// source was mandatory.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No bundled resource, search root or file matched the name.
    #[error("message catalog '{name}' was not found")]
    NotFound {
        /// Catalog name as requested.
        name: String,
    },
    /// The catalog file exists but could not be read.
    #[error("failed to read message catalog '{}': {source}", path.display())]
    Io {
        /// Resolved location of the catalog.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The catalog was read but its contents are malformed.
    #[error("failed to parse message catalog '{name}': {source}")]
    Parse {
        /// Catalog name as requested.
        name: String,
        /// Parser diagnostic.
        #[source]
        source: ParseError,
    },
}

impl CatalogError {
    /// Returns `true` when the catalog simply does not exist.
    ///
    /// Callers treating a source as optional can ignore this variant while
    /// still surfacing read and parse failures.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
