//! crates/catalog/src/ids/error.rs
//! Error identifiers (`E...`).

/// A captured error. Arguments: error message, serialized frames.
///
/// Example output:
///
/// ```text
/// The following error occurred: A test error was generated.
/// caused by: connection reset
/// ```
pub const ERROR: &str = "E001";
