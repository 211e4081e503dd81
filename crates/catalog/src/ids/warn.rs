//! crates/catalog/src/ids/warn.rs
//! Warning identifiers (`W...`) emitted by the logger itself.

/// A catalog source could not be loaded. Arguments: catalog name, reason.
pub const CATALOG_NOT_LOADED: &str = "W001";

/// A message identifier has no template. Arguments: identifier.
pub const TEMPLATE_NOT_FOUND: &str = "W002";
