//! crates/catalog/src/ids/info.rs
//! Information message identifiers (`I...`).

/// The logger finished starting. No arguments.
pub const INFO_START_LOGGER: &str = "I001";

/// Logger version. Arguments: version text.
pub const LOGGER_INFO_VERSION: &str = "I002";
/// Branch the logger was built from. Arguments: branch.
pub const LOGGER_INFO_BRANCH: &str = "I003";
/// Commit the logger was built from. Arguments: build number or commit.
pub const LOGGER_INFO_COMMIT: &str = "I004";
/// Build time of the logger. Arguments: timestamp.
pub const LOGGER_INFO_TIMESTAMP: &str = "I005";

/// Application version. Arguments: version text.
pub const APP_INFO_VERSION: &str = "I006";
/// Branch the application was built from. Arguments: branch.
pub const APP_INFO_BRANCH: &str = "I007";
/// Commit the application was built from. Arguments: build number or commit.
pub const APP_INFO_COMMIT: &str = "I008";
/// Build time of the application. Arguments: timestamp.
pub const APP_INFO_TIMESTAMP: &str = "I009";

/// A database connection was opened. No arguments.
pub const INFO_SQL_DB_OPEN_CON: &str = "I200";
/// A database connection could not be opened. No arguments.
pub const INFO_SQL_DB_NOT_OPENED_CON: &str = "I201";
/// A database connection was closed. No arguments.
pub const INFO_SQL_DB_END_CON: &str = "I202";
