//! crates/catalog/src/ids/mod.rs
//! Stable message identifiers.
//!
//! Identifiers follow `<Category><Number>`. Each constant names an entry of the
//! bundled default catalog; the doc comment lists the positional arguments
//! the template expects.

pub mod debug;
pub mod error;
pub mod info;
pub mod warn;

/// Every identifier shipped with the bundled default catalog.
pub const ALL: &[&str] = &[
    debug::DEBUG_OUT,
    debug::DEBUG_RUN_METHOD,
    debug::DEBUG_CLICK,
    debug::DEBUG_PATH_CREATE,
    debug::DEBUG_PATH_NOT_CREATE,
    debug::DEBUG_SQL_EXEC,
    debug::DEBUG_SQL_CREATE_TABLE,
    debug::DEBUG_SQL_WRITE_RECORDS,
    debug::DEBUG_SQL_DROP_TABLE,
    debug::DEBUG_SQL_SELECT_TABLE,
    info::INFO_START_LOGGER,
    info::LOGGER_INFO_VERSION,
    info::LOGGER_INFO_BRANCH,
    info::LOGGER_INFO_COMMIT,
    info::LOGGER_INFO_TIMESTAMP,
    info::APP_INFO_VERSION,
    info::APP_INFO_BRANCH,
    info::APP_INFO_COMMIT,
    info::APP_INFO_TIMESTAMP,
    info::INFO_SQL_DB_OPEN_CON,
    info::INFO_SQL_DB_NOT_OPENED_CON,
    info::INFO_SQL_DB_END_CON,
    warn::CATALOG_NOT_LOADED,
    warn::TEMPLATE_NOT_FOUND,
    error::ERROR,
];
