//! crates/catalog/src/ids/debug.rs
//! Debug message identifiers (`D...`).

/// A variable and its content. Arguments: name, content.
///
/// Example output: `test: This is a test`.
pub const DEBUG_OUT: &str = "D001";

/// A method was entered. Arguments: method name.
pub const DEBUG_RUN_METHOD: &str = "D002";

/// An item was clicked. Arguments: item name.
pub const DEBUG_CLICK: &str = "D010";

/// A directory was created. Arguments: directory path.
pub const DEBUG_PATH_CREATE: &str = "D020";

/// A directory could not be created. Arguments: directory path.
pub const DEBUG_PATH_NOT_CREATE: &str = "D021";

/// An SQL statement was executed. Arguments: statement.
pub const DEBUG_SQL_EXEC: &str = "D200";

/// A table was created. Arguments: table name, statement.
pub const DEBUG_SQL_CREATE_TABLE: &str = "D201";

/// Records were inserted. Arguments: table name, statement.
pub const DEBUG_SQL_WRITE_RECORDS: &str = "D202";

/// A table was dropped. Arguments: table name, statement.
pub const DEBUG_SQL_DROP_TABLE: &str = "D203";

/// Records were selected. Arguments: table name, statement.
pub const DEBUG_SQL_SELECT_TABLE: &str = "D204";
