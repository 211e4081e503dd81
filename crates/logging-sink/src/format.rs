//! crates/logging-sink/src/format.rs
//! Line layout shared by the console and text-file sinks.

use std::fmt::Write as _;

use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::macros::format_description;

use crate::record::Record;

/// Timestamp layout used in rendered lines, e.g. `2024/03/01 12:30:45`.
pub const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!(
    "[year]/[month padding:zero]/[day padding:zero] [hour padding:zero]:[minute padding:zero]:[second padding:zero]"
);

/// Renders `timestamp` with [`TIMESTAMP_FORMAT`].
///
/// Falls back to the Unix timestamp in seconds if formatting fails, which
/// only happens for dates outside the supported range.
#[must_use]
pub fn format_timestamp(timestamp: OffsetDateTime) -> String {
    timestamp
        .format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| timestamp.unix_timestamp().to_string())
}

/// Appends the plain-text layout of `record` to `out`, without a newline.
///
/// The layout is `<timestamp> <LEVEL> [<thread>] <category> - <text>` with the
/// level padded to five columns.
pub fn render_line(record: &Record, out: &mut String) {
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "{} {:<5} [{}] {} - {}",
        format_timestamp(record.timestamp()),
        record.level(),
        record.thread(),
        record.category(),
        record.text()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;
    use time::macros::datetime;

    fn fixed(level: Level, text: &str) -> Record {
        Record::new(level, "db", text)
            .with_timestamp(datetime!(2024-03-01 12:30:45 UTC))
            .with_thread("main")
    }

    #[test]
    fn renders_fixed_layout() {
        let mut out = String::new();
        render_line(&fixed(Level::Info, "open"), &mut out);
        assert_eq!(out, "2024/03/01 12:30:45 INFO  [main] db - open");
    }

    #[test]
    fn render_appends_to_existing_text() {
        let mut out = String::from(">");
        render_line(&fixed(Level::Error, "boom"), &mut out);
        assert!(out.starts_with(">2024/03/01"));
        assert!(out.ends_with("ERROR [main] db - boom"));
    }

    #[test]
    fn multi_line_text_is_kept() {
        let mut out = String::new();
        render_line(&fixed(Level::Debug, "a\nb"), &mut out);
        assert!(out.ends_with("db - a\nb"));
    }
}
