//! crates/logging-sink/src/sink/message_sink/mod.rs

use std::fmt;

use crate::line_mode::LineMode;

mod constructors;
mod writing;

/// Streaming sink that renders [`Record`](crate::Record) values as plain-text
/// lines into an [`std::io::Write`] target.
///
/// The sink owns the writer together with a reusable scratch buffer so each
/// record is rendered once and handed to the writer in a single
/// `write_all` call. Console and text-file sinks are both `MessageSink`s that
/// differ only in their writer.
///
/// # Examples
///
/// ```
/// use logging_sink::{Level, LineMode, MessageSink, Record};
///
/// let mut sink = MessageSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
/// sink.write(&Record::new(Level::Info, "app", "ready").with_thread("main"))?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert!(output.ends_with("INFO  [main] app - ready"));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct MessageSink<W> {
    writer: W,
    scratch: String,
    line_mode: LineMode,
}

impl<W> fmt::Debug for MessageSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSink")
            .field("writer", &self.writer)
            .field("line_mode", &self.line_mode)
            .finish()
    }
}
