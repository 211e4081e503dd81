//! crates/logging-sink/src/sink/mod.rs

use std::io;

use crate::record::Record;

mod html;
mod message_sink;

pub use html::HtmlSink;
pub use message_sink::MessageSink;

/// Destination that renders and stores [`Record`]s.
///
/// A sink only writes; deciding whether a record reaches it is the router's
/// job. Implementations must write each record as a unit so concurrent
/// callers never see interleaved fragments, which the router guarantees by
/// holding a per-sink lock around [`emit`](Self::emit).
pub trait LogSink: Send {
    /// Renders and writes one record.
    fn emit(&mut self, record: &Record) -> io::Result<()>;

    /// Pushes buffered output to the underlying destination.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Writes any closing output and flushes.
    ///
    /// Called once when the owner shuts down. Sinks without a trailer just
    /// flush.
    fn finish(&mut self) -> io::Result<()> {
        self.flush()
    }
}

impl<S> LogSink for Box<S>
where
    S: LogSink + ?Sized,
{
    fn emit(&mut self, record: &Record) -> io::Result<()> {
        (**self).emit(record)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        (**self).finish()
    }
}
