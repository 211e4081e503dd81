use std::io::{self, Write};

use super::MessageSink;
use crate::format::render_line;
use crate::line_mode::LineMode;
use crate::record::Record;
use crate::sink::LogSink;

impl<W> MessageSink<W>
where
    W: Write,
{
    /// Writes a single record using the sink's current [`LineMode`].
    pub fn write(&mut self, record: &Record) -> io::Result<()> {
        self.write_with_mode(record, self.line_mode)
    }

    /// Writes `record` using an explicit [`LineMode`] without mutating the sink.
    pub fn write_with_mode(&mut self, record: &Record, line_mode: LineMode) -> io::Result<()> {
        self.scratch.clear();
        render_line(record, &mut self.scratch);
        if line_mode.append_newline() {
            self.scratch.push('\n');
        }
        self.writer.write_all(self.scratch.as_bytes())
    }

    /// Writes each record from the iterator.
    pub fn write_all<'a, I>(&mut self, records: I) -> io::Result<()>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        for record in records {
            self.write(record)?;
        }
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W> LogSink for MessageSink<W>
where
    W: Write + Send,
{
    fn emit(&mut self, record: &Record) -> io::Result<()> {
        self.write(record)?;
        self.writer.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
