use std::fs::{self, File};
use std::io::{self, BufWriter, Stdout};
use std::path::Path;

use super::MessageSink;
use crate::line_mode::LineMode;

impl<W> MessageSink<W> {
    /// Creates a new sink that appends a newline after each rendered record.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self::with_parts(writer, String::new(), line_mode)
    }

    /// Creates a sink from an explicit scratch buffer and [`LineMode`].
    ///
    /// The scratch buffer is cleared before every use, so only its capacity
    /// carries over.
    #[must_use]
    pub const fn with_parts(writer: W, scratch: String, line_mode: LineMode) -> Self {
        Self {
            writer,
            scratch,
            line_mode,
        }
    }

    /// Returns the configured [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Changes the [`LineMode`] used for subsequent writes.
    pub const fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Borrows the wrapped writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the wrapped writer.
    #[must_use]
    pub const fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Consumes the sink and returns the writer, scratch buffer, and line mode.
    #[must_use]
    pub fn into_parts(self) -> (W, String, LineMode) {
        (self.writer, self.scratch, self.line_mode)
    }
}

impl MessageSink<Stdout> {
    /// Creates the console sink writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl MessageSink<BufWriter<File>> {
    /// Creates a text-file sink at `path`, truncating any existing file.
    ///
    /// Missing parent directories are created first.
    pub fn create_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W> Default for MessageSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}
