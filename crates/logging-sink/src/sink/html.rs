//! crates/logging-sink/src/sink/html.rs
//! Sink that renders records as rows of an HTML table.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::format::format_timestamp;
use crate::level::Level;
use crate::record::Record;
use crate::sink::LogSink;

/// Writes records as an HTML document with one table row per record.
///
/// The document header is written on construction. The footer is written by
/// [`finish`](Self::finish), or on drop if `finish` was never called, so a
/// file left behind by a crashed process is still readable in a browser up to
/// the last complete row.
pub struct HtmlSink<W>
where
    W: Write,
{
    writer: W,
    finished: bool,
}

impl<W> HtmlSink<W>
where
    W: Write,
{
    /// Wraps `writer` and writes the document header with the given title.
    pub fn new(mut writer: W, title: &str) -> io::Result<Self> {
        let title = escape(title);
        write!(
            writer,
            concat!(
                "<!DOCTYPE html>\n",
                "<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n",
                "<style>\n",
                "body, table {{ font-family: monospace; font-size: small; }}\n",
                "th {{ background: #336699; color: #ffffff; text-align: left; }}\n",
                "td {{ vertical-align: top; }}\n",
                ".debug {{ color: #339933; }}\n",
                ".warn {{ color: #993300; font-weight: bold; }}\n",
                "</style>\n</head>\n<body>\n",
                "<h1>{title}</h1>\n",
                "<table cellspacing=\"0\" cellpadding=\"4\" border=\"1\" width=\"100%\">\n",
                "<tr><th>Time</th><th>Thread</th><th>Level</th><th>Category</th><th>Message</th></tr>\n",
            ),
            title = title
        )?;
        writer.flush()?;
        Ok(Self {
            writer,
            finished: false,
        })
    }

    /// Writes one table row for `record`.
    ///
    /// Once the footer is written the document is closed and rows are
    /// discarded.
    pub fn write(&mut self, record: &Record) -> io::Result<()> {
        if self.finished {
            return Ok(());
        }
        let class = match record.level() {
            Level::Trace | Level::Debug => " class=\"debug\"",
            Level::Warn | Level::Error | Level::Fatal => " class=\"warn\"",
            _ => "",
        };
        let row = format!(
            "<tr><td>{}</td><td>{}</td><td{class}>{}</td><td>{}</td><td>{}</td></tr>\n",
            format_timestamp(record.timestamp()),
            escape(record.thread()),
            record.level(),
            escape(record.category()),
            escape(record.text()).replace('\n', "<br>"),
        );
        self.writer.write_all(row.as_bytes())
    }

    /// Writes the document footer. Later calls do nothing.
    pub fn finish(&mut self) -> io::Result<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.write_all(b"</table>\n</body>\n</html>\n")?;
        self.writer.flush()
    }

    /// Reports whether the footer has been written.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Borrows the wrapped writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }
}

impl HtmlSink<BufWriter<File>> {
    /// Creates an HTML sink at `path`, truncating any existing file.
    ///
    /// Missing parent directories are created first.
    pub fn create_file(path: impl AsRef<Path>, title: &str) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        Self::new(BufWriter::new(File::create(path)?), title)
    }
}

impl<W> LogSink for HtmlSink<W>
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

    fn finish(&mut self) -> io::Result<()> {
        Self::finish(self)
    }
}

impl<W> Drop for HtmlSink<W>
where
    W: Write,
{
    fn drop(&mut self) {
        let _ = self.finish();
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\r' => {}
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn record(level: Level, text: &str) -> Record {
        Record::new(level, "db", text)
            .with_timestamp(datetime!(2024-03-01 08:00:00 UTC))
            .with_thread("main")
    }

    fn rendered(sink: &HtmlSink<Vec<u8>>) -> String {
        String::from_utf8(sink.get_ref().clone()).expect("utf-8")
    }

    #[test]
    fn header_is_written_on_construction() {
        let sink = HtmlSink::new(Vec::new(), "development").expect("sink");
        let html = rendered(&sink);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>development</title>"));
        assert!(!html.contains("</html>"));
    }

    #[test]
    fn rows_escape_markup_and_break_lines() {
        let mut sink = HtmlSink::new(Vec::new(), "t").expect("sink");
        sink.write(&record(Level::Error, "a < b & \"c\"\nnext"))
            .expect("write");
        let html = rendered(&sink);
        assert!(html.contains("a &lt; b &amp; &quot;c&quot;<br>next"), "{html}");
        assert!(html.contains("<td class=\"warn\">ERROR</td>"));
        assert!(html.contains("<td>2024/03/01 08:00:00</td><td>main</td>"));
    }

    #[test]
    fn debug_rows_use_debug_class() {
        let mut sink = HtmlSink::new(Vec::new(), "t").expect("sink");
        sink.write(&record(Level::Debug, "x")).expect("write");
        assert!(rendered(&sink).contains("<td class=\"debug\">DEBUG</td>"));
    }

    #[test]
    fn finish_writes_footer_once() {
        let mut sink = HtmlSink::new(Vec::new(), "t").expect("sink");
        sink.finish().expect("finish");
        sink.finish().expect("finish again");
        assert!(sink.is_finished());
        assert_eq!(rendered(&sink).matches("</html>").count(), 1);
    }

    #[test]
    fn rows_after_finish_are_discarded() {
        let mut sink = HtmlSink::new(Vec::new(), "t").expect("sink");
        LogSink::finish(&mut sink).expect("finish");
        sink.emit(&record(Level::Error, "late")).expect("emit");
        let html = rendered(&sink);
        assert!(!html.contains("late"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn drop_completes_file_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("logs/development.html");
        {
            let mut sink = HtmlSink::create_file(&path, "development").expect("sink");
            sink.emit(&record(Level::Info, "hello")).expect("emit");
        }
        let html = fs::read_to_string(&path).expect("read");
        assert!(html.contains("hello"));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
