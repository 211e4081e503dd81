//! crates/logging/src/report.rs
//! Captured errors reduced to a message and an ordered list of frames.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;

/// Joins frame descriptors with newlines, preserving their order.
///
/// # Examples
///
/// ```
/// assert_eq!(logging::format_frames(["frameA", "frameB"]), "frameA\nframeB");
/// assert_eq!(logging::format_frames(Vec::<String>::new()), "");
/// ```
pub fn format_frames<I, S>(frames: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (index, frame) in frames.into_iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(frame.as_ref());
    }
    out
}

/// An error captured for logging: its message and the frames that explain it.
///
/// Frames are free-form descriptors. [`from_error`](Self::from_error) fills
/// them from the error's `source()` chain; [`with_backtrace`](Self::with_backtrace)
/// appends the lines of a captured backtrace.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorReport {
    message: String,
    frames: Vec<String>,
}

impl ErrorReport {
    /// Creates a report from a message and explicit frames.
    pub fn new<I, S>(message: impl Into<String>, frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            message: message.into(),
            frames: frames.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a report whose frames are the error's cause chain, outermost first.
    pub fn from_error(error: &(dyn Error + 'static)) -> Self {
        let mut frames = Vec::new();
        let mut cause = error.source();
        while let Some(source) = cause {
            frames.push(format!("caused by: {source}"));
            cause = source.source();
        }
        Self {
            message: error.to_string(),
            frames,
        }
    }

    /// Like [`from_error`](Self::from_error), plus the current backtrace when
    /// backtrace capture is enabled through `RUST_BACKTRACE`.
    pub fn capture(error: &(dyn Error + 'static)) -> Self {
        Self::from_error(error).with_backtrace(&Backtrace::capture())
    }

    /// Appends one frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.frames.push(frame.into());
        self
    }

    /// Appends the non-blank lines of `backtrace` if it was captured.
    #[must_use]
    pub fn with_backtrace(mut self, backtrace: &Backtrace) -> Self {
        if backtrace.status() == BacktraceStatus::Captured {
            self.frames.extend(
                backtrace
                    .to_string()
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_owned),
            );
        }
        self
    }

    /// The error's own message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Frames in order.
    #[must_use]
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Frames joined with newlines.
    #[must_use]
    pub fn frame_block(&self) -> String {
        format_frames(&self.frames)
    }
}

impl<E> From<&E> for ErrorReport
where
    E: Error + 'static,
{
    fn from(error: &E) -> Self {
        Self::from_error(error)
    }
}
