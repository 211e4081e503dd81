#![deny(unsafe_code)]
#![deny(missing_docs)]

//! crates/test-support/src/lib.rs
//!
//! Helpers shared by the workspace's tests: scratch directories, a sink that
//! captures records in memory, and sinks that fail or panic.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use logging_sink::{Level, LogSink, Record};
use tempfile::TempDir;

/// Creates a temporary directory removed when the returned guard drops.
///
/// # Panics
///
/// Panics if the directory cannot be created.
#[must_use]
pub fn scratch_dir() -> TempDir {
    tempfile::tempdir().expect("create scratch directory")
}

/// In-memory sink whose clones share one record list.
///
/// Hand one clone to the code under test and keep another to inspect what was
/// emitted.
#[derive(Clone, Debug, Default)]
pub struct CaptureSink {
    records: Arc<Mutex<Vec<Record>>>,
    flushes: Arc<Mutex<usize>>,
}

impl CaptureSink {
    /// Creates an empty capture sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every captured record in emission order.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Captured texts in emission order.
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.records()
            .into_iter()
            .map(|record| record.text().to_owned())
            .collect()
    }

    /// Captured levels in emission order.
    #[must_use]
    pub fn levels(&self) -> Vec<Level> {
        self.records().iter().map(Record::level).collect()
    }

    /// Number of captured records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Reports whether nothing was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of times [`LogSink::flush`] was called.
    #[must_use]
    pub fn flush_count(&self) -> usize {
        *self.flushes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogSink for CaptureSink {
    fn emit(&mut self, record: &Record) -> io::Result<()> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        *self.flushes.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        Ok(())
    }
}

/// Sink that rejects every record with an I/O error.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingSink;

impl LogSink for FailingSink {
    fn emit(&mut self, _record: &Record) -> io::Result<()> {
        Err(io::Error::other("sink rejected the record"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("sink rejected the flush"))
    }
}

/// Sink that panics on every record, standing in for a buggy custom sink.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanickingSink;

impl LogSink for PanickingSink {
    fn emit(&mut self, record: &Record) -> io::Result<()> {
        panic!("sink panicked on {:?}", record.text());
    }
}
