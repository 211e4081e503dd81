//! Integration tests for the file-backed sinks wired from configuration.
//!
//! These tests build loggers with real text and HTML sinks in a scratch
//! directory and inspect the files they leave behind.

use std::fs;
use std::sync::Arc;
use std::thread;

use logging::{Logger, LoggerConfig};
use logging_sink::Level;
use test_support::scratch_dir;

fn config(dir: &std::path::Path) -> LoggerConfig {
    LoggerConfig::default()
        .with_log_dir(dir.join("logs"))
        .with_build_info(dir.join("absent.properties"))
}

// ============================================================================
// Text File Sink
// ============================================================================

/// Verifies the text sink lands at `<dir>/<environment>.txt` with the line layout.
#[test]
fn text_file_uses_environment_name_and_line_layout() {
    let dir = scratch_dir();
    let logger = Logger::build(
        config(dir.path())
            .with_environment("staging")
            .with_text_file(Level::Info),
    );
    logger.warn("cache", "evicting");
    logger.debug("cache", "not written");
    drop(logger);

    let text = fs::read_to_string(dir.path().join("logs/staging.txt")).expect("text log");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2, "{text}");
    assert!(lines[0].ends_with("] logging - Logger was started."), "{}", lines[0]);
    assert!(lines[1].contains(" WARN  ["), "{}", lines[1]);
    assert!(lines[1].ends_with("] cache - evicting"), "{}", lines[1]);
}

/// Verifies each process start truncates the previous text log.
#[test]
fn text_file_is_truncated_on_start() {
    let dir = scratch_dir();
    let first = Logger::build(config(dir.path()).with_text_file(Level::All));
    first.info("run", "first run");
    drop(first);

    let second = Logger::build(config(dir.path()).with_text_file(Level::All));
    second.info("run", "second run");
    drop(second);

    let text = fs::read_to_string(dir.path().join("logs/production.txt")).expect("text log");
    assert!(!text.contains("first run"));
    assert!(text.contains("second run"));
}

/// Verifies concurrent writers never interleave fragments of a line.
#[test]
fn concurrent_records_stay_whole() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 50;

    let dir = scratch_dir();
    let logger = Arc::new(Logger::build(config(dir.path()).with_text_file(Level::All)));
    let handles: Vec<_> = (0..THREADS)
        .map(|worker| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for seq in 0..PER_THREAD {
                    logger.info(
                        "worker",
                        &format!("worker={worker} seq={seq} payload=abcdefghijklmnopqrstuvwxyz"),
                    );
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker");
    }
    drop(logger);

    let text = fs::read_to_string(dir.path().join("logs/production.txt")).expect("text log");
    let worker_lines: Vec<&str> = text.lines().filter(|line| line.contains("worker=")).collect();
    assert_eq!(worker_lines.len(), THREADS * PER_THREAD);
    assert!(worker_lines.iter().all(|line| {
        line.ends_with("payload=abcdefghijklmnopqrstuvwxyz") && line.matches("worker=").count() == 1
    }));
}

// ============================================================================
// HTML Sink and Environment Filter
// ============================================================================

/// Verifies development accepts DEBUG records in the HTML report.
#[test]
fn html_in_development_accepts_debug() {
    let dir = scratch_dir();
    let logger = Logger::build(
        config(dir.path())
            .with_environment("development")
            .with_html_file(Level::All),
    );
    logger.debug("ui", "clicked button");
    drop(logger);

    let html = fs::read_to_string(dir.path().join("logs/development.html")).expect("html log");
    assert!(html.contains("clicked button"));
    assert!(html.contains("Logger was started."));
    assert!(html.trim_end().ends_with("</html>"));
}

/// Verifies `finish` closes the HTML report while the logger is still alive.
#[test]
fn finish_closes_html_report_and_keeps_text_sink() {
    let dir = scratch_dir();
    let logger = Logger::build(
        config(dir.path())
            .with_environment("development")
            .with_html_file(Level::All)
            .with_text_file(Level::All),
    );
    logger.info("ui", "before finish");
    logger.finish();
    logger.info("ui", "after finish");

    let html = fs::read_to_string(dir.path().join("logs/development.html")).expect("html log");
    assert!(html.contains("before finish"));
    assert!(!html.contains("after finish"));
    assert!(html.trim_end().ends_with("</html>"));

    let text = fs::read_to_string(dir.path().join("logs/development.txt")).expect("text log");
    assert!(text.contains("after finish"));
    assert_eq!(logger.sink_failures(), 0);
}

/// Verifies other environments deny records below WARN even with an open threshold.
#[test]
fn html_in_production_denies_below_warn() {
    let dir = scratch_dir();
    let logger = Logger::build(config(dir.path()).with_html_file(Level::All));
    logger.debug("ui", "clicked button");
    logger.info("ui", "opened dialog");
    logger.warn("ui", "dialog slow");
    drop(logger);

    let html = fs::read_to_string(dir.path().join("logs/production.html")).expect("html log");
    assert!(!html.contains("clicked button"));
    assert!(!html.contains("opened dialog"));
    assert!(!html.contains("Logger was started."));
    assert!(html.contains("dialog slow"));
}

/// Verifies the HTML sink's own threshold still applies in development.
#[test]
fn html_threshold_applies_on_top_of_filter() {
    let dir = scratch_dir();
    let logger = Logger::build(
        config(dir.path())
            .with_environment("development")
            .with_html_file(Level::Error),
    );
    logger.warn("ui", "only a warning");
    logger.error("ui", "real failure");
    drop(logger);

    let html = fs::read_to_string(dir.path().join("logs/development.html")).expect("html log");
    assert!(!html.contains("only a warning"));
    assert!(html.contains("real failure"));
}

// ============================================================================
// Sink Wiring
// ============================================================================

/// Verifies disabled sinks create no files and receive nothing.
#[test]
fn disabled_sinks_create_no_files() {
    let dir = scratch_dir();
    let logger = Logger::build(config(dir.path()));
    logger.fatal("core", "nobody hears this");
    assert!(logger.sinks().is_empty());
    assert!(!dir.path().join("logs").exists());
}

/// Verifies an unopenable file sink is skipped while the others still work.
#[test]
fn unopenable_sink_is_skipped() {
    let dir = scratch_dir();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").expect("write blocker");

    let logger = Logger::build(
        LoggerConfig::default()
            .with_log_dir(&blocker)
            .with_build_info(dir.path().join("absent.properties"))
            .with_text_file(Level::All)
            .with_console(Level::Off),
    );
    assert_eq!(logger.sinks(), ["console"]);
    logger.error("core", "still fine");
}
