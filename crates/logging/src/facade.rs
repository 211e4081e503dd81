//! crates/logging/src/facade.rs
//! The logger itself: startup wiring and the leveled logging calls.

use std::fmt;
use std::io;
use std::path::Path;

use catalog::ids::{error, info, warn};
use catalog::{CatalogLoader, CatalogLocator, CombinedCatalog, DEFAULT_CATALOG};
use logging_sink::{HtmlSink, Level, LogSink, MessageSink, Record};

use crate::build_info::BuildInfo;
use crate::channel::Channel;
use crate::config::LoggerConfig;
use crate::report::ErrorReport;
use crate::routing::{EnvironmentFilter, Route, Router, SinkKind};

/// Category used for the logger's own records.
pub const LOGGER_CATEGORY: &str = "logging";

/// Empty argument list for templates without placeholders.
pub const NO_ARGS: &[&str] = &[];

const LOGGER_BUILD_IDS: [&str; 4] = [
    info::LOGGER_INFO_VERSION,
    info::LOGGER_INFO_BRANCH,
    info::LOGGER_INFO_COMMIT,
    info::LOGGER_INFO_TIMESTAMP,
];

const APP_BUILD_IDS: [&str; 4] = [
    info::APP_INFO_VERSION,
    info::APP_INFO_BRANCH,
    info::APP_INFO_COMMIT,
    info::APP_INFO_TIMESTAMP,
];

/// Leveled, templated, multi-sink logger.
///
/// A `Logger` owns its merged message catalog and its sinks for its whole
/// life. All methods take `&self`; the logger is `Sync` and meant to be shared
/// by reference, either injected explicitly or through
/// [`global`](crate::global).
///
/// Logging calls never fail. A sink that cannot write drops the record, the
/// failure is counted in [`sink_failures`](Self::sink_failures), and the other
/// sinks are unaffected.
///
/// # Examples
///
/// ```
/// use logging::{Logger, LoggerConfig};
/// use logging_sink::Level;
/// use test_support::CaptureSink;
///
/// let capture = CaptureSink::new();
/// let logger = Logger::builder(LoggerConfig::default().with_build_info("missing.properties"))
///     .with_sink("capture", Level::Info, capture.clone())
///     .build();
///
/// logger.info_template("db", "D001", &["rows", "12"]);
/// assert_eq!(capture.texts().last().map(String::as_str), Some("rows: 12"));
/// ```
pub struct Logger {
    config: LoggerConfig,
    catalog: CombinedCatalog,
    router: Router,
    build_info: Option<BuildInfo>,
}

impl Logger {
    /// Builds a logger from `config` with the default catalog locator.
    #[must_use]
    pub fn build(config: LoggerConfig) -> Self {
        LoggerBuilder::new(config).build()
    }

    /// Starts a builder for `config`.
    #[must_use]
    pub fn builder(config: LoggerConfig) -> LoggerBuilder {
        LoggerBuilder::new(config)
    }

    /// The configuration the logger was built from, with the environment
    /// already defaulted.
    #[must_use]
    pub const fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// The merged message catalog.
    #[must_use]
    pub const fn catalog(&self) -> &CombinedCatalog {
        &self.catalog
    }

    /// Build metadata found at startup, if any.
    #[must_use]
    pub const fn build_info(&self) -> Option<&BuildInfo> {
        self.build_info.as_ref()
    }

    /// Names of the active sinks, in routing order.
    #[must_use]
    pub fn sinks(&self) -> Vec<String> {
        self.router.kinds().map(ToString::to_string).collect()
    }

    /// Number of records or flushes that a sink failed to complete.
    #[must_use]
    pub fn sink_failures(&self) -> u64 {
        self.router.failures()
    }

    /// Reports whether a record of `level` would reach at least one sink.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        self.router.enabled(level)
    }

    /// A handle that logs under a fixed category.
    #[must_use]
    pub fn channel<'a>(&'a self, category: &'a str) -> Channel<'a> {
        Channel::new(self, category)
    }

    /// Logs `text` unchanged.
    ///
    /// The `All` and `Off` sentinels are not severities; records carrying them
    /// are discarded.
    pub fn log(&self, level: Level, category: &str, text: &str) {
        if !self.enabled(level) {
            return;
        }
        self.router.dispatch(&Record::new(level, category, text));
    }

    /// Resolves `id` in the catalog, substitutes `args` and logs the result.
    ///
    /// An unknown identifier logs a `W002` warning first and then uses the
    /// identifier itself as the text.
    pub fn log_template<S>(&self, level: Level, category: &str, id: &str, args: &[S])
    where
        S: AsRef<str>,
    {
        if !self.enabled(level) {
            return;
        }
        let text = self.resolve(category, id, args);
        self.router.dispatch(&Record::new(level, category, text));
    }

    /// Logs a captured error through the `E001` template.
    ///
    /// The template's first slot receives the error message and the second
    /// the frames joined by newlines.
    pub fn log_report(&self, level: Level, category: &str, report: &ErrorReport) {
        if !self.enabled(level) {
            return;
        }
        let args = [report.message().to_owned(), report.frame_block()];
        let text = match self.catalog.format(error::ERROR, &args) {
            Some(text) => text,
            None => {
                self.warn_missing(category, error::ERROR);
                if args[1].is_empty() {
                    args[0].clone()
                } else {
                    args.join("\n")
                }
            }
        };
        self.router.dispatch(&Record::new(level, category, text));
    }

    /// Logs `text` at `TRACE`.
    pub fn trace(&self, category: &str, text: &str) {
        self.log(Level::Trace, category, text);
    }

    /// Logs `text` at `DEBUG`.
    pub fn debug(&self, category: &str, text: &str) {
        self.log(Level::Debug, category, text);
    }

    /// Logs `text` at `INFO`.
    pub fn info(&self, category: &str, text: &str) {
        self.log(Level::Info, category, text);
    }

    /// Logs `text` at `WARN`.
    pub fn warn(&self, category: &str, text: &str) {
        self.log(Level::Warn, category, text);
    }

    /// Logs `text` at `ERROR`.
    pub fn error(&self, category: &str, text: &str) {
        self.log(Level::Error, category, text);
    }

    /// Logs `text` at `FATAL`.
    pub fn fatal(&self, category: &str, text: &str) {
        self.log(Level::Fatal, category, text);
    }

    /// Logs template `id` at `TRACE`.
    pub fn trace_template<S: AsRef<str>>(&self, category: &str, id: &str, args: &[S]) {
        self.log_template(Level::Trace, category, id, args);
    }

    /// Logs template `id` at `DEBUG`.
    pub fn debug_template<S: AsRef<str>>(&self, category: &str, id: &str, args: &[S]) {
        self.log_template(Level::Debug, category, id, args);
    }

    /// Logs template `id` at `INFO`.
    pub fn info_template<S: AsRef<str>>(&self, category: &str, id: &str, args: &[S]) {
        self.log_template(Level::Info, category, id, args);
    }

    /// Logs template `id` at `WARN`.
    pub fn warn_template<S: AsRef<str>>(&self, category: &str, id: &str, args: &[S]) {
        self.log_template(Level::Warn, category, id, args);
    }

    /// Logs template `id` at `ERROR`.
    pub fn error_template<S: AsRef<str>>(&self, category: &str, id: &str, args: &[S]) {
        self.log_template(Level::Error, category, id, args);
    }

    /// Logs template `id` at `FATAL`.
    pub fn fatal_template<S: AsRef<str>>(&self, category: &str, id: &str, args: &[S]) {
        self.log_template(Level::Fatal, category, id, args);
    }

    /// Logs a captured error at `ERROR`.
    pub fn error_report(&self, category: &str, report: &ErrorReport) {
        self.log_report(Level::Error, category, report);
    }

    /// Logs a captured error at `FATAL`.
    pub fn fatal_report(&self, category: &str, report: &ErrorReport) {
        self.log_report(Level::Fatal, category, report);
    }

    /// Announces an application's build metadata with `I006`..`I009`.
    pub fn log_app_build_info(&self, info: &BuildInfo) {
        for (id, value) in info.announcements(APP_BUILD_IDS) {
            self.info_template(LOGGER_CATEGORY, id, &[value]);
        }
    }

    /// Flushes every sink. Failures are counted like write failures.
    pub fn flush(&self) {
        self.router.flush();
    }

    /// Writes closing output and flushes every sink.
    ///
    /// The HTML report gets its footer here; records logged afterwards are
    /// still delivered to the other sinks but no longer appear in it. A logger
    /// that is dropped finishes its sinks on its own, so this is only needed
    /// for one that lives until process exit, such as [`global`](crate::global).
    pub fn finish(&self) {
        self.router.finish();
    }

    fn resolve<S>(&self, category: &str, id: &str, args: &[S]) -> String
    where
        S: AsRef<str>,
    {
        if let Some(text) = self.catalog.format(id, args) {
            return text;
        }
        self.warn_missing(category, id);
        id.to_owned()
    }

    // Never goes back through `resolve`, so a catalog without W002 cannot recurse.
    fn warn_missing(&self, category: &str, id: &str) {
        tracing::debug!(id, "message template not found");
        if !self.enabled(Level::Warn) {
            return;
        }
        let text = self
            .catalog
            .format(warn::TEMPLATE_NOT_FOUND, &[id])
            .unwrap_or_else(|| format!("missing message template: {id}"));
        self.router.dispatch(&Record::new(Level::Warn, category, text));
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("environment", &self.config.environment())
            .field("sinks", &self.sinks())
            .field("catalogs", &self.catalog.sources())
            .finish_non_exhaustive()
    }
}

/// Two-phase construction of a [`Logger`].
///
/// The builder carries the configuration plus anything that cannot be
/// expressed as configuration data: a custom catalog loader and extra sinks.
/// [`build`](Self::build) performs the whole startup sequence:
///
/// 1. default a blank environment to `production`;
/// 2. open every enabled sink, attaching the environment filter to the HTML
///    sink;
/// 3. merge the bundled catalog with the configured catalogs;
/// 4. log `I001`, then one `W001` per catalog that failed to load;
/// 5. read the build metadata file and log `I002`..`I005` for the keys it
///    carries.
pub struct LoggerBuilder {
    config: LoggerConfig,
    loader: Option<Box<dyn CatalogLoader>>,
    extra: Vec<Route>,
}

impl LoggerBuilder {
    /// Starts a builder for `config`.
    #[must_use]
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            config,
            loader: None,
            extra: Vec::new(),
        }
    }

    /// Replaces the catalog loader. The configured catalog roots are then
    /// ignored.
    #[must_use]
    pub fn with_loader<L>(mut self, loader: L) -> Self
    where
        L: CatalogLoader + 'static,
    {
        self.loader = Some(Box::new(loader));
        self
    }

    /// Adds a sink routed by `threshold` alone, after the configured sinks.
    #[must_use]
    pub fn with_sink<S>(mut self, name: impl Into<String>, threshold: Level, sink: S) -> Self
    where
        S: LogSink + 'static,
    {
        self.extra.push(Route::new(
            SinkKind::Custom(name.into()),
            threshold,
            Box::new(sink),
        ));
        self
    }

    /// Runs the startup sequence and returns the ready logger.
    #[must_use]
    pub fn build(self) -> Logger {
        let Self {
            mut config,
            loader,
            extra,
        } = self;

        config.environment = config.environment().to_owned();

        let mut routes = open_routes(&config);
        routes.extend(extra);
        let router = Router::new(config.root, routes);

        let names =
            std::iter::once(DEFAULT_CATALOG.to_owned()).chain(config.catalogs.iter().cloned());
        let (catalog, failures) = match &loader {
            Some(loader) => CombinedCatalog::build(loader.as_ref(), names),
            None => {
                let locator = config
                    .catalog_roots
                    .iter()
                    .fold(CatalogLocator::new(), |locator, root| {
                        locator.with_search_root(root.clone())
                    });
                CombinedCatalog::build(&locator, names)
            }
        };

        let mut logger = Logger {
            config,
            catalog,
            router,
            build_info: None,
        };

        logger.info_template(LOGGER_CATEGORY, info::INFO_START_LOGGER, NO_ARGS);
        for failure in &failures {
            logger.warn_template(
                LOGGER_CATEGORY,
                warn::CATALOG_NOT_LOADED,
                &[failure.name.clone(), failure.error.to_string()],
            );
        }

        match BuildInfo::read(logger.config.build_info_path()) {
            Ok(build_info) => {
                for (id, value) in build_info.announcements(LOGGER_BUILD_IDS) {
                    logger.info_template(LOGGER_CATEGORY, id, &[value]);
                }
                logger.build_info = Some(build_info);
            }
            Err(error) => tracing::debug!(%error, "no build metadata"),
        }

        tracing::debug!(
            environment = logger.config.environment(),
            sinks = ?logger.sinks(),
            catalogs = ?logger.catalog.sources(),
            "logger ready"
        );
        logger
    }
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("config", &self.config)
            .field("custom_loader", &self.loader.is_some())
            .field("extra_sinks", &self.extra.len())
            .finish()
    }
}

fn open_routes(config: &LoggerConfig) -> Vec<Route> {
    let mut routes = Vec::new();

    if config.console.enabled {
        routes.push(Route::new(
            SinkKind::Console,
            config.console.threshold,
            Box::new(MessageSink::stdout()),
        ));
    }

    if config.text_file.enabled {
        let path = config.text_file_path();
        match MessageSink::create_file(&path) {
            Ok(sink) => routes.push(Route::new(
                SinkKind::TextFile,
                config.text_file.threshold,
                Box::new(sink),
            )),
            Err(error) => report_open_failure(&SinkKind::TextFile, &path, &error),
        }
    }

    if config.html_file.enabled {
        let path = config.html_file_path();
        match HtmlSink::create_file(&path, config.environment()) {
            Ok(sink) => routes.push(
                Route::new(SinkKind::HtmlFile, config.html_file.threshold, Box::new(sink))
                    .with_filter(EnvironmentFilter::for_config(config)),
            ),
            Err(error) => report_open_failure(&SinkKind::HtmlFile, &path, &error),
        }
    }

    routes
}

fn report_open_failure(kind: &SinkKind, path: &Path, error: &io::Error) {
    tracing::warn!(sink = %kind, path = %path.display(), %error, "failed to open log sink");
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Catalog, CatalogError};
    use test_support::{CaptureSink, FailingSink, PanickingSink};

    fn quiet_config() -> LoggerConfig {
        LoggerConfig::default().with_build_info("/nonexistent/version.properties")
    }

    fn capture_logger(threshold: Level) -> (Logger, CaptureSink) {
        let capture = CaptureSink::new();
        let logger = Logger::builder(quiet_config())
            .with_sink("capture", threshold, capture.clone())
            .build();
        (logger, capture)
    }

    #[test]
    fn startup_logs_logger_started() {
        let (_logger, capture) = capture_logger(Level::All);
        assert_eq!(capture.texts(), ["Logger was started."]);
        assert_eq!(capture.records()[0].category(), LOGGER_CATEGORY);
    }

    #[test]
    fn literal_text_is_sent_unchanged() {
        let (logger, capture) = capture_logger(Level::All);
        logger.warn("cache", "{0} is not a placeholder here");
        let last = capture.records().pop().expect("record");
        assert_eq!(last.text(), "{0} is not a placeholder here");
        assert_eq!(last.level(), Level::Warn);
        assert_eq!(last.category(), "cache");
    }

    #[test]
    fn template_arguments_are_substituted() {
        let (logger, capture) = capture_logger(Level::All);
        logger.debug_template("ui", "D001", &["x", "y"]);
        logger.debug_template("ui", "D001", &["x"]);
        let texts = capture.texts();
        assert_eq!(texts[texts.len() - 2..], ["x: y", "x: {1}"]);
    }

    #[test]
    fn owned_arguments_are_accepted() {
        let (logger, capture) = capture_logger(Level::All);
        let table = String::from("users");
        logger.info_template("db", "D204", &[table, "SELECT *".to_owned()]);
        assert_eq!(
            capture.texts().last().map(String::as_str),
            Some("Data is retrieved from table users.\nSELECT *")
        );
    }

    #[test]
    fn unknown_identifier_warns_then_falls_back() {
        let (logger, capture) = capture_logger(Level::All);
        logger.info_template("ui", "Z999", NO_ARGS);
        let records = capture.records();
        let [.., warning, fallback] = records.as_slice() else {
            panic!("expected two records");
        };
        assert_eq!(warning.level(), Level::Warn);
        assert_eq!(
            warning.text(),
            "No message template is registered for the identifier Z999."
        );
        assert_eq!(fallback.level(), Level::Info);
        assert_eq!(fallback.text(), "Z999");
    }

    #[test]
    fn missing_warning_template_does_not_recurse() {
        let capture = CaptureSink::new();
        let loader = |name: &str| -> Result<Catalog, CatalogError> {
            Ok(Catalog::from_pairs(name, [("E001", "{0}|{1}")]))
        };
        let logger = Logger::builder(quiet_config())
            .with_loader(loader)
            .with_sink("capture", Level::All, capture.clone())
            .build();
        logger.info_template("ui", "Z999", NO_ARGS);
        let texts = capture.texts();
        assert_eq!(
            texts[texts.len() - 2..],
            ["missing message template: Z999", "Z999"]
        );
    }

    #[test]
    fn error_report_uses_error_template() {
        let (logger, capture) = capture_logger(Level::All);
        logger.error_report("db", &ErrorReport::new("boom", ["frameA", "frameB"]));
        let last = capture.records().pop().expect("record");
        assert_eq!(last.level(), Level::Error);
        assert_eq!(
            last.text(),
            "The following error occurred: boom\nframeA\nframeB"
        );
    }

    #[test]
    fn fatal_report_uses_fatal_level() {
        let (logger, capture) = capture_logger(Level::All);
        logger.fatal_report("db", &ErrorReport::new("down", Vec::<String>::new()));
        let last = capture.records().pop().expect("record");
        assert_eq!(last.level(), Level::Fatal);
        assert_eq!(last.text(), "The following error occurred: down\n");
    }

    #[test]
    fn sentinel_levels_are_not_logged() {
        let (logger, capture) = capture_logger(Level::All);
        let before = capture.len();
        logger.log(Level::All, "x", "all");
        logger.log(Level::Off, "x", "off");
        assert_eq!(capture.len(), before);
    }

    #[test]
    fn below_threshold_is_not_formatted_or_warned() {
        let (logger, capture) = capture_logger(Level::Error);
        logger.info_template("ui", "Z999", NO_ARGS);
        assert!(capture.is_empty());
    }

    #[test]
    fn failed_catalog_is_reported_as_warning() {
        let capture = CaptureSink::new();
        let logger = Logger::builder(quiet_config().with_catalog("no-such-catalog"))
            .with_sink("capture", Level::All, capture.clone())
            .build();
        let texts = capture.texts();
        assert_eq!(texts[0], "Logger was started.");
        assert!(
            texts[1].starts_with("The message catalog no-such-catalog could not be loaded:"),
            "{}",
            texts[1]
        );
        assert_eq!(logger.catalog().sources(), [DEFAULT_CATALOG.to_string()]);
    }

    #[test]
    fn failing_sink_is_isolated_and_counted() {
        let capture = CaptureSink::new();
        let logger = Logger::builder(quiet_config())
            .with_sink("failing", Level::All, FailingSink)
            .with_sink("capture", Level::All, capture.clone())
            .build();
        logger.error("db", "still delivered");
        assert_eq!(capture.texts().last().map(String::as_str), Some("still delivered"));
        assert_eq!(logger.sink_failures(), 2);
    }

    #[test]
    fn panicking_sink_does_not_reach_the_caller() {
        let capture = CaptureSink::new();
        let logger = Logger::builder(quiet_config())
            .with_sink("panicking", Level::All, PanickingSink)
            .with_sink("capture", Level::All, capture.clone())
            .build();
        let failures = logger.sink_failures();
        logger.error("db", "survives");
        assert_eq!(capture.texts().last().map(String::as_str), Some("survives"));
        assert_eq!(logger.sink_failures(), failures + 1);
    }

    #[test]
    fn app_build_info_uses_app_identifiers() {
        let (logger, capture) = capture_logger(Level::All);
        logger.log_app_build_info(&BuildInfo {
            version: Some("3.1".into()),
            branch: Some("main".into()),
            ..BuildInfo::default()
        });
        let texts = capture.texts();
        assert_eq!(
            texts[texts.len() - 2..],
            ["Version of the app: 3.1.", "Branch used to compile the app: main."]
        );
    }

    #[test]
    fn blank_environment_is_defaulted() {
        let logger = Logger::build(quiet_config().with_environment(""));
        assert_eq!(logger.config().environment, "production");
        assert!(logger.sinks().is_empty());
    }

    #[test]
    fn flush_is_forwarded() {
        let (logger, capture) = capture_logger(Level::All);
        logger.flush();
        assert_eq!(capture.flush_count(), 1);
    }

    #[test]
    fn finish_is_forwarded() {
        let (logger, capture) = capture_logger(Level::All);
        logger.finish();
        assert_eq!(capture.flush_count(), 1);
        assert_eq!(logger.sink_failures(), 0);
    }
}
