//! crates/logging/src/config.rs
//! Sink configuration supplied before the facade is built.

use std::path::{Path, PathBuf};

use logging_sink::Level;
use thiserror::Error;

use crate::build_info::DEFAULT_BUILD_INFO_PATH;

/// Environment assumed when none is configured.
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// Environment name that relaxes the HTML sink filter.
pub const DEVELOPMENT_ENVIRONMENT: &str = "development";

/// Directory used for file sinks when none is configured.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Enable flag and threshold of one sink.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SinkSettings {
    /// Whether the sink is opened at all.
    pub enabled: bool,
    /// Lowest severity the sink accepts.
    pub threshold: Level,
}

impl SinkSettings {
    /// An enabled sink with the given threshold.
    #[must_use]
    pub const fn enabled(threshold: Level) -> Self {
        Self {
            enabled: true,
            threshold,
        }
    }

    /// A disabled sink that would use `threshold` if enabled later.
    #[must_use]
    pub const fn disabled(threshold: Level) -> Self {
        Self {
            enabled: false,
            threshold,
        }
    }
}

/// Everything the facade needs to wire its sinks and catalogs.
///
/// The defaults are: environment `production`, root threshold `DEBUG`, every
/// sink disabled, HTML threshold `WARN`, file sinks under `logs/`, no
/// supplemental catalogs and build metadata read from `version.properties`.
///
/// # Examples
///
/// ```
/// use logging::LoggerConfig;
/// use logging_sink::Level;
///
/// let config = LoggerConfig::default()
///     .with_environment("development")
///     .with_console(Level::Info)
///     .with_html_file(Level::All)
///     .with_log_dir("/var/log/app");
///
/// assert!(config.is_development());
/// assert_eq!(config.html_file_path().to_str(), Some("/var/log/app/development.html"));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Deployment environment; selects file names and the HTML filter.
    pub environment: String,
    /// Threshold applied to every record before any sink threshold.
    pub root: Level,
    /// Standard output sink.
    pub console: SinkSettings,
    /// Plain-text file sink at `<log_dir>/<environment>.txt`.
    pub text_file: SinkSettings,
    /// HTML report sink at `<log_dir>/<environment>.html`.
    pub html_file: SinkSettings,
    /// Base directory of the file sinks.
    pub log_dir: PathBuf,
    /// Supplemental catalog names, merged after the bundled default in order.
    pub catalogs: Vec<String>,
    /// Directories searched for `<name>.properties` catalog files.
    pub catalog_roots: Vec<PathBuf>,
    /// Build metadata file read at startup.
    pub build_info: PathBuf,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_owned(),
            root: Level::Debug,
            console: SinkSettings::disabled(Level::Debug),
            text_file: SinkSettings::disabled(Level::Debug),
            html_file: SinkSettings::disabled(Level::Warn),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            catalogs: Vec::new(),
            catalog_roots: Vec::new(),
            build_info: PathBuf::from(DEFAULT_BUILD_INFO_PATH),
        }
    }
}

impl LoggerConfig {
    /// Sets the environment name.
    #[must_use]
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Sets the root threshold.
    #[must_use]
    pub fn with_root_threshold(mut self, root: Level) -> Self {
        self.root = root;
        self
    }

    /// Enables the console sink.
    #[must_use]
    pub fn with_console(mut self, threshold: Level) -> Self {
        self.console = SinkSettings::enabled(threshold);
        self
    }

    /// Enables the text-file sink.
    #[must_use]
    pub fn with_text_file(mut self, threshold: Level) -> Self {
        self.text_file = SinkSettings::enabled(threshold);
        self
    }

    /// Enables the HTML sink.
    #[must_use]
    pub fn with_html_file(mut self, threshold: Level) -> Self {
        self.html_file = SinkSettings::enabled(threshold);
        self
    }

    /// Sets the base directory of the file sinks.
    #[must_use]
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }

    /// Appends a supplemental catalog; later catalogs override earlier ones.
    #[must_use]
    pub fn with_catalog(mut self, name: impl Into<String>) -> Self {
        self.catalogs.push(name.into());
        self
    }

    /// Appends a directory searched for catalog files.
    #[must_use]
    pub fn with_catalog_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.catalog_roots.push(root.into());
        self
    }

    /// Sets the build metadata file.
    #[must_use]
    pub fn with_build_info(mut self, path: impl Into<PathBuf>) -> Self {
        self.build_info = path.into();
        self
    }

    /// The environment name, or [`DEFAULT_ENVIRONMENT`] when it is blank.
    #[must_use]
    pub fn environment(&self) -> &str {
        let trimmed = self.environment.trim();
        if trimmed.is_empty() {
            DEFAULT_ENVIRONMENT
        } else {
            trimmed
        }
    }

    /// Reports whether the environment is `development` (case-insensitive).
    #[must_use]
    pub fn is_development(&self) -> bool {
        self.environment().eq_ignore_ascii_case(DEVELOPMENT_ENVIRONMENT)
    }

    /// Path of the text-file sink.
    #[must_use]
    pub fn text_file_path(&self) -> PathBuf {
        self.sink_path("txt")
    }

    /// Path of the HTML sink.
    #[must_use]
    pub fn html_file_path(&self) -> PathBuf {
        self.sink_path("html")
    }

    /// Build metadata file path.
    #[must_use]
    pub fn build_info_path(&self) -> &Path {
        &self.build_info
    }

    fn sink_path(&self, extension: &str) -> PathBuf {
        self.log_dir.join(format!("{}.{extension}", self.environment()))
    }
}

/// Error returned by the configuration entry points.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ConfigError {
    /// The facade was already built; configuration is only read once.
    #[error("the logger is already initialised; configuration must be supplied before first use")]
    AlreadyInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = LoggerConfig::default();
        assert_eq!(config.environment(), "production");
        assert_eq!(config.root, Level::Debug);
        assert!(!config.console.enabled);
        assert!(!config.text_file.enabled);
        assert!(!config.html_file.enabled);
        assert_eq!(config.html_file.threshold, Level::Warn);
        assert!(config.catalogs.is_empty());
        assert_eq!(config.build_info_path(), Path::new("version.properties"));
    }

    #[test]
    fn blank_environment_falls_back_to_production() {
        let config = LoggerConfig::default().with_environment("   ");
        assert_eq!(config.environment(), DEFAULT_ENVIRONMENT);
        assert!(!config.is_development());
        assert_eq!(config.text_file_path(), Path::new("logs/production.txt"));
    }

    #[test]
    fn development_is_case_insensitive() {
        assert!(LoggerConfig::default().with_environment("Development").is_development());
        assert!(!LoggerConfig::default().with_environment("staging").is_development());
    }

    #[test]
    fn file_paths_follow_environment() {
        let config = LoggerConfig::default()
            .with_environment("staging")
            .with_log_dir("/tmp/out");
        assert_eq!(config.text_file_path(), Path::new("/tmp/out/staging.txt"));
        assert_eq!(config.html_file_path(), Path::new("/tmp/out/staging.html"));
    }

    #[test]
    fn builders_enable_sinks() {
        let config = LoggerConfig::default()
            .with_console(Level::Info)
            .with_text_file(Level::Trace)
            .with_html_file(Level::All)
            .with_root_threshold(Level::Trace)
            .with_catalog("site")
            .with_catalog("locale")
            .with_catalog_root("/etc/app");
        assert_eq!(config.console, SinkSettings::enabled(Level::Info));
        assert_eq!(config.text_file, SinkSettings::enabled(Level::Trace));
        assert_eq!(config.html_file, SinkSettings::enabled(Level::All));
        assert_eq!(config.root, Level::Trace);
        assert_eq!(config.catalogs, ["site", "locale"]);
        assert_eq!(config.catalog_roots, [PathBuf::from("/etc/app")]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialises_partial_configuration() {
        let config: LoggerConfig = serde_json::from_str(
            r#"{"environment":"development","html_file":{"enabled":true,"threshold":"ALL"}}"#,
        )
        .expect("valid configuration");
        assert!(config.is_development());
        assert_eq!(config.html_file, SinkSettings::enabled(Level::All));
        assert_eq!(config.root, Level::Debug);
    }
}
