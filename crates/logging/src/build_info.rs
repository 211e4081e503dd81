//! crates/logging/src/build_info.rs
//! Optional build metadata read from a properties file at startup.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use catalog::{ParseError, properties};
use thiserror::Error;

/// Path, relative to the working directory, read when none is configured.
pub const DEFAULT_BUILD_INFO_PATH: &str = "version.properties";

/// Key holding the version string.
pub const VERSION_KEY: &str = "project.version";
/// Key holding the source branch.
pub const BRANCH_KEY: &str = "build.branch";
/// Key holding the build number or commit id.
pub const NUMBER_KEY: &str = "build.number";
/// Key holding the build timestamp.
pub const TIME_KEY: &str = "build.time";

/// Version, branch, build number and build time of a component.
///
/// Each field is optional; a metadata file may carry any subset of the keys.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BuildInfo {
    /// `project.version`.
    pub version: Option<String>,
    /// `build.branch`.
    pub branch: Option<String>,
    /// `build.number`.
    pub number: Option<String>,
    /// `build.time`.
    pub time: Option<String>,
}

/// Why build metadata could not be read.
#[derive(Debug, Error)]
pub enum BuildInfoError {
    /// The file could not be read.
    #[error("failed to read build metadata '{path}': {source}")]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The file is not valid properties text.
    #[error("failed to parse build metadata '{path}': {source}")]
    Parse {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: ParseError,
    },
}

impl BuildInfo {
    /// Reads and parses the metadata file at `path`.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, BuildInfoError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| BuildInfoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| BuildInfoError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses metadata from properties text. Unknown keys are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::BuildInfo;
    ///
    /// let info = BuildInfo::parse("project.version = 1.4.0\nbuild.branch = main\n")?;
    /// assert_eq!(info.version.as_deref(), Some("1.4.0"));
    /// assert_eq!(info.number, None);
    /// # Ok::<(), catalog::ParseError>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut info = Self::default();
        for (key, value) in properties::parse(text)? {
            let slot = match key.as_str() {
                VERSION_KEY => &mut info.version,
                BRANCH_KEY => &mut info.branch,
                NUMBER_KEY => &mut info.number,
                TIME_KEY => &mut info.time,
                _ => continue,
            };
            *slot = Some(value);
        }
        Ok(info)
    }

    /// Reports whether none of the recognised keys was present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.version.is_none()
            && self.branch.is_none()
            && self.number.is_none()
            && self.time.is_none()
    }

    /// Present fields paired with the identifiers used to announce them.
    ///
    /// `ids` lists the identifiers for version, branch, number and time in that
    /// order.
    pub(crate) fn announcements<'a>(
        &'a self,
        ids: [&'static str; 4],
    ) -> impl Iterator<Item = (&'static str, &'a str)> + 'a {
        let values = [&self.version, &self.branch, &self.number, &self.time];
        ids.into_iter()
            .zip(values)
            .filter_map(|(id, value)| value.as_deref().map(|value| (id, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_every_recognised_key() {
        let info = BuildInfo::parse(
            "project.version=2.0.1\nbuild.branch=release\nbuild.number=8f3a2c\nbuild.time=2024-05-01 10:00\nother=x\n",
        )
        .expect("parses");
        assert_eq!(
            info,
            BuildInfo {
                version: Some("2.0.1".into()),
                branch: Some("release".into()),
                number: Some("8f3a2c".into()),
                time: Some("2024-05-01 10:00".into()),
            }
        );
    }

    #[test]
    fn empty_text_yields_empty_info() {
        assert!(BuildInfo::parse("# nothing\n").expect("parses").is_empty());
    }

    #[test]
    fn announcements_skip_missing_fields() {
        let info = BuildInfo {
            version: Some("1".into()),
            time: Some("now".into()),
            ..BuildInfo::default()
        };
        let pairs: Vec<_> = info.announcements(["A", "B", "C", "D"]).collect();
        assert_eq!(pairs, [("A", "1"), ("D", "now")]);
    }

    #[test]
    fn read_reports_missing_file() {
        let dir = test_support::scratch_dir();
        let error = BuildInfo::read(dir.path().join("absent.properties")).expect_err("must fail");
        assert!(matches!(error, BuildInfoError::Io { .. }));
    }

    #[test]
    fn read_reports_parse_failure_with_path() {
        let dir = test_support::scratch_dir();
        let path = dir.path().join("version.properties");
        fs::write(&path, "project.version = \\u00G0\n").expect("write");
        let error = BuildInfo::read(&path).expect_err("must fail");
        assert!(error.to_string().contains("version.properties"));
        assert!(matches!(error, BuildInfoError::Parse { .. }));
    }
}
