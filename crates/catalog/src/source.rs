//! crates/catalog/src/source.rs
//! A single catalog source and the loaders that locate one by name.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::CatalogError;
use crate::properties;

/// Name under which the bundled default catalog is registered.
pub const DEFAULT_CATALOG: &str = "messages";

/// File extension appended to catalog names when searching directories.
pub const CATALOG_EXTENSION: &str = "properties";

const DEFAULT_CATALOG_TEXT: &str = include_str!("../resources/messages.properties");

/// One loaded key → template mapping.
///
/// A catalog is immutable once built. Its name records where it came from and
/// is only used for diagnostics.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Catalog {
    name: String,
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Builds a catalog from `(key, template)` pairs; later pairs overwrite earlier ones.
    pub fn from_pairs<I, K, V>(name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            entries: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Parses catalog text in properties format.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self, CatalogError> {
        let name = name.into();
        match properties::parse(text) {
            Ok(pairs) => Ok(Self::from_pairs(name, pairs)),
            Err(source) => Err(CatalogError::Parse { name, source }),
        }
    }

    /// Returns the bundled default catalog.
    pub fn bundled_default() -> Result<Self, CatalogError> {
        Self::parse(DEFAULT_CATALOG, DEFAULT_CATALOG_TEXT)
    }

    /// Name or location the catalog was loaded from.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up the template stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Iterates over every key in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over every `(key, template)` pair in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_entries(self) -> HashMap<String, String> {
        self.entries
    }
}

/// Resolves a catalog name to a loaded [`Catalog`].
///
/// Closures of the form `Fn(&str) -> Result<Catalog, CatalogError>` implement
/// the trait, which keeps ad-hoc loaders in tests short.
pub trait CatalogLoader {
    /// Loads the catalog registered under `name`.
    fn load(&self, name: &str) -> Result<Catalog, CatalogError>;
}

impl<F> CatalogLoader for F
where
    F: Fn(&str) -> Result<Catalog, CatalogError>,
{
    fn load(&self, name: &str) -> Result<Catalog, CatalogError> {
        self(name)
    }
}

/// Default [`CatalogLoader`]: bundled resources first, then search roots, then
/// the name as a literal path.
///
/// For a name `n` and a root `r` the candidate file is `r/n.properties`
/// (or `r/n` when `n` already carries the extension).
#[derive(Clone, Debug)]
pub struct CatalogLocator {
    bundled: Vec<(String, &'static str)>,
    roots: Vec<PathBuf>,
}

impl CatalogLocator {
    /// Creates a locator with no bundled catalogs and no search roots.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            bundled: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Creates a locator that knows the bundled default catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::empty().with_bundled(DEFAULT_CATALOG, DEFAULT_CATALOG_TEXT)
    }

    /// Registers compiled-in catalog text under `name`.
    ///
    /// Registering the same name twice replaces the earlier text.
    #[must_use]
    pub fn with_bundled(mut self, name: impl Into<String>, text: &'static str) -> Self {
        let name = name.into();
        self.bundled.retain(|(existing, _)| *existing != name);
        self.bundled.push((name, text));
        self
    }

    /// Appends a directory searched for `<name>.properties` files.
    #[must_use]
    pub fn with_search_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }

    /// Directories searched, in order.
    #[must_use]
    pub fn search_roots(&self) -> &[PathBuf] {
        &self.roots
    }

    fn bundled(&self, name: &str) -> Option<&'static str> {
        self.bundled
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, text)| *text)
    }

    fn candidates(&self, name: &str) -> Vec<PathBuf> {
        let has_extension = Path::new(name)
            .extension()
            .is_some_and(|ext| ext == CATALOG_EXTENSION);
        let file_name = if has_extension {
            PathBuf::from(name)
        } else {
            PathBuf::from(format!("{name}.{CATALOG_EXTENSION}"))
        };

        let mut candidates: Vec<PathBuf> =
            self.roots.iter().map(|root| root.join(&file_name)).collect();
        candidates.push(PathBuf::from(name));
        candidates
    }
}

impl Default for CatalogLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogLoader for CatalogLocator {
    fn load(&self, name: &str) -> Result<Catalog, CatalogError> {
        if let Some(text) = self.bundled(name) {
            let catalog = Catalog::parse(name, text)?;
            tracing::debug!(catalog = name, entries = catalog.len(), "loaded bundled catalog");
            return Ok(catalog);
        }

        for path in self.candidates(name) {
            if !path.is_file() {
                continue;
            }
            let text = match fs::read_to_string(&path) {
                Ok(text) => text,
                Err(error) if error.kind() == io::ErrorKind::NotFound => continue,
                Err(source) => return Err(CatalogError::Io { path, source }),
            };
            let catalog = Catalog::parse(path.display().to_string(), &text)?;
            tracing::debug!(
                catalog = name,
                path = %path.display(),
                entries = catalog.len(),
                "loaded catalog file"
            );
            return Ok(catalog);
        }

        Err(CatalogError::NotFound {
            name: name.to_owned(),
        })
    }
}
