//! crates/catalog/src/combined.rs
//! Ordered merge of several catalog sources into one lookup.

use std::collections::HashMap;

use crate::error::CatalogError;
use crate::source::{Catalog, CatalogLoader};
use crate::template::format_template;

/// A source that could not be merged, together with the reason.
#[derive(Debug)]
pub struct SourceFailure {
    /// Catalog name as requested.
    pub name: String,
    /// Why loading failed.
    pub error: CatalogError,
}

/// Flat key → template view over an ordered list of catalog sources.
///
/// Sources are merged in list order and a later source overwrites the entry
/// of an earlier one for the same key, so base catalogs go first and
/// overrides last. The merged key set is the union of every merged source's
/// keys. The view is immutable after construction and safe to share between
/// threads without locking.
#[derive(Clone, Debug, Default)]
pub struct CombinedCatalog {
    entries: HashMap<String, String>,
    sources: Vec<String>,
}

impl CombinedCatalog {
    /// Loads each name through `loader` in order and merges the results.
    ///
    /// A source that fails to load is skipped and reported in the returned
    /// failure list; the remaining sources are still merged. The caller
    /// decides whether any of those failures is fatal.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog::{Catalog, CatalogError, CombinedCatalog};
    ///
    /// let loader = |name: &str| -> Result<Catalog, CatalogError> {
    ///     match name {
    ///         "base" => Ok(Catalog::from_pairs(name, [("K", "base"), ("A", "only base")])),
    ///         "override" => Ok(Catalog::from_pairs(name, [("K", "override")])),
    ///         _ => Err(CatalogError::NotFound { name: name.to_string() }),
    ///     }
    /// };
    ///
    /// let (combined, failures) = CombinedCatalog::build(&loader, ["base", "missing", "override"]);
    /// assert_eq!(combined.get("K"), Some("override"));
    /// assert_eq!(combined.get("A"), Some("only base"));
    /// assert_eq!(failures.len(), 1);
    /// ```
    pub fn build<L, I, S>(loader: &L, names: I) -> (Self, Vec<SourceFailure>)
    where
        L: CatalogLoader + ?Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalogs = Vec::new();
        let mut failures = Vec::new();

        for name in names {
            let name = name.as_ref();
            match loader.load(name) {
                Ok(catalog) => catalogs.push(catalog),
                Err(error) => {
                    tracing::warn!(catalog = name, %error, "skipping message catalog");
                    failures.push(SourceFailure {
                        name: name.to_owned(),
                        error,
                    });
                }
            }
        }

        (Self::from_catalogs(catalogs), failures)
    }

    /// Merges already-loaded catalogs in iteration order.
    pub fn from_catalogs<I>(catalogs: I) -> Self
    where
        I: IntoIterator<Item = Catalog>,
    {
        let mut merged = Self::default();
        for catalog in catalogs {
            merged.sources.push(catalog.name().to_owned());
            merged.entries.extend(catalog.into_entries());
        }
        merged
    }

    /// Looks up the merged template for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Reports whether any merged source defines `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Resolves `key` and substitutes `args` into the template.
    ///
    /// Returns `None` when no source defines `key`.
    #[must_use]
    pub fn format<S>(&self, key: &str, args: &[S]) -> Option<String>
    where
        S: AsRef<str>,
    {
        self.get(key).map(|template| format_template(template, args))
    }

    /// Every merged key, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Names of the sources that were merged, in merge order.
    #[must_use]
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether no source contributed any entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
