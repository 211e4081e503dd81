#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/catalog/src/lib.rs
//!
//! # Overview
//!
//! `catalog` resolves human-readable message templates from stable
//! identifiers such as `I001` or `D200`. Templates live in catalog sources
//! written in a properties format; several sources are merged into one
//! [`CombinedCatalog`] so that deployments can override individual entries
//! without copying the whole bundled catalog.
//!
//! # Design
//!
//! - [`Catalog`] is one immutable key → template mapping.
//! - [`CatalogLoader`] turns a name into a [`Catalog`]. [`CatalogLocator`]
//!   checks compiled-in resources, then search directories, then the name as
//!   a path.
//! - [`CombinedCatalog`] merges sources in order with last-source-wins
//!   precedence and reports failed sources instead of aborting.
//! - [`format_template`] substitutes positional `{n}` placeholders.
//!
//! # Invariants
//!
//! - For a key defined by several sources the merged value comes from the
//!   last source in the list that defines it.
//! - A missing or malformed source never prevents the remaining sources from
//!   being merged.
//! - Formatting never fails; uncovered placeholders stay in the output.
//!
//! # Examples
//!
//! ```
//! use catalog::{CatalogLocator, CombinedCatalog, DEFAULT_CATALOG, ids};
//!
//! let locator = CatalogLocator::new();
//! let (catalog, failures) = CombinedCatalog::build(&locator, [DEFAULT_CATALOG]);
//! assert!(failures.is_empty());
//!
//! let text = catalog.format(ids::debug::DEBUG_OUT, &["answer", "42"]);
//! assert_eq!(text.as_deref(), Some("answer: 42"));
//! ```

mod combined;
mod error;
pub mod ids;
pub mod properties;
mod source;
mod template;

pub use combined::{CombinedCatalog, SourceFailure};
pub use error::{CatalogError, ParseError};
pub use source::{CATALOG_EXTENSION, Catalog, CatalogLoader, CatalogLocator, DEFAULT_CATALOG};
pub use template::format_template;
