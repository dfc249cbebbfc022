//! Catalog source abstraction.
//!
//! This module defines the [`CatalogSource`] trait that abstracts over where the
//! catalog document comes from. The plugin ships a bundled document compiled
//! into the binary; a JSON file on disk can replace it via configuration.
//!
//! A source is asked once per plugin lifetime, by the worker, and hands back a
//! fully validated [`Catalog`].

use crate::catalog::Catalog;
use crate::domain::error::Result;
use crate::infrastructure::paths;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Catalog document compiled into the plugin.
const BUNDLED_CATALOG: &str = include_str!("../../assets/db.json");

/// Abstraction over catalog origins.
///
/// # Implementations
///
/// - [`BundledSource`]: The document embedded at build time (default)
/// - [`JsonFileSource`]: A JSON file read at load time
pub trait CatalogSource: Send {
    /// Loads and validates the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read, cannot be parsed, or
    /// violates a catalog invariant.
    fn load(&self) -> Result<Catalog>;

    /// Short human-readable description used in logs.
    fn describe(&self) -> String;
}

/// The catalog embedded in the plugin binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl CatalogSource for BundledSource {
    fn load(&self) -> Result<Catalog> {
        Catalog::from_json(BUNDLED_CATALOG)
    }

    fn describe(&self) -> String {
        "bundled".to_string()
    }
}

/// A catalog document stored in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CatalogSource for JsonFileSource {
    fn load(&self) -> Result<Catalog> {
        let _span = tracing::debug_span!("json_catalog_load", path = ?self.path).entered();

        let contents = std::fs::read_to_string(&self.path)?;
        let catalog = Catalog::from_json(&contents)?;

        tracing::debug!(product_count = catalog.len(), "catalog file loaded");
        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!(
            "file:{}",
            paths::strip_host_prefix(&self.path.to_string_lossy())
        )
    }
}

/// Serializable description of a catalog source.
///
/// Travels inside worker messages; the worker turns it into a live
/// [`CatalogSource`] with [`CatalogSourceSpec::open`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CatalogSourceSpec {
    /// Use the embedded document.
    #[default]
    Bundled,
    /// Read the document from a path. `~` is expanded to the sandbox host dir.
    File(String),
}

impl CatalogSourceSpec {
    /// Builds the live source.
    #[must_use]
    pub fn open(&self) -> Box<dyn CatalogSource> {
        match self {
            Self::Bundled => Box::new(BundledSource),
            Self::File(path) => Box::new(JsonFileSource::new(PathBuf::from(paths::expand_tilde(path)))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bundled_catalog_is_valid() {
        let catalog = BundledSource.load().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.categories().iter().any(|c| c == "TYT"));
        assert!(catalog.categories().iter().any(|c| c == "AYT"));
    }

    #[test]
    fn file_source_reads_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"products": [{{"id": 7, "name": "Kitap A", "category": "TYT", "image": "x"}}]}}"#
        )
        .unwrap();

        let source = JsonFileSource::new(file.path().to_path_buf());
        let catalog = source.load().unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(source.describe().starts_with("file:"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("absent.json"));
        assert!(matches!(
            source.load(),
            Err(crate::domain::StorefrontError::Io(_))
        ));
    }

    #[test]
    fn spec_defaults_to_bundled() {
        assert_eq!(CatalogSourceSpec::default(), CatalogSourceSpec::Bundled);
        assert_eq!(CatalogSourceSpec::Bundled.open().describe(), "bundled");
    }
}
