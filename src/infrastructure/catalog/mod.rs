// SPDX-License-Identifier: MPL-2.0
//! Catalog sources: the bundled asset and user-supplied files.

mod document;

pub use document::parse_catalog;

use crate::application::port::{CatalogSource, SourceError};
use crate::domain::catalog::Catalog;
use rust_embed::RustEmbed;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct Asset;

/// File name of the bundled catalog inside `assets/catalog/`.
pub const BUNDLED_CATALOG: &str = "catalog.toml";

/// The catalog compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl CatalogSource for EmbeddedCatalog {
    fn load(&self) -> Result<Catalog, SourceError> {
        let file = Asset::get(BUNDLED_CATALOG)
            .ok_or_else(|| SourceError::Unavailable(format!("missing asset {BUNDLED_CATALOG}")))?;
        let text = std::str::from_utf8(file.data.as_ref())
            .map_err(|err| SourceError::Malformed(err.to_string()))?;
        parse_catalog(text)
    }

    fn describe(&self) -> String {
        "bundled catalog".to_string()
    }
}

/// A catalog TOML file on disk.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalog {
    fn load(&self) -> Result<Catalog, SourceError> {
        let text = std::fs::read_to_string(&self.path)
            .map_err(|err| SourceError::Unavailable(format!("{}: {err}", self.path.display())))?;
        parse_catalog(&text)
    }

    fn describe(&self) -> String {
        format!("catalog file {}", self.path.display())
    }
}

/// Loads the catalog, preferring `path` and falling back to the bundled one.
///
/// Undeclared mood/tag references are logged, not rejected. Returns the
/// catalog and, when the fallback was taken, a warning for the user.
///
/// # Errors
///
/// Fails only if the bundled catalog itself cannot be loaded.
pub fn load_with_fallback(path: Option<&Path>) -> Result<(Catalog, Option<String>), SourceError> {
    let mut warning = None;

    if let Some(path) = path {
        let source = FileCatalog::new(path);
        match load_from(&source) {
            Ok(catalog) => return Ok((catalog, None)),
            Err(err) => {
                tracing::warn!(source = %source.describe(), error = %err, "falling back to bundled catalog");
                warning = Some(format!("Could not load {}: {err}", source.describe()));
            }
        }
    }

    load_from(&EmbeddedCatalog).map(|catalog| (catalog, warning))
}

/// Loads from one source, logging what was found.
///
/// # Errors
///
/// Propagates the source's error.
pub fn load_from(source: &dyn CatalogSource) -> Result<Catalog, SourceError> {
    let catalog = source.load()?;
    for reference in catalog.undeclared_references() {
        tracing::warn!(source = %source.describe(), "{reference}");
    }
    tracing::info!(
        source = %source.describe(),
        items = catalog.len(),
        moods = catalog.moods().len(),
        tags = catalog.tags().len(),
        "catalog loaded"
    );
    Ok(catalog)
}
