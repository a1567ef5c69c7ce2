// SPDX-License-Identifier: MPL-2.0
//! Catalog source port definition.
//!
//! This module defines the [`CatalogSource`] trait. Infrastructure adapters
//! (bundled asset, user file) implement it; the app picks one at boot.

use crate::domain::catalog::{Catalog, CatalogError};
use std::fmt;

// =============================================================================
// SourceError
// =============================================================================

/// Errors that can occur while loading a catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceError {
    /// The underlying data could not be read.
    Unavailable(String),

    /// The data was read but is not a valid catalog document.
    Malformed(String),

    /// The document parsed but violates a catalog rule.
    Invalid(CatalogError),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Unavailable(msg) => write!(f, "Catalog unavailable: {msg}"),
            SourceError::Malformed(msg) => write!(f, "Malformed catalog: {msg}"),
            SourceError::Invalid(err) => write!(f, "Invalid catalog: {err}"),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<CatalogError> for SourceError {
    fn from(err: CatalogError) -> Self {
        SourceError::Invalid(err)
    }
}

// =============================================================================
// CatalogSource Trait
// =============================================================================

/// Port for obtaining the read-only catalog.
///
/// A source is consulted once per run; the returned [`Catalog`] is then
/// shared for the whole session.
pub trait CatalogSource: Send + Sync {
    /// Loads and validates the catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] if the data cannot be read, does not parse,
    /// or breaks a catalog invariant (duplicate ids, empty moods, ...).
    fn load(&self) -> Result<Catalog, SourceError>;

    /// Human-readable origin, used in logs and warnings.
    fn describe(&self) -> String;
}
