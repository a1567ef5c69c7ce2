// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`catalog`]: Bundled and file-based catalogs (implement [`CatalogSource`])
//! - [`preview`]: Logging preview player (implements [`PreviewPlayer`])
//!
//! [`CatalogSource`]: crate::application::port::CatalogSource
//! [`PreviewPlayer`]: crate::application::port::PreviewPlayer

pub mod catalog;
pub mod preview;

// Re-export main types for convenience
pub use catalog::{load_with_fallback, EmbeddedCatalog, FileCatalog};
pub use preview::LoggingPreviewPlayer;
