// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`catalog`]: Where the catalog comes from (bundled asset, user file)
//! - [`preview`]: Preview clip playback and the ambient background
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no TOML types)
//! - Methods are synchronous; the catalog is loaded once at boot
//!
//! # Example
//!
//! ```ignore
//! use manga_mood::application::port::{CatalogSource, PreviewPlayer};
//!
//! fn boot(source: &impl CatalogSource) -> usize {
//!     source.load().map(|catalog| catalog.len()).unwrap_or(0)
//! }
//! ```

pub mod catalog;
pub mod preview;

// Re-export main types for convenience
pub use catalog::{CatalogSource, SourceError};
pub use preview::PreviewPlayer;
