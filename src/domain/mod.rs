// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core discovery rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`catalog`]: Catalog entries and vocabularies ([`Item`](catalog::Item),
//!   [`Mood`](catalog::Mood), [`Catalog`](catalog::Catalog),
//!   [`AccentColor`](catalog::AccentColor))
//! - [`selection`]: Mood/tag filtering ([`TagSet`](selection::TagSet),
//!   [`ItemFilter`](selection::ItemFilter))
//! - [`session`]: Navigation state machine ([`Session`](session::Session),
//!   [`Intent`](session::Intent), [`Snapshot`](session::Snapshot))

pub mod catalog;
pub mod selection;
pub mod session;
