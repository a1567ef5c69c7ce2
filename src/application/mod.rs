// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`preview_sync`]: Keeps a [`PreviewPlayer`](port::PreviewPlayer) in step
//!   with the session's preview state
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services

pub mod port;
pub mod preview_sync;

pub use preview_sync::PreviewSync;
