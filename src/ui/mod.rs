// SPDX-License-Identifier: MPL-2.0
//! User interface: screens, components and styling.
//!
//! Views follow the Elm-style "state down, messages up" pattern. Screens
//! render a read-only session snapshot and emit session intents.
//!
//! # Screens
//!
//! - [`screens`] - Landing, mood selection, tag refinement and results
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (cards, pills, preview modal)
//! - [`motion`] - Screen hold and staggered fade-ins
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and color schemes
//! - [`notifications`] - Toast notification system for user feedback

pub mod components;
pub mod design_tokens;
pub mod motion;
pub mod notifications;
pub mod screens;
pub mod styles;
pub mod theming;
