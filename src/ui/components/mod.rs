// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across screens.
//!
//! Components are pure functions of the data they show; they emit session
//! [`Intent`](crate::domain::session::Intent)s and keep no state.
//!
//! # Components
//!
//! - [`mood_card`] - Emoji + label card on the mood screen
//! - [`tag_pill`] - `#tag` toggle pill
//! - [`item_card`] - Result card with badges, tags and the preview button
//! - [`preview_modal`] - Overlay showing the open preview
//! - [`empty_state`] - "No matches" panel

pub mod empty_state;
pub mod item_card;
pub mod mood_card;
pub mod preview_modal;
pub mod tag_pill;
