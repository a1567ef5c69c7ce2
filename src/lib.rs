// SPDX-License-Identifier: MPL-2.0
//! `manga_mood` is a mood-based manga and manhwa discovery app built with
//! the Iced GUI framework.
//!
//! The reader picks a mood, narrows it with tags and browses matching
//! stories with highlight and preview. The discovery state machine lives in
//! [`domain::session`] and is independent of the UI.

#![doc(html_root_url = "https://docs.rs/manga_mood/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
