// SPDX-License-Identifier: MPL-2.0
//! Selection criteria and the filter engine.

pub mod filter;
mod tag_set;

pub use filter::{filter, ItemFilter};
pub use tag_set::TagSet;
