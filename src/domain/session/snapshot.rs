// SPDX-License-Identifier: MPL-2.0
//! Read-only view of a session, handed to the presentation layer.

use super::Screen;
use crate::domain::catalog::{AccentColor, Catalog, Item, ItemId, Mood, MoodId};
use crate::domain::selection::TagSet;

/// Everything a view needs to render the current state.
///
/// Borrowed from the session; it cannot be used to mutate it.
#[derive(Debug, Clone)]
pub struct Snapshot<'a> {
    pub catalog: &'a Catalog,
    pub screen: Screen,
    pub selected_mood: Option<&'a MoodId>,
    pub selected_tags: &'a TagSet,
    pub active_item: Option<&'a ItemId>,
    pub preview_item: Option<&'a ItemId>,
    /// Items matching the current mood and tags, in catalog order.
    pub filtered_items: Vec<&'a Item>,
    pub accent_color: AccentColor,
}

impl<'a> Snapshot<'a> {
    /// The selected mood resolved against the vocabulary.
    #[must_use]
    pub fn mood(&self) -> Option<&'a Mood> {
        self.selected_mood.and_then(|id| self.catalog.mood(id))
    }

    /// The item whose preview is open, if it resolves.
    #[must_use]
    pub fn preview(&self) -> Option<&'a Item> {
        self.preview_item.and_then(|id| self.catalog.item(id))
    }

    #[must_use]
    pub fn is_preview_open(&self) -> bool {
        self.preview().is_some()
    }

    #[must_use]
    pub fn is_highlighted(&self, id: &ItemId) -> bool {
        self.active_item == Some(id)
    }

    #[must_use]
    pub fn is_previewing(&self, id: &ItemId) -> bool {
        self.preview_item == Some(id)
    }

    /// `false` when the filters leave nothing to show.
    #[must_use]
    pub fn has_matches(&self) -> bool {
        !self.filtered_items.is_empty()
    }
}
