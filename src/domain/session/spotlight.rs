// SPDX-License-Identifier: MPL-2.0
//! Highlight and preview tracking.
//!
//! One item at most may be highlighted and one item at most may have its
//! preview open. Both are single-valued fields, so opening a second preview
//! implicitly closes the first.

use crate::domain::catalog::{AccentColor, Catalog, Item, ItemId, DEFAULT_ACCENT};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spotlight {
    highlighted: Option<ItemId>,
    previewing: Option<ItemId>,
}

impl Spotlight {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlights `id`, or clears the highlight if `id` is already highlighted.
    pub fn toggle_highlight(&mut self, id: ItemId) {
        if self.highlighted.as_ref() == Some(&id) {
            self.highlighted = None;
        } else {
            self.highlighted = Some(id);
        }
    }

    pub fn clear_highlight(&mut self) {
        self.highlighted = None;
    }

    /// Opens the preview for `id`, replacing any open preview.
    pub fn open_preview(&mut self, id: ItemId) {
        self.previewing = Some(id);
    }

    pub fn close_preview(&mut self) {
        self.previewing = None;
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<&ItemId> {
        self.highlighted.as_ref()
    }

    #[must_use]
    pub fn previewing(&self) -> Option<&ItemId> {
        self.previewing.as_ref()
    }

    #[must_use]
    pub fn is_preview_open(&self) -> bool {
        self.previewing.is_some()
    }

    /// The highlighted item, or `None` if unset or no longer in the catalog.
    #[must_use]
    pub fn resolved_highlight<'a>(&self, catalog: &'a Catalog) -> Option<&'a Item> {
        self.highlighted.as_ref().and_then(|id| catalog.item(id))
    }

    /// The previewed item, or `None` if unset or no longer in the catalog.
    #[must_use]
    pub fn resolved_preview<'a>(&self, catalog: &'a Catalog) -> Option<&'a Item> {
        self.previewing.as_ref().and_then(|id| catalog.item(id))
    }

    /// Accent of the highlighted item, falling back to [`DEFAULT_ACCENT`].
    #[must_use]
    pub fn accent_color(&self, catalog: &Catalog) -> AccentColor {
        self.resolved_highlight(catalog)
            .map_or(DEFAULT_ACCENT, |item| item.accent_color)
    }
}
