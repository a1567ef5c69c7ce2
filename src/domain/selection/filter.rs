// SPDX-License-Identifier: MPL-2.0
//! Catalog filtering by mood and tags.
//!
//! # Matching rules
//!
//! - Mood: when set, an item must list it among its moods.
//! - Tags: when non-empty, an item must carry *at least one* selected tag
//!   (OR across tags). An empty selection imposes no tag constraint.
//!
//! Both criteria combine with AND. Survivors keep catalog order.

use super::TagSet;
use crate::domain::catalog::{Item, MoodId};

/// Mood and tag criteria applied to catalog items.
///
/// Held by the session as the visitor's current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    /// Required mood. `None` means any mood.
    pub mood: Option<MoodId>,
    /// Accepted tags. Empty means any tags.
    pub tags: TagSet,
}

impl ItemFilter {
    /// Creates a filter with no active criteria (matches every item).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        item_matches(item, self.mood.as_ref(), &self.tags)
    }

    /// Returns the matching items in their original order.
    #[must_use]
    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        filter(items, self.mood.as_ref(), &self.tags)
    }

    pub fn clear(&mut self) {
        self.mood = None;
        self.tags.clear();
    }
}

fn item_matches(item: &Item, mood: Option<&MoodId>, tags: &TagSet) -> bool {
    let mood_ok = mood.is_none_or(|mood| item.has_mood(mood));
    let tags_ok = tags.is_empty() || item.has_any_tag(tags.iter());
    mood_ok && tags_ok
}

/// Filters `items` by an optional mood and a tag selection.
#[must_use]
pub fn filter<'a>(items: &'a [Item], mood: Option<&MoodId>, tags: &TagSet) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| item_matches(item, mood, tags))
        .collect()
}
