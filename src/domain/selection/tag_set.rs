// SPDX-License-Identifier: MPL-2.0
//! Set of selected tags with toggle semantics.

use crate::domain::catalog::TagId;
use std::collections::BTreeSet;

/// The tags a visitor has selected.
///
/// Backed by an ordered set, so duplicates cannot exist and toggling the same
/// tag twice always restores the previous selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet(BTreeSet<TagId>);

impl TagSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the tag if absent, removes it if present.
    ///
    /// Returns `true` if the tag is selected after the call.
    pub fn toggle(&mut self, tag: TagId) -> bool {
        if self.0.remove(&tag) {
            false
        } else {
            self.0.insert(tag);
            true
        }
    }

    #[must_use]
    pub fn contains(&self, tag: &TagId) -> bool {
        self.0.contains(tag)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterates the selected tags in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &TagId> {
        self.0.iter()
    }
}

impl FromIterator<TagId> for TagSet {
    fn from_iter<I: IntoIterator<Item = TagId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a TagId;
    type IntoIter = std::collections::btree_set::Iter<'a, TagId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
