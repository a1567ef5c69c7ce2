// SPDX-License-Identifier: MPL-2.0
//! Catalog entries, vocabularies and the read-only catalog.

use super::color::AccentColor;
use super::ids::{ItemId, MediaRef, MoodId, TagId};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

/// Publication category of a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Manga,
    Manhwa,
}

impl Kind {
    /// Display label shown on item badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Kind::Manga => "Manga",
            Kind::Manhwa => "Manhwa",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single catalog entry.
///
/// `moods` and `tags` keep the order they were declared in, which is the
/// order cards display them in. Membership checks go through [`Item::has_mood`]
/// and [`Item::has_tag`].
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub kind: Kind,
    pub moods: Vec<MoodId>,
    pub tags: Vec<TagId>,
    pub accent_color: AccentColor,
    pub preview: MediaRef,
}

impl Item {
    #[must_use]
    pub fn has_mood(&self, mood: &MoodId) -> bool {
        self.moods.contains(mood)
    }

    #[must_use]
    pub fn has_tag(&self, tag: &TagId) -> bool {
        self.tags.contains(tag)
    }

    /// Returns `true` if the item carries at least one of the given tags.
    #[must_use]
    pub fn has_any_tag<'a>(&self, mut tags: impl Iterator<Item = &'a TagId>) -> bool {
        tags.any(|tag| self.has_tag(tag))
    }
}

/// A mood from the mood vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mood {
    pub id: MoodId,
    pub label: String,
    pub emoji: String,
}

/// Why a set of entries could not form a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    DuplicateItem(ItemId),
    DuplicateMood(MoodId),
    DuplicateTag(TagId),
    /// An item declares no moods.
    NoMoods(ItemId),
    /// An item declares no tags.
    NoTags(ItemId),
    /// An item's accent color could not be parsed.
    InvalidColor { item: ItemId, value: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateItem(id) => write!(f, "duplicate item id '{id}'"),
            CatalogError::DuplicateMood(id) => write!(f, "duplicate mood id '{id}'"),
            CatalogError::DuplicateTag(id) => write!(f, "duplicate tag '{id}'"),
            CatalogError::NoMoods(id) => write!(f, "item '{id}' has no moods"),
            CatalogError::NoTags(id) => write!(f, "item '{id}' has no tags"),
            CatalogError::InvalidColor { item, value } => {
                write!(f, "item '{item}' has invalid accent color '{value}'")
            }
        }
    }
}

/// A reference from an item to a mood or tag missing from the vocabularies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndeclaredReference {
    Mood { item: ItemId, mood: MoodId },
    Tag { item: ItemId, tag: TagId },
}

impl fmt::Display for UndeclaredReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndeclaredReference::Mood { item, mood } => {
                write!(f, "item '{item}' uses undeclared mood '{mood}'")
            }
            UndeclaredReference::Tag { item, tag } => {
                write!(f, "item '{item}' uses undeclared tag '{tag}'")
            }
        }
    }
}

/// The static, ordered catalog plus its mood and tag vocabularies.
///
/// Built once at startup and never mutated.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    moods: Vec<Mood>,
    tags: Vec<TagId>,
    index: HashMap<ItemId, usize>,
}

impl Catalog {
    /// Builds a catalog, checking identifier uniqueness and that every item
    /// has at least one mood and one tag.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] encountered.
    pub fn new(items: Vec<Item>, moods: Vec<Mood>, tags: Vec<TagId>) -> Result<Self, CatalogError> {
        let mut seen_moods = HashSet::new();
        for mood in &moods {
            if !seen_moods.insert(&mood.id) {
                return Err(CatalogError::DuplicateMood(mood.id.clone()));
            }
        }

        let mut seen_tags = HashSet::new();
        for tag in &tags {
            if !seen_tags.insert(tag) {
                return Err(CatalogError::DuplicateTag(tag.clone()));
            }
        }

        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if item.moods.is_empty() {
                return Err(CatalogError::NoMoods(item.id.clone()));
            }
            if item.tags.is_empty() {
                return Err(CatalogError::NoTags(item.id.clone()));
            }
            if index.insert(item.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateItem(item.id.clone()));
            }
        }

        Ok(Self {
            items,
            moods,
            tags,
            index,
        })
    }

    /// Items in catalog order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Mood vocabulary in declaration order.
    #[must_use]
    pub fn moods(&self) -> &[Mood] {
        &self.moods
    }

    /// Tag vocabulary in declaration order.
    #[must_use]
    pub fn tags(&self) -> &[TagId] {
        &self.tags
    }

    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.index.get(id).map(|&position| &self.items[position])
    }

    #[must_use]
    pub fn mood(&self, id: &MoodId) -> Option<&Mood> {
        self.moods.iter().find(|mood| &mood.id == id)
    }

    #[must_use]
    pub fn has_tag(&self, id: &TagId) -> bool {
        self.tags.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lists item moods and tags that are not part of the vocabularies.
    ///
    /// Such references still participate in filtering; they just cannot be
    /// selected from the UI.
    #[must_use]
    pub fn undeclared_references(&self) -> Vec<UndeclaredReference> {
        let moods: BTreeSet<&MoodId> = self.moods.iter().map(|mood| &mood.id).collect();
        let tags: BTreeSet<&TagId> = self.tags.iter().collect();

        let mut found = Vec::new();
        for item in &self.items {
            for mood in item.moods.iter().filter(|mood| !moods.contains(mood)) {
                found.push(UndeclaredReference::Mood {
                    item: item.id.clone(),
                    mood: mood.clone(),
                });
            }
            for tag in item.tags.iter().filter(|tag| !tags.contains(tag)) {
                found.push(UndeclaredReference::Tag {
                    item: item.id.clone(),
                    tag: tag.clone(),
                });
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::test_support::{item, mood};

    #[test]
    fn lookup_by_id_finds_items() {
        let catalog = Catalog::new(
            vec![item("a", &["dark"], &["revenge"]), item("b", &["funny"], &["rage"])],
            vec![mood("dark"), mood("funny")],
            vec!["revenge".into(), "rage".into()],
        )
        .expect("valid catalog");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.item(&"b".into()).map(|i| i.title.as_str()), Some("Title b"));
        assert!(catalog.item(&"missing".into()).is_none());
        assert!(catalog.mood(&"dark".into()).is_some());
        assert!(catalog.has_tag(&"rage".into()));
        assert!(!catalog.has_tag(&"tragic".into()));
    }

    #[test]
    fn duplicate_item_ids_are_rejected() {
        let result = Catalog::new(
            vec![item("a", &["dark"], &["x"]), item("a", &["dark"], &["x"])],
            vec![mood("dark")],
            vec!["x".into()],
        );
        assert_eq!(result.unwrap_err(), CatalogError::DuplicateItem("a".into()));
    }

    #[test]
    fn items_need_moods_and_tags() {
        let no_moods = Catalog::new(vec![item("a", &[], &["x"])], vec![], vec![]);
        assert_eq!(no_moods.unwrap_err(), CatalogError::NoMoods("a".into()));

        let no_tags = Catalog::new(vec![item("a", &["dark"], &[])], vec![], vec![]);
        assert_eq!(no_tags.unwrap_err(), CatalogError::NoTags("a".into()));
    }

    #[test]
    fn duplicate_vocabulary_entries_are_rejected() {
        let moods = Catalog::new(vec![], vec![mood("dark"), mood("dark")], vec![]);
        assert_eq!(moods.unwrap_err(), CatalogError::DuplicateMood("dark".into()));

        let tags = Catalog::new(vec![], vec![], vec!["x".into(), "x".into()]);
        assert_eq!(tags.unwrap_err(), CatalogError::DuplicateTag("x".into()));
    }

    #[test]
    fn undeclared_references_are_listed() {
        let catalog = Catalog::new(
            vec![item("a", &["dark", "cozy"], &["revenge", "slice of life"])],
            vec![mood("dark")],
            vec!["revenge".into()],
        )
        .expect("valid catalog");

        let found = catalog.undeclared_references();
        assert_eq!(found.len(), 2);
        assert!(found.contains(&UndeclaredReference::Mood {
            item: "a".into(),
            mood: "cozy".into()
        }));
        assert!(found.contains(&UndeclaredReference::Tag {
            item: "a".into(),
            tag: "slice of life".into()
        }));
    }

    #[test]
    fn item_tag_helpers() {
        let entry = item("a", &["dark"], &["revenge", "tragic"]);
        let wanted = [TagId::from("rage"), TagId::from("tragic")];
        assert!(entry.has_any_tag(wanted.iter()));
        assert!(!entry.has_any_tag([TagId::from("rage")].iter()));
        assert!(entry.has_mood(&"dark".into()));
    }
}
