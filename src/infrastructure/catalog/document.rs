// SPDX-License-Identifier: MPL-2.0
//! TOML document model of a catalog and its conversion to domain types.

use crate::application::port::SourceError;
use crate::domain::catalog::{
    AccentColor, Catalog, CatalogError, Item, ItemId, Kind, MediaRef, Mood, MoodId, TagId,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    moods: Vec<MoodEntry>,
    #[serde(default)]
    items: Vec<ItemEntry>,
}

#[derive(Debug, Deserialize)]
struct MoodEntry {
    id: String,
    label: String,
    #[serde(default)]
    emoji: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum KindEntry {
    Manga,
    Manhwa,
}

impl From<KindEntry> for Kind {
    fn from(kind: KindEntry) -> Self {
        match kind {
            KindEntry::Manga => Kind::Manga,
            KindEntry::Manhwa => Kind::Manhwa,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ItemEntry {
    id: String,
    title: String,
    kind: KindEntry,
    moods: Vec<String>,
    tags: Vec<String>,
    #[serde(default)]
    description: String,
    accent_color: String,
    preview: String,
}

impl ItemEntry {
    fn into_item(self) -> Result<Item, CatalogError> {
        let id = ItemId::new(self.id);
        let accent_color = self
            .accent_color
            .parse::<AccentColor>()
            .map_err(|_| CatalogError::InvalidColor {
                item: id.clone(),
                value: self.accent_color.clone(),
            })?;

        Ok(Item {
            id,
            title: self.title,
            description: self.description,
            kind: self.kind.into(),
            moods: self.moods.into_iter().map(MoodId::new).collect(),
            tags: self.tags.into_iter().map(TagId::new).collect(),
            accent_color,
            preview: MediaRef::new(self.preview),
        })
    }
}

/// Parses a catalog TOML document and validates it.
///
/// # Errors
///
/// Returns [`SourceError::Malformed`] when the text is not a catalog document
/// and [`SourceError::Invalid`] when it breaks a catalog rule.
pub fn parse_catalog(text: &str) -> Result<Catalog, SourceError> {
    let document: CatalogDocument =
        toml::from_str(text).map_err(|err| SourceError::Malformed(err.to_string()))?;

    let moods = document
        .moods
        .into_iter()
        .map(|entry| Mood {
            id: MoodId::new(entry.id),
            label: entry.label,
            emoji: entry.emoji,
        })
        .collect();
    let tags = document.tags.into_iter().map(TagId::new).collect();
    let items = document
        .items
        .into_iter()
        .map(ItemEntry::into_item)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Catalog::new(items, moods, tags)?)
}
