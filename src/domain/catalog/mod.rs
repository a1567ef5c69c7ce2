// SPDX-License-Identifier: MPL-2.0
//! Catalog domain types.
//!
//! The catalog is a read-only, ordered list of titles together with the mood
//! and tag vocabularies the UI offers for selection. Loading it from disk or
//! from bundled assets is an infrastructure concern.

mod color;
mod ids;
mod types;

pub use color::{AccentColor, InvalidColor, DEFAULT_ACCENT};
pub use ids::{ItemId, MediaRef, MoodId, TagId};
pub use types::{Catalog, CatalogError, Item, Kind, Mood, UndeclaredReference};

/// Builders shared by domain unit tests.
#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn item(id: &str, moods: &[&str], tags: &[&str]) -> Item {
        Item {
            id: ItemId::from(id),
            title: format!("Title {id}"),
            description: format!("Description of {id}"),
            kind: Kind::Manga,
            moods: moods.iter().map(|m| MoodId::from(*m)).collect(),
            tags: tags.iter().map(|t| TagId::from(*t)).collect(),
            accent_color: DEFAULT_ACCENT,
            preview: MediaRef::new(format!("videos/{id}.mp4")),
        }
    }

    pub fn mood(id: &str) -> Mood {
        Mood {
            id: MoodId::from(id),
            label: id.to_uppercase(),
            emoji: String::from("*"),
        }
    }

    /// Catalog whose vocabularies cover every mood and tag its items use,
    /// plus any extra tags given.
    pub fn catalog(items: Vec<Item>, extra_tags: &[&str]) -> Catalog {
        let mut moods: Vec<Mood> = Vec::new();
        let mut tags: Vec<TagId> = Vec::new();
        for entry in &items {
            for m in &entry.moods {
                if !moods.iter().any(|known| &known.id == m) {
                    moods.push(mood(m.as_str()));
                }
            }
            for t in &entry.tags {
                if !tags.contains(t) {
                    tags.push(t.clone());
                }
            }
        }
        for t in extra_tags {
            let tag = TagId::from(*t);
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        Catalog::new(items, moods, tags).expect("test catalog is valid")
    }
}
