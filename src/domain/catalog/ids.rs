// SPDX-License-Identifier: MPL-2.0
//! Identifier newtypes for catalog entries and vocabularies.
//!
//! Moods, tags and items are all keyed by strings in the catalog file. Wrapping
//! them keeps a mood id from being passed where a tag id is expected.

use std::borrow::Borrow;
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from any string-like value.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Stable identifier of a catalog item (e.g. `vinland-saga`).
    ItemId
);

define_id!(
    /// Identifier of an emotional-tone mood (e.g. `dark`).
    MoodId
);

define_id!(
    /// Identifier of a thematic tag (e.g. `plot twist`).
    TagId
);

/// Opaque reference to playable preview media.
///
/// The core never interprets it; the preview player resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaRef(String);

impl MediaRef {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn ids_compare_by_value() {
        assert_eq!(MoodId::from("dark"), MoodId::new(String::from("dark")));
        assert_ne!(TagId::from("rage"), TagId::from("revenge"));
    }

    #[test]
    fn ids_can_be_looked_up_by_str() {
        let set: BTreeSet<TagId> = [TagId::from("plot twist")].into_iter().collect();
        assert!(set.contains("plot twist"));
    }

    #[test]
    fn display_is_the_raw_value() {
        assert_eq!(ItemId::from("naruto").to_string(), "naruto");
        assert_eq!(MediaRef::new("videos/a.mp4").to_string(), "videos/a.mp4");
    }
}
