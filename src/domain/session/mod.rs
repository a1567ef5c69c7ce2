// SPDX-License-Identifier: MPL-2.0
//! Navigation and selection state machine.
//!
//! A [`Session`] owns the visitor's progress through the four screens, the
//! selected mood and tags, and the highlight/preview state. Every intent is a
//! synchronous transition; rejected intents leave the state untouched.
//!
//! ```text
//! Landing --start--> MoodSelect --select_mood--> TagSelect --proceed--> Results
//!    ^                   |  ^                       |   ^                  |
//!    +---back_to_start---+  +------back_to_mood-----+   +--adjust_filters--+
//!
//! reset_all: any screen --> Landing (clears mood, tags, highlight)
//! ```

mod snapshot;
mod spotlight;

pub use snapshot::Snapshot;
pub use spotlight::Spotlight;

use super::catalog::{Catalog, ItemId, MoodId, TagId};
use super::selection::{ItemFilter, TagSet};
use std::fmt;
use std::sync::Arc;

/// The section of the experience currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Landing,
    MoodSelect,
    TagSelect,
    Results,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Landing => "landing",
            Screen::MoodSelect => "mood-select",
            Screen::TagSelect => "tag-select",
            Screen::Results => "results",
        };
        f.write_str(name)
    }
}

/// User intents accepted by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Start,
    BackToStart,
    SelectMood(MoodId),
    ToggleTag(TagId),
    ProceedToResults,
    BackToMood,
    AdjustFilters,
    ResetAll,
    SetHighlight(ItemId),
    OpenPreview(ItemId),
    ClosePreview,
}

impl Intent {
    /// Short name used in logs and rejections.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Start => "start",
            Intent::BackToStart => "back-to-start",
            Intent::SelectMood(_) => "select-mood",
            Intent::ToggleTag(_) => "toggle-tag",
            Intent::ProceedToResults => "proceed-to-results",
            Intent::BackToMood => "back-to-mood",
            Intent::AdjustFilters => "adjust-filters",
            Intent::ResetAll => "reset-all",
            Intent::SetHighlight(_) => "set-highlight",
            Intent::OpenPreview(_) => "open-preview",
            Intent::ClosePreview => "close-preview",
        }
    }
}

/// An identifier that failed to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    Mood(MoodId),
    Tag(TagId),
    Item(ItemId),
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Mood(id) => write!(f, "mood '{id}'"),
            Reference::Tag(id) => write!(f, "tag '{id}'"),
            Reference::Item(id) => write!(f, "item '{id}'"),
        }
    }
}

/// Why an intent was not applied. Never fatal: the state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejected {
    /// The intent names a mood, tag or item the catalog does not know.
    NotFound(Reference),
    /// The navigation intent does not apply to the current screen.
    NotAvailable { intent: &'static str, screen: Screen },
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejected::NotFound(reference) => write!(f, "{reference} not found"),
            Rejected::NotAvailable { intent, screen } => {
                write!(f, "'{intent}' is not available on the {screen} screen")
            }
        }
    }
}

impl std::error::Error for Rejected {}

/// Visitor session over a shared, read-only catalog.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Arc<Catalog>,
    screen: Screen,
    /// Selected mood and tags.
    criteria: ItemFilter,
    spotlight: Spotlight,
}

impl Session {
    /// Creates a session in its initial state: landing screen, nothing selected.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            screen: Screen::Landing,
            criteria: ItemFilter::new(),
            spotlight: Spotlight::new(),
        }
    }

    /// Dispatches an intent to the matching transition.
    ///
    /// # Errors
    ///
    /// Returns [`Rejected`] when the intent references an unknown id or does
    /// not apply to the current screen. The session is left unchanged.
    pub fn apply(&mut self, intent: Intent) -> Result<(), Rejected> {
        match intent {
            Intent::Start => self.start(),
            Intent::BackToStart => self.back_to_start(),
            Intent::SelectMood(mood) => self.select_mood(mood),
            Intent::ToggleTag(tag) => self.toggle_tag(tag),
            Intent::ProceedToResults => self.proceed_to_results(),
            Intent::BackToMood => self.back_to_mood(),
            Intent::AdjustFilters => self.adjust_filters(),
            Intent::ResetAll => {
                self.reset_all();
                Ok(())
            }
            Intent::SetHighlight(id) => self.set_highlight(id),
            Intent::OpenPreview(id) => self.open_preview(id),
            Intent::ClosePreview => {
                self.close_preview();
                Ok(())
            }
        }
    }

    /// `Landing -> MoodSelect`.
    pub fn start(&mut self) -> Result<(), Rejected> {
        self.navigate("start", Screen::Landing, Screen::MoodSelect)
    }

    /// `MoodSelect -> Landing`, keeping selections.
    pub fn back_to_start(&mut self) -> Result<(), Rejected> {
        self.navigate("back-to-start", Screen::MoodSelect, Screen::Landing)
    }

    /// Replaces the selected mood. From `MoodSelect` this also advances to
    /// `TagSelect`; on other screens the screen is unchanged.
    pub fn select_mood(&mut self, mood: MoodId) -> Result<(), Rejected> {
        if self.catalog.mood(&mood).is_none() {
            return Err(Rejected::NotFound(Reference::Mood(mood)));
        }
        self.criteria.mood = Some(mood);
        if self.screen == Screen::MoodSelect {
            self.screen = Screen::TagSelect;
        }
        Ok(())
    }

    /// Adds or removes `tag` from the selection. Never changes screen.
    pub fn toggle_tag(&mut self, tag: TagId) -> Result<(), Rejected> {
        if !self.catalog.has_tag(&tag) {
            return Err(Rejected::NotFound(Reference::Tag(tag)));
        }
        self.criteria.tags.toggle(tag);
        Ok(())
    }

    /// `TagSelect -> Results`.
    pub fn proceed_to_results(&mut self) -> Result<(), Rejected> {
        self.navigate("proceed-to-results", Screen::TagSelect, Screen::Results)
    }

    /// `TagSelect -> MoodSelect`, keeping the selected mood.
    pub fn back_to_mood(&mut self) -> Result<(), Rejected> {
        self.navigate("back-to-mood", Screen::TagSelect, Screen::MoodSelect)
    }

    /// `Results -> TagSelect`.
    pub fn adjust_filters(&mut self) -> Result<(), Rejected> {
        self.navigate("adjust-filters", Screen::Results, Screen::TagSelect)
    }

    /// Returns to `Landing` from any screen, clearing mood, tags and highlight.
    ///
    /// The preview is left as is; it is closed separately.
    pub fn reset_all(&mut self) {
        self.screen = Screen::Landing;
        self.criteria.clear();
        self.spotlight.clear_highlight();
    }

    /// Toggles the highlight on `id`.
    pub fn set_highlight(&mut self, id: ItemId) -> Result<(), Rejected> {
        if self.catalog.item(&id).is_none() {
            return Err(Rejected::NotFound(Reference::Item(id)));
        }
        self.spotlight.toggle_highlight(id);
        Ok(())
    }

    /// Opens the preview of `id`, closing any other.
    pub fn open_preview(&mut self, id: ItemId) -> Result<(), Rejected> {
        if self.catalog.item(&id).is_none() {
            return Err(Rejected::NotFound(Reference::Item(id)));
        }
        self.spotlight.open_preview(id);
        Ok(())
    }

    pub fn close_preview(&mut self) {
        self.spotlight.close_preview();
    }

    fn navigate(&mut self, intent: &'static str, from: Screen, to: Screen) -> Result<(), Rejected> {
        if self.screen != from {
            return Err(Rejected::NotAvailable {
                intent,
                screen: self.screen,
            });
        }
        self.screen = to;
        Ok(())
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn selected_mood(&self) -> Option<&MoodId> {
        self.criteria.mood.as_ref()
    }

    #[must_use]
    pub fn selected_tags(&self) -> &TagSet {
        &self.criteria.tags
    }

    #[must_use]
    pub fn active_item(&self) -> Option<&ItemId> {
        self.spotlight.highlighted()
    }

    #[must_use]
    pub fn preview_item(&self) -> Option<&ItemId> {
        self.spotlight.previewing()
    }

    #[must_use]
    pub fn spotlight(&self) -> &Spotlight {
        &self.spotlight
    }

    /// Builds the read-only snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        let catalog: &Catalog = &self.catalog;
        Snapshot {
            catalog,
            screen: self.screen,
            selected_mood: self.criteria.mood.as_ref(),
            selected_tags: &self.criteria.tags,
            active_item: self.spotlight.highlighted(),
            preview_item: self.spotlight.previewing(),
            filtered_items: self.criteria.apply(catalog.items()),
            accent_color: self.spotlight.accent_color(catalog),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::test_support::{catalog, item};
    use crate::domain::catalog::DEFAULT_ACCENT;

    fn session() -> Session {
        let items = vec![
            item("attack-on-titan", &["dark", "mind-bending"], &["revenge", "plot twist"]),
            item("spy-x-family", &["funny", "heartbroken"], &["bittersweet", "underdog"]),
            item("vinland-saga", &["dark", "emotional"], &["revenge", "tragic"]),
        ];
        Session::new(Arc::new(catalog(items, &["rage"])))
    }

    fn filtered_ids(session: &Session) -> Vec<String> {
        session
            .snapshot()
            .filtered_items
            .iter()
            .map(|item| item.id.to_string())
            .collect()
    }

    #[test]
    fn snapshot_filters_with_the_selected_criteria() {
        let mut session = session();
        session.start().unwrap();
        session.select_mood(MoodId::from("dark")).unwrap();
        session.toggle_tag(TagId::from("tragic")).unwrap();

        let criteria = ItemFilter {
            mood: session.selected_mood().cloned(),
            tags: session.selected_tags().clone(),
        };
        let expected: Vec<String> = criteria
            .apply(session.catalog().items())
            .iter()
            .map(|item| item.id.to_string())
            .collect();
        assert_eq!(filtered_ids(&session), expected);

        session.reset_all();
        assert_eq!(filtered_ids(&session).len(), session.catalog().len());
    }

    #[test]
    fn initial_state_is_landing_with_nothing_selected() {
        let session = session();
        assert_eq!(session.screen(), Screen::Landing);
        assert!(session.selected_mood().is_none());
        assert!(session.selected_tags().is_empty());
        assert!(session.active_item().is_none());
        assert!(session.preview_item().is_none());
        assert_eq!(session.snapshot().accent_color, DEFAULT_ACCENT);
    }

    #[test]
    fn forward_path_reaches_results() {
        let mut session = session();
        session.start().expect("start from landing");
        assert_eq!(session.screen(), Screen::MoodSelect);

        session.select_mood("dark".into()).expect("known mood");
        assert_eq!(session.screen(), Screen::TagSelect);
        assert_eq!(session.selected_mood(), Some(&MoodId::from("dark")));

        session.proceed_to_results().expect("proceed from tags");
        assert_eq!(session.screen(), Screen::Results);
        assert_eq!(filtered_ids(&session), vec!["attack-on-titan", "vinland-saga"]);
    }

    #[test]
    fn mood_is_visible_to_the_filter_as_soon_as_tags_screen_is_entered() {
        let mut session = session();
        session.start().unwrap();
        session.select_mood("funny".into()).unwrap();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.screen, Screen::TagSelect);
        assert_eq!(snapshot.filtered_items.len(), 1);
    }

    #[test]
    fn back_to_mood_preserves_the_mood_and_reselect_replaces_it() {
        let mut session = session();
        session.start().unwrap();
        session.select_mood("dark".into()).unwrap();
        session.back_to_mood().expect("back from tags");
        assert_eq!(session.screen(), Screen::MoodSelect);
        assert_eq!(session.selected_mood(), Some(&MoodId::from("dark")));

        session.select_mood("funny".into()).unwrap();
        assert_eq!(session.selected_mood(), Some(&MoodId::from("funny")));
        assert_eq!(session.screen(), Screen::TagSelect);
    }

    #[test]
    fn select_mood_outside_mood_screen_keeps_the_screen() {
        let mut session = session();
        session.start().unwrap();
        session.select_mood("dark".into()).unwrap();
        session.proceed_to_results().unwrap();

        session.select_mood("funny".into()).unwrap();
        assert_eq!(session.screen(), Screen::Results);
        assert_eq!(filtered_ids(&session), vec!["spy-x-family"]);
    }

    #[test]
    fn toggle_tag_keeps_screen_and_is_self_inverse() {
        let mut session = session();
        session.start().unwrap();
        session.select_mood("dark".into()).unwrap();
        let before = session.selected_tags().clone();

        session.toggle_tag("tragic".into()).unwrap();
        assert_eq!(session.screen(), Screen::TagSelect);
        assert_eq!(filtered_ids(&session), vec!["vinland-saga"]);

        session.toggle_tag("tragic".into()).unwrap();
        assert_eq!(session.selected_tags(), &before);
    }

    #[test]
    fn adjust_filters_returns_to_tags() {
        let mut session = session();
        session.start().unwrap();
        session.select_mood("dark".into()).unwrap();
        session.proceed_to_results().unwrap();
        session.adjust_filters().expect("adjust from results");
        assert_eq!(session.screen(), Screen::TagSelect);
    }

    #[test]
    fn back_to_start_keeps_selections() {
        let mut session = session();
        session.start().unwrap();
        session.toggle_tag("rage".into()).unwrap();
        session.back_to_start().expect("back from mood screen");
        assert_eq!(session.screen(), Screen::Landing);
        assert!(session.selected_tags().contains(&"rage".into()));
    }

    #[test]
    fn navigation_from_the_wrong_screen_is_rejected() {
        let mut session = session();
        assert_eq!(
            session.proceed_to_results(),
            Err(Rejected::NotAvailable {
                intent: "proceed-to-results",
                screen: Screen::Landing
            })
        );
        assert!(session.back_to_mood().is_err());
        assert!(session.adjust_filters().is_err());
        assert!(session.back_to_start().is_err());
        assert_eq!(session.screen(), Screen::Landing);

        session.start().unwrap();
        assert!(session.start().is_err());
        assert_eq!(session.screen(), Screen::MoodSelect);
    }

    #[test]
    fn unknown_ids_are_rejected_without_side_effects() {
        let mut session = session();
        session.start().unwrap();

        assert_eq!(
            session.select_mood("sleepy".into()),
            Err(Rejected::NotFound(Reference::Mood("sleepy".into())))
        );
        assert_eq!(session.screen(), Screen::MoodSelect);
        assert!(session.selected_mood().is_none());

        assert!(session.toggle_tag("cozy".into()).is_err());
        assert!(session.selected_tags().is_empty());

        assert!(session.set_highlight("ghost".into()).is_err());
        assert!(session.open_preview("ghost".into()).is_err());
        assert!(session.active_item().is_none());
        assert!(session.preview_item().is_none());
    }

    #[test]
    fn reset_clears_selection_but_not_preview() {
        let mut session = session();
        session.start().unwrap();
        session.select_mood("dark".into()).unwrap();
        session.toggle_tag("revenge".into()).unwrap();
        session.proceed_to_results().unwrap();
        session.set_highlight("vinland-saga".into()).unwrap();
        session.open_preview("attack-on-titan".into()).unwrap();

        session.reset_all();
        assert_eq!(session.screen(), Screen::Landing);
        assert!(session.selected_mood().is_none());
        assert!(session.selected_tags().is_empty());
        assert!(session.active_item().is_none());
        assert_eq!(session.preview_item(), Some(&ItemId::from("attack-on-titan")));
    }

    #[test]
    fn reset_from_every_screen_yields_the_initial_selection() {
        for steps in 0..4 {
            let mut session = session();
            let intents = [
                Intent::Start,
                Intent::SelectMood("dark".into()),
                Intent::ProceedToResults,
            ];
            for intent in intents.into_iter().take(steps) {
                session.apply(intent).unwrap();
            }
            session.apply(Intent::ResetAll).unwrap();
            assert_eq!(session.screen(), Screen::Landing);
            assert!(session.selected_mood().is_none());
            assert!(session.selected_tags().is_empty());
        }
    }

    #[test]
    fn highlight_drives_the_snapshot_accent() {
        let mut session = session();
        session.set_highlight("spy-x-family".into()).unwrap();
        let snapshot = session.snapshot();
        assert!(snapshot.is_highlighted(&"spy-x-family".into()));
        assert_eq!(snapshot.accent_color, DEFAULT_ACCENT);

        session.set_highlight("spy-x-family".into()).unwrap();
        assert!(session.active_item().is_none());
    }

    #[test]
    fn apply_routes_preview_intents() {
        let mut session = session();
        session.apply(Intent::OpenPreview("vinland-saga".into())).unwrap();
        session.apply(Intent::OpenPreview("spy-x-family".into())).unwrap();
        let snapshot = session.snapshot();
        assert!(snapshot.is_previewing(&"spy-x-family".into()));
        assert!(!snapshot.is_previewing(&"vinland-saga".into()));
        assert_eq!(snapshot.preview().map(|i| i.id.as_str()), Some("spy-x-family"));

        session.apply(Intent::ClosePreview).unwrap();
        assert!(!session.snapshot().is_preview_open());
    }

    #[test]
    fn rejection_messages_are_readable() {
        let rejected = Rejected::NotAvailable {
            intent: "adjust-filters",
            screen: Screen::Landing,
        };
        assert_eq!(
            rejected.to_string(),
            "'adjust-filters' is not available on the landing screen"
        );
        assert_eq!(
            Rejected::NotFound(Reference::Tag("cozy".into())).to_string(),
            "tag 'cozy' not found"
        );
    }
}
