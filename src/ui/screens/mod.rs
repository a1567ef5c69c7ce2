// SPDX-License-Identifier: MPL-2.0
//! One view per session screen.
//!
//! The screen drawn is the one [`Motion`] currently displays, which lags the
//! session while a mood selection is held on screen.

pub mod landing;
pub mod mood_select;
pub mod results;
pub mod tag_select;

use crate::domain::catalog::MediaRef;
use crate::domain::session::{Intent, Screen, Snapshot};
use crate::ui::motion::Motion;
use crate::ui::theming::ColorScheme;
use iced::Element;
use std::time::Instant;

/// Contextual data needed to render a screen.
pub struct ViewContext<'a> {
    pub snapshot: Snapshot<'a>,
    pub motion: &'a Motion,
    pub now: Instant,
    pub colors: ColorScheme,
    /// Media the preview player reports as playing.
    pub now_playing: Option<&'a MediaRef>,
}

impl ViewContext<'_> {
    /// Fade-in progress of the `index`th staggered element.
    #[must_use]
    pub fn alpha(&self, index: usize) -> f32 {
        self.motion.element_alpha(index, self.now)
    }

    /// Navigation is frozen while a transition is held.
    #[must_use]
    pub fn is_holding(&self) -> bool {
        self.motion.is_holding()
    }
}

/// Render the displayed screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Intent> {
    match ctx.motion.displayed() {
        Screen::Landing => landing::view(&ctx),
        Screen::MoodSelect => mood_select::view(&ctx),
        Screen::TagSelect => tag_select::view(&ctx),
        Screen::Results => results::view(&ctx),
    }
}

/// Number of staggered elements a screen fades in, used to decide when
/// animation ticks can stop.
#[must_use]
pub fn staggered_elements(snapshot: &Snapshot<'_>, screen: Screen) -> usize {
    match screen {
        Screen::Landing => landing::STAGGERED,
        Screen::MoodSelect => snapshot.catalog.moods().len(),
        Screen::TagSelect => snapshot.catalog.tags().len(),
        Screen::Results => snapshot.filtered_items.len().max(1),
    }
}
