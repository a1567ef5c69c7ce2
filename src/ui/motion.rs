// SPDX-License-Identifier: MPL-2.0
//! Presentation-only motion: the mood screen hold and staggered fade-ins.
//!
//! The session changes screens immediately. `Motion` decides which screen is
//! *displayed* and how opaque each element is, based on the transitions it
//! has observed and the current instant. It never feeds back into the
//! session.

use crate::config::MotionConfig;
use crate::domain::session::Screen;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Motion {
    config: MotionConfig,
    displayed: Screen,
    /// Screen to reveal once the hold ends.
    pending: Option<(Screen, Instant)>,
    entered_at: Instant,
}

impl Motion {
    #[must_use]
    pub fn new(config: &MotionConfig, screen: Screen, now: Instant) -> Self {
        Self {
            config: config.clamped(),
            displayed: screen,
            pending: None,
            entered_at: now,
        }
    }

    /// Records a session transition from `from` to `to`.
    ///
    /// Leaving the mood screen for the tag screen keeps the mood screen on
    /// display for the configured delay. Every other change shows at once.
    pub fn observe(&mut self, from: Screen, to: Screen, now: Instant) {
        if from == to {
            return;
        }

        let delay = self.config.mood_advance_delay();
        let hold = !self.config.reduced_motion
            && !delay.is_zero()
            && from == Screen::MoodSelect
            && to == Screen::TagSelect;

        if hold {
            self.pending = Some((to, now + delay));
        } else {
            self.show(to, now);
        }
    }

    /// Ends an expired hold. Returns `true` if the displayed screen changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending {
            Some((screen, until)) if now >= until => {
                self.show(screen, until);
                true
            }
            _ => false,
        }
    }

    fn show(&mut self, screen: Screen, at: Instant) {
        self.pending = None;
        if self.displayed != screen {
            self.displayed = screen;
            self.entered_at = at;
        }
    }

    /// The screen to render, which lags the session during a hold.
    #[must_use]
    pub fn displayed(&self) -> Screen {
        self.displayed
    }

    #[must_use]
    pub fn is_holding(&self) -> bool {
        self.pending.is_some()
    }

    /// Opacity of the `index`-th revealed element (0.0 to 1.0).
    #[must_use]
    pub fn element_alpha(&self, index: usize, now: Instant) -> f32 {
        if self.config.reduced_motion {
            return 1.0;
        }
        let fade = self.config.fade();
        let offset = self.stagger_offset(index);
        let elapsed = now.saturating_duration_since(self.entered_at);
        let visible_for = elapsed.saturating_sub(offset);
        (visible_for.as_secs_f32() / fade.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Whether a hold is pending or any of the first `elements` is still fading.
    #[must_use]
    pub fn is_animating(&self, elements: usize, now: Instant) -> bool {
        if self.pending.is_some() {
            return true;
        }
        if self.config.reduced_motion {
            return false;
        }
        let last = elements.saturating_sub(1);
        let done_at = self.entered_at + self.stagger_offset(last) + self.config.fade();
        now < done_at
    }

    fn stagger_offset(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.config.card_stagger().saturating_mul(index)
    }
}
