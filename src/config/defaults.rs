// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Motion**: Screen transition and card reveal timings
//! - **Notifications**: Toast lifetime

// ==========================================================================
// Motion Defaults
// ==========================================================================

/// How long the mood screen stays visible after a mood is picked (ms).
pub const DEFAULT_MOOD_ADVANCE_DELAY_MS: u32 = 400;

/// Maximum mood advance delay (ms).
pub const MAX_MOOD_ADVANCE_DELAY_MS: u32 = 2_000;

/// Delay between consecutive card reveals (ms).
pub const DEFAULT_CARD_STAGGER_MS: u32 = 100;

/// Maximum card stagger (ms).
pub const MAX_CARD_STAGGER_MS: u32 = 500;

/// Duration of a single fade-in (ms).
pub const DEFAULT_FADE_MS: u32 = 500;

/// Minimum fade duration (ms). Shorter fades read as a flicker.
pub const MIN_FADE_MS: u32 = 50;

/// Maximum fade duration (ms).
pub const MAX_FADE_MS: u32 = 3_000;

/// Frame interval of the animation tick (ms), roughly 60 fps.
pub const ANIMATION_TICK_MS: u64 = 16;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How long a warning toast stays on screen (seconds).
pub const WARNING_TOAST_SECS: u64 = 6;

/// Maximum number of toasts shown at once.
pub const MAX_VISIBLE_TOASTS: usize = 3;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_MOOD_ADVANCE_DELAY_MS <= MAX_MOOD_ADVANCE_DELAY_MS);
    assert!(DEFAULT_CARD_STAGGER_MS <= MAX_CARD_STAGGER_MS);
    assert!(MIN_FADE_MS > 0);
    assert!(DEFAULT_FADE_MS >= MIN_FADE_MS);
    assert!(DEFAULT_FADE_MS <= MAX_FADE_MS);
    assert!(ANIMATION_TICK_MS > 0);
    assert!(MAX_VISIBLE_TOASTS > 0);
};
