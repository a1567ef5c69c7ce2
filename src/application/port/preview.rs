// SPDX-License-Identifier: MPL-2.0
//! Preview playback port definition.
//!
//! Decoding and rendering preview clips is outside this crate. The app only
//! tells a [`PreviewPlayer`] what should be playing, following the preview
//! transitions of the session.
//!
//! # Lifecycle
//!
//! 1. `play(media)` when a preview opens (always from the start)
//! 2. `stop()` when it closes (playback rewinds)
//! 3. `set_ambient_paused(true)` while any preview is open so the ambient
//!    background does not compete with it

use crate::domain::catalog::MediaRef;

/// Port for the external preview playback collaborator.
pub trait PreviewPlayer: Send {
    /// Starts `media` from the beginning, replacing whatever was playing.
    fn play(&mut self, media: &MediaRef);

    /// Stops playback and rewinds. A no-op when nothing is playing.
    fn stop(&mut self);

    /// Pauses or resumes the ambient background loop.
    fn set_ambient_paused(&mut self, paused: bool);

    /// The clip currently playing, if any.
    fn now_playing(&self) -> Option<&MediaRef>;

    /// Whether the ambient background is paused.
    fn is_ambient_paused(&self) -> bool;
}
