// SPDX-License-Identifier: MPL-2.0
//! Preview player that records the playback lifecycle in the log.
//!
//! Clips are not decoded here; the player keeps track of what would be
//! playing and when it started so the UI can show elapsed time.

use crate::application::port::PreviewPlayer;
use crate::domain::catalog::MediaRef;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct LoggingPreviewPlayer {
    playing: Option<(MediaRef, Instant)>,
    ambient_paused: bool,
}

impl LoggingPreviewPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time since the current clip started, `None` when stopped.
    #[must_use]
    pub fn position(&self) -> Option<Duration> {
        self.playing.as_ref().map(|(_, started)| started.elapsed())
    }
}

impl PreviewPlayer for LoggingPreviewPlayer {
    fn play(&mut self, media: &MediaRef) {
        tracing::info!(media = %media, "preview playing from start");
        self.playing = Some((media.clone(), Instant::now()));
    }

    fn stop(&mut self) {
        if let Some((media, started)) = self.playing.take() {
            tracing::info!(media = %media, played_ms = started.elapsed().as_millis(), "preview stopped and rewound");
        }
    }

    fn set_ambient_paused(&mut self, paused: bool) {
        if self.ambient_paused != paused {
            tracing::debug!(paused, "ambient background");
            self.ambient_paused = paused;
        }
    }

    fn now_playing(&self) -> Option<&MediaRef> {
        self.playing.as_ref().map(|(media, _)| media)
    }

    fn is_ambient_paused(&self) -> bool {
        self.ambient_paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_replaces_and_stop_clears() {
        let mut player = LoggingPreviewPlayer::new();
        player.play(&MediaRef::new("a.mp4"));
        player.play(&MediaRef::new("b.mp4"));
        assert_eq!(player.now_playing().map(MediaRef::as_str), Some("b.mp4"));
        assert!(player.position().is_some());

        player.stop();
        assert!(player.now_playing().is_none());
        assert!(player.position().is_none());
        player.stop();
    }

    #[test]
    fn ambient_pause_is_tracked() {
        let mut player = LoggingPreviewPlayer::new();
        assert!(!player.is_ambient_paused());
        player.set_ambient_paused(true);
        assert!(player.is_ambient_paused());
    }
}
