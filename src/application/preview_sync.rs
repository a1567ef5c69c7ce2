// SPDX-License-Identifier: MPL-2.0
//! Drives a [`PreviewPlayer`] from the session's preview state.
//!
//! The session only records *which* item is being previewed. After every
//! transition the app calls [`PreviewSync::sync`], which turns the difference
//! between the last seen preview and the current one into player calls.

use crate::application::port::PreviewPlayer;
use crate::domain::catalog::ItemId;
use crate::domain::session::Session;

/// Owns the player and remembers the preview it was last told about.
pub struct PreviewSync {
    player: Box<dyn PreviewPlayer>,
    current: Option<ItemId>,
}

impl std::fmt::Debug for PreviewSync {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewSync")
            .field("current", &self.current)
            .field("now_playing", &self.player.now_playing())
            .finish()
    }
}

impl PreviewSync {
    #[must_use]
    pub fn new(player: Box<dyn PreviewPlayer>) -> Self {
        Self {
            player,
            current: None,
        }
    }

    /// Applies the session's preview state to the player.
    ///
    /// Returns `true` when the player was touched.
    pub fn sync(&mut self, session: &Session) -> bool {
        let target = session
            .spotlight()
            .resolved_preview(session.catalog())
            .map(|item| (item.id.clone(), item.preview.clone()));
        let target_id = target.as_ref().map(|(id, _)| id);

        if self.current.as_ref() == target_id {
            return false;
        }

        if self.current.is_some() {
            self.player.stop();
        }
        match target {
            Some((id, media)) => {
                self.player.play(&media);
                self.player.set_ambient_paused(true);
                self.current = Some(id);
            }
            None => {
                self.player.set_ambient_paused(false);
                self.current = None;
            }
        }
        true
    }

    #[must_use]
    pub fn player(&self) -> &dyn PreviewPlayer {
        self.player.as_ref()
    }

    #[must_use]
    pub fn current(&self) -> Option<&ItemId> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::test_support::{catalog, item};
    use crate::domain::catalog::MediaRef;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingPlayer {
        log: Arc<Mutex<Vec<String>>>,
        playing: Option<MediaRef>,
        ambient_paused: bool,
    }

    impl PreviewPlayer for RecordingPlayer {
        fn play(&mut self, media: &MediaRef) {
            self.log.lock().unwrap().push(format!("play {media}"));
            self.playing = Some(media.clone());
        }

        fn stop(&mut self) {
            self.log.lock().unwrap().push("stop".to_string());
            self.playing = None;
        }

        fn set_ambient_paused(&mut self, paused: bool) {
            self.log.lock().unwrap().push(format!("ambient {paused}"));
            self.ambient_paused = paused;
        }

        fn now_playing(&self) -> Option<&MediaRef> {
            self.playing.as_ref()
        }

        fn is_ambient_paused(&self) -> bool {
            self.ambient_paused
        }
    }

    fn fixture() -> (Session, PreviewSync, Arc<Mutex<Vec<String>>>) {
        let items = vec![
            item("a", &["dark"], &["revenge"]),
            item("b", &["funny"], &["underdog"]),
        ];
        let session = Session::new(Arc::new(catalog(items, &[])));
        let log = Arc::new(Mutex::new(Vec::new()));
        let player = RecordingPlayer {
            log: Arc::clone(&log),
            ..RecordingPlayer::default()
        };
        (session, PreviewSync::new(Box::new(player)), log)
    }

    #[test]
    fn opening_plays_and_pauses_ambient() {
        let (mut session, mut sync, log) = fixture();
        session.open_preview("a".into()).unwrap();
        assert!(sync.sync(&session));
        assert_eq!(
            sync.player().now_playing().map(MediaRef::as_str),
            Some("videos/a.mp4")
        );
        assert!(sync.player().is_ambient_paused());
        assert_eq!(*log.lock().unwrap(), vec!["play videos/a.mp4", "ambient true"]);
    }

    #[test]
    fn switching_previews_stops_the_previous_clip_first() {
        let (mut session, mut sync, log) = fixture();
        session.open_preview("a".into()).unwrap();
        sync.sync(&session);
        session.open_preview("b".into()).unwrap();
        sync.sync(&session);

        let log = log.lock().unwrap();
        assert_eq!(&log[2..], ["stop", "play videos/b.mp4", "ambient true"]);
        assert_eq!(sync.current(), Some(&ItemId::from("b")));
    }

    #[test]
    fn closing_stops_and_resumes_ambient() {
        let (mut session, mut sync, _log) = fixture();
        session.open_preview("a".into()).unwrap();
        sync.sync(&session);
        session.close_preview();
        assert!(sync.sync(&session));
        assert!(sync.player().now_playing().is_none());
        assert!(!sync.player().is_ambient_paused());
        assert!(sync.current().is_none());
    }

    #[test]
    fn unchanged_state_does_not_touch_the_player() {
        let (mut session, mut sync, log) = fixture();
        assert!(!sync.sync(&session));
        session.set_highlight("a".into()).unwrap();
        assert!(!sync.sync(&session));
        assert!(log.lock().unwrap().is_empty());
    }
}
