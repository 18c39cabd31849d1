use crate::config::normalize_volume;
use crate::player::state::{PlayerError, PlayerState};

/// The parts of an audio element the player drives.
pub trait MediaElement {
    fn paused(&self) -> bool;
    fn play(&self);
    fn pause(&self);
    /// Points the element at `src` and reloads it.
    fn load_source(&self, src: &str);
    fn set_volume(&self, volume: f64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Playing,
    Paused,
}

impl PlaybackStatus {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn from_paused(paused: bool) -> Self {
        if paused {
            PlaybackStatus::Paused
        } else {
            PlaybackStatus::Playing
        }
    }

    /// Label of the play/pause button while in this status.
    pub fn button_label(self) -> &'static str {
        match self {
            PlaybackStatus::Playing => "Pause",
            PlaybackStatus::Paused => "Play",
        }
    }
}

/// Flips playback based on the element's live `paused` flag.
pub fn toggle_playback<M>(state: &mut PlayerState, media: &M) -> Result<PlaybackStatus, PlayerError>
where
    M: MediaElement + ?Sized,
{
    state.dismiss_error();
    if state.current_song.is_none() {
        return Err(PlayerError::NoPlaylistSelected);
    }
    if media.paused() {
        media.play();
        Ok(PlaybackStatus::Playing)
    } else {
        media.pause();
        Ok(PlaybackStatus::Paused)
    }
}

/// Loads `src` into the element and starts it.
pub fn start_source<M>(media: &M, src: &str) -> PlaybackStatus
where
    M: MediaElement + ?Sized,
{
    media.load_source(src);
    media.play();
    PlaybackStatus::Playing
}

/// Applies a user volume, clamped to what media elements accept.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub fn apply_volume<M>(media: &M, volume: f64)
where
    M: MediaElement + ?Sized,
{
    media.set_volume(normalize_volume(volume));
}

#[cfg(test)]
pub(crate) mod fake {
    use super::MediaElement;
    use std::cell::{Cell, RefCell};

    /// Records what the player asked of the element.
    #[derive(Default)]
    pub struct FakeMedia {
        pub paused: Cell<bool>,
        pub src: RefCell<Option<String>>,
        pub loads: Cell<usize>,
        pub volume: Cell<f64>,
    }

    impl FakeMedia {
        pub fn new_paused() -> Self {
            let media = Self::default();
            media.paused.set(true);
            media
        }
    }

    impl MediaElement for FakeMedia {
        fn paused(&self) -> bool {
            self.paused.get()
        }

        fn play(&self) {
            self.paused.set(false);
        }

        fn pause(&self) {
            self.paused.set(true);
        }

        fn load_source(&self, src: &str) {
            *self.src.borrow_mut() = Some(src.to_string());
            self.loads.set(self.loads.get() + 1);
        }

        fn set_volume(&self, volume: f64) {
            self.volume.set(volume);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeMedia;
    use super::*;
    use crate::api::Song;

    fn state_with_song() -> PlayerState {
        let mut state = PlayerState::new();
        state.current_song = Some(Song {
            filename: "track".to_string(),
            title: "Track".to_string(),
            url: String::new(),
        });
        state
    }

    #[test]
    fn test_toggle_inverts_paused_state() {
        let mut state = state_with_song();
        let media = FakeMedia::new_paused();

        assert_eq!(toggle_playback(&mut state, &media), Ok(PlaybackStatus::Playing));
        assert!(!media.paused());
        assert_eq!(toggle_playback(&mut state, &media), Ok(PlaybackStatus::Paused));
        assert!(media.paused());
    }

    #[test]
    fn test_toggle_reads_live_element_state() {
        let mut state = state_with_song();
        let media = FakeMedia::new_paused();
        // Something outside the app resumed playback.
        media.paused.set(false);
        assert_eq!(toggle_playback(&mut state, &media), Ok(PlaybackStatus::Paused));
    }

    #[test]
    fn test_toggle_without_song() {
        let mut state = PlayerState::new();
        let media = FakeMedia::new_paused();
        assert_eq!(
            toggle_playback(&mut state, &media),
            Err(PlayerError::NoPlaylistSelected)
        );
        assert!(media.paused());
    }

    #[test]
    fn test_start_source_loads_then_plays() {
        let media = FakeMedia::new_paused();
        let status = start_source(&media, "/api/songs/play/mix/a");
        assert_eq!(status, PlaybackStatus::Playing);
        assert_eq!(media.src.borrow().as_deref(), Some("/api/songs/play/mix/a"));
        assert_eq!(media.loads.get(), 1);
        assert!(!media.paused());
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(PlaybackStatus::Playing.button_label(), "Pause");
        assert_eq!(PlaybackStatus::Paused.button_label(), "Play");
        assert_eq!(PlaybackStatus::from_paused(true), PlaybackStatus::Paused);
    }

    #[test]
    fn test_apply_volume_clamps() {
        let media = FakeMedia::new_paused();
        apply_volume(&media, 1.4);
        assert_eq!(media.volume.get(), 1.0);
        apply_volume(&media, 0.25);
        assert_eq!(media.volume.get(), 0.25);
    }
}
