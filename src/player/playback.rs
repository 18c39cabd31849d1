use crate::api::{PlaylistApi, Song};
use crate::player::media::{start_source, MediaElement};
use crate::player::state::{PlayerError, PlayerState, PlayerStore};
use dioxus::logger::tracing::{info, warn};
use rand::Rng;

/// Selects `playlist_id` and fetches its songs.
///
/// Returns `true` when the songs were stored for the selection that is still
/// current, i.e. when playback should start.
pub async fn load_selected_songs<A, S>(api: &A, store: &mut S, playlist_id: i64) -> bool
where
    A: PlaylistApi,
    S: PlayerStore,
{
    let Some(request) = store.with_state(|state| state.select_playlist(playlist_id)) else {
        warn!("selected unknown playlist {playlist_id}");
        return false;
    };

    match api.list_songs(request.playlist_id).await {
        Ok(songs) => {
            info!("playlist {} has {} songs", request.playlist_id, songs.len());
            store.with_state(|state| state.apply_songs(request, songs))
        }
        Err(err) => {
            store.with_state(|state| {
                if state.is_latest(request) {
                    state.show_error(err.to_string());
                }
            });
            false
        }
    }
}

/// Picks the next song of the current playlist and starts streaming it.
pub fn start_next_song<A, M, R>(
    api: &A,
    state: &mut PlayerState,
    media: &M,
    rng: &mut R,
) -> Result<Song, PlayerError>
where
    A: PlaylistApi,
    M: MediaElement + ?Sized,
    R: Rng + ?Sized,
{
    let song = state.next_song(rng)?;
    let playlist = state
        .current_playlist
        .as_ref()
        .ok_or(PlayerError::NoPlaylistSelected)?;

    let src = api.stream_url(playlist, &song);
    info!("playing \"{}\" from \"{}\"", song.title, playlist.title);
    start_source(media, &src);
    Ok(song)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::player::actions::fake_api::{Call, FakeApi};
    use crate::player::actions::refresh_playlists;
    use crate::player::media::fake::FakeMedia;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn song(name: &str) -> Song {
        Song {
            filename: format!("{name}.mp3"),
            title: name.to_string(),
            url: String::new(),
        }
    }

    async fn loaded(api: &FakeApi) -> PlayerState {
        let mut state = PlayerState::new();
        refresh_playlists(api, &mut state).await;
        api.calls.borrow_mut().clear();
        state
    }

    #[tokio::test]
    async fn test_selecting_fetches_songs_and_streams_one() {
        let mut api = FakeApi::with_playlists(&[(1, "Chill"), (2, "Rock")]);
        api.songs = vec![song("a"), song("b")];
        let mut state = loaded(&api).await;
        let media = FakeMedia::new_paused();
        let mut rng = StdRng::seed_from_u64(3);

        assert!(load_selected_songs(&api, &mut state, 2).await);
        assert_eq!(api.calls(), vec![Call::Songs(2)]);
        assert_eq!(state.songs.len(), 2);

        let played = start_next_song(&api, &mut state, &media, &mut rng).expect("song");
        assert_eq!(state.current_song.as_ref(), Some(&played));
        assert_eq!(
            media.src.borrow().as_deref(),
            Some(format!("/api/songs/play/Rock/{}", played.filename).as_str())
        );
        assert_eq!(media.loads.get(), 1);
        assert!(!media.paused());
    }

    #[tokio::test]
    async fn test_selecting_unknown_playlist_sends_nothing() {
        let api = FakeApi::with_playlists(&[(1, "Chill")]);
        let mut state = loaded(&api).await;

        assert!(!load_selected_songs(&api, &mut state, 42).await);
        assert!(api.calls().is_empty());
        assert!(state.current_playlist.is_none());
    }

    #[tokio::test]
    async fn test_song_fetch_failure_is_surfaced() {
        let mut api = FakeApi::with_playlists(&[(1, "Chill")]);
        api.fail_songs_with = Some(ApiError::from_status(404, r#"{"error": "Playlist not found"}"#));
        let mut state = loaded(&api).await;

        assert!(!load_selected_songs(&api, &mut state, 1).await);
        assert_eq!(state.error.as_deref(), Some("Playlist not found"));
        assert!(state.is_selected(1));
    }

    #[tokio::test]
    async fn test_empty_playlist_streams_nothing() {
        let api = FakeApi::with_playlists(&[(1, "Chill")]);
        let mut state = loaded(&api).await;
        let media = FakeMedia::new_paused();
        let mut rng = StdRng::seed_from_u64(0);

        assert!(load_selected_songs(&api, &mut state, 1).await);
        assert_eq!(
            start_next_song(&api, &mut state, &media, &mut rng),
            Err(PlayerError::EmptyPlaylist)
        );
        assert_eq!(media.loads.get(), 0);
        assert!(media.paused());
    }

    #[test]
    fn test_next_song_without_selection_streams_nothing() {
        let api = FakeApi::default();
        let mut state = PlayerState::new();
        let media = FakeMedia::new_paused();
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(
            start_next_song(&api, &mut state, &media, &mut rng),
            Err(PlayerError::NoPlaylistSelected)
        );
        assert!(media.src.borrow().is_none());
    }
}
