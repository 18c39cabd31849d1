use crate::api::{sort_by_title, Playlist, Song};
use crate::player::shuffle::pick_next;
use dioxus::logger::tracing::{debug, info};
use rand::Rng;
use thiserror::Error;

/// Local validation failures. These never reach the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("No playlist selected")]
    NoPlaylistSelected,
    #[error("Playlist is empty")]
    EmptyPlaylist,
}

/// Handle for an in-flight song list request.
///
/// Only the most recently issued handle may apply its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SongRequest {
    pub playlist_id: i64,
    generation: u64,
}

/// Handle for an in-flight playlist list fetch.
///
/// A list is applied unless a handle issued after it was applied first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRequest {
    generation: u64,
}

/// View state of the player, held in a single signal by the app shell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerState {
    pub playlists: Vec<Playlist>,
    pub playlists_loaded: bool,
    pub songs: Vec<Song>,
    pub current_playlist: Option<Playlist>,
    pub current_song: Option<Song>,
    pub error: Option<String>,
    in_flight: Vec<&'static str>,
    song_generation: u64,
    list_generation: u64,
    applied_list_generation: u64,
}

/// Write access to the player state for async flows, which must not hold a
/// borrow across an `.await`.
pub trait PlayerStore {
    fn with_state<R>(&mut self, f: impl FnOnce(&mut PlayerState) -> R) -> R;
}

impl PlayerStore for PlayerState {
    fn with_state<R>(&mut self, f: impl FnOnce(&mut PlayerState) -> R) -> R {
        f(self)
    }
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cached playlists wholesale, sorted by title.
    fn set_playlists(&mut self, mut playlists: Vec<Playlist>) {
        sort_by_title(&mut playlists);
        if let Some(current) = self.current_playlist.as_mut() {
            if let Some(fresh) = playlists.iter().find(|p| p.id == current.id) {
                *current = fresh.clone();
            }
        }
        info!("loaded {} playlists", playlists.len());
        self.playlists = playlists;
        self.playlists_loaded = true;
    }

    /// Issues a handle for a new list fetch.
    pub fn begin_list_refresh(&mut self) -> ListRequest {
        self.list_generation += 1;
        ListRequest {
            generation: self.list_generation,
        }
    }

    /// True once a list fetched after `request` has been applied.
    pub fn is_stale_list(&self, request: ListRequest) -> bool {
        request.generation < self.applied_list_generation
    }

    /// Stores a fetched playlist list. Returns `false` and leaves state
    /// untouched when a newer list has already been applied.
    pub fn apply_playlists(&mut self, request: ListRequest, playlists: Vec<Playlist>) -> bool {
        if self.is_stale_list(request) {
            debug!(
                "dropping stale playlist list #{} (showing #{})",
                request.generation, self.applied_list_generation
            );
            return false;
        }
        self.applied_list_generation = request.generation;
        self.set_playlists(playlists);
        true
    }

    /// Progress text of the most recently started mutation still in flight.
    pub fn progress(&self) -> Option<&'static str> {
        self.in_flight.last().copied()
    }

    pub fn begin_mutation(&mut self, label: &'static str) {
        self.error = None;
        self.in_flight.push(label);
    }

    pub fn end_mutation(&mut self, label: &'static str) {
        if let Some(pos) = self.in_flight.iter().rposition(|l| *l == label) {
            self.in_flight.remove(pos);
        }
    }

    pub fn is_selected(&self, playlist_id: i64) -> bool {
        self.current_playlist
            .as_ref()
            .map(|p| p.id == playlist_id)
            .unwrap_or(false)
    }

    /// Selects a playlist and issues a new song request handle, invalidating
    /// any handle issued before it. Returns `None` if the id is unknown.
    pub fn select_playlist(&mut self, playlist_id: i64) -> Option<SongRequest> {
        self.error = None;
        let playlist = self.playlists.iter().find(|p| p.id == playlist_id)?.clone();
        self.current_playlist = Some(playlist);
        self.songs.clear();
        self.song_generation += 1;
        Some(SongRequest {
            playlist_id,
            generation: self.song_generation,
        })
    }

    pub fn is_latest(&self, request: SongRequest) -> bool {
        request.generation == self.song_generation
    }

    /// Stores a fetched song list. Returns `false` and leaves state untouched
    /// when a newer selection has been made since `request` was issued.
    pub fn apply_songs(&mut self, request: SongRequest, songs: Vec<Song>) -> bool {
        if !self.is_latest(request) {
            debug!(
                "dropping stale song list for playlist {}",
                request.playlist_id
            );
            return false;
        }
        self.songs = songs;
        true
    }

    /// Advances to a random song of the current playlist and returns it.
    pub fn next_song<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Song, PlayerError> {
        if self.current_playlist.is_none() {
            return Err(PlayerError::NoPlaylistSelected);
        }
        let song = pick_next(&self.songs, self.current_song.as_ref(), rng)
            .cloned()
            .ok_or(PlayerError::EmptyPlaylist)?;
        self.current_song = Some(song.clone());
        Ok(song)
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
