use crate::api::error::ApiError;
use crate::api::models::*;
use dioxus::logger::tracing::{debug, warn};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Operations the player needs from the playlist server.
#[allow(async_fn_in_trait)]
pub trait PlaylistApi {
    async fn list_playlists(&self) -> Result<Vec<Playlist>, ApiError>;
    async fn list_songs(&self, playlist_id: i64) -> Result<Vec<Song>, ApiError>;
    async fn update_playlist(&self, playlist_id: i64) -> Result<(), ApiError>;
    async fn delete_playlist(&self, playlist_id: i64) -> Result<(), ApiError>;
    async fn upload_playlist(&self, playlist: &str) -> Result<(), ApiError>;

    /// URL the audio element streams `song` from.
    fn stream_url(&self, playlist: &Playlist, song: &Song) -> String {
        stream_path(playlist, song)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistClient {
    base_url: String,
}

impl PlaylistClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.build_url(path);
        debug!("GET {url}");
        let response = HTTP_CLIENT.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("GET {url} failed with status {status}");
            return Err(ApiError::from_status(status.as_u16(), &body));
        }
        Ok(response.json::<T>().await?)
    }

    async fn post(&self, path: &str, body: Option<&UploadRequest>) -> Result<(), ApiError> {
        let url = self.build_url(path);
        debug!("POST {url}");
        let mut request = HTTP_CLIENT.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        warn!("POST {url} failed with status {status}");
        Err(ApiError::from_status(status.as_u16(), &body))
    }
}

impl PlaylistApi for PlaylistClient {
    async fn list_playlists(&self) -> Result<Vec<Playlist>, ApiError> {
        self.get_json("/api/playlists/list").await
    }

    async fn list_songs(&self, playlist_id: i64) -> Result<Vec<Song>, ApiError> {
        self.get_json(&format!("/api/songs/list/{playlist_id}")).await
    }

    async fn update_playlist(&self, playlist_id: i64) -> Result<(), ApiError> {
        self.post(&format!("/api/playlists/update/{playlist_id}"), None)
            .await
    }

    async fn delete_playlist(&self, playlist_id: i64) -> Result<(), ApiError> {
        self.post(&format!("/api/playlists/delete/{playlist_id}"), None)
            .await
    }

    async fn upload_playlist(&self, playlist: &str) -> Result<(), ApiError> {
        let body = UploadRequest {
            playlist: playlist.to_string(),
        };
        self.post("/api/playlists/upload", Some(&body)).await
    }

    fn stream_url(&self, playlist: &Playlist, song: &Song) -> String {
        self.build_url(&stream_path(playlist, song))
    }
}

/// Server-relative path of a song's audio stream.
pub fn stream_path(playlist: &Playlist, song: &Song) -> String {
    format!(
        "/api/songs/play/{}/{}",
        urlencoding::encode(&playlist.folder),
        urlencoding::encode(&song.filename)
    )
}
