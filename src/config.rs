use crate::api::PlaylistClient;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "playlist_player.settings";
#[cfg(not(target_arch = "wasm32"))]
const API_ENV_VAR: &str = "PLAYLIST_PLAYER_API";
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_NATIVE_API: &str = "http://127.0.0.1:5000";

/// User settings persisted between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Server origin. Empty means the origin the page was served from.
    #[serde(default)]
    pub api_base_url: String,
    #[serde(default = "default_volume")]
    pub volume: f64,
}

fn default_volume() -> f64 {
    0.8
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            volume: default_volume(),
        }
    }
}

impl AppSettings {
    pub fn normalized(mut self) -> Self {
        self.api_base_url = self.api_base_url.trim().trim_end_matches('/').to_string();
        self.volume = normalize_volume(self.volume);
        self
    }

    pub fn client(&self) -> PlaylistClient {
        PlaylistClient::new(resolve_base_url(&self.api_base_url))
    }
}

pub fn normalize_volume(value: f64) -> f64 {
    if !value.is_finite() {
        return default_volume();
    }
    value.clamp(0.0, 1.0)
}

#[cfg(target_arch = "wasm32")]
fn resolve_base_url(configured: &str) -> String {
    if !configured.is_empty() {
        return configured.to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn resolve_base_url(configured: &str) -> String {
    if configured.is_empty() {
        DEFAULT_NATIVE_API.to_string()
    } else {
        configured.to_string()
    }
}

#[cfg(target_arch = "wasm32")]
pub fn load_settings() -> AppSettings {
    LocalStorage::get::<AppSettings>(SETTINGS_KEY)
        .map(AppSettings::normalized)
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
pub fn save_settings(settings: &AppSettings) -> Result<(), String> {
    LocalStorage::set(SETTINGS_KEY, settings).map_err(|e| e.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_settings() -> AppSettings {
    AppSettings {
        api_base_url: std::env::var(API_ENV_VAR).unwrap_or_default(),
        ..AppSettings::default()
    }
    .normalized()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_settings(_settings: &AppSettings) -> Result<(), String> {
    Ok(())
}
