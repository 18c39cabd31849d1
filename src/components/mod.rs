//! Dioxus components of the player page.

mod alerts;
mod app;
mod audio_manager;
mod icons;
mod player_bar;
mod playlists;
mod upload_form;

pub use alerts::*;
pub use app::*;
pub use audio_manager::*;
pub use icons::*;
pub use player_bar::*;
pub use playlists::*;
pub use upload_form::*;
