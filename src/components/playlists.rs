use crate::api::Playlist;
use crate::components::{select_and_play, Icon, IconName, PlaybackSignal};
use crate::config::AppSettings;
use crate::player::{perform, Mutation, PlayerState};
use dioxus::core::spawn_forever;
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
fn confirm_delete(playlist: &Playlist) -> bool {
    let message = format!("Are you sure? \"{}\" will be deleted.", playlist.title);
    web_sys::window()
        .and_then(|w| w.confirm_with_message(&message).ok())
        .unwrap_or(false)
}

// No dialog outside the browser, so nothing is ever confirmed.
#[cfg(not(target_arch = "wasm32"))]
fn confirm_delete(_playlist: &Playlist) -> bool {
    false
}

/// Sends `mutation` and folds its progress into the player state.
///
/// Runs in the root scope: a refresh may remove the row that started it.
pub(super) fn spawn_mutation(
    mutation: Mutation,
    confirm: impl FnOnce(&Mutation) -> bool + 'static,
    player: Signal<PlayerState>,
    settings: Signal<AppSettings>,
) {
    let client = settings.peek().client();
    spawn_forever(async move {
        let mut player = player;
        perform(&client, &mut player, mutation, confirm).await;
    });
}

#[component]
pub fn PlaylistList() -> Element {
    let player = use_context::<Signal<PlayerState>>();
    let state = player.read();

    if !state.playlists_loaded {
        return rsx! {
            ul { id: "playlists", class: "playlist-list",
                li { class: "playlist-item placeholder",
                    Icon { name: IconName::Loader, class: "icon".to_string() }
                    "Loading playlists..."
                }
            }
        };
    }

    rsx! {
        ul { id: "playlists", class: "playlist-list",
            if state.playlists.is_empty() {
                li { class: "playlist-item placeholder", "No playlists found" }
            }
            for playlist in state.playlists.iter().cloned() {
                PlaylistRow {
                    key: "{playlist.id}",
                    selected: state.is_selected(playlist.id),
                    playlist: playlist.clone(),
                }
            }
        }
    }
}

#[component]
fn PlaylistRow(playlist: Playlist, selected: bool) -> Element {
    let player = use_context::<Signal<PlayerState>>();
    let settings = use_context::<Signal<AppSettings>>();
    let playback = use_context::<PlaybackSignal>().0;
    let playlist_id = playlist.id;

    let on_update = move |evt: MouseEvent| {
        evt.stop_propagation();
        spawn_mutation(Mutation::Update(playlist_id), |_| true, player, settings);
    };

    let on_delete = {
        let playlist = playlist.clone();
        move |evt: MouseEvent| {
            evt.stop_propagation();
            let playlist = playlist.clone();
            spawn_mutation(
                Mutation::Delete(playlist_id),
                move |_| confirm_delete(&playlist),
                player,
                settings,
            );
        }
    };

    rsx! {
        li {
            class: if selected { "playlist-item selected" } else { "playlist-item" },
            "data-id": "{playlist_id}",
            onclick: move |_| select_and_play(playlist_id, player, settings, playback),
            Icon { name: IconName::Playlist, class: "icon muted".to_string() }
            span { class: "playlist-title", "{playlist.title}" }
            div { class: "playlist-buttons",
                button {
                    r#type: "button",
                    class: "btn",
                    title: "Update",
                    onclick: on_update,
                    Icon { name: IconName::Refresh, class: "icon".to_string() }
                    "Update"
                }
                a {
                    class: "btn playlist-link",
                    href: "{playlist.url}",
                    target: "_blank",
                    rel: "noopener",
                    onclick: move |evt: MouseEvent| evt.stop_propagation(),
                    Icon { name: IconName::Link, class: "icon".to_string() }
                    "Link"
                }
                button {
                    r#type: "button",
                    class: "btn btn-danger",
                    title: "Delete",
                    onclick: on_delete,
                    Icon { name: IconName::Trash, class: "icon".to_string() }
                    "Delete"
                }
            }
        }
    }
}
