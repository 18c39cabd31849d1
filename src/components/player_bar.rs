use crate::components::{
    play_next_song, toggle_play_pause, AudioState, Icon, IconName, PlaybackSignal,
};
use crate::config::{normalize_volume, save_settings, AppSettings};
use crate::player::{progress_label, PlaybackStatus, PlayerState};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

/// Now-playing strip: play/pause, skip, current song and elapsed time.
#[component]
pub fn PlayerBar() -> Element {
    let player = use_context::<Signal<PlayerState>>();
    let settings = use_context::<Signal<AppSettings>>();
    let playback = use_context::<PlaybackSignal>().0;
    let audio_state = use_context::<AudioState>();

    let status = playback();
    let current_song = player.read().current_song.clone();
    let progress = progress_label(
        *audio_state.current_time.read(),
        *audio_state.duration.read(),
    );
    let label = status.button_label();

    rsx! {
        div { class: "player-bar",
            div { class: "player-controls",
                button {
                    id: "play-pause-btn",
                    r#type: "button",
                    class: "btn btn-round",
                    onclick: move |_| toggle_play_pause(player, playback),
                    if status == PlaybackStatus::Playing {
                        Icon { name: IconName::Pause, class: "icon".to_string() }
                    } else {
                        Icon { name: IconName::Play, class: "icon".to_string() }
                    }
                    span { class: "btn-label", "{label}" }
                }
                button {
                    id: "skip-btn",
                    r#type: "button",
                    class: "btn btn-round",
                    onclick: move |_| play_next_song(player, settings, playback),
                    Icon { name: IconName::Next, class: "icon".to_string() }
                    span { class: "btn-label", "Skip" }
                }
            }
            div { class: "now-playing",
                Icon { name: IconName::Music, class: "icon muted".to_string() }
                {match current_song {
                    Some(song) => rsx! {
                        a {
                            id: "song-link",
                            class: "current-song",
                            href: "{song.url}",
                            target: "_blank",
                            rel: "noopener",
                            "{song.title}"
                        }
                    },
                    None => rsx! {
                        span { id: "current-song", class: "current-song muted", "Nothing playing" }
                    },
                }}
                span { id: "song-progress", class: "song-progress", "{progress}" }
            }
            VolumeSlider {}
        }
    }
}

#[component]
fn VolumeSlider() -> Element {
    let mut settings = use_context::<Signal<AppSettings>>();
    let volume = settings.read().volume;

    rsx! {
        input {
            class: "volume",
            r#type: "range",
            min: "0",
            max: "1",
            step: "0.01",
            aria_label: "Volume",
            value: "{volume}",
            oninput: move |evt| {
                let Ok(parsed) = evt.value().parse::<f64>() else {
                    return;
                };
                settings.write().volume = normalize_volume(parsed);
                if let Err(err) = save_settings(&settings.peek()) {
                    warn!("failed to save settings: {err}");
                }
            },
        }
    }
}
