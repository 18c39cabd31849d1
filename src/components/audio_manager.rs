//! Audio Manager - owns the page's single audio element and routes playback
//! commands and media events through the player state.

use crate::config::AppSettings;
use crate::player::*;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::warn;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement, HtmlMediaElement, KeyboardEvent};

#[cfg(target_arch = "wasm32")]
const AUDIO_ELEMENT_ID: &str = "playlist-player-audio";

/// Playback position, refreshed on every `timeupdate`.
#[derive(Clone, Copy)]
pub struct AudioState {
    pub current_time: Signal<f64>,
    pub duration: Signal<f64>,
}

#[derive(Clone, Copy)]
pub struct PlaybackSignal(pub Signal<PlaybackStatus>);

/// Initialize the global audio element once.
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

#[cfg(target_arch = "wasm32")]
impl MediaElement for HtmlAudioElement {
    fn paused(&self) -> bool {
        let media: &HtmlMediaElement = self;
        media.paused()
    }

    fn play(&self) {
        let media: &HtmlMediaElement = self;
        if let Ok(promise) = media.play() {
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    warn!("audio element refused to play: {err:?}");
                }
            });
        }
    }

    fn pause(&self) {
        let media: &HtmlMediaElement = self;
        if let Err(err) = media.pause() {
            warn!("audio element refused to pause: {err:?}");
        }
    }

    fn load_source(&self, src: &str) {
        let media: &HtmlMediaElement = self;
        media.set_src(src);
        media.load();
    }

    fn set_volume(&self, volume: f64) {
        let media: &HtmlMediaElement = self;
        media.set_volume(volume);
    }
}

#[cfg(target_arch = "wasm32")]
fn with_media<R>(f: impl FnOnce(&dyn MediaElement) -> R) -> Option<R> {
    let audio = get_or_create_audio_element()?;
    Some(f(&audio))
}

#[cfg(not(target_arch = "wasm32"))]
fn with_media<R>(_f: impl FnOnce(&dyn MediaElement) -> R) -> Option<R> {
    None
}

/// Advances to a random song of the current playlist and starts streaming it.
pub fn play_next_song(
    mut player: Signal<PlayerState>,
    settings: Signal<AppSettings>,
    mut playback: Signal<PlaybackStatus>,
) {
    let client = settings.peek().client();
    let mut rng = rand::thread_rng();
    let Some(started) =
        with_media(|media| start_next_song(&client, &mut player.write(), media, &mut rng))
    else {
        return;
    };
    match started {
        Ok(song) => {
            playback.set(PlaybackStatus::Playing);
            set_media_session_title(&song.title);
        }
        Err(err) => player.write().show_error(err.to_string()),
    }
}

pub fn toggle_play_pause(mut player: Signal<PlayerState>, mut playback: Signal<PlaybackStatus>) {
    let Some(result) = with_media(|media| toggle_playback(&mut player.write(), media)) else {
        return;
    };
    match result {
        Ok(status) => playback.set(status),
        Err(err) => player.write().show_error(err.to_string()),
    }
}

/// Selects a playlist, fetches its songs and starts a random one.
///
/// The task lives in the root scope so it survives the row that started it.
/// Responses for a playlist the user has since moved away from are dropped.
pub fn select_and_play(
    playlist_id: i64,
    player: Signal<PlayerState>,
    settings: Signal<AppSettings>,
    playback: Signal<PlaybackStatus>,
) {
    let client = settings.peek().client();
    spawn_forever(async move {
        let mut store = player;
        if load_selected_songs(&client, &mut store, playlist_id).await {
            play_next_song(player, settings, playback);
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn set_media_session_title(title: &str) {
    let Ok(title) = serde_json::to_string(title) else {
        return;
    };
    let _ = js_sys::eval(&format!(
        r#"
(() => {{
  if (!("mediaSession" in navigator) || typeof MediaMetadata === "undefined") return;
  try {{
    navigator.mediaSession.metadata = new MediaMetadata({{ title: {title} }});
  }} catch (_err) {{}}
}})();
"#
    ));
}

#[cfg(not(target_arch = "wasm32"))]
fn set_media_session_title(_title: &str) {}

/// Routes OS media controls to the audio element and the skip button.
#[cfg(target_arch = "wasm32")]
fn ensure_web_media_session() {
    let _ = js_sys::eval(
        r#"
(() => {
  if (window.__playlistPlayerMediaSessionInit) {
    return true;
  }

  const audio = document.getElementById("playlist-player-audio");
  if (!audio) {
    return false;
  }

  if (!("mediaSession" in navigator)) {
    window.__playlistPlayerMediaSessionInit = true;
    return true;
  }

  const clickById = (id) => {
    const element = document.getElementById(id);
    if (element && typeof element.click === "function") {
      element.click();
    }
  };

  const updatePlaybackState = () => {
    try {
      navigator.mediaSession.playbackState = audio.paused ? "paused" : "playing";
    } catch (_err) {}
  };

  try {
    navigator.mediaSession.setActionHandler("play", () => {
      audio.play().catch(() => {});
    });
  } catch (_err) {}
  try {
    navigator.mediaSession.setActionHandler("pause", () => audio.pause());
  } catch (_err) {}
  try {
    navigator.mediaSession.setActionHandler("nexttrack", () => clickById("skip-btn"));
  } catch (_err) {}

  audio.addEventListener("play", updatePlaybackState);
  audio.addEventListener("pause", updatePlaybackState);

  window.__playlistPlayerMediaSessionInit = true;
  return true;
})();
"#,
    );
}

/// Shortcuts only fire when nothing in particular has focus, so typing into
/// the upload field is left alone.
#[cfg(target_arch = "wasm32")]
fn event_targets_body(event: &KeyboardEvent) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .map(|element| element.tag_name().eq_ignore_ascii_case("body"))
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn AudioController() -> Element {
    rsx! {}
}

#[cfg(target_arch = "wasm32")]
#[component]
pub fn AudioController() -> Element {
    let player = use_context::<Signal<PlayerState>>();
    let settings = use_context::<Signal<AppSettings>>();
    let playback = use_context::<PlaybackSignal>().0;
    let audio_state = use_context::<AudioState>();

    // One-time setup: create audio element and attach listeners.
    use_effect(move || {
        let Some(audio) = get_or_create_audio_element() else {
            warn!("could not create the audio element");
            return;
        };
        ensure_web_media_session();

        let runtime = Runtime::current();

        let time_cb = {
            let runtime = runtime.clone();
            let audio = audio.clone();
            let mut current_time = audio_state.current_time;
            let mut duration = audio_state.duration;
            Closure::wrap(Box::new(move || {
                let _guard = RuntimeGuard::new(runtime.clone());
                current_time.set(audio.current_time());
                duration.set(audio.duration());
            }) as Box<dyn FnMut()>)
        };

        let status_cb = {
            let runtime = runtime.clone();
            let audio = audio.clone();
            let mut playback = playback;
            Closure::wrap(Box::new(move || {
                let _guard = RuntimeGuard::new(runtime.clone());
                playback.set(PlaybackStatus::from_paused(MediaElement::paused(&audio)));
            }) as Box<dyn FnMut()>)
        };

        // Advance once the current DOM callback has returned.
        let ended_cb = {
            let runtime = runtime.clone();
            Closure::wrap(Box::new(move || {
                let runtime = runtime.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(0).await;
                    let _guard = RuntimeGuard::new(runtime);
                    play_next_song(player, settings, playback);
                });
            }) as Box<dyn FnMut()>)
        };

        let _ = audio
            .add_event_listener_with_callback("timeupdate", time_cb.as_ref().unchecked_ref());
        let _ =
            audio.add_event_listener_with_callback("play", status_cb.as_ref().unchecked_ref());
        let _ =
            audio.add_event_listener_with_callback("pause", status_cb.as_ref().unchecked_ref());
        let _ = audio.add_event_listener_with_callback("ended", ended_cb.as_ref().unchecked_ref());
        time_cb.forget();
        status_cb.forget();
        ended_cb.forget();

        if let Some(doc) = window().and_then(|w| w.document()) {
            let runtime = runtime.clone();
            let key_cb = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                if event.default_prevented() || !event_targets_body(&event) {
                    return;
                }
                let Some(action) = shortcut_for_key(&event.key()) else {
                    return;
                };
                event.prevent_default();
                let _guard = RuntimeGuard::new(runtime.clone());
                match action {
                    ShortcutAction::TogglePlay => toggle_play_pause(player, playback),
                    ShortcutAction::Next => play_next_song(player, settings, playback),
                }
            }) as Box<dyn FnMut(KeyboardEvent)>);
            let _ =
                doc.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
            key_cb.forget();
        }
    });

    use_effect(move || {
        let volume = settings.read().volume;
        with_media(|media| apply_volume(media, volume));
    });

    rsx! {}
}
