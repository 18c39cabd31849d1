use crate::components::{
    Alerts, AudioController, AudioState, PlaybackSignal, PlayerBar, PlaylistList, UploadForm,
};
use crate::config::load_settings;
use crate::player::{refresh_playlists, PlaybackStatus, PlayerState, PlayerStore};
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

impl PlayerStore for Signal<PlayerState> {
    fn with_state<R>(&mut self, f: impl FnOnce(&mut PlayerState) -> R) -> R {
        let mut state = self.write();
        f(&mut *state)
    }
}

#[component]
pub fn AppShell() -> Element {
    let settings = use_signal(load_settings);
    let mut player = use_signal(PlayerState::new);
    let playback = use_signal(|| PlaybackStatus::Paused);
    let current_time = use_signal(|| 0.0f64);
    let duration = use_signal(|| 0.0f64);

    // Provide state via context
    use_context_provider(|| settings);
    use_context_provider(|| player);
    use_context_provider(|| PlaybackSignal(playback));
    use_context_provider(|| AudioState {
        current_time,
        duration,
    });

    // Load playlists on mount
    use_effect(move || {
        let client = settings.peek().client();
        info!("loading playlists from {}", client.base_url());
        spawn(async move {
            refresh_playlists(&client, &mut player).await;
        });
    });

    rsx! {
        AudioController {}
        div { class: "app",
            header { class: "app-header",
                h1 { "Playlists" }
            }
            main { class: "app-main",
                Alerts {}
                UploadForm {}
                PlaylistList {}
            }
            footer { class: "app-footer", PlayerBar {} }
        }
    }
}

