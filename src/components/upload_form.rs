use super::playlists::spawn_mutation;
use crate::components::{Icon, IconName};
use crate::config::AppSettings;
use crate::player::{Mutation, PlayerState};
use dioxus::prelude::*;

/// Registers a new playlist on the server from a link or identifier.
#[component]
pub fn UploadForm() -> Element {
    let player = use_context::<Signal<PlayerState>>();
    let settings = use_context::<Signal<AppSettings>>();
    let mut value = use_signal(String::new);
    let busy = player.read().progress().is_some();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let playlist = value.peek().trim().to_string();
        spawn_mutation(Mutation::Upload(playlist), |_| true, player, settings);
    };

    rsx! {
        form { id: "upload-form", class: "upload-form", onsubmit: on_submit,
            input {
                id: "upload-input",
                class: "upload-input",
                r#type: "text",
                placeholder: "Playlist link",
                value: "{value}",
                oninput: move |evt| value.set(evt.value()),
            }
            button { r#type: "submit", class: "btn btn-primary", disabled: busy,
                Icon { name: IconName::Upload, class: "icon".to_string() }
                "Upload"
            }
        }
    }
}
