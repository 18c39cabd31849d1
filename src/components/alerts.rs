use crate::components::{Icon, IconName};
use crate::player::PlayerState;
use dioxus::prelude::*;

/// Progress text for in-flight mutations and the single dismissible error.
#[component]
pub fn Alerts() -> Element {
    let mut player = use_context::<Signal<PlayerState>>();
    let progress = player.read().progress();
    let error = player.read().error.clone();

    rsx! {
        div { class: "alerts",
            if let Some(label) = progress {
                div { id: "progress", class: "alert alert-progress", role: "status",
                    Icon { name: IconName::Loader, class: "icon".to_string() }
                    span { "{label}" }
                }
            }
            if let Some(message) = error {
                div { id: "error", class: "alert alert-error", role: "alert",
                    span { "{message}" }
                    button {
                        r#type: "button",
                        class: "alert-dismiss",
                        aria_label: "Dismiss",
                        onclick: move |_| player.write().dismiss_error(),
                        Icon { name: IconName::Close, class: "icon".to_string() }
                    }
                }
            }
        }
    }
}
