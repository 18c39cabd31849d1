use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod player;

use components::AppShell;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("failed to initialize logger: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Playlist Player" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Meta { name: "theme-color", content: "#1f2430" }
        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
