use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    Playlist,
    Music,
    Play,
    Pause,
    Next,
    Refresh,
    Link,
    Trash,
    Upload,
    Close,
    Loader,
}

#[component]
pub fn Icon(name: IconName, class: String) -> Element {
    match name {
        IconName::Playlist => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                path { d: "M21 15V6" }
                path { d: "M18.5 18a2.5 2.5 0 1 0 0-5 2.5 2.5 0 0 0 0 5Z" }
                path { d: "M12 12H3" }
                path { d: "M16 6H3" }
                path { d: "M12 18H3" }
            }
        },
        IconName::Music => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                path { d: "M9 18V5l12-2v13" }
                circle { cx: "6", cy: "18", r: "3" }
                circle { cx: "18", cy: "16", r: "3" }
            }
        },
        IconName::Play => rsx! {
            svg { class: "{class}", view_box: "0 0 24 24", fill: "currentColor",
                polygon { points: "5 3 19 12 5 21 5 3" }
            }
        },
        IconName::Pause => rsx! {
            svg { class: "{class}", view_box: "0 0 24 24", fill: "currentColor",
                rect { x: "6", y: "4", width: "4", height: "16" }
                rect { x: "14", y: "4", width: "4", height: "16" }
            }
        },
        IconName::Next => rsx! {
            svg { class: "{class}", view_box: "0 0 24 24", fill: "currentColor",
                polygon { points: "5 4 15 12 5 20 5 4" }
                line {
                    x1: "19",
                    y1: "5",
                    x2: "19",
                    y2: "19",
                    stroke: "currentColor",
                    stroke_width: "2",
                }
            }
        },
        IconName::Refresh => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                polyline { points: "23 4 23 10 17 10" }
                path { d: "M20.49 15a9 9 0 1 1-2.12-9.36L23 10" }
            }
        },
        IconName::Link => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                path { d: "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" }
                polyline { points: "15 3 21 3 21 9" }
                line { x1: "10", y1: "14", x2: "21", y2: "3" }
            }
        },
        IconName::Trash => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                polyline { points: "3 6 5 6 21 6" }
                path { d: "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6m3 0V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2" }
            }
        },
        IconName::Upload => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
                polyline { points: "17 8 12 3 7 8" }
                line { x1: "12", y1: "3", x2: "12", y2: "15" }
            }
        },
        IconName::Close => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                line { x1: "18", y1: "6", x2: "6", y2: "18" }
                line { x1: "6", y1: "6", x2: "18", y2: "18" }
            }
        },
        IconName::Loader => rsx! {
            svg {
                class: "{class} spin",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "12", cy: "12", r: "10", opacity: "0.25" }
                path { d: "M12 2a10 10 0 0 1 10 10", opacity: "0.75" }
            }
        },
    }
}
