/// Keyboard actions handled while focus is on the page body.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    TogglePlay,
    Next,
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub fn shortcut_for_key(key: &str) -> Option<ShortcutAction> {
    match key {
        " " | "Spacebar" | "MediaPlayPause" => Some(ShortcutAction::TogglePlay),
        "ArrowRight" | "MediaTrackNext" | "MediaNextTrack" => Some(ShortcutAction::Next),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_for_key() {
        assert_eq!(shortcut_for_key(" "), Some(ShortcutAction::TogglePlay));
        assert_eq!(shortcut_for_key("ArrowRight"), Some(ShortcutAction::Next));
        assert_eq!(shortcut_for_key("MediaTrackNext"), Some(ShortcutAction::Next));
        assert_eq!(shortcut_for_key("ArrowLeft"), None);
        assert_eq!(shortcut_for_key("a"), None);
    }
}
