use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Playlist {
    pub id: i64,
    pub title: String,
    /// Directory on the server holding the playlist's audio files.
    /// Older servers send this under `filename`.
    #[serde(default, alias = "filename")]
    pub folder: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Song {
    pub filename: String,
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// Body of `POST /api/playlists/upload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadRequest {
    pub playlist: String,
}

/// Envelope returned by the mutating endpoints. Success bodies are `{}` or
/// carry an empty `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub error: Option<String>,
}

/// Sorts playlists by title using plain string ordering (case-sensitive).
pub fn sort_by_title(playlists: &mut [Playlist]) {
    playlists.sort_by(|a, b| a.title.cmp(&b.title));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist(id: i64, title: &str) -> Playlist {
        Playlist {
            id,
            title: title.to_string(),
            folder: format!("folder-{id}"),
            url: String::new(),
        }
    }

    #[test]
    fn test_sort_by_title_is_case_sensitive() {
        let mut playlists = vec![
            playlist(1, "lofi"),
            playlist(2, "Jazz"),
            playlist(3, "ambient"),
            playlist(4, "Classical"),
        ];
        sort_by_title(&mut playlists);

        let titles: Vec<&str> = playlists.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Classical", "Jazz", "ambient", "lofi"]);
        assert!(playlists.windows(2).all(|w| w[0].title <= w[1].title));
    }

    #[test]
    fn test_sort_keeps_equal_titles_in_order() {
        let mut playlists = vec![playlist(7, "Mix"), playlist(3, "Mix"), playlist(1, "A")];
        sort_by_title(&mut playlists);
        let ids: Vec<i64> = playlists.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 7, 3]);
    }

    #[test]
    fn test_playlist_accepts_filename_key_for_folder() {
        let json = r#"{"id": 4, "title": "Road Trip", "filename": "Road_Trip", "url": "https://example.com/p"}"#;
        let decoded: Playlist = serde_json::from_str(json).expect("decode");
        assert_eq!(decoded.folder, "Road_Trip");

        let json = r#"{"id": 4, "title": "Road Trip", "folder": "road", "url": ""}"#;
        let decoded: Playlist = serde_json::from_str(json).expect("decode");
        assert_eq!(decoded.folder, "road");
    }

    #[test]
    fn test_envelope_decodes_empty_object() {
        let decoded: ApiEnvelope = serde_json::from_str("{}").expect("decode");
        assert_eq!(decoded.error, None);

        let decoded: ApiEnvelope =
            serde_json::from_str(r#"{"error": "Playlist already exists"}"#).expect("decode");
        assert_eq!(decoded.error.as_deref(), Some("Playlist already exists"));
    }
}
