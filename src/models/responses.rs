//! Raw payloads of the Spotify Web API, as they arrive on the wire.
//!
//! Every field that Spotify may omit is optional here; defaults are applied
//! when the payload is converted into a [`Track`](super::track::Track).

use serde::Deserialize;

/// Top-level payload of `GET /v1/search?type=track`.
#[derive(Debug, Deserialize, Clone)]
pub struct SearchTracksResponse {
    pub tracks: Option<TracksPage>,
}

/// One page of search results.
#[derive(Debug, Deserialize, Clone)]
pub struct TracksPage {
    pub items: Vec<TrackItem>,
    pub total: Option<u64>,
}

/// A single track entry inside a search page.
#[derive(Debug, Deserialize, Clone)]
pub struct TrackItem {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub artists: Vec<ArtistItem>,
    pub uri: Option<String>,
    pub album: Option<AlbumItem>,
    pub popularity: Option<u32>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ArtistItem {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AlbumItem {
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_search_payload() {
        let json = r#"{
            "tracks": {
                "items": [
                    {
                        "id": "4uLU6hMCjMI75M1A2tKUQC",
                        "name": "Never Gonna Give You Up",
                        "artists": [{"name": "Rick Astley"}],
                        "uri": "spotify:track:4uLU6hMCjMI75M1A2tKUQC",
                        "album": {"name": "Whenever You Need Somebody"},
                        "popularity": 81
                    },
                    {
                        "id": "5FVd6KXrgO9B3JPmC8OPst",
                        "name": "Do I Wanna Know?",
                        "artists": [{"name": "Arctic Monkeys"}],
                        "uri": "spotify:track:5FVd6KXrgO9B3JPmC8OPst",
                        "album": {"name": "AM"},
                        "popularity": 85
                    }
                ],
                "total": 1042
            }
        }"#;

        let response: SearchTracksResponse =
            serde_json::from_str(json).expect("payload should decode");
        let page = response.tracks.expect("tracks page present");

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, Some(1042));
        assert_eq!(page.items[0].name.as_deref(), Some("Never Gonna Give You Up"));
        assert_eq!(page.items[0].artists[0].name.as_deref(), Some("Rick Astley"));
        assert_eq!(page.items[1].popularity, Some(85));
    }

    #[test]
    fn tolerates_sparse_track_entries() {
        let json = r#"{
            "tracks": {
                "items": [
                    {"id": "abc123"}
                ]
            }
        }"#;

        let response: SearchTracksResponse =
            serde_json::from_str(json).expect("payload should decode");
        let page = response.tracks.expect("tracks page present");

        assert_eq!(page.items.len(), 1);
        let item = &page.items[0];
        assert_eq!(item.id.as_deref(), Some("abc123"));
        assert!(item.name.is_none());
        assert!(item.artists.is_empty());
        assert!(item.uri.is_none());
        assert!(item.album.is_none());
        assert!(item.popularity.is_none());
    }

    #[test]
    fn payload_without_tracks_key_decodes_to_none() {
        let response: SearchTracksResponse =
            serde_json::from_str("{}").expect("payload should decode");
        assert!(response.tracks.is_none());
    }
}
