//! Track entity built from a raw search payload item.

use std::fmt;

use super::responses::TrackItem;

/// Identity key used for deduplication: `(name, main artist)`.
///
/// Two tracks with the same pair count as the same song even when their
/// catalog ids differ, as happens when one recording appears on several
/// releases.
pub type TrackSignature = (Option<String>, String);

/// One catalog track. Built once from a [`TrackItem`] and not mutated
/// afterwards; absent payload fields are filled with fixed fallbacks so the
/// rest of the app never deals with missing data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: Option<String>,
    pub name: Option<String>,
    pub artists: Vec<String>,
    /// First artist name, or `"Unknown"`. Fixed at construction.
    pub main_artist: String,
    pub uri: Option<String>,
    pub album: String,
    pub popularity: u32,
}

impl Track {
    /// Dedup key for this track, independent of `id` and `uri`.
    pub fn signature(&self) -> TrackSignature {
        (self.name.clone(), self.main_artist.clone())
    }
}

impl From<TrackItem> for Track {
    fn from(item: TrackItem) -> Self {
        let artists: Vec<String> = item
            .artists
            .into_iter()
            .filter_map(|artist| artist.name)
            .collect();
        let main_artist = artists
            .first()
            .cloned()
            .unwrap_or_else(|| "Unknown".to_string());

        Self {
            id: item.id,
            name: item.name,
            artists,
            main_artist,
            uri: item.uri,
            album: item
                .album
                .and_then(|album| album.name)
                .unwrap_or_else(|| "Unknown Album".to_string()),
            popularity: item.popularity.unwrap_or(0),
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {}",
            self.name.as_deref().unwrap_or("Unknown"),
            self.main_artist
        )
    }
}
