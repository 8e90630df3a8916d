//! Ordered, duplicate-free track collection.

use std::collections::HashSet;

use crate::constants::{DEFAULT_PLAYLIST_DESCRIPTION, DEFAULT_PLAYLIST_NAME};

use super::track::{Track, TrackSignature};

/// A playlist under construction.
///
/// Insertion order is preserved. A seen-signature set mirrors the track
/// sequence, so two entries sharing a name and main artist never coexist
/// even when their catalog ids differ.
#[derive(Debug, Clone)]
pub struct Playlist {
    pub name: String,
    pub description: String,
    tracks: Vec<Track>,
    seen: HashSet<TrackSignature>,
}

impl Default for Playlist {
    fn default() -> Self {
        Self::with_name(DEFAULT_PLAYLIST_NAME)
    }
}

impl Playlist {
    pub fn with_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: DEFAULT_PLAYLIST_DESCRIPTION.to_string(),
            tracks: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Append a track unless an equal-signature track is already held.
    /// Returns whether the track was added.
    pub fn add(&mut self, track: Track) -> bool {
        if self.seen.insert(track.signature()) {
            self.tracks.push(track);
            true
        } else {
            false
        }
    }

    /// Add tracks in order, skipping duplicates. Returns how many were added.
    pub fn add_tracks(&mut self, tracks: impl IntoIterator<Item = Track>) -> usize {
        let mut added = 0;
        for track in tracks {
            if self.add(track) {
                added += 1;
            }
        }
        added
    }

    /// Drop all tracks. Name and description stay; dropped signatures may be
    /// added again afterwards.
    pub fn clear(&mut self) {
        self.tracks.clear();
        self.seen.clear();
    }

    /// Playable URIs in playlist order. Tracks without a URI are skipped.
    pub fn track_uris(&self) -> Vec<&str> {
        self.tracks
            .iter()
            .filter_map(|track| track.uri.as_deref())
            .collect()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(name: &str, artist: &str) -> Track {
        Track {
            id: Some(format!("id-{}-{}", name, artist)),
            name: Some(name.to_string()),
            artists: vec![artist.to_string()],
            main_artist: artist.to_string(),
            uri: Some(format!("spotify:track:{}", name)),
            album: "Unknown Album".to_string(),
            popularity: 0,
        }
    }

    #[test]
    fn defaults_are_applied() {
        let playlist = Playlist::default();
        assert_eq!(playlist.name, DEFAULT_PLAYLIST_NAME);
        assert_eq!(playlist.description, DEFAULT_PLAYLIST_DESCRIPTION);
        assert!(playlist.is_empty());
    }

    #[test]
    fn adding_same_signature_twice_grows_by_one() {
        let mut playlist = Playlist::default();

        assert!(playlist.add(track("Song", "Artist")));
        assert!(!playlist.add(track("Song", "Artist")));
        assert_eq!(playlist.len(), 1);
    }

    #[test]
    fn duplicate_detection_ignores_catalog_ids() {
        let mut playlist = Playlist::default();

        let mut first = track("Song", "Artist");
        first.id = Some("id-one".to_string());
        let mut second = track("Song", "Artist");
        second.id = Some("id-two".to_string());
        second.uri = Some("spotify:track:other".to_string());

        assert!(playlist.add(first));
        assert!(!playlist.add(second));
        assert_eq!(playlist.len(), 1);
    }

    #[test]
    fn add_tracks_counts_new_entries_and_keeps_order() {
        let mut playlist = Playlist::default();

        let added = playlist.add_tracks(vec![
            track("One", "A"),
            track("Two", "B"),
            track("One", "A"),
            track("Three", "C"),
        ]);

        assert_eq!(added, 3);
        let names: Vec<_> = playlist
            .tracks()
            .iter()
            .filter_map(|t| t.name.as_deref())
            .collect();
        assert_eq!(names, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn held_signatures_are_unique() {
        let mut playlist = Playlist::default();
        playlist.add_tracks(vec![
            track("One", "A"),
            track("One", "A"),
            track("One", "B"),
            track("Two", "A"),
        ]);

        let signatures: HashSet<_> = playlist.tracks().iter().map(Track::signature).collect();
        assert_eq!(signatures.len(), playlist.len());
    }

    #[test]
    fn track_uris_skip_missing_entries() {
        let mut playlist = Playlist::default();
        playlist.add(track("One", "A"));
        let mut no_uri = track("Two", "B");
        no_uri.uri = None;
        playlist.add(no_uri);
        playlist.add(track("Three", "C"));

        assert_eq!(
            playlist.track_uris(),
            vec!["spotify:track:One", "spotify:track:Three"]
        );
    }

    #[test]
    fn clear_resets_tracks_and_signatures() {
        let mut playlist = Playlist::with_name("Mix");
        playlist.add(track("Song", "Artist"));

        playlist.clear();
        assert!(playlist.is_empty());
        assert_eq!(playlist.name, "Mix");

        // Cleared signatures are insertable again.
        assert!(playlist.add(track("Song", "Artist")));

        playlist.clear();
        playlist.clear();
        assert!(playlist.is_empty());
    }
}
