//! Application constants and configuration values

use once_cell::sync::Lazy;
use std::collections::HashMap;

// === Spotify Endpoints ===
pub const API_BASE_URL: &str = "https://api.spotify.com/v1";
pub const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

// === Search Tuning ===
pub const SEARCH_PAGE_SIZE: usize = 50; // catalog entries per fetch
pub const MAX_SEARCH_CYCLES: usize = 10; // hard ceiling on pages per genre
pub const MAX_ACTIVITY_ATTEMPTS: usize = 3; // fan-out retries per request
pub const GENRE_QUOTA_OVERSHOOT: usize = 10; // extra tracks per genre to absorb duplicate losses
pub const DEFAULT_TRACK_COUNT: usize = 20;

// === Playlist Defaults ===
pub const DEFAULT_PLAYLIST_NAME: &str = "My Playlist";
pub const DEFAULT_PLAYLIST_DESCRIPTION: &str = "Generated with Spotify Playlist Generator";

/// Activity presets mapped to Spotify genre seeds.
///
/// Read-only reference data. The list order inside each entry is the fan-out
/// order used by the activity search, and every activity carries at least one
/// genre; the strategies rely on both.
pub static ACTIVITY_GENRES: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    HashMap::from([
        ("Workout", vec!["work-out", "edm", "hip-hop"]),
        ("Study", vec!["study", "classical", "ambient"]),
        ("Party", vec!["party", "dance", "pop"]),
        ("Running", vec!["work-out", "techno", "drum-and-bass"]),
        ("Relaxing", vec!["chill", "acoustic", "ambient"]),
        ("Sleeping", vec!["sleep", "ambient"]),
        ("Driving", vec!["road-trip", "rock", "indie"]),
        ("Gaming", vec!["edm", "dubstep"]),
    ])
});

/// Activity labels in a stable order for display.
pub fn activity_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = ACTIVITY_GENRES.keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_activity_maps_to_at_least_one_genre() {
        for (activity, genres) in ACTIVITY_GENRES.iter() {
            assert!(!genres.is_empty(), "activity '{}' has no genres", activity);
        }
    }

    #[test]
    fn gaming_fans_out_to_edm_and_dubstep() {
        assert_eq!(ACTIVITY_GENRES["Gaming"], vec!["edm", "dubstep"]);
    }

    #[test]
    fn activity_names_are_sorted_and_complete() {
        let names = activity_names();
        assert_eq!(names.len(), ACTIVITY_GENRES.len());
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }
}
