//! Ports and strategy selection for track search.

use crate::models::Track;

/// Outbound port to the track catalog: one bounded page of tracks for a
/// genre.
///
/// Implementations swallow their own failures and return an empty page,
/// indistinguishable from an exhausted catalog. The production
/// implementation is [`crate::api::SpotifyClient`]; tests script their own.
pub trait TrackSource: Send {
    fn fetch_genre_page(&self, genre: &str, limit: usize, offset: usize) -> Vec<Track>;
}

/// A search strategy: turn a query into at most `num_tracks` unique tracks.
///
/// Strategies return fewer tracks than requested when the catalog runs dry;
/// callers must tolerate short results.
pub trait TrackSearcher {
    fn search_tracks(&self, query: &str, num_tracks: usize) -> Vec<Track>;
}

/// Which strategy drives a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Single-genre catalog search.
    Genre,
    /// Fan-out over the genres mapped to an activity.
    Activity,
}
