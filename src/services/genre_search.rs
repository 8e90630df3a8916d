//! Single-genre search strategy.

use std::collections::HashSet;

use rand::seq::IteratorRandom;

use crate::constants::{MAX_SEARCH_CYCLES, SEARCH_PAGE_SIZE};
use crate::models::Track;

use super::searcher::{TrackSearcher, TrackSource};

/// Pages through the catalog for one genre until the requested count is
/// reached, the catalog runs dry, or the cycle ceiling is hit.
pub struct SearchByGenre<'a> {
    source: &'a dyn TrackSource,
}

impl<'a> SearchByGenre<'a> {
    pub fn new(source: &'a dyn TrackSource) -> Self {
        Self { source }
    }
}

impl TrackSearcher for SearchByGenre<'_> {
    fn search_tracks(&self, genre: &str, num_tracks: usize) -> Vec<Track> {
        let mut all_tracks: Vec<Track> = Vec::new();
        let mut seen: HashSet<_> = HashSet::new();
        let mut cycle = 0;

        while all_tracks.len() < num_tracks && cycle < MAX_SEARCH_CYCLES {
            let offset = cycle * SEARCH_PAGE_SIZE;
            let page = self.source.fetch_genre_page(genre, SEARCH_PAGE_SIZE, offset);

            // An empty page means the catalog is exhausted (or the fetch
            // failed); either way there is nothing further to page through.
            if page.is_empty() {
                break;
            }

            for track in page {
                if seen.insert(track.signature()) {
                    all_tracks.push(track);
                    if all_tracks.len() >= num_tracks {
                        break;
                    }
                }
            }

            cycle += 1;
        }

        sample_down(all_tracks, num_tracks)
    }
}

/// Clamp an oversized accumulation to `num_tracks` by uniform sampling
/// without replacement.
///
/// The scan above stops exactly at the target, so this does not trigger on
/// the current path; it keeps the bound if the accumulation ever changes.
fn sample_down(tracks: Vec<Track>, num_tracks: usize) -> Vec<Track> {
    if tracks.len() <= num_tracks {
        return tracks;
    }
    let mut rng = rand::rng();
    tracks.into_iter().choose_multiple(&mut rng, num_tracks)
}
