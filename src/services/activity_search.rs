//! Activity fan-out search strategy.

use std::collections::HashSet;

use rand::seq::SliceRandom;

use crate::constants::{ACTIVITY_GENRES, GENRE_QUOTA_OVERSHOOT, MAX_ACTIVITY_ATTEMPTS};
use crate::models::Track;

use super::genre_search::SearchByGenre;
use super::searcher::{TrackSearcher, TrackSource};

/// Fans one request out across the genres mapped to an activity, merging
/// and deduplicating the per-genre results.
pub struct SearchByActivity<'a> {
    source: &'a dyn TrackSource,
}

impl<'a> SearchByActivity<'a> {
    pub fn new(source: &'a dyn TrackSource) -> Self {
        Self { source }
    }
}

impl TrackSearcher for SearchByActivity<'_> {
    fn search_tracks(&self, activity: &str, num_tracks: usize) -> Vec<Track> {
        let genres = match ACTIVITY_GENRES.get(activity) {
            Some(genres) => genres,
            None => {
                log::error!("[ActivitySearch] Activity '{}' not recognized", activity);
                return Vec::new();
            }
        };

        let mut all_tracks: Vec<Track> = Vec::new();
        let mut seen: HashSet<_> = HashSet::new();

        // The remainder of the even split is fixed up front and added to
        // every genre's quota on every attempt.
        let remainder = num_tracks % genres.len();
        let mut attempts = 0;

        while all_tracks.len() < num_tracks && attempts < MAX_ACTIVITY_ATTEMPTS {
            let remaining = num_tracks - all_tracks.len();
            let per_genre = remaining / genres.len();

            for genre in genres {
                let quota = genre_quota(per_genre, remainder);
                let found = SearchByGenre::new(self.source).search_tracks(genre, quota);

                for track in found {
                    if seen.insert(track.signature()) {
                        all_tracks.push(track);
                        if all_tracks.len() >= num_tracks {
                            break;
                        }
                    }
                }

                if all_tracks.len() >= num_tracks {
                    break;
                }
            }

            attempts += 1;

            if all_tracks.len() < num_tracks {
                log::info!(
                    "[ActivitySearch] Retrieved {} of {} tracks for '{}', fetching more",
                    all_tracks.len(),
                    num_tracks,
                    activity
                );
            }
        }

        let mut rng = rand::rng();
        all_tracks.shuffle(&mut rng);
        all_tracks.truncate(num_tracks);
        all_tracks
    }
}

/// Request quota for one genre: the even share of what is still missing,
/// plus the split remainder, plus an overshoot buffer that covers losses to
/// cross-genre duplicates.
fn genre_quota(per_genre: usize, remainder: usize) -> usize {
    per_genre + remainder + GENRE_QUOTA_OVERSHOOT
}
