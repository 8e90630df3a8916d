//! Playlist generation driver.

use std::error::Error;

use crate::models::Playlist;

use super::activity_search::SearchByActivity;
use super::genre_search::SearchByGenre;
use super::searcher::{SearchMode, TrackSearcher, TrackSource};

/// Drives a generation end to end: strategy dispatch, search, dedup insert.
///
/// Owns the catalog source and the playlist being built. A strategy must be
/// selected before the first generation.
pub struct PlaylistGenerator {
    source: Box<dyn TrackSource>,
    playlist: Playlist,
    strategy: Option<SearchMode>,
}

impl PlaylistGenerator {
    pub fn new(source: Box<dyn TrackSource>) -> Self {
        Self {
            source,
            playlist: Playlist::default(),
            strategy: None,
        }
    }

    /// Select the strategy used by subsequent [`Self::generate_playlist`]
    /// calls.
    pub fn set_strategy(&mut self, mode: SearchMode) {
        self.strategy = Some(mode);
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Build a fresh playlist for `query`.
    ///
    /// The previous playlist is replaced; only its name carries over, or
    /// `playlist_name` when given. A dry catalog yields a short (possibly
    /// empty) playlist, not an error; the only failure is generating with no
    /// strategy selected.
    pub fn generate_playlist(
        &mut self,
        query: &str,
        num_tracks: usize,
        playlist_name: Option<&str>,
    ) -> Result<&Playlist, Box<dyn Error>> {
        let mode = match self.strategy {
            Some(mode) => mode,
            None => return Err("no search strategy selected".into()),
        };

        let name = match playlist_name {
            Some(name) => name.to_string(),
            None => self.playlist.name.clone(),
        };
        self.playlist = Playlist::with_name(&name);

        log::info!(
            "[Generator] Generating '{}' with {:?} search for query '{}'",
            self.playlist.name,
            mode,
            query
        );

        let source = self.source.as_ref();
        let searcher: Box<dyn TrackSearcher + '_> = match mode {
            SearchMode::Genre => Box::new(SearchByGenre::new(source)),
            SearchMode::Activity => Box::new(SearchByActivity::new(source)),
        };

        let found = searcher.search_tracks(query, num_tracks);
        let added = self.playlist.add_tracks(found);
        log::info!(
            "[Generator] Playlist '{}' holds {} tracks",
            self.playlist.name,
            added
        );

        Ok(&self.playlist)
    }
}
