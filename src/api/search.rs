//! Catalog search against the Spotify Web API.

use reqwest::header::AUTHORIZATION;

use crate::constants::API_BASE_URL;
use crate::models::{SearchTracksResponse, Track};
use crate::services::TrackSource;

use super::auth::SpotifyAuth;

/// Blocking Spotify catalog client.
pub struct SpotifyClient {
    auth: SpotifyAuth,
    http: reqwest::blocking::Client,
}

impl SpotifyClient {
    pub fn new(auth: SpotifyAuth) -> Self {
        Self {
            auth,
            http: reqwest::blocking::Client::new(),
        }
    }
}

/// Search URL for one page of genre-filtered tracks. The `genre:` filter
/// goes through the query parameter and must be percent-encoded.
fn search_url(genre: &str, limit: usize, offset: usize) -> String {
    format!(
        "{}/search?q={}&type=track&limit={}&offset={}",
        API_BASE_URL,
        urlencoding::encode(&format!("genre:{}", genre)),
        limit,
        offset
    )
}

impl TrackSource for SpotifyClient {
    /// Fetch one page of tracks for a genre.
    ///
    /// Any failure, from a missing token to an unexpected payload, is logged
    /// and mapped to an empty page; callers cannot tell it from an exhausted
    /// catalog.
    fn fetch_genre_page(&self, genre: &str, limit: usize, offset: usize) -> Vec<Track> {
        let header = match self.auth.auth_header() {
            Some(header) => header,
            None => {
                log::error!("[Search] No access token for genre '{}' search", genre);
                return Vec::new();
            }
        };

        let url = search_url(genre, limit, offset);
        log::debug!("[Search] GET {}", url);

        let response = match self.http.get(&url).header(AUTHORIZATION, header).send() {
            Ok(response) => response,
            Err(e) => {
                log::error!("[Search] Request for genre '{}' failed: {}", genre, e);
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            log::error!(
                "[Search] Genre '{}' search returned status {}",
                genre,
                response.status()
            );
            return Vec::new();
        }

        let payload: SearchTracksResponse = match response.json() {
            Ok(payload) => payload,
            Err(e) => {
                log::error!("[Search] Could not decode tracks for genre '{}': {}", genre, e);
                return Vec::new();
            }
        };

        match payload.tracks {
            Some(page) => {
                log::debug!(
                    "[Search] Genre '{}' offset {}: {} tracks in page",
                    genre,
                    offset,
                    page.items.len()
                );
                page.items.into_iter().map(Track::from).collect()
            }
            None => {
                log::error!("[Search] Could not retrieve tracks for genre '{}'", genre);
                Vec::new()
            }
        }
    }
}
