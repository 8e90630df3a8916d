// Data models for Spotify catalog entities

pub mod playlist;
pub mod responses;
pub mod track;

// Re-export commonly used types
pub use playlist::Playlist;
pub use responses::{AlbumItem, ArtistItem, SearchTracksResponse, TrackItem, TracksPage};
pub use track::{Track, TrackSignature};
