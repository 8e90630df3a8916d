// Spotify Web API client modules

pub mod auth;
pub mod search;

pub use auth::SpotifyAuth;
pub use search::SpotifyClient;
