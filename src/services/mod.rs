//! Services module - playlist generation business logic.
//!
//! The search strategies and the generator live here. They reach the catalog
//! only through the [`TrackSource`] port, so the whole layer runs against
//! scripted sources in tests.

pub mod activity_search;
pub mod generator;
pub mod genre_search;
pub mod searcher;

// Re-export service types
pub use activity_search::SearchByActivity;
pub use generator::PlaylistGenerator;
pub use genre_search::SearchByGenre;
pub use searcher::{SearchMode, TrackSearcher, TrackSource};
