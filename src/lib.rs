//! Spotify playlist generation: genre search, activity fan-out, dedup.
//!
//! The search core is synchronous and single-threaded; [`utils::background`]
//! moves whole generations onto a worker thread for callers that must not
//! block.

pub mod api;
pub mod constants;
pub mod models;
pub mod services;
pub mod utils;
