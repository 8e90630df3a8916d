//! Background execution of playlist generation.
//!
//! A whole generation can take several catalog round trips; callers that
//! must stay responsive move it to a worker thread and poll the returned
//! channel.

use std::sync::mpsc::{self, Receiver};
use std::thread;

use crate::models::Playlist;
use crate::services::PlaylistGenerator;

/// Result type carried over background task channels. Errors are
/// stringified so they can cross the channel.
pub type TaskResult<T> = Result<T, String>;

/// Run one generation on a worker thread.
///
/// The generator moves into the thread; the finished playlist or the error
/// arrives on the returned receiver. The search core itself stays
/// single-threaded inside the worker.
pub fn generate_in_background(
    mut generator: PlaylistGenerator,
    query: String,
    num_tracks: usize,
    playlist_name: Option<String>,
) -> Receiver<TaskResult<Playlist>> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        log::debug!("[Background] Generation task started for '{}'", query);
        let result = generator
            .generate_playlist(&query, num_tracks, playlist_name.as_deref())
            .map(|playlist| playlist.clone())
            .map_err(|e| e.to_string());

        if tx.send(result).is_err() {
            log::warn!("[Background] Generation result dropped: receiver gone");
        }
    });

    rx
}
