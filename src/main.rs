use std::error::Error;

use clap::{Parser, Subcommand};
use env_logger::Env;

use mixgen::api::{SpotifyAuth, SpotifyClient};
use mixgen::constants::{activity_names, ACTIVITY_GENRES, DEFAULT_TRACK_COUNT};
use mixgen::services::{PlaylistGenerator, SearchMode};
use mixgen::utils::generate_in_background;

// App metadata
const APP_NAME: &str = "mixgen";
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generate Spotify playlists from the command line.
#[derive(Parser, Debug)]
#[command(name = "mixgen", version, about = "Generate Spotify playlists by genre or activity")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a playlist from a single catalog genre
    Genre {
        /// Genre seed, e.g. "rock" or "hip-hop"
        genre: String,
        /// Number of tracks to collect
        #[arg(short = 'n', long, default_value_t = DEFAULT_TRACK_COUNT)]
        count: usize,
        /// Playlist name
        #[arg(long)]
        name: Option<String>,
    },
    /// Build a playlist from an activity preset
    Activity {
        /// Activity label, e.g. "Gaming" (see `activities`)
        activity: String,
        /// Number of tracks to collect
        #[arg(short = 'n', long, default_value_t = DEFAULT_TRACK_COUNT)]
        count: usize,
        /// Playlist name
        #[arg(long)]
        name: Option<String>,
    },
    /// List the known activities and their genre fan-out
    Activities,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // A .env file is honored when present; credentials may also come from
    // the real environment.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    log::info!("[Main] Starting {} v{}", APP_NAME, APP_VERSION);

    match cli.command {
        Command::Activities => {
            list_activities();
            Ok(())
        }
        Command::Genre { genre, count, name } => {
            run_generation(SearchMode::Genre, genre, count, name)
        }
        Command::Activity {
            activity,
            count,
            name,
        } => run_generation(SearchMode::Activity, activity, count, name),
    }
}

fn run_generation(
    mode: SearchMode,
    query: String,
    count: usize,
    name: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let auth = SpotifyAuth::from_env()?;
    let client = SpotifyClient::new(auth);
    let mut generator = PlaylistGenerator::new(Box::new(client));
    generator.set_strategy(mode);

    // The generation runs on a worker thread; this thread only waits for
    // the finished playlist.
    let rx = generate_in_background(generator, query, count, name);
    let playlist = rx
        .recv()
        .map_err(|_| "generation worker terminated without a result")??;

    println!("{} ({} tracks)", playlist.name, playlist.len());
    for (i, track) in playlist.tracks().iter().enumerate() {
        println!("{:>3}. {}", i + 1, track);
    }

    if playlist.len() < count {
        log::warn!(
            "[Main] Catalog ran short: {} of {} requested tracks",
            playlist.len(),
            count
        );
    }

    Ok(())
}

fn list_activities() {
    println!("Available activities:");
    for name in activity_names() {
        if let Some(genres) = ACTIVITY_GENRES.get(name) {
            println!("  {:<10} -> {}", name, genres.join(", "));
        }
    }
}
