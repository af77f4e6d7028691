//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ytbridge_core::{LyricsQuery, SearchCategoryFilter};
use ytbridge_innertube::{MUSIC_SEARCH_PREFIX, SEARCH_PREFIX};

#[derive(Debug, Parser)]
#[command(name = "ytbridge", version, about = "Search YouTube Music and fetch lyrics")]
pub struct Args {
    /// Region code sent as `gl`, e.g. `JP`.
    #[arg(long, global = true, env = "YTBRIDGE_REGION")]
    pub region: Option<String>,

    /// Language code sent as `hl`, e.g. `ja` or `en-GB`.
    #[arg(long, global = true, env = "YTBRIDGE_LANGUAGE")]
    pub language: Option<String>,

    /// JSON config file. Defaults to `config.json` in the user config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search the catalog. Queries without a prefix are sent as `ytmsearch:`.
    Search {
        query: String,

        /// Comma-separated categories: track, album, artist, playlist, text.
        #[arg(long)]
        types: Option<SearchCategoryFilter>,

        /// Free-text completions instead of catalog suggestions.
        #[arg(long)]
        text: bool,

        /// Keep artist names as they are.
        #[arg(long)]
        no_top_tracks: bool,
    },

    /// Fetch lyrics for a track.
    Lyrics {
        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        #[arg(long)]
        isrc: Option<String>,

        /// `YouTube` video ID, skipping the search step.
        #[arg(long)]
        video_id: Option<String>,
    },
}

/// Prefix a bare query so it reaches the intended search mode.
pub fn routed_query(query: &str, text: bool) -> String {
    if query.starts_with(MUSIC_SEARCH_PREFIX) || query.starts_with(SEARCH_PREFIX) {
        return query.to_string();
    }
    let prefix = if text { SEARCH_PREFIX } else { MUSIC_SEARCH_PREFIX };
    format!("{prefix}{query}")
}

pub fn lyrics_query(
    title: String,
    author: String,
    isrc: Option<String>,
    video_id: Option<String>,
) -> LyricsQuery {
    LyricsQuery {
        own_provider_identifier: video_id,
        isrc,
        title,
        author,
    }
}
