//! # ytbridge
//!
//! Searches `YouTube` Music and fetches lyrics from the command line. Results
//! are printed as JSON on stdout; logs go to stderr.

mod args;
mod settings;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ytbridge_core::{ProviderRegistry, SearchConfig};
use ytbridge_innertube::{ReqwestTransport, Transport, YouTubeSearch};
use ytbridge_lyrics::YouTubeLyrics;

use args::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ytbridge=info".into()),
        )
        .init();

    let args = Args::parse();
    let config = settings::load(args.config.as_deref())?;
    let mut config = settings::apply_overrides(config, &args);

    if let Command::Search { no_top_tracks, .. } = &args.command {
        if *no_top_tracks {
            config = config.with_artist_top_tracks_suffix(false);
        }
    }

    info!(
        "ytbridge v{} ({})",
        env!("CARGO_PKG_VERSION"),
        config.locale().accept_language()
    );

    let registry = build_registry(&config)?;

    let output = match args.command {
        Command::Search {
            query, types, text, ..
        } => {
            let query = args::routed_query(&query, text);
            let results = registry
                .search(&query, &types.unwrap_or_default())
                .await
                .with_context(|| format!("Search for {query:?} failed"))?;
            serde_json::to_string_pretty(&results)?
        }
        Command::Lyrics {
            title,
            author,
            isrc,
            video_id,
        } => {
            let query = args::lyrics_query(title, author, isrc, video_id);
            let lyrics = registry
                .lyrics(&query)
                .await
                .with_context(|| format!("Lyrics lookup for {:?} failed", query.search_text()))?;
            if lyrics.is_none() {
                info!("No lyrics found");
            }
            serde_json::to_string_pretty(&lyrics)?
        }
    };

    println!("{output}");
    Ok(())
}

fn build_registry(config: &SearchConfig) -> Result<ProviderRegistry> {
    let transport: Arc<dyn Transport> = Arc::new(
        ReqwestTransport::with_timeout(config.timeout()).context("Failed to build HTTP client")?,
    );

    let search = YouTubeSearch::from_config(transport, config);
    let registry = ProviderRegistry::new();
    registry.register_search(Arc::new(search.clone()));
    registry.register_lyrics(Arc::new(YouTubeLyrics::new(search)));
    Ok(registry)
}
