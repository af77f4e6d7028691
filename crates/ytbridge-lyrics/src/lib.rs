//! Lyrics lookup against `YouTube` Music.
//!
//! A track is resolved to a video, the video's watch page yields the lyrics
//! browse ID, and the browse page carries either timed lines or a plain
//! description shelf.

mod parser;
mod resolver;

use std::sync::Arc;

use async_trait::async_trait;
use ytbridge_core::{
    Error, LyricsDocument, LyricsProvider, LyricsQuery, Result, SearchConfig,
};
use ytbridge_innertube::{Transport, YouTubeSearch};

pub use parser::{detect, lyrics_browse_id, parse_description, parse_timed, LyricsShape};
pub use resolver::{LyricsResolver, LyricsState, NotFoundReason};

const SOURCE_NAME: &str = "youtube";

/// [`LyricsProvider`] backed by `YouTube` Music lyrics pages.
#[derive(Clone)]
pub struct YouTubeLyrics {
    resolver: LyricsResolver,
}

impl YouTubeLyrics {
    pub const fn new(search: YouTubeSearch) -> Self {
        Self {
            resolver: LyricsResolver::new(search),
        }
    }

    pub fn from_config(transport: Arc<dyn Transport>, config: &SearchConfig) -> Self {
        Self::new(YouTubeSearch::from_config(transport, config))
    }

    pub const fn resolver(&self) -> &LyricsResolver {
        &self.resolver
    }
}

#[async_trait]
impl LyricsProvider for YouTubeLyrics {
    fn source_name(&self) -> &str {
        SOURCE_NAME
    }

    async fn load_lyrics(&self, query: &LyricsQuery) -> Result<Option<LyricsDocument>> {
        match self.resolver.resolve(query).await {
            Ok(document) => Ok(Some(document)),
            Err(Error::LyricsNotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
