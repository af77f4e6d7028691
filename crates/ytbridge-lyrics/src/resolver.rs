//! Lyrics resolution as an explicit chain of states.
//!
//! ```text
//! ResolveIdentifier -> FetchBrowseId -> FetchLyricsBody -> Parse -> Done
//!        |                  |                                 |
//!        +------------------+---------------------------------+--> NotFound
//! ```
//!
//! Each step issues at most one request. Transport failures abort the chain
//! with an error; everything that merely means "no lyrics here" ends in
//! [`LyricsState::NotFound`].

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};
use ytbridge_core::{DecodeError, Error, LyricsDocument, LyricsQuery, Result};
use ytbridge_innertube::YouTubeSearch;

use crate::parser::{self, LyricsShape};

/// Why a lookup ended without lyrics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundReason {
    #[error("no track matched the query")]
    NoCandidate,

    #[error("track has no lyrics tab")]
    NoLyricsTab,

    #[error("lyrics page carries no recognizable lyrics")]
    NoLyricsBody,

    #[error("lyrics page is malformed: {0}")]
    Malformed(#[from] DecodeError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LyricsState {
    ResolveIdentifier,
    FetchBrowseId { video_id: String },
    FetchLyricsBody { browse_id: String },
    Parse { response: Value },
    Done(LyricsDocument),
    NotFound(NotFoundReason),
}

impl LyricsState {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Done(_) | Self::NotFound(_))
    }

    const fn name(&self) -> &'static str {
        match self {
            Self::ResolveIdentifier => "resolve_identifier",
            Self::FetchBrowseId { .. } => "fetch_browse_id",
            Self::FetchLyricsBody { .. } => "fetch_lyrics_body",
            Self::Parse { .. } => "parse",
            Self::Done(_) => "done",
            Self::NotFound(_) => "not_found",
        }
    }
}

#[derive(Clone)]
pub struct LyricsResolver {
    search: YouTubeSearch,
}

impl LyricsResolver {
    pub const fn new(search: YouTubeSearch) -> Self {
        Self { search }
    }

    pub const fn search(&self) -> &YouTubeSearch {
        &self.search
    }

    /// Run the chain to completion. Ends in [`Error::LyricsNotFound`] when
    /// the track has no lyrics.
    pub async fn resolve(&self, query: &LyricsQuery) -> Result<LyricsDocument> {
        let _scope = self.search.client().scope("load_lyrics");

        let mut state = LyricsState::ResolveIdentifier;
        loop {
            state = match state {
                LyricsState::Done(document) => {
                    info!(
                        "Resolved lyrics for {:?} from {:?}",
                        query.search_text(),
                        document.source()
                    );
                    return Ok(document);
                }
                LyricsState::NotFound(reason) => {
                    info!("No lyrics for {:?}: {reason}", query.search_text());
                    return Err(Error::LyricsNotFound);
                }
                pending => {
                    debug!("Lyrics lookup entering {}", pending.name());
                    self.step(pending, query).await?
                }
            };
        }
    }

    /// Advance one state. Terminal states are returned unchanged.
    pub async fn step(&self, state: LyricsState, query: &LyricsQuery) -> Result<LyricsState> {
        let client = self.search.client();

        let next = match state {
            LyricsState::ResolveIdentifier => match self.video_id(query).await? {
                Some(video_id) => LyricsState::FetchBrowseId { video_id },
                None => LyricsState::NotFound(NotFoundReason::NoCandidate),
            },

            LyricsState::FetchBrowseId { video_id } => {
                let response = client.next(&video_id).await?;
                match parser::lyrics_browse_id(&response) {
                    Some(browse_id) => LyricsState::FetchLyricsBody { browse_id },
                    None => LyricsState::NotFound(NotFoundReason::NoLyricsTab),
                }
            }

            LyricsState::FetchLyricsBody { browse_id } => LyricsState::Parse {
                response: client.browse(&browse_id).await?,
            },

            LyricsState::Parse { response } => parse(&response),

            terminal @ (LyricsState::Done(_) | LyricsState::NotFound(_)) => terminal,
        };

        Ok(next)
    }

    /// A native identifier is used as is; otherwise the ISRC, then
    /// "<title> - <author>", is searched. An ISRC miss does not fall back.
    async fn video_id(&self, query: &LyricsQuery) -> Result<Option<String>> {
        if let Some(id) = &query.own_provider_identifier {
            return Ok(Some(id.clone()));
        }

        let search_query = query
            .isrc
            .clone()
            .unwrap_or_else(|| query.search_text());
        self.search.first_track_id(&search_query).await
    }
}

fn parse(response: &Value) -> LyricsState {
    let parsed = match parser::detect(response) {
        LyricsShape::Timed(data) => parser::parse_timed(data),
        LyricsShape::Description(shelf) => parser::parse_description(shelf),
        LyricsShape::Missing => return LyricsState::NotFound(NotFoundReason::NoLyricsBody),
    };

    parsed.map_or_else(
        |e| LyricsState::NotFound(NotFoundReason::Malformed(e)),
        LyricsState::Done,
    )
}
