//! Classification of search-suggestion responses into [`UnifiedItem`]s.
//!
//! Each content node is decoded on its own. A node that cannot be decoded is
//! reported as a [`SkipReason`] and the walk continues, so one odd entry
//! never costs the rest of the response.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use ytbridge_core::{DecodeError, NavigationTarget, PageType, UnifiedItem};

use crate::client::ORIGIN;
use crate::navigator::Nav;
use crate::types::{MusicResponsiveListItemRenderer, NavigationEndpoint, SuggestionContent};

/// Author label used when a list item has no second text column.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Why a content node produced no item.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("malformed entry: {0}")]
    Malformed(#[from] DecodeError),

    /// A page type this crate does not map to any category.
    #[error("unsupported page type {0}")]
    UnsupportedVariant(String),

    #[error("unrecognized renderer")]
    UnknownRenderer,
}

/// Items in upstream order, plus the reasons for every skipped node.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    pub items: Vec<UnifiedItem>,
    pub skipped: Vec<SkipReason>,
}

impl Classification {
    pub fn unsupported_count(&self) -> usize {
        self.skipped
            .iter()
            .filter(|r| matches!(r, SkipReason::UnsupportedVariant(_)))
            .count()
    }
}

/// Walk `contents[*].searchSuggestionsSectionRenderer.contents[*]`.
pub fn classify_suggestions(response: &Value) -> Classification {
    let mut classification = Classification::default();

    for section in Nav::new(response).get("contents").array() {
        let contents = section.path(&["searchSuggestionsSectionRenderer", "contents"]);
        for content in contents.array() {
            match classify_content(content) {
                Ok(item) => classification.items.push(item),
                Err(reason) => classification.skipped.push(reason),
            }
        }
    }

    classification
}

/// Classify a single suggestion content node.
pub fn classify_content(content: Nav<'_>) -> Result<UnifiedItem, SkipReason> {
    let value = content.require("searchSuggestionsSectionRenderer.contents[]")?;
    let content =
        SuggestionContent::deserialize(value).map_err(|_| DecodeError::UnexpectedShape {
            field: "contents",
            expected: "suggestion renderer",
        })?;

    if let Some(renderer) = content.search_suggestion_renderer {
        let runs = renderer
            .suggestion
            .ok_or(DecodeError::MissingField("suggestion"))?;
        return Ok(UnifiedItem::suggestion(runs.text()));
    }

    if let Some(renderer) = content.music_responsive_list_item_renderer {
        return classify_list_item(&renderer);
    }

    Err(SkipReason::UnknownRenderer)
}

/// Turn a list item into a track, album, artist or playlist.
pub fn classify_list_item(
    renderer: &MusicResponsiveListItemRenderer,
) -> Result<UnifiedItem, SkipReason> {
    let endpoint = renderer
        .navigation_endpoint
        .as_ref()
        .ok_or(DecodeError::MissingField("navigationEndpoint"))?;
    let target = navigation_target(endpoint)?;

    let title = renderer
        .column_text(0)
        .map(|runs| runs.text())
        .filter(|text| !text.is_empty())
        .ok_or(DecodeError::MissingField("flexColumns[0].text"))?;
    let author = author_label(renderer);
    let artwork_url = renderer.first_thumbnail().map(str::to_string);
    let url = target.url(ORIGIN);

    let item = match target {
        NavigationTarget::Watch { video_id } => UnifiedItem::Track {
            title,
            author,
            identifier: video_id,
            url,
            artwork_url,
        },
        NavigationTarget::Browse { page_type, .. } => match page_type {
            PageType::Album => UnifiedItem::Album {
                name: title,
                author,
                url,
                artwork_url,
            },
            PageType::Artist => UnifiedItem::Artist {
                name: title,
                url,
                artwork_url,
            },
            PageType::Playlist => UnifiedItem::Playlist {
                name: title,
                author,
                url,
                artwork_url,
            },
        },
    };

    Ok(item)
}

/// Decode a navigation endpoint. A watch target wins when both are present;
/// a watch endpoint without a video ID defers to the browse target.
pub fn navigation_target(endpoint: &NavigationEndpoint) -> Result<NavigationTarget, SkipReason> {
    let watch = endpoint.watch_endpoint.as_ref();
    if let Some(video_id) = watch.and_then(|w| w.video_id.as_deref()) {
        return Ok(NavigationTarget::watch(video_id));
    }

    if let Some(browse) = &endpoint.browse_endpoint {
        let browse_id = browse
            .browse_id
            .as_deref()
            .ok_or(DecodeError::MissingField("browseId"))?;
        let configs = browse
            .browse_endpoint_context_supported_configs
            .as_ref()
            .map_or_else(Nav::absent, Nav::new);
        let tag = configs
            .path(&["browseEndpointContextMusicConfig", "pageType"])
            .require_str("pageType")?;
        let page_type =
            page_type(tag).ok_or_else(|| SkipReason::UnsupportedVariant(tag.to_string()))?;
        return Ok(NavigationTarget::browse(browse_id, page_type));
    }

    if watch.is_some() {
        return Err(DecodeError::MissingField("videoId").into());
    }
    Err(DecodeError::NoNavigationTarget.into())
}

/// Map an upstream page type tag onto a category page type.
pub fn page_type(tag: &str) -> Option<PageType> {
    match tag {
        "MUSIC_PAGE_TYPE_ALBUM" => Some(PageType::Album),
        "MUSIC_PAGE_TYPE_ARTIST" => Some(PageType::Artist),
        "MUSIC_PAGE_TYPE_PLAYLIST" => Some(PageType::Playlist),
        _ => None,
    }
}

/// The second flex column reads `<type> • <author> • ...`. With at least
/// three runs the author is run 2; a shorter column is taken whole.
fn author_label(renderer: &MusicResponsiveListItemRenderer) -> String {
    let label = renderer.column_text(1).and_then(|column| {
        if column.len() >= 3 {
            column.run(2).map(str::to_string)
        } else {
            Some(column.text())
        }
    });

    label
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
}
