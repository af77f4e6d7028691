//! `YouTube` Music search provider.
//!
//! Routes a query by prefix, runs the request, classifies the response and
//! partitions it by the caller's category filter.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};
use ytbridge_core::{
    Result, SearchCategoryFilter, SearchConfig, SearchProvider, SearchResultSet, UnifiedItem,
};

use crate::classifier::{classify_list_item, classify_suggestions, SkipReason};
use crate::navigator::Nav;
use crate::suggest;
use crate::transport::Transport;
use crate::types::MusicResponsiveListItemRenderer;
use crate::InnerTubeClient;

/// Prefix routing a query to typed catalog suggestions.
pub const MUSIC_SEARCH_PREFIX: &str = "ytmsearch:";
/// Prefix routing a query to free-text completions.
pub const SEARCH_PREFIX: &str = "ytsearch:";

const SOURCE_NAME: &str = "youtube";

#[derive(Clone)]
pub struct YouTubeSearch {
    client: InnerTubeClient,
    artist_top_tracks_suffix: bool,
}

impl YouTubeSearch {
    pub const fn new(client: InnerTubeClient) -> Self {
        Self {
            client,
            artist_top_tracks_suffix: true,
        }
    }

    pub fn from_config(transport: Arc<dyn Transport>, config: &SearchConfig) -> Self {
        Self::new(InnerTubeClient::new(transport, config.locale()))
            .with_artist_top_tracks_suffix(config.artist_top_tracks_suffix)
    }

    /// Render artists as "<name>'s Top Tracks".
    pub const fn with_artist_top_tracks_suffix(mut self, enabled: bool) -> Self {
        self.artist_top_tracks_suffix = enabled;
        self
    }

    pub const fn client(&self) -> &InnerTubeClient {
        &self.client
    }

    /// Typed suggestions for a partial query.
    pub async fn music_search(
        &self,
        input: &str,
        filter: &SearchCategoryFilter,
    ) -> Result<SearchResultSet> {
        let _scope = self.client.scope("music_search");

        let response = self.client.music_search_suggestions(input).await?;
        let classification = classify_suggestions(&response);

        for reason in &classification.skipped {
            match reason {
                SkipReason::UnsupportedVariant(tag) => {
                    warn!("Skipping suggestion with unsupported page type {tag}");
                }
                other => debug!("Skipping suggestion: {other}"),
            }
        }

        let items = classification
            .items
            .into_iter()
            .map(|item| self.present(item));
        let results = SearchResultSet::from_items(items, filter);

        info!(
            "Music search {input:?}: {} items, {} skipped",
            results.len(),
            classification.skipped.len()
        );
        Ok(results)
    }

    /// Free-text completions. Only the text category is ever populated.
    pub async fn text_search(
        &self,
        query: &str,
        filter: &SearchCategoryFilter,
    ) -> Result<SearchResultSet> {
        let _scope = self.client.scope("text_search");

        let body = self.client.query_completions(query).await?;
        let results = SearchResultSet::from_items(suggest::parse_suggestions(&body), filter);

        info!("Text search {query:?}: {} suggestions", results.texts.len());
        Ok(results)
    }

    /// Identifier of the first song a songs-only search returns.
    pub async fn first_track_id(&self, query: &str) -> Result<Option<String>> {
        let _scope = self.client.scope("first_track_id");

        let response = self.client.search_songs(query).await?;
        let id = first_track_in_search(&response);
        debug!("First track for {query:?}: {id:?}");
        Ok(id)
    }

    fn present(&self, item: UnifiedItem) -> UnifiedItem {
        match item {
            UnifiedItem::Artist {
                name,
                url,
                artwork_url,
            } if self.artist_top_tracks_suffix => UnifiedItem::Artist {
                name: format!("{name}'s Top Tracks"),
                url,
                artwork_url,
            },
            other => other,
        }
    }
}

#[async_trait]
impl SearchProvider for YouTubeSearch {
    fn source_name(&self) -> &str {
        SOURCE_NAME
    }

    async fn load_search(
        &self,
        query: &str,
        filter: &SearchCategoryFilter,
    ) -> Result<Option<SearchResultSet>> {
        if let Some(input) = query.strip_prefix(MUSIC_SEARCH_PREFIX) {
            return self.music_search(input, filter).await.map(Some);
        }
        if let Some(input) = query.strip_prefix(SEARCH_PREFIX) {
            return self.text_search(input, filter).await.map(Some);
        }
        Ok(None)
    }
}

/// Walk the first tab's shelves in order and return the first playable song.
pub fn first_track_in_search(response: &Value) -> Option<String> {
    let sections = Nav::new(response)
        .path(&["contents", "tabbedSearchResultsRenderer", "tabs"])
        .first()
        .path(&["tabRenderer", "content", "sectionListRenderer", "contents"]);

    sections
        .array()
        .flat_map(|section| section.path(&["musicShelfRenderer", "contents"]).array())
        .find_map(shelf_track_id)
}

fn shelf_track_id(item: Nav<'_>) -> Option<String> {
    let two_column = item
        .path(&[
            "musicTwoColumnItemRenderer",
            "navigationEndpoint",
            "watchEndpoint",
            "videoId",
        ])
        .string();
    if two_column.is_some() {
        return two_column;
    }

    let value = item.get("musicResponsiveListItemRenderer").value()?;
    let renderer = MusicResponsiveListItemRenderer::deserialize(value).ok()?;
    match classify_list_item(&renderer) {
        Ok(UnifiedItem::Track { identifier, .. }) => Some(identifier),
        _ => None,
    }
}
