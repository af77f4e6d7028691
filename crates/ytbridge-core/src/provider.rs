//! Provider capabilities and the registry they are installed into.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::{LyricsDocument, LyricsQuery, Result, SearchCategoryFilter, SearchResultSet};

/// A catalog that can answer search queries.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Stable name of the catalog, e.g. `youtube`.
    fn source_name(&self) -> &str;

    /// Run a search. `Ok(None)` means the query is not addressed to this
    /// provider (for example, an unrecognized prefix).
    async fn load_search(
        &self,
        query: &str,
        filter: &SearchCategoryFilter,
    ) -> Result<Option<SearchResultSet>>;
}

/// A catalog that can resolve lyrics for a track.
#[async_trait]
pub trait LyricsProvider: Send + Sync {
    fn source_name(&self) -> &str;

    /// Resolve lyrics. `Ok(None)` means the provider has no lyrics for the
    /// track; transport failures are returned as errors.
    async fn load_lyrics(&self, query: &LyricsQuery) -> Result<Option<LyricsDocument>>;
}

/// Explicit set of installed providers, consulted in registration order.
#[derive(Default)]
pub struct ProviderRegistry {
    search: RwLock<Vec<Arc<dyn SearchProvider>>>,
    lyrics: RwLock<Vec<Arc<dyn LyricsProvider>>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_search(&self, provider: Arc<dyn SearchProvider>) {
        debug!("Registered search provider {}", provider.source_name());
        self.search.write().push(provider);
    }

    pub fn register_lyrics(&self, provider: Arc<dyn LyricsProvider>) {
        debug!("Registered lyrics provider {}", provider.source_name());
        self.lyrics.write().push(provider);
    }

    pub fn search_providers(&self) -> Vec<Arc<dyn SearchProvider>> {
        self.search.read().clone()
    }

    pub fn lyrics_providers(&self) -> Vec<Arc<dyn LyricsProvider>> {
        self.lyrics.read().clone()
    }

    /// Ask each search provider in turn; the first one that handles the query wins.
    pub async fn search(
        &self,
        query: &str,
        filter: &SearchCategoryFilter,
    ) -> Result<Option<SearchResultSet>> {
        for provider in self.search_providers() {
            if let Some(results) = provider.load_search(query, filter).await? {
                debug!("Query handled by {}", provider.source_name());
                return Ok(Some(results));
            }
        }
        Ok(None)
    }

    /// Ask each lyrics provider in turn; the first one with lyrics wins.
    pub async fn lyrics(&self, query: &LyricsQuery) -> Result<Option<LyricsDocument>> {
        for provider in self.lyrics_providers() {
            if let Some(lyrics) = provider.load_lyrics(query).await? {
                return Ok(Some(lyrics));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::UnifiedItem;

    struct Prefixed(&'static str);

    #[async_trait]
    impl SearchProvider for Prefixed {
        fn source_name(&self) -> &str {
            self.0
        }

        async fn load_search(
            &self,
            query: &str,
            filter: &SearchCategoryFilter,
        ) -> Result<Option<SearchResultSet>> {
            Ok(query.strip_prefix(self.0).map(|rest| {
                SearchResultSet::from_items([UnifiedItem::suggestion(rest)], filter)
            }))
        }
    }

    #[tokio::test]
    async fn test_first_handling_provider_wins() {
        let registry = ProviderRegistry::new();
        registry.register_search(Arc::new(Prefixed("a:")));
        registry.register_search(Arc::new(Prefixed("b:")));

        let results = registry
            .search("b:hello", &SearchCategoryFilter::all())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(results.texts[0].title(), "hello");

        let unhandled = registry
            .search("c:hello", &SearchCategoryFilter::all())
            .await
            .unwrap();
        assert!(unhandled.is_none());
    }

    #[tokio::test]
    async fn test_empty_registry_has_no_lyrics() {
        let registry = ProviderRegistry::new();
        let lyrics = registry.lyrics(&LyricsQuery::new("t", "a")).await.unwrap();
        assert!(lyrics.is_none());
    }
}
