//! Search suggestion endpoints.

use serde_json::Value;
use tracing::debug;
use ytbridge_core::Result;

use crate::{suggest, types::SuggestionsPayload, InnerTubeClient};

impl InnerTubeClient {
    /// Fetch typed suggestions (tracks, albums, artists, playlists and
    /// completions) for a partial query.
    pub async fn music_search_suggestions(&self, input: &str) -> Result<Value> {
        debug!("Requesting music suggestions for {input:?}");
        self.post(
            "music/get_search_suggestions",
            self.web_context(),
            SuggestionsPayload {
                input: input.to_string(),
            },
        )
        .await
    }

    /// Fetch the raw free-text completion body for a query.
    pub async fn query_completions(&self, query: &str) -> Result<String> {
        let url = suggest::suggestion_url(query, self.locale())?;
        debug!("Requesting completions for {query:?}");
        self.get_text(url).await
    }
}
