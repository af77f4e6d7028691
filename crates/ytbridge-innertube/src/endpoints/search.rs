//! Search endpoint implementation.

use serde_json::Value;
use tracing::debug;
use ytbridge_core::Result;

use crate::{
    types::{SearchPayload, SONGS_ONLY_PARAMS},
    InnerTubeClient,
};

impl InnerTubeClient {
    /// Search `YouTube` Music for songs only, as the mobile client.
    pub async fn search_songs(&self, query: &str) -> Result<Value> {
        debug!("Searching songs for {query:?}");
        self.post(
            "search",
            self.android_context(),
            SearchPayload {
                query: query.to_string(),
                params: Some(SONGS_ONLY_PARAMS.to_string()),
            },
        )
        .await
    }
}
