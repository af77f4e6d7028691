//! Watch-page and browse endpoints used by the lyrics chain.

use serde_json::Value;
use tracing::debug;
use ytbridge_core::Result;

use crate::{
    types::{BrowsePayload, NextPayload},
    InnerTubeClient,
};

impl InnerTubeClient {
    /// Fetch the watch-next page of a video. Its tabs link to the lyrics page.
    pub async fn next(&self, video_id: &str) -> Result<Value> {
        debug!("Requesting watch page for {video_id}");
        self.post(
            "next",
            self.android_context(),
            NextPayload {
                video_id: video_id.to_string(),
            },
        )
        .await
    }

    /// Fetch a browse page by ID.
    pub async fn browse(&self, browse_id: &str) -> Result<Value> {
        debug!("Browsing {browse_id}");
        self.post(
            "browse",
            self.android_context(),
            BrowsePayload {
                browse_id: browse_id.to_string(),
            },
        )
        .await
    }
}
