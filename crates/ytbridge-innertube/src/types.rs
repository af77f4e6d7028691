//! InnerTube-specific request bodies and raw response structures.

use serde::{Deserialize, Serialize};

/// Search params restricting results to songs.
pub const SONGS_ONLY_PARAMS: &str = "EgWKAQIIAWoKEAkQBRAKEAMQBA%3D%3D";

/// Request body for `InnerTube` endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct InnerTubeRequest<T> {
    pub context: crate::ClientContext,
    #[serde(flatten)]
    pub payload: T,
}

impl<T> InnerTubeRequest<T> {
    pub const fn new(context: crate::ClientContext, payload: T) -> Self {
        Self { context, payload }
    }
}

/// Search suggestions request payload.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionsPayload {
    pub input: String,
}

/// Search request payload.
#[derive(Debug, Clone, Serialize)]
pub struct SearchPayload {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<String>,
}

/// Browse request payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowsePayload {
    pub browse_id: String,
}

/// Next (watch page) request payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextPayload {
    pub video_id: String,
}

/// One entry of a `searchSuggestionsSectionRenderer`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionContent {
    pub search_suggestion_renderer: Option<SearchSuggestionRenderer>,
    pub music_responsive_list_item_renderer: Option<MusicResponsiveListItemRenderer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSuggestionRenderer {
    pub suggestion: Option<TextRuns>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicResponsiveListItemRenderer {
    pub flex_columns: Option<Vec<FlexColumn>>,
    pub thumbnail: Option<ThumbnailRenderer>,
    pub navigation_endpoint: Option<NavigationEndpoint>,
}

impl MusicResponsiveListItemRenderer {
    /// Text of the flex column at `index`, if the column exists.
    pub fn column_text(&self, index: usize) -> Option<&TextRuns> {
        self.flex_columns
            .as_ref()?
            .get(index)?
            .music_responsive_list_item_flex_column_renderer
            .as_ref()?
            .text
            .as_ref()
    }

    /// URL of the first thumbnail.
    pub fn first_thumbnail(&self) -> Option<&str> {
        self.thumbnail
            .as_ref()?
            .music_thumbnail_renderer
            .as_ref()?
            .thumbnail
            .as_ref()?
            .thumbnails
            .as_ref()?
            .first()?
            .url
            .as_deref()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexColumn {
    pub music_responsive_list_item_flex_column_renderer: Option<FlexColumnRenderer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexColumnRenderer {
    pub text: Option<TextRuns>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRuns {
    pub runs: Option<Vec<TextRun>>,
}

impl TextRuns {
    /// All runs concatenated in order.
    pub fn text(&self) -> String {
        self.runs
            .as_ref()
            .map(|runs| runs.iter().map(|r| r.text.as_str()).collect::<String>())
            .unwrap_or_default()
    }

    pub fn run(&self, index: usize) -> Option<&str> {
        self.runs.as_ref()?.get(index).map(|r| r.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.runs.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    #[serde(default)]
    pub text: String,
    /// Styling only; ignored when joining.
    #[serde(default)]
    pub bold: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailRenderer {
    pub music_thumbnail_renderer: Option<MusicThumbnailRenderer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicThumbnailRenderer {
    pub thumbnail: Option<ThumbnailContainer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailContainer {
    pub thumbnails: Option<Vec<ThumbnailItem>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailItem {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEndpoint {
    pub browse_endpoint: Option<BrowseEndpoint>,
    pub watch_endpoint: Option<WatchEndpoint>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseEndpoint {
    pub browse_id: Option<String>,
    pub browse_endpoint_context_supported_configs: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchEndpoint {
    pub video_id: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_runs_join_ignores_bold() {
        let runs: TextRuns = serde_json::from_value(json!({
            "runs": [{"text": "never "}, {"text": "gonna", "bold": true}]
        }))
        .unwrap();
        assert_eq!(runs.text(), "never gonna");
        assert_eq!(runs.len(), 2);
        assert_eq!(runs.run(1), Some("gonna"));
    }

    #[test]
    fn test_run_without_text_is_empty() {
        let runs: TextRuns =
            serde_json::from_value(json!({"runs": [{"text": "a"}, {"bold": true}, {"text": "b"}]}))
                .unwrap();
        assert_eq!(runs.text(), "ab");
        assert_eq!(runs.len(), 3);
    }

    #[test]
    fn test_missing_runs_is_empty() {
        let runs: TextRuns = serde_json::from_value(json!({})).unwrap();
        assert!(runs.is_empty());
        assert_eq!(runs.text(), "");
    }
}
