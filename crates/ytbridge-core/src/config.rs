//! Provider configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Locale, ResolvedLocale, Result};

/// Settings shared by the search and lyrics providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Language code sent as `hl`.
    pub language: String,
    /// Region code sent as `gl`. Derived from the language when absent.
    pub region: Option<String>,
    /// Render artist results as "<name>'s Top Tracks".
    pub artist_top_tracks_suffix: bool,
    /// Request timeout for the default transport.
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            region: Some("US".to_string()),
            artist_top_tracks_suffix: true,
            timeout_secs: 30,
        }
    }
}

impl SearchConfig {
    /// Parse a JSON config document. Missing keys take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    pub const fn with_artist_top_tracks_suffix(mut self, enabled: bool) -> Self {
        self.artist_top_tracks_suffix = enabled;
        self
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn locale(&self) -> ResolvedLocale {
        Locale::new(self.language.clone(), self.region.clone()).resolve()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SearchConfig::from_json(r#"{"language": "ja", "region": null}"#).unwrap();
        assert_eq!(config.language, "ja");
        assert!(config.artist_top_tracks_suffix);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.locale().region, "JP");
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = SearchConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
