//! `InnerTube` client context configuration.

use serde::{Deserialize, Serialize};
use ytbridge_core::ResolvedLocale;

/// Desktop browser user agent sent by the web client.
pub const WEB_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const ANDROID_MUSIC_USER_AGENT: &str =
    "com.google.android.apps.youtube.music/6.42.52 (Linux; U; Android 11) gzip";

/// Client context sent with every `InnerTube` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientContext {
    pub client: Client,
}

impl ClientContext {
    /// Context for the `YouTube` Music web client, used for search suggestions.
    pub fn music_web(locale: &ResolvedLocale) -> Self {
        Self {
            client: Client::music_web(locale),
        }
    }

    /// Context for the `YouTube` Music Android client.
    ///
    /// Search, next and browse requests of the lyrics chain use this client;
    /// only the mobile client is served the timed lyrics model.
    pub fn music_android(locale: &ResolvedLocale) -> Self {
        Self {
            client: Client::music_android(locale),
        }
    }

    /// Headers identifying the client to the API. The user agent, when set,
    /// replaces the transport's default one.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![
            ("X-YouTube-Client-Name", self.client.client_id().to_string()),
            ("X-YouTube-Client-Version", self.client.client_version.clone()),
        ];
        if let Some(ua) = &self.client.user_agent {
            headers.push(("User-Agent", ua.clone()));
        }
        headers
    }
}

/// Client information for `InnerTube` requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Client name (e.g., "`WEB_REMIX`" for `YouTube` Music).
    pub client_name: String,
    /// Client version string.
    pub client_version: String,
    /// Language (e.g., "en").
    pub hl: String,
    /// Region (e.g., "US").
    pub gl: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,
    /// Android SDK version (for Android client).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_sdk_version: Option<u32>,
}

impl Client {
    /// `YouTube` Music web client (`WEB_REMIX`).
    pub fn music_web(locale: &ResolvedLocale) -> Self {
        Self {
            client_name: "WEB_REMIX".to_string(),
            client_version: "1.20241106.01.00".to_string(),
            hl: locale.language.clone(),
            gl: locale.region.clone(),
            platform: Some("DESKTOP".to_string()),
            user_agent: Some(WEB_USER_AGENT.to_string()),
            os_name: None,
            os_version: None,
            android_sdk_version: None,
        }
    }

    /// `YouTube` Music Android client.
    pub fn music_android(locale: &ResolvedLocale) -> Self {
        Self {
            client_name: "ANDROID_MUSIC".to_string(),
            client_version: "6.42.52".to_string(),
            hl: locale.language.clone(),
            gl: locale.region.clone(),
            platform: Some("MOBILE".to_string()),
            user_agent: Some(ANDROID_MUSIC_USER_AGENT.to_string()),
            os_name: Some("Android".to_string()),
            os_version: Some("11".to_string()),
            android_sdk_version: Some(30),
        }
    }

    /// Get the numeric client ID for this client type.
    pub fn client_id(&self) -> u32 {
        match self.client_name.as_str() {
            "ANDROID_MUSIC" => 21,
            _ => 67,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ytbridge_core::Locale;

    #[test]
    fn test_client_context_serialization() {
        let locale = Locale::new("ja", None::<String>).resolve();
        let json = serde_json::to_value(ClientContext::music_web(&locale)).unwrap();
        assert_eq!(json["client"]["clientName"], "WEB_REMIX");
        assert_eq!(json["client"]["hl"], "ja");
        assert_eq!(json["client"]["gl"], "JP");
        assert!(json["client"].get("osName").is_none());
    }

    #[test]
    fn test_headers_carry_client_user_agent() {
        let locale = ResolvedLocale::default();
        let android = ClientContext::music_android(&locale).headers();
        let ua = android
            .iter()
            .find(|(name, _)| *name == "User-Agent")
            .map(|(_, value)| value.as_str());
        assert_eq!(ua, Some(ANDROID_MUSIC_USER_AGENT));
        assert!(android.contains(&("X-YouTube-Client-Name", "21".to_string())));

        let web = ClientContext::music_web(&locale).headers();
        assert!(web.contains(&("User-Agent", WEB_USER_AGENT.to_string())));
    }

    #[test]
    fn test_client_ids() {
        let locale = ResolvedLocale::default();
        assert_eq!(Client::music_web(&locale).client_id(), 67);
        assert_eq!(Client::music_android(&locale).client_id(), 21);
    }
}
