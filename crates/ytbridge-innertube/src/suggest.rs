//! Free-text query completion.
//!
//! The completion endpoint answers with a JavaScript array literal wrapped in
//! a callback, not JSON. Suggestions are scraped out of it by pattern.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;
use ytbridge_core::{HttpError, ResolvedLocale, Result, UnifiedItem};

const SUGGEST_URL: &str = "https://suggestqueries-clients6.youtube.com/complete/search";

/// Matches `["<words>", <n>, [<n>, <n>, ...]]` and captures the words.
#[allow(clippy::unwrap_used)] // Pattern is a compile-time constant
static SUGGESTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\["([\w\s]+)",\s*\d+,\s*\[(?:\d+,?\s*)+\]"#).unwrap());

/// Build the completion URL for a query.
pub fn suggestion_url(query: &str, locale: &ResolvedLocale) -> Result<Url> {
    let mut url = Url::parse(SUGGEST_URL).map_err(|e| HttpError::InvalidUrl(e.to_string()))?;
    url.query_pairs_mut()
        .append_pair("client", "youtube")
        .append_pair("q", query)
        .append_pair("gl", &locale.region)
        .append_pair("hl", &locale.language);
    Ok(url)
}

/// Scrape suggestions out of a completion response body.
pub fn parse_suggestions(body: &str) -> Vec<UnifiedItem> {
    SUGGESTION_PATTERN
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .map(|m| UnifiedItem::suggestion(m.as_str()))
        .collect()
}
