//! Normalized search items and the navigation targets they are built from.

use serde::{Deserialize, Serialize};

use super::SearchCategory;

/// Kind of page a browse target opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Album,
    Artist,
    Playlist,
}

/// Where a list item leads when opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NavigationTarget {
    /// A playable video.
    #[serde(rename_all = "camelCase")]
    Watch { video_id: String },
    /// An album, artist channel or playlist page.
    #[serde(rename_all = "camelCase")]
    Browse {
        browse_id: String,
        page_type: PageType,
    },
}

impl NavigationTarget {
    pub fn watch(video_id: impl Into<String>) -> Self {
        Self::Watch {
            video_id: video_id.into(),
        }
    }

    pub fn browse(browse_id: impl Into<String>, page_type: PageType) -> Self {
        Self::Browse {
            browse_id: browse_id.into(),
            page_type,
        }
    }

    /// Site-relative path of the target.
    pub fn path(&self) -> String {
        match self {
            Self::Watch { video_id } => format!("/watch?v={video_id}"),
            Self::Browse {
                browse_id,
                page_type: PageType::Album | PageType::Playlist,
            } => format!("/browse/{browse_id}"),
            Self::Browse {
                browse_id,
                page_type: PageType::Artist,
            } => format!("/channel/{browse_id}"),
        }
    }

    /// Absolute URL of the target on the given origin.
    pub fn url(&self, origin: &str) -> String {
        format!("{}{}", origin.trim_end_matches('/'), self.path())
    }
}

/// A single normalized search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UnifiedItem {
    #[serde(rename_all = "camelCase")]
    Track {
        title: String,
        author: String,
        identifier: String,
        url: String,
        artwork_url: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Album {
        name: String,
        author: String,
        url: String,
        artwork_url: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Artist {
        name: String,
        url: String,
        artwork_url: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Playlist {
        name: String,
        author: String,
        url: String,
        artwork_url: Option<String>,
    },
    Suggestion { text: String },
}

impl UnifiedItem {
    pub fn suggestion(text: impl Into<String>) -> Self {
        Self::Suggestion { text: text.into() }
    }

    /// Category this item is reported under.
    pub const fn category(&self) -> SearchCategory {
        match self {
            Self::Track { .. } => SearchCategory::Track,
            Self::Album { .. } => SearchCategory::Album,
            Self::Artist { .. } => SearchCategory::Artist,
            Self::Playlist { .. } => SearchCategory::Playlist,
            Self::Suggestion { .. } => SearchCategory::Text,
        }
    }

    /// Display title of the item.
    pub fn title(&self) -> &str {
        match self {
            Self::Track { title, .. } => title,
            Self::Album { name, .. } | Self::Artist { name, .. } | Self::Playlist { name, .. } => {
                name
            }
            Self::Suggestion { text } => text,
        }
    }

    /// Link to the item, if it has one.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Track { url, .. }
            | Self::Album { url, .. }
            | Self::Artist { url, .. }
            | Self::Playlist { url, .. } => Some(url),
            Self::Suggestion { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_paths() {
        assert_eq!(
            NavigationTarget::browse("MPREb_x", PageType::Album).path(),
            "/browse/MPREb_x"
        );
        assert_eq!(
            NavigationTarget::browse("VLPL1", PageType::Playlist).path(),
            "/browse/VLPL1"
        );
        assert_eq!(
            NavigationTarget::browse("UC123", PageType::Artist).path(),
            "/channel/UC123"
        );
        assert_eq!(NavigationTarget::watch("dQw4w9WgXcQ").path(), "/watch?v=dQw4w9WgXcQ");
    }

    #[test]
    fn test_navigation_url_joins_origin() {
        let target = NavigationTarget::watch("abc");
        assert_eq!(
            target.url("https://music.youtube.com/"),
            "https://music.youtube.com/watch?v=abc"
        );
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_item_serialization_is_tagged() {
        let item = UnifiedItem::Track {
            title: "Song".into(),
            author: "Band".into(),
            identifier: "abc".into(),
            url: "https://music.youtube.com/watch?v=abc".into(),
            artwork_url: None,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "track");
        assert_eq!(json["identifier"], "abc");
        assert!(json.get("artworkUrl").is_some());
        assert_eq!(item.category(), SearchCategory::Track);
    }
}
