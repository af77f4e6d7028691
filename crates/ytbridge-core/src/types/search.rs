//! Result categories, the category filter, and the partitioned result set.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UnifiedItem;
use crate::Error;

/// A category of search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchCategory {
    Track,
    Album,
    Artist,
    Playlist,
    Text,
}

impl SearchCategory {
    pub const ALL: [Self; 5] = [
        Self::Track,
        Self::Album,
        Self::Artist,
        Self::Playlist,
        Self::Text,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Track => "track",
            Self::Album => "album",
            Self::Artist => "artist",
            Self::Playlist => "playlist",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "track" | "tracks" => Ok(Self::Track),
            "album" | "albums" => Ok(Self::Album),
            "artist" | "artists" => Ok(Self::Artist),
            "playlist" | "playlists" => Ok(Self::Playlist),
            "text" | "texts" => Ok(Self::Text),
            other => Err(Error::InvalidArgument(format!(
                "unknown search category: {other}"
            ))),
        }
    }
}

/// The set of categories a caller asked for. An empty set means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCategoryFilter(BTreeSet<SearchCategory>);

impl SearchCategoryFilter {
    /// A filter that admits every category.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn only(categories: impl IntoIterator<Item = SearchCategory>) -> Self {
        Self(categories.into_iter().collect())
    }

    pub fn includes(&self, category: SearchCategory) -> bool {
        self.0.is_empty() || self.0.contains(&category)
    }

    pub fn is_all(&self) -> bool {
        self.0.is_empty() || self.0.len() == SearchCategory::ALL.len()
    }
}

impl FromIterator<SearchCategory> for SearchCategoryFilter {
    fn from_iter<I: IntoIterator<Item = SearchCategory>>(iter: I) -> Self {
        Self::only(iter)
    }
}

impl FromStr for SearchCategoryFilter {
    type Err = Error;

    /// Parse a comma-separated list such as `track,album`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(SearchCategory::from_str)
            .collect()
    }
}

/// Search results partitioned by category.
///
/// All five sequences are always present; categories the caller did not ask
/// for are empty rather than missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultSet {
    pub tracks: Vec<UnifiedItem>,
    pub albums: Vec<UnifiedItem>,
    pub artists: Vec<UnifiedItem>,
    pub playlists: Vec<UnifiedItem>,
    pub texts: Vec<UnifiedItem>,
}

impl SearchResultSet {
    /// Partition items into categories, keeping upstream order and dropping
    /// categories the filter excludes.
    pub fn from_items(
        items: impl IntoIterator<Item = UnifiedItem>,
        filter: &SearchCategoryFilter,
    ) -> Self {
        let mut set = Self::default();
        for item in items {
            if filter.includes(item.category()) {
                set.push(item);
            }
        }
        set
    }

    fn push(&mut self, item: UnifiedItem) {
        let bucket = match item.category() {
            SearchCategory::Track => &mut self.tracks,
            SearchCategory::Album => &mut self.albums,
            SearchCategory::Artist => &mut self.artists,
            SearchCategory::Playlist => &mut self.playlists,
            SearchCategory::Text => &mut self.texts,
        };
        bucket.push(item);
    }

    pub fn get(&self, category: SearchCategory) -> &[UnifiedItem] {
        match category {
            SearchCategory::Track => &self.tracks,
            SearchCategory::Album => &self.albums,
            SearchCategory::Artist => &self.artists,
            SearchCategory::Playlist => &self.playlists,
            SearchCategory::Text => &self.texts,
        }
    }

    pub fn len(&self) -> usize {
        SearchCategory::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_items() -> Vec<UnifiedItem> {
        vec![
            UnifiedItem::suggestion("one"),
            UnifiedItem::Track {
                title: "t".into(),
                author: "a".into(),
                identifier: "id".into(),
                url: "u".into(),
                artwork_url: None,
            },
            UnifiedItem::Album {
                name: "al".into(),
                author: "a".into(),
                url: "u".into(),
                artwork_url: None,
            },
            UnifiedItem::Artist {
                name: "ar".into(),
                url: "u".into(),
                artwork_url: None,
            },
            UnifiedItem::Playlist {
                name: "pl".into(),
                author: "a".into(),
                url: "u".into(),
                artwork_url: None,
            },
            UnifiedItem::suggestion("two"),
        ]
    }

    #[test]
    fn test_empty_filter_keeps_everything_in_order() {
        let set = SearchResultSet::from_items(sample_items(), &SearchCategoryFilter::all());
        assert_eq!(set.len(), 6);
        assert_eq!(set.texts[0].title(), "one");
        assert_eq!(set.texts[1].title(), "two");
    }

    #[test]
    fn test_filter_parsing() {
        let filter: SearchCategoryFilter = "track, albums".parse().unwrap();
        assert!(filter.includes(SearchCategory::Track));
        assert!(filter.includes(SearchCategory::Album));
        assert!(!filter.includes(SearchCategory::Text));
        assert!("track,video".parse::<SearchCategoryFilter>().is_err());
        assert!("".parse::<SearchCategoryFilter>().unwrap().is_all());
    }

    #[test]
    fn test_serialized_shape_has_all_keys() {
        let set = SearchResultSet::from_items(
            sample_items(),
            &SearchCategoryFilter::only([SearchCategory::Track]),
        );
        let json = serde_json::to_value(&set).unwrap();
        for key in ["tracks", "albums", "artists", "playlists", "texts"] {
            assert!(json[key].is_array(), "missing key {key}");
        }
        assert_eq!(json["tracks"].as_array().unwrap().len(), 1);
        assert!(json["albums"].as_array().unwrap().is_empty());
    }

    proptest! {
        #[test]
        fn prop_filter_admits_only_requested(mask in 0u8..32) {
            let requested: Vec<SearchCategory> = SearchCategory::ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, c)| *c)
                .collect();
            let filter = SearchCategoryFilter::only(requested.clone());
            let set = SearchResultSet::from_items(sample_items(), &filter);

            for category in SearchCategory::ALL {
                let expected_present = requested.is_empty() || requested.contains(&category);
                prop_assert_eq!(!set.get(category).is_empty(), expected_present);
                prop_assert!(set.get(category).iter().all(|item| item.category() == category));
            }
        }
    }
}
