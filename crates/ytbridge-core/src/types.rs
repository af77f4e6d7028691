//! Core domain types for ytbridge.

pub mod item;
pub mod locale;
pub mod lyrics;
pub mod search;

pub use item::{NavigationTarget, PageType, UnifiedItem};
pub use locale::{Locale, ResolvedLocale};
pub use lyrics::{LyricLine, LyricsDocument, LyricsQuery};
pub use search::{SearchCategory, SearchCategoryFilter, SearchResultSet};
