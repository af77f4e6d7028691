//! Lyrics lookup input and the resolved lyrics document.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What is known about the track whose lyrics are wanted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricsQuery {
    /// Identifier of the track on the lyrics provider's own catalog, when the
    /// track came from that catalog.
    pub own_provider_identifier: Option<String>,
    pub isrc: Option<String>,
    pub title: String,
    pub author: String,
}

impl LyricsQuery {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            own_provider_identifier: None,
            isrc: None,
            title: title.into(),
            author: author.into(),
        }
    }

    #[must_use]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.own_provider_identifier = Some(identifier.into());
        self
    }

    #[must_use]
    pub fn with_isrc(mut self, isrc: impl Into<String>) -> Self {
        self.isrc = Some(isrc.into());
        self
    }

    /// Free-text query used when nothing better than title and author is known.
    pub fn search_text(&self) -> String {
        format!("{} - {}", self.title, self.author)
    }
}

/// One time-synced line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricLine {
    pub line: String,
    pub start_millis: u64,
    pub end_millis: u64,
}

impl LyricLine {
    pub fn new(line: impl Into<String>, start_millis: u64, end_millis: u64) -> Self {
        Self {
            line: line.into(),
            start_millis,
            end_millis,
        }
    }

    pub const fn start(&self) -> Duration {
        Duration::from_millis(self.start_millis)
    }

    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.end_millis.saturating_sub(self.start_millis))
    }
}

/// Resolved lyrics, either time-synced or plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LyricsDocument {
    Timed { source: String, lines: Vec<LyricLine> },
    Text { source: String, body: String },
}

impl LyricsDocument {
    /// Attribution shown alongside the lyrics.
    pub fn source(&self) -> &str {
        match self {
            Self::Timed { source, .. } | Self::Text { source, .. } => source,
        }
    }

    /// Plain-text rendering, one line per timed line.
    pub fn text(&self) -> String {
        match self {
            Self::Timed { lines, .. } => lines
                .iter()
                .map(|l| l.line.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
            Self::Text { body, .. } => body.clone(),
        }
    }

    /// The timed line active at `position`.
    pub fn line_at(&self, position: Duration) -> Option<&LyricLine> {
        let Self::Timed { lines, .. } = self else {
            return None;
        };
        let millis = position.as_millis() as u64;
        lines
            .iter()
            .find(|line| millis >= line.start_millis && millis < line.end_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_duration() {
        let line = LyricLine::new("hello", 1_000, 3_500);
        assert_eq!(line.start(), Duration::from_millis(1_000));
        assert_eq!(line.duration(), Duration::from_millis(2_500));

        let inverted = LyricLine::new("odd", 5_000, 4_000);
        assert_eq!(inverted.duration(), Duration::ZERO);
    }

    #[test]
    fn test_timed_text_and_lookup() {
        let doc = LyricsDocument::Timed {
            source: "LyricFind".into(),
            lines: vec![LyricLine::new("first", 0, 1_000), LyricLine::new("second", 1_000, 2_000)],
        };
        assert_eq!(doc.text(), "first\nsecond");
        assert_eq!(doc.source(), "LyricFind");
        assert_eq!(
            doc.line_at(Duration::from_millis(1_500)).map(|l| l.line.as_str()),
            Some("second")
        );
        assert!(doc.line_at(Duration::from_secs(5)).is_none());
    }

    #[test]
    fn test_search_text() {
        let query = LyricsQuery::new("Song", "Band").with_isrc("USRC17607839");
        assert_eq!(query.search_text(), "Song - Band");
        assert_eq!(query.isrc.as_deref(), Some("USRC17607839"));
    }
}
