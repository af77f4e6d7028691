//! Decoders for the watch-next and lyrics browse responses.

use serde_json::Value;
use tracing::debug;
use ytbridge_core::{DecodeError, LyricLine, LyricsDocument};
use ytbridge_innertube::Nav;

const LYRICS_PAGE_TYPE: &str = "MUSIC_PAGE_TYPE_TRACK_LYRICS";

/// Browse ID of the lyrics tab on a watch-next page.
pub fn lyrics_browse_id(next: &Value) -> Option<String> {
    Nav::new(next)
        .path(&[
            "contents",
            "singleColumnMusicWatchNextResultsRenderer",
            "tabbedRenderer",
            "watchNextTabbedResultsRenderer",
            "tabs",
        ])
        .array()
        .map(|tab| tab.path(&["tabRenderer", "endpoint", "browseEndpoint"]))
        .find(|endpoint| {
            endpoint
                .path(&[
                    "browseEndpointContextSupportedConfigs",
                    "browseEndpointContextMusicConfig",
                    "pageType",
                ])
                .str()
                == Some(LYRICS_PAGE_TYPE)
        })
        .and_then(|endpoint| endpoint.get("browseId").string())
}

/// Which lyrics shape a browse response carries.
#[derive(Debug, Clone, Copy)]
pub enum LyricsShape<'a> {
    Timed(Nav<'a>),
    Description(Nav<'a>),
    Missing,
}

pub fn detect(browse: &Value) -> LyricsShape<'_> {
    let root = Nav::new(browse);

    let timed = root.path(&[
        "contents",
        "elementRenderer",
        "newElement",
        "type",
        "componentType",
        "model",
        "timedLyricsModel",
        "lyricsData",
    ]);
    if timed.is_present() {
        return LyricsShape::Timed(timed);
    }

    let description = root
        .path(&["contents", "sectionListRenderer", "contents"])
        .find("musicDescriptionShelfRenderer");
    if description.is_present() {
        return LyricsShape::Description(description);
    }

    LyricsShape::Missing
}

/// Decode `lyricsData` of the timed lyrics model.
pub fn parse_timed(data: Nav<'_>) -> Result<LyricsDocument, DecodeError> {
    let source = data.get("sourceMessage").require_str("sourceMessage")?;

    let entries = data.get("timedLyricsData");
    entries.require("timedLyricsData")?;
    let lines = entries
        .array()
        .map(parse_timed_line)
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Decoded {} timed lines from {source}", lines.len());
    Ok(LyricsDocument::Timed {
        source: source.to_string(),
        lines,
    })
}

fn parse_timed_line(entry: Nav<'_>) -> Result<LyricLine, DecodeError> {
    let line = entry.get("lyricLine").require_str("lyricLine")?;
    let cue = entry.get("cueRange");
    let start = cue
        .get("startTimeMilliseconds")
        .require_u64("startTimeMilliseconds")?;
    let end = cue
        .get("endTimeMilliseconds")
        .require_u64("endTimeMilliseconds")?;
    Ok(LyricLine::new(line, start, end))
}

/// Decode a `musicDescriptionShelfRenderer`: description is the body,
/// footer the attribution.
pub fn parse_description(shelf: Nav<'_>) -> Result<LyricsDocument, DecodeError> {
    let body = shelf
        .get("description")
        .runs_text()
        .ok_or(DecodeError::MissingField("description"))?;
    let source = shelf
        .get("footer")
        .runs_text()
        .ok_or(DecodeError::MissingField("footer"))?;

    Ok(LyricsDocument::Text { source, body })
}

#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::{json, Value};

    pub fn next_response(lyrics_browse_id: Option<&str>) -> Value {
        let lyrics_tab = lyrics_browse_id.map_or_else(
            || json!({"tabRenderer": {"title": "Lyrics", "unselectable": true}}),
            |id| {
                json!({"tabRenderer": {"title": "Lyrics", "endpoint": {"browseEndpoint": {
                    "browseId": id,
                    "browseEndpointContextSupportedConfigs": {"browseEndpointContextMusicConfig": {
                        "pageType": "MUSIC_PAGE_TYPE_TRACK_LYRICS"
                    }}
                }}}})
            },
        );

        json!({
            "contents": {"singleColumnMusicWatchNextResultsRenderer": {"tabbedRenderer": {
                "watchNextTabbedResultsRenderer": {"tabs": [
                    {"tabRenderer": {"title": "Up next"}},
                    lyrics_tab,
                    {"tabRenderer": {"title": "Related", "endpoint": {"browseEndpoint": {
                        "browseId": "MPTRt_related",
                        "browseEndpointContextSupportedConfigs": {"browseEndpointContextMusicConfig": {
                            "pageType": "MUSIC_PAGE_TYPE_TRACK_RELATED"
                        }}
                    }}}}
                ]}
            }}}
        })
    }

    pub fn timed_browse_response() -> Value {
        json!({
            "contents": {"elementRenderer": {"newElement": {"type": {"componentType": {"model": {
                "timedLyricsModel": {"lyricsData": {
                    "sourceMessage": "Source: LyricFind",
                    "timedLyricsData": [
                        {"lyricLine": "We're no strangers to love",
                         "cueRange": {"startTimeMilliseconds": "18800", "endTimeMilliseconds": "22000"}},
                        {"lyricLine": "You know the rules and so do I",
                         "cueRange": {"startTimeMilliseconds": 22000, "endTimeMilliseconds": 26500}}
                    ]
                }}
            }}}}}}
        })
    }

    pub fn description_browse_response() -> Value {
        json!({
            "contents": {"sectionListRenderer": {"contents": [
                {"musicDescriptionShelfRenderer": {
                    "description": {"runs": [{"text": "Line one\nLine two"}]},
                    "footer": {"runs": [{"text": "Source: Musixmatch"}]}
                }}
            ]}}
        })
    }
}
