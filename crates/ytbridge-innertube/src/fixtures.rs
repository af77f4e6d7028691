//! Canned `InnerTube` responses shared by the crate's tests.

use serde_json::{json, Value};

/// A flex column whose text is made of the given runs.
pub fn column(runs: &[&str]) -> Value {
    let runs: Vec<Value> = runs.iter().map(|text| json!({ "text": text })).collect();
    json!({
        "musicResponsiveListItemFlexColumnRenderer": { "text": { "runs": runs } }
    })
}

fn thumbnails() -> Value {
    json!({
        "musicThumbnailRenderer": {
            "thumbnail": {
                "thumbnails": [
                    { "url": "https://lh3.googleusercontent.com/small", "width": 60, "height": 60 },
                    { "url": "https://lh3.googleusercontent.com/large", "width": 120, "height": 120 }
                ]
            }
        }
    })
}

fn browse(browse_id: &str, page_type: &str) -> Value {
    json!({
        "browseEndpoint": {
            "browseId": browse_id,
            "browseEndpointContextSupportedConfigs": {
                "browseEndpointContextMusicConfig": { "pageType": page_type }
            }
        }
    })
}

fn list_item(columns: &[Value], endpoint: Value) -> Value {
    json!({
        "musicResponsiveListItemRenderer": {
            "thumbnail": thumbnails(),
            "flexColumns": columns,
            "navigationEndpoint": endpoint
        }
    })
}

/// A `music/get_search_suggestions` response with one entry of every kind,
/// plus three entries that must be skipped.
pub fn suggestions_response() -> Value {
    json!({
        "contents": [
            {
                "searchSuggestionsSectionRenderer": {
                    "contents": [
                        {
                            "searchSuggestionRenderer": {
                                "suggestion": {
                                    "runs": [
                                        { "text": "never gonna", "bold": true },
                                        { "text": " give you up" }
                                    ]
                                }
                            }
                        },
                        { "historySuggestionRenderer": { "suggestion": { "runs": [] } } }
                    ]
                }
            },
            {
                "searchSuggestionsSectionRenderer": {
                    "contents": [
                        list_item(
                            &[column(&["Never Gonna Give You Up"]), column(&["Song", " • ", "Rick Astley"])],
                            json!({ "watchEndpoint": { "videoId": "dQw4w9WgXcQ" } }),
                        ),
                        list_item(
                            &[column(&["Whenever You Need Somebody"]), column(&["Album", " • ", "Rick Astley", " • ", "1987"])],
                            browse("MPREb_album", "MUSIC_PAGE_TYPE_ALBUM"),
                        ),
                        list_item(
                            &[column(&["Rick Astley"]), column(&["Artist", " • ", "4.1M monthly audience"])],
                            browse("UCartist", "MUSIC_PAGE_TYPE_ARTIST"),
                        ),
                        list_item(
                            &[column(&["Podcast Show"]), column(&["Podcast", " • ", "Someone"])],
                            browse("MPSPshow", "MUSIC_PAGE_TYPE_PODCAST_SHOW_DETAIL_PAGE"),
                        ),
                        list_item(
                            &[column(&["80s Hits"]), column(&["Playlist", " • ", "YouTube Music"])],
                            browse("VLPLplaylist", "MUSIC_PAGE_TYPE_PLAYLIST"),
                        ),
                        list_item(&[column(&["Dangling"])], json!({ "clickTrackingParams": "x" }))
                    ]
                }
            }
        ]
    })
}

/// A songs-only `search` response from the Android client.
pub fn song_search_response(video_ids: &[&str]) -> Value {
    let items: Vec<Value> = video_ids
        .iter()
        .map(|id| {
            json!({
                "musicTwoColumnItemRenderer": {
                    "title": { "runs": [{ "text": "A song" }] },
                    "navigationEndpoint": { "watchEndpoint": { "videoId": id } }
                }
            })
        })
        .collect();

    json!({
        "contents": {
            "tabbedSearchResultsRenderer": {
                "tabs": [{
                    "tabRenderer": {
                        "content": {
                            "sectionListRenderer": {
                                "contents": [
                                    { "itemSectionRenderer": { "contents": [] } },
                                    { "musicShelfRenderer": { "contents": items } }
                                ]
                            }
                        }
                    }
                }]
            }
        }
    })
}
