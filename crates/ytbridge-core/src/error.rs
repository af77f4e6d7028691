//! Error types for ytbridge.

use thiserror::Error;

/// Result type alias using ytbridge's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for ytbridge.
#[derive(Error, Debug)]
pub enum Error {
    // Transport errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] HttpError),

    #[error("Network error: {0}")]
    Network(String),

    // Upstream response errors
    #[error("Failed to decode API response: {0}")]
    Decode(#[from] DecodeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No lyrics found")]
    LyricsNotFound,

    // Caller errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// HTTP-specific errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed with status {status}: {message}")]
    StatusError { status: u16, message: String },

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// A field the upstream response was expected to carry is missing or has
/// an unexpected shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` has unexpected shape, expected {expected}")]
    UnexpectedShape {
        field: &'static str,
        expected: &'static str,
    },

    #[error("navigation endpoint carries neither a watch nor a browse target")]
    NoNavigationTarget,
}

impl Error {
    /// Returns true if the error came from the transport rather than from
    /// decoding what the transport returned.
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Network(_))
    }

    /// Returns true if this error means "no lyrics for this track".
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::LyricsNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_transport() {
        assert!(Error::Network("test".into()).is_transport());
        assert!(Error::Http(HttpError::Timeout).is_transport());
        assert!(!Error::LyricsNotFound.is_transport());
        assert!(!Error::Decode(DecodeError::MissingField("videoId")).is_transport());
    }

    #[test]
    fn test_error_display() {
        let err = Error::Decode(DecodeError::MissingField("browseId"));
        assert_eq!(
            err.to_string(),
            "Failed to decode API response: missing field `browseId`"
        );
        assert!(Error::LyricsNotFound.is_not_found());
    }
}
