//! Error types for the newswire client.
//!
//! Every failure is propagated to the caller untouched; there is no local
//! recovery and no retry. [`NewswireError::stage`] names the stage that failed
//! so `main` can report it.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for newswire operations.
pub type Result<T> = std::result::Result<T, NewswireError>;

/// Errors that can occur while fetching and storing API payloads.
#[derive(Error, Debug)]
pub enum NewswireError {
    /// A required environment variable is absent or blank.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// The configured API host is not a usable base URL.
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Connection failure, timeout, or an interrupted body read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response from the API.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The response body is not valid JSON.
    #[error("response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Valid JSON, but not the shape the caller needs.
    #[error("unexpected response shape: {0}")]
    InvalidResponse(String),

    /// Requested section is absent from the published section list.
    #[error("unknown section {0:?}")]
    UnknownSection(String),

    /// Storage directory missing or a file write failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NewswireError {
    /// Short name of the stage that failed, used in the exit message.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::MissingVar(_) | Self::InvalidBaseUrl { .. } => "config",
            Self::Network(_) => "network",
            Self::Api { .. } => "api",
            Self::Decode(_) | Self::InvalidResponse(_) => "decode",
            Self::UnknownSection(_) => "validation",
            Self::Io { .. } => "disk",
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names() {
        assert_eq!(NewswireError::MissingVar("NY_API_KEY").stage(), "config");
        assert_eq!(
            NewswireError::Api {
                status: 404,
                body: String::new()
            }
            .stage(),
            "api"
        );
        assert_eq!(
            NewswireError::UnknownSection("nope".to_string()).stage(),
            "validation"
        );
        assert_eq!(
            NewswireError::io("/tmp/x", std::io::Error::other("boom")).stage(),
            "disk"
        );
    }

    #[test]
    fn test_decode_stage() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = NewswireError::from(err);
        assert_eq!(err.stage(), "decode");
        assert!(err.to_string().starts_with("response is not valid JSON"));
    }

    #[test]
    fn test_api_error_message_keeps_status_and_body() {
        let err = NewswireError::Api {
            status: 401,
            body: r#"{"fault":"Invalid ApiKey"}"#.to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("Invalid ApiKey"));
    }

    #[test]
    fn test_missing_var_names_variable() {
        let err = NewswireError::MissingVar("NY_API_KEY");
        assert_eq!(
            err.to_string(),
            "missing required environment variable NY_API_KEY"
        );
    }
}
