//! Error taxonomy for the subset builder.
//!
//! Every failure that aborts a run maps onto one of four kinds. Incomplete
//! Game Master records are not errors; the extractor skips them.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Connection failure, timeout, non-success status, or a broken body read.
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Payload is not UTF-8 JSON, or does not have the expected shape.
    #[error("failed to decode JSON from {origin}: {source}")]
    Decode {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// Malformed identifier specification.
    #[error("invalid id entry {token:?}: {reason}")]
    Format { token: String, reason: String },

    #[error("failed to {action} {path:?}: {source}")]
    FileSystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn format(token: &str, reason: impl Into<String>) -> Self {
        Error::Format {
            token: token.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn fs(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FileSystem {
            action,
            path: path.into(),
            source,
        }
    }
}
