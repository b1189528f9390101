use serde::{Deserialize, Serialize};
use std::path::PathBuf;
// Core data model is shared through the interfaces crate
pub use interfaces::defs::{DedupKey, FeedDescriptor, GroupedDigest, Headline, RawEntry, DEFAULT_CATEGORY};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_feed_size_mb: usize,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "News-Digest/0.1".to_string(),
            timeout_seconds: 30,
            max_feed_size_mb: 10,
            max_redirects: 5,
        }
    }
}

/// Why a single feed contributed nothing. Absorbed by the collector, never
/// surfaced past it.
#[derive(Debug, thiserror::Error)]
pub enum FeedFetchFailure {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unsupported URL scheme: {scheme}")]
    UnsupportedScheme { scheme: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status}")]
    Status { status: u16 },

    #[error("Feed size exceeds limit: {size_mb}MB")]
    TooLarge { size_mb: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Feed parse error: {0}")]
    Parse(String),
}

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    #[error("Failed to read config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {message}")]
    ConfigFormat { path: PathBuf, message: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid date format {format:?}: {reason}")]
    InvalidDateFormat { format: String, reason: String },

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, DigestError>;
pub type FetchResult<T> = std::result::Result<T, FeedFetchFailure>;
