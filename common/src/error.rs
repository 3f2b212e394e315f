//! Error types for the page-state codec.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    /// Two route definitions claim the same URL pathname.
    #[error("Duplicate route pathname: {0}")]
    DuplicatePathname(String),

    /// A collection variant carries a query payload that is not valid JSON.
    #[error("Malformed collection query: {0}")]
    MalformedCollectionQuery(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
