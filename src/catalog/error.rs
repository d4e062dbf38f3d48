//! Error types for catalog and image retrieval.

use thiserror::Error;

/// The catalog could not be retrieved.
///
/// Transport failures, non-success statuses and undecodable bodies are not
/// told apart; callers log and drop them.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to fetch catalog from '{endpoint}': {source}")]
    FetchFailure {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    pub(crate) fn failure(endpoint: &str, source: reqwest::Error) -> Self {
        FetchError::FetchFailure {
            endpoint: endpoint.to_string(),
            source,
        }
    }
}

/// A product image could not be turned into a thumbnail.
#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("Failed to download image '{url}': {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode image '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Thumbnail worker for '{url}' did not finish: {message}")]
    Worker { url: String, message: String },
}
