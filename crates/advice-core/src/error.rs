//! Error types for advisory sources and the dataset pipeline.

use thiserror::Error;

/// Errors that can occur while fetching or assembling travel advice.
#[derive(Debug, Error)]
pub enum AdviceError {
    /// Configuration error (invalid URL, missing setting).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network-level failure or non-success response.
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A per-country advisory URL is not a well-formed absolute URL.
    ///
    /// The only per-country failure the pipeline recovers from: the
    /// country is dropped and processing continues.
    #[error("Malformed advisory URL: {0}")]
    MalformedUrl(String),
}
