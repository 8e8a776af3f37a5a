//! Analysis error types.

use crate::source::SourceError;
use thiserror::Error;

/// Errors that can occur while analyzing a single repository.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The repository could not be read.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The contents API returned no payload for the manifest.
    #[error("'{path}' has no content")]
    MissingContent { path: String },

    /// The manifest used an encoding other than base64.
    #[error("Unsupported content encoding '{encoding}'")]
    UnsupportedEncoding { encoding: String },

    /// The manifest payload was not valid base64.
    #[error("Failed to decode base64 content: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded manifest was not valid UTF-8.
    #[error("Content is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The manifest was not valid JSON of the expected shape.
    #[error("Failed to parse package.json: {0}")]
    Manifest(#[from] serde_json::Error),
}
