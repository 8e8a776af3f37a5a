//! Template discovery error types.

use crate::source::SourceError;
use thiserror::Error;

/// Errors that abort a discovery run.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// A search request failed.
    #[error("Search '{query}' failed: {source}")]
    SearchFailed {
        query: String,
        #[source]
        source: SourceError,
    },

    /// A collected record could not be converted to or from JSON.
    #[error("Failed to serialize template record: {0}")]
    Serialize(#[from] serde_json::Error),
}
