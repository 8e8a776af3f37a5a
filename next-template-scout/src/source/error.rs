//! Repository source error types.

use thiserror::Error;

/// Errors returned by a [`RepositorySource`](super::RepositorySource).
#[derive(Debug, Error)]
pub enum SourceError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The requested path did not resolve to a file.
    #[error("No file found at '{path}' in {repository}")]
    FileNotFound { repository: String, path: String },
}
