//! Runner error types.

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Template discovery errors.
    #[error(transparent)]
    Discovery(#[from] crate::discovery::DiscoveryError),

    /// Snapshot writing errors.
    #[error(transparent)]
    Output(#[from] crate::output::OutputError),
}
