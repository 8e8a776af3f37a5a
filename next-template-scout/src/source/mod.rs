//! Access to hosted repositories.
//!
//! The analyzer and the discovery loop only talk to GitHub through
//! [`RepositorySource`], so a run can be driven by [`octocrab::Octocrab`]
//! in production or by an in-memory source in tests.

mod error;
mod github;

pub use error::SourceError;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A repository as returned by a search call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    /// Login of the owning user or organization.
    pub owner: String,

    /// Repository name.
    pub name: String,

    /// Star count at the time of the search.
    pub stars: u32,

    /// Free-text repository description.
    pub description: Option<String>,

    /// SPDX identifier of the detected license.
    pub license: Option<String>,

    /// Repository topics, in the order GitHub returned them.
    pub topics: Option<Vec<String>>,

    /// Timestamp of the last push (RFC 3339).
    pub pushed_at: Option<String>,
}

impl RepositorySummary {
    /// Creates a summary with only the identifying fields and star count set.
    pub fn new(owner: impl Into<String>, name: impl Into<String>, stars: u32) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            stars,
            description: None,
            license: None,
            topics: None,
            pushed_at: None,
        }
    }

    /// Full repository name in "owner/name" format.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// File content as delivered by the contents API, still transport-encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedFile {
    /// Encoded payload. GitHub omits it for files that are too large.
    pub content: Option<String>,

    /// Encoding tag (normally "base64").
    pub encoding: Option<String>,
}

/// Read-only view of a repository hosting service.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// Runs a repository search sorted by stars (descending) and returns a single page.
    async fn search_repositories(
        &self,
        query: &str,
        per_page: u8,
    ) -> Result<Vec<RepositorySummary>, SourceError>;

    /// Lists the names of the entries at the repository root.
    async fn list_root(&self, owner: &str, name: &str) -> Result<Vec<String>, SourceError>;

    /// Fetches a single file without decoding it.
    async fn fetch_file(
        &self,
        owner: &str,
        name: &str,
        path: &str,
    ) -> Result<EncodedFile, SourceError>;
}
