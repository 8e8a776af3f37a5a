//! [`RepositorySource`] backed by the GitHub REST API.

use super::{EncodedFile, RepositorySource, RepositorySummary, SourceError};
use async_trait::async_trait;
use chrono::SecondsFormat;
use octocrab::models::Repository;
use octocrab::Octocrab;
use tracing::debug;

#[async_trait]
impl RepositorySource for Octocrab {
    async fn search_repositories(
        &self,
        query: &str,
        per_page: u8,
    ) -> Result<Vec<RepositorySummary>, SourceError> {
        debug!(query = %query, per_page, "Executing repository search");

        let page = self
            .search()
            .repositories(query)
            .sort("stars")
            .order("desc")
            .per_page(per_page)
            .send()
            .await?;

        Ok(page.items.iter().filter_map(summarize_repository).collect())
    }

    async fn list_root(&self, owner: &str, name: &str) -> Result<Vec<String>, SourceError> {
        let listing = self.repos(owner, name).get_content().send().await?;
        Ok(listing.items.into_iter().map(|item| item.name).collect())
    }

    async fn fetch_file(
        &self,
        owner: &str,
        name: &str,
        path: &str,
    ) -> Result<EncodedFile, SourceError> {
        let listing = self.repos(owner, name).get_content().path(path).send().await?;

        // A file path yields exactly one item; a directory yields its children.
        let file = listing
            .items
            .into_iter()
            .find(|item| item.path == path)
            .ok_or_else(|| SourceError::FileNotFound {
                repository: format!("{owner}/{name}"),
                path: path.to_string(),
            })?;

        Ok(EncodedFile {
            content: file.content,
            encoding: file.encoding,
        })
    }
}

/// Converts a search hit into a summary.
///
/// Hits without an owner cannot be addressed by the contents API and are dropped.
fn summarize_repository(repo: &Repository) -> Option<RepositorySummary> {
    let owner = repo.owner.as_ref()?.login.clone();

    Some(RepositorySummary {
        owner,
        name: repo.name.clone(),
        stars: repo.stargazers_count.unwrap_or_default(),
        description: repo.description.clone(),
        license: repo.license.as_ref().map(|license| license.spdx_id.clone()),
        topics: repo.topics.clone(),
        pushed_at: repo
            .pushed_at
            .map(|pushed| pushed.to_rfc3339_opts(SecondsFormat::Secs, true)),
    })
}
