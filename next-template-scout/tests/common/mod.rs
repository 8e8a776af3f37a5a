use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use next_template_scout::{EncodedFile, RepositorySource, RepositorySummary, SourceError};
use std::collections::HashMap;
use std::sync::Mutex;

/// A repository hosted by [`FakeSource`].
pub struct FakeRepository {
    pub root: Vec<String>,
    pub manifest: Option<String>,
}

/// In-memory GitHub stand-in that records every call it receives.
#[derive(Default)]
pub struct FakeSource {
    searches: HashMap<String, Vec<RepositorySummary>>,
    repositories: HashMap<String, FakeRepository>,
    failing_query: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the results returned for `query`.
    pub fn with_search(mut self, query: &str, results: Vec<RepositorySummary>) -> Self {
        self.searches.insert(query.to_string(), results);
        self
    }

    /// Registers a repository's root listing and `package.json` text.
    pub fn with_repository(
        mut self,
        full_name: &str,
        root: &[&str],
        manifest: Option<&str>,
    ) -> Self {
        self.repositories.insert(
            full_name.to_string(),
            FakeRepository {
                root: root.iter().map(|entry| entry.to_string()).collect(),
                manifest: manifest.map(str::to_string),
            },
        );
        self
    }

    /// Registers a Next.js template with the given manifest.
    pub fn with_template(self, full_name: &str, manifest: &str) -> Self {
        self.with_repository(full_name, &["next.config.js", "package.json"], Some(manifest))
    }

    /// Makes searches for `query` fail.
    pub fn failing_search(mut self, query: &str) -> Self {
        self.failing_query = Some(query.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count_calls(&self, prefix: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn repository(&self, owner: &str, name: &str) -> Result<&FakeRepository, SourceError> {
        self.repositories
            .get(&format!("{owner}/{name}"))
            .ok_or_else(|| SourceError::FileNotFound {
                repository: format!("{owner}/{name}"),
                path: String::new(),
            })
    }
}

#[async_trait]
impl RepositorySource for FakeSource {
    async fn search_repositories(
        &self,
        query: &str,
        per_page: u8,
    ) -> Result<Vec<RepositorySummary>, SourceError> {
        self.record(format!("search {query}"));

        if self.failing_query.as_deref() == Some(query) {
            return Err(SourceError::FileNotFound {
                repository: "search".to_string(),
                path: query.to_string(),
            });
        }

        let mut results = self.searches.get(query).cloned().unwrap_or_default();
        results.truncate(per_page as usize);
        Ok(results)
    }

    async fn list_root(&self, owner: &str, name: &str) -> Result<Vec<String>, SourceError> {
        self.record(format!("list {owner}/{name}"));
        Ok(self.repository(owner, name)?.root.clone())
    }

    async fn fetch_file(
        &self,
        owner: &str,
        name: &str,
        path: &str,
    ) -> Result<EncodedFile, SourceError> {
        self.record(format!("fetch {owner}/{name}/{path}"));
        let manifest = self
            .repository(owner, name)?
            .manifest
            .as_ref()
            .ok_or_else(|| SourceError::FileNotFound {
                repository: format!("{owner}/{name}"),
                path: path.to_string(),
            })?;

        Ok(EncodedFile {
            content: Some(BASE64.encode(manifest)),
            encoding: Some("base64".to_string()),
        })
    }
}

/// A search hit with an empty topic list.
pub fn summary(owner: &str, name: &str, stars: u32) -> RepositorySummary {
    let mut summary = RepositorySummary::new(owner, name, stars);
    summary.topics = Some(Vec::new());
    summary
}
