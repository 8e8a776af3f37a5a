//! Orchestrates a template discovery run.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::discovery::discover_templates;
use crate::output::{write_registry, write_templates};
use crate::registry::TemplateRegistry;
use crate::source::RepositorySource;
use crate::summary::RunSummary;
use chrono::Utc;
use octocrab::Octocrab;
use tracing::info;

/// Runs discovery against a repository source and writes the snapshot.
pub struct Runner<S = Octocrab> {
    config: RunnerConfig,
    source: S,
}

impl Runner<Octocrab> {
    /// Builds a runner backed by the GitHub API.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let builder = Octocrab::builder();
        let octocrab = match config.token() {
            Some(token) => builder.personal_token(token.to_string()).build()?,
            None => builder.build()?,
        };
        Ok(Self::with_source(config, octocrab))
    }
}

impl<S: RepositorySource> Runner<S> {
    /// Builds a runner over any repository source.
    pub fn with_source(config: RunnerConfig, source: S) -> Self {
        Self { config, source }
    }

    /// Returns the run configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Consumes the runner, returning its repository source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Executes discovery and writes the results.
    ///
    /// The snapshot is only written once discovery has completed; a failed
    /// search leaves any previous snapshot untouched.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new();

        let templates =
            discover_templates(&self.source, self.config.discovery(), &mut summary).await?;

        write_templates(self.config.output_path(), &templates).await?;

        if let Some(registry_path) = self.config.registry_path() {
            let registry = TemplateRegistry::from_templates(templates, Utc::now());
            info!(
                typescript = registry.categories.typescript.len(),
                tailwind = registry.categories.tailwind.len(),
                "Built template registry"
            );
            write_registry(registry_path, &registry).await?;
        }

        Ok(summary)
    }
}
