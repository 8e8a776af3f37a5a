//! Runner configuration.

use crate::config::DiscoveryConfig;
use crate::output::DEFAULT_OUTPUT_FILE;
use std::path::{Path, PathBuf};

/// Configuration for a discovery run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// GitHub token used for API calls. Anonymous when absent.
    token: Option<String>,
    /// Collection limits.
    discovery: DiscoveryConfig,
    /// Path of the template snapshot.
    output_path: PathBuf,
    /// Path of the categorized registry, if one should be written.
    registry_path: Option<PathBuf>,
}

impl RunnerConfig {
    /// Creates a new configuration writing to `template-analysis.json`.
    pub fn new(token: Option<String>, discovery: DiscoveryConfig) -> Self {
        Self {
            token,
            discovery,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            registry_path: None,
        }
    }

    /// Sets a custom snapshot path.
    pub fn with_output_path(mut self, output_path: PathBuf) -> Self {
        self.output_path = output_path;
        self
    }

    /// Also writes a categorized registry to `registry_path`.
    pub fn with_registry_path(mut self, registry_path: PathBuf) -> Self {
        self.registry_path = Some(registry_path);
        self
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the collection limits.
    pub fn discovery(&self) -> &DiscoveryConfig {
        &self.discovery
    }

    /// Returns the snapshot path.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Returns the registry path, if any.
    pub fn registry_path(&self) -> Option<&Path> {
        self.registry_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_working_directory_snapshot() {
        let config = RunnerConfig::new(None, DiscoveryConfig::default());

        assert_eq!(config.output_path(), Path::new("template-analysis.json"));
        assert!(config.registry_path().is_none());
        assert!(config.token().is_none());
    }

    #[test]
    fn builder_overrides_paths() {
        let config = RunnerConfig::new(Some("ghp_test".to_string()), DiscoveryConfig::new(5, 10))
            .with_output_path(PathBuf::from("out/templates.json"))
            .with_registry_path(PathBuf::from("out/registry.json"));

        assert_eq!(config.token(), Some("ghp_test"));
        assert_eq!(config.discovery().max_templates(), 5);
        assert_eq!(config.output_path(), Path::new("out/templates.json"));
        assert_eq!(config.registry_path(), Some(Path::new("out/registry.json")));
    }
}
