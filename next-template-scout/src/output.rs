//! Snapshot files.

use crate::analysis::TemplateAnalysis;
use crate::registry::TemplateRegistry;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Default snapshot file, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "template-analysis.json";

/// Errors that can occur while writing a snapshot.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to serialize the snapshot.
    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to write the file.
    #[error("Failed to write file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Renders templates as a JSON array indented by two spaces.
///
/// # Errors
///
/// Returns an error if a record cannot be serialized.
pub fn render_templates(templates: &[TemplateAnalysis]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(templates)
}

/// Writes the template snapshot, replacing any existing file.
///
/// # Errors
///
/// Returns [`OutputError`] if serialization or the write fails.
pub async fn write_templates(
    path: &Path,
    templates: &[TemplateAnalysis],
) -> Result<(), OutputError> {
    write_file(path, render_templates(templates)?).await?;
    info!(path = %path.display(), count = templates.len(), "Wrote template snapshot");
    Ok(())
}

/// Writes the categorized registry, replacing any existing file.
///
/// # Errors
///
/// Returns [`OutputError`] if serialization or the write fails.
pub async fn write_registry(path: &Path, registry: &TemplateRegistry) -> Result<(), OutputError> {
    write_file(path, serde_json::to_string_pretty(registry)?).await?;
    info!(path = %path.display(), "Wrote template registry");
    Ok(())
}

async fn write_file(path: &Path, json: String) -> Result<(), OutputError> {
    tokio::fs::write(path, json)
        .await
        .map_err(|e| OutputError::IoError {
            path: path.display().to_string(),
            source: e,
        })
}
