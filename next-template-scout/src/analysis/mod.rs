//! Per-repository template analysis.
//!
//! Decides whether a search hit is a Next.js template and, if it is,
//! reads its `package.json` to describe what the template is built with.

mod error;
mod manifest;
mod template;

pub use error::AnalyzeError;
pub use manifest::PackageManifest;
pub use template::TemplateAnalysis;

use crate::source::{RepositorySource, RepositorySummary};
use manifest::MANIFEST_FILE;
use tracing::{debug, info_span, warn, Instrument};

/// Framework config file a template must carry at its root.
const NEXT_CONFIG_FILE: &str = "next.config.js";

/// TypeScript config file checked at the root.
const TSCONFIG_FILE: &str = "tsconfig.json";

/// Substrings of root entry names that indicate a test setup.
const TEST_MARKERS: [&str; 2] = ["test", "jest"];

/// Result of analyzing a single repository.
#[derive(Debug)]
pub enum AnalysisOutcome {
    /// The repository is a template candidate.
    Qualified(TemplateAnalysis),

    /// The repository lacks `next.config.js` or `package.json` at its root.
    Disqualified,

    /// The repository could not be read or its manifest could not be parsed.
    Failed(AnalyzeError),
}

impl AnalysisOutcome {
    /// Returns the analysis if the repository qualified.
    pub fn into_template(self) -> Option<TemplateAnalysis> {
        match self {
            Self::Qualified(template) => Some(template),
            Self::Disqualified | Self::Failed(_) => None,
        }
    }

    /// Returns true if the repository qualified.
    pub fn is_qualified(&self) -> bool {
        matches!(self, Self::Qualified(_))
    }
}

/// Analyzes a repository found by a search.
///
/// Issues at most one root listing and one file fetch. Failures are logged
/// with the repository name and reported as [`AnalysisOutcome::Failed`];
/// they are never retried or propagated.
pub async fn analyze_repository<S>(source: &S, repository: &RepositorySummary) -> AnalysisOutcome
where
    S: RepositorySource + ?Sized,
{
    let span = info_span!("analyze", repo = %repository.full_name());

    async {
        match inspect_repository(source, repository).await {
            Ok(Some(template)) => {
                debug!(stars = template.stars, "Repository qualifies as template");
                AnalysisOutcome::Qualified(template)
            }
            Ok(None) => {
                debug!("Repository is not a Next.js template");
                AnalysisOutcome::Disqualified
            }
            Err(e) => {
                warn!(
                    repo = %repository.name,
                    error = %e,
                    "Failed to analyze repository"
                );
                AnalysisOutcome::Failed(e)
            }
        }
    }
    .instrument(span)
    .await
}

async fn inspect_repository<S>(
    source: &S,
    repository: &RepositorySummary,
) -> Result<Option<TemplateAnalysis>, AnalyzeError>
where
    S: RepositorySource + ?Sized,
{
    let root = source
        .list_root(&repository.owner, &repository.name)
        .await?;

    if !contains_file(&root, NEXT_CONFIG_FILE) || !contains_file(&root, MANIFEST_FILE) {
        return Ok(None);
    }

    let file = source
        .fetch_file(&repository.owner, &repository.name, MANIFEST_FILE)
        .await?;
    let manifest = PackageManifest::from_encoded(&file)?;

    Ok(Some(build_analysis(repository, &root, manifest)))
}

/// Assembles the analysis record from the summary, root listing and manifest.
fn build_analysis(
    repository: &RepositorySummary,
    root: &[String],
    manifest: PackageManifest,
) -> TemplateAnalysis {
    let has_tailwind = manifest.tailwind_version();

    TemplateAnalysis {
        name: repository.name.clone(),
        owner: repository.owner.clone(),
        stars: repository.stars,
        description: repository.description.clone(),
        dependencies: manifest.dependencies.unwrap_or_default(),
        dev_dependencies: manifest.dev_dependencies.unwrap_or_default(),
        has_typescript: contains_file(root, TSCONFIG_FILE),
        has_tests: has_test_setup(root),
        has_tailwind,
        last_update: repository.pushed_at.clone(),
        license: repository.license.clone(),
        topics: repository.topics.clone().unwrap_or_default(),
    }
}

fn contains_file(root: &[String], file_name: &str) -> bool {
    root.iter().any(|entry| entry == file_name)
}

/// Case-sensitive substring match, so `latest-release.txt` counts too.
fn has_test_setup(root: &[String]) -> bool {
    root.iter()
        .any(|entry| TEST_MARKERS.iter().any(|marker| entry.contains(marker)))
}
