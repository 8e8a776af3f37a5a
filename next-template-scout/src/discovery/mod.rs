//! Template discovery using GitHub repository search.
//!
//! Runs a fixed set of search passes, analyzes every hit in order and
//! collects qualifying templates until the configured maximum is reached.

mod accumulator;
mod error;

pub use accumulator::{Insertion, TemplateAccumulator};
pub use error::DiscoveryError;

use crate::analysis::{analyze_repository, AnalysisOutcome, TemplateAnalysis};
use crate::config::DiscoveryConfig;
use crate::source::RepositorySource;
use crate::summary::RunSummary;
use tracing::{debug, info, info_span, Instrument};

/// Results requested per template search.
const TEMPLATE_RESULTS_PER_PAGE: u8 = 50;

/// Results requested for the trending search.
const TRENDING_RESULTS_PER_PAGE: u8 = 20;

/// Queries for established templates. Each is pre-filtered to >100 stars.
const TEMPLATE_QUERIES: [&str; 4] = [
    "nextjs template stars:>100",
    "next.js starter stars:>100",
    "next.js boilerplate stars:>100",
    "nextjs typescript template stars:>100",
];

/// Query for recently created, popular projects.
const TRENDING_QUERY: &str = "nextjs created:>2023-01-01 stars:>500";

/// A single search request and the rule applied to its results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPass {
    /// Full-text search query.
    pub query: String,

    /// Number of results to request.
    pub per_page: u8,

    /// Whether qualifying results must also meet the configured minimum stars.
    pub enforce_min_stars: bool,
}

/// Returns the search passes of a discovery run, in execution order.
pub fn search_passes() -> Vec<SearchPass> {
    TEMPLATE_QUERIES
        .iter()
        .map(|query| SearchPass {
            query: (*query).to_string(),
            per_page: TEMPLATE_RESULTS_PER_PAGE,
            enforce_min_stars: true,
        })
        .chain(std::iter::once(SearchPass {
            query: TRENDING_QUERY.to_string(),
            per_page: TRENDING_RESULTS_PER_PAGE,
            enforce_min_stars: false,
        }))
        .collect()
}

/// Discovers Next.js templates.
///
/// Repositories are analyzed one at a time. A search pass stops early once
/// `max_templates` records have been collected, but every pass still issues
/// its search request.
///
/// # Arguments
///
/// * `source` - Repository source to search and read from
/// * `config` - Collection limits
/// * `summary` - Run statistics, updated in place
///
/// # Returns
///
/// Collected templates in the order they were found.
///
/// # Errors
///
/// Returns [`DiscoveryError`] if a search request fails.
pub async fn discover_templates<S>(
    source: &S,
    config: &DiscoveryConfig,
    summary: &mut RunSummary,
) -> Result<Vec<TemplateAnalysis>, DiscoveryError>
where
    S: RepositorySource + ?Sized,
{
    info!(
        max_templates = config.max_templates(),
        min_stars = config.min_stars(),
        "Starting template discovery"
    );

    let mut accumulator = TemplateAccumulator::new(config.max_templates());

    for pass in search_passes() {
        let span = info_span!("search", query = %pass.query);
        run_search_pass(source, &pass, config, &mut accumulator, summary)
            .instrument(span)
            .await?;
    }

    let templates = accumulator.into_templates()?;
    summary.templates_collected = templates.len();

    info!(count = templates.len(), "Discovery complete");
    Ok(templates)
}

async fn run_search_pass<S>(
    source: &S,
    pass: &SearchPass,
    config: &DiscoveryConfig,
    accumulator: &mut TemplateAccumulator,
    summary: &mut RunSummary,
) -> Result<(), DiscoveryError>
where
    S: RepositorySource + ?Sized,
{
    let repositories = source
        .search_repositories(&pass.query, pass.per_page)
        .await
        .map_err(|e| DiscoveryError::SearchFailed {
            query: pass.query.clone(),
            source: e,
        })?;
    summary.searches_run += 1;
    debug!(results = repositories.len(), "Search returned");

    for repository in &repositories {
        if accumulator.is_full() {
            debug!(
                collected = accumulator.len(),
                "Reached maximum templates, skipping remaining results"
            );
            break;
        }

        let outcome = analyze_repository(source, repository).await;
        summary.record_outcome(&outcome);

        let AnalysisOutcome::Qualified(template) = outcome else {
            continue;
        };

        if pass.enforce_min_stars && template.stars < config.min_stars() {
            debug!(
                repo = %template.full_name(),
                stars = template.stars,
                "Below minimum stars"
            );
            summary.below_min_stars += 1;
            continue;
        }

        match accumulator.insert(&template)? {
            Insertion::Inserted => {
                info!(
                    repo = %template.full_name(),
                    stars = template.stars,
                    "Collected template"
                );
            }
            Insertion::Duplicate => summary.duplicates += 1,
            Insertion::Full => break,
        }
    }

    Ok(())
}
