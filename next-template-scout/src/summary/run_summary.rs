//! Run summary types.

use crate::analysis::AnalysisOutcome;

/// Summary of a complete discovery run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of search requests issued.
    pub searches_run: usize,

    /// Number of search results handed to the analyzer.
    pub repositories_analyzed: usize,

    /// Number of repositories that qualified as templates.
    pub qualified: usize,

    /// Number of repositories without the expected root files.
    pub disqualified: usize,

    /// Number of repositories that could not be analyzed.
    pub failed: usize,

    /// Number of qualifying templates dropped for having too few stars.
    pub below_min_stars: usize,

    /// Number of qualifying templates already collected earlier in the run.
    pub duplicates: usize,

    /// Number of templates in the final snapshot.
    pub templates_collected: usize,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the summary with an analysis outcome.
    pub fn record_outcome(&mut self, outcome: &AnalysisOutcome) {
        self.repositories_analyzed += 1;
        match outcome {
            AnalysisOutcome::Qualified(_) => self.qualified += 1,
            AnalysisOutcome::Disqualified => self.disqualified += 1,
            AnalysisOutcome::Failed(_) => self.failed += 1,
        }
    }

    /// Returns true if any repository could not be analyzed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
