#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod analysis;
pub mod config;
pub mod discovery;
pub mod output;
pub mod registry;
pub mod runner;
pub mod source;
pub mod summary;

pub use analysis::{
    analyze_repository, AnalysisOutcome, AnalyzeError, PackageManifest, TemplateAnalysis,
};
pub use config::{DiscoveryConfig, DEFAULT_MAX_TEMPLATES, DEFAULT_MIN_STARS};
pub use discovery::{
    discover_templates, search_passes, DiscoveryError, Insertion, SearchPass, TemplateAccumulator,
};
pub use output::{
    render_templates, write_registry, write_templates, OutputError, DEFAULT_OUTPUT_FILE,
};
pub use registry::{RegistryCategories, TemplateRegistry};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use source::{EncodedFile, RepositorySource, RepositorySummary, SourceError};
pub use summary::RunSummary;
