//! CLI for the Next.js Template Scout.
//!
//! This tool searches GitHub for Next.js template and starter repositories,
//! analyzes what each one is built with and writes a JSON snapshot.

use clap::Parser;
use next_template_scout::{
    DiscoveryConfig, RunSummary, Runner, RunnerConfig, RunnerError, DEFAULT_MAX_TEMPLATES,
    DEFAULT_MIN_STARS, DEFAULT_OUTPUT_FILE,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Next.js Template Scout - Discover popular Next.js templates on GitHub.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Maximum number of distinct templates to collect.
    #[arg(long, env = "MAX_TEMPLATES", default_value_t = DEFAULT_MAX_TEMPLATES)]
    max_templates: usize,

    /// Minimum stars for results of the template searches.
    #[arg(long, env = "MIN_STARS", default_value_t = DEFAULT_MIN_STARS)]
    min_stars: u32,

    /// Path of the template snapshot.
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Also write a categorized template registry to this path.
    #[arg(long)]
    registry_output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Uses compact single-line output and reads the filter from `RUST_LOG`,
/// falling back to "info".
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Builds the run configuration from parsed arguments.
fn runner_config(args: Args) -> RunnerConfig {
    let discovery = DiscoveryConfig::new(args.max_templates, args.min_stars);
    let mut config = RunnerConfig::new(args.token, discovery).with_output_path(args.output);
    if let Some(path) = args.registry_output {
        config = config.with_registry_path(path);
    }
    config
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let runner = Runner::new(runner_config(args))?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Searches run: {}", summary.searches_run);
    println!("  Repositories analyzed: {}", summary.repositories_analyzed);
    println!("  Qualified: {}", summary.qualified);
    println!("  Not a template: {}", summary.disqualified);
    println!("  Failed: {}", summary.failed);
    println!("  Below minimum stars: {}", summary.below_min_stars);
    println!("  Duplicates: {}", summary.duplicates);
    println!("  Templates collected: {}", summary.templates_collected);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const VARS: [&str; 3] = ["GITHUB_TOKEN", "MAX_TEMPLATES", "MIN_STARS"];

    #[test]
    fn uses_defaults_without_environment() {
        temp_env::with_vars_unset(VARS, || {
            let args = Args::try_parse_from(["next-template-scout"]).unwrap();
            let config = runner_config(args);

            assert!(config.token().is_none());
            assert_eq!(config.discovery().max_templates(), 20);
            assert_eq!(config.discovery().min_stars(), 100);
            assert_eq!(config.output_path(), Path::new("template-analysis.json"));
            assert!(config.registry_path().is_none());
        });
    }

    #[test]
    fn reads_limits_from_environment() {
        temp_env::with_vars(
            [
                ("GITHUB_TOKEN", Some("ghp_example")),
                ("MAX_TEMPLATES", Some("5")),
                ("MIN_STARS", Some("250")),
            ],
            || {
                let args = Args::try_parse_from(["next-template-scout"]).unwrap();
                let config = runner_config(args);

                assert_eq!(config.token(), Some("ghp_example"));
                assert_eq!(config.discovery().max_templates(), 5);
                assert_eq!(config.discovery().min_stars(), 250);
            },
        );
    }

    #[test]
    fn flags_override_environment() {
        temp_env::with_vars(
            [("MAX_TEMPLATES", Some("5")), ("MIN_STARS", Some("250"))],
            || {
                let args = Args::try_parse_from([
                    "next-template-scout",
                    "--max-templates",
                    "7",
                    "--registry-output",
                    "registry.json",
                ])
                .unwrap();
                let config = runner_config(args);

                assert_eq!(config.discovery().max_templates(), 7);
                assert_eq!(config.discovery().min_stars(), 250);
                assert_eq!(config.registry_path(), Some(Path::new("registry.json")));
            },
        );
    }

    #[test]
    fn rejects_non_numeric_limits() {
        temp_env::with_var("MAX_TEMPLATES", Some("lots"), || {
            assert!(Args::try_parse_from(["next-template-scout"]).is_err());
        });
    }
}
