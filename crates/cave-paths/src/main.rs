//! CLI entry point for cave path counting.
//!
//! Usage:
//!   cave-paths count <edges.txt> [options]
//!   cave-paths count --stdin [options]
//!   cave-paths paths <edges.txt> [--exempt <label> | --any-repeat] [options]
//!
//! Options:
//!   --max-steps <n>   Maximum frontier inspections per run (default: 50000000)
//!   --max-paths <n>   Maximum paths collected per run (default: unlimited)
//!   --unbounded       Ignore --max-steps
//!
//! Set RUST_LOG (e.g. `RUST_LOG=cave_paths=debug`) for per-run diagnostics.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cave_paths::{
    count_one_extra_visit, count_single_visit, distinct_one_extra_visit_paths, parse_edges,
    paths_with_policy, CaveGraph, EnumerationConfig, RevisitPolicy,
};

#[derive(Parser)]
#[command(name = "cave-paths")]
#[command(about = "Count policy-bounded paths through a cave graph")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count paths under both revisit rules and report timings
    Count {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        budget: BudgetArgs,
    },
    /// List every path under a single revisit rule
    Paths {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        budget: BudgetArgs,

        /// Restricted cave allowed a second visit
        #[arg(long, conflicts_with = "any_repeat")]
        exempt: Option<String>,

        /// Any one restricted cave may be visited twice
        #[arg(long)]
        any_repeat: bool,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Path to edge list file (use --stdin to read from stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Read edge list from stdin instead of file
    #[arg(long)]
    stdin: bool,
}

#[derive(Args)]
struct BudgetArgs {
    /// Maximum frontier inspections per enumeration run
    #[arg(long, default_value = "50000000")]
    max_steps: usize,

    /// Maximum paths collected per enumeration run
    #[arg(long)]
    max_paths: Option<usize>,

    /// Disable the step limit
    #[arg(long)]
    unbounded: bool,
}

impl BudgetArgs {
    fn config(&self) -> EnumerationConfig {
        EnumerationConfig {
            max_steps: (!self.unbounded).then_some(self.max_steps),
            max_paths: self.max_paths,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("must provide either a file path or --stdin")]
    NoInput,

    #[error("failed to read {source_name}: {source}")]
    Read {
        source_name: String,
        source: io::Error,
    },

    #[error(transparent)]
    Engine(#[from] cave_paths::Error),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output of the `count` command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CountOutput {
    nodes: usize,
    edges: usize,
    single_visit_paths: usize,
    one_extra_visit_paths: usize,
    timings: TimingOutput,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TimingOutput {
    parse_us: u128,
    single_visit_us: u128,
    one_extra_visit_us: u128,
}

/// Output of the `paths` command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PathsOutput {
    policy: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    exempt: Option<String>,
    count: usize,
    paths: Vec<String>,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Count { input, budget } => {
            let config = budget.config();

            let before = Instant::now();
            let graph = load_graph(&input)?;
            let parse_us = before.elapsed().as_micros();

            let before = Instant::now();
            let single_visit_paths = count_single_visit(&graph, &config)?;
            let single_visit_us = before.elapsed().as_micros();

            let before = Instant::now();
            let one_extra_visit_paths = count_one_extra_visit(&graph, &config)?;
            let one_extra_visit_us = before.elapsed().as_micros();

            info!(single_visit_paths, one_extra_visit_paths, "counted paths");

            let output = CountOutput {
                nodes: graph.len(),
                edges: graph.edge_count(),
                single_visit_paths,
                one_extra_visit_paths,
                timings: TimingOutput {
                    parse_us,
                    single_visit_us,
                    one_extra_visit_us,
                },
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Paths {
            input,
            budget,
            exempt,
            any_repeat,
        } => {
            let config = budget.config();
            let graph = load_graph(&input)?;

            let (policy, paths) = if any_repeat {
                ("any_repeat", distinct_one_extra_visit_paths(&graph, &config)?)
            } else if let Some(label) = &exempt {
                let policy = RevisitPolicy::OneExtraVisit {
                    exempt: graph.id_of(label)?,
                };
                ("one_extra_visit", paths_with_policy(&graph, policy, &config)?)
            } else {
                (
                    "single_visit",
                    paths_with_policy(&graph, RevisitPolicy::SingleVisit, &config)?,
                )
            };

            let output = PathsOutput {
                policy,
                exempt,
                count: paths.len(),
                paths: paths.iter().map(|path| graph.render(path)).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn load_graph(input: &InputArgs) -> Result<CaveGraph, CliError> {
    let text = if input.stdin {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| CliError::Read {
                source_name: "stdin".to_string(),
                source,
            })?;
        buffer
    } else if let Some(path) = &input.file {
        fs::read_to_string(path).map_err(|source| CliError::Read {
            source_name: path.display().to_string(),
            source,
        })?
    } else {
        return Err(CliError::NoInput);
    };

    Ok(parse_edges(&text)?)
}
