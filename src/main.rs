mod categories;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;

use crate::categories::CategoryMap;
use crate::input::InputError;
use crate::input::load_screener_csv;
use crate::input::overrides::load_category_overrides;
use crate::model::{MissingMetricPolicy, ScoreWeights};
use crate::pipeline::ScoringError;
use crate::pipeline::stage1_clean::{CleanParams, run_stage1};
use crate::pipeline::stage2_validate::run_stage2;
use crate::pipeline::stage3_partition::partition_by_category;
use crate::pipeline::stage4_score::{Stage4Output, run_stage4};
use crate::pipeline::stage5_report::{Stage5Input, write_reports};
use crate::report::ReportError;

fn main() {
    logging::init();
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Rank(args) => run(&RunConfig::from(args)),
    };
    if let Err(err) = result {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

/// Ranks mutual funds against peers in their own category.
#[derive(Debug, Parser)]
#[command(name = "fundrank", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a screener CSV export and write ranking reports.
    Rank(RankArgs),
}

#[derive(Debug, Args)]
struct RankArgs {
    /// Screener export (CSV, optionally .gz).
    #[arg(long)]
    input: PathBuf,

    /// Output directory for ranking.tsv, ranking.json, summary.json and report.txt.
    #[arg(long)]
    out: PathBuf,

    /// Minimum fund size in INR millions.
    #[arg(long, default_value_t = 1000.0)]
    min_nav: f64,

    /// What to do when a scored metric is missing after cleaning.
    #[arg(long, value_enum, default_value_t = MissingMetricArg::Reject)]
    missing_metric: MissingMetricArg,

    /// JSON object of raw category label -> canonical label overrides.
    #[arg(long)]
    categories: Option<PathBuf>,

    /// Funds listed per category in report.txt.
    #[arg(long, default_value_t = 5)]
    top: usize,

    /// Worker threads for per-category scoring.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MissingMetricArg {
    Reject,
    Lowest,
}

impl From<MissingMetricArg> for MissingMetricPolicy {
    fn from(value: MissingMetricArg) -> Self {
        match value {
            MissingMetricArg::Reject => MissingMetricPolicy::Reject,
            MissingMetricArg::Lowest => MissingMetricPolicy::Lowest,
        }
    }
}

#[derive(Debug, Clone)]
struct RunConfig {
    input_path: PathBuf,
    out_dir: PathBuf,
    clean: CleanParams,
    policy: MissingMetricPolicy,
    category_overrides: Option<PathBuf>,
    top_n: usize,
    threads: Option<usize>,
}

impl From<RankArgs> for RunConfig {
    fn from(args: RankArgs) -> Self {
        Self {
            input_path: args.input,
            out_dir: args.out,
            clean: CleanParams {
                min_nav_millions: args.min_nav,
            },
            policy: args.missing_metric.into(),
            category_overrides: args.categories,
            top_n: args.top,
            threads: args.threads,
        }
    }
}

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("failed to build scoring thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

fn run(config: &RunConfig) -> Result<(), RunError> {
    let export = load_screener_csv(&config.input_path)?;

    let mut labels = CategoryMap::builtin();
    if let Some(path) = &config.category_overrides {
        labels = labels.with_overrides(&load_category_overrides(path)?);
    }
    tracing::debug!(entries = labels.len(), "category label table ready");

    let stage1 = run_stage1(&export.rows, &config.clean, &labels);
    let stage2 = run_stage2(stage1.records, config.policy)?;
    let substituted = stage2.substituted;
    let groups = partition_by_category(stage2.funds);

    let weights = ScoreWeights::default_v1();
    tracing::debug!(
        max_return_score = weights.max_return_score(),
        max_risk_score = weights.max_risk_score(),
        "scoring weight profile"
    );
    let stage4 = score_with_threads(config.threads, || run_stage4(&groups, &weights))?;

    let input = Stage5Input {
        scored: &stage4.scored,
        n_categories: stage4.n_categories,
        audit: &stage1.audit,
        substituted_metrics: substituted,
        input_path: &config.input_path,
        clean_params: &config.clean,
        policy: config.policy,
        category_overrides: config.category_overrides.as_deref(),
        top_n: config.top_n,
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&input, &config.out_dir)?;

    Ok(())
}

fn score_with_threads<F>(threads: Option<usize>, score: F) -> Result<Stage4Output, RunError>
where
    F: FnOnce() -> Result<Stage4Output, ScoringError> + Send,
{
    match threads {
        Some(n) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
            Ok(pool.install(score)?)
        }
        None => Ok(score()?),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
