//! Command handlers for the `ppi` binary.
//!
//! Every subcommand runs the same left-to-right pipeline — load, filter,
//! build, measure, rank — and differs only in which slice of the result
//! it renders. The shared plumbing lives here; each `run_*` function in
//! the submodules does its own rendering through [`crate::output`].

pub mod analyze;
pub mod export;
pub mod hubs;
pub mod neighbors;
pub mod stats;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;
use tracing::instrument;

use interactome_analysis::graph::build::InteractionGraph;
use interactome_analysis::graph::stats::GraphStats;
use interactome_analysis::rank::RankedReport;
use interactome_core::filter::{FilterOutcome, select_threshold};
use interactome_core::{AnalysisConfig, ColumnSchema, RecordPolicy};

use crate::loader::{ColumnOverrides, LoadedTable, load_table};
use crate::output::{CliError, OutputMode, render_error};

/// Malformed-row policy as a CLI flag value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MalformedPolicy {
    /// Skip bad rows and report how many were dropped.
    Skip,
    /// Abort on the first bad row.
    Fail,
}

impl From<MalformedPolicy> for RecordPolicy {
    fn from(value: MalformedPolicy) -> Self {
        match value {
            MalformedPolicy::Skip => Self::Skip,
            MalformedPolicy::Fail => Self::Fail,
        }
    }
}

/// Input arguments shared by every subcommand.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Path to the interaction table (.tsv or .csv, header row required).
    pub file: PathBuf,

    /// Header of the first endpoint column (skips sniffing).
    #[arg(long, value_name = "HEADER")]
    pub col_a: Option<String>,

    /// Header of the second endpoint column (skips sniffing).
    #[arg(long, value_name = "HEADER")]
    pub col_b: Option<String>,

    /// Header of the score column (skips sniffing).
    #[arg(long, value_name = "HEADER")]
    pub score: Option<String>,

    /// Ignore the score column even if one exists.
    #[arg(long, conflicts_with = "score")]
    pub no_score: bool,

    /// Candidate evidence thresholds, strictest first (repeatable).
    /// Defaults to 700, 400, 0.
    #[arg(long = "threshold", value_name = "SCORE")]
    pub thresholds: Vec<f64>,

    /// What to do with malformed rows.
    #[arg(long, value_enum)]
    pub on_malformed: Option<MalformedPolicy>,

    /// Optional TOML config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// The explanatory record rendered when filtering leaves nothing.
///
/// This is a defined terminal state, not an error: the process exits 0
/// and emits this single record instead of empty tables.
#[derive(Debug, Serialize)]
pub struct EmptyReport {
    pub message: String,
    pub thresholds_tried: Vec<f64>,
    pub input_rows: usize,
}

/// Everything the commands need after a successful pipeline run.
pub struct PipelineRun {
    pub schema: ColumnSchema,
    pub skipped_rows: usize,
    pub threshold: Option<f64>,
    pub input_rows: usize,
    pub graph: InteractionGraph,
    pub report: RankedReport,
    pub stats: GraphStats,
    pub config: AnalysisConfig,
}

/// Pipeline outcome: a full run, or the empty-after-filtering terminal.
pub enum PipelineOutcome {
    Run(Box<PipelineRun>),
    Empty(EmptyReport),
}

/// Run load → filter → build → measure → rank for the given input.
#[instrument(skip(args), fields(file = %args.file.display()))]
pub fn run_pipeline(args: &InputArgs) -> Result<PipelineOutcome> {
    let mut config = match &args.config {
        Some(path) => AnalysisConfig::load(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    if !args.thresholds.is_empty() {
        config.filter.thresholds.clone_from(&args.thresholds);
    }
    let policy = args
        .on_malformed
        .map_or(config.input.on_malformed, RecordPolicy::from);

    let overrides = ColumnOverrides {
        col_a: args.col_a.clone(),
        col_b: args.col_b.clone(),
        score: args.score.clone(),
        no_score: args.no_score,
    };

    let LoadedTable {
        interactions,
        schema,
        skipped_rows,
    } = load_table(&args.file, &overrides, policy)?;
    let input_rows = interactions.len();

    let (threshold, survivors) = match select_threshold(interactions, &config.filter.thresholds) {
        FilterOutcome::Empty {
            thresholds_tried,
            input_rows,
        } => {
            return Ok(PipelineOutcome::Empty(EmptyReport {
                message: "No interactions found after filtering".to_string(),
                thresholds_tried,
                input_rows,
            }));
        }
        FilterOutcome::Filtered {
            threshold,
            interactions,
        } => (Some(threshold), interactions),
        FilterOutcome::Unscored { interactions } => (None, interactions),
    };

    let graph = InteractionGraph::from_interactions(&survivors);
    let report = RankedReport::from_graph(&graph);
    let stats = GraphStats::from_graph(&graph);

    Ok(PipelineOutcome::Run(Box::new(PipelineRun {
        schema,
        skipped_rows,
        threshold,
        input_rows,
        graph,
        report,
        stats,
        config,
    })))
}

/// Render the empty-result record and return success.
pub fn render_empty(mode: OutputMode, empty: &EmptyReport) -> Result<()> {
    crate::output::render(mode, empty, |e, w| {
        writeln!(w, "{}", e.message)?;
        writeln!(
            w,
            "  thresholds tried: {:?}  input rows: {}",
            e.thresholds_tried, e.input_rows
        )
    })
}

/// Run the pipeline, rendering structured errors before failing.
pub fn pipeline_or_render(args: &InputArgs, mode: OutputMode) -> Result<PipelineOutcome> {
    match run_pipeline(args) {
        Ok(outcome) => Ok(outcome),
        Err(err) => match err.downcast_ref::<interactome_core::CoreError>() {
            Some(core) => Err(fail_with(mode, core)),
            None => Err(err),
        },
    }
}

/// Render a [`CoreError`] and convert it into a failed exit.
///
/// [`CoreError`]: interactome_core::CoreError
pub fn fail_with(mode: OutputMode, err: &interactome_core::CoreError) -> anyhow::Error {
    let cli_error = CliError::with_details(
        err.to_string(),
        err.suggestion(),
        err.error_code().code().to_string(),
    );
    if let Err(render_err) = render_error(mode, &cli_error) {
        return render_err;
    }
    anyhow::anyhow!("{err}")
}
