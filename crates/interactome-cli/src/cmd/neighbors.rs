//! `ppi neighbors` — per-node interaction partner listing.
//!
//! With a label argument, shows the partners of that one node (unknown
//! labels are an error with a structured code). Without it, lists every
//! node ordered by partner count.


use clap::Args;
use serde::Serialize;

use interactome_analysis::rank::NeighborListing;
use interactome_core::CoreError;

use crate::output::{OutputMode, render};

use super::{InputArgs, PipelineOutcome, fail_with, pipeline_or_render, render_empty};

/// Arguments for `ppi neighbors`.
#[derive(Args, Debug)]
pub struct NeighborsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Show partners for this label only.
    #[arg(value_name = "LABEL")]
    pub label: Option<String>,
}

/// Report payload for `ppi neighbors`.
#[derive(Debug, Serialize)]
pub struct NeighborsReport {
    pub threshold: Option<f64>,
    pub rows: Vec<NeighborListing>,
}

/// Execute `ppi neighbors`.
pub fn run_neighbors(args: &NeighborsArgs, mode: OutputMode) -> anyhow::Result<()> {
    let run = match pipeline_or_render(&args.input, mode)? {
        PipelineOutcome::Empty(empty) => return render_empty(mode, &empty),
        PipelineOutcome::Run(run) => run,
    };

    let rows: Vec<NeighborListing> = match &args.label {
        Some(label) => {
            let Some(row) = run.report.neighbors.iter().find(|r| &r.label == label) else {
                return Err(fail_with(mode, &CoreError::UnknownLabel(label.clone())));
            };
            vec![row.clone()]
        }
        None => run.report.neighbors.clone(),
    };

    let payload = NeighborsReport {
        threshold: run.threshold,
        rows,
    };

    render(mode, &payload, |report, w| {
        for row in &report.rows {
            writeln!(
                w,
                "{:<16} {:>8}  {}",
                row.label,
                row.neighbor_count,
                row.partners.join(", ")
            )?;
        }
        Ok(())
    })
}
