//! `ppi hubs` — top-K hubs by degree.


use clap::Args;
use serde::Serialize;

use interactome_analysis::rank::NodeSummary;

use crate::output::{OutputMode, render};

use super::{InputArgs, PipelineOutcome, pipeline_or_render, render_empty};

/// Arguments for `ppi hubs`.
#[derive(Args, Debug)]
pub struct HubsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// How many hubs to show.
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

/// Report payload for `ppi hubs`.
#[derive(Debug, Serialize)]
pub struct HubsReport {
    pub threshold: Option<f64>,
    pub requested: usize,
    pub hubs: Vec<NodeSummary>,
}

/// Execute `ppi hubs`.
pub fn run_hubs(args: &HubsArgs, mode: OutputMode) -> anyhow::Result<()> {
    let run = match pipeline_or_render(&args.input, mode)? {
        PipelineOutcome::Empty(empty) => return render_empty(mode, &empty),
        PipelineOutcome::Run(run) => run,
    };

    let payload = HubsReport {
        threshold: run.threshold,
        requested: args.top,
        hubs: run.report.top(args.top).to_vec(),
    };

    render(mode, &payload, |report, w| {
        writeln!(w, "Top {} hubs by degree:", report.hubs.len())?;
        for (rank, hub) in report.hubs.iter().enumerate() {
            writeln!(
                w,
                "{:>3}. {:<16} degree {:>4}  betweenness {:.6}  clustering {:.6}",
                rank + 1,
                hub.label,
                hub.degree,
                hub.betweenness,
                hub.clustering
            )?;
        }
        Ok(())
    })
}
