//! `ppi stats` — graph-level statistics summary.

use std::io::Write;

use clap::Args;
use serde::Serialize;

use interactome_analysis::graph::stats::GraphStats;
use interactome_core::ColumnSchema;

use crate::output::{OutputMode, pretty_section, render};

use super::{InputArgs, PipelineOutcome, pipeline_or_render, render_empty};

/// Arguments for `ppi stats`.
#[derive(Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Report payload for `ppi stats`.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub threshold: Option<f64>,
    pub input_rows: usize,
    pub skipped_rows: usize,
    pub schema: ColumnSchema,
    pub self_loops_dropped: usize,
    pub duplicates_coalesced: usize,
    pub content_hash: String,
    pub stats: GraphStats,
}

/// Execute `ppi stats`.
pub fn run_stats(args: &StatsArgs, mode: OutputMode) -> anyhow::Result<()> {
    let run = match pipeline_or_render(&args.input, mode)? {
        PipelineOutcome::Empty(empty) => return render_empty(mode, &empty),
        PipelineOutcome::Run(run) => run,
    };

    let payload = StatsReport {
        threshold: run.threshold,
        input_rows: run.input_rows,
        skipped_rows: run.skipped_rows,
        schema: run.schema,
        self_loops_dropped: run.graph.self_loops_dropped,
        duplicates_coalesced: run.graph.duplicates_coalesced,
        content_hash: run.graph.content_hash.clone(),
        stats: run.stats,
    };

    render(mode, &payload, render_stats_human)
}

fn render_stats_human(report: &StatsReport, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Network statistics")?;

    writeln!(w, "input rows:       {}", report.input_rows)?;
    writeln!(w, "skipped rows:     {}", report.skipped_rows)?;
    match report.threshold {
        Some(t) => writeln!(w, "threshold:        {t}")?,
        None => writeln!(w, "threshold:        (no score column)")?,
    }
    writeln!(
        w,
        "columns:          {} / {} / {}",
        report.schema.endpoint_a,
        report.schema.endpoint_b,
        report.schema.score.as_deref().unwrap_or("-")
    )?;
    writeln!(w, "self-loops:       {} dropped", report.self_loops_dropped)?;
    writeln!(w, "duplicates:       {} coalesced", report.duplicates_coalesced)?;
    writeln!(w)?;
    writeln!(w, "nodes:            {}", report.stats.node_count)?;
    writeln!(w, "edges:            {}", report.stats.edge_count)?;
    writeln!(w, "density:          {:.6}", report.stats.density)?;
    writeln!(w, "components:       {}", report.stats.component_count)?;
    writeln!(w, "component sizes:  {:?}", report.stats.component_sizes)?;
    writeln!(w, "isolated nodes:   {}", report.stats.isolated_node_count)?;
    writeln!(w, "max degree:       {}", report.stats.max_degree)?;
    writeln!(w, "edge-set hash:    {}", report.content_hash)?;

    Ok(())
}
