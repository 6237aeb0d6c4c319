//! `ppi analyze` — run the full pipeline and print all four tables.

use std::io::Write;

use clap::Args;
use serde::Serialize;

use interactome_analysis::graph::stats::GraphStats;
use interactome_analysis::rank::{NeighborListing, NodeSummary};
use interactome_core::ColumnSchema;

use crate::output::{OutputMode, pretty_section, render};

use super::{InputArgs, PipelineOutcome, pipeline_or_render, render_empty};

/// Arguments for `ppi analyze`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Report payload for `ppi analyze`.
#[derive(Debug, Serialize)]
pub struct AnalyzeReport {
    /// The evidence threshold that was applied, if any.
    pub threshold: Option<f64>,
    /// Data rows in the input table (after malformed-row handling).
    pub input_rows: usize,
    /// Malformed rows dropped under the skip policy.
    pub skipped_rows: usize,
    /// The resolved column mapping.
    pub schema: ColumnSchema,
    /// Graph-level statistics.
    pub stats: GraphStats,
    /// Full ranked summary, highest degree first.
    pub summary: Vec<NodeSummary>,
    /// The small hub table, sized by `report.small_hubs` (default 5).
    /// The key is a fixed slot name; the configured size controls only
    /// the row count.
    pub top5: Vec<NodeSummary>,
    /// The large hub table, sized by `report.large_hubs` (default 10).
    /// Fixed key, same as `top5`.
    pub top10: Vec<NodeSummary>,
    /// Per-node partner listing.
    pub neighbors: Vec<NeighborListing>,
    /// Configured hub-table sizes, used only for human headings.
    #[serde(skip)]
    small_hubs: usize,
    #[serde(skip)]
    large_hubs: usize,
}

/// Execute `ppi analyze`.
pub fn run_analyze(args: &AnalyzeArgs, mode: OutputMode) -> anyhow::Result<()> {
    let run = match pipeline_or_render(&args.input, mode)? {
        PipelineOutcome::Empty(empty) => return render_empty(mode, &empty),
        PipelineOutcome::Run(run) => run,
    };

    let payload = AnalyzeReport {
        threshold: run.threshold,
        input_rows: run.input_rows,
        skipped_rows: run.skipped_rows,
        schema: run.schema,
        stats: run.stats,
        summary: run.report.summary.clone(),
        top5: run.report.top(run.config.report.small_hubs).to_vec(),
        top10: run.report.top(run.config.report.large_hubs).to_vec(),
        neighbors: run.report.neighbors.clone(),
        small_hubs: run.config.report.small_hubs,
        large_hubs: run.config.report.large_hubs,
    };

    render(mode, &payload, render_analyze_human)
}

fn write_summary_rows(w: &mut dyn Write, rows: &[NodeSummary]) -> std::io::Result<()> {
    writeln!(
        w,
        "{:<16} {:>7} {:>12} {:>11} {:>10}",
        "label", "degree", "betweenness", "clustering", "partners"
    )?;
    for row in rows {
        writeln!(
            w,
            "{:<16} {:>7} {:>12.6} {:>11.6} {:>10}",
            row.label, row.degree, row.betweenness, row.clustering, row.neighbor_count
        )?;
    }
    Ok(())
}

fn render_analyze_human(report: &AnalyzeReport, w: &mut dyn Write) -> std::io::Result<()> {
    match report.threshold {
        Some(t) => writeln!(
            w,
            "Network from {} rows (threshold {t}), {} skipped: {} nodes, {} edges",
            report.input_rows, report.skipped_rows, report.stats.node_count, report.stats.edge_count
        )?,
        None => writeln!(
            w,
            "Network from {} rows (no score column), {} skipped: {} nodes, {} edges",
            report.input_rows, report.skipped_rows, report.stats.node_count, report.stats.edge_count
        )?,
    }
    writeln!(w)?;

    pretty_section(w, "Network summary")?;
    write_summary_rows(w, &report.summary)?;

    writeln!(w)?;
    pretty_section(w, &format!("Top {} hubs", report.small_hubs))?;
    write_summary_rows(w, &report.top5)?;

    writeln!(w)?;
    pretty_section(w, &format!("Top {} hubs", report.large_hubs))?;
    write_summary_rows(w, &report.top10)?;

    writeln!(w)?;
    pretty_section(w, "Interaction partners")?;
    for row in &report.neighbors {
        writeln!(
            w,
            "{:<16} {:>8}  {}",
            row.label,
            row.neighbor_count,
            row.partners.join(", ")
        )?;
    }

    Ok(())
}
