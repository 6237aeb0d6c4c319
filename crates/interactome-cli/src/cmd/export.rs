//! `ppi export` — write the four report tables to files.
//!
//! CSV mode writes `summary.csv`, `top5_hubs.csv`, `top10_hubs.csv`, and
//! `neighbors.csv` into the output directory; JSON mode writes a single
//! `report.json` with the same content. The empty-after-filtering
//! terminal state writes `report.json` containing only the explanatory
//! record, so downstream tooling always finds a file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;

use interactome_analysis::rank::{NeighborListing, NodeSummary};

use crate::output::{OutputMode, render};

use super::{EmptyReport, InputArgs, PipelineOutcome, PipelineRun, pipeline_or_render};

/// Output file format for `ppi export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Arguments for `ppi export`.
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Directory to write the tables into (created if missing).
    #[arg(long, value_name = "DIR")]
    pub out: PathBuf,

    /// File format to write.
    #[arg(long = "to", value_enum, default_value_t = ExportFormat::Csv)]
    pub to: ExportFormat,
}

/// Result payload: which files were written.
#[derive(Debug, Serialize)]
pub struct ExportReport {
    pub written: Vec<String>,
    /// Present when the run ended in the empty-after-filtering state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_result: Option<String>,
}

/// Execute `ppi export`.
pub fn run_export(args: &ExportArgs, mode: OutputMode) -> Result<()> {
    fs::create_dir_all(&args.out)
        .with_context(|| format!("create output directory {}", args.out.display()))?;

    let payload = match pipeline_or_render(&args.input, mode)? {
        PipelineOutcome::Empty(empty) => export_empty(&args.out, &empty)?,
        PipelineOutcome::Run(run) => match args.to {
            ExportFormat::Csv => export_csv(&args.out, &run)?,
            ExportFormat::Json => export_json(&args.out, &run)?,
        },
    };

    render(mode, &payload, |report, w| {
        if let Some(message) = &report.empty_result {
            writeln!(w, "{message}")?;
        }
        for file in &report.written {
            writeln!(w, "wrote {file}")?;
        }
        Ok(())
    })
}

/// The terminal empty state still produces a file, per the degenerate
/// case contract: one explanatory record, not empty tables.
fn export_empty(out: &Path, empty: &EmptyReport) -> Result<ExportReport> {
    let path = out.join("report.json");
    let body = serde_json::to_string_pretty(empty)?;
    fs::write(&path, body).with_context(|| format!("write {}", path.display()))?;

    Ok(ExportReport {
        written: vec![path.display().to_string()],
        empty_result: Some(empty.message.clone()),
    })
}

fn export_csv(out: &Path, run: &PipelineRun) -> Result<ExportReport> {
    let mut written = Vec::new();

    written.push(write_summary_csv(
        &out.join("summary.csv"),
        &run.report.summary,
    )?);
    written.push(write_summary_csv(
        &out.join("top5_hubs.csv"),
        run.report.top(run.config.report.small_hubs),
    )?);
    written.push(write_summary_csv(
        &out.join("top10_hubs.csv"),
        run.report.top(run.config.report.large_hubs),
    )?);
    written.push(write_neighbors_csv(
        &out.join("neighbors.csv"),
        &run.report.neighbors,
    )?);

    Ok(ExportReport {
        written,
        empty_result: None,
    })
}

fn write_summary_csv(path: &Path, rows: &[NodeSummary]) -> Result<String> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;

    writer.write_record([
        "label",
        "degree",
        "betweenness",
        "clustering",
        "neighbor_count",
    ])?;
    for row in rows {
        writer.write_record([
            row.label.as_str(),
            &row.degree.to_string(),
            &format!("{:.6}", row.betweenness),
            &format!("{:.6}", row.clustering),
            &row.neighbor_count.to_string(),
        ])?;
    }
    writer.flush()?;

    Ok(path.display().to_string())
}

fn write_neighbors_csv(path: &Path, rows: &[NeighborListing]) -> Result<String> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;

    writer.write_record(["label", "neighbor_count", "partners"])?;
    for row in rows {
        writer.write_record([
            row.label.as_str(),
            &row.neighbor_count.to_string(),
            &row.partners.join(", "),
        ])?;
    }
    writer.flush()?;

    Ok(path.display().to_string())
}

fn export_json(out: &Path, run: &PipelineRun) -> Result<ExportReport> {
    // `top5`/`top10` are fixed slot names; the configured hub-table
    // sizes control only how many rows each slot holds.
    #[derive(Serialize)]
    struct JsonReport<'a> {
        threshold: Option<f64>,
        summary: &'a [NodeSummary],
        top5: &'a [NodeSummary],
        top10: &'a [NodeSummary],
        neighbors: &'a [NeighborListing],
    }

    let path = out.join("report.json");
    let body = serde_json::to_string_pretty(&JsonReport {
        threshold: run.threshold,
        summary: &run.report.summary,
        top5: run.report.top(run.config.report.small_hubs),
        top10: run.report.top(run.config.report.large_hubs),
        neighbors: &run.report.neighbors,
    })?;
    fs::write(&path, body).with_context(|| format!("write {}", path.display()))?;

    Ok(ExportReport {
        written: vec![path.display().to_string()],
        empty_result: None,
    })
}
