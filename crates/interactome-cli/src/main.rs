#![forbid(unsafe_code)]

mod cmd;
mod loader;
mod output;

use std::env;

use clap::{Parser, Subcommand};
use output::OutputMode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "ppi: interaction-network analyzer",
    long_about = "Analyze a pairwise interaction table: adaptive evidence filtering,\n\
                  graph construction, centrality and clustering metrics, hub ranking."
)]
struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Emit JSON output (alias for --format json).
    #[arg(long, global = true, hide = true)]
    json: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags, env, and TTY state.
    fn output_mode(&self) -> OutputMode {
        output::resolve_output_mode(self.format, self.json)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Run the full analysis and print all four tables",
        after_help = "EXAMPLES:\n    # Analyze a STRING export\n    ppi analyze interactions.tsv\n\n    # Name the columns explicitly\n    ppi analyze net.csv --col-a gene_a --col-b gene_b --score weight\n\n    # Emit machine-readable output\n    ppi analyze interactions.tsv --json"
    )]
    Analyze(cmd::analyze::AnalyzeArgs),

    #[command(
        about = "Show the top-K hubs by degree",
        after_help = "EXAMPLES:\n    # Default top 10\n    ppi hubs interactions.tsv\n\n    # Top 25\n    ppi hubs interactions.tsv --top 25"
    )]
    Hubs(cmd::hubs::HubsArgs),

    #[command(
        about = "List interaction partners per node",
        after_help = "EXAMPLES:\n    # All nodes\n    ppi neighbors interactions.tsv\n\n    # One node\n    ppi neighbors interactions.tsv TP53"
    )]
    Neighbors(cmd::neighbors::NeighborsArgs),

    #[command(
        about = "Show graph-level statistics",
        after_help = "EXAMPLES:\n    # Node/edge counts, density, components\n    ppi stats interactions.tsv --json"
    )]
    Stats(cmd::stats::StatsArgs),

    #[command(
        about = "Write the report tables to files",
        after_help = "EXAMPLES:\n    # CSV tables into ./output\n    ppi export interactions.tsv --out output\n\n    # One JSON document\n    ppi export interactions.tsv --out output --to json"
    )]
    Export(cmd::export::ExportArgs),
}

fn init_tracing(quiet: bool) {
    let filter = EnvFilter::try_from_env("PPI_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if quiet {
            "error"
        } else if env::var("DEBUG").is_ok() {
            "interactome=debug,info"
        } else {
            "interactome=info,warn"
        })
    });

    let format = env::var("PPI_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    let mode = cli.output_mode();

    match &cli.command {
        Commands::Analyze(args) => cmd::analyze::run_analyze(args, mode),
        Commands::Hubs(args) => cmd::hubs::run_hubs(args, mode),
        Commands::Neighbors(args) => cmd::neighbors::run_neighbors(args, mode),
        Commands::Stats(args) => cmd::stats::run_stats(args, mode),
        Commands::Export(args) => cmd::export::run_export(args, mode),
    }
}
