#![forbid(unsafe_code)]
//! interactome-analysis library.
//!
//! Graph construction from filtered interaction records, exact structural
//! metrics (degree, betweenness centrality, local clustering coefficient),
//! graph statistics, and hub ranking.
//!
//! The pipeline is strictly left-to-right and batch-oriented:
//!
//! ```text
//! filtered interactions → InteractionGraph → metrics → ranked report
//! ```
//!
//! The graph is immutable once built; every metric reads it and writes
//! only its own output. Metrics are exact — no sampling, no
//! approximation.
//!
//! # Conventions
//!
//! - **Errors**: metric computation never fails on a well-formed graph
//!   (the empty graph included), so nothing here returns `Result`.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod graph;
pub mod metrics;
pub mod rank;

pub use graph::build::InteractionGraph;
pub use graph::stats::GraphStats;
pub use rank::{NodeSummary, RankedReport};
