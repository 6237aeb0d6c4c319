//! Interaction graph module.
//!
//! # Overview
//!
//! This module constructs a petgraph-based undirected simple graph from
//! filtered interaction records. The graph feeds into every metric and
//! ranking computation in the analysis engine.
//!
//! ## Pipeline
//!
//! ```text
//! filtered Vec<Interaction>
//!        ↓  build::InteractionGraph::from_interactions()
//! InteractionGraph (UnGraph, deduplicated, no self-loops)
//!        ↓  stats::GraphStats::from_graph()
//! GraphStats (density, component count, isolated nodes, …)
//! ```
//!
//! ## Change Detection
//!
//! [`InteractionGraph::content_hash`] is a BLAKE3 hash of the sorted
//! unordered edge list. Compare it against a stored value to detect when
//! derived metrics need to be recomputed.

pub mod build;
pub mod stats;

pub use build::InteractionGraph;
pub use stats::GraphStats;
