//! Hub ranking and per-node summarization.
//!
//! # Overview
//!
//! Assembles one [`NodeSummary`] row per node from the three metric maps,
//! orders them by `(degree desc, neighbor_count desc)`, and derives the
//! top-K hub subsets and the per-node partner listing.
//!
//! `neighbor_count` is recomputed here directly from adjacency rather
//! than copied from the degree metric. In a simple graph the two are
//! numerically identical, which makes the second sort key a no-op — the
//! original pipeline carried both as a cross-check, and that observable
//! behavior is preserved. A final label-ascending tiebreak keeps equal
//! rows in a deterministic order.

use serde::Serialize;
use tracing::instrument;

use crate::graph::build::InteractionGraph;
use crate::metrics::{betweenness_centrality, clustering_coefficients, degrees};

/// One row of the ranked summary table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSummary {
    /// The node's label as it appeared in the input.
    pub label: String,
    /// Count of distinct interaction partners.
    pub degree: usize,
    /// Normalized betweenness centrality in `[0, 1]`.
    pub betweenness: f64,
    /// Local clustering coefficient in `[0, 1]`.
    pub clustering: f64,
    /// Partner count recomputed from adjacency (equals `degree` in a
    /// simple graph; kept as an independent cross-check).
    pub neighbor_count: usize,
}

/// One row of the partner-listing table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeighborListing {
    /// The node's label.
    pub label: String,
    /// Number of partners.
    pub neighbor_count: usize,
    /// Partner labels, sorted for deterministic output.
    pub partners: Vec<String>,
}

/// The full ranked report over one graph.
#[derive(Debug, Clone, Serialize)]
pub struct RankedReport {
    /// All nodes, ordered by `(degree desc, neighbor_count desc, label asc)`.
    pub summary: Vec<NodeSummary>,
    /// Partner listing, ordered by `(neighbor_count desc, label asc)`.
    pub neighbors: Vec<NeighborListing>,
}

impl RankedReport {
    /// Compute all metrics and assemble the ranked report.
    ///
    /// The empty graph yields an empty report; this never fails.
    #[must_use]
    #[instrument(skip(ig), fields(nodes = ig.node_count(), edges = ig.edge_count()))]
    pub fn from_graph(ig: &InteractionGraph) -> Self {
        let degree_map = degrees(ig);
        let betweenness_map = betweenness_centrality(ig);
        let clustering_map = clustering_coefficients(ig);

        let mut summary: Vec<NodeSummary> = Vec::with_capacity(ig.node_count());
        let mut neighbors: Vec<NeighborListing> = Vec::with_capacity(ig.node_count());

        for idx in ig.graph.node_indices() {
            let Some(label) = ig.label(idx) else {
                continue;
            };

            let partners: Vec<String> = ig
                .neighbor_labels(idx)
                .into_iter()
                .map(str::to_string)
                .collect();
            let neighbor_count = partners.len();

            summary.push(NodeSummary {
                label: label.to_string(),
                degree: degree_map.get(label).copied().unwrap_or(0),
                betweenness: betweenness_map.get(label).copied().unwrap_or(0.0),
                clustering: clustering_map.get(label).copied().unwrap_or(0.0),
                neighbor_count,
            });

            neighbors.push(NeighborListing {
                label: label.to_string(),
                neighbor_count,
                partners,
            });
        }

        // Two-key sort per the original tool (degree, then neighbor
        // count); label ascending keeps ties deterministic.
        summary.sort_by(|l, r| {
            r.degree
                .cmp(&l.degree)
                .then_with(|| r.neighbor_count.cmp(&l.neighbor_count))
                .then_with(|| l.label.cmp(&r.label))
        });

        neighbors.sort_by(|l, r| {
            r.neighbor_count
                .cmp(&l.neighbor_count)
                .then_with(|| l.label.cmp(&r.label))
        });

        Self { summary, neighbors }
    }

    /// The top `k` hubs by the summary ordering.
    ///
    /// Returns all rows when the graph has fewer than `k` nodes.
    #[must_use]
    pub fn top(&self, k: usize) -> &[NodeSummary] {
        &self.summary[..k.min(self.summary.len())]
    }

    /// Number of ranked nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.summary.len()
    }

    /// True if the report covers no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
    }
}
