//! Graph construction from filtered interaction records.
//!
//! # Overview
//!
//! This module turns a sequence of [`Interaction`] records into an
//! undirected **simple** graph: each unordered label pair is stored at
//! most once, and self-loops are dropped. Node identity is the original
//! label string, case-sensitive, in order of first appearance (stable
//! across runs on the same input).
//!
//! ## Deduplication rule
//!
//! If the source table repeats a pair — in either orientation — the
//! **first occurrence's weight is kept** and later duplicates are
//! discarded. Degree is therefore never double-counted.
//!
//! ## Change Detection
//!
//! The graph carries a BLAKE3 content hash of the sorted unordered edge
//! list. Callers can compare the hash against a stored value to avoid
//! recomputing metrics when the edge set is unchanged.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use tracing::{debug, instrument};

use interactome_core::Interaction;

/// An undirected simple interaction graph.
///
/// Nodes are interaction labels (strings). Each edge optionally carries
/// the evidence score of the first record that produced it. The graph is
/// immutable after construction; metrics only read it.
#[derive(Debug)]
pub struct InteractionGraph {
    /// Undirected graph: nodes = labels, edge weights = optional scores.
    pub graph: UnGraph<String, Option<f64>>,
    /// Mapping from label to petgraph `NodeIndex`.
    pub node_map: HashMap<String, NodeIndex>,
    /// BLAKE3 content hash of the sorted unordered edge list.
    pub content_hash: String,
    /// Self-loop records dropped during construction.
    pub self_loops_dropped: usize,
    /// Duplicate pair records coalesced during construction.
    pub duplicates_coalesced: usize,
}

impl InteractionGraph {
    /// Build an [`InteractionGraph`] from filtered interaction records.
    ///
    /// Both endpoints of every record become nodes (in order of first
    /// appearance). Duplicate unordered pairs coalesce to one edge with
    /// the first occurrence's weight; self-loops are dropped silently
    /// (but counted). An empty record set produces the zero-node,
    /// zero-edge graph — never an error.
    #[must_use]
    #[instrument(skip(interactions), fields(rows = interactions.len()))]
    pub fn from_interactions(interactions: &[Interaction]) -> Self {
        let mut graph = UnGraph::<String, Option<f64>>::new_undirected();
        let mut node_map: HashMap<String, NodeIndex> = HashMap::new();
        let mut self_loops_dropped = 0_usize;
        let mut duplicates_coalesced = 0_usize;

        // Canonical pairs for hashing, collected before insertion so the
        // hash reflects the deduplicated edge set.
        let mut pairs: Vec<(String, String)> = Vec::new();

        for record in interactions {
            if record.is_self_loop() {
                self_loops_dropped += 1;
                continue;
            }

            let a_idx = *node_map
                .entry(record.a.clone())
                .or_insert_with(|| graph.add_node(record.a.clone()));
            let b_idx = *node_map
                .entry(record.b.clone())
                .or_insert_with(|| graph.add_node(record.b.clone()));

            // UnGraph::contains_edge is orientation-blind, which is exactly
            // the unordered-pair identity we need. First occurrence wins.
            if graph.contains_edge(a_idx, b_idx) {
                duplicates_coalesced += 1;
                continue;
            }

            graph.add_edge(a_idx, b_idx, record.score);
            let (x, y) = record.canonical_pair();
            pairs.push((x.to_string(), y.to_string()));
        }

        pairs.sort();
        let content_hash = compute_edge_hash(&pairs);

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            self_loops_dropped,
            duplicates_coalesced,
            "graph constructed"
        );

        Self {
            graph,
            node_map,
            content_hash,
            self_loops_dropped,
            duplicates_coalesced,
        }
    }

    /// Return the number of nodes (labels) in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of unique undirected edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// True if the graph has no nodes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Look up the `NodeIndex` for a label.
    #[must_use]
    pub fn node_index(&self, label: &str) -> Option<NodeIndex> {
        self.node_map.get(label).copied()
    }

    /// Return the label for a node.
    #[must_use]
    pub fn label(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    /// All labels in insertion (first-appearance) order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .filter_map(|idx| self.label(idx))
            .collect()
    }

    /// The neighbor labels of a node, sorted for deterministic output.
    #[must_use]
    pub fn neighbor_labels(&self, idx: NodeIndex) -> Vec<&str> {
        let mut neighbors: Vec<&str> = self
            .graph
            .neighbors(idx)
            .filter_map(|n| self.label(n))
            .collect();
        neighbors.sort_unstable();
        neighbors
    }

    /// All unordered edges as canonical `(smaller, larger, weight)` triples,
    /// sorted. Used by tests to round-trip the edge set.
    #[must_use]
    pub fn edge_list(&self) -> Vec<(String, String, Option<f64>)> {
        let mut edges: Vec<(String, String, Option<f64>)> = self
            .graph
            .edge_indices()
            .filter_map(|e| {
                let (a, b) = self.graph.edge_endpoints(e)?;
                let la = self.label(a)?;
                let lb = self.label(b)?;
                let w = *self.graph.edge_weight(e)?;
                let (x, y) = if la <= lb { (la, lb) } else { (lb, la) };
                Some((x.to_string(), y.to_string(), w))
            })
            .collect();
        edges.sort_by(|l, r| (&l.0, &l.1).cmp(&(&r.0, &r.1)));
        edges
    }
}

/// Compute a BLAKE3 hash of the sorted canonical edge list.
fn compute_edge_hash(pairs: &[(String, String)]) -> String {
    let mut hasher = blake3::Hasher::new();
    for (a, b) in pairs {
        hasher.update(a.as_bytes());
        hasher.update(b"\x00");
        hasher.update(b.as_bytes());
        hasher.update(b"\x00");
    }
    format!("blake3:{}", hasher.finalize())
}
