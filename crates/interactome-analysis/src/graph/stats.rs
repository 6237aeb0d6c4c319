//! Summary statistics for the interaction graph.
//!
//! # Statistics Provided
//!
//! - **node_count** / **edge_count**: sizes of the simple graph.
//! - **density**: `2E / (N * (N - 1))` for an undirected graph —
//!   1.0 for a complete graph, 0.0 below two nodes.
//! - **component_count** / **component_sizes**: connected components
//!   (sizes sorted descending). More than one component means the
//!   network splits into disjoint subnetworks.
//! - **isolated_node_count**: nodes with no edges at all.
//! - **max_degree**: the highest degree in the graph.

use fixedbitset::FixedBitSet;
use serde::Serialize;

use super::build::InteractionGraph;

/// Summary statistics for an interaction graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    /// Number of labels (nodes) in the graph.
    pub node_count: usize,
    /// Number of unique undirected edges.
    pub edge_count: usize,
    /// Undirected density: `2E / (N(N-1))`. Zero for graphs with 0 or 1 node.
    pub density: f64,
    /// Number of connected components.
    pub component_count: usize,
    /// Sizes of each component, sorted descending.
    pub component_sizes: Vec<usize>,
    /// Number of nodes with degree zero.
    pub isolated_node_count: usize,
    /// Maximum degree over all nodes.
    pub max_degree: usize,
}

impl GraphStats {
    /// Compute statistics from an [`InteractionGraph`].
    #[must_use]
    pub fn from_graph(ig: &InteractionGraph) -> Self {
        let node_count = ig.node_count();
        let edge_count = ig.edge_count();

        let density = compute_density(node_count, edge_count);
        let (component_count, component_sizes) = component_info(ig);

        let isolated_node_count = ig
            .graph
            .node_indices()
            .filter(|&idx| ig.graph.neighbors(idx).next().is_none())
            .count();

        let max_degree = ig
            .graph
            .node_indices()
            .map(|idx| ig.graph.neighbors(idx).count())
            .max()
            .unwrap_or(0);

        Self {
            node_count,
            edge_count,
            density,
            component_count,
            component_sizes,
            isolated_node_count,
            max_degree,
        }
    }
}

/// Undirected density: `2E / (N(N-1))`, zero below two nodes.
#[allow(clippy::cast_precision_loss)]
fn compute_density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0;
    }
    let max_edges = (node_count * (node_count - 1)) as f64 / 2.0;
    edge_count as f64 / max_edges
}

/// Connected components via iterative BFS with a bitset visited mask.
fn component_info(ig: &InteractionGraph) -> (usize, Vec<usize>) {
    let n = ig.graph.node_count();
    if n == 0 {
        return (0, Vec::new());
    }

    let mut visited = FixedBitSet::with_capacity(n);
    let mut sizes = Vec::new();

    for start in ig.graph.node_indices() {
        if visited.contains(start.index()) {
            continue;
        }

        let mut stack = vec![start];
        let mut size = 0_usize;

        while let Some(node) = stack.pop() {
            if visited.contains(node.index()) {
                continue;
            }
            visited.insert(node.index());
            size += 1;

            for neighbor in ig.graph.neighbors(node) {
                if !visited.contains(neighbor.index()) {
                    stack.push(neighbor);
                }
            }
        }

        sizes.push(size);
    }

    sizes.sort_unstable_by(|a, b| b.cmp(a));
    (sizes.len(), sizes)
}
