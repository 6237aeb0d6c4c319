//! Degree per node: the count of distinct interaction partners.
//!
//! In a simple graph this is O(1) per node from adjacency. Edge scores
//! play no role here — only connectivity matters.

use std::collections::HashMap;

use crate::graph::build::InteractionGraph;

/// Compute the degree of every node, keyed by label.
#[must_use]
pub fn degrees(ig: &InteractionGraph) -> HashMap<String, usize> {
    let mut result = HashMap::with_capacity(ig.node_count());

    for idx in ig.graph.node_indices() {
        if let Some(label) = ig.label(idx) {
            result.insert(label.to_string(), ig.graph.neighbors(idx).count());
        }
    }

    result
}
