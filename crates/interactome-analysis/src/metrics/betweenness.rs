//! Betweenness centrality via Brandes' algorithm.
//!
//! # Overview
//!
//! Betweenness centrality measures how often a node lies on shortest
//! paths between other pairs of nodes. High-betweenness nodes are
//! "bridges" or "bottlenecks" — removing them would disconnect parts of
//! the network.
//!
//! # Algorithm
//!
//! Brandes' algorithm (2001) for unweighted undirected graphs:
//!
//! 1. For each source node `s`, run BFS to compute shortest-path counts
//!    and distances. Edge scores are ignored — only connectivity
//!    matters, so every edge has unit length.
//! 2. Accumulate pair dependencies in reverse BFS order (farthest nodes
//!    first). Multiple shortest paths contribute fractionally via the
//!    `sigma` path counts.
//! 3. Sum dependency scores across all sources. In an undirected graph
//!    each `(s, t)` pair is visited from both ends, so the raw sums are
//!    halved.
//!
//! Complexity: O(V * E).
//!
//! # Output
//!
//! A `HashMap<String, f64>` mapping labels to **normalized** scores in
//! `[0, 1]`: raw values are divided by `(n-1)(n-2)/2`, the number of
//! node pairs that could route through a given node. Graphs with fewer
//! than three nodes get all-zero scores. Pairs in different components
//! contribute nothing — disconnection is not an error.

use std::collections::{HashMap, VecDeque};

use petgraph::graph::NodeIndex;
use tracing::instrument;

use crate::graph::build::InteractionGraph;

/// Compute normalized betweenness centrality for all nodes in the graph.
///
/// Returns scores in `[0, 1]` keyed by label. Isolated nodes and graphs
/// with fewer than three nodes score 0.0 everywhere. Never fails; the
/// empty graph yields an empty map.
#[must_use]
#[instrument(skip(ig), fields(nodes = ig.node_count(), edges = ig.edge_count()))]
pub fn betweenness_centrality(ig: &InteractionGraph) -> HashMap<String, f64> {
    let g = &ig.graph;
    let n = g.node_count();

    if n == 0 {
        return HashMap::new();
    }

    // Node-indexed betweenness accumulator.
    let mut cb: Vec<f64> = vec![0.0; n];

    // For each source node s, run Brandes' BFS-based accumulation.
    for s in g.node_indices() {
        let si = s.index();

        // Stack: nodes in order of discovery (farthest popped first).
        let mut stack: Vec<NodeIndex> = Vec::with_capacity(n);

        // predecessors[w] = nodes immediately preceding w on shortest
        // paths from s.
        let mut predecessors: Vec<Vec<NodeIndex>> = vec![Vec::new(); n];

        // sigma[t]: number of shortest paths from s to t.
        let mut sigma: Vec<f64> = vec![0.0; n];
        sigma[si] = 1.0;

        // dist[t]: BFS distance from s to t (-1 = unvisited).
        let mut dist: Vec<i64> = vec![-1; n];
        dist[si] = 0;

        let mut queue: VecDeque<NodeIndex> = VecDeque::new();
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            let vi = v.index();
            stack.push(v);

            for w in g.neighbors(v) {
                let wi = w.index();

                // First visit to w?
                if dist[wi] < 0 {
                    dist[wi] = dist[vi] + 1;
                    queue.push_back(w);
                }

                // Shortest path to w via v?
                if dist[wi] == dist[vi] + 1 {
                    sigma[wi] += sigma[vi];
                    predecessors[wi].push(v);
                }
            }
        }

        // Back-propagate pair dependencies in reverse BFS order.
        let mut delta: Vec<f64> = vec![0.0; n];

        while let Some(w) = stack.pop() {
            let wi = w.index();

            for &v in &predecessors[wi] {
                let vi = v.index();
                if sigma[wi] > 0.0 {
                    delta[vi] += (sigma[vi] / sigma[wi]) * (1.0 + delta[wi]);
                }
            }

            if wi != si {
                cb[wi] += delta[wi];
            }
        }
    }

    // Undirected: each (s, t) pair was counted from both endpoints.
    // Normalize into [0, 1] by the pair count (n-1)(n-2)/2.
    #[allow(clippy::cast_precision_loss)]
    let scale = if n < 3 {
        0.0
    } else {
        1.0 / (((n - 1) * (n - 2)) as f64 / 2.0)
    };

    let mut result = HashMap::with_capacity(n);
    for idx in g.node_indices() {
        if let Some(label) = ig.label(idx) {
            let raw = cb[idx.index()] / 2.0;
            result.insert(label.to_string(), raw * scale);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use interactome_core::Interaction;

    const EPS: f64 = 1e-10;

    fn graph(edges: &[(&str, &str)]) -> InteractionGraph {
        let rows: Vec<Interaction> = edges
            .iter()
            .map(|(a, b)| Interaction::new(*a, *b, None))
            .collect();
        InteractionGraph::from_interactions(&rows)
    }

    #[test]
    fn empty_graph_returns_empty() {
        assert!(betweenness_centrality(&graph(&[])).is_empty());
    }

    #[test]
    fn two_node_graph_is_all_zero() {
        let bc = betweenness_centrality(&graph(&[("A", "B")]));
        assert!(bc["A"].abs() < EPS);
        assert!(bc["B"].abs() < EPS);
    }

    #[test]
    fn path_middle_node_has_full_betweenness() {
        // X - Y - Z: Y is on the only shortest path between the only
        // other pair, so normalized betweenness is exactly 1.
        let bc = betweenness_centrality(&graph(&[("X", "Y"), ("Y", "Z")]));
        assert!(bc["X"].abs() < EPS);
        assert!((bc["Y"] - 1.0).abs() < EPS, "Y = {}", bc["Y"]);
        assert!(bc["Z"].abs() < EPS);
    }

    #[test]
    fn triangle_has_zero_betweenness_everywhere() {
        // Every pair is directly connected; no node is an intermediary.
        let bc = betweenness_centrality(&graph(&[("A", "B"), ("B", "C"), ("C", "A")]));
        for label in ["A", "B", "C"] {
            assert!(bc[label].abs() < EPS, "{label} = {}", bc[label]);
        }
    }

    #[test]
    fn star_center_has_betweenness_one() {
        // The hub sits on the unique shortest path between every leaf pair.
        let bc = betweenness_centrality(&graph(&[("H", "A"), ("H", "B"), ("H", "C")]));
        assert!((bc["H"] - 1.0).abs() < EPS, "H = {}", bc["H"]);
        for leaf in ["A", "B", "C"] {
            assert!(bc[leaf].abs() < EPS);
        }
    }

    #[test]
    fn square_splits_shortest_paths_fractionally() {
        // Cycle A-B-C-D-A. Each diagonal pair has two shortest paths,
        // so each node carries half of one pair: raw 0.5, and the
        // normalization constant is (4-1)(4-2)/2 = 3.
        let bc = betweenness_centrality(&graph(&[
            ("A", "B"),
            ("B", "C"),
            ("C", "D"),
            ("D", "A"),
        ]));
        for label in ["A", "B", "C", "D"] {
            assert!(
                (bc[label] - 0.5 / 3.0).abs() < EPS,
                "{label} = {}",
                bc[label]
            );
        }
    }

    #[test]
    fn chain_of_four() {
        // A - B - C - D. Raw: B on A-C and A-D = 2, C symmetric.
        // Normalized by (3)(2)/2 = 3.
        let bc = betweenness_centrality(&graph(&[("A", "B"), ("B", "C"), ("C", "D")]));
        assert!(bc["A"].abs() < EPS);
        assert!((bc["B"] - 2.0 / 3.0).abs() < EPS, "B = {}", bc["B"]);
        assert!((bc["C"] - 2.0 / 3.0).abs() < EPS, "C = {}", bc["C"]);
        assert!(bc["D"].abs() < EPS);
    }

    #[test]
    fn disconnected_components_contribute_nothing_across() {
        // P - Q - R in one component, X - Y in another. Q still scores
        // for the P/R pair; nothing crosses components.
        let bc =
            betweenness_centrality(&graph(&[("P", "Q"), ("Q", "R"), ("X", "Y")]));
        // Raw Q = 1, normalization (5-1)(5-2)/2 = 6.
        assert!((bc["Q"] - 1.0 / 6.0).abs() < EPS, "Q = {}", bc["Q"]);
        assert!(bc["X"].abs() < EPS);
        assert!(bc["Y"].abs() < EPS);
    }

    #[test]
    fn scores_stay_in_unit_interval() {
        let bc = betweenness_centrality(&graph(&[
            ("A", "B"),
            ("B", "C"),
            ("C", "D"),
            ("D", "E"),
            ("B", "D"),
        ]));
        for (label, score) in &bc {
            assert!(
                (0.0..=1.0).contains(score),
                "{label} out of range: {score}"
            );
        }
    }
}
