//! Known-topology regression tests for graph metrics, plus property
//! tests for the structural invariants.
//!
//! Each regression test uses a hand-crafted graph with known properties.
//! Expected metric values are computed analytically and hardcoded — any
//! algorithm change that shifts values will be caught. Floating-point
//! comparisons use an epsilon, never exact equality.

use std::collections::BTreeSet;

use interactome_analysis::graph::build::InteractionGraph;
use interactome_analysis::graph::stats::GraphStats;
use interactome_analysis::metrics::{betweenness_centrality, clustering_coefficients, degrees};
use interactome_analysis::rank::RankedReport;
use interactome_core::filter::{DEFAULT_THRESHOLDS, select_threshold};
use interactome_core::Interaction;

const EPS: f64 = 1e-10;

fn rows(pairs: &[(&str, &str, Option<f64>)]) -> Vec<Interaction> {
    pairs
        .iter()
        .map(|(a, b, s)| Interaction::new(*a, *b, *s))
        .collect()
}

fn graph(edges: &[(&str, &str)]) -> InteractionGraph {
    let unscored: Vec<Interaction> = edges
        .iter()
        .map(|(a, b)| Interaction::new(*a, *b, None))
        .collect();
    InteractionGraph::from_interactions(&unscored)
}

// ---------------------------------------------------------------------------
// End-to-end pipeline scenarios
// ---------------------------------------------------------------------------

#[test]
fn adaptive_filter_feeds_ranking() {
    // Scores 800 / 500 / 100 with candidates [700, 400, 0]: 800 clears
    // the strictest bar on its own, but the goal of the adaptive pass is
    // the strictest threshold with *any* survivors — here 700 keeps only
    // X-Y. With candidates [400, 0] the classic two-edge outcome appears.
    let input = rows(&[
        ("X", "Y", Some(800.0)),
        ("Y", "Z", Some(500.0)),
        ("X", "Z", Some(100.0)),
    ]);

    let outcome = select_threshold(input, &[400.0, 0.0]);
    assert!((outcome.threshold().expect("threshold") - 400.0).abs() < EPS);
    assert_eq!(outcome.interactions().len(), 2);

    let ig = InteractionGraph::from_interactions(outcome.interactions());
    assert_eq!(ig.node_count(), 3);
    assert_eq!(ig.edge_count(), 2);

    let d = degrees(&ig);
    assert_eq!(d["X"], 1);
    assert_eq!(d["Y"], 2);
    assert_eq!(d["Z"], 1);

    let report = RankedReport::from_graph(&ig);
    assert_eq!(report.summary[0].label, "Y");
}

#[test]
fn exhausted_thresholds_reach_the_empty_terminal_state() {
    let input = rows(&[("A", "B", Some(0.0)), ("B", "C", Some(-1.0))]);
    let outcome = select_threshold(input, &DEFAULT_THRESHOLDS);
    assert!(outcome.is_empty_terminal());

    // Downstream stages handle the empty set gracefully.
    let ig = InteractionGraph::from_interactions(outcome.interactions());
    assert!(ig.is_empty());
    assert!(RankedReport::from_graph(&ig).is_empty());
    assert!(betweenness_centrality(&ig).is_empty());
    assert!(clustering_coefficients(&ig).is_empty());
    let stats = GraphStats::from_graph(&ig);
    assert_eq!(stats.node_count, 0);
}

#[test]
fn triangle_scenario() {
    let ig = graph(&[("A", "B"), ("B", "C"), ("C", "A")]);
    let d = degrees(&ig);
    let bc = betweenness_centrality(&ig);
    let cc = clustering_coefficients(&ig);

    for label in ["A", "B", "C"] {
        assert_eq!(d[label], 2);
        assert!((cc[label] - 1.0).abs() < EPS, "{label} clustering");
        assert!(bc[label].abs() < EPS, "{label} betweenness");
    }
}

// ---------------------------------------------------------------------------
// Analytic topologies
// ---------------------------------------------------------------------------

#[test]
fn barbell_bridge_dominates_betweenness() {
    // Two triangles joined by the bridge C - D. C and D sit on every
    // cross-triangle shortest path.
    let ig = graph(&[
        ("A", "B"),
        ("B", "C"),
        ("C", "A"),
        ("C", "D"),
        ("D", "E"),
        ("E", "F"),
        ("F", "D"),
    ]);
    let bc = betweenness_centrality(&ig);

    assert!(bc["C"] > bc["A"]);
    assert!(bc["C"] > bc["B"]);
    assert!(bc["D"] > bc["E"]);
    assert!((bc["C"] - bc["D"]).abs() < EPS, "bridge ends are symmetric");
}

#[test]
fn isolated_component_scores_zero_betweenness() {
    let ig = graph(&[("A", "B"), ("B", "C"), ("X", "Y")]);
    let bc = betweenness_centrality(&ig);
    assert!(bc["X"].abs() < EPS);
    assert!(bc["Y"].abs() < EPS);
}

#[test]
fn complete_graph_k4() {
    let ig = graph(&[
        ("A", "B"),
        ("A", "C"),
        ("A", "D"),
        ("B", "C"),
        ("B", "D"),
        ("C", "D"),
    ]);
    let d = degrees(&ig);
    let bc = betweenness_centrality(&ig);
    let cc = clustering_coefficients(&ig);

    for label in ["A", "B", "C", "D"] {
        assert_eq!(d[label], 3);
        assert!((cc[label] - 1.0).abs() < EPS);
        assert!(bc[label].abs() < EPS);
    }

    let stats = GraphStats::from_graph(&ig);
    assert!((stats.density - 1.0).abs() < EPS);
}

#[test]
fn neighbor_lists_round_trip_the_edge_set() {
    let original = [
        ("TP53", "MDM2"),
        ("TP53", "BRCA1"),
        ("BRCA1", "RAD51"),
        ("MDM2", "RAD51"),
    ];
    let ig = graph(&original);
    let report = RankedReport::from_graph(&ig);

    // Reconstruct unordered pairs from the per-node partner lists.
    let mut recovered: BTreeSet<(String, String)> = BTreeSet::new();
    for row in &report.neighbors {
        for partner in &row.partners {
            let (x, y) = if row.label.as_str() <= partner.as_str() {
                (row.label.clone(), partner.clone())
            } else {
                (partner.clone(), row.label.clone())
            };
            recovered.insert((x, y));
        }
    }

    let expected: BTreeSet<(String, String)> = original
        .iter()
        .map(|(a, b)| {
            if a <= b {
                ((*a).to_string(), (*b).to_string())
            } else {
                ((*b).to_string(), (*a).to_string())
            }
        })
        .collect();

    assert_eq!(recovered, expected);
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

mod properties {
    use super::*;
    use proptest::prelude::*;

    /// Arbitrary small edge lists over a bounded label alphabet. Allows
    /// duplicates and self-loops so construction invariants are exercised.
    fn edge_lists() -> impl Strategy<Value = Vec<(u8, u8, Option<f64>)>> {
        prop::collection::vec(
            (0_u8..12, 0_u8..12, prop::option::of(0.0_f64..1000.0)),
            0..40,
        )
    }

    fn build(edges: &[(u8, u8, Option<f64>)]) -> InteractionGraph {
        let rows: Vec<Interaction> = edges
            .iter()
            .map(|(a, b, s)| Interaction::new(format!("N{a}"), format!("N{b}"), *s))
            .collect();
        InteractionGraph::from_interactions(&rows)
    }

    proptest! {
        #[test]
        fn handshake_lemma(edges in edge_lists()) {
            let ig = build(&edges);
            let total: usize = degrees(&ig).values().sum();
            prop_assert_eq!(total, 2 * ig.edge_count());
        }

        #[test]
        fn metric_bounds(edges in edge_lists()) {
            let ig = build(&edges);
            for (label, v) in betweenness_centrality(&ig) {
                prop_assert!((0.0..=1.0 + EPS).contains(&v), "betweenness {} = {}", label, v);
            }
            for (label, v) in clustering_coefficients(&ig) {
                prop_assert!((0.0..=1.0 + EPS).contains(&v), "clustering {} = {}", label, v);
            }
        }

        #[test]
        fn clustering_zero_below_degree_two(edges in edge_lists()) {
            let ig = build(&edges);
            let d = degrees(&ig);
            for (label, v) in clustering_coefficients(&ig) {
                if d[&label] < 2 {
                    prop_assert!(v.abs() < EPS);
                }
            }
        }

        #[test]
        fn ranking_covers_every_node_once(edges in edge_lists()) {
            let ig = build(&edges);
            let report = RankedReport::from_graph(&ig);
            prop_assert_eq!(report.len(), ig.node_count());

            let unique: BTreeSet<&str> =
                report.summary.iter().map(|r| r.label.as_str()).collect();
            prop_assert_eq!(unique.len(), report.len());

            for k in [0, 1, 5, 10, 100] {
                prop_assert_eq!(report.top(k).len(), k.min(ig.node_count()));
            }
        }

        #[test]
        fn filter_is_idempotent(edges in edge_lists()) {
            let rows: Vec<Interaction> = edges
                .iter()
                .map(|(a, b, s)| Interaction::new(format!("N{a}"), format!("N{b}"), *s))
                .collect();

            let first = select_threshold(rows, &DEFAULT_THRESHOLDS);
            if let Some(t) = first.threshold() {
                let survivors = first.interactions().to_vec();
                let again = select_threshold(survivors.clone(), &[t]);
                prop_assert_eq!(again.interactions().len(), survivors.len());
            }
        }
    }
}
