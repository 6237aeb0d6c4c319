//! Structural metrics for the interaction graph.
//!
//! # Overview
//!
//! Three independent, exact computations over the same immutable
//! [`InteractionGraph`](crate::graph::build::InteractionGraph):
//!
//! - **Degree** (`degree`): How many distinct partners does each node
//!   interact with?
//! - **Betweenness centrality** (`betweenness`): Which nodes act as
//!   bridges or bottlenecks — how often does a node sit on shortest
//!   paths between other pairs?
//! - **Local clustering coefficient** (`clustering`): How tightly knit
//!   is each node's neighborhood — what fraction of its partners also
//!   interact with each other?
//!
//! All metrics are computed for every node with no sampling or
//! approximation, and all are keyed by the original label strings.
//! All three return empty maps for the empty graph; none can fail.

pub mod betweenness;
pub mod clustering;
pub mod degree;

pub use betweenness::betweenness_centrality;
pub use clustering::clustering_coefficients;
pub use degree::degrees;
