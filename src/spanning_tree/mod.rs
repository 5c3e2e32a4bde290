//! Minimum spanning trees of undirected graphs.
//!
//! Both algorithms expect every undirected edge to be present in both
//! directions and return `None` if the graph is disconnected.

use serde::{Deserialize, Serialize};

use crate::graphs::{edge::WeightedEdge, Weight};

pub mod kruskal;
pub mod prim;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningTree {
    pub weight: Weight,
    pub edges: Vec<WeightedEdge>,
}
