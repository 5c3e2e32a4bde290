use serde::{Deserialize, Serialize};

use super::{VertexId, Weight};

/// Represents a path in a graph.
///
/// This struct encapsulates the vertices that form a path in the graph and the
/// total weight associated with traversing this path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<VertexId>,
    pub weight: Weight,
}

/// Answers distance queries between two vertices.
pub trait PathFinding {
    /// Weight of a shortest path or `None` if `target` is unreachable.
    fn shortest_path_weight(&self, source: VertexId, target: VertexId) -> Option<Weight>;
}
