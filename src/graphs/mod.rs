pub mod edge;
pub mod graph_factory;
pub mod graph_functions;
pub mod matrix_graph;
pub mod path;
pub mod vec_graph;

use edge::{Edge, WeightedEdge};

pub type VertexId = u32;
pub type Weight = i64;

/// Sentinel distance for "not reached yet".
///
/// Distances are compared against `INFINITY / 2` instead of `INFINITY` itself,
/// as relaxations over negative edges may lower the sentinel without making a
/// vertex reachable. The margin holds as long as `max |weight| * n` stays below
/// `INFINITY / 2`, see [`graph_functions::validate_infinity_margin`].
pub const INFINITY: Weight = 1 << 61;

/// Returns true if `distance` has to be treated as the sentinel.
pub fn is_unreachable(distance: Weight) -> bool {
    distance > INFINITY / 2
}

/// Maps a raw table entry to `None` if it is unreachable.
pub fn finite(distance: Weight) -> Option<Weight> {
    if is_unreachable(distance) {
        return None;
    }
    Some(distance)
}

pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32 {
        (0..self.number_of_vertices())
            .map(|vertex| self.out_edges(vertex).len() as u32)
            .sum::<u32>()
    }

    fn out_edges(
        &self,
        source: VertexId,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_>;

    /// Weight of the cheapest edge from `edge.tail` to `edge.head`.
    fn get_edge_weight(&self, edge: &Edge) -> Option<Weight>;

    /// Records a single directed edge. Panics if an endpoint exceeds the
    /// vertex capacity of the graph.
    fn add_edge(&mut self, edge: &WeightedEdge);
}
