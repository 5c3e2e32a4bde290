use super::{
    edge::{Edge, WeightedEdge},
    Graph, VertexId, Weight, INFINITY,
};
use crate::error::GraphError;

pub fn all_edges(graph: &dyn Graph) -> Vec<WeightedEdge> {
    (0..graph.number_of_vertices())
        .flat_map(|vertex| graph.out_edges(vertex))
        .collect()
}

pub fn change_representation<T>(graph: &dyn Graph, mut new_graph: T) -> T
where
    T: Graph,
{
    for vertex in 0..graph.number_of_vertices() {
        for edge in graph.out_edges(vertex) {
            new_graph.add_edge(&edge);
        }
    }

    new_graph
}

pub fn add_edge_bidirectional(graph: &mut dyn Graph, edge: &WeightedEdge) {
    graph.add_edge(edge);
    graph.add_edge(&edge.reversed());
}

pub fn max_abs_weight(graph: &dyn Graph) -> u64 {
    (0..graph.number_of_vertices())
        .flat_map(|vertex| graph.out_edges(vertex))
        .map(|edge| edge.weight.unsigned_abs())
        .max()
        .unwrap_or(0)
}

/// Dijkstra and Prim require every weight to be non-negative.
pub fn validate_non_negative(graph: &dyn Graph) -> Result<(), GraphError> {
    for vertex in 0..graph.number_of_vertices() {
        if let Some(edge) = graph.out_edges(vertex).find(|edge| edge.weight < 0) {
            return Err(GraphError::NegativeWeight {
                tail: edge.tail,
                head: edge.head,
                weight: edge.weight,
            });
        }
    }

    Ok(())
}

/// Ensures no path sum of the graph can be confused with the sentinel, i.e.
/// `max |weight| * n < INFINITY / 2`.
pub fn validate_infinity_margin(graph: &dyn Graph) -> Result<(), GraphError> {
    let max_abs_weight = max_abs_weight(graph);
    let number_of_vertices = graph.number_of_vertices();

    if exceeds_margin(max_abs_weight, number_of_vertices as u64) {
        return Err(GraphError::InfinityMarginExceeded {
            max_abs_weight: Weight::try_from(max_abs_weight).unwrap_or(Weight::MAX),
            number_of_vertices,
        });
    }

    Ok(())
}

/// Bellman-Ford lowers an unreachable sentinel by at most `max |weight|` per
/// round, so `hop_limit` rounds need `max |weight| * hop_limit < INFINITY / 2`.
pub fn validate_hop_margin(graph: &dyn Graph, hop_limit: u32) -> Result<(), GraphError> {
    let max_abs_weight = max_abs_weight(graph);

    if exceeds_margin(max_abs_weight, hop_limit as u64) {
        return Err(GraphError::HopMarginExceeded {
            max_abs_weight: Weight::try_from(max_abs_weight).unwrap_or(Weight::MAX),
            hop_limit,
        });
    }

    Ok(())
}

fn exceeds_margin(max_abs_weight: u64, steps: u64) -> bool {
    max_abs_weight as u128 * steps as u128 >= (INFINITY / 2) as u128
}

/// Sum of the cheapest edges along `vertices`, or `None` if two consecutive
/// vertices are not connected.
pub fn get_path_weight(graph: &dyn Graph, vertices: &[VertexId]) -> Option<Weight> {
    vertices
        .windows(2)
        .map(|pair| {
            graph.get_edge_weight(&Edge {
                tail: pair[0],
                head: pair[1],
            })
        })
        .sum()
}
