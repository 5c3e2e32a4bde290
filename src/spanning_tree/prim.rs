use log::debug;

use super::SpanningTree;
use crate::graphs::{edge::WeightedEdge, matrix_graph::MatrixGraph, Graph, VertexId, INFINITY};

/// Grows the tree from vertex 0, always adding the unvisited vertex with the
/// cheapest edge into the tree. Runs in `O(n^2)`.
///
/// Weights have to be non-negative. Returns `None` if the graph is
/// disconnected.
pub fn prim(graph: &MatrixGraph) -> Option<SpanningTree> {
    let number_of_vertices = graph.number_of_vertices() as usize;

    // cheapest single edge into the tree, not a path length
    let mut fringe = vec![INFINITY; number_of_vertices];
    let mut fringe_tail: Vec<Option<VertexId>> = vec![None; number_of_vertices];
    let mut visited = vec![false; number_of_vertices];

    let mut tree = SpanningTree {
        weight: 0,
        edges: Vec::with_capacity(number_of_vertices.saturating_sub(1)),
    };

    for iteration in 0..number_of_vertices {
        let vertex = (0..number_of_vertices)
            .filter(|&vertex| !visited[vertex])
            .min_by_key(|&vertex| fringe[vertex])?;

        if iteration > 0 {
            if fringe[vertex] == INFINITY {
                debug!("prim: vertex {} is not connected to the tree", vertex);
                return None;
            }
            tree.weight += fringe[vertex];
            if let Some(tail) = fringe_tail[vertex] {
                tree.edges
                    .push(WeightedEdge::new(tail, vertex as VertexId, fringe[vertex]));
            }
        }
        visited[vertex] = true;

        for (head, weight) in graph.row(vertex as VertexId).iter().enumerate() {
            let Some(weight) = *weight else {
                continue;
            };
            assert!(
                weight >= 0,
                "prim requires non-negative weights, found {} -> {} with {}",
                vertex,
                head,
                weight
            );
            if !visited[head] && weight < fringe[head] {
                fringe[head] = weight;
                fringe_tail[head] = Some(vertex as VertexId);
            }
        }
    }

    Some(tree)
}
