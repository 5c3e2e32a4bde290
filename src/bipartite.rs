use log::debug;
use serde::{Deserialize, Serialize};

use crate::graphs::{edge::WeightedEdge, Graph, VertexId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

type OutEdges<'a> = Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + 'a>;

/// Two-colours every component by depth first search, starting each
/// component at its smallest vertex with [`Side::Left`].
///
/// Expects undirected edges to be present in both directions. Returns `None`
/// as soon as an edge joins two vertices of the same side, including a self
/// loop.
pub fn two_coloring(graph: &dyn Graph) -> Option<Vec<Side>> {
    let number_of_vertices = graph.number_of_vertices();
    let mut sides: Vec<Option<Side>> = vec![None; number_of_vertices as usize];

    for root in 0..number_of_vertices {
        if sides[root as usize].is_some() {
            continue;
        }
        sides[root as usize] = Some(Side::Left);

        // explicit stack so long paths do not overflow the call stack
        let mut stack: Vec<(VertexId, Side, OutEdges)> =
            vec![(root, Side::Left, graph.out_edges(root))];

        while let Some((vertex, side, out_edges)) = stack.last_mut() {
            let (vertex, side) = (*vertex, *side);
            let Some(edge) = out_edges.next() else {
                stack.pop();
                continue;
            };

            match sides[edge.head as usize] {
                None => {
                    sides[edge.head as usize] = Some(side.opposite());
                    stack.push((edge.head, side.opposite(), graph.out_edges(edge.head)));
                }
                Some(head_side) if head_side == side => {
                    debug!(
                        "edge {} -> {} joins two vertices of the same side",
                        vertex, edge.head
                    );
                    return None;
                }
                Some(_) => {}
            }
        }
    }

    sides.into_iter().collect()
}

pub fn is_bipartite(graph: &dyn Graph) -> bool {
    two_coloring(graph).is_some()
}

#[cfg(test)]
mod tests {
    use super::{is_bipartite, two_coloring, Side};
    use crate::graphs::{
        edge::WeightedEdge, graph_functions::add_edge_bidirectional, vec_graph::VecGraph,
    };

    fn undirected(number_of_vertices: u32, edges: &[(u32, u32)]) -> VecGraph {
        let mut graph = VecGraph::new(number_of_vertices);
        for &(tail, head) in edges {
            add_edge_bidirectional(&mut graph, &WeightedEdge::new(tail, head, 1));
        }
        graph
    }

    #[test]
    fn triangle_is_not_bipartite() {
        let graph = undirected(3, &[(0, 1), (1, 2), (2, 0)]);
        assert!(!is_bipartite(&graph));
    }

    #[test]
    fn square_alternates_sides() {
        let graph = undirected(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(
            two_coloring(&graph),
            Some(vec![Side::Left, Side::Right, Side::Left, Side::Right])
        );
    }

    #[test]
    fn every_component_is_checked() {
        let bipartite = undirected(5, &[(0, 1), (3, 4)]);
        assert_eq!(
            two_coloring(&bipartite),
            Some(vec![
                Side::Left,
                Side::Right,
                Side::Left,
                Side::Left,
                Side::Right
            ])
        );

        let odd_cycle_later = undirected(6, &[(0, 1), (2, 3), (3, 4), (4, 5), (5, 3)]);
        assert!(!is_bipartite(&odd_cycle_later));
    }

    #[test]
    fn self_loop_is_not_bipartite() {
        let graph = undirected(2, &[(0, 1), (1, 1)]);
        assert!(!is_bipartite(&graph));
    }

    #[test]
    fn long_path_does_not_overflow() {
        let edges: Vec<(u32, u32)> = (0..100_000).map(|vertex| (vertex, vertex + 1)).collect();
        let graph = undirected(100_001, &edges);
        assert!(is_bipartite(&graph));
    }
}
