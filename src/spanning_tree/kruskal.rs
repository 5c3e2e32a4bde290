use itertools::Itertools;
use log::debug;

use super::SpanningTree;
use crate::{
    graphs::{graph_functions::all_edges, Graph},
    union_find::UnionFind,
};

/// Scans all edges by ascending weight and keeps every edge joining two
/// different components. Runs in `O(m log m)`.
///
/// Edges of equal weight keep their insertion order. Returns `None` if fewer
/// than `n - 1` edges get selected.
///
/// The total weight must fit into a [`Weight`](crate::graphs::Weight), which
/// [`validate_infinity_margin`](crate::graphs::graph_functions::validate_infinity_margin)
/// guarantees. Overflowing it panics.
pub fn kruskal(graph: &dyn Graph) -> Option<SpanningTree> {
    let number_of_vertices = graph.number_of_vertices();
    let mut union_find = UnionFind::new(number_of_vertices);

    let mut tree = SpanningTree {
        weight: 0,
        edges: Vec::with_capacity(number_of_vertices.saturating_sub(1) as usize),
    };

    for edge in all_edges(graph).into_iter().sorted_by_key(|edge| edge.weight) {
        if tree.edges.len() as u32 == number_of_vertices.saturating_sub(1) {
            break;
        }
        if union_find.union(edge.tail, edge.head) {
            tree.weight = tree
                .weight
                .checked_add(edge.weight)
                .expect("spanning tree weight overflows");
            tree.edges.push(edge);
        }
    }

    if (tree.edges.len() as u32) < number_of_vertices.saturating_sub(1) {
        debug!(
            "kruskal: {} components remain after {} edges",
            union_find.number_of_sets(),
            tree.edges.len()
        );
        return None;
    }

    Some(tree)
}
