use std::collections::VecDeque;

use log::{debug, trace};

use super::distance_table::DistanceTable;
use crate::graphs::{
    path::{Path, PathFinding},
    Graph, VertexId, Weight,
};

/// Worklist driven Bellman-Ford. A vertex is (re)queued whenever its distance
/// improves, so it may enter the worklist arbitrarily often.
///
/// Every run counts the edges on the current best path to each vertex. A path
/// of `n` edges repeats a vertex and still improves, which proves a negative
/// cycle and stops the search.
#[derive(Clone)]
pub struct Spfa<'a> {
    graph: &'a dyn Graph,
}

impl<'a> PathFinding for Spfa<'a> {
    fn shortest_path_weight(&self, source: VertexId, target: VertexId) -> Option<Weight> {
        self.single_source(source)?.distance(target)
    }
}

impl<'a> Spfa<'a> {
    pub fn new(graph: &'a dyn Graph) -> Spfa<'a> {
        Spfa { graph }
    }

    /// Distances from `source`, or `None` if a negative cycle is reachable
    /// from it.
    pub fn single_source(&self, source: VertexId) -> Option<DistanceTable> {
        let table = DistanceTable::new(self.graph.number_of_vertices(), source);
        self.run(table, [source])
    }

    pub fn shortest_path(&self, source: VertexId, target: VertexId) -> Option<Path> {
        self.single_source(source)?.get_path(target)
    }

    /// Returns true if the graph contains a negative cycle anywhere.
    ///
    /// All vertices start at distance zero and are queued at once, which acts
    /// like a virtual source connected to every vertex. A cycle does not need
    /// to be reachable from any particular vertex to be found.
    pub fn has_negative_cycle(&self) -> bool {
        let number_of_vertices = self.graph.number_of_vertices();
        let table = DistanceTable::filled(number_of_vertices, 0);
        self.run(table, 0..number_of_vertices).is_none()
    }

    fn run(
        &self,
        mut table: DistanceTable,
        seeds: impl IntoIterator<Item = VertexId>,
    ) -> Option<DistanceTable> {
        let number_of_vertices = self.graph.number_of_vertices();
        let mut hop_count = vec![0u32; number_of_vertices as usize];
        let mut in_worklist = vec![false; number_of_vertices as usize];
        let mut worklist = VecDeque::new();

        for vertex in seeds {
            in_worklist[vertex as usize] = true;
            worklist.push_back(vertex);
        }

        let mut number_of_pops = 0u64;
        while let Some(tail) = worklist.pop_front() {
            in_worklist[tail as usize] = false;
            number_of_pops += 1;

            for edge in self.graph.out_edges(tail) {
                let candidate = table.get_distance(tail) + edge.weight;
                if !table.relax_edge(tail, edge.head, candidate) {
                    continue;
                }

                hop_count[edge.head as usize] = hop_count[tail as usize] + 1;
                if hop_count[edge.head as usize] >= number_of_vertices {
                    debug!(
                        "spfa found a negative cycle: path to {} uses {} edges",
                        edge.head, hop_count[edge.head as usize]
                    );
                    return None;
                }

                if !in_worklist[edge.head as usize] {
                    in_worklist[edge.head as usize] = true;
                    worklist.push_back(edge.head);
                }
            }
        }

        trace!("spfa popped {} vertices", number_of_pops);
        Some(table)
    }
}
