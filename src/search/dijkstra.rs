use log::debug;

use super::distance_table::DistanceTable;
use crate::{
    graphs::{
        path::{Path, PathFinding},
        Graph, VertexId, Weight,
    },
    queue::{heap_queue::HeapQueue, DijkstraQueue, DijkstraQueueElement},
};

/// Single source shortest paths on graphs with non-negative weights.
///
/// A negative edge weight is a violated precondition and panics once the edge
/// is scanned. Check the graph with
/// [`validate_non_negative`](crate::graphs::graph_functions::validate_non_negative)
/// beforehand.
#[derive(Clone)]
pub struct Dijkstra<'a> {
    graph: &'a dyn Graph,
}

struct SearchResult {
    table: DistanceTable,
    number_of_settled: u32,
    number_of_stale_entries: u32,
}

impl<'a> PathFinding for Dijkstra<'a> {
    fn shortest_path_weight(&self, source: VertexId, target: VertexId) -> Option<Weight> {
        self.single_pair(source, target).distance(target)
    }
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a dyn Graph) -> Dijkstra<'a> {
        Dijkstra { graph }
    }

    pub fn single_source(&self, source: VertexId) -> DistanceTable {
        self.single_source_with_queue(source, &mut HeapQueue::new())
    }

    pub fn single_source_with_queue(
        &self,
        source: VertexId,
        queue: &mut dyn DijkstraQueue,
    ) -> DistanceTable {
        self.search(source, None, queue).table
    }

    /// Stops as soon as `target` is settled. Distances of vertices that are
    /// not settled by then are upper bounds only.
    pub fn single_pair(&self, source: VertexId, target: VertexId) -> DistanceTable {
        self.search(source, Some(target), &mut HeapQueue::new()).table
    }

    pub fn shortest_path(&self, source: VertexId, target: VertexId) -> Option<Path> {
        self.single_pair(source, target).get_path(target)
    }

    fn search(
        &self,
        source: VertexId,
        target: Option<VertexId>,
        queue: &mut dyn DijkstraQueue,
    ) -> SearchResult {
        let mut table = DistanceTable::new(self.graph.number_of_vertices(), source);
        let mut settled = vec![false; self.graph.number_of_vertices() as usize];
        let mut number_of_settled = 0;
        let mut number_of_stale_entries = 0;

        queue.clear();
        queue.push(DijkstraQueueElement::new(0, source));

        while let Some(DijkstraQueueElement { weight, vertex }) = queue.pop() {
            // an earlier entry of this vertex with a smaller weight was
            // already popped
            if settled[vertex as usize] {
                number_of_stale_entries += 1;
                continue;
            }
            settled[vertex as usize] = true;
            number_of_settled += 1;

            if Some(vertex) == target {
                break;
            }

            for edge in self.graph.out_edges(vertex) {
                assert!(
                    edge.weight >= 0,
                    "dijkstra requires non-negative weights, found {} -> {} with {}",
                    edge.tail,
                    edge.head,
                    edge.weight
                );

                let alternative_distance_head = weight + edge.weight;
                if table.relax_edge(vertex, edge.head, alternative_distance_head) {
                    queue.push(DijkstraQueueElement::new(
                        alternative_distance_head,
                        edge.head,
                    ));
                }
            }
        }

        debug!(
            "dijkstra from {} settled {} vertices, skipped {} stale entries",
            source, number_of_settled, number_of_stale_entries
        );

        SearchResult {
            table,
            number_of_settled,
            number_of_stale_entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Dijkstra;
    use crate::{
        graphs::{
            edge::WeightedEdge, graph_functions::add_edge_bidirectional, path::PathFinding,
            vec_graph::VecGraph, Graph,
        },
        queue::{heap_queue::HeapQueue, radix_queue::RadixQueue},
    };

    fn small_graph() -> VecGraph {
        VecGraph::from_edges(
            3,
            &[
                WeightedEdge::new(0, 1, 1),
                WeightedEdge::new(1, 2, 1),
                WeightedEdge::new(0, 2, 4),
            ],
        )
    }

    #[test]
    fn prefers_two_cheap_edges() {
        let graph = small_graph();
        let table = Dijkstra::new(&graph).single_source(0);

        assert_eq!(table.distances(), vec![Some(0), Some(1), Some(2)]);
        assert_eq!(table.get_path(2).unwrap().vertices, vec![0, 1, 2]);
    }

    #[test]
    fn unreachable_keeps_sentinel() {
        let graph = small_graph();
        let dijkstra = Dijkstra::new(&graph);

        assert_eq!(dijkstra.shortest_path_weight(2, 0), None);
        assert_eq!(dijkstra.shortest_path(2, 0), None);
    }

    #[test]
    fn parallel_edges_and_self_loops() {
        let mut graph = VecGraph::new(3);
        graph.add_edge(&WeightedEdge::new(0, 0, 0));
        graph.add_edge(&WeightedEdge::new(0, 1, 7));
        graph.add_edge(&WeightedEdge::new(0, 1, 3));
        add_edge_bidirectional(&mut graph, &WeightedEdge::new(1, 2, 2));

        let dijkstra = Dijkstra::new(&graph);
        assert_eq!(dijkstra.shortest_path_weight(0, 2), Some(5));
        assert_eq!(dijkstra.shortest_path_weight(2, 1), Some(2));
    }

    #[test]
    fn radix_queue_gives_same_distances() {
        // https://jlazarsfeld.github.io/ch.150.project/img/contraction/contract-full-1.png
        let mut graph = VecGraph::new(11);
        for (tail, head, weight) in [
            (0, 1, 3),
            (0, 2, 5),
            (0, 10, 3),
            (1, 2, 3),
            (1, 3, 5),
            (2, 3, 2),
            (2, 9, 2),
            (3, 4, 7),
            (3, 9, 4),
            (4, 5, 6),
            (4, 9, 3),
            (5, 6, 4),
            (5, 7, 2),
            (6, 7, 3),
            (6, 8, 5),
            (7, 8, 3),
            (7, 9, 2),
            (8, 9, 4),
            (8, 10, 6),
            (9, 10, 3),
        ] {
            add_edge_bidirectional(&mut graph, &WeightedEdge::new(tail, head, weight));
        }

        let dijkstra = Dijkstra::new(&graph);
        for source in 0..graph.number_of_vertices() {
            let heap = dijkstra.single_source(source);
            let radix = dijkstra.single_source_with_queue(source, &mut RadixQueue::new());
            assert_eq!(heap.distances(), radix.distances());
        }
        assert_eq!(dijkstra.shortest_path_weight(0, 6), Some(11));
    }

    #[test]
    fn stale_entry_is_skipped() {
        // 2 is pushed with 10 first and with 2 after 1 is settled
        let graph = VecGraph::from_edges(
            4,
            &[
                WeightedEdge::new(0, 2, 10),
                WeightedEdge::new(0, 1, 1),
                WeightedEdge::new(1, 2, 1),
                WeightedEdge::new(2, 3, 1),
            ],
        );

        let result = Dijkstra::new(&graph).search(0, None, &mut HeapQueue::new());
        assert_eq!(
            result.table.distances(),
            vec![Some(0), Some(1), Some(2), Some(3)]
        );
        assert_eq!(result.table.get_predecessor(2), Some(1));
        assert_eq!(result.number_of_settled, 4);
        assert_eq!(result.number_of_stale_entries, 1);
    }

    #[test]
    #[should_panic]
    fn negative_weight_panics() {
        let graph = VecGraph::from_edges(2, &[WeightedEdge::new(0, 1, -1)]);
        Dijkstra::new(&graph).single_source(0);
    }
}
