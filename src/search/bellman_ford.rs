use log::{debug, trace};

use super::distance_table::DistanceTable;
use crate::graphs::{
    edge::WeightedEdge, graph_functions::all_edges, is_unreachable, path::PathFinding, Graph,
    VertexId, Weight,
};

/// Shortest paths using at most a given number of edges. Negative weights are
/// allowed.
pub struct BellmanFord {
    number_of_vertices: u32,
    edges: Vec<WeightedEdge>,
    hop_limit: u32,
}

impl PathFinding for BellmanFord {
    fn shortest_path_weight(&self, source: VertexId, target: VertexId) -> Option<Weight> {
        self.with_hop_limit(source, self.hop_limit).distance(target)
    }
}

impl BellmanFord {
    /// Uses `n - 1` hops, enough for every simple path.
    pub fn new(graph: &dyn Graph) -> BellmanFord {
        let number_of_vertices = graph.number_of_vertices();
        BellmanFord {
            number_of_vertices,
            edges: all_edges(graph),
            hop_limit: number_of_vertices.saturating_sub(1),
        }
    }

    pub fn with_hops(graph: &dyn Graph, hop_limit: u32) -> BellmanFord {
        BellmanFord {
            hop_limit,
            ..BellmanFord::new(graph)
        }
    }

    pub fn hop_limit(&self) -> u32 {
        self.hop_limit
    }

    /// After round `i` every distance is the shortest one over paths with at
    /// most `i` edges. Predecessors are not tracked.
    ///
    /// Every round may lower the sentinel of an unreachable vertex by up to
    /// `max |weight|`, so `hop_limit` has to satisfy
    /// [`validate_hop_margin`](crate::graphs::graph_functions::validate_hop_margin)
    /// for unreachable vertices to stay `None`.
    pub fn with_hop_limit(&self, source: VertexId, hop_limit: u32) -> DistanceTable {
        let mut table = DistanceTable::new(self.number_of_vertices, source);

        for round in 0..hop_limit {
            // Reading the previous round only keeps relaxations from chaining
            // within a round.
            let snapshot = table.raw_distances().to_vec();

            let mut changed = false;
            for edge in self.edges.iter() {
                let candidate = snapshot[edge.tail as usize] + edge.weight;
                changed |= table.relax(edge.head, candidate);
            }

            trace!("bellman-ford round {} changed: {}", round + 1, changed);
            if !changed {
                break;
            }
        }

        table
    }

    /// Returns true if a negative cycle is reachable from `source`.
    pub fn has_negative_cycle(&self, source: VertexId) -> bool {
        let table = self.with_hop_limit(source, self.number_of_vertices.saturating_sub(1));

        let has_negative_cycle = self.edges.iter().any(|edge| {
            let distance_tail = table.get_distance(edge.tail);
            !is_unreachable(distance_tail)
                && distance_tail + edge.weight < table.get_distance(edge.head)
        });

        if has_negative_cycle {
            debug!("bellman-ford found a negative cycle reachable from {}", source);
        }
        has_negative_cycle
    }
}

#[cfg(test)]
mod tests {
    use super::BellmanFord;
    use crate::graphs::{edge::WeightedEdge, path::PathFinding, vec_graph::VecGraph};

    fn negative_shortcut() -> VecGraph {
        VecGraph::from_edges(
            3,
            &[
                WeightedEdge::new(0, 1, 1),
                WeightedEdge::new(1, 2, 1),
                WeightedEdge::new(0, 2, -10),
            ],
        )
    }

    #[test]
    fn direct_negative_edge_wins() {
        let graph = negative_shortcut();
        let table = BellmanFord::new(&graph).with_hop_limit(0, 2);

        assert_eq!(table.distance(2), Some(-10));
        assert_eq!(table.distance(1), Some(1));
    }

    #[test]
    fn hop_limit_is_respected() {
        let graph = VecGraph::from_edges(
            3,
            &[
                WeightedEdge::new(0, 1, 1),
                WeightedEdge::new(1, 2, 1),
                WeightedEdge::new(0, 2, 5),
            ],
        );
        let bellman_ford = BellmanFord::new(&graph);

        assert_eq!(bellman_ford.with_hop_limit(0, 0).distance(2), None);
        assert_eq!(bellman_ford.with_hop_limit(0, 1).distance(2), Some(5));
        assert_eq!(bellman_ford.with_hop_limit(0, 2).distance(2), Some(2));
    }

    #[test]
    fn snapshot_prevents_chaining() {
        // edges are scanned in order 0->1, 1->2 so a single round without the
        // snapshot would reach vertex 2
        let graph = VecGraph::from_edges(
            3,
            &[WeightedEdge::new(0, 1, 1), WeightedEdge::new(1, 2, 1)],
        );

        let table = BellmanFord::new(&graph).with_hop_limit(0, 1);
        assert_eq!(table.distance(1), Some(1));
        assert_eq!(table.distance(2), None);
    }

    #[test]
    fn lowered_sentinel_stays_unreachable() {
        // 1 is unreachable from 0 but its outgoing negative edge still lowers
        // the sentinel of 2
        let graph = VecGraph::from_edges(3, &[WeightedEdge::new(1, 2, -5)]);
        let table = BellmanFord::new(&graph).with_hop_limit(0, 2);

        assert_eq!(table.distance(2), None);
        assert!(table.get_distance(2) < crate::graphs::INFINITY);
    }

    #[test]
    fn stored_hop_limit() {
        let graph = negative_shortcut();
        let bellman_ford = BellmanFord::with_hops(&graph, 1);

        assert_eq!(bellman_ford.hop_limit(), 1);
        assert_eq!(bellman_ford.shortest_path_weight(0, 2), Some(-10));
        assert_eq!(bellman_ford.shortest_path_weight(1, 0), None);
    }

    #[test]
    fn negative_cycle_reachable_from_source() {
        let graph = VecGraph::from_edges(
            4,
            &[
                WeightedEdge::new(0, 1, 1),
                WeightedEdge::new(1, 2, 2),
                WeightedEdge::new(2, 1, -3),
                WeightedEdge::new(3, 0, 1),
            ],
        );
        let bellman_ford = BellmanFord::new(&graph);

        assert!(bellman_ford.has_negative_cycle(0));
        assert!(bellman_ford.has_negative_cycle(3));
        assert!(!BellmanFord::new(&negative_shortcut()).has_negative_cycle(0));
    }

    #[test]
    fn negative_cycle_elsewhere_is_ignored() {
        let graph = VecGraph::from_edges(
            4,
            &[
                WeightedEdge::new(0, 1, 1),
                WeightedEdge::new(2, 3, -1),
                WeightedEdge::new(3, 2, -1),
            ],
        );
        let bellman_ford = BellmanFord::new(&graph);

        assert!(!bellman_ford.has_negative_cycle(0));
        assert!(bellman_ford.has_negative_cycle(2));
    }
}
