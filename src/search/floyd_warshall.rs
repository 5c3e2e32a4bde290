use log::debug;
use serde::{Deserialize, Serialize};

use crate::graphs::{
    finite, is_unreachable, path::PathFinding, Graph, VertexId, Weight, INFINITY,
};

/// All pairs shortest path distances.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FloydWarshall {
    distances: Vec<Vec<Weight>>, // [source][target]
}

impl PathFinding for FloydWarshall {
    fn shortest_path_weight(&self, source: VertexId, target: VertexId) -> Option<Weight> {
        self.distance(source, target)
    }
}

impl FloydWarshall {
    pub fn new(graph: &dyn Graph) -> FloydWarshall {
        let number_of_vertices = graph.number_of_vertices() as usize;

        let mut distances = vec![vec![INFINITY; number_of_vertices]; number_of_vertices];
        for (vertex, row) in distances.iter_mut().enumerate() {
            row[vertex] = 0;
        }
        for vertex in 0..graph.number_of_vertices() {
            for edge in graph.out_edges(vertex) {
                let distance = &mut distances[edge.tail as usize][edge.head as usize];
                *distance = (*distance).min(edge.weight);
            }
        }

        // k has to be the outermost loop: after iteration k every entry is
        // optimal over paths whose intermediate vertices are all in 0..=k.
        for k in 0..number_of_vertices {
            for i in 0..number_of_vertices {
                let distance_i_k = distances[i][k];
                if is_unreachable(distance_i_k) {
                    continue;
                }
                for j in 0..number_of_vertices {
                    let distance_k_j = distances[k][j];
                    if is_unreachable(distance_k_j) {
                        continue;
                    }
                    // negative cycles can push entries arbitrarily far down
                    let candidate = distance_i_k.saturating_add(distance_k_j);
                    if candidate < distances[i][j] {
                        distances[i][j] = candidate;
                    }
                }
            }
        }

        debug!("floyd-warshall finished for {} vertices", number_of_vertices);

        FloydWarshall { distances }
    }

    pub fn distance(&self, source: VertexId, target: VertexId) -> Option<Weight> {
        finite(self.distances[source as usize][target as usize])
    }

    pub fn row(&self, source: VertexId) -> Vec<Option<Weight>> {
        self.distances[source as usize]
            .iter()
            .map(|&distance| finite(distance))
            .collect()
    }

    /// A vertex that can reach itself with negative weight lies on a negative
    /// cycle.
    pub fn has_negative_cycle(&self) -> bool {
        self.distances
            .iter()
            .enumerate()
            .any(|(vertex, row)| row[vertex] < 0)
    }
}
