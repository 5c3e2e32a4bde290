use serde::{Deserialize, Serialize};

use super::{
    edge::{Edge, WeightedEdge},
    Graph, VertexId, Weight,
};

/// Dense adjacency matrix. Only the cheapest of several parallel edges is
/// kept.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MatrixGraph {
    edges: Vec<Vec<Option<Weight>>>, // [tail][head] = Option<Weight>
}

impl MatrixGraph {
    pub fn new(number_of_vertices: u32) -> MatrixGraph {
        let number_of_vertices = number_of_vertices as usize;
        MatrixGraph {
            edges: vec![vec![None; number_of_vertices]; number_of_vertices],
        }
    }

    pub fn from_edges(number_of_vertices: u32, edges: &[WeightedEdge]) -> MatrixGraph {
        let mut graph = MatrixGraph::new(number_of_vertices);
        edges.iter().for_each(|edge| graph.add_edge(edge));
        graph
    }

    /// Row of `tail`, indexed by head.
    pub fn row(&self, tail: VertexId) -> &[Option<Weight>] {
        &self.edges[tail as usize]
    }
}

impl Graph for MatrixGraph {
    fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    fn number_of_edges(&self) -> u32 {
        self.edges.iter().flatten().flatten().count() as u32
    }

    fn out_edges(
        &self,
        source: VertexId,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        struct OutEdgeIterator<'a> {
            source: VertexId,
            current_head: VertexId,
            row: &'a [Option<Weight>],
        }

        impl<'a> Iterator for OutEdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                while (self.current_head as usize) < self.row.len() {
                    let head = self.current_head;
                    self.current_head += 1;

                    if let Some(weight) = self.row[head as usize] {
                        return Some(WeightedEdge::new(self.source, head, weight));
                    }
                }
                None
            }
        }

        impl<'a> ExactSizeIterator for OutEdgeIterator<'a> {
            fn len(&self) -> usize {
                self.row[self.current_head as usize..].iter().flatten().count()
            }
        }

        Box::new(OutEdgeIterator {
            source,
            current_head: 0,
            row: &self.edges[source as usize],
        })
    }

    fn get_edge_weight(&self, edge: &Edge) -> Option<Weight> {
        *self
            .edges
            .get(edge.tail as usize)?
            .get(edge.head as usize)?
    }

    fn add_edge(&mut self, edge: &WeightedEdge) {
        let number_of_vertices = self.number_of_vertices();
        assert!(
            edge.tail < number_of_vertices && edge.head < number_of_vertices,
            "edge {} -> {} exceeds capacity of {} vertices",
            edge.tail,
            edge.head,
            number_of_vertices
        );

        let current_edge = &mut self.edges[edge.tail as usize][edge.head as usize];
        if edge.weight < current_edge.unwrap_or(Weight::MAX) {
            *current_edge = Some(edge.weight);
        }
    }
}
