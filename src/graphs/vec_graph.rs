use serde::{Deserialize, Serialize};

use super::{
    edge::{Edge, TaillessEdge, WeightedEdge},
    Graph, VertexId, Weight,
};

/// Adjacency list keeping every inserted edge, parallel edges and self-loops
/// included. Out edges are reported in insertion order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VecGraph {
    edges: Vec<Vec<TaillessEdge>>,
}

impl VecGraph {
    pub fn new(number_of_vertices: u32) -> VecGraph {
        VecGraph {
            edges: vec![Vec::new(); number_of_vertices as usize],
        }
    }

    pub fn from_edges(number_of_vertices: u32, edges: &[WeightedEdge]) -> VecGraph {
        let mut graph = VecGraph::new(number_of_vertices);
        edges.iter().for_each(|edge| graph.add_edge(edge));
        graph
    }
}

impl Graph for VecGraph {
    fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    fn number_of_edges(&self) -> u32 {
        self.edges.iter().map(Vec::len).sum::<usize>() as u32
    }

    fn out_edges(
        &self,
        tail: VertexId,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        // Struct is needed as tail would otherwise not live long enough.
        struct EdgeIterator<'a> {
            edge_iter: std::slice::Iter<'a, TaillessEdge>,
            tail: VertexId,
        }

        impl<'a> Iterator for EdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                self.edge_iter
                    .next()
                    .map(|tailless_edge| tailless_edge.set_tail(self.tail))
            }
        }

        impl<'a> ExactSizeIterator for EdgeIterator<'a> {
            fn len(&self) -> usize {
                self.edge_iter.len()
            }
        }

        Box::new(EdgeIterator {
            edge_iter: self.edges[tail as usize].iter(),
            tail,
        })
    }

    fn get_edge_weight(&self, edge: &Edge) -> Option<Weight> {
        self.edges
            .get(edge.tail as usize)?
            .iter()
            .filter(|tailless_edge| tailless_edge.head == edge.head)
            .map(|tailless_edge| tailless_edge.weight)
            .min()
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
        self.edges[edge.tail as usize].push(edge.remove_tail());
    }
}
