use serde::{Deserialize, Serialize};

use crate::graphs::{finite, path::Path, VertexId, Weight, INFINITY};

/// Per run distance and predecessor storage shared by the single source
/// searches. Every improvement goes through [`DistanceTable::relax`] or
/// [`DistanceTable::relax_edge`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceTable {
    source: Option<VertexId>,
    distances: Vec<Weight>,
    predecessors: Vec<Option<VertexId>>,
}

impl DistanceTable {
    /// Table with `source` at distance zero and every other vertex at
    /// [`INFINITY`].
    pub fn new(number_of_vertices: u32, source: VertexId) -> DistanceTable {
        let mut table = DistanceTable::filled(number_of_vertices, INFINITY);
        table.distances[source as usize] = 0;
        table.source = Some(source);
        table
    }

    /// Table without a source where every vertex starts at `distance`.
    pub fn filled(number_of_vertices: u32, distance: Weight) -> DistanceTable {
        DistanceTable {
            source: None,
            distances: vec![distance; number_of_vertices as usize],
            predecessors: vec![None; number_of_vertices as usize],
        }
    }

    pub fn source(&self) -> Option<VertexId> {
        self.source
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.distances.len() as u32
    }

    /// Raw table entry, possibly a (drifted) sentinel.
    pub fn get_distance(&self, vertex: VertexId) -> Weight {
        self.distances[vertex as usize]
    }

    /// Distance of `vertex` or `None` if it is unreachable.
    pub fn distance(&self, vertex: VertexId) -> Option<Weight> {
        finite(self.get_distance(vertex))
    }

    pub fn distances(&self) -> Vec<Option<Weight>> {
        self.distances.iter().map(|&distance| finite(distance)).collect()
    }

    pub fn raw_distances(&self) -> &[Weight] {
        &self.distances
    }

    pub fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors[vertex as usize]
    }

    /// Lowers the distance of `head` to `candidate` if that is a strict
    /// improvement. Predecessors are left untouched.
    pub fn relax(&mut self, head: VertexId, candidate: Weight) -> bool {
        let current = &mut self.distances[head as usize];
        if candidate < *current {
            *current = candidate;
            return true;
        }
        false
    }

    /// Like [`DistanceTable::relax`], additionally recording `tail` as the
    /// predecessor of `head` on success.
    pub fn relax_edge(&mut self, tail: VertexId, head: VertexId, candidate: Weight) -> bool {
        if self.relax(head, candidate) {
            self.predecessors[head as usize] = Some(tail);
            return true;
        }
        false
    }

    /// Constructs the path to a target vertex, if reachable.
    ///
    /// Traces back from `target` using the predecessors until the source is
    /// reached. Returns `None` if the target is unreachable or the
    /// predecessors do not lead back to the source.
    pub fn get_path(&self, target: VertexId) -> Option<Path> {
        let weight = self.distance(target)?;
        let source = self.source?;

        let mut vertices = vec![target];
        let mut current = target;
        while current != source {
            current = self.get_predecessor(current)?;
            vertices.push(current);

            // a longer chain can only come from a cycle of predecessors
            if vertices.len() > self.distances.len() {
                return None;
            }
        }
        vertices.reverse();

        Some(Path { vertices, weight })
    }
}

#[cfg(test)]
mod tests {
    use super::DistanceTable;
    use crate::graphs::{path::Path, INFINITY};

    #[test]
    fn relax_only_accepts_strict_improvements() {
        let mut table = DistanceTable::new(3, 0);

        assert!(table.relax_edge(0, 1, 5));
        assert!(!table.relax_edge(2, 1, 5));
        assert_eq!(table.get_predecessor(1), Some(0));

        assert!(table.relax_edge(2, 1, 4));
        assert_eq!(table.get_predecessor(1), Some(2));
        assert_eq!(table.distance(2), None);
        assert_eq!(table.get_distance(2), INFINITY);
    }

    #[test]
    fn drifted_sentinel_is_unreachable() {
        let mut table = DistanceTable::new(2, 0);
        assert!(table.relax(1, INFINITY - 10));

        assert_eq!(table.distance(1), None);
        assert_eq!(table.distances(), vec![Some(0), None]);
    }

    #[test]
    fn path_follows_predecessors() {
        let mut table = DistanceTable::new(4, 0);
        table.relax_edge(0, 1, 1);
        table.relax_edge(1, 2, 3);

        assert_eq!(
            table.get_path(2),
            Some(Path {
                vertices: vec![0, 1, 2],
                weight: 3
            })
        );
        assert_eq!(
            table.get_path(0),
            Some(Path {
                vertices: vec![0],
                weight: 0
            })
        );
        assert_eq!(table.get_path(3), None);
    }
}
