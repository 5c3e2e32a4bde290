use std::cmp::Ordering;

use crate::graphs::{VertexId, Weight};

pub mod heap_queue;
pub mod radix_queue;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DijkstraQueueElement {
    pub weight: Weight,
    pub vertex: VertexId,
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl Ord for DijkstraQueueElement {
    fn cmp(&self, other: &Self) -> Ordering {
        // Both orderings are flipped: the smallest weight comes first and ties
        // go to the smaller vertex id.
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for DijkstraQueueElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl DijkstraQueueElement {
    pub fn new(weight: Weight, vertex: VertexId) -> DijkstraQueueElement {
        DijkstraQueueElement { weight, vertex }
    }
}

/// Min-priority queue without a decrease key operation. A vertex may be
/// pushed several times; outdated entries are left for the caller to skip.
pub trait DijkstraQueue {
    fn push(&mut self, state: DijkstraQueueElement);
    fn pop(&mut self) -> Option<DijkstraQueueElement>;
    fn is_empty(&self) -> bool;
    fn clear(&mut self);
}
