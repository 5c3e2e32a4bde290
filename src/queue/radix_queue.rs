use radix_heap::RadixHeapMap;

use super::{DijkstraQueue, DijkstraQueueElement};
use crate::graphs::{VertexId, Weight};

/// Monotone queue: a pushed weight must not be smaller than the last popped
/// one, which holds for Dijkstra on non-negative weights.
#[derive(Clone)]
pub struct RadixQueue {
    heap: RadixHeapMap<Weight, VertexId>,
}

impl Default for RadixQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl RadixQueue {
    pub fn new() -> RadixQueue {
        RadixQueue {
            heap: RadixHeapMap::new(),
        }
    }
}

impl DijkstraQueue for RadixQueue {
    fn push(&mut self, state: DijkstraQueueElement) {
        // RadixHeapMap is a max-heap
        self.heap.push(-state.weight, state.vertex);
    }

    fn pop(&mut self) -> Option<DijkstraQueueElement> {
        let (negative_weight, vertex) = self.heap.pop()?;
        Some(DijkstraQueueElement {
            weight: -negative_weight,
            vertex,
        })
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}
