use serde::{Deserialize, Serialize};

use super::{VertexId, Weight};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub tail: VertexId,
    pub head: VertexId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub tail: VertexId,
    pub head: VertexId,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(tail: VertexId, head: VertexId, weight: Weight) -> WeightedEdge {
        WeightedEdge { tail, head, weight }
    }

    pub fn remove_tail(&self) -> TaillessEdge {
        TaillessEdge {
            head: self.head,
            weight: self.weight,
        }
    }

    pub fn reversed(&self) -> WeightedEdge {
        WeightedEdge {
            tail: self.head,
            head: self.tail,
            weight: self.weight,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaillessEdge {
    pub head: VertexId,
    pub weight: Weight,
}

impl TaillessEdge {
    pub fn set_tail(&self, tail: VertexId) -> WeightedEdge {
        WeightedEdge {
            tail,
            head: self.head,
            weight: self.weight,
        }
    }
}
