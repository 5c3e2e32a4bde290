//! Error types for reading and validating graphs.

use thiserror::Error;

use crate::graphs::{VertexId, Weight};

#[derive(Error, Debug)]
pub enum GraphError {
    /// IO error while reading the input.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input ended before the header line.
    #[error("missing header line `n m`")]
    MissingHeader,

    /// A token could not be parsed as a number.
    #[error("line {line}: unable to parse `{token}` as {expected}")]
    Malformed {
        line: usize,
        token: String,
        expected: &'static str,
    },

    /// A line has fewer values than required.
    #[error("line {line}: expected {expected} values")]
    MissingValue { line: usize, expected: &'static str },

    /// The input ended before all announced edges were read.
    #[error("expected {expected} edges, found {found}")]
    MissingEdges { expected: usize, found: usize },

    /// A vertex id lies outside of `1..=n`.
    #[error("line {line}: vertex {vertex} is not in 1..={number_of_vertices}")]
    VertexOutOfRange {
        line: usize,
        vertex: u64,
        number_of_vertices: u32,
    },

    /// A negative edge was handed to an algorithm that requires non-negative
    /// weights.
    #[error("edge {tail} -> {head} has negative weight {weight}")]
    NegativeWeight {
        tail: VertexId,
        head: VertexId,
        weight: Weight,
    },

    /// Distances of this graph could reach the unreachable threshold.
    #[error("max |weight| {max_abs_weight} times {number_of_vertices} vertices exceeds the distance margin")]
    InfinityMarginExceeded {
        max_abs_weight: Weight,
        number_of_vertices: u32,
    },

    /// Bellman-Ford would run enough rounds to drift the sentinel into the
    /// reachable range.
    #[error("max |weight| {max_abs_weight} times hop limit {hop_limit} exceeds the distance margin")]
    HopMarginExceeded { max_abs_weight: Weight, hop_limit: u32 },

    /// A vertex passed by the caller is not part of the graph.
    #[error("vertex {vertex} is not in 1..={number_of_vertices}")]
    UnknownVertex { vertex: u64, number_of_vertices: u32 },
}
