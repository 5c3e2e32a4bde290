use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use log::debug;

use super::{
    edge::WeightedEdge, graph_functions::add_edge_bidirectional, matrix_graph::MatrixGraph,
    vec_graph::VecGraph, Graph, VertexId, Weight,
};
use crate::error::GraphError;

/// Graph read from the line oriented text format
///
/// ```text
/// n m [extra]
/// u v [w]      m edge lines, 1-based vertices, w defaults to 1
/// a b          optional query lines
/// ```
///
/// Vertices are stored 0-based. Empty lines and lines starting with `#` are
/// skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphInput {
    pub number_of_vertices: u32,
    /// Third header value, e.g. the hop limit of Bellman-Ford or the number of
    /// queries of Floyd-Warshall.
    pub header_extra: Option<u64>,
    pub edges: Vec<WeightedEdge>,
    pub queries: Vec<(VertexId, VertexId)>,
}

impl GraphInput {
    pub fn vec_graph(&self, undirected: bool) -> VecGraph {
        self.build(VecGraph::new(self.number_of_vertices), undirected)
    }

    pub fn matrix_graph(&self, undirected: bool) -> MatrixGraph {
        self.build(MatrixGraph::new(self.number_of_vertices), undirected)
    }

    fn build<G: Graph>(&self, mut graph: G, undirected: bool) -> G {
        for edge in self.edges.iter() {
            if undirected {
                add_edge_bidirectional(&mut graph, edge);
            } else {
                graph.add_edge(edge);
            }
        }
        graph
    }
}

#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    pub fn from_file(path: &Path) -> Result<GraphInput, GraphError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<GraphInput, GraphError> {
        let mut lines = reader
            .lines()
            .enumerate()
            .map(|(index, line)| line.map(|line| (index + 1, line)))
            .filter(|line| match line {
                Ok((_, line)) => {
                    let line = line.trim();
                    !line.is_empty() && !line.starts_with('#')
                }
                Err(_) => true,
            });

        let (header_number, header) = lines.next().ok_or(GraphError::MissingHeader)??;
        let mut values = header.split_whitespace();
        let number_of_vertices: u32 = parse_next(&mut values, header_number, "n")?;
        let number_of_edges: usize = parse_next(&mut values, header_number, "m")?;
        let header_extra = values
            .next()
            .map(|token| parse_token(token, header_number, "extra"))
            .transpose()?;

        // m is untrusted until the edge lines are actually there
        let mut edges = Vec::with_capacity(number_of_edges.min(1 << 16));
        while edges.len() < number_of_edges {
            let Some(line) = lines.next() else {
                return Err(GraphError::MissingEdges {
                    expected: number_of_edges,
                    found: edges.len(),
                });
            };
            let (line_number, line) = line?;

            // u v [w]
            let mut values = line.split_whitespace();
            let tail = parse_vertex(&mut values, line_number, number_of_vertices)?;
            let head = parse_vertex(&mut values, line_number, number_of_vertices)?;
            let weight = values
                .next()
                .map(|token| parse_token::<Weight>(token, line_number, "weight"))
                .transpose()?
                .unwrap_or(1);
            edges.push(WeightedEdge::new(tail, head, weight));
        }

        let mut queries = Vec::new();
        for line in lines {
            let (line_number, line) = line?;
            let mut values = line.split_whitespace();
            let source = parse_vertex(&mut values, line_number, number_of_vertices)?;
            let target = parse_vertex(&mut values, line_number, number_of_vertices)?;
            queries.push((source, target));
        }

        debug!(
            "read graph with {} vertices, {} edges and {} queries",
            number_of_vertices,
            edges.len(),
            queries.len()
        );

        Ok(GraphInput {
            number_of_vertices,
            header_extra,
            edges,
            queries,
        })
    }
}

/// Converts a 1-based vertex id as used by the text format into a 0-based one.
pub fn vertex_from_one_based(vertex: u64, number_of_vertices: u32) -> Result<VertexId, GraphError> {
    if vertex == 0 || vertex > number_of_vertices as u64 {
        return Err(GraphError::UnknownVertex {
            vertex,
            number_of_vertices,
        });
    }
    Ok((vertex - 1) as VertexId)
}

fn parse_token<T: FromStr>(
    token: &str,
    line: usize,
    expected: &'static str,
) -> Result<T, GraphError> {
    token.parse().map_err(|_| GraphError::Malformed {
        line,
        token: token.to_string(),
        expected,
    })
}

fn parse_next<'a, T: FromStr>(
    values: &mut impl Iterator<Item = &'a str>,
    line: usize,
    expected: &'static str,
) -> Result<T, GraphError> {
    let token = values
        .next()
        .ok_or(GraphError::MissingValue { line, expected })?;
    parse_token(token, line, expected)
}

fn parse_vertex<'a>(
    values: &mut impl Iterator<Item = &'a str>,
    line: usize,
    number_of_vertices: u32,
) -> Result<VertexId, GraphError> {
    let vertex: u64 = parse_next(values, line, "vertex")?;
    vertex_from_one_based(vertex, number_of_vertices).map_err(|_| GraphError::VertexOutOfRange {
        line,
        vertex,
        number_of_vertices,
    })
}
