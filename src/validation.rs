//! Cross checks of the algorithms against each other on random graphs.

use std::{
    iter::Sum,
    ops::Add,
    time::{Duration, Instant},
};

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{
    graphs::{
        graph_functions::add_edge_bidirectional, matrix_graph::MatrixGraph, vec_graph::VecGraph,
        Graph,
    },
    search::{bellman_ford::BellmanFord, dijkstra::Dijkstra, floyd_warshall::FloydWarshall, spfa::Spfa},
    spanning_tree::{kruskal::kruskal, prim::prim},
    utility::{random_connected_edges, random_edges},
};

/// Time spent in each algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Timings {
    pub dijkstra: Duration,
    pub floyd_warshall: Duration,
    pub bellman_ford: Duration,
    pub spfa: Duration,
    pub prim: Duration,
    pub kruskal: Duration,
}

impl Add for Timings {
    type Output = Timings;

    fn add(self, other: Timings) -> Timings {
        Timings {
            dijkstra: self.dijkstra + other.dijkstra,
            floyd_warshall: self.floyd_warshall + other.floyd_warshall,
            bellman_ford: self.bellman_ford + other.bellman_ford,
            spfa: self.spfa + other.spfa,
            prim: self.prim + other.prim,
            kruskal: self.kruskal + other.kruskal,
        }
    }
}

impl Sum for Timings {
    fn sum<I: Iterator<Item = Timings>>(iter: I) -> Timings {
        iter.fold(Timings::default(), Add::add)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub seed: u64,
    pub mismatches: Vec<String>,
    pub timings: Timings,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Runs every check on two graphs derived from `seed`.
///
/// The first graph is undirected, connected and non-negative. It compares
/// Dijkstra with Floyd-Warshall from every source and Prim with Kruskal. The
/// second graph is directed with negative weights. It compares Bellman-Ford
/// with SPFA from vertex 0 and the negative cycle detectors with each other.
pub fn validate_random_graph(
    seed: u64,
    number_of_vertices: u32,
    number_of_edges: u32,
) -> ValidationReport {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut report = ValidationReport {
        seed,
        ..Default::default()
    };

    let extra_edges = number_of_edges.saturating_sub(number_of_vertices.saturating_sub(1));
    let edges = random_connected_edges(&mut rng, number_of_vertices, extra_edges, 0..=100);
    let mut graph = VecGraph::new(number_of_vertices);
    let mut matrix = MatrixGraph::new(number_of_vertices);
    for edge in edges.iter() {
        add_edge_bidirectional(&mut graph, edge);
        add_edge_bidirectional(&mut matrix, edge);
    }
    check_non_negative(&graph, &matrix, &mut report);

    let edges = random_edges(&mut rng, number_of_vertices, number_of_edges, -10..=50);
    let graph = VecGraph::from_edges(number_of_vertices, &edges);
    check_negative(&graph, &mut report);

    report
}

fn check_non_negative(graph: &VecGraph, matrix: &MatrixGraph, report: &mut ValidationReport) {
    let start = Instant::now();
    let floyd_warshall = FloydWarshall::new(graph);
    report.timings.floyd_warshall += start.elapsed();

    let dijkstra = Dijkstra::new(graph);
    for source in 0..graph.number_of_vertices() {
        let start = Instant::now();
        let table = dijkstra.single_source(source);
        report.timings.dijkstra += start.elapsed();

        if table.distances() != floyd_warshall.row(source) {
            report.mismatches.push(format!(
                "seed {}: dijkstra and floyd-warshall differ from source {}",
                report.seed, source
            ));
        }
    }

    let start = Instant::now();
    let prim_tree = prim(matrix);
    report.timings.prim += start.elapsed();

    let start = Instant::now();
    let kruskal_tree = kruskal(graph);
    report.timings.kruskal += start.elapsed();

    let prim_weight = prim_tree.map(|tree| tree.weight);
    let kruskal_weight = kruskal_tree.map(|tree| tree.weight);
    if prim_weight != kruskal_weight || prim_weight.is_none() {
        report.mismatches.push(format!(
            "seed {}: prim found {:?} but kruskal found {:?}",
            report.seed, prim_weight, kruskal_weight
        ));
    }
}

fn check_negative(graph: &VecGraph, report: &mut ValidationReport) {
    if graph.number_of_vertices() == 0 {
        return;
    }

    let spfa = Spfa::new(graph);
    let bellman_ford = BellmanFord::new(graph);

    let start = Instant::now();
    let spfa_table = spfa.single_source(0);
    report.timings.spfa += start.elapsed();

    let start = Instant::now();
    let bellman_ford_table = bellman_ford.with_hop_limit(0, bellman_ford.hop_limit());
    let reaches_negative_cycle = bellman_ford.has_negative_cycle(0);
    report.timings.bellman_ford += start.elapsed();

    match spfa_table {
        Some(spfa_table) => {
            if reaches_negative_cycle {
                report.mismatches.push(format!(
                    "seed {}: only bellman-ford reaches a negative cycle from 0",
                    report.seed
                ));
            } else if spfa_table.distances() != bellman_ford_table.distances() {
                report.mismatches.push(format!(
                    "seed {}: bellman-ford and spfa differ from source 0",
                    report.seed
                ));
            }
        }
        None if !reaches_negative_cycle => {
            report.mismatches.push(format!(
                "seed {}: only spfa reaches a negative cycle from 0",
                report.seed
            ));
        }
        None => {}
    }

    let has_negative_cycle = spfa.has_negative_cycle();
    if has_negative_cycle != FloydWarshall::new(graph).has_negative_cycle() {
        report.mismatches.push(format!(
            "seed {}: spfa and floyd-warshall disagree on a negative cycle",
            report.seed
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::validate_random_graph;

    #[test]
    fn small_random_graphs_agree() {
        for seed in 0..20 {
            let report = validate_random_graph(seed, 12, 30);
            assert!(report.is_ok(), "{:?}", report.mismatches);
        }
    }

    #[test]
    fn empty_graph_has_trivial_tree() {
        assert!(validate_random_graph(3, 0, 0).is_ok());
        assert!(validate_random_graph(3, 1, 0).is_ok());
    }
}
