use std::{process::ExitCode, time::Instant};

use clap::Parser;
use classic_paths::{
    utility::get_progressbar,
    validation::{validate_random_graph, Timings, ValidationReport},
};
use indicatif::ParallelProgressIterator;
use rayon::prelude::*;

/// Generates `graphs` many random graphs and checks that the algorithms agree
/// on them: Dijkstra with Floyd-Warshall, Bellman-Ford with SPFA, the
/// negative cycle detectors with each other, and Prim with Kruskal.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of random graphs
    #[arg(short, long, default_value = "100")]
    graphs: u64,
    /// Number of vertices per graph
    #[arg(short, long, default_value = "60")]
    vertices: u32,
    /// Number of edges per graph
    #[arg(short, long, default_value = "240")]
    edges: u32,
    /// Seed of the first graph, graph `i` uses `seed + i`
    #[arg(short, long, default_value = "0")]
    seed: u64,
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::init();

    let start = Instant::now();
    let reports: Vec<ValidationReport> = (0..args.graphs)
        .into_par_iter()
        .progress_with(get_progressbar("cross validating", args.graphs))
        .map(|index| validate_random_graph(args.seed + index, args.vertices, args.edges))
        .collect();
    println!("took {:?}", start.elapsed());

    let timings: Timings = reports.iter().map(|report| report.timings).sum();
    let number_of_graphs = reports.len().max(1) as u32;
    println!("average time per graph:");
    println!("  dijkstra (all sources) {:?}", timings.dijkstra / number_of_graphs);
    println!("  floyd-warshall         {:?}", timings.floyd_warshall / number_of_graphs);
    println!("  bellman-ford           {:?}", timings.bellman_ford / number_of_graphs);
    println!("  spfa                   {:?}", timings.spfa / number_of_graphs);
    println!("  prim                   {:?}", timings.prim / number_of_graphs);
    println!("  kruskal                {:?}", timings.kruskal / number_of_graphs);

    let mismatches: Vec<&String> = reports
        .iter()
        .flat_map(|report| report.mismatches.iter())
        .collect();
    if mismatches.is_empty() {
        println!("all {} graphs agree", reports.len());
        return ExitCode::SUCCESS;
    }

    for mismatch in mismatches.iter() {
        eprintln!("{}", mismatch);
    }
    eprintln!(
        "{} mismatches on {} graphs",
        mismatches.len(),
        reports.iter().filter(|report| !report.is_ok()).count()
    );
    ExitCode::FAILURE
}
