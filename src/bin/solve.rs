use std::{error::Error, io, path::PathBuf};

use classic_paths::{
    bipartite::{two_coloring, Side},
    graphs::{
        graph_factory::{vertex_from_one_based, GraphFactory, GraphInput},
        graph_functions::{validate_hop_margin, validate_infinity_margin, validate_non_negative},
        Graph, VertexId, Weight,
    },
    search::{
        bellman_ford::BellmanFord, dijkstra::Dijkstra, floyd_warshall::FloydWarshall, spfa::Spfa,
    },
    spanning_tree::{kruskal::kruskal, prim::prim, SpanningTree},
};
use clap::{Parser, ValueEnum};
use serde::Serialize;

#[derive(Clone, Copy, Debug, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
enum Algorithm {
    /// Shortest path from source to target, non-negative weights only
    Dijkstra,
    /// Shortest path using at most `--hops` edges (or the third header value)
    BellmanFord,
    /// Shortest path with negative weights
    Spfa,
    /// Whether the graph contains a negative cycle anywhere
    NegativeCycle,
    /// All pairs distances, answers the query lines if there are any
    Floyd,
    /// Minimum spanning tree weight, dense variant
    Prim,
    /// Minimum spanning tree weight, sorted edges
    Kruskal,
    /// Whether the graph is two-colourable
    Bipartite,
}

/// Runs a single algorithm on a graph in the text format `n m [extra]`
/// followed by `m` lines `u v [w]` with 1-based vertices and optional query
/// lines `a b`. The spanning tree and bipartite algorithms always read the
/// edges as undirected.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(value_enum)]
    algorithm: Algorithm,
    /// Input file, stdin if omitted
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// 1-based source vertex, defaults to 1
    #[arg(short, long)]
    source: Option<u64>,
    /// 1-based target vertex, defaults to n
    #[arg(short, long)]
    target: Option<u64>,
    /// Hop limit of Bellman-Ford
    #[arg(long)]
    hops: Option<u32>,
    /// Add every edge in both directions
    #[arg(short, long)]
    undirected: bool,
    /// Print a JSON report instead of the plain answer
    #[arg(short, long)]
    json: bool,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
enum Answer {
    Distance {
        source: u64,
        target: u64,
        distance: Option<Weight>,
        path: Option<Vec<u64>>,
        negative_cycle: bool,
    },
    NegativeCycle(bool),
    Queries(Vec<QueryAnswer>),
    Matrix(Vec<Vec<Option<Weight>>>),
    SpanningTree(Option<SpanningTreeReport>),
    Bipartite(Option<Vec<Side>>),
}

#[derive(Debug, PartialEq, Serialize)]
struct QueryAnswer {
    source: u64,
    target: u64,
    distance: Option<Weight>,
}

#[derive(Debug, PartialEq, Serialize)]
struct SpanningTreeReport {
    weight: Weight,
    /// `(tail, head, weight)` with 1-based vertices
    edges: Vec<(u64, u64, Weight)>,
}

impl From<SpanningTree> for SpanningTreeReport {
    fn from(tree: SpanningTree) -> Self {
        SpanningTreeReport {
            weight: tree.weight,
            edges: tree
                .edges
                .iter()
                .map(|edge| (one_based(edge.tail), one_based(edge.head), edge.weight))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Report {
    algorithm: Algorithm,
    number_of_vertices: u32,
    number_of_edges: usize,
    answer: Answer,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    env_logger::init();

    let input = match &args.input {
        Some(path) => GraphFactory::from_file(path)?,
        None => GraphFactory::from_reader(io::stdin().lock())?,
    };

    let answer = solve(&args, &input)?;

    if args.json {
        let report = Report {
            algorithm: args.algorithm,
            number_of_vertices: input.number_of_vertices,
            number_of_edges: input.edges.len(),
            answer,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_plain(&answer);
    }

    Ok(())
}

fn solve(args: &Args, input: &GraphInput) -> Result<Answer, Box<dyn Error>> {
    let number_of_vertices = input.number_of_vertices;
    let source = args.source.unwrap_or(1);
    let target = args.target.unwrap_or(number_of_vertices as u64);

    let answer = match args.algorithm {
        Algorithm::Dijkstra => {
            let graph = input.vec_graph(args.undirected);
            validate_non_negative(&graph)?;
            validate_infinity_margin(&graph)?;
            let (source_id, target_id) = endpoints(source, target, number_of_vertices)?;

            let path = Dijkstra::new(&graph).shortest_path(source_id, target_id);
            Answer::Distance {
                source,
                target,
                distance: path.as_ref().map(|path| path.weight),
                path: path.map(|path| path.vertices.into_iter().map(one_based).collect()),
                negative_cycle: false,
            }
        }
        Algorithm::BellmanFord => {
            let graph = input.vec_graph(args.undirected);
            validate_infinity_margin(&graph)?;
            let (source_id, target_id) = endpoints(source, target, number_of_vertices)?;

            let hop_limit = match (args.hops, input.header_extra) {
                (Some(hops), _) => hops,
                (None, Some(extra)) => u32::try_from(extra)?,
                (None, None) => number_of_vertices.saturating_sub(1),
            };
            validate_hop_margin(&graph, hop_limit)?;
            let distance = BellmanFord::new(&graph)
                .with_hop_limit(source_id, hop_limit)
                .distance(target_id);
            Answer::Distance {
                source,
                target,
                distance,
                path: None,
                negative_cycle: false,
            }
        }
        Algorithm::Spfa => {
            let graph = input.vec_graph(args.undirected);
            validate_infinity_margin(&graph)?;
            let (source_id, target_id) = endpoints(source, target, number_of_vertices)?;

            match Spfa::new(&graph).single_source(source_id) {
                Some(table) => {
                    let path = table.get_path(target_id);
                    Answer::Distance {
                        source,
                        target,
                        distance: table.distance(target_id),
                        path: path.map(|path| path.vertices.into_iter().map(one_based).collect()),
                        negative_cycle: false,
                    }
                }
                None => Answer::Distance {
                    source,
                    target,
                    distance: None,
                    path: None,
                    negative_cycle: true,
                },
            }
        }
        Algorithm::NegativeCycle => {
            let graph = input.vec_graph(args.undirected);
            validate_infinity_margin(&graph)?;
            Answer::NegativeCycle(Spfa::new(&graph).has_negative_cycle())
        }
        Algorithm::Floyd => {
            let graph = input.vec_graph(args.undirected);
            validate_infinity_margin(&graph)?;
            let floyd_warshall = FloydWarshall::new(&graph);

            if input.queries.is_empty() {
                Answer::Matrix(
                    (0..graph.number_of_vertices())
                        .map(|vertex| floyd_warshall.row(vertex))
                        .collect(),
                )
            } else {
                Answer::Queries(
                    input
                        .queries
                        .iter()
                        .map(|&(source, target)| QueryAnswer {
                            source: one_based(source),
                            target: one_based(target),
                            distance: floyd_warshall.distance(source, target),
                        })
                        .collect(),
                )
            }
        }
        Algorithm::Prim => {
            let graph = input.matrix_graph(true);
            validate_non_negative(&graph)?;
            validate_infinity_margin(&graph)?;
            Answer::SpanningTree(prim(&graph).map(SpanningTreeReport::from))
        }
        Algorithm::Kruskal => {
            let graph = input.vec_graph(true);
            validate_infinity_margin(&graph)?;
            Answer::SpanningTree(kruskal(&graph).map(SpanningTreeReport::from))
        }
        Algorithm::Bipartite => {
            let graph = input.vec_graph(true);
            Answer::Bipartite(two_coloring(&graph))
        }
    };

    Ok(answer)
}

fn print_plain(answer: &Answer) {
    match answer {
        Answer::Distance {
            negative_cycle: true,
            ..
        } => println!("negative cycle"),
        Answer::Distance { distance, .. } => println!("{}", plain_distance(*distance)),
        Answer::NegativeCycle(found) => println!("{}", yes_or_no(*found)),
        Answer::Queries(queries) => {
            for query in queries {
                println!("{}", plain_distance(query.distance));
            }
        }
        Answer::Matrix(rows) => {
            for row in rows {
                let row: Vec<String> = row.iter().map(|&distance| plain_distance(distance)).collect();
                println!("{}", row.join(" "));
            }
        }
        Answer::SpanningTree(tree) => match tree {
            Some(tree) => println!("{}", tree.weight),
            None => println!("impossible"),
        },
        Answer::Bipartite(sides) => println!("{}", yes_or_no(sides.is_some())),
    }
}

fn plain_distance(distance: Option<Weight>) -> String {
    match distance {
        Some(distance) => distance.to_string(),
        None => "impossible".to_string(),
    }
}

fn yes_or_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

fn endpoints(
    source: u64,
    target: u64,
    number_of_vertices: u32,
) -> Result<(VertexId, VertexId), Box<dyn Error>> {
    Ok((
        vertex_from_one_based(source, number_of_vertices)?,
        vertex_from_one_based(target, number_of_vertices)?,
    ))
}

fn one_based(vertex: VertexId) -> u64 {
    vertex as u64 + 1
}
