use classic_paths::{
    bipartite::{is_bipartite, two_coloring},
    graphs::{
        edge::WeightedEdge, graph_functions::add_edge_bidirectional, matrix_graph::MatrixGraph,
        vec_graph::VecGraph,
    },
    search::{
        bellman_ford::BellmanFord, dijkstra::Dijkstra, floyd_warshall::FloydWarshall, spfa::Spfa,
    },
    spanning_tree::{kruskal::kruskal, prim::prim},
    utility::{random_connected_edges, random_edges},
    validation::validate_random_graph,
};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

fn undirected(number_of_vertices: u32, edges: &[WeightedEdge]) -> VecGraph {
    let mut graph = VecGraph::new(number_of_vertices);
    for edge in edges {
        add_edge_bidirectional(&mut graph, edge);
    }
    graph
}

#[test]
fn dijkstra_matches_floyd_warshall() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..25 {
        let number_of_vertices = rng.gen_range(1..30);
        let edges = random_edges(&mut rng, number_of_vertices, 4 * number_of_vertices, 0..=20);
        let graph = VecGraph::from_edges(number_of_vertices, &edges);

        let floyd_warshall = FloydWarshall::new(&graph);
        let dijkstra = Dijkstra::new(&graph);
        for source in 0..number_of_vertices {
            assert_eq!(
                dijkstra.single_source(source).distances(),
                floyd_warshall.row(source)
            );
        }
    }
}

#[test]
fn bellman_ford_matches_spfa_on_dags() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..25 {
        let number_of_vertices = rng.gen_range(2..40);
        // edges only go from smaller to larger ids, so there is no cycle
        let edges: Vec<WeightedEdge> = random_edges(&mut rng, number_of_vertices, 80, -20..=20)
            .into_iter()
            .filter(|edge| edge.tail < edge.head)
            .collect();
        let graph = VecGraph::from_edges(number_of_vertices, &edges);

        let bellman_ford = BellmanFord::new(&graph);
        let spfa = Spfa::new(&graph);
        assert!(!spfa.has_negative_cycle());
        for source in 0..number_of_vertices {
            assert_eq!(
                bellman_ford
                    .with_hop_limit(source, number_of_vertices - 1)
                    .distances(),
                spfa.single_source(source).unwrap().distances()
            );
        }
    }
}

#[test]
fn negative_cycle_is_found_iff_present() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..25 {
        let number_of_vertices = rng.gen_range(3..30);
        let mut edges: Vec<WeightedEdge> =
            random_edges(&mut rng, number_of_vertices, 60, -5..=10)
                .into_iter()
                .filter(|edge| edge.tail < edge.head)
                .collect();
        let graph = VecGraph::from_edges(number_of_vertices, &edges);
        assert!(!Spfa::new(&graph).has_negative_cycle());

        // close a cycle a -> b -> c -> a of total weight -1
        let mut cycle: Vec<u32> = (0..number_of_vertices).collect();
        cycle.shuffle(&mut rng);
        let (a, b, c) = (cycle[0], cycle[1], cycle[2]);
        edges.push(WeightedEdge::new(a, b, 2));
        edges.push(WeightedEdge::new(b, c, 2));
        edges.push(WeightedEdge::new(c, a, -5));
        let graph = VecGraph::from_edges(number_of_vertices, &edges);

        assert!(Spfa::new(&graph).has_negative_cycle());
        assert!(FloydWarshall::new(&graph).has_negative_cycle());
        assert!(BellmanFord::new(&graph).has_negative_cycle(a));
    }
}

#[test]
fn prim_and_kruskal_agree() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..25 {
        let number_of_vertices = rng.gen_range(1..40);
        let edges = random_connected_edges(&mut rng, number_of_vertices, 50, 0..=30);

        let graph = undirected(number_of_vertices, &edges);
        let mut matrix = MatrixGraph::new(number_of_vertices);
        for edge in edges.iter() {
            add_edge_bidirectional(&mut matrix, edge);
        }

        let prim_tree = prim(&matrix).unwrap();
        let kruskal_tree = kruskal(&graph).unwrap();
        assert_eq!(prim_tree.weight, kruskal_tree.weight);
        assert_eq!(
            prim_tree.edges.len() as u32,
            number_of_vertices.saturating_sub(1)
        );
        assert_eq!(kruskal_tree.edges.len(), prim_tree.edges.len());
    }
}

#[test]
fn cycles_and_trees_are_coloured_correctly() {
    let mut rng = StdRng::seed_from_u64(5);
    for length in 3..40 {
        let cycle: Vec<WeightedEdge> = (0..length)
            .map(|vertex| WeightedEdge::new(vertex, (vertex + 1) % length, 1))
            .collect();
        assert_eq!(is_bipartite(&undirected(length, &cycle)), length % 2 == 0);

        let tree = random_connected_edges(&mut rng, length, 0, 1..=1);
        let graph = undirected(length, &tree);
        let sides = two_coloring(&graph).unwrap();
        for edge in tree {
            assert_ne!(sides[edge.tail as usize], sides[edge.head as usize]);
        }
    }
}

#[test]
fn random_graphs_cross_validate() {
    for seed in 100..110 {
        let report = validate_random_graph(seed, 25, 70);
        assert!(report.is_ok(), "{:?}", report.mismatches);
    }
}
