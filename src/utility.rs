use std::ops::RangeInclusive;

use indicatif::{ProgressBar, ProgressStyle};
use rand::{seq::SliceRandom, Rng};

use crate::graphs::{edge::WeightedEdge, VertexId, Weight};

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    if let Ok(style) =
        ProgressStyle::with_template(" {msg} {wide_bar} {pos}/{len} estimated remaining: {eta_precise}")
    {
        bar.set_style(style);
    }
    bar
}

/// `number_of_edges` directed edges between uniformly drawn endpoints. Self
/// loops and parallel edges may occur.
pub fn random_edges<R: Rng>(
    rng: &mut R,
    number_of_vertices: u32,
    number_of_edges: u32,
    weights: RangeInclusive<Weight>,
) -> Vec<WeightedEdge> {
    if number_of_vertices == 0 {
        return Vec::new();
    }

    (0..number_of_edges)
        .map(|_| {
            WeightedEdge::new(
                rng.gen_range(0..number_of_vertices),
                rng.gen_range(0..number_of_vertices),
                rng.gen_range(weights.clone()),
            )
        })
        .collect()
}

/// Like [`random_edges`] but the first `n - 1` edges form a random spanning
/// tree, so the graph is connected once the edges are used in both
/// directions. Tree edges point away from a random root.
pub fn random_connected_edges<R: Rng>(
    rng: &mut R,
    number_of_vertices: u32,
    number_of_extra_edges: u32,
    weights: RangeInclusive<Weight>,
) -> Vec<WeightedEdge> {
    let mut order: Vec<VertexId> = (0..number_of_vertices).collect();
    order.shuffle(rng);

    let mut edges: Vec<WeightedEdge> = (1..order.len())
        .map(|index| {
            let tail = order[rng.gen_range(0..index)];
            WeightedEdge::new(tail, order[index], rng.gen_range(weights.clone()))
        })
        .collect();

    edges.extend(random_edges(
        rng,
        number_of_vertices,
        number_of_extra_edges,
        weights,
    ));
    edges
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{random_connected_edges, random_edges};
    use crate::union_find::UnionFind;

    #[test]
    fn random_edges_respect_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let edges = random_edges(&mut rng, 10, 200, -3..=4);

        assert_eq!(edges.len(), 200);
        assert!(edges
            .iter()
            .all(|edge| edge.tail < 10 && edge.head < 10 && (-3..=4).contains(&edge.weight)));
        assert!(random_edges(&mut rng, 0, 5, 0..=1).is_empty());
    }

    #[test]
    fn connected_edges_span_all_vertices() {
        let mut rng = StdRng::seed_from_u64(11);
        for number_of_vertices in [1, 2, 17, 64] {
            let edges = random_connected_edges(&mut rng, number_of_vertices, 5, 1..=9);
            assert_eq!(edges.len() as u32, number_of_vertices - 1 + 5);

            let mut union_find = UnionFind::new(number_of_vertices);
            for edge in edges.iter() {
                union_find.union(edge.tail, edge.head);
            }
            assert_eq!(union_find.number_of_sets(), 1);
        }
    }
}
