//! Shortest path searches.
//!
//! [`dijkstra`], [`bellman_ford`] and [`spfa`] compute single source distances
//! and share the relaxation primitive of [`distance_table`].
//! [`floyd_warshall`] computes all pairs at once.

pub mod bellman_ford;
pub mod dijkstra;
pub mod distance_table;
pub mod floyd_warshall;
pub mod spfa;
