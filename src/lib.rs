pub mod bipartite;
pub mod error;
pub mod graphs;
pub mod queue;
pub mod search;
pub mod spanning_tree;
pub mod union_find;
pub mod utility;
pub mod validation;
