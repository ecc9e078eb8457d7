//! Directed graph storage and breadth-first path queries.
//!
//! - `digraph`: the value-keyed adjacency store, its iterators, and the BFS path engine
//! - `error`: the error returned by queries that require an existing vertex

pub mod digraph;
pub mod error;

pub use digraph::{Adjacent, Bfs, Digraph, Edges, Vertices, UNREACHABLE};
pub use error::GraphError;
