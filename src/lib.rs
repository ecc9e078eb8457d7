//! # `digraph` - Generic Directed Graph
//!
//! An in-memory directed graph over any `Hash + Eq` vertex type, with vertex and
//! edge bookkeeping, adjacency queries, structural equality, and breadth-first
//! shortest paths.
//!
//! ## Guarantees
//!
//! - **Value identity**: two vertices are the same node iff they compare equal.
//! - **No dangling edges**: every successor is itself a vertex; removing a vertex
//!   removes every edge that touches it.
//! - **No duplicate edges**: re-adding an edge is a no-op.
//! - **Deterministic order**: vertices iterate in insertion order, successors in
//!   edge insertion order, and shortest-path ties resolve by that edge order.
//!
//! ## Failure Policy
//!
//! Only [`Digraph::degree`] and [`Digraph::in_degree`] fail, with
//! [`GraphError::NotFound`]. Every other query treats an absent vertex as
//! "nothing there": empty iterators, `false`, empty paths, or [`UNREACHABLE`].
//!
//! ## Example
//!
//! ```rust
//! use digraph::{Digraph, UNREACHABLE};
//!
//! let mut g = Digraph::new();
//! g.add_edge("foo", "bar");
//! g.add_edge("bar", "baloney");
//! g.add_edge("baloney", "ham");
//!
//! assert_eq!(g.path_length("foo", "ham"), 3);
//! assert_eq!(g.path_length("ham", "foo"), UNREACHABLE);
//! assert_eq!(g.get_path("foo", "baloney"), vec![&"foo", &"bar", &"baloney"]);
//! assert_eq!(g.to_string(), "foo: bar\nbar: baloney\nbaloney: ham\nham:\n");
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod graph;

pub use graph::{Adjacent, Bfs, Digraph, Edges, GraphError, Vertices, UNREACHABLE};
