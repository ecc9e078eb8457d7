//! A generic directed graph keyed by vertex value.
//!
//! Vertices are any `Hash + Eq` type and are identified by equality. Each vertex
//! owns an ordered, duplicate-free list of successors.
//!
//! Memory layout:
//! - `vertices`: insertion-ordered `IndexSet<V>` mapping each vertex to its position
//! - `adjacency`: `Vec<Vec<usize>>` parallel to `vertices`, one successor row per vertex
//!
//! Rows store successor *positions*. Removing a vertex shifts every position above it
//! down by one, so `remove_vertex` renumbers all remaining rows in the same pass that
//! drops edges into the removed vertex.

use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;

use indexmap::IndexSet;

use crate::graph::error::GraphError;

pub use iter::{Adjacent, Edges, Vertices};
pub use traversal::{Bfs, UNREACHABLE};

/// A directed graph over vertices of type `V`.
///
/// Lookups accept any borrowed form of `V`, so a `Digraph<String>` can be queried
/// with `&str`.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Hash insert plus an empty row |
/// | `add_edge` | \(O(\text{out-degree})\) | Checks for an existing edge first |
/// | `remove_vertex` | \(O(n + m)\) | Shift-removes the vertex and renumbers every row |
/// | `remove_edge` | \(O(\text{out-degree})\) | Linear scan of one row |
/// | `degree` | \(O(1)\) | Row length |
/// | `in_degree` | \(O(n + m)\) | Scans all rows |
/// | `get_path` | \(O(n + m)\) | Breadth-first search with parent links |
#[derive(Clone)]
pub struct Digraph<V> {
    vertices: IndexSet<V>,
    adjacency: Vec<Vec<usize>>,
}

impl<V> Digraph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: IndexSet::new(),
            adjacency: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `vertex_capacity` vertices.
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            vertices: IndexSet::with_capacity(vertex_capacity),
            adjacency: Vec::with_capacity(vertex_capacity),
        }
    }

    /// Returns the number of vertices.
    ///
    /// # Panics
    /// Panics if the vertex set and the adjacency rows have diverged, which means
    /// the store is corrupt.
    pub fn vertex_count(&self) -> usize {
        assert_eq!(
            self.vertices.len(),
            self.adjacency.len(),
            "vertex set has {} entries while adjacency has {} rows",
            self.vertices.len(),
            self.adjacency.len()
        );
        self.vertices.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns `true` if the graph has no vertices (and therefore no edges).
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over all vertices in insertion order.
    pub fn vertices(&self) -> Vertices<'_, V> {
        Vertices::new(self.vertices.iter())
    }

    /// Iterates over all edges `(from, to)`, grouped by source in vertex insertion
    /// order and by destination in edge insertion order.
    pub fn edges(&self) -> Edges<'_, V> {
        Edges::new(&self.vertices, &self.adjacency)
    }

    /// Removes all vertices and edges.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.adjacency.clear();
    }
}

impl<V: Hash + Eq> Digraph<V> {
    #[inline]
    fn position<Q>(&self, vertex: &Q) -> Option<usize>
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.vertices.get_index_of(vertex)
    }

    /// Returns the position of `vertex`, inserting it with an empty row if absent.
    fn intern(&mut self, vertex: V) -> (usize, bool) {
        let (index, inserted) = self.vertices.insert_full(vertex);
        if inserted {
            self.adjacency.push(Vec::new());
            #[cfg(feature = "tracing")]
            tracing::trace!(position = index, "vertex added");
        }
        (index, inserted)
    }

    /// Adds a vertex with no edges.
    ///
    /// Returns `false` (and leaves the graph untouched) if an equal vertex is
    /// already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.intern(vertex).1
    }

    /// Adds a directed edge `from -> to`, adding either endpoint that is missing.
    ///
    /// Returns `false` if the edge was already present; the graph never holds
    /// duplicate edges.
    pub fn add_edge(&mut self, from: V, to: V) -> bool {
        let (from, _) = self.intern(from);
        let (to, _) = self.intern(to);
        let nbrs = &mut self.adjacency[from];
        if nbrs.contains(&to) {
            return false;
        }
        nbrs.push(to);
        #[cfg(feature = "tracing")]
        tracing::trace!(from, to, "edge added");
        true
    }

    /// Removes a vertex together with every edge into or out of it.
    ///
    /// Returns `false` if the vertex was not present.
    pub fn remove_vertex<Q>(&mut self, vertex: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some((removed, _)) = self.vertices.shift_remove_full(vertex) else {
            return false;
        };

        // Outgoing edges go with the row.
        self.adjacency.remove(removed);

        // Drop incoming edges, then shift positions above `removed` down by 1.
        for nbrs in &mut self.adjacency {
            nbrs.retain(|&v| v != removed);
            for v in nbrs.iter_mut() {
                if *v > removed {
                    *v -= 1;
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(position = removed, remaining = self.vertices.len(), "vertex removed");
        true
    }

    /// Removes the edge `from -> to` if present.
    ///
    /// Missing endpoints or a missing edge are not errors; the call returns `false`.
    pub fn remove_edge<Q>(&mut self, from: &Q, to: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (Some(from), Some(to)) = (self.position(from), self.position(to)) else {
            return false;
        };
        let nbrs = &mut self.adjacency[from];
        let before = nbrs.len();
        nbrs.retain(|&v| v != to);
        before != nbrs.len()
    }

    /// Returns `true` if `vertex` is in the graph.
    pub fn contains<Q>(&self, vertex: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.vertices.contains(vertex)
    }

    /// Returns `true` if the edge `from -> to` exists. Absent endpoints have no edges.
    pub fn has_edge<Q>(&self, from: &Q, to: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match (self.position(from), self.position(to)) {
            (Some(from), Some(to)) => self.adjacency[from].contains(&to),
            _ => false,
        }
    }

    /// Returns the out-degree of `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::NotFound`] if `vertex` is not in the graph.
    pub fn degree<Q>(&self, vertex: &Q) -> Result<usize, GraphError>
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.position(vertex)
            .map(|u| self.adjacency[u].len())
            .ok_or(GraphError::NotFound)
    }

    /// Returns the number of edges ending at `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::NotFound`] if `vertex` is not in the graph.
    pub fn in_degree<Q>(&self, vertex: &Q) -> Result<usize, GraphError>
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let target = self.position(vertex).ok_or(GraphError::NotFound)?;
        Ok(self
            .adjacency
            .iter()
            .filter(|nbrs| nbrs.contains(&target))
            .count())
    }

    /// Iterates over the successors of `from` in edge insertion order.
    ///
    /// Yields nothing if `from` is not in the graph.
    pub fn adjacent_to<Q>(&self, from: &Q) -> Adjacent<'_, V>
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let row: &[usize] = match self.position(from) {
            Some(u) => self.adjacency[u].as_slice(),
            None => &[],
        };
        Adjacent::new(&self.vertices, row)
    }

    /// The permissive comparison: every vertex of either graph is contained in the
    /// other, and every successor seen from either side is a vertex of the other.
    ///
    /// Because edges never dangle, this holds exactly when both graphs have the
    /// same vertex set. Use `==` to also compare edges.
    pub fn vertices_consistent_with(&self, other: &Self) -> bool {
        fn covered<V: Hash + Eq>(a: &Digraph<V>, b: &Digraph<V>) -> bool {
            a.vertices()
                .all(|v| b.contains(v) && a.adjacent_to(v).all(|t| b.contains(t)))
        }
        covered(self, other) && covered(other, self)
    }
}

impl<V> Default for Digraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural equality: same vertex set and, per vertex, the same successor set.
/// Insertion order of vertices and edges is ignored.
impl<V: Hash + Eq> PartialEq for Digraph<V> {
    fn eq(&self, other: &Self) -> bool {
        if self.vertices.len() != other.vertices.len() || self.edge_count() != other.edge_count() {
            return false;
        }
        self.vertices
            .iter()
            .zip(&self.adjacency)
            .all(|(vertex, nbrs)| match other.position(vertex) {
                Some(o) => {
                    let theirs = &other.adjacency[o];
                    nbrs.len() == theirs.len()
                        && nbrs.iter().all(|&t| {
                            other
                                .position(&self.vertices[t])
                                .is_some_and(|ot| theirs.contains(&ot))
                        })
                }
                None => false,
            })
    }
}

impl<V: Hash + Eq> Eq for Digraph<V> {}

/// One line per vertex in insertion order: `vertex: succ1, succ2`.
///
/// A vertex without successors renders as `vertex:`. Every line, including the
/// last, ends with `\n`; there is no other whitespace.
impl<V: fmt::Display> fmt::Display for Digraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, nbrs) in self.vertices.iter().zip(&self.adjacency) {
            write!(f, "{vertex}:")?;
            for (i, &t) in nbrs.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, " {}", self.vertices[t])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<V: fmt::Debug> fmt::Debug for Digraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.vertices.iter().zip(&self.adjacency).map(|(vertex, nbrs)| {
                let succ: Vec<&V> = nbrs.iter().map(|&t| &self.vertices[t]).collect();
                (vertex, succ)
            }))
            .finish()
    }
}

impl<V: Hash + Eq> Extend<(V, V)> for Digraph<V> {
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, iter: I) {
        for (from, to) in iter {
            self.add_edge(from, to);
        }
    }
}

impl<V: Hash + Eq> FromIterator<(V, V)> for Digraph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

mod iter;
mod traversal;
