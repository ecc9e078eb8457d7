//! Breadth-first reachability and shortest paths.
//!
//! Every query builds its own frontier queue, visited flags, and parent links and
//! drops them on return; nothing is cached on the graph between calls.

use core::borrow::Borrow;
use core::hash::Hash;
use std::collections::VecDeque;

use indexmap::IndexSet;

use super::Digraph;

/// Length reported by [`Digraph::path_length`] when no path exists.
pub const UNREACHABLE: usize = usize::MAX;

const NO_PARENT: usize = usize::MAX;

impl<V> Digraph<V> {
    /// Shortest route between two positions, as positions from `from` to `to`.
    ///
    /// Successors are enqueued in row order, so among equally short routes the one
    /// through earlier-inserted edges wins. The search stops once `to` is dequeued.
    fn shortest_route(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        let n = self.adjacency.len();
        let mut visited = vec![false; n];
        let mut parent = vec![NO_PARENT; n];
        let mut queue = VecDeque::new();

        visited[from] = true;
        queue.push_back(from);

        while let Some(u) = queue.pop_front() {
            if u == to {
                let mut route = vec![to];
                let mut cur = to;
                while cur != from {
                    cur = parent[cur];
                    route.push(cur);
                }
                route.reverse();
                #[cfg(feature = "tracing")]
                tracing::trace!(from, to, edges = route.len() - 1, "shortest route found");
                return Some(route);
            }

            for &v in &self.adjacency[u] {
                if !visited[v] {
                    visited[v] = true;
                    parent[v] = u;
                    queue.push_back(v);
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(from, to, "no route");
        None
    }
}

impl<V: Hash + Eq> Digraph<V> {
    /// Returns `true` if `to` is reachable from `from`.
    ///
    /// Every vertex reaches itself, with or without a self-loop. Absent endpoints
    /// are unreachable.
    pub fn has_path<Q>(&self, from: &Q, to: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.shortest_distance(from, to).is_some()
    }

    /// Number of edges on a shortest path from `from` to `to`, or `None` if there is
    /// no path or either endpoint is absent. A vertex is at distance 0 from itself.
    pub fn shortest_distance<Q>(&self, from: &Q, to: &Q) -> Option<usize>
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let from = self.position(from)?;
        let to = self.position(to)?;
        self.shortest_route(from, to).map(|route| route.len() - 1)
    }

    /// Number of edges on a shortest path from `from` to `to`.
    ///
    /// Returns [`UNREACHABLE`] if there is no path or either endpoint is absent.
    pub fn path_length<Q>(&self, from: &Q, to: &Q) -> usize
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.shortest_distance(from, to).unwrap_or(UNREACHABLE)
    }

    /// A shortest path from `from` to `to`, both endpoints included.
    ///
    /// Returns an empty path if either endpoint is absent or `to` is unreachable.
    /// When `from` and `to` are the same vertex the path is `[from, to]`: two
    /// entries, no edge traversed.
    pub fn get_path<Q>(&self, from: &Q, to: &Q) -> Vec<&V>
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (Some(from), Some(to)) = (self.position(from), self.position(to)) else {
            return Vec::new();
        };
        if from == to {
            return vec![&self.vertices[from], &self.vertices[to]];
        }
        self.shortest_route(from, to)
            .map(|route| route.into_iter().map(|i| &self.vertices[i]).collect())
            .unwrap_or_default()
    }

    /// Breadth-first iterator over the vertices reachable from `start`, beginning
    /// with `start` itself. Yields nothing if `start` is absent.
    pub fn bfs<Q>(&self, start: &Q) -> Bfs<'_, V>
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        Bfs::new(&self.vertices, &self.adjacency, self.position(start))
    }
}

/// An iterator for Breadth-First Search (BFS).
///
/// Yields vertices in BFS order, successors in edge insertion order.
/// It uses an internal `VecDeque` and `Vec<bool>` for state management.
pub struct Bfs<'a, V> {
    vertices: &'a IndexSet<V>,
    adjacency: &'a [Vec<usize>],
    visited: Vec<bool>,
    queue: VecDeque<usize>,
}

impl<'a, V> Bfs<'a, V> {
    fn new(vertices: &'a IndexSet<V>, adjacency: &'a [Vec<usize>], start: Option<usize>) -> Self {
        let mut visited = vec![false; adjacency.len()];
        let mut queue = VecDeque::new();

        if let Some(start) = start {
            visited[start] = true;
            queue.push_back(start);
        }

        Self {
            vertices,
            adjacency,
            visited,
            queue,
        }
    }
}

impl<'a, V> Iterator for Bfs<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;
        let vertices = self.vertices;

        for &v in &self.adjacency[u] {
            if !self.visited[v] {
                self.visited[v] = true;
                self.queue.push_back(v);
            }
        }

        Some(&vertices[u])
    }
}
