//! Iterator implementations for the directed graph.
//!
//! All iterators borrow the graph and are `Clone`, so a sequence can be restarted
//! by cloning it before consumption.

use core::iter::{Enumerate, FusedIterator};
use core::slice;

use indexmap::IndexSet;

/// Iterator over vertices in insertion order.
pub struct Vertices<'a, V> {
    inner: indexmap::set::Iter<'a, V>,
}

impl<'a, V> Vertices<'a, V> {
    #[inline]
    pub(super) fn new(inner: indexmap::set::Iter<'a, V>) -> Self {
        Self { inner }
    }
}

impl<V> Clone for Vertices<'_, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, V> Iterator for Vertices<'a, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Vertices<'_, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for Vertices<'_, V> {}
impl<V> FusedIterator for Vertices<'_, V> {}

/// Iterator over the successors of one vertex in edge insertion order.
pub struct Adjacent<'a, V> {
    vertices: &'a IndexSet<V>,
    targets: slice::Iter<'a, usize>,
}

impl<'a, V> Adjacent<'a, V> {
    #[inline]
    pub(super) fn new(vertices: &'a IndexSet<V>, row: &'a [usize]) -> Self {
        Self {
            vertices,
            targets: row.iter(),
        }
    }
}

impl<V> Clone for Adjacent<'_, V> {
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices,
            targets: self.targets.clone(),
        }
    }
}

impl<'a, V> Iterator for Adjacent<'a, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let vertices = self.vertices;
        self.targets.next().map(|&t| &vertices[t])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.targets.size_hint()
    }
}

impl<V> DoubleEndedIterator for Adjacent<'_, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let vertices = self.vertices;
        self.targets.next_back().map(|&t| &vertices[t])
    }
}

impl<V> ExactSizeIterator for Adjacent<'_, V> {}
impl<V> FusedIterator for Adjacent<'_, V> {}

/// Iterator over every edge `(from, to)` of the graph.
pub struct Edges<'a, V> {
    vertices: &'a IndexSet<V>,
    rows: Enumerate<slice::Iter<'a, Vec<usize>>>,
    current: Option<(usize, slice::Iter<'a, usize>)>,
}

impl<'a, V> Edges<'a, V> {
    pub(super) fn new(vertices: &'a IndexSet<V>, adjacency: &'a [Vec<usize>]) -> Self {
        Self {
            vertices,
            rows: adjacency.iter().enumerate(),
            current: None,
        }
    }
}

impl<V> Clone for Edges<'_, V> {
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices,
            rows: self.rows.clone(),
            current: self.current.clone(),
        }
    }
}

impl<'a, V> Iterator for Edges<'a, V> {
    type Item = (&'a V, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let vertices = self.vertices;
        loop {
            if let Some((from, targets)) = &mut self.current {
                if let Some(&to) = targets.next() {
                    return Some((&vertices[*from], &vertices[to]));
                }
            }
            let (from, row) = self.rows.next()?;
            self.current = Some((from, row.iter()));
        }
    }
}

impl<V> FusedIterator for Edges<'_, V> {}
