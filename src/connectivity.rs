//! Depth-first traversal and the connectivity check built on it.
use std::iter::FusedIterator;

use bitvec::prelude::*;
use tracing::trace;

use crate::store::EdgeStore;

/// Whether every vertex is reachable from every other vertex.
///
/// Runs a depth-first search from vertex `0` and compares the number of
/// visited vertices with the vertex count. A single vertex is connected, a
/// store without vertices is not.
pub fn is_connected<S: EdgeStore>(store: &S) -> bool {
    let vertex_count = store.vertex_count();
    vertex_count > 0 && Dfs::new(store, 0).count() == vertex_count
}

/// Depth-first preorder traversal over an [`EdgeStore`].
///
/// Neighbours are examined in ascending order and the search descends into
/// each newly discovered vertex before looking at the remaining neighbours
/// of the current one. The recursion is unrolled into an explicit stack of
/// neighbour iterators, so deep graphs do not overflow the call stack.
///
/// # Example
///
/// ```
/// # use undigraph::{EdgeStore, AdjacencyList};
/// # use undigraph::connectivity::Dfs;
/// let mut store = AdjacencyList::with_vertices(4);
/// store.insert(0, 2);
/// store.insert(0, 1);
/// store.insert(2, 3);
///
/// assert!(Dfs::new(&store, 0).eq([0, 1, 2, 3]));
/// ```
pub struct Dfs<'a, S: EdgeStore + 'a> {
    store: &'a S,
    visited: BitVec,
    stack: Vec<S::Neighbours<'a>>,
    start: Option<usize>,
}

impl<'a, S: EdgeStore + 'a> Dfs<'a, S> {
    /// Starts a traversal at `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a vertex of the store.
    pub fn new(store: &'a S, start: usize) -> Self {
        let mut visited = bitvec![0; store.vertex_count()];
        visited.set(start, true);

        Self {
            store,
            visited,
            stack: Vec::new(),
            start: Some(start),
        }
    }

    /// Whether `vertex` has been reached so far.
    #[inline]
    pub fn is_visited(&self, vertex: usize) -> bool {
        self.visited[vertex]
    }
}

impl<'a, S: EdgeStore + 'a> Iterator for Dfs<'a, S> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            self.stack.push(self.store.neighbours(start));
            return Some(start);
        }

        while let Some(frontier) = self.stack.last_mut() {
            let visited = &self.visited;
            match frontier.find(|&vertex| !visited[vertex]) {
                Some(vertex) => {
                    trace!(vertex, depth = self.stack.len(), "discovered vertex");
                    self.visited.set(vertex, true);
                    self.stack.push(self.store.neighbours(vertex));
                    return Some(vertex);
                }
                None => {
                    self.stack.pop();
                }
            }
        }

        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.visited.count_zeros() + usize::from(self.start.is_some());
        (usize::from(self.start.is_some()), Some(remaining))
    }
}

impl<'a, S: EdgeStore + 'a> FusedIterator for Dfs<'a, S> {}
