//! Storage strategies for the edges of an undirected simple graph.
//!
//! Every algorithm in this crate is written once against [`EdgeStore`] and
//! works with either of the two implementations.
pub mod list;
pub mod matrix;

use std::fmt;

pub use list::AdjacencyList;
pub use matrix::AdjacencyMatrix;

/// Capability interface shared by the edge storage strategies.
///
/// Stores do not validate their arguments: vertex indices must be smaller
/// than [`EdgeStore::vertex_count`] and methods may panic otherwise. Checking
/// indices and rejecting self-loops is the job of [`Graph`].
///
/// Implementations must keep the edge relation symmetric. Inserting or
/// removing `(u, v)` always updates `(v, u)` in the same call.
///
/// [`Graph`]: crate::Graph
pub trait EdgeStore {
    /// Iterator over the neighbours of a vertex in ascending order.
    type Neighbours<'a>: Iterator<Item = usize>
    where
        Self: 'a;

    /// Creates a store for `vertex_count` vertices and no edges.
    ///
    /// Returns `None` when the store can not address that many vertices.
    fn try_with_vertices(vertex_count: usize) -> Option<Self>
    where
        Self: Sized;

    /// Creates a store for `vertex_count` vertices and no edges.
    ///
    /// # Panics
    ///
    /// Panics when the store can not address that many vertices.
    fn with_vertices(vertex_count: usize) -> Self
    where
        Self: Sized,
    {
        match Self::try_with_vertices(vertex_count) {
            Some(store) => store,
            None => panic!("a store can not hold {} vertices", vertex_count),
        }
    }

    /// The number of vertices, fixed at construction.
    fn vertex_count(&self) -> usize;

    /// Inserts the undirected edge `{u, v}`.
    ///
    /// Returns `false` and leaves the store unchanged when the edge was
    /// already present.
    fn insert(&mut self, u: usize, v: usize) -> bool;

    /// Removes the undirected edge `{u, v}`.
    ///
    /// Returns `false` and leaves the store unchanged when the edge was not
    /// present.
    fn remove(&mut self, u: usize, v: usize) -> bool;

    /// Whether the edge `{u, v}` is present.
    fn contains(&self, u: usize, v: usize) -> bool;

    /// The number of edges incident to `vertex`.
    fn degree(&self, vertex: usize) -> usize;

    /// Iterates over the neighbours of `vertex` in ascending order.
    fn neighbours(&self, vertex: usize) -> Self::Neighbours<'_>;

    /// Writes the body of the structure dump line for `vertex`.
    fn fmt_row(&self, vertex: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Whether any vertex has an incident edge.
    #[inline]
    fn has_edges(&self) -> bool {
        (0..self.vertex_count()).any(|vertex| self.degree(vertex) != 0)
    }

    /// The number of undirected edges.
    #[inline]
    fn edge_count(&self) -> usize {
        let degree_sum: usize = (0..self.vertex_count())
            .map(|vertex| self.degree(vertex))
            .sum();
        degree_sum / 2
    }
}

/// Iterates over every undirected edge of a store exactly once.
///
/// Edges are reported as `(x, y)` with `x < y`, ordered by `x` and then `y`.
pub fn edges<S: EdgeStore>(store: &S) -> impl Iterator<Item = (usize, usize)> + '_ {
    (0..store.vertex_count()).flat_map(move |x| {
        store
            .neighbours(x)
            .filter(move |&y| y > x)
            .map(move |y| (x, y))
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    fn triangle<S: EdgeStore>() -> S {
        let mut store = S::with_vertices(4);
        store.insert(2, 0);
        store.insert(1, 2);
        store.insert(0, 1);
        store
    }

    #[test]
    fn edges_are_canonical() {
        let list: AdjacencyList = triangle();
        let matrix: AdjacencyMatrix = triangle();

        assert!(edges(&list).eq([(0, 1), (0, 2), (1, 2)]));
        assert!(edges(&matrix).eq([(0, 1), (0, 2), (1, 2)]));
    }

    #[rstest]
    #[case(0, 2)]
    #[case(1, 2)]
    #[case(2, 2)]
    #[case(3, 0)]
    fn degree_agrees(#[case] vertex: usize, #[case] degree: usize) {
        let list: AdjacencyList = triangle();
        let matrix: AdjacencyMatrix = triangle();

        assert_eq!(list.degree(vertex), degree);
        assert_eq!(matrix.degree(vertex), degree);
        assert!(list.neighbours(vertex).eq(matrix.neighbours(vertex)));
    }

    #[test]
    fn provided_counts() {
        let list: AdjacencyList = triangle();
        let matrix: AdjacencyMatrix = triangle();

        assert_eq!(list.edge_count(), 3);
        assert_eq!(matrix.edge_count(), 3);
        assert!(list.has_edges());
        assert!(matrix.has_edges());
        assert!(!AdjacencyList::with_vertices(3).has_edges());
        assert!(!AdjacencyMatrix::with_vertices(3).has_edges());
    }
}
