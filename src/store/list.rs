use std::fmt;
use std::iter::Copied;
use std::slice;

use super::EdgeStore;

/// Edge store that keeps a sorted list of neighbours for every vertex.
///
/// Membership checks are a binary search in the neighbour list of one
/// endpoint, so they never cost more than `O(degree)`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjacencyList {
    neighbours: Vec<Vec<usize>>,
}

impl AdjacencyList {
    /// The neighbours of `vertex` in ascending order.
    #[inline]
    pub fn neighbour_slice(&self, vertex: usize) -> &[usize] {
        &self.neighbours[vertex]
    }
}

impl EdgeStore for AdjacencyList {
    type Neighbours<'a> = Copied<slice::Iter<'a, usize>>;

    fn try_with_vertices(vertex_count: usize) -> Option<Self> {
        let mut neighbours = Vec::new();
        neighbours.try_reserve_exact(vertex_count).ok()?;
        neighbours.resize(vertex_count, Vec::new());
        Some(Self { neighbours })
    }

    #[inline]
    fn vertex_count(&self) -> usize {
        self.neighbours.len()
    }

    fn insert(&mut self, u: usize, v: usize) -> bool {
        let Err(at_u) = self.neighbours[u].binary_search(&v) else {
            return false;
        };

        // The relation is symmetric, so `u` can not be in the list of `v`.
        let at_v = self.neighbours[v].binary_search(&u).unwrap_err();
        self.neighbours[u].insert(at_u, v);
        self.neighbours[v].insert(at_v, u);
        true
    }

    fn remove(&mut self, u: usize, v: usize) -> bool {
        let Ok(at_u) = self.neighbours[u].binary_search(&v) else {
            return false;
        };

        // Present in the list of `u`, so present in the list of `v` as well.
        let at_v = self.neighbours[v].binary_search(&u).unwrap();
        self.neighbours[u].remove(at_u);
        self.neighbours[v].remove(at_v);
        true
    }

    #[inline]
    fn contains(&self, u: usize, v: usize) -> bool {
        self.neighbours[u].binary_search(&v).is_ok()
    }

    #[inline]
    fn degree(&self, vertex: usize) -> usize {
        self.neighbours[vertex].len()
    }

    #[inline]
    fn neighbours(&self, vertex: usize) -> Self::Neighbours<'_> {
        self.neighbours[vertex].iter().copied()
    }

    fn fmt_row(&self, vertex: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, neighbour) in self.neighbours[vertex].iter().enumerate() {
            if i == 0 {
                write!(f, " {}", neighbour)?;
            } else {
                write!(f, " - {}", neighbour)?;
            }
        }
        Ok(())
    }

    #[inline]
    fn has_edges(&self) -> bool {
        self.neighbours.iter().any(|list| !list.is_empty())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn too_many_vertices() {
        assert_eq!(AdjacencyList::try_with_vertices(usize::MAX), None);
        assert_eq!(
            AdjacencyList::try_with_vertices(2),
            Some(AdjacencyList::with_vertices(2))
        );
    }

    #[test]
    fn insert_keeps_lists_sorted() {
        let mut store = AdjacencyList::with_vertices(5);

        assert!(store.insert(2, 4));
        assert!(store.insert(2, 0));
        assert!(store.insert(3, 2));

        assert_eq!(store.neighbour_slice(2), [0, 3, 4]);
        assert_eq!(store.neighbour_slice(0), [2]);
        assert_eq!(store.neighbour_slice(3), [2]);
        assert_eq!(store.neighbour_slice(4), [2]);
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut store = AdjacencyList::with_vertices(3);

        assert!(store.insert(0, 1));
        let before = store.clone();
        assert!(!store.insert(1, 0));
        assert!(!store.insert(0, 1));
        assert_eq!(store, before);
    }

    #[test]
    fn remove_updates_both_sides() {
        let mut store = AdjacencyList::with_vertices(3);
        store.insert(0, 1);
        store.insert(0, 2);

        assert!(store.remove(1, 0));
        assert!(!store.remove(0, 1));
        assert!(!store.contains(0, 1));
        assert!(!store.contains(1, 0));
        assert_eq!(store.neighbour_slice(0), [2]);
        assert!(store.neighbour_slice(1).is_empty());
    }
}
