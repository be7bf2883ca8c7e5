//! Structural queries over an [`EdgeStore`].
use crate::store::EdgeStore;

/// Whether no vertex has an incident edge.
#[inline]
pub fn is_empty<S: EdgeStore>(store: &S) -> bool {
    !store.has_edges()
}

/// The common degree of all vertices, or `None` when the degrees differ.
///
/// A graph with a single vertex is regular of degree `0`. A store without
/// any vertices is not considered regular.
pub fn regular_degree<S: EdgeStore>(store: &S) -> Option<usize> {
    let mut degrees = (0..store.vertex_count()).map(|vertex| store.degree(vertex));
    let first = degrees.next()?;
    degrees.all(|degree| degree == first).then_some(first)
}

/// Whether every distinct pair of vertices is joined by an edge.
///
/// This is the case exactly when the graph is regular of degree `n - 1`,
/// which makes the single vertex graph complete.
pub fn is_complete<S: EdgeStore>(store: &S) -> bool {
    regular_degree(store).map_or(false, |degree| degree + 1 == store.vertex_count())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::store::{AdjacencyList, AdjacencyMatrix};
    use rstest::rstest;

    fn build<S: EdgeStore>(vertex_count: usize, edges: &[(usize, usize)]) -> S {
        let mut store = S::with_vertices(vertex_count);
        for &(u, v) in edges {
            store.insert(u, v);
        }
        store
    }

    #[rstest]
    #[case::single(1, &[], Some(0), true)]
    #[case::path(4, &[(0, 1), (1, 2), (2, 3)], None, false)]
    #[case::triangle(3, &[(0, 1), (1, 2), (0, 2)], Some(2), true)]
    #[case::cycle(4, &[(0, 1), (1, 2), (2, 3), (3, 0)], Some(2), false)]
    #[case::matching(4, &[(0, 1), (2, 3)], Some(1), false)]
    #[case::edgeless(5, &[], Some(0), false)]
    fn regularity(
        #[case] vertex_count: usize,
        #[case] edges: &[(usize, usize)],
        #[case] degree: Option<usize>,
        #[case] complete: bool,
    ) {
        let list: AdjacencyList = build(vertex_count, edges);
        let matrix: AdjacencyMatrix = build(vertex_count, edges);

        assert_eq!(regular_degree(&list), degree);
        assert_eq!(regular_degree(&matrix), degree);
        assert_eq!(is_complete(&list), complete);
        assert_eq!(is_complete(&matrix), complete);
        assert_eq!(is_empty(&list), edges.is_empty());
        assert_eq!(is_empty(&matrix), edges.is_empty());
    }

    #[test]
    fn complete_graphs() {
        for n in 1..8 {
            let edges: Vec<_> = (0..n)
                .flat_map(|x| (x + 1..n).map(move |y| (x, y)))
                .collect();
            let list: AdjacencyList = build(n, &edges);
            let matrix: AdjacencyMatrix = build(n, &edges);

            assert_eq!(regular_degree(&list), Some(n - 1));
            assert_eq!(regular_degree(&matrix), Some(n - 1));
            assert!(is_complete(&list));
            assert!(is_complete(&matrix));
        }
    }

    #[test]
    fn no_vertices() {
        let store = AdjacencyList::with_vertices(0);
        assert_eq!(regular_degree(&store), None);
        assert!(!is_complete(&store));
        assert!(is_empty(&store));
    }
}
