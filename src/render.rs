//! Textual renderings of a graph for diagnostics.
use std::fmt::{self, Write};
use std::iter::FusedIterator;

use crate::store::{self, EdgeStore};

/// Renders the graph as `Graph = ( {n}, {(x,y), ...} )`.
///
/// Every undirected edge appears once, with the smaller vertex first.
pub fn to_tuple<S: EdgeStore>(store: &S) -> String {
    let mut tuple = String::new();
    // Writing into a `String` can not fail.
    let _ = write_tuple(store, &mut tuple);
    tuple
}

/// Writes the tuple form of [`to_tuple`] into a formatter.
pub(crate) fn fmt_tuple<S: EdgeStore>(store: &S, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write_tuple(store, f)
}

fn write_tuple<S: EdgeStore, W: Write + ?Sized>(store: &S, out: &mut W) -> fmt::Result {
    write!(out, "Graph = ( {{{}}}, {{", store.vertex_count())?;

    for (i, (x, y)) in store::edges(store).enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write!(out, "({},{})", x, y)?;
    }

    out.write_str("} )")
}

/// Lazily produces one line per vertex describing its adjacency.
pub fn dump_structure<S: EdgeStore>(store: &S) -> StructureLines<'_, S> {
    StructureLines {
        store,
        next: 0,
        end: store.vertex_count(),
    }
}

/// Iterator created by [`dump_structure`].
///
/// A clone continues from the same position. Call [`dump_structure`] again
/// for a fresh pass.
pub struct StructureLines<'a, S> {
    store: &'a S,
    next: usize,
    end: usize,
}

impl<'a, S> Clone for StructureLines<'a, S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store,
            next: self.next,
            end: self.end,
        }
    }
}

impl<'a, S: EdgeStore> Iterator for StructureLines<'a, S> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.end {
            return None;
        }

        let vertex = self.next;
        self.next += 1;
        Some(format!(
            "vertex {}:{}",
            vertex,
            Row {
                store: self.store,
                vertex
            }
        ))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.next;
        (len, Some(len))
    }
}

impl<'a, S: EdgeStore> ExactSizeIterator for StructureLines<'a, S> {}
impl<'a, S: EdgeStore> FusedIterator for StructureLines<'a, S> {}

struct Row<'a, S> {
    store: &'a S,
    vertex: usize,
}

impl<'a, S: EdgeStore> fmt::Display for Row<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.store.fmt_row(self.vertex, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::store::{AdjacencyList, AdjacencyMatrix};

    fn triangle<S: EdgeStore>() -> S {
        let mut store = S::with_vertices(3);
        store.insert(1, 2);
        store.insert(2, 0);
        store.insert(0, 1);
        store
    }

    #[test]
    fn tuple_lists_each_edge_once() {
        let expected = "Graph = ( {3}, {(0,1), (0,2), (1,2)} )";
        assert_eq!(to_tuple(&triangle::<AdjacencyList>()), expected);
        assert_eq!(to_tuple(&triangle::<AdjacencyMatrix>()), expected);
    }

    #[test]
    fn tuple_without_edges() {
        assert_eq!(
            to_tuple(&AdjacencyList::with_vertices(5)),
            "Graph = ( {5}, {} )"
        );
        assert_eq!(
            to_tuple(&AdjacencyMatrix::with_vertices(1)),
            "Graph = ( {1}, {} )"
        );
    }

    #[test]
    fn list_structure() {
        let mut store = AdjacencyList::with_vertices(4);
        store.insert(0, 3);
        store.insert(0, 1);

        let lines: Vec<_> = dump_structure(&store).collect();
        assert_eq!(
            lines,
            ["vertex 0: 1 - 3", "vertex 1: 0", "vertex 2:", "vertex 3: 0"]
        );
    }

    #[test]
    fn matrix_structure() {
        let mut store = AdjacencyMatrix::with_vertices(3);
        store.insert(0, 2);

        let lines: Vec<_> = dump_structure(&store).collect();
        assert_eq!(
            lines,
            ["vertex 0: 0 0 1", "vertex 1: 0 0 0", "vertex 2: 1 0 0"]
        );
    }

    #[test]
    fn structure_is_restartable() {
        let store = triangle::<AdjacencyList>();
        let mut lines = dump_structure(&store);

        assert_eq!(lines.len(), 3);
        lines.next();
        let rest = lines.clone();
        assert_eq!(rest.count(), 2);
        assert_eq!(lines.len(), 2);
        assert!(dump_structure(&store).eq(dump_structure(&store)));
    }
}
