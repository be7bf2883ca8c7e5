use std::fmt;

use thiserror::Error;
use tracing::{debug, warn};

use crate::connectivity;
use crate::query;
use crate::render::{self, StructureLines};
use crate::store::{self, AdjacencyList, AdjacencyMatrix, EdgeStore};

/// Graph backed by per-vertex neighbour lists.
pub type ListGraph = Graph<AdjacencyList>;

/// Graph backed by a dense adjacency matrix.
pub type MatrixGraph = Graph<AdjacencyMatrix>;

/// A finite, undirected, simple graph over the vertices `0..n`.
///
/// The number of vertices is fixed at construction. Edges are unordered
/// pairs of distinct vertices; self-loops and parallel edges can not be
/// represented. The storage strategy `S` does not affect any answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<S = AdjacencyList> {
    store: S,
}

impl<S: EdgeStore> Graph<S> {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Errors
    ///
    ///  - [`GraphError::NoVertices`] when `vertex_count` is zero.
    ///  - [`GraphError::TooManyVertices`] when the store `S` can not address
    ///    `vertex_count` vertices.
    ///
    /// # Example
    ///
    /// ```
    /// # use undigraph::{ListGraph, GraphError};
    /// let graph = ListGraph::new(3).unwrap();
    /// assert_eq!(graph.vertex_count(), 3);
    /// assert!(graph.is_empty());
    ///
    /// assert_eq!(ListGraph::new(0), Err(GraphError::NoVertices));
    /// ```
    pub fn new(vertex_count: usize) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::NoVertices);
        }

        let store = S::try_with_vertices(vertex_count)
            .ok_or(GraphError::TooManyVertices { vertex_count })?;
        Ok(Self { store })
    }

    /// Creates a graph and adds the given edges in order.
    ///
    /// Duplicate edges are skipped as in [`Graph::add_edge`].
    ///
    /// # Errors
    ///
    /// Fails on the first invalid vertex count or edge.
    ///
    /// # Example
    ///
    /// ```
    /// # use undigraph::MatrixGraph;
    /// let graph = MatrixGraph::with_edges(3, [(0, 1), (1, 2), (0, 2)]).unwrap();
    /// assert!(graph.is_complete());
    /// assert_eq!(graph.regular_degree(), Some(2));
    /// ```
    pub fn with_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(vertex_count)?;
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// The number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.store.vertex_count()
    }

    /// The number of undirected edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    /// The underlying edge store.
    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Adds the undirected edge `{u, v}`.
    ///
    /// Returns `Ok(false)` and leaves the graph unchanged when the edge
    /// already exists.
    ///
    /// # Errors
    ///
    ///  - [`GraphError::VertexOutOfRange`] when `u` or `v` is not a vertex.
    ///  - [`GraphError::SelfLoop`] when `u == v`.
    ///
    /// # Example
    ///
    /// ```
    /// # use undigraph::ListGraph;
    /// let mut graph = ListGraph::new(2).unwrap();
    /// assert_eq!(graph.add_edge(0, 1), Ok(true));
    /// assert_eq!(graph.add_edge(1, 0), Ok(false));
    /// assert!(graph.has_edge(1, 0).unwrap());
    /// ```
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<bool, GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        if u == v {
            return Err(GraphError::SelfLoop { vertex: u });
        }

        if self.store.insert(u, v) {
            debug!(u, v, "added edge");
            Ok(true)
        } else {
            warn!(u, v, "edge already exists");
            Ok(false)
        }
    }

    /// Removes the undirected edge `{u, v}`.
    ///
    /// Returns `Ok(false)` and leaves the graph unchanged when there is no
    /// such edge.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexOutOfRange`] when `u` or `v` is not a vertex.
    ///
    /// # Example
    ///
    /// ```
    /// # use undigraph::MatrixGraph;
    /// let mut graph = MatrixGraph::with_edges(3, [(0, 1)]).unwrap();
    /// assert_eq!(graph.remove_edge(1, 0), Ok(true));
    /// assert_eq!(graph.remove_edge(0, 1), Ok(false));
    /// assert!(graph.is_empty());
    /// ```
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Result<bool, GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        if self.store.remove(u, v) {
            debug!(u, v, "removed edge");
            Ok(true)
        } else {
            warn!(u, v, "edge does not exist");
            Ok(false)
        }
    }

    /// Whether the edge `{u, v}` exists.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexOutOfRange`] when `u` or `v` is not a vertex.
    pub fn has_edge(&self, u: usize, v: usize) -> Result<bool, GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.store.contains(u, v))
    }

    /// The number of edges incident to `vertex`.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexOutOfRange`] when `vertex` is not a vertex.
    pub fn degree(&self, vertex: usize) -> Result<usize, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.store.degree(vertex))
    }

    /// Iterates over the neighbours of `vertex` in ascending order.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexOutOfRange`] when `vertex` is not a vertex.
    pub fn neighbours(&self, vertex: usize) -> Result<S::Neighbours<'_>, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.store.neighbours(vertex))
    }

    /// Iterates over the edges as `(x, y)` pairs with `x < y`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        store::edges(&self.store)
    }

    /// Whether the graph has no edges at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        query::is_empty(&self.store)
    }

    /// The common degree of all vertices, or `None` if the graph is not regular.
    ///
    /// # Example
    ///
    /// ```
    /// # use undigraph::ListGraph;
    /// let path = ListGraph::with_edges(3, [(0, 1), (1, 2)]).unwrap();
    /// assert_eq!(path.regular_degree(), None);
    ///
    /// let edgeless = ListGraph::new(5).unwrap();
    /// assert_eq!(edgeless.regular_degree(), Some(0));
    /// ```
    #[inline]
    pub fn regular_degree(&self) -> Option<usize> {
        query::regular_degree(&self.store)
    }

    /// Whether every distinct pair of vertices is joined by an edge.
    #[inline]
    pub fn is_complete(&self) -> bool {
        query::is_complete(&self.store)
    }

    /// Whether every vertex is reachable from every other vertex.
    ///
    /// # Example
    ///
    /// ```
    /// # use undigraph::ListGraph;
    /// let pairs = ListGraph::with_edges(4, [(0, 1), (2, 3)]).unwrap();
    /// assert!(!pairs.is_connected());
    ///
    /// let single = ListGraph::new(1).unwrap();
    /// assert!(single.is_connected());
    /// ```
    #[inline]
    pub fn is_connected(&self) -> bool {
        connectivity::is_connected(&self.store)
    }

    /// Renders the graph as `Graph = ( {n}, {(x,y), ...} )`.
    #[inline]
    pub fn to_tuple(&self) -> String {
        render::to_tuple(&self.store)
    }

    /// Lazily describes the adjacency of every vertex, one line each.
    #[inline]
    pub fn dump_structure(&self) -> StructureLines<'_, S> {
        render::dump_structure(&self.store)
    }

    /// Rebuilds the graph on a different storage strategy.
    ///
    /// # Errors
    ///
    /// [`GraphError::TooManyVertices`] when `T` can not address as many
    /// vertices as this graph has.
    pub fn convert<T: EdgeStore>(&self) -> Result<Graph<T>, GraphError> {
        let mut graph = Graph::<T>::new(self.vertex_count())?;
        for (x, y) in self.edges() {
            graph.store.insert(x, y);
        }
        Ok(graph)
    }

    #[inline]
    fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        let vertex_count = self.vertex_count();
        if vertex < vertex_count {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count,
            })
        }
    }
}

impl<S: EdgeStore> fmt::Display for Graph<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::fmt_tuple(&self.store, f)
    }
}

/// Error returned by [`Graph::new`] and the edge operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("a graph needs at least one vertex")]
    NoVertices,
    #[error("the edge store can not hold {vertex_count} vertices")]
    TooManyVertices { vertex_count: usize },
    #[error("self-loop at vertex {vertex} can not be added")]
    SelfLoop { vertex: usize },
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },
}

impl GraphError {
    /// Whether the error is caused by an invalid argument rather than an index.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::NoVertices | Self::TooManyVertices { .. } | Self::SelfLoop { .. }
        )
    }

    /// Whether the error is caused by a vertex index outside of the graph.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::VertexOutOfRange { .. })
    }
}
