//! Finite, undirected, simple graphs over the vertex set `0..n`.
//!
//! A [`Graph`] answers a small set of structural queries: whether it has any
//! edges, whether it is regular (and of which degree), whether it is complete
//! and whether it is connected. The edges are kept in an [`EdgeStore`], of
//! which there are two interchangeable implementations:
//!
//!  - [`AdjacencyList`] keeps a sorted neighbour list per vertex.
//!  - [`AdjacencyMatrix`] keeps a dense `n × n` bit grid.
//!
//! Both produce identical answers for the same sequence of edge operations.
//!
//! # Example
//!
//! ```
//! # use undigraph::{ListGraph, MatrixGraph};
//! let mut graph = ListGraph::new(4).unwrap();
//! graph.add_edge(0, 1).unwrap();
//! graph.add_edge(1, 2).unwrap();
//! graph.add_edge(2, 3).unwrap();
//!
//! assert!(graph.is_connected());
//! assert!(!graph.is_complete());
//! assert_eq!(graph.regular_degree(), None);
//!
//! let matrix: MatrixGraph = graph.convert().unwrap();
//! assert_eq!(matrix.to_tuple(), "Graph = ( {4}, {(0,1), (1,2), (2,3)} )");
//! ```
pub mod connectivity;
pub mod graph;
pub mod query;
pub mod render;
pub mod store;

pub use crate::graph::{Graph, GraphError, ListGraph, MatrixGraph};
pub use crate::store::{AdjacencyList, AdjacencyMatrix, EdgeStore};
