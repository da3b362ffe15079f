//! aw-graph: connectivity layer for the wiring model.
//!
//! Provides:
//! - An undirected graph over arbitrary hashable vertex identities
//! - Lazy reachability (transitive closure over a three-state adjacency matrix)
//! - Decomposition into connected subgraphs that keep only declared edges
//!
//! # Example
//!
//! ```
//! use aw_graph::ConnectivityGraph;
//!
//! let mut graph = ConnectivityGraph::from_edge_pairs([("a", "b"), ("b", "c"), ("d", "e")]).unwrap();
//! assert!(graph.is_reachable(&"a", &"c").unwrap());
//! assert!(!graph.is_connected());
//!
//! graph.add_edge(&"c", &"d").unwrap();
//! assert!(graph.is_connected());
//! assert_eq!(graph.split_into_connected_graphs().count(), 1);
//! ```

pub mod components;
pub mod edge;
pub mod error;
pub mod graph;
pub mod indexing;

// Re-exports for ergonomics
pub use components::ConnectedGraphs;
pub use edge::EdgeState;
pub use error::{GraphError, GraphResult};
pub use graph::ConnectivityGraph;
pub use indexing::VertexIndex;
