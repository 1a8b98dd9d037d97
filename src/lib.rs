//! Weighted graph engine for Rust and WebAssembly.
//!
//! A single dense graph representation with:
//!
//! - **Traversal**: BFS, recursive DFS and iterative DFS (identical orders)
//! - **Shortest paths**: Dijkstra for non-negative weights
//! - **Spanning trees**: Prim on undirected graphs
//! - **Biconnectivity**: articulation points (and bridges with the `bridges` feature)
//!
//! # Example
//!
//! ```
//! use weighted_graph_wasm::{dijkstra, Graph};
//!
//! let mut graph = Graph::undirected(3);
//! graph.add_edge(0, 1, 4)?;
//! graph.add_edge(1, 2, 1)?;
//!
//! let paths = dijkstra(&graph, 0)?;
//! assert_eq!(paths.distance(2), Some(5));
//! # Ok::<(), weighted_graph_wasm::GraphError>(())
//! ```

pub mod algorithms;
pub mod error;
pub mod graph;
pub mod wasm;

// Re-export main types
#[cfg(feature = "bridges")]
pub use algorithms::articulation::bridges;
pub use algorithms::articulation::{articulation_points, articulation_points_from};
pub use algorithms::shortest_path::{dijkstra, ShortestPaths};
pub use algorithms::spanning_tree::{prim, SpanningTree, TreeEdge};
pub use algorithms::traversal::{bfs, bfs_levels, dfs_iterative, dfs_recursive, reachable_from};
pub use error::{GraphError, Result};
pub use graph::{Graph, Weight, DEFAULT_WEIGHT};
