//! Minimum spanning tree (Prim) for undirected graphs.
//!
//! Grows the tree from a start vertex by repeatedly attaching the cheapest
//! frontier vertex. On a disconnected graph the result covers only the
//! start vertex's component.

use crate::error::{GraphError, Result};
use crate::graph::{Graph, Weight};
use serde::Serialize;
use tracing::{debug, trace};

/// Single tree edge, reported parent -> child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeEdge {
    pub parent: usize,
    pub child: usize,
    pub weight: Weight,
}

/// Result of spanning tree construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningTree {
    /// Root of the tree
    pub start: usize,
    /// Tree edges ordered by child index
    pub edges: Vec<TreeEdge>,
    /// Sum of all edge weights
    pub total_weight: i64,
}

impl SpanningTree {
    /// Vertices covered by the tree (the start's component), ascending.
    pub fn vertices(&self) -> Vec<usize> {
        let mut vertices: Vec<usize> = std::iter::once(self.start)
            .chain(self.edges.iter().map(|e| e.child))
            .collect();
        vertices.sort_unstable();
        vertices
    }
}

/// Prim's algorithm from `start`.
///
/// Fails with `UnsupportedOperation` on directed graphs.
pub fn prim(graph: &Graph, start: usize) -> Result<SpanningTree> {
    if graph.is_directed() {
        debug!("prim requested on a directed graph");
        return Err(GraphError::UnsupportedOperation {
            operation: "prim",
            reason: "minimum spanning trees require an undirected graph",
        });
    }
    graph.check_vertex(start)?;

    let n = graph.vertex_count();
    let mut key: Vec<Option<Weight>> = vec![None; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut in_tree = vec![false; n];
    let mut total_weight = 0i64;

    key[start] = Some(0);

    for _ in 0..n {
        let Some((u, key_u)) = cheapest_frontier(&key, &in_tree) else {
            break;
        };
        in_tree[u] = true;
        total_weight += i64::from(key_u);

        for (v, w) in graph.neighbors_of(u) {
            if !in_tree[v] && key[v].map_or(true, |k| w < k) {
                key[v] = Some(w);
                parent[v] = Some(u);
            }
        }
    }

    let edges: Vec<TreeEdge> = parent
        .iter()
        .enumerate()
        .filter_map(|(child, p)| {
            let parent = (*p)?;
            Some(TreeEdge {
                parent,
                child,
                weight: key[child]?,
            })
        })
        .collect();

    trace!(start, edges = edges.len(), total_weight, "prim complete");

    Ok(SpanningTree {
        start,
        edges,
        total_weight,
    })
}

/// Vertex outside the tree with the smallest known key; first found wins ties.
fn cheapest_frontier(key: &[Option<Weight>], in_tree: &[bool]) -> Option<(usize, Weight)> {
    let mut best: Option<(usize, Weight)> = None;
    for (v, k) in key.iter().enumerate() {
        if in_tree[v] {
            continue;
        }
        if let Some(k) = *k {
            if best.map_or(true, |(_, b)| k < b) {
                best = Some((v, k));
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph1() -> Graph {
        let mut g = Graph::undirected(8);
        for &(u, v, w) in &[
            (0, 1, 4),
            (0, 3, 7),
            (1, 2, 12),
            (1, 4, 9),
            (2, 4, 1),
            (2, 7, 3),
            (3, 4, 13),
            (3, 6, 2),
            (4, 5, 5),
            (4, 6, 11),
            (4, 7, 8),
            (5, 7, 10),
        ] {
            g.add_edge(u, v, w).unwrap();
        }
        g
    }

    fn edge(parent: usize, child: usize, weight: Weight) -> TreeEdge {
        TreeEdge {
            parent,
            child,
            weight,
        }
    }

    #[test]
    fn test_prim_graph1() {
        let mst = prim(&graph1(), 0).unwrap();
        assert_eq!(
            mst.edges,
            vec![
                edge(0, 1, 4),
                edge(4, 2, 1),
                edge(0, 3, 7),
                edge(1, 4, 9),
                edge(4, 5, 5),
                edge(3, 6, 2),
                edge(2, 7, 3),
            ]
        );
        assert_eq!(mst.total_weight, 31);
        let sum: i64 = mst.edges.iter().map(|e| i64::from(e.weight)).sum();
        assert_eq!(sum, mst.total_weight);
    }

    #[test]
    fn test_prim_total_independent_of_start() {
        let g = graph1();
        for start in 0..g.vertex_count() {
            let mst = prim(&g, start).unwrap();
            assert_eq!(mst.total_weight, 31, "start {start}");
            assert_eq!(mst.edges.len(), 7);
        }
    }

    #[test]
    fn test_prim_disconnected_returns_component_forest() {
        let mut g = Graph::undirected(6);
        g.add_edge(0, 1, 3).unwrap();
        g.add_edge(1, 2, 1).unwrap();
        g.add_edge(0, 2, 5).unwrap();
        g.add_edge(3, 4, 2).unwrap();
        g.add_edge(4, 5, 2).unwrap();

        let mst = prim(&g, 1).unwrap();
        assert_eq!(mst.vertices(), vec![0, 1, 2]);
        assert_eq!(mst.edges, vec![edge(1, 0, 3), edge(1, 2, 1)]);
        assert_eq!(mst.total_weight, 4);

        let other = prim(&g, 5).unwrap();
        assert_eq!(other.vertices(), vec![3, 4, 5]);
        assert_eq!(other.total_weight, 4);
    }

    #[test]
    fn test_prim_isolated_start() {
        let g = Graph::undirected(3);
        let mst = prim(&g, 2).unwrap();
        assert!(mst.edges.is_empty());
        assert_eq!(mst.total_weight, 0);
        assert_eq!(mst.vertices(), vec![2]);
    }

    #[test]
    fn test_prim_rejects_directed() {
        let mut g = Graph::directed(2);
        g.add_edge(0, 1, 1).unwrap();
        assert!(matches!(
            prim(&g, 0),
            Err(GraphError::UnsupportedOperation {
                operation: "prim",
                ..
            })
        ));
    }

    #[test]
    fn test_prim_invalid_start() {
        let g = Graph::undirected(2);
        assert!(matches!(
            prim(&g, 7),
            Err(GraphError::InvalidVertexIndex { index: 7, .. })
        ));
    }
}
