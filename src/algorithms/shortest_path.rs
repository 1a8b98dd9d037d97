//! Single-source shortest paths (Dijkstra) for non-negative weights.
//!
//! Uses the dense O(n^2) selection scan rather than a heap: every round picks
//! the unvisited vertex of smallest tentative distance, lowest index on ties.

use crate::error::Result;
use crate::graph::Graph;
use serde::Serialize;
use tracing::trace;

/// Distances and predecessors from a single start vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    /// Start vertex
    pub start: usize,
    /// distance[v]: total weight of the shortest path, `None` if unreachable
    pub distances: Vec<Option<i64>>,
    /// predecessor[v]: previous vertex on the shortest path, `None` for the start and unreachable vertices
    pub predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Distance to `vertex`, `None` if unreachable or out of range.
    pub fn distance(&self, vertex: usize) -> Option<i64> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Check if `vertex` has a path from the start.
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Vertices on the shortest path from the start to `target`, inclusive.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distance(target)?;

        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.predecessors[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra's algorithm from `start`.
///
/// Weights must be non-negative; results for negative weights are unspecified.
pub fn dijkstra(graph: &Graph, start: usize) -> Result<ShortestPaths> {
    graph.check_vertex(start)?;

    let n = graph.vertex_count();
    let mut distances: Vec<Option<i64>> = vec![None; n];
    let mut predecessors = vec![None; n];
    let mut visited = vec![false; n];

    distances[start] = Some(0);

    // The last remaining vertex has nothing left to relax
    for _ in 0..n.saturating_sub(1) {
        let Some((u, dist_u)) = closest_unvisited(&distances, &visited) else {
            break;
        };
        visited[u] = true;

        for (v, w) in graph.neighbors_of(u) {
            if visited[v] {
                continue;
            }
            let candidate = dist_u + i64::from(w);
            if distances[v].map_or(true, |d| candidate < d) {
                distances[v] = Some(candidate);
                predecessors[v] = Some(u);
            }
        }
    }

    trace!(
        start,
        reachable = distances.iter().filter(|d| d.is_some()).count(),
        "dijkstra complete"
    );

    Ok(ShortestPaths {
        start,
        distances,
        predecessors,
    })
}

/// Unvisited vertex with the smallest finite distance; first found wins ties.
fn closest_unvisited(distances: &[Option<i64>], visited: &[bool]) -> Option<(usize, i64)> {
    let mut best: Option<(usize, i64)> = None;
    for (v, d) in distances.iter().enumerate() {
        if visited[v] {
            continue;
        }
        if let Some(d) = *d {
            if best.map_or(true, |(_, b)| d < b) {
                best = Some((v, d));
            }
        }
    }
    best
}
