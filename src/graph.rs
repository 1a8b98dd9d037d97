//! Core weighted graph structure backed by a dense weight matrix.

use crate::error::{GraphError, Result};
use tracing::debug;

/// Edge weight. Zero is reserved for "no edge".
pub type Weight = i32;

/// Weight used by [`Graph::add_unit_edge`].
pub const DEFAULT_WEIGHT: Weight = 1;

/// Weighted graph over the fixed vertex set `0..vertex_count`.
/// Stores weights in a row-major `n x n` matrix for O(1) edge lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    /// Number of vertices, fixed at construction
    vertex_count: usize,

    /// Undirected graphs keep the matrix symmetric
    directed: bool,

    /// matrix[u * n + v] = weight of u -> v, 0 when absent
    matrix: Vec<Weight>,

    /// Stored edges (undirected pairs and self-loops count once)
    edge_count: usize,
}

impl Graph {
    /// Create an edgeless graph with `vertex_count` vertices.
    ///
    /// # Panics
    /// If `vertex_count * vertex_count` overflows `usize`.
    pub fn new(vertex_count: usize, directed: bool) -> Graph {
        let cells = vertex_count
            .checked_mul(vertex_count)
            .expect("weight matrix size overflows usize");
        Graph {
            vertex_count,
            directed,
            matrix: vec![0; cells],
            edge_count: 0,
        }
    }

    /// Create an edgeless undirected graph.
    pub fn undirected(vertex_count: usize) -> Graph {
        Graph::new(vertex_count, false)
    }

    /// Create an edgeless directed graph.
    pub fn directed(vertex_count: usize) -> Graph {
        Graph::new(vertex_count, true)
    }

    /// Add (or overwrite) the edge `from -> to`. Undirected graphs also store `to -> from`.
    ///
    /// Fails without touching the graph when either endpoint is out of range
    /// or the weight is zero.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: Weight) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if weight == 0 {
            debug!(from, to, "rejected zero-weight edge");
            return Err(GraphError::ZeroWeight { from, to });
        }

        let forward = self.slot(from, to);
        if self.matrix[forward] == 0 {
            self.edge_count += 1;
        }
        self.matrix[forward] = weight;

        if !self.directed {
            let backward = self.slot(to, from);
            self.matrix[backward] = weight;
        }
        Ok(())
    }

    /// Add an edge with the default weight of 1.
    pub fn add_unit_edge(&mut self, from: usize, to: usize) -> Result<()> {
        self.add_edge(from, to, DEFAULT_WEIGHT)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Check if graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Graph density: stored edges over the maximum possible simple edges.
    pub fn density(&self) -> f64 {
        let n = self.vertex_count as f64;
        let e = self.edge_count as f64;
        if n <= 1.0 {
            0.0
        } else if self.directed {
            e / (n * (n - 1.0))
        } else {
            2.0 * e / (n * (n - 1.0))
        }
    }

    /// Weight of `from -> to`, or `None` when absent or out of range.
    pub fn weight(&self, from: usize, to: usize) -> Option<Weight> {
        if from >= self.vertex_count || to >= self.vertex_count {
            return None;
        }
        match self.matrix[self.slot(from, to)] {
            0 => None,
            w => Some(w),
        }
    }

    /// Check if `from -> to` is stored.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.weight(from, to).is_some()
    }

    /// Neighbors of `vertex` as `(neighbor, weight)` in ascending index order.
    pub fn neighbors(&self, vertex: usize) -> Result<impl Iterator<Item = (usize, Weight)> + '_> {
        self.check_vertex(vertex)?;
        Ok(self.neighbors_of(vertex))
    }

    /// Convert a signed host index (e.g. `-1` from JS) into a checked vertex.
    pub fn vertex_from_raw(&self, raw: i64) -> Result<usize> {
        match usize::try_from(raw) {
            Ok(v) if v < self.vertex_count => Ok(v),
            _ => {
                debug!(index = raw, vertex_count = self.vertex_count, "invalid vertex index");
                Err(GraphError::InvalidVertexIndex {
                    index: raw,
                    vertex_count: self.vertex_count,
                })
            }
        }
    }

    /// Iterate over all stored edges as `(from, to, weight)`.
    /// Undirected edges are reported once with `from <= to`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        let directed = self.directed;
        (0..self.vertex_count).flat_map(move |u| {
            self.neighbors_of(u)
                .filter(move |&(v, _)| directed || u <= v)
                .map(move |(v, w)| (u, v, w))
        })
    }

    /// Copy of the weight matrix, one row per vertex.
    pub fn adjacency_matrix(&self) -> Vec<Vec<Weight>> {
        if self.vertex_count == 0 {
            return Vec::new();
        }
        self.matrix
            .chunks(self.vertex_count)
            .map(|row| row.to_vec())
            .collect()
    }
}

// Internal methods (shared by the algorithms)
impl Graph {
    /// Fail with `InvalidVertexIndex` unless `vertex` is in range.
    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            debug!(vertex, vertex_count = self.vertex_count, "invalid vertex index");
            Err(GraphError::invalid_vertex(vertex, self.vertex_count))
        }
    }

    /// Row of the matrix for `vertex`. Caller guarantees range.
    pub(crate) fn row(&self, vertex: usize) -> &[Weight] {
        let start = vertex * self.vertex_count;
        &self.matrix[start..start + self.vertex_count]
    }

    /// Unchecked neighbor iteration in ascending order.
    pub(crate) fn neighbors_of(&self, vertex: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        self.row(vertex)
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w != 0)
            .map(|(v, &w)| (v, w))
    }

    /// Vertices adjacent to `vertex` in either direction, ascending, self-loops skipped.
    pub(crate) fn undirected_neighbors(&self, vertex: usize) -> Vec<usize> {
        (0..self.vertex_count)
            .filter(|&v| {
                v != vertex
                    && (self.matrix[self.slot(vertex, v)] != 0
                        || self.matrix[self.slot(v, vertex)] != 0)
            })
            .collect()
    }

    fn slot(&self, from: usize, to: usize) -> usize {
        from * self.vertex_count + to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_graph() {
        let g = Graph::undirected(4);
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 0);
        assert!(!g.is_directed());
        assert!(g.adjacency_matrix().iter().flatten().all(|&w| w == 0));
    }

    #[test]
    fn test_add_edge_undirected_is_symmetric() {
        let mut g = Graph::undirected(3);
        g.add_edge(0, 2, 7).unwrap();
        assert_eq!(g.weight(0, 2), Some(7));
        assert_eq!(g.weight(2, 0), Some(7));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_directed_is_one_way() {
        let mut g = Graph::directed(3);
        g.add_edge(0, 2, 7).unwrap();
        assert_eq!(g.weight(0, 2), Some(7));
        assert_eq!(g.weight(2, 0), None);
        assert!(g.has_edge(0, 2));
        assert!(!g.has_edge(2, 0));
        assert!(!g.has_edge(0, 3));
    }

    #[test]
    #[should_panic(expected = "weight matrix size overflows usize")]
    fn test_new_rejects_overflowing_matrix() {
        let _ = Graph::undirected(usize::MAX);
    }

    #[test]
    fn test_add_edge_overwrites_weight() {
        let mut g = Graph::undirected(8);
        g.add_edge(4, 6, 11).unwrap();
        g.add_edge(6, 4, 14).unwrap();
        assert_eq!(g.weight(4, 6), Some(14));
        assert_eq!(g.weight(6, 4), Some(14));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_out_of_range_leaves_graph_unchanged() {
        let mut g = Graph::undirected(3);
        g.add_edge(0, 1, 2).unwrap();
        let before = g.clone();

        let err = g.add_edge(0, 3, 5).unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidVertexIndex {
                index: 3,
                vertex_count: 3
            }
        );
        assert_eq!(g, before);
    }

    #[test]
    fn test_negative_raw_index_is_rejected() {
        let g = Graph::undirected(3);
        assert_eq!(
            g.vertex_from_raw(-1),
            Err(GraphError::InvalidVertexIndex {
                index: -1,
                vertex_count: 3
            })
        );
        assert_eq!(g.vertex_from_raw(2), Ok(2));
        assert!(g.vertex_from_raw(3).is_err());
    }

    #[test]
    fn test_zero_weight_rejected() {
        let mut g = Graph::undirected(2);
        g.add_edge(0, 1, 3).unwrap();
        assert_eq!(
            g.add_edge(0, 1, 0),
            Err(GraphError::ZeroWeight { from: 0, to: 1 })
        );
        assert_eq!(g.weight(0, 1), Some(3));
    }

    #[test]
    fn test_neighbors_ascending() {
        let mut g = Graph::undirected(5);
        g.add_edge(2, 4, 1).unwrap();
        g.add_edge(2, 0, 9).unwrap();
        g.add_edge(2, 3, 5).unwrap();

        let n: Vec<_> = g.neighbors(2).unwrap().collect();
        assert_eq!(n, vec![(0, 9), (3, 5), (4, 1)]);
        assert!(g.neighbors(5).is_err());
    }

    #[test]
    fn test_unit_edge() {
        let mut g = Graph::undirected(2);
        g.add_unit_edge(0, 1).unwrap();
        assert_eq!(g.weight(1, 0), Some(DEFAULT_WEIGHT));
    }

    #[test]
    fn test_density() {
        let mut g = Graph::directed(2);
        assert_eq!(g.density(), 0.0);
        g.add_unit_edge(0, 1).unwrap();
        // 2 nodes, 1 edge: 1 / (2 * 1) = 0.5
        assert!((g.density() - 0.5).abs() < 0.001);

        let mut u = Graph::undirected(2);
        u.add_unit_edge(0, 1).unwrap();
        assert!((u.density() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_edges_reported_once_when_undirected() {
        let mut g = Graph::undirected(3);
        g.add_edge(1, 0, 4).unwrap();
        g.add_edge(2, 1, 6).unwrap();
        let edges: Vec<_> = g.edges().collect();
        assert_eq!(edges, vec![(0, 1, 4), (1, 2, 6)]);
    }

    #[test]
    fn test_undirected_neighbors_of_directed_graph() {
        let mut g = Graph::directed(4);
        g.add_unit_edge(0, 1).unwrap();
        g.add_unit_edge(2, 1).unwrap();
        g.add_unit_edge(1, 1).unwrap();
        assert_eq!(g.undirected_neighbors(1), vec![0, 2]);
    }

    #[test]
    fn test_empty_graph() {
        let g = Graph::undirected(0);
        assert!(g.is_empty());
        assert!(g.adjacency_matrix().is_empty());
        assert_eq!(g.edges().count(), 0);
    }
}
