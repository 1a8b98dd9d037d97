//! JavaScript bindings.
//!
//! Exposes [`Graph`] as the JS class `Graph`. Vertex arguments arrive as
//! signed integers so that `-1` and other out-of-range values are reported
//! as `InvalidVertexIndex` errors instead of wrapping. Errors are thrown as
//! JS `Error`s carrying the [`GraphError`](crate::error::GraphError) message.

use crate::algorithms::{articulation, shortest_path, spanning_tree, traversal};
use crate::error::GraphError;
use crate::graph::{Graph, DEFAULT_WEIGHT};
use js_sys::Uint32Array;
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

/// Install the panic hook so Rust panics show up in the browser console.
/// Call once after loading the module.
#[wasm_bindgen(js_name = setPanicHook)]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// JS handle owning a [`Graph`].
#[wasm_bindgen(js_name = Graph)]
pub struct JsGraph {
    inner: Graph,
}

#[wasm_bindgen(js_class = Graph)]
impl JsGraph {
    /// Create an edgeless graph; undirected unless `directed` is true.
    #[wasm_bindgen(constructor)]
    pub fn new(vertex_count: usize, directed: Option<bool>) -> JsGraph {
        JsGraph {
            inner: Graph::new(vertex_count, directed.unwrap_or(false)),
        }
    }

    /// Add an edge, weight defaults to 1. Throws on invalid index or zero weight.
    #[wasm_bindgen(js_name = addEdge)]
    pub fn add_edge(&mut self, from: i32, to: i32, weight: Option<i32>) -> Result<(), JsError> {
        let from = self.vertex(from)?;
        let to = self.vertex(to)?;
        self.inner.add_edge(from, to, weight.unwrap_or(DEFAULT_WEIGHT))?;
        Ok(())
    }

    /// Number of vertices.
    #[wasm_bindgen(js_name = vertexCount)]
    pub fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    /// Number of edges.
    #[wasm_bindgen(js_name = edgeCount)]
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Whether edges are one-way.
    #[wasm_bindgen(js_name = isDirected)]
    pub fn is_directed(&self) -> bool {
        self.inner.is_directed()
    }

    /// Weight of `from -> to`, or undefined when there is no such edge.
    pub fn weight(&self, from: i32, to: i32) -> Option<i32> {
        let from = usize::try_from(from).ok()?;
        let to = usize::try_from(to).ok()?;
        self.inner.weight(from, to)
    }

    /// Neighbors as JSON array of `[vertex, weight]` pairs, ascending.
    pub fn neighbors(&self, vertex: i32) -> Result<JsValue, JsError> {
        let vertex = self.vertex(vertex)?;
        let pairs: Vec<(usize, i32)> = self.inner.neighbors(vertex)?.collect();
        Ok(to_js(&pairs))
    }

    /// Weight matrix as nested JSON arrays (0 = no edge).
    #[wasm_bindgen(js_name = adjacencyMatrix)]
    pub fn adjacency_matrix(&self) -> JsValue {
        to_js(&self.inner.adjacency_matrix())
    }

    /// Breadth-first visitation order.
    pub fn bfs(&self, start: i32) -> Result<Uint32Array, JsError> {
        let start = self.vertex(start)?;
        Ok(to_u32_array(&traversal::bfs(&self.inner, start)?))
    }

    /// Depth-first visitation order (recursive).
    #[wasm_bindgen(js_name = dfsRecursive)]
    pub fn dfs_recursive(&self, start: i32) -> Result<Uint32Array, JsError> {
        let start = self.vertex(start)?;
        Ok(to_u32_array(&traversal::dfs_recursive(&self.inner, start)?))
    }

    /// Depth-first visitation order (explicit stack); same order as `dfsRecursive`.
    #[wasm_bindgen(js_name = dfsIterative)]
    pub fn dfs_iterative(&self, start: i32) -> Result<Uint32Array, JsError> {
        let start = self.vertex(start)?;
        Ok(to_u32_array(&traversal::dfs_iterative(&self.inner, start)?))
    }

    /// Shortest distances from `start` as JSON array; `null` marks unreachable vertices.
    pub fn dijkstra(&self, start: i32) -> Result<JsValue, JsError> {
        let start = self.vertex(start)?;
        let paths = shortest_path::dijkstra(&self.inner, start)?;
        Ok(to_js(&paths.distances))
    }

    /// Vertices on a shortest path from `start` to `target`, or null if unreachable.
    #[wasm_bindgen(js_name = shortestPath)]
    pub fn shortest_path(&self, start: i32, target: i32) -> Result<JsValue, JsError> {
        let start = self.vertex(start)?;
        let target = self.vertex(target)?;
        let paths = shortest_path::dijkstra(&self.inner, start)?;
        Ok(to_js(&paths.path_to(target)))
    }

    /// Minimum spanning tree of the start's component.
    /// Returns JSON: { start: number, edges: {parent, child, weight}[], total_weight: number }
    pub fn prim(&self, start: i32) -> Result<JsValue, JsError> {
        let start = self.vertex(start)?;
        let tree = spanning_tree::prim(&self.inner, start)?;
        Ok(to_js(&tree))
    }

    /// Find articulation points (cut vertices) in the graph.
    #[wasm_bindgen(js_name = articulationPoints)]
    pub fn articulation_points(&self) -> Uint32Array {
        to_u32_array(&articulation::articulation_points(&self.inner))
    }
}

#[cfg(feature = "bridges")]
#[wasm_bindgen(js_class = Graph)]
impl JsGraph {
    /// Find bridges (cut edges). Returns array of [from, to] pairs.
    pub fn bridges(&self) -> JsValue {
        to_js(&articulation::bridges(&self.inner))
    }
}

impl JsGraph {
    /// Borrow the wrapped graph.
    pub fn graph(&self) -> &Graph {
        &self.inner
    }

    fn vertex(&self, raw: i32) -> Result<usize, GraphError> {
        self.inner.vertex_from_raw(i64::from(raw))
    }
}

impl From<Graph> for JsGraph {
    fn from(inner: Graph) -> Self {
        JsGraph { inner }
    }
}

/// Serialize with `null` for `None` and plain numbers for 64-bit integers.
fn to_js<T: Serialize + ?Sized>(value: &T) -> JsValue {
    value
        .serialize(&Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

/// `Graph::new` bounds `n * n` by `usize`, so on 64-bit hosts every vertex
/// index is below 2^32; the saturating fallback is unreachable.
fn to_u32_array(vertices: &[usize]) -> Uint32Array {
    let values: Vec<u32> = vertices
        .iter()
        .map(|&v| u32::try_from(v).unwrap_or(u32::MAX))
        .collect();
    Uint32Array::from(&values[..])
}
