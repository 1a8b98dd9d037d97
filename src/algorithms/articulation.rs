//! Articulation points (cut vertices) algorithm.
//!
//! Finds vertices whose removal disconnects the graph.
//! Uses Tarjan's low-link algorithm on the undirected view, restarting the
//! depth-first search from every undiscovered vertex so disconnected graphs
//! are fully covered.

use crate::error::Result;
use crate::graph::Graph;
use tracing::trace;

/// Find articulation points (cut vertices) using Tarjan's algorithm.
///
/// An articulation point is a vertex whose removal increases the number
/// of connected components in the graph.
///
/// # Algorithm
/// Uses DFS to compute discovery times and low-link values:
/// - disc[v]: discovery time of vertex v
/// - low[v]: minimum discovery time reachable from subtree of v
///
/// A vertex u is an articulation point if:
/// 1. u is root of DFS tree and has >1 children, OR
/// 2. u is not root and has child v with low[v] >= disc[u]
///
/// Directed graphs are analyzed through their undirected view.
///
/// # Returns
/// Vertex indices that are articulation points, ascending.
pub fn articulation_points(graph: &Graph) -> Vec<usize> {
    cut_vertices(graph, 0..graph.vertex_count())
}

/// Same as [`articulation_points`], but the first DFS tree is rooted at `root`.
///
/// The answer does not depend on the root; this entry point exists so
/// callers can check that.
pub fn articulation_points_from(graph: &Graph, root: usize) -> Result<Vec<usize>> {
    graph.check_vertex(root)?;
    Ok(cut_vertices(
        graph,
        std::iter::once(root).chain(0..graph.vertex_count()),
    ))
}

fn cut_vertices(graph: &Graph, roots: impl IntoIterator<Item = usize>) -> Vec<usize> {
    let n = graph.vertex_count();
    if n == 0 {
        return Vec::new();
    }

    let neighbors = build_undirected_neighbors(graph);
    let mut search = LowLink::new(&neighbors);
    let mut is_ap = vec![false; n];

    for root in roots {
        if search.is_discovered(root) {
            continue;
        }
        search.explore(root, |done| {
            // Case 1: root with >1 DFS children
            // Case 2: non-root whose child subtree cannot reach above it
            if (done.parent_is_root && done.parent_children > 1)
                || (!done.parent_is_root && done.child_low >= done.parent_disc)
            {
                is_ap[done.parent] = true;
            }
        });
    }

    let result: Vec<usize> = is_ap
        .iter()
        .enumerate()
        .filter_map(|(i, &ap)| if ap { Some(i) } else { None })
        .collect();
    trace!(articulation_points = result.len(), "tarjan complete");
    result
}

/// Find bridges (cut edges) in the graph.
/// A bridge is an edge whose removal disconnects the graph.
///
/// Returns `(min, max)` pairs in ascending order.
#[cfg(feature = "bridges")]
pub fn bridges(graph: &Graph) -> Vec<(usize, usize)> {
    let n = graph.vertex_count();
    if n == 0 {
        return Vec::new();
    }

    let neighbors = build_undirected_neighbors(graph);
    let mut search = LowLink::new(&neighbors);
    let mut bridge_list = Vec::new();

    for root in 0..n {
        if search.is_discovered(root) {
            continue;
        }
        search.explore(root, |done| {
            // Bridge condition: if low[child] > disc[parent], edge is a bridge
            if done.child_low > done.parent_disc {
                let (u, v) = (done.parent, done.child);
                bridge_list.push((u.min(v), u.max(v)));
            }
        });
    }

    bridge_list.sort_unstable();
    bridge_list
}

/// Build undirected neighbor lists (ascending, no self-loops).
fn build_undirected_neighbors(graph: &Graph) -> Vec<Vec<usize>> {
    (0..graph.vertex_count())
        .map(|u| graph.undirected_neighbors(u))
        .collect()
}

/// Reported once a DFS tree edge `parent -> child` has been fully explored.
struct TreeEdgeDone {
    parent: usize,
    #[cfg_attr(not(feature = "bridges"), allow(dead_code))]
    child: usize,
    parent_is_root: bool,
    /// DFS children of `parent` discovered so far
    parent_children: usize,
    child_low: usize,
    parent_disc: usize,
}

/// One pending vertex on the explicit DFS stack.
struct Frame {
    vertex: usize,
    parent: Option<usize>,
    /// Next position in the neighbor list
    cursor: usize,
    children: usize,
}

impl Frame {
    fn new(vertex: usize, parent: Option<usize>) -> Self {
        Frame {
            vertex,
            parent,
            cursor: 0,
            children: 0,
        }
    }
}

/// Discovery time / low-link state shared across DFS trees of one sweep.
struct LowLink<'a> {
    neighbors: &'a [Vec<usize>],
    /// 0 = undiscovered; times start at 1
    disc: Vec<usize>,
    low: Vec<usize>,
    clock: usize,
}

impl<'a> LowLink<'a> {
    fn new(neighbors: &'a [Vec<usize>]) -> Self {
        let n = neighbors.len();
        LowLink {
            neighbors,
            disc: vec![0; n],
            low: vec![0; n],
            clock: 0,
        }
    }

    fn is_discovered(&self, v: usize) -> bool {
        self.disc[v] != 0
    }

    fn discover(&mut self, v: usize) {
        self.clock += 1;
        self.disc[v] = self.clock;
        self.low[v] = self.clock;
    }

    /// Iterative DFS from `root` with the same visit and low-link update
    /// order as the recursive formulation.
    fn explore(&mut self, root: usize, mut on_tree_edge: impl FnMut(TreeEdgeDone)) {
        self.discover(root);
        let mut stack = vec![Frame::new(root, None)];

        while let Some(frame) = stack.last_mut() {
            let u = frame.vertex;
            match self.neighbors[u].get(frame.cursor).copied() {
                Some(v) => {
                    frame.cursor += 1;
                    if !self.is_discovered(v) {
                        frame.children += 1;
                        self.discover(v);
                        stack.push(Frame::new(v, Some(u)));
                    } else if frame.parent != Some(v) {
                        // Back edge (not to parent)
                        self.low[u] = self.low[u].min(self.disc[v]);
                    }
                }
                None => {
                    stack.pop();
                    if let Some(up) = stack.last() {
                        let p = up.vertex;
                        self.low[p] = self.low[p].min(self.low[u]);
                        on_tree_edge(TreeEdgeDone {
                            parent: p,
                            child: u,
                            parent_is_root: up.parent.is_none(),
                            parent_children: up.children,
                            child_low: self.low[u],
                            parent_disc: self.disc[p],
                        });
                    }
                }
            }
        }
    }
}
