//! Breadth-first and depth-first traversal.
//!
//! All traversals expand neighbors in ascending index order and only ever
//! cover the component reachable from the start vertex. The recursive and
//! iterative depth-first variants produce identical visitation orders.

use crate::error::Result;
use crate::graph::Graph;
use std::collections::VecDeque;
use tracing::trace;

/// Breadth-first visitation order from `start`.
///
/// Vertices are marked visited when enqueued, so each vertex enters the
/// queue at most once.
pub fn bfs(graph: &Graph, start: usize) -> Result<Vec<usize>> {
    graph.check_vertex(start)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(v) = queue.pop_front() {
        order.push(v);
        for (w, _) in graph.neighbors_of(v) {
            if !visited[w] {
                visited[w] = true;
                queue.push_back(w);
            }
        }
    }

    trace!(start, visited = order.len(), "bfs complete");
    Ok(order)
}

/// Hop count from `start` for every vertex, `None` when not reached.
pub fn bfs_levels(graph: &Graph, start: usize) -> Result<Vec<Option<usize>>> {
    graph.check_vertex(start)?;

    let mut levels = vec![None; graph.vertex_count()];
    let mut queue = VecDeque::new();

    levels[start] = Some(0);
    queue.push_back(start);

    while let Some(v) = queue.pop_front() {
        let next = levels[v].map(|l| l + 1);
        for (w, _) in graph.neighbors_of(v) {
            if levels[w].is_none() {
                levels[w] = next;
                queue.push_back(w);
            }
        }
    }

    Ok(levels)
}

/// Vertices reachable from `start` (including itself), ascending.
pub fn reachable_from(graph: &Graph, start: usize) -> Result<Vec<usize>> {
    let mut nodes = bfs(graph, start)?;
    nodes.sort_unstable();
    Ok(nodes)
}

/// Depth-first visitation order from `start`, in recursive preorder.
///
/// Each frame on the explicit stack is a suspended call: the vertex and the
/// cursor into its row. Descending resumes at the next unvisited neighbor,
/// so the order is the one plain recursion gives, without call-stack depth
/// growing with the path length.
pub fn dfs_recursive(graph: &Graph, start: usize) -> Result<Vec<usize>> {
    graph.check_vertex(start)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut order = vec![start];
    let mut stack = vec![(start, 0usize)];
    visited[start] = true;

    while let Some((v, cursor)) = stack.last_mut() {
        let row = graph.row(*v);
        match (*cursor..row.len()).find(|&w| row[w] != 0 && !visited[w]) {
            Some(w) => {
                *cursor = w + 1;
                visited[w] = true;
                order.push(w);
                stack.push((w, 0));
            }
            None => {
                stack.pop();
            }
        }
    }

    trace!(start, visited = order.len(), "recursive dfs complete");
    Ok(order)
}

/// Depth-first visitation order from `start`, using an explicit stack.
///
/// Neighbors are pushed in descending order so they pop in ascending order.
/// A vertex is marked when popped, not when pushed; stale entries for
/// already-visited vertices are skipped. This keeps the order identical to
/// [`dfs_recursive`].
pub fn dfs_iterative(graph: &Graph, start: usize) -> Result<Vec<usize>> {
    graph.check_vertex(start)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    let mut stack = vec![start];

    while let Some(v) = stack.pop() {
        if visited[v] {
            continue;
        }
        visited[v] = true;
        order.push(v);

        let row = graph.row(v);
        for w in (0..row.len()).rev() {
            if row[w] != 0 && !visited[w] {
                stack.push(w);
            }
        }
    }

    trace!(start, visited = order.len(), "iterative dfs complete");
    Ok(order)
}
