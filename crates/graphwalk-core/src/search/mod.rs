//! Uninformed path search: breadth-first and depth-first traversal.
//!
//! Both strategies share one engine, [`search`]. It keeps a per-call visited
//! marker array and parent map, and a frontier whose removal
//! end is selected by the [`Strategy`]:
//!
//! - [`Strategy::BreadthFirst`]: FIFO. Vertices are expanded in
//!   non-decreasing distance from the start, so the path found is a shortest
//!   path by edge count.
//! - [`Strategy::DepthFirst`]: LIFO. The most recently discovered vertex is
//!   expanded next, so one branch is followed to exhaustion before
//!   backtracking. The path found is valid but not necessarily shortest.
//!
//! # Discovery
//!
//! A vertex is marked visited and given its parent when it is first pushed,
//! not when it is expanded, so no vertex ever enters the frontier twice and
//! both strategies run in O(V + E). Unvisited neighbours are discovered in
//! adjacency-list order. Under depth-first popping this reverses the
//! expansion order among siblings; which of several valid paths DFS returns
//! is not part of its contract.
//!
//! # Termination
//!
//! The loop ends when the target is removed from the frontier (the path is
//! rebuilt with [`path::reconstruct_path`]) or when the frontier is empty.
//! An unreachable target is a normal outcome: the path is empty and
//! [`SearchOutcome::visited`] lists the start's whole connected component.
mod frontier;
pub mod path;


use serde::Serialize;

use crate::graph::{Graph, GraphError, Vertex};
use frontier::Frontier;
use path::reconstruct_path;

/// Frontier discipline used by [`search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// FIFO frontier; finds a shortest path.
    BreadthFirst,
    /// LIFO frontier; finds some path.
    DepthFirst,
}

impl Strategy {
    /// Both strategies, breadth-first first.
    pub const ALL: [Strategy; 2] = [Strategy::BreadthFirst, Strategy::DepthFirst];

    /// Short display label: `"BFS"` or `"DFS"`.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "BFS",
            Strategy::DepthFirst => "DFS",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    /// Vertices from start to target inclusive, or empty if the target was
    /// not reached.
    pub path: Vec<Vertex>,
    /// Every vertex discovered during the traversal, in discovery order.
    /// The start vertex is always first.
    pub visited: Vec<Vertex>,
}

impl SearchOutcome {
    /// Returns `true` if the target was reached.
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges on the path, or `None` when nothing was found.
    pub fn hops(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

/// Searches `graph` from `start` for `target` using `strategy`.
///
/// # Errors
///
/// Returns [`GraphError::IndexOutOfRange`] if `start` or `target` is not a
/// vertex of `graph`.
pub fn search(
    graph: &Graph,
    start: Vertex,
    target: Vertex,
    strategy: Strategy,
) -> Result<SearchOutcome, GraphError> {
    graph.check_vertex(start)?;
    graph.check_vertex(target)?;

    let _span = tracing::debug_span!("search", %strategy, start, target).entered();

    let n = graph.vertex_count();
    let mut marked = vec![false; n];
    let mut parents: Vec<Option<Vertex>> = vec![None; n];
    let mut visited: Vec<Vertex> = Vec::new();
    let mut frontier = Frontier::with_capacity(strategy, n);

    marked[start] = true;
    visited.push(start);
    frontier.push(start);

    while let Some(current) = frontier.pop() {
        tracing::trace!(vertex = current, frontier = frontier.len(), "expanding");

        if current == target {
            let path = reconstruct_path(&parents, target);
            tracing::debug!(
                path_len = path.len(),
                visited = visited.len(),
                "target reached"
            );
            return Ok(SearchOutcome { path, visited });
        }

        for &neighbour in graph.neighbors(current) {
            if !marked[neighbour] {
                marked[neighbour] = true;
                parents[neighbour] = Some(current);
                visited.push(neighbour);
                frontier.push(neighbour);
            }
        }
    }

    tracing::debug!(visited = visited.len(), "target unreachable");
    Ok(SearchOutcome {
        path: Vec::new(),
        visited,
    })
}

/// Breadth-first search from `start` to `target`.
///
/// # Errors
///
/// See [`search`].
pub fn bfs(graph: &Graph, start: Vertex, target: Vertex) -> Result<SearchOutcome, GraphError> {
    search(graph, start, target, Strategy::BreadthFirst)
}

/// Depth-first search from `start` to `target`.
///
/// # Errors
///
/// See [`search`].
pub fn dfs(graph: &Graph, start: Vertex, target: Vertex) -> Result<SearchOutcome, GraphError> {
    search(graph, start, target, Strategy::DepthFirst)
}
