//! Path reconstruction from a parent map.

use crate::graph::Vertex;

/// Walks `parents` backward from `target` and returns the path start → target.
///
/// `parents[v]` is the vertex that first discovered `v`, or `None` for the
/// search's start vertex. The walk stops at the first `None`, which is the
/// start, then reverses the collected vertices.
///
/// Only call this once `target` has actually been reached. An out-of-range
/// `target` or a parent chain that loops back on itself yields an empty
/// path.
pub fn reconstruct_path(parents: &[Option<Vertex>], target: Vertex) -> Vec<Vertex> {
    if target >= parents.len() {
        return Vec::new();
    }

    let mut path = vec![target];
    let mut current = target;
    while let Some(prev) = parents.get(current).copied().flatten() {
        path.push(prev);
        if path.len() > parents.len() {
            // A simple path never repeats a vertex, so the map is malformed.
            return Vec::new();
        }
        current = prev;
    }
    path.reverse();
    path
}
