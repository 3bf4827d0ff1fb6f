//! Post-search invariant checkers for correctness validation.

use std::collections::HashSet;

use graphwalk_core::{Graph, SearchOutcome, Vertex};
use petgraph::algo::dijkstra;
use petgraph::graph::NodeIndex;

/// Verifies that every adjacency entry is mirrored and that the degree sum
/// matches the edge list.
pub fn check_graph_symmetric(graph: &Graph) -> Result<(), String> {
    for (u, neighbors) in graph.adjacency().iter().enumerate() {
        for &v in neighbors {
            if !graph.contains(v) {
                return Err(format!("vertex {u} lists out-of-range neighbour {v}"));
            }
            let forward = neighbors.iter().filter(|&&w| w == v).count();
            let backward = graph.neighbors(v).iter().filter(|&&w| w == u).count();
            if forward != backward {
                return Err(format!(
                    "edge {{{u}, {v}}} is asymmetric: {forward} forward, {backward} backward"
                ));
            }
        }
    }

    let degree_sum: usize = graph.adjacency().iter().map(Vec::len).sum();
    if degree_sum != 2 * graph.edge_count() {
        return Err(format!(
            "degree sum {degree_sum} does not match {} edges",
            graph.edge_count()
        ));
    }
    Ok(())
}

/// Verifies a found path:
/// - starts at `start`, ends at `target`
/// - each consecutive pair is joined by an edge
/// - no vertex repeats
pub fn check_path_valid(
    graph: &Graph,
    start: Vertex,
    target: Vertex,
    path: &[Vertex],
) -> Result<(), String> {
    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return Err("path is empty".to_owned());
    };
    if first != start {
        return Err(format!("path starts at {first}, expected {start}"));
    }
    if last != target {
        return Err(format!("path ends at {last}, expected {target}"));
    }
    for pair in path.windows(2) {
        if !graph.has_edge(pair[0], pair[1]) {
            return Err(format!("{} -> {} is not an edge", pair[0], pair[1]));
        }
    }
    let unique: HashSet<_> = path.iter().collect();
    if unique.len() != path.len() {
        return Err("path contains repeated vertices".to_owned());
    }
    Ok(())
}

/// Verifies the visited list: starts at `start`, no duplicates, every entry
/// in range.
pub fn check_visited_unique(
    graph: &Graph,
    start: Vertex,
    visited: &[Vertex],
) -> Result<(), String> {
    if visited.first() != Some(&start) {
        return Err(format!("visited does not begin with start {start}"));
    }
    let mut seen = HashSet::with_capacity(visited.len());
    for &v in visited {
        if !graph.contains(v) {
            return Err(format!("visited vertex {v} is out of range"));
        }
        if !seen.insert(v) {
            return Err(format!("vertex {v} visited twice"));
        }
    }
    Ok(())
}

/// Verifies that a breadth-first outcome is a shortest path, using petgraph's
/// Dijkstra with unit weights as the reference.
pub fn check_bfs_is_shortest(
    graph: &Graph,
    start: Vertex,
    target: Vertex,
    outcome: &SearchOutcome,
) -> Result<(), String> {
    let distances = dijkstra(&graph.to_petgraph(), NodeIndex::new(start), None, |_| 1usize);
    match (distances.get(&NodeIndex::new(target)), outcome.hops()) {
        (Some(&expected), Some(hops)) if expected == hops => Ok(()),
        (Some(&expected), Some(hops)) => Err(format!(
            "path from {start} to {target} has {hops} hops, shortest is {expected}"
        )),
        (Some(_), None) => Err(format!("{target} is reachable from {start} but no path found")),
        (None, Some(_)) => Err(format!(
            "path found from {start} to unreachable {target}"
        )),
        (None, None) => Ok(()),
    }
}

/// Verifies that a search which missed its target visited exactly the
/// connected component of `start`.
pub fn check_component_closed(
    graph: &Graph,
    start: Vertex,
    outcome: &SearchOutcome,
) -> Result<(), String> {
    if outcome.found() {
        return Err("search found its target; the component check needs a miss".to_owned());
    }
    let distances = dijkstra(&graph.to_petgraph(), NodeIndex::new(start), None, |_| 1usize);
    let component: HashSet<Vertex> = distances.keys().map(|idx| idx.index()).collect();
    let visited: HashSet<Vertex> = outcome.visited.iter().copied().collect();
    if visited != component {
        return Err(format!(
            "visited {} vertices, component of {start} has {}",
            visited.len(),
            component.len()
        ));
    }
    Ok(())
}
