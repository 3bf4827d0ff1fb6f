#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod graph;
pub mod search;
pub mod view;

pub use graph::generate::{
    DEFAULT_EDGE_PROBABILITY, DEFAULT_VERTICES, GeneratorConfig, MAX_EDGE_PROBABILITY,
    build_random_graph, generate_random_graph,
};
pub use graph::{Graph, GraphError, Vertex};
pub use search::path::reconstruct_path;
pub use search::{SearchOutcome, Strategy, bfs, dfs, search};
pub use view::{SearchReport, SearchView, TextView};

/// Returns the current version of the graphwalk-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
