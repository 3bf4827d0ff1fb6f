/// Command module for the `graphwalk` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the parsed arguments and returns `Ok(())` on success or
/// a [`crate::error::CliError`] on failure.
pub mod generate;
pub mod search;

use graphwalk_core::{GeneratorConfig, Graph, build_random_graph};

use crate::cli::GraphArgs;
use crate::error::CliError;

/// Builds a random graph from the shared graph flags.
///
/// Returns the graph together with the seed actually used, which is drawn
/// fresh when `--seed` was not given.
///
/// # Errors
///
/// [`CliError`] exit code 2 if the vertex count is zero.
pub fn random_graph(args: &GraphArgs) -> Result<(Graph, u64), CliError> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let config = GeneratorConfig::new(args.vertices, args.probability, seed);
    let graph = build_random_graph(&config)?;
    tracing::info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        probability = args.probability,
        seed,
        "built random graph"
    );
    Ok((graph, seed))
}
