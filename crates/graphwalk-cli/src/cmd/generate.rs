//! Implementation of `graphwalk generate`.
//!
//! Generates a random graph and writes its edge list to stdout: `u v` per
//! line in human mode, or a JSON document with the generation parameters.
//! The seed is part of the JSON document and is logged with `--verbose`;
//! pass it back with `--seed` to reproduce a graph.
use crate::cli::{GraphArgs, OutputFormat};
use crate::error::CliError;
use crate::format::{write_edges_human, write_edges_json};

/// Runs the `generate` command.
///
/// # Errors
///
/// [`CliError`] exit code 2 if the vertex count is zero or stdout cannot be
/// written.
pub fn run(args: &GraphArgs, format: &OutputFormat) -> Result<(), CliError> {
    let (graph, seed) = super::random_graph(args)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => write_edges_human(&mut out, &graph),
        OutputFormat::Json => write_edges_json(&mut out, &graph, args.probability, seed),
    }
    .map_err(|e| CliError::stdout(&e))
}
