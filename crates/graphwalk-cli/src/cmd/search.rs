//! Implementation of `graphwalk search`.
//!
//! Builds a graph, either from explicit `--edge U-V` flags or randomly from
//! `--vertices`/`--probability`/`--seed`, then runs the requested strategies
//! from `--start` to `--target` (default: the last vertex).
//!
//! Output (human mode): one line per strategy, e.g. `BFS path found: 0 4 9`
//! or `DFS path not found.`; with `--verbose`, each is followed by a
//! `BFS visited: ...` line.
//! Output (JSON mode): a single document, see [`crate::format`].
//!
//! Exit codes: 0 = at least one strategy found a path, 1 = none did,
//! 2 = invalid graph parameters or vertex indices.
use graphwalk_core::{Graph, SearchReport, SearchView, TextView, Vertex, search};

use crate::cli::{EdgeArg, GraphArgs, OutputFormat, StrategyArg};
use crate::error::CliError;
use crate::format::JsonView;

/// Parsed arguments of the `search` subcommand.
#[derive(Debug)]
pub struct SearchRequest<'a> {
    pub graph: &'a GraphArgs,
    pub edges: &'a [EdgeArg],
    pub start: Vertex,
    pub target: Option<Vertex>,
    pub strategy: StrategyArg,
}

/// Runs the `search` command.
///
/// # Errors
///
/// - [`CliError`] exit code 2 if the graph cannot be built or an endpoint is
///   out of range.
/// - [`CliError`] exit code 1 if no requested strategy reached the target.
pub fn run(req: &SearchRequest<'_>, format: &OutputFormat, verbose: bool) -> Result<(), CliError> {
    let (graph, seed) = build_graph(req)?;
    let target = req
        .target
        .unwrap_or_else(|| graph.vertex_count().saturating_sub(1));

    let mut reports = Vec::with_capacity(req.strategy.strategies().len());
    for &strategy in req.strategy.strategies() {
        let outcome = search(&graph, req.start, target, strategy)?;
        reports.push(SearchReport::new(strategy, req.start, target, outcome));
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => {
            let mut view = TextView::new(&mut out).with_visited(verbose);
            for report in &reports {
                view.present(&graph, report)
                    .map_err(|e| CliError::stdout(&e))?;
            }
        }
        OutputFormat::Json => {
            let mut view = JsonView::new();
            for report in &reports {
                match view.present(&graph, report) {
                    Ok(()) => {}
                    Err(never) => match never {},
                }
            }
            view.finish(&mut out, &graph, seed)
                .map_err(|e| CliError::stdout(&e))?;
        }
    }

    if reports.iter().any(SearchReport::found) {
        Ok(())
    } else {
        Err(CliError::NoPath {
            start: req.start,
            target,
        })
    }
}

/// Builds the graph from explicit edges when any were given, otherwise
/// randomly. Returns the seed used for random graphs.
fn build_graph(req: &SearchRequest<'_>) -> Result<(Graph, Option<u64>), CliError> {
    if req.edges.is_empty() {
        let (graph, seed) = super::random_graph(req.graph)?;
        return Ok((graph, Some(seed)));
    }

    let mut graph = Graph::new(req.graph.vertices)?;
    for edge in req.edges {
        graph.add_edge(edge.u, edge.v)?;
    }
    tracing::info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "built graph from explicit edges"
    );
    Ok((graph, None))
}
