/// Output formatting for graphs and search results.
///
/// Human mode reuses [`graphwalk_core::TextView`] for search reports and
/// prints edge lists as `u v` lines. JSON mode collects everything into a
/// single pretty-printed document:
///
/// - `search`: `{"vertices", "seed", "edges", "results": [...]}`, one result
///   object per strategy with `label`, `found`, `strategy`, `start`,
///   `target`, `path`, and `visited`.
/// - `generate`: `{"vertices", "edge_probability", "seed", "edges"}`.
use std::io::Write;

use graphwalk_core::{Graph, SearchReport, SearchView, Vertex};
use serde::Serialize;

// ---------------------------------------------------------------------------
// JSON search view
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ResultEntry<'a> {
    label: &'static str,
    found: bool,
    #[serde(flatten)]
    report: &'a SearchReport,
}

#[derive(Serialize)]
struct SearchDocument<'a> {
    vertices: usize,
    seed: Option<u64>,
    edges: &'a [(Vertex, Vertex)],
    results: Vec<ResultEntry<'a>>,
}

/// A [`SearchView`] that buffers reports and emits one JSON document in
/// [`JsonView::finish`].
#[derive(Debug, Default)]
pub struct JsonView {
    reports: Vec<SearchReport>,
}

impl JsonView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes the document for `graph` and every presented report.
    pub fn finish<W: Write>(
        &self,
        w: &mut W,
        graph: &Graph,
        seed: Option<u64>,
    ) -> std::io::Result<()> {
        let doc = SearchDocument {
            vertices: graph.vertex_count(),
            seed,
            edges: graph.edges(),
            results: self
                .reports
                .iter()
                .map(|report| ResultEntry {
                    label: report.label(),
                    found: report.found(),
                    report,
                })
                .collect(),
        };
        write_pretty(w, &doc)
    }
}

impl SearchView for JsonView {
    type Error = std::convert::Infallible;

    fn present(&mut self, _graph: &Graph, report: &SearchReport) -> Result<(), Self::Error> {
        self.reports.push(report.clone());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Edge lists
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct GraphDocument<'a> {
    vertices: usize,
    edge_probability: u8,
    seed: u64,
    edges: &'a [(Vertex, Vertex)],
}

/// Writes one `u v` line per edge.
pub fn write_edges_human<W: Write>(w: &mut W, graph: &Graph) -> std::io::Result<()> {
    for (u, v) in graph.edges() {
        writeln!(w, "{u} {v}")?;
    }
    Ok(())
}

/// Writes the generated graph and its parameters as JSON.
pub fn write_edges_json<W: Write>(
    w: &mut W,
    graph: &Graph,
    edge_probability: u8,
    seed: u64,
) -> std::io::Result<()> {
    let doc = GraphDocument {
        vertices: graph.vertex_count(),
        edge_probability,
        seed,
        edges: graph.edges(),
    };
    write_pretty(w, &doc)
}

fn write_pretty<W: Write, T: Serialize>(w: &mut W, value: &T) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
