//! One-way presentation contract for search results.
//!
//! The core produces a [`SearchReport`] per strategy and hands it, together
//! with the read-only [`Graph`], to a [`SearchView`]. Views never call back
//! into the search engine and never mutate the graph, so any renderer
//! (text, JSON, or a graphical window living outside this crate) can be
//! attached without the core depending on it.

use std::io::Write;

use serde::Serialize;

use crate::graph::{Graph, Vertex};
use crate::search::{SearchOutcome, Strategy};

/// What a view receives for one traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    /// Frontier discipline the traversal used.
    pub strategy: Strategy,
    /// Vertex the search started from.
    pub start: Vertex,
    /// Vertex the search looked for.
    pub target: Vertex,
    /// Vertices from start to target, empty when not found.
    pub path: Vec<Vertex>,
    /// Discovered vertices, in discovery order.
    pub visited: Vec<Vertex>,
}

impl SearchReport {
    /// Wraps a finished traversal.
    pub fn new(strategy: Strategy, start: Vertex, target: Vertex, outcome: SearchOutcome) -> Self {
        Self {
            strategy,
            start,
            target,
            path: outcome.path,
            visited: outcome.visited,
        }
    }

    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Strategy label shown to users (`"BFS"` or `"DFS"`).
    pub fn label(&self) -> &'static str {
        self.strategy.label()
    }
}

/// A consumer of search results.
pub trait SearchView {
    type Error;

    /// Renders one report against the graph it was computed on.
    ///
    /// # Errors
    ///
    /// Implementation-defined; typically an output failure.
    fn present(&mut self, graph: &Graph, report: &SearchReport) -> Result<(), Self::Error>;
}

/// Plain-text view writing one line per report:
/// `BFS path found: 0 3 9` or `BFS path not found.`
///
/// With `show_visited` set, a second line lists the visited vertices.
#[derive(Debug)]
pub struct TextView<W: Write> {
    writer: W,
    show_visited: bool,
}

impl<W: Write> TextView<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            show_visited: false,
        }
    }

    /// Also print the visited set under each path line.
    pub fn with_visited(mut self, show_visited: bool) -> Self {
        self.show_visited = show_visited;
        self
    }

    /// Consumes the view and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn join_vertices(vertices: &[Vertex]) -> String {
    vertices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl<W: Write> SearchView for TextView<W> {
    type Error = std::io::Error;

    fn present(&mut self, _graph: &Graph, report: &SearchReport) -> std::io::Result<()> {
        if report.found() {
            writeln!(
                self.writer,
                "{} path found: {}",
                report.label(),
                join_vertices(&report.path)
            )?;
        } else {
            writeln!(self.writer, "{} path not found.", report.label())?;
        }
        if self.show_visited {
            writeln!(
                self.writer,
                "{} visited: {}",
                report.label(),
                join_vertices(&report.visited)
            )?;
        }
        Ok(())
    }
}
