/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `graphwalk` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2**: input failure: the graph parameters or vertex indices
///   were rejected, or output could not be written.
/// - Exit code **1**: logical failure: every requested search ran to
///   completion but none reached the target.
use std::fmt;

use graphwalk_core::{GraphError, Vertex};

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `graphwalk` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A graph parameter is outside its accepted domain.
    InvalidArgument {
        /// Description of the rejected value.
        detail: String,
    },

    /// A vertex index given on the command line does not exist.
    VertexOutOfRange {
        /// The rejected index.
        index: Vertex,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// Writing results failed.
    IoError {
        /// A human-readable label for the destination.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// No requested strategy found a path.
    ///
    /// The per-strategy results have already been printed; this variant
    /// exists so `main` can exit with code 1.
    NoPath {
        /// Start vertex of the search.
        start: Vertex,
        /// Target vertex of the search.
        target: Vertex,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } | Self::VertexOutOfRange { .. } | Self::IoError { .. } => {
                2
            }
            Self::NoPath { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::InvalidArgument { detail } => format!("error: invalid argument: {detail}"),
            Self::VertexOutOfRange {
                index,
                vertex_count,
            } => format!(
                "error: vertex {index} is out of range (graph has {vertex_count} vertices: 0..{vertex_count})"
            ),
            Self::IoError { source, detail } => {
                format!("error: I/O error writing {source}: {detail}")
            }
            Self::NoPath { start, target } => {
                format!("error: no path from {start} to {target}")
            }
        }
    }

    /// Wraps an output failure on stdout.
    pub fn stdout(e: &std::io::Error) -> Self {
        Self::IoError {
            source: "stdout".to_owned(),
            detail: e.to_string(),
        }
    }
}

impl From<GraphError> for CliError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::InvalidArgument { detail } => Self::InvalidArgument { detail },
            GraphError::IndexOutOfRange {
                index,
                vertex_count,
            } => Self::VertexOutOfRange {
                index,
                vertex_count,
            },
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // ── exit_code ────────────────────────────────────────────────────────────

    #[test]
    fn invalid_argument_is_exit_2() {
        let e = CliError::InvalidArgument {
            detail: "vertex count must be positive".to_owned(),
        };
        assert_eq!(e.exit_code(), 2);
    }

    #[test]
    fn vertex_out_of_range_is_exit_2() {
        let e = CliError::VertexOutOfRange {
            index: 12,
            vertex_count: 10,
        };
        assert_eq!(e.exit_code(), 2);
    }

    #[test]
    fn io_error_is_exit_2() {
        let e = CliError::stdout(&std::io::Error::other("broken pipe"));
        assert_eq!(e.exit_code(), 2);
    }

    #[test]
    fn no_path_is_exit_1() {
        let e = CliError::NoPath {
            start: 0,
            target: 9,
        };
        assert_eq!(e.exit_code(), 1);
    }

    // ── message content ──────────────────────────────────────────────────────

    #[test]
    fn vertex_out_of_range_message_names_index_and_bound() {
        let e = CliError::VertexOutOfRange {
            index: 12,
            vertex_count: 10,
        };
        let msg = e.message();
        assert!(msg.contains("12"), "message: {msg}");
        assert!(msg.contains("10 vertices"), "message: {msg}");
    }

    #[test]
    fn no_path_message_names_endpoints() {
        let msg = CliError::NoPath {
            start: 3,
            target: 7,
        }
        .message();
        assert_eq!(msg, "error: no path from 3 to 7");
    }

    #[test]
    fn io_error_message_contains_detail() {
        let msg = CliError::stdout(&std::io::Error::other("device full")).message();
        assert!(msg.contains("stdout"), "message: {msg}");
        assert!(msg.contains("device full"), "message: {msg}");
    }

    #[test]
    fn graph_errors_convert() {
        let e: CliError = GraphError::IndexOutOfRange {
            index: 4,
            vertex_count: 2,
        }
        .into();
        assert!(matches!(
            e,
            CliError::VertexOutOfRange {
                index: 4,
                vertex_count: 2
            }
        ));

        let e: CliError = GraphError::InvalidArgument {
            detail: "bad".to_owned(),
        }
        .into();
        assert!(matches!(e, CliError::InvalidArgument { .. }));
    }

    #[test]
    fn display_matches_message() {
        let e = CliError::NoPath {
            start: 0,
            target: 1,
        };
        assert_eq!(format!("{e}"), e.message());
    }

    #[test]
    fn error_trait_is_implemented() {
        let e: Box<dyn std::error::Error> = Box::new(CliError::NoPath {
            start: 0,
            target: 1,
        });
        assert!(!e.to_string().is_empty());
    }
}
