//! Undirected graph over dense integer vertices.
//!
//! A [`Graph`] owns a fixed number of vertices, identified by indices in
//! `[0, vertex_count)`, and an adjacency list per vertex. Edges are stored
//! symmetrically: inserting `(u, v)` appends `v` to `u`'s list and `u` to
//! `v`'s list, so every neighbour list preserves edge-insertion order. That
//! order is the tie-break used by the [`crate::search`] engine.
//!
//! # Duplicates and Self-Loops
//!
//! [`Graph::add_edge`] does not deduplicate. Parallel edges are harmless to
//! traversal because the visited check absorbs them. The random generator in
//! [`generate`] only considers pairs `i < j`, so it never produces self-loops
//! or duplicates on its own.
//!
//! # Interop
//!
//! [`Graph::to_petgraph`] exports the same vertex indices and edge multiset as
//! a `petgraph` [`UnGraph`], which the correctness harness uses to cross-check
//! search results against petgraph's own algorithms.
pub mod generate;


use petgraph::graph::{NodeIndex, UnGraph};

/// Index of a vertex within a [`Graph`].
pub type Vertex = usize;

/// Errors raised by graph construction and search.
///
/// An unreachable target is not an error: searches report it as an empty
/// path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A construction parameter is outside its accepted domain (a zero
    /// vertex count, or an edge probability above 100).
    #[error("invalid argument: {detail}")]
    InvalidArgument {
        /// Human-readable description of the rejected value.
        detail: String,
    },
    /// A vertex index does not name a vertex of the graph.
    #[error("vertex {index} is out of range for a graph with {vertex_count} vertices")]
    IndexOutOfRange {
        /// The rejected index.
        index: Vertex,
        /// Number of vertices in the graph the index was checked against.
        vertex_count: usize,
    },
}

/// An undirected multigraph with `vertex_count` vertices.
///
/// Construct with [`Graph::new`], then populate with [`Graph::add_edge`] or
/// [`generate::generate_random_graph`]. Traversals borrow the graph
/// immutably.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<Vertex>>,
    edges: Vec<(Vertex, Vertex)>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] if `vertex_count` is zero.
    pub fn new(vertex_count: usize) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::InvalidArgument {
                detail: "vertex count must be positive".to_owned(),
            });
        }
        Ok(Self {
            adjacency: vec![Vec::new(); vertex_count],
            edges: Vec::new(),
        })
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of undirected edges inserted so far, counting
    /// duplicates.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if `v` names a vertex of this graph.
    pub fn contains(&self, v: Vertex) -> bool {
        v < self.adjacency.len()
    }

    /// Checks that `v` is a valid vertex index.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::IndexOutOfRange`] if it is not.
    pub fn check_vertex(&self, v: Vertex) -> Result<(), GraphError> {
        if self.contains(v) {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange {
                index: v,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Inserts the undirected edge `{u, v}`.
    ///
    /// Appends `v` to `u`'s neighbour list and `u` to `v`'s. No
    /// deduplication is performed. The graph is left untouched when either
    /// index is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::IndexOutOfRange`] if `u` or `v` is not a vertex.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        self.edges.push((u.min(v), u.max(v)));
        Ok(())
    }

    /// Returns the neighbours of `v` in edge-insertion order.
    ///
    /// Returns an empty slice if `v` is out of range.
    pub fn neighbors(&self, v: Vertex) -> &[Vertex] {
        self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns `true` if at least one edge joins `u` and `v`.
    pub fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.neighbors(u).contains(&v)
    }

    /// Returns every inserted edge once, as `(lower, higher)`, in insertion
    /// order.
    pub fn edges(&self) -> &[(Vertex, Vertex)] {
        &self.edges
    }

    /// Returns the full adjacency relation, indexed by vertex.
    pub fn adjacency(&self) -> &[Vec<Vertex>] {
        &self.adjacency
    }

    /// Exports the graph as a `petgraph` [`UnGraph`].
    ///
    /// Vertex `i` becomes `NodeIndex::new(i)`; every inserted edge, including
    /// duplicates, becomes one petgraph edge.
    pub fn to_petgraph(&self) -> UnGraph<(), ()> {
        let mut g = UnGraph::with_capacity(self.vertex_count(), self.edges.len());
        for _ in 0..self.vertex_count() {
            g.add_node(());
        }
        for &(u, v) in &self.edges {
            g.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
        }
        g
    }
}
