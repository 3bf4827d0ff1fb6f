//! Random edge generation.
//!
//! Every unordered pair `(i, j)` with `i < j` is considered exactly once, in
//! ascending `i` then ascending `j`. For each pair a uniform integer in
//! `[0, 100)` is drawn from the caller's random source and the edge is added
//! iff the draw is below the edge probability. Probability 100 therefore
//! yields the complete graph and probability 0 yields no edges.
//!
//! The random source is always supplied by the caller. [`build_random_graph`]
//! seeds a [`StdRng`] from [`GeneratorConfig::seed`], so the same config
//! always produces the same graph.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Graph, GraphError};

/// Vertex count used when none is configured.
pub const DEFAULT_VERTICES: usize = 10;

/// Edge probability (percent) used when none is configured.
pub const DEFAULT_EDGE_PROBABILITY: u8 = 50;

/// Largest accepted edge probability.
pub const MAX_EDGE_PROBABILITY: u8 = 100;

/// Configuration for [`build_random_graph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of vertices in the generated graph.
    pub vertices: usize,
    /// Chance, in percent (`0..=100`), that each vertex pair gets an edge.
    pub edge_probability: u8,
    /// Seed for the random number generator.
    pub seed: u64,
}

impl GeneratorConfig {
    /// Creates a config from its three parameters.
    pub fn new(vertices: usize, edge_probability: u8, seed: u64) -> Self {
        Self {
            vertices,
            edge_probability,
            seed,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_VERTICES, DEFAULT_EDGE_PROBABILITY, 0)
    }
}

/// Adds random edges to `graph` and returns how many were added.
///
/// # Errors
///
/// Returns [`GraphError::InvalidArgument`] if `edge_probability` exceeds
/// [`MAX_EDGE_PROBABILITY`]. The graph is not modified in that case.
pub fn generate_random_graph<R: Rng + ?Sized>(
    graph: &mut Graph,
    edge_probability: u8,
    rng: &mut R,
) -> Result<usize, GraphError> {
    if edge_probability > MAX_EDGE_PROBABILITY {
        return Err(GraphError::InvalidArgument {
            detail: format!(
                "edge probability must be at most {MAX_EDGE_PROBABILITY}, got {edge_probability}"
            ),
        });
    }

    let n = graph.vertex_count();
    let mut added = 0usize;
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_range(0..MAX_EDGE_PROBABILITY) < edge_probability {
                graph.add_edge(i, j)?;
                added += 1;
            }
        }
    }

    tracing::debug!(
        vertices = n,
        edge_probability,
        edges_added = added,
        "generated random graph"
    );
    Ok(added)
}

/// Builds a new graph from `config`, seeding the generator from
/// `config.seed`.
///
/// # Errors
///
/// Returns [`GraphError::InvalidArgument`] if `config.vertices` is zero or
/// `config.edge_probability` exceeds [`MAX_EDGE_PROBABILITY`].
pub fn build_random_graph(config: &GeneratorConfig) -> Result<Graph, GraphError> {
    let mut graph = Graph::new(config.vertices)?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    generate_random_graph(&mut graph, config.edge_probability, &mut rng)?;
    Ok(graph)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use rand::rngs::mock::StepRng;

    use super::*;

    /// Probability 100 connects every pair, since every draw is below 100.
    #[test]
    fn full_probability_yields_complete_graph() {
        let mut g = Graph::new(5).expect("valid");
        let mut rng = StdRng::seed_from_u64(7);
        let added = generate_random_graph(&mut g, 100, &mut rng).expect("generates");
        assert_eq!(added, 10);
        assert_eq!(g.edge_count(), 10);
        for i in 0..5 {
            for j in 0..5 {
                if i != j {
                    assert!(g.has_edge(i, j), "missing edge {i}-{j}");
                }
            }
        }
    }

    /// Probability 0 never adds an edge.
    #[test]
    fn zero_probability_yields_no_edges() {
        let mut g = Graph::new(5).expect("valid");
        let mut rng = StdRng::seed_from_u64(7);
        let added = generate_random_graph(&mut g, 0, &mut rng).expect("generates");
        assert_eq!(added, 0);
        assert_eq!(g.edge_count(), 0);
    }

    /// Pairs are visited in ascending `(i, j)` order with `i < j`.
    #[test]
    fn pairs_are_generated_in_ascending_order() {
        let mut g = Graph::new(4).expect("valid");
        let mut rng = StepRng::new(0, 0);
        generate_random_graph(&mut g, 100, &mut rng).expect("generates");
        assert_eq!(
            g.edges(),
            &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
        );
        assert_eq!(g.neighbors(0), &[1, 2, 3]);
        assert_eq!(g.neighbors(3), &[0, 1, 2]);
    }

    /// Generation never produces self-loops or duplicate pairs.
    #[test]
    fn generated_edges_are_simple() {
        let mut g = Graph::new(30).expect("valid");
        let mut rng = StdRng::seed_from_u64(99);
        generate_random_graph(&mut g, 60, &mut rng).expect("generates");
        let mut seen = std::collections::HashSet::new();
        for &(u, v) in g.edges() {
            assert!(u < v, "edge ({u}, {v}) is not ordered");
            assert!(seen.insert((u, v)), "duplicate edge ({u}, {v})");
        }
    }

    /// Probabilities above 100 are rejected without touching the graph.
    #[test]
    fn probability_above_max_is_rejected() {
        let mut g = Graph::new(3).expect("valid");
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate_random_graph(&mut g, 101, &mut rng).expect_err("rejected");
        assert!(matches!(err, GraphError::InvalidArgument { .. }));
        assert_eq!(g.edge_count(), 0);
    }

    /// The same config always produces the same graph.
    #[test]
    fn build_random_graph_is_deterministic() {
        let config = GeneratorConfig::new(25, 40, 1234);
        let a = build_random_graph(&config).expect("builds");
        let b = build_random_graph(&config).expect("builds");
        assert_eq!(a, b);
    }

    /// Different seeds generally produce different graphs.
    #[test]
    fn build_random_graph_depends_on_seed() {
        let a = build_random_graph(&GeneratorConfig::new(25, 50, 1)).expect("builds");
        let b = build_random_graph(&GeneratorConfig::new(25, 50, 2)).expect("builds");
        assert_ne!(a.edges(), b.edges());
    }

    #[test]
    fn build_random_graph_rejects_zero_vertices() {
        let err = build_random_graph(&GeneratorConfig::new(0, 50, 1)).expect_err("rejected");
        assert!(matches!(err, GraphError::InvalidArgument { .. }));
    }

    #[test]
    fn default_config_matches_constants() {
        let config = GeneratorConfig::default();
        assert_eq!(config.vertices, DEFAULT_VERTICES);
        assert_eq!(config.edge_probability, DEFAULT_EDGE_PROBABILITY);
    }
}
