//! Seeded random graph presets.
//!
//! Every tier produces the same graph for the same seed, so bench runs and
//! invariant tests are reproducible.

use graphwalk_core::{GeneratorConfig, Graph, GraphError, Vertex, build_random_graph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 100 vertices at 5%, ~250 edges, usually connected
    Small,
    /// 1000 vertices at 1%, ~5000 edges
    Medium,
    /// 4000 vertices at 1%, ~80000 edges
    Large,
}

impl SizeTier {
    pub const ALL: [SizeTier; 3] = [SizeTier::Small, SizeTier::Medium, SizeTier::Large];

    /// Short name used in benchmark IDs.
    pub fn name(self) -> &'static str {
        match self {
            SizeTier::Small => "S",
            SizeTier::Medium => "M",
            SizeTier::Large => "L",
        }
    }

    /// Returns the generator configuration for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        match self {
            SizeTier::Small => GeneratorConfig::new(100, 5, seed),
            SizeTier::Medium => GeneratorConfig::new(1000, 1, seed),
            SizeTier::Large => GeneratorConfig::new(4000, 1, seed),
        }
    }
}

/// Generates the graph for `tier` from `seed`.
///
/// # Errors
///
/// Propagates [`GraphError`] from the generator; the built-in tiers never
/// trigger it.
pub fn generate(tier: SizeTier, seed: u64) -> Result<Graph, GraphError> {
    build_random_graph(&tier.config(seed))
}

/// Draws `count` random `(start, target)` pairs inside `graph`.
pub fn random_endpoints(graph: &Graph, count: usize, seed: u64) -> Vec<(Vertex, Vertex)> {
    let n = graph.vertex_count();
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect()
}
