//! Random graph presets and invariant checkers for benchmarking `graphwalk-core`.
//!
//! This crate provides deterministic generation of random graphs at fixed
//! size tiers, plus post-search checkers shared by the benches and the
//! property-based correctness suite.

pub mod correctness;
pub mod generator;

pub use generator::{SizeTier, generate, random_endpoints};
