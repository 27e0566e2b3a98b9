// Copyright (c) 2026 Yusheng Hu. See LICENSE for details.

//! High-throughput enumeration of all permutations of N distinct elements.
//!
//! Every permutation of `0..N` is produced exactly once, in place, with no
//! recursion and no allocation after construction.
//!
//! # Architecture
//!
//! The engine alternates two phases over fixed-size buffers:
//!
//! ## Plain changes (outer)
//!
//! A factorial-base counter of N-2 digits steps the first N-2 positions of
//! the base permutation through all (N-2)! orderings, one adjacent swap per
//! step. The last two positions hold `N-2` and `N-1` throughout.
//!
//! ## Circle burst (inner)
//!
//! The first N-1 base labels are read as a circle. Label `N-1` is swept
//! through each of the N-1 gaps of that circle, and every rotation of each
//! resulting N-circle is a permutation: N·(N-1) permutations per base state.
//! A buffer of three adjacent windows (the base and two mirrors of its first
//! N-1 labels) turns every rotation into a contiguous slice, so no modulo
//! indexing or rotation copying is needed.
//!
//! # Sizes
//!
//! The library engine is generic over N (`3..=20`). The `circle` binary
//! uses the compile-time [`constants::N`], selected by cargo features.
//!
//! # Parallelization
//!
//! Engines share no state, so independent instances may run on separate
//! threads. Partitioning the permutation space between them is left to the
//! caller.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod harness;
pub mod state;

// Re-export commonly used types
pub use engine::{Label, PermutationEngine};
pub use errors::EngineError;
pub use state::{Counters, Statistics};

/// Engine at the build-time size [`constants::N`].
pub type Engine = PermutationEngine<{ constants::N }>;
