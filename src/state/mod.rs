// Copyright (c) 2026 Yusheng Hu. See LICENSE for details.

//! Mutable bookkeeping that sits beside the generation state.
//!
//! The engine's buffers live in [`crate::engine`]; this module holds the
//! counters reported by the engine and the benchmark harness.

pub mod statistics;

pub use statistics::{Counters, Statistics};
