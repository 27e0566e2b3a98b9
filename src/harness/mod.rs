// Copyright (c) 2026 Yusheng Hu. See LICENSE for details.

//! Benchmark harness around the engine.
//!
//! The harness only observes the engine: it pins the calling thread, times
//! complete runs with a monotonic clock, checks the emitted count against N!
//! and produces one [`BenchmarkReport`] per round. The engine behaves the same
//! with or without it.

pub mod affinity;
pub mod report;

pub use affinity::{pin_current_thread, AffinityError};
pub use report::BenchmarkReport;

use crate::constants::factorial;
use crate::engine::PermutationEngine;
use crate::errors::EngineError;
use std::time::Instant;
use tracing::{info, warn};

/// How each round consumes the engine's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Mode {
    /// Count permutations only.
    #[default]
    Count,
    /// Visit every permutation through the callback, folding it into a checksum.
    Visit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Core to pin to; `None` leaves scheduling alone.
    pub core: Option<usize>,
    pub mode: Mode,
    pub rounds: u32,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            core: Some(4),
            mode: Mode::Count,
            rounds: 1,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("round emitted {actual} permutations, expected {expected}")]
    CountMismatch { expected: u64, actual: u64 },
}

/// Run `config.rounds` complete enumerations of N elements.
///
/// Affinity failures are logged and otherwise ignored.
pub fn run_benchmark<const N: usize>(
    config: &BenchmarkConfig,
) -> Result<Vec<BenchmarkReport>, HarnessError> {
    let mut engine = PermutationEngine::<N>::new()?;

    if let Some(core) = config.core {
        match pin_current_thread(core) {
            Ok(()) => info!(core, "pinned to core"),
            Err(err) => warn!(core, error = %err, "running unpinned"),
        }
    }

    let expected = factorial(N);
    let mut reports = Vec::with_capacity(config.rounds as usize);
    for round in 0..config.rounds {
        engine.reset();
        let start = Instant::now();
        let (total, checksum) = match config.mode {
            Mode::Count => (engine.run(), None),
            Mode::Visit => {
                let mut checksum = 0u64;
                let total = engine.for_each_permutation(|perm| checksum += perm[0] as u64);
                (total, Some(checksum))
            }
        };
        let duration = start.elapsed();

        if total != expected {
            return Err(HarnessError::CountMismatch {
                expected,
                actual: total,
            });
        }
        info!(
            round,
            n = N,
            total,
            seconds = duration.as_secs_f64(),
            "round complete"
        );
        reports.push(BenchmarkReport {
            n: N,
            total,
            duration,
            checksum,
        });
    }
    Ok(reports)
}
