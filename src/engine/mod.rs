// Copyright (c) 2026 Yusheng Hu. See LICENSE for details.

//! The permutation engine.
//!
//! This module implements the generator as two strictly alternating phases
//! over fixed-size state owned by one [`PermutationEngine`]:
//!
//! 1. **Circle burst** ([`PermutationEngine::advance_outer`]): copy the base
//!    permutation into the mirror windows, then sweep label `N-1` round the
//!    circle formed by the first N-1 base labels. Each of the N-1 shift steps
//!    yields N permutations (the N rotations of the circle), N·(N-1) in all.
//! 2. **Plain changes** ([`PermutationEngine::advance_base`]): advance the
//!    factorial-base counter by one and apply one adjacent swap to the first
//!    N-2 base positions. Overflow of digit 0 ends the run.
//!
//! (N-2)! base states times N·(N-1) permutations per burst gives N!.
//!
//! # Example
//!
//! ```
//! use circle_perm::engine::PermutationEngine;
//!
//! let mut engine = PermutationEngine::<5>::new().unwrap();
//! assert_eq!(engine.run(), 120);
//! assert!(engine.is_exhausted());
//!
//! engine.reset();
//! let mut seen = std::collections::HashSet::new();
//! engine.for_each_permutation(|p| {
//!     seen.insert(p.to_vec());
//! });
//! assert_eq!(seen.len(), 120);
//! ```

pub mod circle;
pub mod counter;

pub use circle::CircleBuffer;
pub use counter::{BaseStep, Direction, PlainChanges};

use crate::errors::EngineError;
use crate::state::{Counters, Statistics};
use tracing::debug;

/// An element label, `0..N`.
pub type Label = u8;

/// Generator for all N! permutations of `0..N`.
///
/// All state is inline fixed-size arrays; the engine never allocates.
/// Distinct engines share nothing and may run on different threads.
#[derive(Debug, Clone)]
pub struct PermutationEngine<const N: usize> {
    /// `Circle_D`; its first window is the base permutation `P`.
    circle: CircleBuffer<N>,

    /// The outer counter `C`.
    counter: PlainChanges<N>,

    statistics: Statistics,
}

impl<const N: usize> PermutationEngine<N> {
    /// Permutations emitted by one circle burst.
    pub const PERMS_PER_BURST: u64 = (N * (N - 1)) as u64;

    /// Create an engine at the identity permutation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TooFewElements`] for N < 3 and
    /// [`EngineError::CountOverflow`] for N > 20.
    pub fn new() -> Result<Self, EngineError> {
        EngineError::check_size(N)?;
        debug!(n = N, "permutation engine created");
        Ok(Self {
            circle: CircleBuffer::new(),
            counter: PlainChanges::new(),
            statistics: Statistics::new(),
        })
    }

    /// Return to the identity permutation with all counter digits zero.
    ///
    /// Statistics are cleared too, so a following [`run`](Self::run) reports N!.
    pub fn reset(&mut self) {
        self.circle.reset();
        self.counter.reset();
        self.statistics.clear();
        debug!(n = N, "permutation engine reset");
    }

    /// Synchronize the mirrors, then run one full circle burst.
    ///
    /// Returns the number of permutations emitted: N·(N-1), or 0 once
    /// exhausted, when the last base state has already been expanded.
    #[inline]
    pub fn advance_outer(&mut self) -> u64 {
        if self.is_exhausted() {
            return 0;
        }
        self.circle.sync_mirror();
        debug_assert!(self.circle.is_mirrored());
        self.circle.burst();
        self.record_burst()
    }

    /// As [`advance_outer`](Self::advance_outer), calling `f` once for each
    /// permutation emitted.
    ///
    /// The slice passed to `f` has length N and is only valid during the call.
    /// Once exhausted `f` is never called.
    #[inline]
    pub fn advance_outer_with<F>(&mut self, f: F) -> u64
    where
        F: FnMut(&[Label]),
    {
        if self.is_exhausted() {
            return 0;
        }
        self.circle.sync_mirror();
        debug_assert!(self.circle.is_mirrored());
        self.circle.burst_with(f);
        self.record_burst()
    }

    #[inline(always)]
    fn record_burst(&mut self) -> u64 {
        self.statistics.add(Counters::Permutations, Self::PERMS_PER_BURST);
        self.statistics.add(Counters::ShiftSteps, (N - 1) as u64);
        self.statistics.increment_counter(Counters::BaseStates);
        Self::PERMS_PER_BURST
    }

    /// Apply one plain-changes step to the base permutation.
    ///
    /// Returns `true` once the base states are exhausted (`C[0] >= 1`);
    /// calls after that change nothing.
    #[inline]
    pub fn advance_base(&mut self) -> bool {
        if self.is_exhausted() {
            return true;
        }
        let step = self.counter.advance(self.circle.base_mut());
        self.circle.base_mut()[N - 1] = (N - 1) as Label;
        match step {
            BaseStep::Moved { carries } => {
                self.statistics.add(Counters::Carries, carries as u64);
                false
            }
            BaseStep::Exhausted { carries } => {
                self.statistics.add(Counters::Carries, carries as u64);
                debug!(
                    n = N,
                    total = self.total_permutations(),
                    "base states exhausted"
                );
                true
            }
        }
    }

    /// Alternate bursts and base steps until exhausted.
    ///
    /// Returns the permutations emitted by this call: N! from a fresh or
    /// reset engine, 0 if already exhausted.
    pub fn run(&mut self) -> u64 {
        let mut emitted = 0;
        while !self.is_exhausted() {
            emitted += self.advance_outer();
            self.advance_base();
        }
        emitted
    }

    /// As [`run`](Self::run), calling `f` once for each permutation emitted.
    pub fn for_each_permutation<F>(&mut self, mut f: F) -> u64
    where
        F: FnMut(&[Label]),
    {
        let mut emitted = 0;
        while !self.is_exhausted() {
            emitted += self.advance_outer_with(&mut f);
            self.advance_base();
        }
        emitted
    }

    /// The base permutation `P`.
    pub fn base(&self) -> &[Label; N] {
        self.circle.base()
    }

    /// The outer counter digits `C[0..N-2]`.
    pub fn counter(&self) -> &[u8] {
        self.counter.digits()
    }

    pub fn circle(&self) -> &CircleBuffer<N> {
        &self.circle
    }

    pub fn is_exhausted(&self) -> bool {
        self.counter.is_exhausted()
    }

    /// Permutations emitted since construction or the last reset.
    pub fn total_permutations(&self) -> u64 {
        self.statistics.get(Counters::Permutations)
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::factorial;

    #[test]
    fn test_rejects_small_and_large_sizes() {
        assert_eq!(
            PermutationEngine::<1>::new().unwrap_err(),
            EngineError::TooFewElements { n: 1 }
        );
        assert_eq!(
            PermutationEngine::<2>::new().unwrap_err(),
            EngineError::TooFewElements { n: 2 }
        );
        assert_eq!(
            PermutationEngine::<21>::new().unwrap_err(),
            EngineError::CountOverflow { n: 21 }
        );
        assert!(PermutationEngine::<3>::new().is_ok());
        assert!(PermutationEngine::<20>::new().is_ok());
    }

    #[test]
    fn test_initial_state() {
        let engine = PermutationEngine::<6>::new().unwrap();
        assert_eq!(engine.base(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(engine.counter(), &[0, 0, 0, 0]);
        assert!(!engine.is_exhausted());
        assert_eq!(engine.total_permutations(), 0);
        assert!(engine.circle().is_mirrored());
    }

    #[test]
    fn test_advance_outer_reports_n_times_n_minus_1() {
        let mut engine = PermutationEngine::<7>::new().unwrap();
        while !engine.is_exhausted() {
            assert_eq!(engine.advance_outer(), 42);
            engine.advance_base();
        }
    }

    #[test]
    fn test_run_counts() {
        let mut engine = PermutationEngine::<9>::new().unwrap();
        assert_eq!(engine.run(), factorial(9));
        assert_eq!(engine.total_permutations(), factorial(9));
        let stats = engine.statistics();
        assert_eq!(stats.get(Counters::BaseStates), factorial(7));
        assert_eq!(stats.get(Counters::ShiftSteps), factorial(7) * 8);
        assert_eq!(engine.run(), 0);
    }

    #[test]
    fn test_base_valid_between_calls() {
        let mut engine = PermutationEngine::<6>::new().unwrap();
        loop {
            engine.advance_outer();
            let mut sorted = *engine.base();
            sorted.sort();
            assert_eq!(sorted, [0, 1, 2, 3, 4, 5]);
            if engine.advance_base() {
                break;
            }
        }
    }

    #[test]
    fn test_n3_single_outer_cycle() {
        let mut engine = PermutationEngine::<3>::new().unwrap();
        assert_eq!(engine.advance_outer(), 6);
        assert!(engine.advance_base());
        assert_eq!(engine.counter(), &[1]);
        assert_eq!(engine.base(), &[0, 1, 2]);
    }

    #[test]
    fn test_advance_outer_after_exhaustion() {
        let mut engine = PermutationEngine::<4>::new().unwrap();
        assert_eq!(engine.run(), 24);
        let base = *engine.base();

        assert_eq!(engine.advance_outer(), 0);
        let mut calls = 0;
        assert_eq!(engine.advance_outer_with(|_| calls += 1), 0);
        assert_eq!(calls, 0);
        assert_eq!(engine.total_permutations(), 24);
        assert_eq!(engine.statistics().get(Counters::BaseStates), 2);
        assert_eq!(engine.base(), &base);
    }

    #[test]
    fn test_advance_base_after_exhaustion() {
        let mut engine = PermutationEngine::<5>::new().unwrap();
        engine.run();
        let base = *engine.base();
        let counter = engine.counter().to_vec();
        assert!(engine.advance_base());
        assert_eq!(engine.base(), &base);
        assert_eq!(engine.counter(), counter.as_slice());
    }
}
