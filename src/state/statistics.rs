// Copyright (c) 2026 Yusheng Hu. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the engine, and are incremented once per shift step,
//! base step or carry. They are cleared by [`PermutationEngine::reset`].
//!
//! [`PermutationEngine::reset`]: crate::engine::PermutationEngine::reset

use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(EnumCountMacro, EnumIter, IntoStaticStr, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Permutations emitted (N per shift step).
    Permutations,
    /// Base states expanded by a circle burst.
    BaseStates,
    /// Single-element relocations inside circle bursts.
    ShiftSteps,
    /// Digits of the base counter that reversed direction and carried.
    Carries,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Add `n` to the specified counter.
    #[inline(always)]
    pub(crate) fn add(&mut self, counter: Counters, n: u64) {
        self.stats[counter as usize] += n;
    }

    /// Increment the specified counter by 1.
    #[inline(always)]
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Set every counter back to zero.
    pub fn clear(&mut self) {
        self.stats = [0; Counters::COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        for counter in Counters::iter() {
            assert_eq!(stats.get(counter), 0, "{}", <&str>::from(counter));
        }
    }

    #[test]
    fn test_add_and_clear() {
        let mut stats = Statistics::new();
        stats.add(Counters::Permutations, 14);
        stats.add(Counters::Permutations, 14);
        stats.increment_counter(Counters::Carries);

        assert_eq!(stats.get(Counters::Permutations), 28);
        assert_eq!(stats.get(Counters::Carries), 1);
        assert_eq!(stats.get(Counters::BaseStates), 0);

        stats.clear();
        assert_eq!(stats, Statistics::new());
    }
}
