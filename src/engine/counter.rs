// Copyright (c) 2026 Yusheng Hu. See LICENSE for details.

//! Factorial-base counter driving the plain-changes phase.
//!
//! The counter has N-2 digits `C[0..N-2]` with `C[i] ∈ [0, i]`, so it counts
//! through exactly (N-2)! states. Digit `N-3` moves fastest and carries run
//! towards digit 0; `C[0]` can only ever leave zero by overflowing, and
//! `C[0] == 1` is the termination signal.
//!
//! Each digit also carries a direction. A step moves the first digit (from
//! `N-3` downwards) that can still move in its direction by one, and swaps the
//! matching adjacent pair of the base permutation. Digits that cannot move
//! reverse direction and carry. This is Knuth's Algorithm P (TAOCP 7.2.1.2):
//! the element `i` travels back and forth across the `i+1` positions its
//! digit selects, so every ordering of the first N-2 positions is visited
//! exactly once and `P[N-2]`, `P[N-1]` are never touched.
//!
//! Resetting a carried digit to zero and swapping `P[i]` with `P[C[i]-1]`
//! instead looks similar but revisits orderings once N >= 6, so the direction
//! array is required.

use super::Label;

/// Direction in which a digit of the counter is currently moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    #[inline(always)]
    fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Result of one call to [`PlainChanges::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseStep {
    /// A digit moved and the base permutation changed by one adjacent swap.
    Moved { carries: u32 },
    /// The counter overflowed; the base permutation is unchanged.
    Exhausted { carries: u32 },
}

/// The digits `C` and their directions.
///
/// Arrays are sized `N` so no const arithmetic is needed; only the first
/// `N - 2` entries are used. Only [`PermutationEngine::new`] builds one, so
/// the size is always checked first:
///
/// ```compile_fail
/// use circle_perm::engine::PlainChanges;
///
/// let mut counter = PlainChanges::<2>::new();
/// counter.advance(&mut [0, 1]);
/// ```
///
/// [`PermutationEngine::new`]: super::PermutationEngine::new
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainChanges<const N: usize> {
    digits: [u8; N],
    directions: [Direction; N],
}

impl<const N: usize> PlainChanges<N> {
    /// All digits zero, all directions up.
    pub(crate) fn new() -> Self {
        Self {
            digits: [0; N],
            directions: [Direction::Up; N],
        }
    }

    pub(crate) fn reset(&mut self) {
        self.digits = [0; N];
        self.directions = [Direction::Up; N];
    }

    /// The N-2 live digits.
    pub fn digits(&self) -> &[u8] {
        &self.digits[..N - 2]
    }

    pub fn directions(&self) -> &[Direction] {
        &self.directions[..N - 2]
    }

    /// True once `C[0]` has overflowed.
    #[inline(always)]
    pub fn is_exhausted(&self) -> bool {
        self.digits[0] >= 1
    }

    /// Advance the counter by one and apply the matching swap to `base`.
    ///
    /// After exhaustion this is a no-op returning [`BaseStep::Exhausted`].
    #[inline]
    pub(crate) fn advance(&mut self, base: &mut [Label; N]) -> BaseStep {
        if self.is_exhausted() {
            return BaseStep::Exhausted { carries: 0 };
        }

        let mut i = N - 3;
        // Number of digits above `i` that carried while moving up: each one
        // has parked its element to the left of the block digit `i` moves in.
        let mut offset = 0;
        let mut carries = 0;

        while i > 0 {
            let digit = self.digits[i] as usize;
            let next = match self.directions[i] {
                Direction::Up if digit < i => Some(digit + 1),
                Direction::Down if digit > 0 => Some(digit - 1),
                _ => None,
            };

            if let Some(next) = next {
                base.swap(i + offset - digit, i + offset - next);
                self.digits[i] = next as u8;
                return BaseStep::Moved { carries };
            }

            if self.directions[i] == Direction::Up {
                offset += 1;
            }
            self.directions[i] = self.directions[i].reversed();
            carries += 1;
            i -= 1;
        }

        self.digits[0] = 1;
        BaseStep::Exhausted { carries }
    }
}
