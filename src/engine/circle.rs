// Copyright (c) 2026 Yusheng Hu. See LICENSE for details.

//! The triple-mirrored working buffer (`Circle_D`).
//!
//! Storage is 3N contiguous labels, read as three windows:
//!
//! ```text
//! P1 = D[0 .. N)          the base permutation
//! P2 = D[N .. 2N-1)       copy of P1[0 .. N-1)
//! P3 = D[2N-1 .. 3N-2)    copy of P1[0 .. N-1)
//! ```
//!
//! The last two cells are spare. With both mirrors in place the circular
//! sequence `P1[0..N-1]` can be read starting at any offset without modulo
//! indexing, and moving the label `N-1` one gap further round the circle costs
//! exactly two writes.
//!
//! # Why each shift step yields N permutations
//!
//! After shift step `k` (for `k` in `0..N-1`) the buffer reads, from `D[k+1]`:
//!
//! ```text
//! P1[k+1..N-1] P1[0..=k] (N-1) P1[k+1..N-1] P1[0..N-1]
//! ```
//!
//! so the N windows `D[s..s+N]`, `s ∈ [k+1, N+k]`, are precisely the N
//! rotations of the circular sequence `P1[0..=k] (N-1) P1[k+1..N-1]`. Over the
//! N-1 steps the label `N-1` is inserted into each of the N-1 gaps of the base
//! circle, and distinct base orderings of `P1[0..N-2]` (with `P1[N-2]` fixed)
//! are distinct circles, so a full run visits every permutation once.

use super::Label;

/// Only [`PermutationEngine::new`] builds one, so the size is always checked
/// first; outside the crate the buffer is read-only:
///
/// ```compile_fail
/// use circle_perm::engine::CircleBuffer;
///
/// let mut buffer = CircleBuffer::<2>::new();
/// buffer.burst();
/// ```
///
/// [`PermutationEngine::new`]: super::PermutationEngine::new
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircleBuffer<const N: usize> {
    cells: [[Label; N]; 3],
}

impl<const N: usize> CircleBuffer<N> {
    /// Label held fixed in the last base position and swept by the burst.
    const LAST: Label = (N - 1) as Label;

    /// Identity base permutation with the mirrors synchronized.
    pub(crate) fn new() -> Self {
        let mut buffer = Self {
            cells: [[0; N]; 3],
        };
        buffer.reset();
        buffer
    }

    /// Restore the identity base permutation and resynchronize the mirrors.
    pub(crate) fn reset(&mut self) {
        self.cells = [[0; N]; 3];
        for (j, cell) in self.cells[0].iter_mut().enumerate() {
            *cell = j as Label;
        }
        self.sync_mirror();
    }

    /// The base permutation `P1`.
    #[inline(always)]
    pub fn base(&self) -> &[Label; N] {
        &self.cells[0]
    }

    #[inline(always)]
    pub(crate) fn base_mut(&mut self) -> &mut [Label; N] {
        &mut self.cells[0]
    }

    /// The whole buffer, all 3N cells.
    pub fn as_slice(&self) -> &[Label] {
        self.cells.as_flattened()
    }

    /// Copy `P1[0..N-1]` into both mirror windows.
    #[inline(always)]
    pub(crate) fn sync_mirror(&mut self) {
        let d = self.cells.as_flattened_mut();
        d.copy_within(0..N - 1, N);
        d.copy_within(0..N - 1, 2 * N - 1);
    }

    /// True when `P2` and `P3` both equal `P1[0..N-1]`.
    pub fn is_mirrored(&self) -> bool {
        let d = self.as_slice();
        let head = &d[..N - 1];
        &d[N..2 * N - 1] == head && &d[2 * N - 1..3 * N - 2] == head
    }

    /// Move label `N-1` one gap round the circle (shift step `k`).
    #[inline(always)]
    fn shift(d: &mut [Label], k: usize) {
        d[N - 1 + k] = d[N + k];
        d[N + k] = Self::LAST;
    }

    /// Run all N-1 shift steps, counting only.
    ///
    /// Leaves the mirrors dirty; `P1` is restored to a valid permutation.
    #[inline]
    pub(crate) fn burst(&mut self) {
        let d = self.cells.as_flattened_mut();
        for k in 0..N - 1 {
            Self::shift(d, k);
        }
        d[N - 1] = Self::LAST;
    }

    /// Run all N-1 shift steps, handing each of the N windows per step to `f`.
    #[inline]
    pub(crate) fn burst_with<F>(&mut self, mut f: F)
    where
        F: FnMut(&[Label]),
    {
        let d = self.cells.as_flattened_mut();
        for k in 0..N - 1 {
            Self::shift(d, k);
            for start in k + 1..=N + k {
                f(&d[start..start + N]);
            }
        }
        d[N - 1] = Self::LAST;
    }
}
