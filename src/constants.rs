// Copyright (c) 2026 Yusheng Hu. See LICENSE for details.

//! Compile-time constants for the permutation engine.
//!
//! This module defines N (number of elements permuted by the `circle` binary)
//! and the bounds every engine size must respect. N can be configured at
//! compile time via cargo features. The library engine itself is generic over
//! its size, so tests and benches use any supported size regardless of N.
//!
//! # Supported N values for the binary
//!
//! - 8: 40,320 permutations
//! - 10: 3,628,800 permutations
//! - 12: 479,001,600 permutations
//! - 13: 6,227,020,800 permutations
//! - 14: 87,178,291,200 permutations - **default**
//!
//! # Example
//!
//! ```bash
//! # Default: N=14
//! cargo run --release
//!
//! # Build for N=12
//! cargo run --release --features n_12
//! ```

/// Number of elements permuted by the `circle` binary.
///
/// This is configurable at compile time via cargo features:
/// - `n_8`, `n_10`, `n_12`, `n_13` → the named size
/// - `n_14` → N=14 (explicit)
/// - (default) → N=14 (when no feature specified)
#[cfg(not(any(
    feature = "n_8",
    feature = "n_10",
    feature = "n_12",
    feature = "n_13",
    feature = "n_14"
)))]
pub const N: usize = 14;

#[cfg(feature = "n_8")]
pub const N: usize = 8;

#[cfg(feature = "n_10")]
pub const N: usize = 10;

#[cfg(feature = "n_12")]
pub const N: usize = 12;

#[cfg(feature = "n_13")]
pub const N: usize = 13;

#[cfg(feature = "n_14")]
pub const N: usize = 14;

/// Smallest supported size.
///
/// The base counter starts at digit `N - 3`, so anything smaller has no digit
/// to increment.
pub const MIN_N: usize = 3;

/// Largest supported size.
///
/// `20!` is the largest factorial representable in a `u64` counter; `21!` is not.
pub const MAX_N: usize = 20;

/// Compute factorial at compile time.
///
/// Callers keep `n <= MAX_N`; larger values overflow.
pub const fn factorial(n: usize) -> u64 {
    match n {
        0 | 1 => 1,
        _ => n as u64 * factorial(n - 1),
    }
}

/// Total number of permutations the `circle` binary enumerates (N!).
///
/// For N=14 this is 87,178,291,200, which needs a 64-bit counter.
pub const TOTAL_PERMUTATIONS: u64 = factorial(N);

/// Number of base states visited by the plain-changes phase ((N-2)!).
pub const BASE_STATES: u64 = factorial(N - 2);

const _: () = assert!(N >= MIN_N && N <= MAX_N, "N out of supported range");
