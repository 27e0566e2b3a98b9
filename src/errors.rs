// Copyright (c) 2026 Yusheng Hu. See LICENSE for details.

//! Error types for engine construction.
//!
//! Generation itself cannot fail; only a size outside `MIN_N..=MAX_N` is rejected,
//! and only when an engine is built.

use crate::constants::{MAX_N, MIN_N};

/// Precondition violations detected when an engine is constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The base counter needs at least one digit (index `n - 3`).
    #[error("cannot permute {n} elements: at least {} are required", MIN_N)]
    TooFewElements { n: usize },

    /// `n!` does not fit in the 64-bit permutation counter.
    #[error("cannot permute {n} elements: {n}! overflows the counter (max {})", MAX_N)]
    CountOverflow { n: usize },
}

impl EngineError {
    /// Check that `n` is a supported engine size.
    pub fn check_size(n: usize) -> Result<(), EngineError> {
        if n < MIN_N {
            Err(EngineError::TooFewElements { n })
        } else if n > MAX_N {
            Err(EngineError::CountOverflow { n })
        } else {
            Ok(())
        }
    }
}
