// Copyright (c) 2026 Yusheng Hu. See LICENSE for details.

//! Result block printed after each benchmark round.

use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    /// Number of elements permuted.
    pub n: usize,

    /// Permutations emitted in the round.
    pub total: u64,

    pub duration: Duration,

    /// Sum of the first label of every permutation, when each was visited.
    pub checksum: Option<u64>,
}

impl BenchmarkReport {
    /// Throughput in 10^9 permutations per second; `None` for a zero duration.
    pub fn giga_perms_per_sec(&self) -> Option<f64> {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            Some(self.total as f64 / secs / 1e9)
        } else {
            None
        }
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Performance Result ---")?;
        writeln!(f, "N: {}", self.n)?;
        writeln!(f, "Total Permutations: {}", self.total)?;
        if let Some(checksum) = self.checksum {
            writeln!(f, "Checksum: {}", checksum)?;
        }
        writeln!(f, "Time: {:.4} seconds", self.duration.as_secs_f64())?;
        if let Some(speed) = self.giga_perms_per_sec() {
            writeln!(f, "Speed: {:.2} Giga-perms/sec", speed)?;
        }
        write!(f, "--------------------------")
    }
}
