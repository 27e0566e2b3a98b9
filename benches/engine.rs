// Copyright (c) 2026 Yusheng Hu. See LICENSE for details.

//! Throughput benchmarks for `PermutationEngine` using Divan.
//!
//! Run with: `cargo bench --bench engine`

use circle_perm::PermutationEngine;
use divan::{black_box, Bencher};

fn main() {
    divan::main();
}

// =============================================================================
// Single phases
// =============================================================================

#[divan::bench_group]
mod phases {
    use super::{black_box, Bencher, PermutationEngine};

    #[divan::bench]
    fn advance_outer_12(bencher: Bencher) {
        let mut engine = PermutationEngine::<12>::new().unwrap();
        bencher.bench_local(|| black_box(&mut engine).advance_outer());
    }

    #[divan::bench]
    fn advance_base_12(bencher: Bencher) {
        let mut engine = PermutationEngine::<12>::new().unwrap();
        bencher.bench_local(|| {
            if black_box(&mut engine).advance_base() {
                engine.reset();
            }
        });
    }
}

// =============================================================================
// Full runs
// =============================================================================

#[divan::bench_group(sample_count = 20)]
mod full_run {
    use super::{black_box, Bencher, PermutationEngine};

    #[divan::bench]
    fn count_8(bencher: Bencher) {
        let mut engine = PermutationEngine::<8>::new().unwrap();
        bencher.bench_local(|| {
            engine.reset();
            black_box(engine.run())
        });
    }

    #[divan::bench]
    fn count_10(bencher: Bencher) {
        let mut engine = PermutationEngine::<10>::new().unwrap();
        bencher.bench_local(|| {
            engine.reset();
            black_box(engine.run())
        });
    }

    #[divan::bench]
    fn visit_10(bencher: Bencher) {
        let mut engine = PermutationEngine::<10>::new().unwrap();
        bencher.bench_local(|| {
            engine.reset();
            let mut checksum = 0u64;
            engine.for_each_permutation(|p| checksum += p[0] as u64);
            black_box(checksum)
        });
    }
}
