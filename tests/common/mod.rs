// Copyright (c) 2026 Yusheng Hu. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use circle_perm::{Label, PermutationEngine};
use std::collections::HashSet;

/// Every permutation emitted by a full run, in emission order.
pub fn collect_run<const N: usize>(engine: &mut PermutationEngine<N>) -> Vec<Vec<Label>> {
    let mut emitted = Vec::new();
    engine.for_each_permutation(|p| emitted.push(p.to_vec()));
    emitted
}

/// True when `p` holds each of `0..p.len()` exactly once.
pub fn is_permutation(p: &[Label]) -> bool {
    let mut seen = vec![false; p.len()];
    for &label in p {
        match seen.get_mut(label as usize) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

/// Run a fresh engine to exhaustion and check it emits each of the N! permutations once.
pub fn assert_exhaustive<const N: usize>() {
    let mut engine = PermutationEngine::<N>::new().unwrap();
    let emitted = collect_run(&mut engine);
    let expected = circle_perm::constants::factorial(N) as usize;

    assert_eq!(emitted.len(), expected, "N={} emitted", N);
    assert!(
        emitted.iter().all(|p| p.len() == N && is_permutation(p)),
        "N={} emitted an invalid sequence",
        N
    );
    let distinct: HashSet<&Vec<Label>> = emitted.iter().collect();
    assert_eq!(distinct.len(), expected, "N={} distinct", N);
    assert_eq!(engine.total_permutations(), expected as u64);
}
