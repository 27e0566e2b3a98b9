// Copyright (c) 2026 Yusheng Hu. See LICENSE for details.

//! `circle`: enumerate all N! permutations and report throughput.
//!
//! N is fixed at build time (`--features n_12` etc., default 14).
//!
//! ```bash
//! cargo run --release -- --core 2 --rounds 3
//! RUST_LOG=circle_perm=debug cargo run --release --features n_10 -- --mode visit
//! ```

use anyhow::Context;
use circle_perm::constants::N;
use circle_perm::harness::{run_benchmark, BenchmarkConfig, Mode};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Enumerate every permutation of 0..N using plain changes and circle bursts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CPU core to pin the generator thread to
    #[arg(short, long, default_value_t = 4)]
    core: usize,

    /// Leave the generator thread unpinned
    #[arg(long)]
    no_pin: bool,

    /// Count permutations only, or visit each one
    #[arg(short, long, value_enum, default_value_t = Mode::Count)]
    mode: Mode,

    /// Number of complete enumerations to time
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    rounds: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = BenchmarkConfig {
        core: (!args.no_pin).then_some(args.core),
        mode: args.mode,
        rounds: args.rounds,
    };

    let reports = run_benchmark::<N>(&config)
        .with_context(|| format!("benchmark of {N} elements failed"))?;
    for report in &reports {
        println!("{report}");
    }
    Ok(())
}
