// Copyright (c) 2026 Yusheng Hu. See LICENSE for details.

//! Build script to emit custom cfg flags based on the N feature selection.
//!
//! This enables cleaner conditional compilation in tests:
//! - `#[cfg(n_exhaustive)]` when the configured N is small enough (N <= 10)
//!   to collect every permutation into a set
//! - `#[cfg(n_reference)]` for the default/reference case N = 14

fn main() {
    // Declare the custom cfg names to avoid warnings
    println!("cargo:rustc-check-cfg=cfg(n_exhaustive)");
    println!("cargo:rustc-check-cfg=cfg(n_reference)");

    #[cfg(any(feature = "n_8", feature = "n_10"))]
    println!("cargo:rustc-cfg=n_exhaustive");

    // N = 14 (default or explicit n_14 feature)
    #[cfg(any(
        feature = "n_14",
        not(any(feature = "n_8", feature = "n_10", feature = "n_12", feature = "n_13"))
    ))]
    println!("cargo:rustc-cfg=n_reference");
}
