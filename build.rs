//! Build script - hands the ESP32 linker scripts to the firmware binary.
//!
//! Host builds (library + tests) must link with the platform defaults, so
//! nothing is emitted unless the `embedded` feature is on.

use std::env;

fn main() {
    // Rebuild if this script changes
    println!("cargo:rerun-if-changed=build.rs");

    if env::var_os("CARGO_FEATURE_EMBEDDED").is_none() {
        return;
    }

    // esp-hal memory layout + defmt symbol table, binary only
    println!("cargo:rustc-link-arg-bins=-Tlinkall.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}
