//! # Chroma Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Hand-built tagged transactions and colors
//! └── integration/      # Composer, kernel and resolver working together
//!     ├── lifecycle.rs  # Genesis, transfers and padding end to end
//!     └── resolver.rs   # Memoization, ledger traffic, fail-closed
//!
//! tests/benches/
//! └── color_data_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p cc-tests
//!
//! # By category
//! cargo test -p cc-tests integration::lifecycle::
//! cargo test -p cc-tests integration::resolver::
//!
//! # Benchmarks
//! cargo bench -p cc-tests
//! ```

#![allow(unused_variables)]
#![allow(dead_code)]

pub mod fixtures;
pub mod integration;
