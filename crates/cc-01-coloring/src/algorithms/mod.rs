//! # Algorithms Module
//!
//! Affecting-inputs mapping and the EPOBC kernel, plus the helper that
//! materializes previous transactions before either can run.

pub mod affecting_inputs;
pub mod kernel;
pub mod previous;

pub use affecting_inputs::{
    collect_affecting_inputs, get_affecting_inputs, get_affecting_inputs_for_outputs,
};
pub use kernel::run_kernel;
pub use previous::{load_previous_transactions, PreviousTransactions};
