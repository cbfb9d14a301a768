//! # Domain Module
//!
//! Color data records and resolver errors.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
