//! # Domain Module
//!
//! Targets, coins, the composed transaction and errors.

pub mod composed_tx;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use composed_tx::*;
pub use entities::*;
pub use errors::*;
pub use value_objects::*;
