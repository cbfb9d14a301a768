//! # Domain Module
//!
//! Core protocol types: tags, color definitions, color values and errors.
//! No I/O; everything here is pure.

pub mod color_definition;
pub mod color_value;
pub mod errors;
pub mod tag;

pub use color_definition::*;
pub use color_value::*;
pub use errors::*;
pub use tag::*;
