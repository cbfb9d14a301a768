//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits for the coloring layer.

mod color_map;

pub use color_map::InMemoryColorMap;
