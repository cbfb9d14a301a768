//! # Application Module
//!
//! Color definition registry built on the color map port.

pub mod registry;

pub use registry::{
    default_schemes, definition_from_desc, ColorDefinitionManager, ColorSchemeFactory,
    EpobcSchemeFactory, ResolveTarget, SchemeTable,
};
