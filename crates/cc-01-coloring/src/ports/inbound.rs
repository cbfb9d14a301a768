//! # Inbound Ports
//!
//! API trait for looking up color definitions.

use std::sync::Arc;

use crate::domain::{ColorDefinition, ColorId, ColoringError};

/// Color definition registry - inbound port.
pub trait ColorDefinitionRegistry: Send + Sync {
    /// Resolve a descriptor. The empty descriptor is "uncolored".
    ///
    /// With `auto_add == false` an unknown descriptor yields `Ok(None)`
    /// instead of allocating a new id.
    fn resolve(
        &self,
        desc: &str,
        auto_add: bool,
    ) -> Result<Option<Arc<ColorDefinition>>, ColoringError>;

    /// Definition registered under `color_id`.
    fn get_by_color_id(
        &self,
        color_id: ColorId,
    ) -> Result<Option<Arc<ColorDefinition>>, ColoringError>;

    /// All registered definitions.
    fn get_color_definitions(&self) -> Result<Vec<Arc<ColorDefinition>>, ColoringError>;
}
