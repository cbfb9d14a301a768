//! In-Memory Color Map
//!
//! Implements the `ColorMapStore` port with sequential id allocation.

use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;
use tracing::debug;

use crate::domain::ColorId;
use crate::ports::outbound::{ColorMapError, ColorMapStore};

#[derive(Default)]
struct Inner {
    by_desc: HashMap<String, ColorId>,
    by_id: BTreeMap<ColorId, String>,
}

/// Descriptor to id mapping held in memory.
///
/// Ids are handed out from 1 in insertion order and never reused.
#[derive(Default)]
pub struct InMemoryColorMap {
    inner: RwLock<Inner>,
}

impl InMemoryColorMap {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered descriptors.
    pub fn len(&self) -> usize {
        self.inner.read().by_id.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ColorMapStore for InMemoryColorMap {
    fn resolve(&self, desc: &str, auto_add: bool) -> Result<Option<ColorId>, ColorMapError> {
        if let Some(id) = self.inner.read().by_desc.get(desc) {
            return Ok(Some(*id));
        }
        if !auto_add {
            return Ok(None);
        }

        let mut inner = self.inner.write();
        // Another writer may have added it between the two locks.
        if let Some(id) = inner.by_desc.get(desc) {
            return Ok(Some(*id));
        }
        let next = match inner.by_id.last_key_value() {
            Some((last, _)) => last.checked_add(1).ok_or(ColorMapError::Exhausted)?,
            None => 1,
        };
        inner.by_desc.insert(desc.to_string(), next);
        inner.by_id.insert(next, desc.to_string());
        debug!("[cc-01] Allocated color id {} for {:?}", next, desc);
        Ok(Some(next))
    }

    fn descriptor_of(&self, color_id: ColorId) -> Result<Option<String>, ColorMapError> {
        Ok(self.inner.read().by_id.get(&color_id).cloned())
    }

    fn entries(&self) -> Result<Vec<(ColorId, String)>, ColorMapError> {
        Ok(self
            .inner
            .read()
            .by_id
            .iter()
            .map(|(id, desc)| (*id, desc.clone()))
            .collect())
    }
}
