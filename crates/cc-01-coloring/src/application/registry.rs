//! # Color Definition Registry
//!
//! Turns descriptor strings into shared [`ColorDefinition`] instances and
//! allocates local color ids through a [`ColorMapStore`].
//!
//! Color schemes are not global state: the table of scheme factories is built
//! once and handed to the manager at construction.

use std::collections::HashMap;
use std::sync::Arc;

use chroma_telemetry::{log_color_event, subsystems};
use parking_lot::RwLock;
use tracing::info;

use crate::domain::{
    ColorDefinition, ColorId, ColoringError, EpobcColorDefinition, EPOBC_SCHEME,
    GENESIS_INTENT_COLOR_ID, UNCOLORED_COLOR_ID,
};
use crate::ports::{ColorDefinitionRegistry, ColorMapStore};

/// Builds color definitions of one scheme from descriptors.
pub trait ColorSchemeFactory: Send + Sync {
    /// Descriptor prefix handled by this factory.
    fn scheme(&self) -> &'static str;

    /// Check a descriptor without allocating anything.
    fn validate_desc(&self, desc: &str) -> Result<(), ColoringError>;

    /// Build the definition for `desc` under `color_id`.
    fn from_desc(&self, color_id: ColorId, desc: &str) -> Result<ColorDefinition, ColoringError>;
}

/// Factory for `epobc:` descriptors.
#[derive(Debug, Clone, Copy, Default)]
pub struct EpobcSchemeFactory;

impl ColorSchemeFactory for EpobcSchemeFactory {
    fn scheme(&self) -> &'static str {
        EPOBC_SCHEME
    }

    fn validate_desc(&self, desc: &str) -> Result<(), ColoringError> {
        EpobcColorDefinition::parse_descriptor(desc).map(|_| ())
    }

    fn from_desc(&self, color_id: ColorId, desc: &str) -> Result<ColorDefinition, ColoringError> {
        EpobcColorDefinition::from_desc(color_id, desc).map(ColorDefinition::Epobc)
    }
}

/// Scheme prefix to factory table.
pub type SchemeTable = HashMap<&'static str, Box<dyn ColorSchemeFactory>>;

/// Table with every built-in scheme.
pub fn default_schemes() -> SchemeTable {
    let mut schemes: SchemeTable = HashMap::new();
    schemes.insert(EPOBC_SCHEME, Box::new(EpobcSchemeFactory));
    schemes
}

/// How a descriptor obtains its color id.
pub enum ResolveTarget<'a> {
    /// Use this id as is, building with the given scheme table.
    ById(ColorId, &'a SchemeTable),
    /// Look up or allocate the id in a manager.
    ViaManager(&'a ColorDefinitionManager),
}

/// Build a definition from a descriptor.
///
/// With [`ResolveTarget::ById`] nothing is registered anywhere; the scheme
/// table carried by the target decides which descriptors are understood.
pub fn definition_from_desc(
    desc: &str,
    target: ResolveTarget<'_>,
) -> Result<Arc<ColorDefinition>, ColoringError> {
    match target {
        ResolveTarget::ById(color_id, schemes) => {
            if desc.is_empty() {
                return match color_id {
                    UNCOLORED_COLOR_ID => Ok(Arc::new(ColorDefinition::Uncolored)),
                    other => Err(ColoringError::IncorrectColorId(other)),
                };
            }
            let factory = factory_for(schemes, desc)?;
            Ok(Arc::new(factory.from_desc(color_id, desc)?))
        }
        ResolveTarget::ViaManager(manager) => manager
            .resolve(desc, true)?
            .ok_or_else(|| ColoringError::IncorrectDesc(desc.to_string())),
    }
}

fn factory_for<'s>(
    schemes: &'s SchemeTable,
    desc: &str,
) -> Result<&'s dyn ColorSchemeFactory, ColoringError> {
    let scheme = desc.split(':').next().unwrap_or_default();
    schemes
        .get(scheme)
        .map(|factory| factory.as_ref())
        .ok_or_else(|| ColoringError::IncorrectDesc(desc.to_string()))
}

/// Registry of color definitions backed by a color map.
///
/// Definitions are cached by id so every caller shares one `Arc` per color.
pub struct ColorDefinitionManager {
    schemes: SchemeTable,
    color_map: Arc<dyn ColorMapStore>,
    cache: RwLock<HashMap<ColorId, Arc<ColorDefinition>>>,
    uncolored: Arc<ColorDefinition>,
    genesis_intent: Arc<ColorDefinition>,
}

impl ColorDefinitionManager {
    /// Create with the built-in schemes.
    pub fn new(color_map: Arc<dyn ColorMapStore>) -> Self {
        Self::with_schemes(color_map, default_schemes())
    }

    /// Create with an explicit scheme table.
    pub fn with_schemes(color_map: Arc<dyn ColorMapStore>, schemes: SchemeTable) -> Self {
        Self {
            schemes,
            color_map,
            cache: RwLock::new(HashMap::new()),
            uncolored: Arc::new(ColorDefinition::Uncolored),
            genesis_intent: Arc::new(ColorDefinition::GenesisIntent),
        }
    }

    /// Add a scheme. Fails if its prefix is taken.
    pub fn register_scheme(
        &mut self,
        factory: Box<dyn ColorSchemeFactory>,
    ) -> Result<(), ColoringError> {
        let scheme = factory.scheme();
        if self.schemes.contains_key(scheme) {
            return Err(ColoringError::AlreadyRegistered(scheme.to_string()));
        }
        self.schemes.insert(scheme, factory);
        info!("[cc-01] Registered color scheme {}", scheme);
        Ok(())
    }

    /// Scheme table in use, including schemes added later.
    pub fn schemes(&self) -> &SchemeTable {
        &self.schemes
    }

    /// The shared uncolored definition.
    pub fn uncolored(&self) -> Arc<ColorDefinition> {
        Arc::clone(&self.uncolored)
    }

    /// The shared genesis-intent definition.
    pub fn genesis_intent(&self) -> Arc<ColorDefinition> {
        Arc::clone(&self.genesis_intent)
    }

    fn cached_or_build(
        &self,
        color_id: ColorId,
        desc: &str,
    ) -> Result<Arc<ColorDefinition>, ColoringError> {
        if let Some(def) = self.cache.read().get(&color_id) {
            return Ok(Arc::clone(def));
        }

        let factory = factory_for(&self.schemes, desc)?;
        let built = Arc::new(factory.from_desc(color_id, desc)?);

        let mut cache = self.cache.write();
        let def = cache.entry(color_id).or_insert_with(|| {
            log_color_event!(debug, subsystems::COLORING, "Loaded color definition", color_id);
            built
        });
        Ok(Arc::clone(def))
    }
}

impl ColorDefinitionRegistry for ColorDefinitionManager {
    fn resolve(
        &self,
        desc: &str,
        auto_add: bool,
    ) -> Result<Option<Arc<ColorDefinition>>, ColoringError> {
        if desc.is_empty() {
            return Ok(Some(self.uncolored()));
        }

        // Reject bad descriptors before the color map allocates an id.
        factory_for(&self.schemes, desc)?.validate_desc(desc)?;

        match self.color_map.resolve(desc, auto_add)? {
            Some(color_id) => self.cached_or_build(color_id, desc).map(Some),
            None => Ok(None),
        }
    }

    fn get_by_color_id(
        &self,
        color_id: ColorId,
    ) -> Result<Option<Arc<ColorDefinition>>, ColoringError> {
        match color_id {
            UNCOLORED_COLOR_ID => return Ok(Some(self.uncolored())),
            GENESIS_INTENT_COLOR_ID => return Ok(Some(self.genesis_intent())),
            _ => {}
        }
        if let Some(def) = self.cache.read().get(&color_id) {
            return Ok(Some(Arc::clone(def)));
        }
        match self.color_map.descriptor_of(color_id)? {
            Some(desc) => self.cached_or_build(color_id, &desc).map(Some),
            None => Ok(None),
        }
    }

    fn get_color_definitions(&self) -> Result<Vec<Arc<ColorDefinition>>, ColoringError> {
        self.color_map
            .entries()?
            .into_iter()
            .map(|(color_id, desc)| self.cached_or_build(color_id, &desc))
            .collect()
    }
}
