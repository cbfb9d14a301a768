//! # Color Values
//!
//! An amount tagged with a color. Arithmetic is only defined between values
//! of the same color id.

use std::fmt;
use std::sync::Arc;

use super::color_definition::{ColorDefinition, ColorId};
use super::errors::ColoringError;

/// An amount of a specific color.
///
/// The amount may be negative transiently during fee bookkeeping.
#[derive(Debug, Clone)]
pub struct ColorValue {
    definition: Arc<ColorDefinition>,
    value: i64,
}

impl PartialEq for ColorValue {
    fn eq(&self, other: &Self) -> bool {
        self.color_id() == other.color_id() && self.value == other.value
    }
}

impl Eq for ColorValue {}

impl ColorValue {
    /// Create a color value.
    pub fn new(definition: Arc<ColorDefinition>, value: i64) -> Self {
        Self { definition, value }
    }

    /// Uncolored value.
    pub fn uncolored(value: i64) -> Self {
        Self::new(Arc::new(ColorDefinition::Uncolored), value)
    }

    /// The color definition.
    pub fn definition(&self) -> &Arc<ColorDefinition> {
        &self.definition
    }

    /// Color id of the definition.
    pub fn color_id(&self) -> ColorId {
        self.definition.color_id()
    }

    /// Descriptor of the definition.
    pub fn descriptor(&self) -> String {
        self.definition.descriptor()
    }

    /// The amount.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Whether this is plain ledger value.
    pub fn is_uncolored(&self) -> bool {
        self.definition.is_uncolored()
    }

    /// Whether this targets a color that does not exist yet.
    pub fn is_genesis_intent(&self) -> bool {
        self.definition.is_genesis_intent()
    }

    /// Whether both values share a color id.
    pub fn is_compatible(&self, other: &ColorValue) -> bool {
        self.color_id() == other.color_id()
    }

    /// Fail with [`ColoringError::Incompatible`] unless both share a color.
    pub fn check_compatible(&self, other: &ColorValue) -> Result<(), ColoringError> {
        if self.is_compatible(other) {
            Ok(())
        } else {
            Err(ColoringError::Incompatible {
                left: self.color_id(),
                right: other.color_id(),
            })
        }
    }

    /// Same color, different amount.
    pub fn with_value(&self, value: i64) -> Self {
        Self::new(Arc::clone(&self.definition), value)
    }

    /// `self + other`.
    pub fn plus(&self, other: &ColorValue) -> Result<Self, ColoringError> {
        self.check_compatible(other)?;
        let sum = self.value as i128 + other.value as i128;
        Ok(self.with_value(to_amount(sum)?))
    }

    /// `self - other`.
    pub fn minus(&self, other: &ColorValue) -> Result<Self, ColoringError> {
        self.check_compatible(other)?;
        let diff = self.value as i128 - other.value as i128;
        Ok(self.with_value(to_amount(diff)?))
    }

    /// `-self`.
    #[allow(clippy::should_implement_trait)]
    pub fn neg(&self) -> Result<Self, ColoringError> {
        Ok(self.with_value(to_amount(-(self.value as i128))?))
    }

    /// Sum a non-empty list of values of one color.
    pub fn sum<'a, I>(values: I) -> Result<Self, ColoringError>
    where
        I: IntoIterator<Item = &'a ColorValue>,
    {
        let mut iter = values.into_iter();
        let first = iter.next().ok_or(ColoringError::EmptySum)?.clone();
        iter.try_fold(first, |acc, next| acc.plus(next))
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.value, self.definition)
    }
}

/// Narrow a positional amount into a color amount.
pub fn to_amount(value: i128) -> Result<i64, ColoringError> {
    i64::try_from(value).map_err(|_| ColoringError::AmountOverflow(value))
}
