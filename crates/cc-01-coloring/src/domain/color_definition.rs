//! # Color Definitions
//!
//! A color definition identifies a logical asset. The protocol identity of an
//! EPOBC color is its genesis output (`txid`, `out_index`, `height`); the
//! numeric [`ColorId`] is a local allocation made by the registry.
//!
//! Descriptor format: `epobc:<64-hex txid>:<out_index>:<height>`; the empty
//! descriptor denotes "uncolored".

use serde::{Deserialize, Serialize};
use shared_types::TxId;
use std::fmt;

use super::errors::ColoringError;

/// Locally allocated color identifier.
pub type ColorId = i64;

/// Reserved id for uncolored value.
pub const UNCOLORED_COLOR_ID: ColorId = 0;

/// Reserved id for the abstract "mint a new color" marker used while composing.
pub const GENESIS_INTENT_COLOR_ID: ColorId = -1;

/// Descriptor prefix of the EPOBC scheme.
pub const EPOBC_SCHEME: &str = "epobc";

/// The output that originates an EPOBC color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenesisPoint {
    /// Genesis transaction id.
    pub txid: TxId,
    /// Output index carrying the minted amount.
    pub out_index: u32,
    /// Block height of the genesis transaction.
    pub height: u64,
}

impl GenesisPoint {
    /// Create a genesis point.
    pub fn new(txid: TxId, out_index: u32, height: u64) -> Self {
        Self {
            txid,
            out_index,
            height,
        }
    }
}

/// An EPOBC color definition.
///
/// Equality compares genesis points only; two registries may assign the same
/// color different local ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpobcColorDefinition {
    color_id: ColorId,
    genesis: GenesisPoint,
}

impl PartialEq for EpobcColorDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.genesis == other.genesis
    }
}

impl Eq for EpobcColorDefinition {}

impl EpobcColorDefinition {
    /// Create a definition. EPOBC color ids must be positive.
    pub fn new(color_id: ColorId, genesis: GenesisPoint) -> Result<Self, ColoringError> {
        if color_id <= UNCOLORED_COLOR_ID {
            return Err(ColoringError::IncorrectColorId(color_id));
        }
        Ok(Self { color_id, genesis })
    }

    /// Build from a descriptor string.
    pub fn from_desc(color_id: ColorId, desc: &str) -> Result<Self, ColoringError> {
        Self::new(color_id, Self::parse_descriptor(desc)?)
    }

    /// Parse `epobc:<txid>:<out_index>:<height>` into its genesis point.
    pub fn parse_descriptor(desc: &str) -> Result<GenesisPoint, ColoringError> {
        let incorrect = || ColoringError::IncorrectDesc(desc.to_string());

        let parts: Vec<&str> = desc.split(':').collect();
        if parts.len() != 4 || parts[0] != EPOBC_SCHEME {
            return Err(incorrect());
        }

        let txid: TxId = parts[1].parse().map_err(|_| incorrect())?;
        let out_index: u32 = parts[2].parse().map_err(|_| incorrect())?;
        let height: u64 = parts[3].parse().map_err(|_| incorrect())?;

        Ok(GenesisPoint::new(txid, out_index, height))
    }

    /// Local color id.
    pub fn color_id(&self) -> ColorId {
        self.color_id
    }

    /// Genesis output.
    pub fn genesis(&self) -> &GenesisPoint {
        &self.genesis
    }

    /// Canonical descriptor.
    pub fn descriptor(&self) -> String {
        format!(
            "{}:{}:{}:{}",
            EPOBC_SCHEME, self.genesis.txid, self.genesis.out_index, self.genesis.height
        )
    }

    /// Whether `txid` is this color's genesis transaction.
    pub fn is_genesis_tx(&self, txid: &TxId) -> bool {
        self.genesis.txid == *txid
    }
}

/// Any color definition known to the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorDefinition {
    /// Plain ledger value.
    Uncolored,
    /// A color that does not exist yet; only used as a composition target.
    GenesisIntent,
    /// An EPOBC color.
    Epobc(EpobcColorDefinition),
}

impl ColorDefinition {
    /// Local color id.
    pub fn color_id(&self) -> ColorId {
        match self {
            Self::Uncolored => UNCOLORED_COLOR_ID,
            Self::GenesisIntent => GENESIS_INTENT_COLOR_ID,
            Self::Epobc(def) => def.color_id(),
        }
    }

    /// Descriptor string. Uncolored and genesis intent have no on-ledger
    /// identity and yield the empty string.
    pub fn descriptor(&self) -> String {
        match self {
            Self::Uncolored | Self::GenesisIntent => String::new(),
            Self::Epobc(def) => def.descriptor(),
        }
    }

    /// Whether this is the uncolored definition.
    pub fn is_uncolored(&self) -> bool {
        matches!(self, Self::Uncolored)
    }

    /// Whether this is the genesis-intent marker.
    pub fn is_genesis_intent(&self) -> bool {
        matches!(self, Self::GenesisIntent)
    }

    /// The EPOBC definition, if any.
    pub fn as_epobc(&self) -> Option<&EpobcColorDefinition> {
        match self {
            Self::Epobc(def) => Some(def),
            _ => None,
        }
    }
}

impl fmt::Display for ColorDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uncolored => f.write_str("uncolored"),
            Self::GenesisIntent => f.write_str("genesis"),
            Self::Epobc(def) => f.write_str(&def.descriptor()),
        }
    }
}
