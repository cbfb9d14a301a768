//! # EPOBC Tag
//!
//! The tag lives in the sequence number of input 0:
//!
//! ```text
//!  bit  0..6   tag marker, bit 0 first: xfer = 1,1,0,0,1,1  genesis = 1,0,1,0,0,1
//!  bit  6..12  padding code, little-endian
//!  bit 12..32  unused (zero on encode, ignored on decode)
//! ```
//!
//! This layout is the only on-ledger artifact of the protocol and must match
//! other implementations bit for bit.

use serde::{Deserialize, Serialize};
use shared_types::Transaction;

use super::errors::ColoringError;

/// Marker for transfer transactions (bits 0..6 = 1,1,0,0,1,1).
pub const XFER_TAG_BITS: u32 = 0b11_0011;

/// Marker for genesis transactions (bits 0..6 = 1,0,1,0,0,1).
pub const GENESIS_TAG_BITS: u32 = 0b10_0101;

/// Largest padding code; padding is `2^code`.
pub const MAX_PADDING_CODE: u8 = 63;

const TAG_MASK: u32 = 0x3f;
const PADDING_SHIFT: u32 = 6;

/// Decoded EPOBC tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    padding_code: u8,
    is_genesis: bool,
}

impl Tag {
    /// Create a tag. Fails if `padding_code > 63`.
    pub fn new(padding_code: u8, is_genesis: bool) -> Result<Self, ColoringError> {
        if padding_code > MAX_PADDING_CODE {
            return Err(ColoringError::InvalidPaddingCode(padding_code));
        }
        Ok(Self {
            padding_code,
            is_genesis,
        })
    }

    /// Transfer tag with the given padding code.
    pub fn xfer(padding_code: u8) -> Result<Self, ColoringError> {
        Self::new(padding_code, false)
    }

    /// Genesis tag with the given padding code.
    pub fn genesis(padding_code: u8) -> Result<Self, ColoringError> {
        Self::new(padding_code, true)
    }

    /// The 6-bit padding code.
    pub fn padding_code(&self) -> u8 {
        self.padding_code
    }

    /// Whether this tag marks a genesis transaction.
    pub fn is_genesis(&self) -> bool {
        self.is_genesis
    }

    /// Padding in base units: `0` for code 0, else `2^code`.
    pub fn padding(&self) -> u64 {
        if self.padding_code == 0 {
            0
        } else {
            1u64 << self.padding_code
        }
    }

    /// Decode a sequence number. `None` when neither marker matches.
    pub fn from_sequence(sequence: u32) -> Option<Self> {
        let is_genesis = match sequence & TAG_MASK {
            XFER_TAG_BITS => false,
            GENESIS_TAG_BITS => true,
            _ => return None,
        };
        let padding_code = ((sequence >> PADDING_SHIFT) & TAG_MASK) as u8;
        Some(Self {
            padding_code,
            is_genesis,
        })
    }

    /// Read the tag of a transaction from input 0.
    ///
    /// Coinbase transactions and transactions without inputs are never tagged.
    pub fn from_tx(tx: &Transaction) -> Option<Self> {
        if tx.is_coinbase() {
            return None;
        }
        tx.inputs
            .first()
            .and_then(|input| Self::from_sequence(input.sequence))
    }

    /// Encode into a sequence number; bits 12..32 are zero.
    pub fn to_sequence(&self) -> u32 {
        let marker = if self.is_genesis {
            GENESIS_TAG_BITS
        } else {
            XFER_TAG_BITS
        };
        marker | ((self.padding_code as u32) << PADDING_SHIFT)
    }

    /// Smallest padding code whose padding covers `min_padding`.
    ///
    /// Returns 0 when no padding is needed, otherwise the smallest code in
    /// `1..=63` with `2^code >= min_padding`.
    pub fn closest_padding_code(min_padding: i128) -> Result<u8, ColoringError> {
        if min_padding <= 0 {
            return Ok(0);
        }
        (1..=MAX_PADDING_CODE)
            .find(|&code| (1i128 << code) >= min_padding)
            .ok_or(ColoringError::Padding { min_padding })
    }
}
