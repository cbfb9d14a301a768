//! # Ledger Entities
//!
//! Transactions, inputs, outputs and the identifiers that link them into a
//! spend graph.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use crate::errors::TxIdParseError;

/// Sequence number of an input that does not opt into any sequence semantics.
pub const DEFAULT_SEQUENCE: u32 = u32::MAX;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// A 32-byte transaction identifier.
///
/// Rendered as lowercase hex in the byte order it is stored in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct TxId(pub [u8; 32]);

impl TxId {
    /// The all-zero id referenced by coinbase inputs.
    pub const ZERO: TxId = TxId([0u8; 32]);

    /// Raw bytes of the id.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Whether every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxId({})", self)
    }
}

impl FromStr for TxId {
    type Err = TxIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(TxIdParseError::InvalidLength(s.len()));
        }
        let bytes = hex::decode(s).map_err(|e| TxIdParseError::InvalidHex(e.to_string()))?;
        let mut id = [0u8; 32];
        id.copy_from_slice(&bytes);
        Ok(TxId(id))
    }
}

/// Reference to a specific output of a previous transaction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OutPoint {
    /// Transaction that created the output.
    pub txid: TxId,
    /// Index of the output inside that transaction.
    pub vout: u32,
}

impl OutPoint {
    /// Create a new outpoint.
    pub fn new(txid: TxId, vout: u32) -> Self {
        Self { txid, vout }
    }

    /// The outpoint spent by a coinbase input.
    pub fn null() -> Self {
        Self {
            txid: TxId::ZERO,
            vout: u32::MAX,
        }
    }

    /// Whether this is the coinbase (null) outpoint.
    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.vout == u32::MAX
    }
}

impl fmt::Debug for OutPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.txid, self.vout)
    }
}

impl fmt::Display for OutPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.txid, self.vout)
    }
}

// =============================================================================
// TRANSACTIONS
// =============================================================================

/// A transaction input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxIn {
    /// Output being spent.
    pub previous_output: OutPoint,
    /// Unlocking script (empty while unsigned).
    pub script_sig: Vec<u8>,
    /// Sequence number. Input 0 carries the EPOBC tag.
    pub sequence: u32,
}

impl TxIn {
    /// Unsigned input spending `previous_output` with the default sequence.
    pub fn new(previous_output: OutPoint) -> Self {
        Self {
            previous_output,
            script_sig: Vec::new(),
            sequence: DEFAULT_SEQUENCE,
        }
    }
}

/// A transaction output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOut {
    /// Amount in base units (satoshis).
    pub value: u64,
    /// Locking script.
    pub script_pubkey: Vec<u8>,
}

impl TxOut {
    /// Create a new output.
    pub fn new(value: u64, script_pubkey: Vec<u8>) -> Self {
        Self {
            value,
            script_pubkey,
        }
    }
}

/// A ledger transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction format version.
    pub version: u32,
    /// Inputs in spend order.
    pub inputs: Vec<TxIn>,
    /// Outputs in creation order.
    pub outputs: Vec<TxOut>,
    /// Lock time.
    pub lock_time: u32,
}

impl Default for Transaction {
    fn default() -> Self {
        Self {
            version: 1,
            inputs: Vec::new(),
            outputs: Vec::new(),
            lock_time: 0,
        }
    }
}

impl Transaction {
    /// Create a version-1 transaction with the given inputs and outputs.
    pub fn new(inputs: Vec<TxIn>, outputs: Vec<TxOut>) -> Self {
        Self {
            inputs,
            outputs,
            ..Self::default()
        }
    }

    /// Canonical serialization.
    ///
    /// Little-endian integers and compact-size length prefixes, matching the
    /// legacy Bitcoin wire layout.
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(10 + self.inputs.len() * 41 + self.outputs.len() * 9);
        buf.extend_from_slice(&self.version.to_le_bytes());

        write_compact_size(&mut buf, self.inputs.len() as u64);
        for input in &self.inputs {
            buf.extend_from_slice(input.previous_output.txid.as_bytes());
            buf.extend_from_slice(&input.previous_output.vout.to_le_bytes());
            write_compact_size(&mut buf, input.script_sig.len() as u64);
            buf.extend_from_slice(&input.script_sig);
            buf.extend_from_slice(&input.sequence.to_le_bytes());
        }

        write_compact_size(&mut buf, self.outputs.len() as u64);
        for output in &self.outputs {
            buf.extend_from_slice(&output.value.to_le_bytes());
            write_compact_size(&mut buf, output.script_pubkey.len() as u64);
            buf.extend_from_slice(&output.script_pubkey);
        }

        buf.extend_from_slice(&self.lock_time.to_le_bytes());
        buf
    }

    /// Transaction id: double SHA-256 of the canonical serialization.
    pub fn txid(&self) -> TxId {
        let first = Sha256::digest(self.serialize());
        let second = Sha256::digest(first);
        let mut id = [0u8; 32];
        id.copy_from_slice(&second);
        TxId(id)
    }

    /// Serialized size in bytes.
    pub fn size(&self) -> usize {
        self.serialize().len()
    }

    /// Whether input 0 spends the null outpoint.
    pub fn is_coinbase(&self) -> bool {
        self.inputs
            .first()
            .map(|input| input.previous_output.is_null())
            .unwrap_or(false)
    }

    /// Sum of all output values.
    pub fn total_output_value(&self) -> u64 {
        self.outputs.iter().map(|o| o.value).sum()
    }
}

fn write_compact_size(buf: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => buf.push(n as u8),
        0xfd..=0xffff => {
            buf.push(0xfd);
            buf.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            buf.push(0xfe);
            buf.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            buf.push(0xff);
            buf.extend_from_slice(&n.to_le_bytes());
        }
    }
}
