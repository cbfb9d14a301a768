//! # Composed Transaction
//!
//! An unsigned transaction under construction. Owned by the composition call
//! that created it and never shared.

use cc_01_coloring::Tag;
use shared_types::{OutPoint, Transaction, TxIn, TxOut};

use super::entities::Coin;
use super::errors::CompositionError;
use super::value_objects::FeePolicy;

/// Transaction builder produced by the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedTx {
    inputs: Vec<TxIn>,
    outputs: Vec<TxOut>,
    tag: Option<Tag>,
    excess: u64,
    fee_policy: FeePolicy,
}

impl ComposedTx {
    /// Empty transaction priced with `fee_policy`.
    pub fn new(fee_policy: FeePolicy) -> Self {
        Self {
            inputs: Vec::new(),
            outputs: Vec::new(),
            tag: None,
            excess: 0,
            fee_policy,
        }
    }

    /// Inputs added so far.
    pub fn inputs(&self) -> &[TxIn] {
        &self.inputs
    }

    /// Outputs added so far.
    pub fn outputs(&self) -> &[TxOut] {
        &self.outputs
    }

    /// Tag written into input 0, once set.
    pub fn tag(&self) -> Option<Tag> {
        self.tag
    }

    /// Uncolored value brought in by inputs but not paid to any output nor
    /// needed for the estimated fee. It goes to the miner unless the caller
    /// reclaims it.
    pub fn excess(&self) -> u64 {
        self.excess
    }

    /// Fee model of this transaction.
    pub fn fee_policy(&self) -> FeePolicy {
        self.fee_policy
    }

    /// Spend `outpoint`.
    pub fn add_input(&mut self, outpoint: OutPoint) {
        self.inputs.push(TxIn::new(outpoint));
    }

    /// Spend every coin in order.
    pub fn add_coins(&mut self, coins: &[Coin]) {
        for coin in coins {
            self.add_input(coin.outpoint);
        }
    }

    /// Pay `value` to `script`.
    pub fn add_output(&mut self, script: Vec<u8>, value: u64) {
        self.outputs.push(TxOut::new(value, script));
    }

    pub(crate) fn set_excess(&mut self, excess: u64) {
        self.excess = excess;
    }

    /// Write `tag` into the sequence number of input 0.
    pub fn set_tag(&mut self, tag: Tag) -> Result<(), CompositionError> {
        let first = self.inputs.first_mut().ok_or(CompositionError::NoInputs)?;
        first.sequence = tag.to_sequence();
        self.tag = Some(tag);
        Ok(())
    }

    /// Estimated signed size with `extra_inputs` and `extra_outputs` more.
    pub fn estimate_size(&self, extra_inputs: usize, extra_outputs: usize) -> usize {
        self.fee_policy.estimate_size(
            self.inputs.len() + extra_inputs,
            self.outputs.len() + extra_outputs,
        )
    }

    /// Fee required at the estimated size.
    pub fn estimate_required_fee(&self, extra_inputs: usize, extra_outputs: usize) -> u64 {
        self.fee_policy
            .fee_for_size(self.estimate_size(extra_inputs, extra_outputs))
    }

    /// The unsigned ledger transaction.
    pub fn into_transaction(self) -> Transaction {
        Transaction::new(self.inputs, self.outputs)
    }
}
