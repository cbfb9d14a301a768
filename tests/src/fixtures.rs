//! # Fixtures
//!
//! Tagged transactions built by hand, for tests and benchmarks that need a
//! colored history without going through the composer.

use std::sync::Arc;

use cc_01_coloring::{
    ColorDefinition, ColorId, ColoringError, EpobcColorDefinition, GenesisPoint,
    GENESIS_TAG_BITS, XFER_TAG_BITS,
};
use shared_types::{OutPoint, Transaction, TxId, TxIn, TxOut};

/// Script of every fixture output.
pub const FIXTURE_SCRIPT: [u8; 1] = [0x51];

fn outputs(values: &[u64]) -> Vec<TxOut> {
    values
        .iter()
        .map(|&v| TxOut::new(v, FIXTURE_SCRIPT.to_vec()))
        .collect()
}

/// Genesis transaction with padding code 0; `seed` keeps txids distinct.
pub fn genesis_tx(seed: u8, values: &[u64]) -> Transaction {
    let mut input = TxIn::new(OutPoint::new(TxId([seed; 32]), 0));
    input.sequence = GENESIS_TAG_BITS;
    Transaction::new(vec![input], outputs(values))
}

/// Untagged transaction paying plain value.
pub fn plain_tx(seed: u8, values: &[u64]) -> Transaction {
    Transaction::new(
        vec![TxIn::new(OutPoint::new(TxId([seed; 32]), 0))],
        outputs(values),
    )
}

/// Transfer with padding code 0 spending `spent` in order.
pub fn transfer_tx(spent: &[OutPoint], values: &[u64]) -> Transaction {
    let mut inputs: Vec<TxIn> = spent.iter().map(|&op| TxIn::new(op)).collect();
    if let Some(first) = inputs.first_mut() {
        first.sequence = XFER_TAG_BITS;
    }
    Transaction::new(inputs, outputs(values))
}

/// EPOBC color whose genesis is output 0 of `genesis`.
pub fn color_of(color_id: ColorId, genesis: &Transaction) -> Result<Arc<ColorDefinition>, ColoringError> {
    let point = GenesisPoint::new(genesis.txid(), 0, 0);
    Ok(Arc::new(ColorDefinition::Epobc(EpobcColorDefinition::new(
        color_id, point,
    )?)))
}

/// A genesis of `value` followed by `len` transfers, each moving the whole
/// amount from output 0 of its parent. The genesis comes first.
pub fn transfer_chain(len: usize, value: u64) -> Vec<Transaction> {
    let mut chain = Vec::with_capacity(len + 1);
    chain.push(genesis_tx(0x01, &[value]));
    for _ in 0..len {
        let parent = chain[chain.len() - 1].txid();
        chain.push(transfer_tx(&[OutPoint::new(parent, 0)], &[value]));
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use cc_01_coloring::Tag;

    #[test]
    fn test_fixture_tags() {
        assert_eq!(
            Tag::from_tx(&genesis_tx(1, &[10])),
            Some(Tag::genesis(0).unwrap())
        );
        assert_eq!(
            Tag::from_tx(&transfer_tx(&[OutPoint::new(TxId([2; 32]), 0)], &[10])),
            Some(Tag::xfer(0).unwrap())
        );
        assert_eq!(Tag::from_tx(&plain_tx(3, &[10])), None);
    }

    #[test]
    fn test_chain_links_parents() {
        let chain = transfer_chain(3, 1_000);
        assert_eq!(chain.len(), 4);
        for pair in chain.windows(2) {
            assert_eq!(pair[1].inputs[0].previous_output.txid, pair[0].txid());
        }
    }
}
