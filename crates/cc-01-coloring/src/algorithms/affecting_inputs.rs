//! # Affecting Inputs
//!
//! Order-based mapping from an output to the inputs whose colored value it
//! consumes. After subtracting padding from every value, inputs and outputs
//! are laid end to end; an input affects an output iff their half-open
//! ranges overlap.
//!
//! ```text
//! inputs   [  in0  )[    in1    )[ in2 )
//! outputs  [ out0 )[  out1  )[   out2   )
//!                   ^ out1 is affected by in0 and in1
//! ```

use std::collections::BTreeSet;

use shared_types::Transaction;

use super::previous::{load_previous_transactions, PreviousTransactions};
use crate::domain::{ColoringError, Tag};
use crate::ports::LedgerAccessor;

/// Inputs affecting output `out_index` when `padding` is removed from every
/// output value.
///
/// Returns an empty list when any output up to and including `out_index` is
/// not larger than the padding. The input walk stops at the first input whose
/// previous transaction is untagged or whose value does not exceed its own
/// padding.
pub fn get_affecting_inputs(
    tx: &Transaction,
    padding: u64,
    out_index: usize,
    prev: &PreviousTransactions,
) -> Result<Vec<usize>, ColoringError> {
    let Some(target) = tx.outputs.get(out_index) else {
        return Err(ColoringError::OutputOutOfRange {
            txid: tx.txid(),
            index: out_index,
        });
    };

    let padding = padding as i128;

    let mut out_prec_sum: i128 = 0;
    for output in &tx.outputs[..out_index] {
        let value_wop = output.value as i128 - padding;
        if value_wop <= 0 {
            return Ok(Vec::new());
        }
        out_prec_sum += value_wop;
    }

    let out_value_wop = target.value as i128 - padding;
    if out_value_wop <= 0 {
        return Ok(Vec::new());
    }
    let out_end = out_prec_sum + out_value_wop;

    let mut affecting = Vec::new();
    let mut input_running_sum: i128 = 0;
    for (index, input) in tx.inputs.iter().enumerate() {
        let Some((value, prev_tag)) = prev.tagged_input(input)? else {
            break;
        };

        let value_wop = value as i128 - prev_tag.padding() as i128;
        if value_wop <= 0 {
            break;
        }

        if input_running_sum < out_end && input_running_sum + value_wop > out_prec_sum {
            affecting.push(index);
        }
        input_running_sum += value_wop;
    }

    Ok(affecting)
}

/// Union of affecting inputs over `out_indices`, using already loaded
/// previous transactions.
///
/// `None` when `tx` is untagged or a genesis transaction: its outputs are not
/// derived from colored inputs.
pub fn collect_affecting_inputs(
    tx: &Transaction,
    out_indices: &[usize],
    prev: &PreviousTransactions,
) -> Result<Option<Vec<usize>>, ColoringError> {
    let tag = match Tag::from_tx(tx) {
        Some(tag) if !tag.is_genesis() => tag,
        _ => return Ok(None),
    };

    let mut inputs = BTreeSet::new();
    for &out_index in out_indices {
        inputs.extend(get_affecting_inputs(tx, tag.padding(), out_index, prev)?);
    }
    Ok(Some(inputs.into_iter().collect()))
}

/// Affecting inputs for several outputs, fetching previous transactions from
/// the ledger first.
///
/// The tag is checked before anything is fetched, so untagged and genesis
/// transactions cost no ledger round trips.
pub async fn get_affecting_inputs_for_outputs<L>(
    tx: &Transaction,
    out_indices: &[usize],
    ledger: &L,
) -> Result<Option<Vec<usize>>, ColoringError>
where
    L: LedgerAccessor + ?Sized,
{
    match Tag::from_tx(tx) {
        Some(tag) if !tag.is_genesis() => {}
        _ => return Ok(None),
    }

    let prev = load_previous_transactions(ledger, tx).await?;
    collect_affecting_inputs(tx, out_indices, &prev)
}
