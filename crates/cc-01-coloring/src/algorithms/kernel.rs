//! # EPOBC Kernel
//!
//! Derives the color value of every output of a transaction from the color
//! values of its inputs. Missing or insufficient input coloring makes an
//! output uncolored; it is never an error.

use std::sync::Arc;

use chroma_telemetry::{log_tx_event, subsystems};
use shared_types::Transaction;

use super::affecting_inputs::get_affecting_inputs;
use super::previous::PreviousTransactions;
use crate::domain::{to_amount, ColorDefinition, ColorValue, ColoringError, Tag};

/// Run the kernel of `definition` over `tx`.
///
/// `in_color_values[i]` is the color value of input `i` (entries past the end
/// count as `None`). `prev` must hold the previous transaction of every input
/// that the affecting-inputs walk can reach.
///
/// Returns one entry per output.
pub fn run_kernel(
    definition: &Arc<ColorDefinition>,
    tx: &Transaction,
    in_color_values: &[Option<ColorValue>],
    prev: &PreviousTransactions,
) -> Result<Vec<Option<ColorValue>>, ColoringError> {
    let mut out_color_values: Vec<Option<ColorValue>> = vec![None; tx.outputs.len()];

    let Some(epobc) = definition.as_epobc() else {
        return Ok(out_color_values);
    };
    let Some(tag) = Tag::from_tx(tx) else {
        return Ok(out_color_values);
    };
    let padding = tag.padding() as i128;

    if tag.is_genesis() {
        let txid = tx.txid();
        if epobc.is_genesis_tx(&txid) {
            if let Some(first) = tx.outputs.first() {
                let minted = first.value as i128 - padding;
                if minted > 0 {
                    let minted = to_amount(minted)?;
                    out_color_values[0] = Some(ColorValue::new(Arc::clone(definition), minted));
                    log_tx_event!(
                        debug,
                        subsystems::COLORING,
                        "Genesis minted",
                        txid,
                        color_id = epobc.color_id(),
                        value = minted
                    );
                }
            }
        }
        return Ok(out_color_values);
    }

    let expected = ColorValue::new(Arc::clone(definition), 0);
    for (out_index, output) in tx.outputs.iter().enumerate() {
        let out_value_wop = output.value as i128 - padding;
        if out_value_wop <= 0 {
            continue;
        }

        let affecting = get_affecting_inputs(tx, tag.padding(), out_index, prev)?;
        if affecting.is_empty() {
            continue;
        }

        let colored: Option<Vec<&ColorValue>> = affecting
            .iter()
            .map(|&index| in_color_values.get(index).and_then(Option::as_ref))
            .collect();
        let Some(colored) = colored else {
            continue;
        };

        let sum = ColorValue::sum(colored)?;
        expected.check_compatible(&sum)?;

        if sum.value() as i128 >= out_value_wop {
            out_color_values[out_index] =
                Some(ColorValue::new(Arc::clone(definition), to_amount(out_value_wop)?));
        }
    }

    Ok(out_color_values)
}
