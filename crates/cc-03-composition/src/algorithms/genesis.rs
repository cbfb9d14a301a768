//! # Genesis Composition
//!
//! Mints a new color: output 0 receives the target amount plus padding and
//! input 0 carries a genesis tag. Everything is funded with plain value.

use std::sync::Arc;

use cc_01_coloring::{ColorDefinition, Tag};
use tracing::info;

use super::transfer::{fund_uncolored, ledger_amount, validate_targets};
use crate::domain::{ComposedTx, CompositionError};
use crate::ports::OperationalTx;

/// Compose the genesis transaction of a new color.
///
/// `op` must carry exactly one target of the genesis-intent color; anything
/// else fails before the transaction is built.
pub async fn compose_genesis_tx<O>(op: &O) -> Result<ComposedTx, CompositionError>
where
    O: OperationalTx + ?Sized,
{
    let targets = op.targets();
    if targets.len() != 1 {
        return Err(CompositionError::GenesisTargetCount(targets.len()));
    }
    validate_targets(targets)?;
    let target = &targets[0];
    if !target.is_genesis_intent() {
        return Err(CompositionError::NotGenesisIntent(target.color_id()));
    }

    let min_padding = op.dust_threshold() as i128 - target.amount() as i128;
    let tag = Tag::genesis(Tag::closest_padding_code(min_padding)?)?;

    let mut tx = ComposedTx::new(op.fee_policy());
    let value = ledger_amount(target.amount() as i128 + tag.padding() as i128)?;
    tx.add_output(target.script.clone(), value);

    let uncolored = Arc::new(ColorDefinition::Uncolored);
    fund_uncolored(op, &mut tx, value as i128, &uncolored).await?;
    tx.set_tag(tag)?;

    info!(
        "[cc-03] Composed genesis of {} (padding {}, {} inputs)",
        target.amount(),
        tag.padding(),
        tx.inputs().len()
    );
    Ok(tx)
}
