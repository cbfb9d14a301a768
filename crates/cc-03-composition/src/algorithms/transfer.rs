//! # Transfer Composition
//!
//! Lays out colored inputs and outputs so the kernel reproduces every
//! target, then tops the transaction up with plain value for padding and
//! fees.
//!
//! Colored groups are laid out one after another. Within a group the selected
//! coins' color equals the targets plus change exactly, so the order-based
//! mapping assigns every colored output to inputs of its own color.

use std::sync::Arc;

use cc_01_coloring::{to_amount, ColorDefinition, ColorId, ColorValue, ColoringError, Tag};
use chroma_telemetry::{log_color_event, subsystems};
use tracing::debug;

use crate::domain::{CoinSelection, ColorTarget, ComposedTx, CompositionError};
use crate::ports::{FeeEstimator, OperationalTx};

struct ColorGroup {
    definition: Arc<ColorDefinition>,
    targets: Vec<ColorTarget>,
    selection: CoinSelection,
}

pub(crate) fn validate_targets(targets: &[ColorTarget]) -> Result<(), CompositionError> {
    if targets.is_empty() {
        return Err(CompositionError::NoTargets);
    }
    if let Some(bad) = targets.iter().find(|t| t.amount() <= 0) {
        return Err(CompositionError::InvalidTargetValue {
            color_id: bad.color_id(),
            value: bad.amount(),
        });
    }
    Ok(())
}

pub(crate) fn ledger_amount(value: i128) -> Result<u64, CompositionError> {
    u64::try_from(value).map_err(|_| ColoringError::AmountOverflow(value).into())
}

/// Prices the transaction being built with the wallet's `fee_for_size`.
struct WalletPricedTx<'a, O: ?Sized> {
    op: &'a O,
    tx: &'a ComposedTx,
}

impl<O> FeeEstimator for WalletPricedTx<'_, O>
where
    O: OperationalTx + ?Sized,
{
    fn estimate_required_fee(&self, extra_inputs: usize, extra_outputs: usize) -> u64 {
        self.op
            .fee_for_size(self.tx.estimate_size(extra_inputs, extra_outputs))
    }
}

fn required_fee<O>(op: &O, tx: &ComposedTx, extra_inputs: usize, extra_outputs: usize) -> i128
where
    O: OperationalTx + ?Sized,
{
    op.fee_for_size(tx.estimate_size(extra_inputs, extra_outputs)) as i128
}

/// Fund `uncolored_needed` plus fees with plain coins and add change.
///
/// A non-positive requirement means the colored inputs already cover the
/// outputs and the fee; the surplus is recorded as excess.
pub(crate) async fn fund_uncolored<O>(
    op: &O,
    tx: &mut ComposedTx,
    uncolored_needed: i128,
    uncolored: &Arc<ColorDefinition>,
) -> Result<(), CompositionError>
where
    O: OperationalTx + ?Sized,
{
    let fee = required_fee(op, tx, 0, 0);
    if uncolored_needed + fee <= 0 {
        tx.set_excess(ledger_amount(-(uncolored_needed + fee))?);
        return Ok(());
    }

    let needed = ColorValue::new(Arc::clone(uncolored), to_amount(uncolored_needed)?);
    let estimator = WalletPricedTx { op, tx: &*tx };
    let selection = op
        .select_coins(&needed, Some(&estimator as &dyn FeeEstimator))
        .await?;
    tx.add_coins(&selection.coins);

    let total = selection.ledger_value() as i128;
    let dust = op.dust_threshold() as i128;
    let change = total - uncolored_needed - required_fee(op, tx, 0, 1);
    if change > dust {
        tx.add_output(op.change_script(uncolored)?, ledger_amount(change)?);
        return Ok(());
    }

    let fee = required_fee(op, tx, 0, 0);
    let leftover = total - uncolored_needed - fee;
    if leftover < 0 {
        return Err(CompositionError::InsufficientFunds {
            color_id: uncolored.color_id(),
            needed: i64::try_from(uncolored_needed + fee).unwrap_or(i64::MAX),
            available: i64::try_from(total).unwrap_or(i64::MAX),
        });
    }
    tx.set_excess(ledger_amount(leftover)?);
    Ok(())
}

/// Compose a transfer of every target of `op`.
pub async fn compose_transfer_tx<O>(op: &O) -> Result<ComposedTx, CompositionError>
where
    O: OperationalTx + ?Sized,
{
    let targets = op.targets();
    validate_targets(targets)?;
    if targets.iter().any(ColorTarget::is_genesis_intent) {
        return Err(CompositionError::UnexpectedGenesisIntent);
    }

    // Group colored targets by color, keeping first-appearance order.
    let mut order: Vec<ColorId> = Vec::new();
    let mut by_color: Vec<(Arc<ColorDefinition>, Vec<ColorTarget>)> = Vec::new();
    let mut plain: Vec<&ColorTarget> = Vec::new();
    let mut uncolored_def = None;
    for target in targets {
        if target.is_uncolored() {
            uncolored_def.get_or_insert_with(|| Arc::clone(target.definition()));
            plain.push(target);
            continue;
        }
        match order.iter().position(|&id| id == target.color_id()) {
            Some(pos) => by_color[pos].1.push(target.clone()),
            None => {
                order.push(target.color_id());
                by_color.push((Arc::clone(target.definition()), vec![target.clone()]));
            }
        }
    }
    let uncolored = uncolored_def.unwrap_or_else(|| Arc::new(ColorDefinition::Uncolored));

    let mut groups = Vec::with_capacity(by_color.len());
    for (definition, mut group_targets) in by_color {
        let needed = ColorValue::sum(group_targets.iter().map(|t| &t.value))?;
        let selection = op.select_coins(&needed, None).await?;
        selection.total.check_compatible(&needed)?;
        if selection.total.value() > needed.value() {
            let change = selection.total.minus(&needed)?;
            group_targets.push(ColorTarget::new(op.change_script(&definition)?, change));
        }
        groups.push(ColorGroup {
            definition,
            targets: group_targets,
            selection,
        });
    }

    let dust = op.dust_threshold() as i128;
    let min_padding = groups
        .iter()
        .flat_map(|g| g.targets.iter())
        .map(|t| dust - t.amount() as i128)
        .max()
        .unwrap_or(0);
    let tag = Tag::xfer(Tag::closest_padding_code(min_padding)?)?;
    let padding = tag.padding() as i128;

    let mut tx = ComposedTx::new(op.fee_policy());
    let mut uncolored_needed: i128 = 0;
    for group in &groups {
        tx.add_coins(&group.selection.coins);
        uncolored_needed -= group.selection.ledger_value() as i128;
        for target in &group.targets {
            let value = ledger_amount(target.amount() as i128 + padding)?;
            tx.add_output(target.script.clone(), value);
            uncolored_needed += value as i128;
        }
        log_color_event!(
            debug,
            subsystems::COMPOSITION,
            "Laid out color group",
            group.definition.color_id(),
            inputs = group.selection.coins.len(),
            outputs = group.targets.len()
        );
    }
    for target in plain {
        let value = ledger_amount(target.amount() as i128)?;
        tx.add_output(target.script.clone(), value);
        uncolored_needed += value as i128;
    }

    fund_uncolored(op, &mut tx, uncolored_needed, &uncolored).await?;
    tx.set_tag(tag)?;

    debug!(
        "[cc-03] Composed transfer: {} inputs, {} outputs, padding {}",
        tx.inputs().len(),
        tx.outputs().len(),
        padding
    );
    Ok(tx)
}
