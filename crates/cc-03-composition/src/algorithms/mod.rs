//! # Algorithms Module
//!
//! Transfer and genesis composition, the inverse of the kernel.

pub mod genesis;
pub mod transfer;


pub use genesis::compose_genesis_tx;
pub use transfer::compose_transfer_tx;

use crate::domain::{ColorTarget, ComposedTx, CompositionError};
use crate::ports::OperationalTx;

/// Compose whatever `op` asks for: a genesis when any target is of the
/// genesis-intent color, a transfer otherwise.
pub async fn compose<O>(op: &O) -> Result<ComposedTx, CompositionError>
where
    O: OperationalTx + ?Sized,
{
    if op.targets().iter().any(ColorTarget::is_genesis_intent) {
        compose_genesis_tx(op).await
    } else {
        compose_transfer_tx(op).await
    }
}
