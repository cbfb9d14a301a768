//! In-Memory Operational Transaction
//!
//! Implements `OperationalTx` over a fixed coin pool with greedy selection.
//! Coins selected once are not offered again within the same composition.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use cc_01_coloring::{ColorDefinition, ColorId, ColorValue};
use parking_lot::Mutex;
use shared_types::OutPoint;
use tracing::debug;

use crate::config::CompositionConfig;
use crate::domain::{Coin, CoinSelection, ColorTarget, CompositionError, FeePolicy};
use crate::ports::outbound::{FeeEstimator, OperationalTx};

/// A composition request backed by an in-memory coin pool.
pub struct InMemoryOperationalTx {
    config: CompositionConfig,
    targets: Vec<ColorTarget>,
    coins: Vec<Coin>,
    change_scripts: HashMap<ColorId, Vec<u8>>,
    default_change_script: Vec<u8>,
    spent: Mutex<HashSet<OutPoint>>,
}

impl InMemoryOperationalTx {
    /// Create with targets, spendable coins and the fallback change script.
    pub fn new(
        config: CompositionConfig,
        targets: Vec<ColorTarget>,
        coins: Vec<Coin>,
        default_change_script: Vec<u8>,
    ) -> Self {
        Self {
            config,
            targets,
            coins,
            change_scripts: HashMap::new(),
            default_change_script,
            spent: Mutex::new(HashSet::new()),
        }
    }

    /// Send change of `color_id` to `script` instead of the fallback.
    pub fn with_change_script(mut self, color_id: ColorId, script: Vec<u8>) -> Self {
        self.change_scripts.insert(color_id, script);
        self
    }
}

#[async_trait]
impl OperationalTx for InMemoryOperationalTx {
    fn targets(&self) -> &[ColorTarget] {
        &self.targets
    }

    async fn select_coins(
        &self,
        color_value: &ColorValue,
        fee_estimator: Option<&dyn FeeEstimator>,
    ) -> Result<CoinSelection, CompositionError> {
        let color_id = color_value.color_id();
        let required = |selected: usize| -> i128 {
            let fee = fee_estimator.map_or(0, |e| e.estimate_required_fee(selected, 0));
            color_value.value() as i128 + fee as i128
        };

        let mut spent = self.spent.lock();
        let mut coins = Vec::new();
        let mut total: i128 = 0;
        for coin in &self.coins {
            if total >= required(coins.len()) && !coins.is_empty() {
                break;
            }
            if coin.color_value.color_id() != color_id || spent.contains(&coin.outpoint) {
                continue;
            }
            total += coin.color_value.value() as i128;
            coins.push(coin.clone());
        }

        let needed = required(coins.len());
        if coins.is_empty() || total < needed {
            return Err(CompositionError::InsufficientFunds {
                color_id,
                needed: i64::try_from(needed).unwrap_or(i64::MAX),
                available: i64::try_from(total).unwrap_or(i64::MAX),
            });
        }

        spent.extend(coins.iter().map(|coin| coin.outpoint));
        debug!(
            "[cc-03] Selected {} coins worth {} of color {}",
            coins.len(),
            total,
            color_id
        );
        let total = color_value.with_value(i64::try_from(total).unwrap_or(i64::MAX));
        Ok(CoinSelection { coins, total })
    }

    fn change_script(&self, definition: &ColorDefinition) -> Result<Vec<u8>, CompositionError> {
        Ok(self
            .change_scripts
            .get(&definition.color_id())
            .unwrap_or(&self.default_change_script)
            .clone())
    }

    fn dust_threshold(&self) -> u64 {
        self.config.dust_threshold
    }

    fn fee_policy(&self) -> FeePolicy {
        self.config.fee_policy()
    }
}
