//! # Color Lifecycle
//!
//! Mint a color with the composer, move it around, and check that the
//! resolver sees exactly what the composer intended.
//!
//! ## Flow Tested:
//!
//! 1. **cc-03 genesis**: plain coins fund a tagged genesis output
//! 2. **cc-01 registry**: the genesis outpoint becomes a color definition
//! 3. **cc-03 transfer**: colored coins move, padded when below dust
//! 4. **cc-02 resolver**: values are derived back through the kernel

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cc_01_coloring::{
        get_affecting_inputs_for_outputs, ColorDefinition, ColorDefinitionManager,
        ColorDefinitionRegistry, ColorValue, InMemoryColorMap, Tag,
    };
    use cc_02_color_data::{
        ColorDataApi, ColorDataConfig, ColorDataService, InMemoryColorDataStore, InMemoryLedger,
    };
    use cc_03_composition::{
        compose, Coin, ColorTarget, CompositionConfig, InMemoryOperationalTx,
    };
    use shared_types::{OutPoint, Transaction};

    use crate::fixtures::plain_tx;
    use crate::integration::init_test_logging;

    const ALICE: [u8; 1] = [0xa1];
    const BOB: [u8; 1] = [0xb0];
    const CAROL: [u8; 1] = [0xc4];
    const CHANGE: [u8; 1] = [0xcc];

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    type Service = ColorDataService<InMemoryLedger, InMemoryColorDataStore>;

    struct Harness {
        ledger: Arc<InMemoryLedger>,
        service: Service,
        registry: ColorDefinitionManager,
    }

    impl Harness {
        fn new() -> Self {
            init_test_logging();
            let ledger = Arc::new(InMemoryLedger::new());
            let service = ColorDataService::new(
                ColorDataConfig::for_testing(),
                Arc::clone(&ledger),
                Arc::new(InMemoryColorDataStore::new()),
            );
            let registry = ColorDefinitionManager::new(Arc::new(InMemoryColorMap::new()));
            Self {
                ledger,
                service,
                registry,
            }
        }

        /// Compose and "broadcast" a transaction.
        async fn submit(&self, targets: Vec<ColorTarget>, coins: Vec<Coin>) -> Transaction {
            let op = InMemoryOperationalTx::new(
                CompositionConfig::for_testing(),
                targets,
                coins,
                CHANGE.to_vec(),
            );
            let tx = compose(&op).await.unwrap().into_transaction();
            self.ledger.insert(tx.clone());
            tx
        }

        /// Mint `amount` of a new color funded by a fresh plain coin.
        async fn mint(&self, seed: u8, amount: i64) -> (Transaction, Arc<ColorDefinition>) {
            let funding = plain_tx(seed, &[amount as u64 + 100_000]);
            self.ledger.insert(funding.clone());

            let intent = ColorValue::new(self.registry.genesis_intent(), amount);
            let genesis = self
                .submit(
                    vec![ColorTarget::new(ALICE.to_vec(), intent)],
                    vec![plain_coin(&funding, 0)],
                )
                .await;

            let desc = format!("epobc:{}:0:0", genesis.txid());
            let def = self.registry.resolve(&desc, true).unwrap().unwrap();
            (genesis, def)
        }

        async fn value_of(&self, tx: &Transaction, vout: u32, def: &Arc<ColorDefinition>) -> Option<i64> {
            self.service
                .get_color_value(tx.txid(), vout, def)
                .await
                .unwrap()
                .map(|cv| cv.value())
        }
    }

    fn plain_coin(tx: &Transaction, vout: u32) -> Coin {
        Coin::uncolored(OutPoint::new(tx.txid(), vout), tx.outputs[vout as usize].value)
    }

    fn colored_coin(tx: &Transaction, vout: u32, value: i64, def: &Arc<ColorDefinition>) -> Coin {
        Coin::colored(
            OutPoint::new(tx.txid(), vout),
            tx.outputs[vout as usize].value,
            ColorValue::new(Arc::clone(def), value),
        )
    }

    fn target(script: &[u8], def: &Arc<ColorDefinition>, value: i64) -> ColorTarget {
        ColorTarget::new(script.to_vec(), ColorValue::new(Arc::clone(def), value))
    }

    // =============================================================================
    // INTEGRATION TESTS: GENESIS AND TRANSFER
    // =============================================================================

    /// Mint 500000 units, then move them all in one transfer.
    #[tokio::test]
    async fn test_genesis_then_full_transfer() {
        let h = Harness::new();
        let (genesis, def) = h.mint(0x10, 500_000).await;
        assert_eq!(def.color_id(), 1);
        assert_eq!(Tag::from_tx(&genesis), Some(Tag::genesis(0).unwrap()));
        assert_eq!(h.value_of(&genesis, 0, &def).await, Some(500_000));
        // Plain change of the genesis is not colored.
        assert_eq!(h.value_of(&genesis, 1, &def).await, None);

        let transfer = h
            .submit(
                vec![target(&BOB, &def, 500_000)],
                vec![colored_coin(&genesis, 0, 500_000, &def)],
            )
            .await;

        assert_eq!(
            get_affecting_inputs_for_outputs(&transfer, &[0], h.ledger.as_ref())
                .await
                .unwrap(),
            Some(vec![0])
        );
        assert_eq!(h.value_of(&transfer, 0, &def).await, Some(500_000));
        assert_eq!(transfer.outputs[0].script_pubkey, BOB.to_vec());
    }

    /// Split, then send a sub-dust amount that forces padding.
    #[tokio::test]
    async fn test_split_then_padded_transfer() {
        let h = Harness::new();
        let (genesis, def) = h.mint(0x11, 500_000).await;

        let split = h
            .submit(
                vec![target(&BOB, &def, 300_000), target(&CAROL, &def, 200_000)],
                vec![colored_coin(&genesis, 0, 500_000, &def)],
            )
            .await;
        assert_eq!(h.value_of(&split, 0, &def).await, Some(300_000));
        assert_eq!(h.value_of(&split, 1, &def).await, Some(200_000));

        let funding = plain_tx(0x12, &[50_000]);
        h.ledger.insert(funding.clone());
        let padded = h
            .submit(
                vec![target(&ALICE, &def, 1_000)],
                vec![
                    colored_coin(&split, 1, 200_000, &def),
                    plain_coin(&funding, 0),
                ],
            )
            .await;

        // 5500 - 1000 needs 2^13 of padding on every colored output.
        assert_eq!(Tag::from_tx(&padded), Some(Tag::xfer(13).unwrap()));
        let values: Vec<u64> = padded.outputs.iter().map(|o| o.value).collect();
        assert_eq!(values, vec![1_000 + 8_192, 199_000 + 8_192, 50_000 - 16_384]);

        assert_eq!(h.value_of(&padded, 0, &def).await, Some(1_000));
        assert_eq!(h.value_of(&padded, 1, &def).await, Some(199_000));
        assert_eq!(h.value_of(&padded, 2, &def).await, None);

        // Padded outputs carry their color onward with the padding removed.
        let onward = h
            .submit(
                vec![target(&CAROL, &def, 1_000)],
                vec![colored_coin(&padded, 0, 1_000, &def), plain_coin(&padded, 2)],
            )
            .await;
        assert_eq!(h.value_of(&onward, 0, &def).await, Some(1_000));
    }

    /// Two colors in one transaction are each conserved.
    #[tokio::test]
    async fn test_two_colors_conserved_before_broadcast() {
        let h = Harness::new();
        let (gen_a, def_a) = h.mint(0x20, 500_000).await;
        let (gen_b, def_b) = h.mint(0x21, 300_000).await;
        assert_ne!(def_a.color_id(), def_b.color_id());

        let op = InMemoryOperationalTx::new(
            CompositionConfig::for_testing(),
            vec![target(&BOB, &def_a, 200_000), target(&CAROL, &def_b, 300_000)],
            vec![
                colored_coin(&gen_a, 0, 500_000, &def_a),
                colored_coin(&gen_b, 0, 300_000, &def_b),
            ],
            CHANGE.to_vec(),
        );
        let tx = compose(&op).await.unwrap().into_transaction();

        // Not in the ledger yet: values come from the ancestors alone.
        let of_a: Vec<Option<i64>> = h
            .service
            .get_tx_color_values(&tx, &[0, 1, 2], &def_a)
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.map(|cv| cv.value()))
            .collect();
        assert_eq!(of_a, vec![Some(200_000), Some(300_000), None]);

        let of_b: Vec<Option<i64>> = h
            .service
            .get_tx_color_values(&tx, &[0, 1, 2], &def_b)
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.map(|cv| cv.value()))
            .collect();
        assert_eq!(of_b, vec![None, None, Some(300_000)]);

        let total_a: i64 = of_a.iter().flatten().sum();
        let total_b: i64 = of_b.iter().flatten().sum();
        assert_eq!(total_a, 500_000);
        assert_eq!(total_b, 300_000);
    }

    /// A transfer that spends colored value as plain value destroys it.
    #[tokio::test]
    async fn test_untagged_spend_loses_color() {
        let h = Harness::new();
        let (genesis, def) = h.mint(0x30, 500_000).await;

        let burn = Transaction::new(
            vec![shared_types::TxIn::new(OutPoint::new(genesis.txid(), 0))],
            vec![shared_types::TxOut::new(500_000, BOB.to_vec())],
        );
        h.ledger.insert(burn.clone());

        assert_eq!(h.value_of(&burn, 0, &def).await, None);
        assert_eq!(
            get_affecting_inputs_for_outputs(&burn, &[0], h.ledger.as_ref())
                .await
                .unwrap(),
            None
        );
    }
}
