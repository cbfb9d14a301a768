//! # Resolver Behaviour
//!
//! Ledger traffic and memoization of the color data resolver over longer
//! histories than the unit tests build.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cc_01_coloring::ColorDefinition;
    use cc_02_color_data::{
        ColorDataApi, ColorDataConfig, ColorDataService, ColorDataStore, InMemoryColorDataStore,
        InMemoryLedger,
    };
    use shared_types::{OutPoint, Transaction};

    use crate::fixtures::{color_of, genesis_tx, transfer_chain, transfer_tx};
    use crate::integration::init_test_logging;

    type Service = ColorDataService<InMemoryLedger, InMemoryColorDataStore>;

    fn service_over(
        txs: &[Transaction],
        store: Arc<InMemoryColorDataStore>,
    ) -> (Arc<InMemoryLedger>, Service) {
        init_test_logging();
        let ledger = Arc::new(InMemoryLedger::with_transactions(txs.iter().cloned()));
        let service = ColorDataService::new(ColorDataConfig::default(), Arc::clone(&ledger), store);
        (ledger, service)
    }

    fn chain_color(chain: &[Transaction]) -> Arc<ColorDefinition> {
        color_of(1, &chain[0]).unwrap()
    }

    #[tokio::test]
    async fn test_long_chain_fetches_each_transaction_once() {
        let chain = transfer_chain(200, 75_000);
        let def = chain_color(&chain);
        let store = Arc::new(InMemoryColorDataStore::new());
        let (ledger, service) = service_over(&chain, Arc::clone(&store));

        let tip = chain[chain.len() - 1].txid();
        let value = service.get_color_value(tip, 0, &def).await.unwrap();
        assert_eq!(value.map(|cv| cv.value()), Some(75_000));
        assert_eq!(ledger.fetch_count(), chain.len());
        assert_eq!(store.len(), chain.len());

        // Every intermediate output is now answered from the store.
        ledger.reset_fetch_count();
        for tx in &chain {
            let value = service.get_color_value(tx.txid(), 0, &def).await.unwrap();
            assert_eq!(value.map(|cv| cv.value()), Some(75_000));
        }
        assert_eq!(ledger.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_store_outlives_service() {
        let chain = transfer_chain(20, 10_000);
        let def = chain_color(&chain);
        let store = Arc::new(InMemoryColorDataStore::new());
        let tip = chain[chain.len() - 1].txid();

        {
            let (_, first) = service_over(&chain, Arc::clone(&store));
            first.get_color_value(tip, 0, &def).await.unwrap();
        }

        let (ledger, second) = service_over(&chain, Arc::clone(&store));
        let value = second.get_color_value(tip, 0, &def).await.unwrap();
        assert_eq!(value.map(|cv| cv.value()), Some(10_000));
        assert_eq!(ledger.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_removed_values_are_derived_again() {
        let chain = transfer_chain(5, 10_000);
        let def = chain_color(&chain);
        let store = Arc::new(InMemoryColorDataStore::new());
        let (_, service) = service_over(&chain, Arc::clone(&store));
        let middle = chain[3].txid();

        service.get_color_value(chain[5].txid(), 0, &def).await.unwrap();
        assert_eq!(service.remove_color_values(middle, &def).await.unwrap(), 1);
        assert_eq!(store.get(def.color_id(), middle, 0).unwrap(), None);

        let value = service.get_color_value(middle, 0, &def).await.unwrap();
        assert_eq!(value.map(|cv| cv.value()), Some(10_000));
        assert_eq!(store.len(), chain.len());
    }

    #[tokio::test]
    async fn test_merge_of_two_branches() {
        // genesis -> (a, b) -> merged
        let genesis = genesis_tx(0x01, &[600_000]);
        let split = transfer_tx(&[OutPoint::new(genesis.txid(), 0)], &[250_000, 350_000]);
        let left = transfer_tx(&[OutPoint::new(split.txid(), 0)], &[250_000]);
        let right = transfer_tx(&[OutPoint::new(split.txid(), 1)], &[350_000]);
        let merged = transfer_tx(
            &[OutPoint::new(left.txid(), 0), OutPoint::new(right.txid(), 0)],
            &[100_000, 500_000],
        );
        let txs = vec![genesis.clone(), split, left, right, merged.clone()];
        let def = color_of(1, &genesis).unwrap();
        let (ledger, service) = service_over(&txs, Arc::new(InMemoryColorDataStore::new()));

        let first = service.get_color_value(merged.txid(), 0, &def).await.unwrap();
        let second = service.get_color_value(merged.txid(), 1, &def).await.unwrap();
        assert_eq!(first.map(|cv| cv.value()), Some(100_000));
        assert_eq!(second.map(|cv| cv.value()), Some(500_000));
        assert_eq!(ledger.fetch_count(), txs.len());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_resolution_agrees() {
        let chain = transfer_chain(50, 42_000);
        let def = chain_color(&chain);
        let (_, service) = service_over(&chain, Arc::new(InMemoryColorDataStore::new()));
        let service = Arc::new(service);
        let tip = chain[chain.len() - 1].txid();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let service = Arc::clone(&service);
                let def = Arc::clone(&def);
                tokio::spawn(async move { service.get_color_value(tip, 0, &def).await })
            })
            .collect();

        for handle in handles {
            let value = handle.await.unwrap().unwrap();
            assert_eq!(value.map(|cv| cv.value()), Some(42_000));
        }
    }
}
