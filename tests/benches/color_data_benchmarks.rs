//! # Chroma Color Data Benchmarks
//!
//! | Benchmark | What is measured |
//! |-----------|------------------|
//! | resolve_chain | Cold resolution of a transfer chain tip |
//! | resolve_memoized | Repeat query answered from the store |
//! | affecting_inputs | Input mapping over a wide transaction |
//! | kernel | Kernel over a wide transaction |

use std::sync::Arc;
use std::time::Duration;

use cc_01_coloring::{collect_affecting_inputs, run_kernel, ColorValue, PreviousTransactions};
use cc_02_color_data::{
    ColorDataApi, ColorDataConfig, ColorDataService, InMemoryColorDataStore, InMemoryLedger,
};
use cc_tests::fixtures::{color_of, genesis_tx, transfer_chain, transfer_tx};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use shared_types::OutPoint;
use tokio::runtime::Runtime;

fn bench_resolve_chain(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("cc-02-resolve-chain");
    group.measurement_time(Duration::from_secs(10));

    for len in [10usize, 100, 500] {
        let chain = transfer_chain(len, 100_000);
        let def = color_of(1, &chain[0]).unwrap();
        let ledger = Arc::new(InMemoryLedger::with_transactions(chain.iter().cloned()));
        let tip = chain[len].txid();

        group.throughput(Throughput::Elements(len as u64 + 1));
        group.bench_with_input(BenchmarkId::new("resolve_chain", len), &len, |b, _| {
            b.iter_batched(
                || {
                    ColorDataService::new(
                        ColorDataConfig::default(),
                        Arc::clone(&ledger),
                        Arc::new(InMemoryColorDataStore::new()),
                    )
                },
                |service| {
                    rt.block_on(async {
                        black_box(service.get_color_value(tip, 0, &def).await.unwrap())
                    })
                },
                BatchSize::SmallInput,
            )
        });
    }

    let chain = transfer_chain(500, 100_000);
    let def = color_of(1, &chain[0]).unwrap();
    let tip = chain[500].txid();
    let service = ColorDataService::new(
        ColorDataConfig::default(),
        Arc::new(InMemoryLedger::with_transactions(chain.iter().cloned())),
        Arc::new(InMemoryColorDataStore::new()),
    );
    rt.block_on(service.get_color_value(tip, 0, &def)).unwrap();

    group.bench_function("resolve_memoized", |b| {
        b.iter(|| rt.block_on(async { black_box(service.get_color_value(tip, 0, &def).await.unwrap()) }))
    });

    group.finish();
}

fn bench_wide_transaction(c: &mut Criterion) {
    let mut group = c.benchmark_group("cc-01-wide-transaction");

    for width in [16usize, 256] {
        let genesis = genesis_tx(0x01, &vec![10_000; width]);
        let def = color_of(1, &genesis).unwrap();
        let spent: Vec<OutPoint> = (0..width as u32)
            .map(|vout| OutPoint::new(genesis.txid(), vout))
            .collect();
        // Outputs straddle input boundaries.
        let mut values = vec![15_000; width * 2 / 3];
        let rest = 10_000 * width as u64 - 15_000 * values.len() as u64;
        values.push(rest);
        let tx = transfer_tx(&spent, &values);

        let prev: PreviousTransactions = std::iter::once(genesis).collect();
        let out_indices: Vec<usize> = (0..values.len()).collect();
        let inputs: Vec<Option<ColorValue>> = (0..width)
            .map(|_| Some(ColorValue::new(Arc::clone(&def), 10_000)))
            .collect();

        group.throughput(Throughput::Elements(values.len() as u64));
        group.bench_with_input(BenchmarkId::new("affecting_inputs", width), &width, |b, _| {
            b.iter(|| black_box(collect_affecting_inputs(&tx, &out_indices, &prev).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("kernel", width), &width, |b, _| {
            b.iter(|| black_box(run_kernel(&def, &tx, &inputs, &prev).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve_chain, bench_wide_transaction);
criterion_main!(benches);
