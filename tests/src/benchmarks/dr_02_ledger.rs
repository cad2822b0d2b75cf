//! # DR-02 Submission Ledger Benchmarks
//!
//! Snapshot reads against a populated ledger, and batch commits of growing
//! size into a fresh one.

use criterion::{black_box, BatchSize, BenchmarkId, Criterion, Throughput};
use shared_types::SubmissionRequest;
use tokio::runtime::Runtime;

use crate::fixtures::{addr, registry, word};

fn requests(count: usize) -> Vec<SubmissionRequest> {
    (0..count)
        .map(|i| {
            let mut da = [0u8; 32];
            da[..8].copy_from_slice(&(i as u64).to_be_bytes());
            SubmissionRequest::new(word(1), da, vec![0x01, i as u8])
        })
        .collect()
}

pub fn bench_batch_commit(c: &mut Criterion) {
    let mut group = c.benchmark_group("dr-02/batch_commit");
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => panic!("tokio runtime: {e}"),
    };

    for size in [1usize, 16, 256] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || (registry(), requests(size)),
                |(registry, batch)| {
                    rt.block_on(async { black_box(registry.batch_submit(addr(1), batch).await) })
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

pub fn bench_direct_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("dr-02/direct_reads");
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => panic!("tokio runtime: {e}"),
    };
    let registry = registry();
    let populated = requests(1024);
    let probe = populated[512].da;
    let _ = rt.block_on(registry.batch_submit(addr(1), populated));

    group.bench_function("get_direct", |b| {
        b.iter(|| black_box(registry.get_direct(&addr(1), &word(1), &probe)))
    });
    group.bench_function("get_all_direct_1024", |b| {
        b.iter(|| black_box(registry.get_all_direct(&addr(1), &word(1))))
    });
    group.finish();
}
