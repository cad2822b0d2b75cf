//! # DR-04 Extension Resolver Benchmarks
//!
//! Resolution cost along linear chains of growing length, hit at the far end.

use criterion::{black_box, BenchmarkId, Criterion};
use registry_runtime::RegistryConfig;
use shared_types::Address;
use tokio::runtime::Runtime;

use crate::fixtures::{registry_with, word, VERIFYING_CONTRACT};

fn chain_addr(n: u16) -> Address {
    let mut address = [0u8; 20];
    address[18..].copy_from_slice(&n.to_be_bytes());
    address
}

pub fn bench_chain_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("dr-04/chain_walk");
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => panic!("tokio runtime: {e}"),
    };

    for length in [1u16, 8, 32] {
        let mut config = RegistryConfig::with_verifying_contract(VERIFYING_CONTRACT);
        config.resolver.max_depth = 64;
        let registry = registry_with(config);

        rt.block_on(async {
            for n in 0..length {
                let _ = registry.extend(chain_addr(n), chain_addr(n + 1)).await;
            }
            let _ = registry
                .submit(chain_addr(length), word(1), word(2), vec![0x01])
                .await;
        });

        group.bench_with_input(BenchmarkId::new("get_all", length), &length, |b, _| {
            b.iter(|| black_box(registry.get_all(&chain_addr(0), &word(1))))
        });
        group.bench_with_input(BenchmarkId::new("get", length), &length, |b, _| {
            b.iter(|| black_box(registry.get(&chain_addr(0), &word(1), &word(2))))
        });
    }
    group.finish();
}
