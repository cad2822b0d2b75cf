//! # DR-01 Signature Verification Benchmarks
//!
//! - Digest construction for a typical CID
//! - Key recovery and comparison
//! - Rejection of malformed input (must stay cheap)

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use dr_01_signature_verification::test_helpers::{generate_account, sign_bytes};

use crate::fixtures::{registry, word};
use shared_types::Cid;

pub fn bench_digest(c: &mut Criterion) {
    let mut group = c.benchmark_group("dr-01/digest");
    let registry = registry();

    for size in [4usize, 36, 256] {
        let cid = Cid::from(vec![0xab; size]);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("submit_request", size), &cid, |b, cid| {
            b.iter(|| black_box(registry.submit_request_digest(&word(1), &word(2), cid)))
        });
    }
    group.finish();
}

pub fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("dr-01/verify");
    let registry = registry();
    let (key, submitter) = generate_account();
    let cid = Cid::from(vec![0x12, 0x34]);
    let digest = registry.submit_request_digest(&word(1), &word(2), &cid);
    let signature = sign_bytes(&digest, &key);

    group.bench_function("valid_key_signature", |b| {
        b.iter(|| {
            black_box(registry.verify_signature(&submitter, &word(1), &word(2), &cid, &signature))
        })
    });

    let garbage = vec![0xff; 65];
    group.bench_function("malformed_signature", |b| {
        b.iter(|| {
            black_box(registry.verify_signature(&submitter, &word(1), &word(2), &cid, &garbage))
        })
    });
    group.finish();
}
