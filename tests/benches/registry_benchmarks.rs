//! # Registry Benchmarks
//!
//! | Subsystem | Measured |
//! |-----------|----------|
//! | dr-01 Signature Verification | digest construction, key verification |
//! | dr-02 Submission Ledger | batch commit, direct reads |
//! | dr-04 Extension Resolver | chain walks by length |

use criterion::{criterion_group, criterion_main};
use dr_tests::benchmarks::{dr_01_signature, dr_02_ledger, dr_04_resolver};

criterion_group!(
    signature_benches,
    dr_01_signature::bench_digest,
    dr_01_signature::bench_verify
);
criterion_group!(
    ledger_benches,
    dr_02_ledger::bench_batch_commit,
    dr_02_ledger::bench_direct_reads
);
criterion_group!(resolver_benches, dr_04_resolver::bench_chain_walk);

criterion_main!(signature_benches, ledger_benches, resolver_benches);
