//! Derivation throughput across the lengths the CLI offers and a long tail

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use seedpass_password::{SeedList, derive_password};

fn benchmark_derive(c: &mut Criterion) {
    let seeds = SeedList::new(["correct", "horse", "battery", "staple"])
        .expect("benchmark seeds are valid");
    let mut group = c.benchmark_group("derive_password");

    for length in [8usize, 12, 16, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &length| {
            b.iter(|| {
                let password =
                    derive_password(&seeds, length).expect("benchmark length is valid");
                std::hint::black_box(password);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_derive);
criterion_main!(benches);
