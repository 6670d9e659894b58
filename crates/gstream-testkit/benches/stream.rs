//! Stream generation throughput.
//!
//! One block costs about 16 SHA-256 ratchet steps plus selection and folding.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use gstream::core::{ratchet, Counter, State};
use gstream::pqc::{derive_seed, PqcAlgorithm};
use gstream::{Gqs1Stream, StreamGenerator, GOLDEN_RATIO_SEED};

fn reference() -> StreamGenerator {
    StreamGenerator::new(&GOLDEN_RATIO_SEED).unwrap()
}

fn bench_next_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream/next_block");
    group.throughput(Throughput::Bytes(16));

    let mut generator = reference();
    group.bench_function("selected", |b| b.iter(|| black_box(generator.next_block())));

    let mut gqs1 = Gqs1Stream::new(&GOLDEN_RATIO_SEED).unwrap();
    group.bench_function("gqs1", |b| b.iter(|| black_box(gqs1.next_vector())));

    group.finish();
}

fn bench_fill_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream/fill_bytes");
    group.throughput(Throughput::Bytes(4096));

    let mut generator = reference();
    group.bench_function("4KiB", |b| {
        b.iter(|| {
            let mut buf = [0u8; 4096];
            generator.fill_bytes(&mut buf);
            black_box(buf)
        });
    });

    group.finish();
}

fn bench_ratchet(c: &mut Criterion) {
    let mut group = c.benchmark_group("ratchet");
    group.throughput(Throughput::Elements(1));

    let state = State::from_bytes([0x42; 32]);
    let small = Counter::from_u64(17);
    let large = Counter::from_decimal("1180591620717411303424").unwrap();

    group.bench_function("small_counter", |b| {
        b.iter(|| black_box(ratchet(black_box(&state), black_box(&small))))
    });
    group.bench_function("large_counter", |b| {
        b.iter(|| black_box(ratchet(black_box(&state), black_box(&large))))
    });

    group.finish();
}

fn bench_derive_seed(c: &mut Criterion) {
    let mut group = c.benchmark_group("pqc/derive_seed");
    let block = reference().next_block();

    for alg in [PqcAlgorithm::Kyber768, PqcAlgorithm::SphincsPlus256f] {
        group.bench_function(alg.name(), |b| {
            b.iter(|| black_box(derive_seed(black_box(&block), alg, b"KEYGEN")))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_next_block,
    bench_fill_bytes,
    bench_ratchet,
    bench_derive_seed
);
criterion_main!(benches);
