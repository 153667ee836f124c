use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kex_core::{KeyExchange, DEFAULT_PARAMETERS};

pub fn criterion_benchmark(c: &mut Criterion) {
    let kex = KeyExchange::new(*DEFAULT_PARAMETERS);

    c.bench_function("full exchange", |b| {
        b.iter(|| black_box(&kex).full_exchange())
    });

    let matrix = kex.generate_public_matrix();
    let secret = kex.generate_secret_key();
    let error = kex.generate_error();

    c.bench_function("compute public value", |b| {
        b.iter(|| {
            black_box(&kex).compute_public_value(
                black_box(&matrix),
                black_box(&secret),
                black_box(&error),
            )
        })
    });

    let public = kex.compute_public_value(&matrix, &secret, &error);

    c.bench_function("compute shared secret", |b| {
        b.iter(|| black_box(&kex).compute_shared_secret(black_box(&secret), black_box(&public)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
