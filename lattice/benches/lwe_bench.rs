use algebra::reduce::{Modulus, ReduceDotProduct};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lattice::{ErrorVector, PublicMatrix, SecretVector};
use rand::prelude::*;

const N: usize = 64;
const Q: u64 = 1024;
const NOISE_BOUND: i64 = 8;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let modulus = Modulus::new(Q);

    let matrix = PublicMatrix::random(N, modulus, &mut rng);
    let secret = SecretVector::random(N, modulus, &mut rng);
    let error = ErrorVector::random(N, NOISE_BOUND, &mut rng);

    c.bench_function("public matrix generation", |b| {
        b.iter(|| PublicMatrix::random(black_box(N), modulus, &mut rng))
    });

    c.bench_function("noisy matrix vector product", |b| {
        b.iter(|| black_box(&matrix).noisy_product(black_box(&secret), black_box(&error), modulus))
    });

    let public = matrix.noisy_product(&secret, &error, modulus);

    c.bench_function("shared secret dot product", |b| {
        b.iter(|| {
            modulus.reduce_dot_product(black_box(secret.as_slice()), black_box(public.as_slice()))
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
