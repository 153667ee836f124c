//! This module defines sampling helpers for uniform and centered vectors.

use rand::{distributions::Uniform, Rng};

use crate::reduce::{LweNoise, LweValue, Modulus};

/// Samples a vector of `length` values drawn uniformly from `[0, q)`.
pub fn sample_uniform_vec<R>(length: usize, modulus: Modulus, rng: &mut R) -> Vec<LweValue>
where
    R: Rng,
{
    let distr = Uniform::new(0, modulus.value());
    (&mut *rng).sample_iter(distr).take(length).collect()
}

/// Samples a vector of `length` values drawn uniformly
/// from `[-bound, bound]` inclusive.
pub fn sample_centered_vec<R>(length: usize, bound: LweNoise, rng: &mut R) -> Vec<LweNoise>
where
    R: Rng,
{
    debug_assert!(bound >= 0);
    let distr = Uniform::new_inclusive(-bound, bound);
    (&mut *rng).sample_iter(distr).take(length).collect()
}
