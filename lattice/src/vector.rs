use algebra::random::{sample_centered_vec, sample_uniform_vec};
use algebra::reduce::{LweNoise, LweValue, Modulus};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A party's private LWE secret vector.
///
/// Entries are drawn uniformly from `[0, q)`. The vector is owned
/// exclusively by the generating party and is never transmitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretVector {
    data: Vec<LweValue>,
}

impl SecretVector {
    /// Creates a new [`SecretVector`].
    #[inline]
    pub fn new(data: Vec<LweValue>) -> Self {
        Self { data }
    }

    /// Generates a [`SecretVector`] with `dimension` entries
    /// drawn uniformly from `[0, q)`.
    #[inline]
    pub fn random<R: Rng>(dimension: usize, modulus: Modulus, rng: &mut R) -> Self {
        Self {
            data: sample_uniform_vec(dimension, modulus, rng),
        }
    }

    /// Returns a slice reference to the entries of this [`SecretVector`].
    #[inline]
    pub fn as_slice(&self) -> &[LweValue] {
        self.data.as_slice()
    }

    /// Returns the dimension of this [`SecretVector`].
    #[inline]
    pub fn dimension(&self) -> usize {
        self.data.len()
    }
}

/// A party's private noise vector.
///
/// Entries are drawn uniformly from `[-noise_bound, noise_bound]`
/// inclusive. Like the secret vector, it is never transmitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorVector {
    data: Vec<LweNoise>,
}

impl ErrorVector {
    /// Creates a new [`ErrorVector`].
    #[inline]
    pub fn new(data: Vec<LweNoise>) -> Self {
        Self { data }
    }

    /// Generates an [`ErrorVector`] with `dimension` entries
    /// drawn uniformly from `[-bound, bound]` inclusive.
    #[inline]
    pub fn random<R: Rng>(dimension: usize, bound: LweNoise, rng: &mut R) -> Self {
        Self {
            data: sample_centered_vec(dimension, bound, rng),
        }
    }

    /// Returns a slice reference to the entries of this [`ErrorVector`].
    #[inline]
    pub fn as_slice(&self) -> &[LweNoise] {
        self.data.as_slice()
    }

    /// Returns the dimension of this [`ErrorVector`].
    #[inline]
    pub fn dimension(&self) -> usize {
        self.data.len()
    }
}

/// A party's public value `b = A·s + e (mod q)`.
///
/// This is the value each party publishes so the counterpart can
/// derive a correlated shared secret. Entries always lie in `[0, q)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicValue {
    data: Vec<LweValue>,
}

impl PublicValue {
    /// Creates a new [`PublicValue`].
    #[inline]
    pub fn new(data: Vec<LweValue>) -> Self {
        Self { data }
    }

    /// Returns a slice reference to the entries of this [`PublicValue`].
    #[inline]
    pub fn as_slice(&self) -> &[LweValue] {
        self.data.as_slice()
    }

    /// Returns the dimension of this [`PublicValue`].
    #[inline]
    pub fn dimension(&self) -> usize {
        self.data.len()
    }
}
