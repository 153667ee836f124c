use algebra::random::sample_uniform_vec;
use algebra::reduce::{LweValue, Modulus, Reduce, ReduceDotProduct};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{ErrorVector, PublicValue, SecretVector};

/// The shared public matrix `A` of an LWE key exchange.
///
/// An `n × n` matrix stored row-major with entries in `[0, q)`.
/// It is a common public parameter, shared by value between both
/// parties, not a secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicMatrix {
    data: Vec<LweValue>,
    dimension: usize,
}

impl PublicMatrix {
    /// Creates a new [`PublicMatrix`] from row-major `data`.
    #[inline]
    pub fn new(data: Vec<LweValue>, dimension: usize) -> Self {
        debug_assert_eq!(data.len(), dimension * dimension);
        Self { data, dimension }
    }

    /// Generates a [`PublicMatrix`] with `dimension × dimension` entries
    /// drawn uniformly from `[0, q)`.
    #[inline]
    pub fn random<R: Rng>(dimension: usize, modulus: Modulus, rng: &mut R) -> Self {
        Self {
            data: sample_uniform_vec(dimension * dimension, modulus, rng),
            dimension,
        }
    }

    /// Returns the dimension of this [`PublicMatrix`].
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the `i`-th row of this [`PublicMatrix`].
    #[inline]
    pub fn row(&self, i: usize) -> &[LweValue] {
        &self.data[i * self.dimension..(i + 1) * self.dimension]
    }

    /// Computes the public value `b = A·s + e (mod q)` row by row.
    ///
    /// The error term is signed, so each row sum is reduced with
    /// normalizing semantics and every entry of the result lies in
    /// `[0, q)`.
    pub fn noisy_product(
        &self,
        secret: &SecretVector,
        error: &ErrorVector,
        modulus: Modulus,
    ) -> PublicValue {
        debug_assert_eq!(self.dimension, secret.dimension());
        debug_assert_eq!(self.dimension, error.dimension());

        let data = self
            .data
            .chunks_exact(self.dimension)
            .zip(error.as_slice())
            .map(|(row, &e)| {
                let dot = modulus.reduce_dot_product(row, secret.as_slice());
                modulus.reduce(i128::from(dot) + i128::from(e))
            })
            .collect();
        PublicValue::new(data)
    }
}
