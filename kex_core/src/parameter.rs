use algebra::reduce::{LweValue, Modulus};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::KexCoreError;

/// Parameters for the LWE key exchange.
///
/// Immutable once constructed; shared by both simulated parties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameters {
    /// LWE vector dimension, refers to **`n`**.
    dimension: usize,
    /// LWE modulus, refers to **`q`**.
    modulus: Modulus,
    /// Bound of the uniform noise, errors are drawn
    /// from `[-noise_bound, noise_bound]` inclusive.
    noise_bound: LweValue,
}

/// The default parameter set (`q = 1024`, `n = 64`, `noise_bound = 8`).
pub static DEFAULT_PARAMETERS: Lazy<Parameters> =
    Lazy::new(|| Parameters::new(1024, 64, 8).unwrap());

impl Parameters {
    /// Creates a new [`Parameters`] instance.
    ///
    /// The checks here are defensive: the reference inputs
    /// (`q = 1024`, `n = 64`, `noise_bound = 8`) always pass them.
    pub fn new(
        modulus: LweValue,
        dimension: usize,
        noise_bound: LweValue,
    ) -> Result<Self, KexCoreError> {
        // q > 1
        if modulus <= 1 {
            return Err(KexCoreError::ModulusUnValid(modulus));
        }

        // n > 0
        if dimension == 0 {
            return Err(KexCoreError::DimensionUnValid(dimension));
        }

        // the noise range [-noise_bound, noise_bound] must not cover [0, q)
        if u128::from(noise_bound) * 2 >= u128::from(modulus) {
            return Err(KexCoreError::NoiseBoundModulusNotCompatible {
                noise_bound,
                modulus,
            });
        }

        Ok(Self {
            dimension,
            modulus: Modulus::new(modulus),
            noise_bound,
        })
    }

    /// Returns the dimension of this [`Parameters`], refers to **`n`**.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the modulus of this [`Parameters`], refers to **`q`**.
    #[inline]
    pub fn modulus(&self) -> Modulus {
        self.modulus
    }

    /// Returns the modulus value of this [`Parameters`].
    #[inline]
    pub fn modulus_value(&self) -> LweValue {
        self.modulus.value()
    }

    /// Returns the noise bound of this [`Parameters`].
    #[inline]
    pub fn noise_bound(&self) -> LweValue {
        self.noise_bound
    }

    /// Returns the agreed-key size in bytes, `n · 4`.
    ///
    /// A protocol constant describing the 4-byte-cell wire format,
    /// independent of the in-memory representation.
    #[inline]
    pub fn key_size_bytes(&self) -> usize {
        self.dimension * 4
    }

    /// Returns the transmitted public data size in bytes, `(n² + n) · 4`,
    /// covering the matrix `A` and one public value `b`.
    #[inline]
    pub fn public_data_bytes(&self) -> usize {
        (self.dimension * self.dimension + self.dimension) * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let params = *DEFAULT_PARAMETERS;
        assert_eq!(params.modulus_value(), 1024);
        assert_eq!(params.dimension(), 64);
        assert_eq!(params.noise_bound(), 8);
        assert_eq!(params.key_size_bytes(), 256);
        assert_eq!(params.public_data_bytes(), 16640);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            Parameters::new(1, 64, 8),
            Err(KexCoreError::ModulusUnValid(1))
        ));
        assert!(matches!(
            Parameters::new(1024, 0, 8),
            Err(KexCoreError::DimensionUnValid(0))
        ));
        assert!(matches!(
            Parameters::new(1024, 64, 512),
            Err(KexCoreError::NoiseBoundModulusNotCompatible { .. })
        ));
    }
}
