//! This module defines the modulus type and its reduction operations.

use serde::{Deserialize, Serialize};

/// Unsigned value type for vector, matrix and key entries.
pub type LweValue = u64;

/// Signed value type for noise entries.
pub type LweNoise = i64;

/// A struct for a general modulus, performing reduction into `[0, q)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Modulus {
    value: LweValue,
}

impl Modulus {
    /// Creates a new [`Modulus`].
    ///
    /// # Panics
    ///
    /// Panics if `value` is not greater than 1.
    #[inline]
    pub fn new(value: LweValue) -> Self {
        assert!(value > 1, "modulus must be greater than 1");
        Self { value }
    }

    /// Returns the value of this [`Modulus`].
    #[inline]
    pub fn value(&self) -> LweValue {
        self.value
    }
}

/// The modular reduction operation.
///
/// All implementations return a canonical representative in `[0, q)`,
/// including for negative inputs.
pub trait Reduce<T> {
    /// Output type.
    type Output;

    /// Calculates `value mod q`.
    fn reduce(self, value: T) -> Self::Output;
}

impl Reduce<LweValue> for Modulus {
    type Output = LweValue;

    #[inline]
    fn reduce(self, value: LweValue) -> Self::Output {
        value % self.value
    }
}

impl Reduce<LweNoise> for Modulus {
    type Output = LweValue;

    #[inline]
    fn reduce(self, value: LweNoise) -> Self::Output {
        self.reduce(i128::from(value))
    }
}

impl Reduce<u128> for Modulus {
    type Output = LweValue;

    #[inline]
    fn reduce(self, value: u128) -> Self::Output {
        (value % u128::from(self.value)) as LweValue
    }
}

impl Reduce<i128> for Modulus {
    type Output = LweValue;

    #[inline]
    fn reduce(self, value: i128) -> Self::Output {
        value.rem_euclid(i128::from(self.value)) as LweValue
    }
}

/// The modular dot product operation.
pub trait ReduceDotProduct<T> {
    /// Output type.
    type Output;

    /// Calculates `lhs · rhs mod q`.
    fn reduce_dot_product(self, lhs: T, rhs: T) -> Self::Output;
}

impl ReduceDotProduct<&[LweValue]> for Modulus {
    type Output = LweValue;

    fn reduce_dot_product(self, lhs: &[LweValue], rhs: &[LweValue]) -> Self::Output {
        debug_assert_eq!(lhs.len(), rhs.len());
        let modulus = u128::from(self.value);
        let acc = lhs
            .iter()
            .zip(rhs)
            .fold(0u128, |acc, (&x, &y)| {
                (acc + u128::from(x) * u128::from(y) % modulus) % modulus
            });
        acc as LweValue
    }
}
