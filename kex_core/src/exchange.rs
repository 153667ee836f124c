use std::cell::RefCell;

use algebra::reduce::{LweNoise, LweValue, ReduceDotProduct};
use lattice::{ErrorVector, PublicMatrix, PublicValue, SecretVector};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

use crate::Parameters;

/// One instance of the two-party LWE key exchange.
///
/// Owns the parameters and a seedable random source. Every call to
/// [`full_exchange`](KeyExchange::full_exchange) is an independent
/// linear pipeline; no state is carried across calls. Concurrent
/// callers construct one instance each, so the random source needs
/// no locking.
pub struct KeyExchange {
    parameters: Parameters,
    csrng: RefCell<ChaCha12Rng>,
}

impl KeyExchange {
    /// Creates a new [`KeyExchange`] with an entropy-seeded random source.
    #[inline]
    pub fn new(parameters: Parameters) -> Self {
        Self {
            parameters,
            csrng: RefCell::new(ChaCha12Rng::from_entropy()),
        }
    }

    /// Creates a new [`KeyExchange`] with a deterministic random source.
    ///
    /// Two instances built from the same parameters and seed produce
    /// identical exchange sequences.
    #[inline]
    pub fn with_seed(parameters: Parameters, seed: u64) -> Self {
        Self {
            parameters,
            csrng: RefCell::new(ChaCha12Rng::seed_from_u64(seed)),
        }
    }

    /// Returns the parameters of this [`KeyExchange`].
    #[inline]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Generates a party's secret vector, uniform in `[0, q)`.
    #[inline]
    pub fn generate_secret_key(&self) -> SecretVector {
        SecretVector::random(
            self.parameters.dimension(),
            self.parameters.modulus(),
            &mut *self.csrng.borrow_mut(),
        )
    }

    /// Generates a party's error vector, uniform in
    /// `[-noise_bound, noise_bound]` inclusive.
    #[inline]
    pub fn generate_error(&self) -> ErrorVector {
        ErrorVector::random(
            self.parameters.dimension(),
            self.parameters.noise_bound() as LweNoise,
            &mut *self.csrng.borrow_mut(),
        )
    }

    /// Generates the shared public matrix `A`, uniform in `[0, q)`.
    #[inline]
    pub fn generate_public_matrix(&self) -> PublicMatrix {
        PublicMatrix::random(
            self.parameters.dimension(),
            self.parameters.modulus(),
            &mut *self.csrng.borrow_mut(),
        )
    }

    /// Computes a party's public value `b = A·s + e (mod q)`.
    #[inline]
    pub fn compute_public_value(
        &self,
        matrix: &PublicMatrix,
        secret: &SecretVector,
        error: &ErrorVector,
    ) -> PublicValue {
        matrix.noisy_product(secret, error, self.parameters.modulus())
    }

    /// Computes a party's raw shared secret `s · b (mod q)` from the
    /// counterpart's public value.
    #[inline]
    pub fn compute_shared_secret(
        &self,
        secret: &SecretVector,
        public_value: &PublicValue,
    ) -> LweValue {
        self.parameters
            .modulus()
            .reduce_dot_product(secret.as_slice(), public_value.as_slice())
    }

    /// Reconciles the two parties' raw shared secrets into one agreed key.
    ///
    /// Let `diff = |secret1 - secret2|` and `threshold = q / 2` (integer
    /// division). Reconciliation succeeds iff `diff < threshold` or
    /// `diff > q - threshold`, and the key is `(secret1 + secret2) / 2
    /// mod q` with integer division. The second branch catches raw
    /// secrets that are close modulo `q` but on opposite ends of
    /// `[0, q)`.
    ///
    /// A mismatch is a normal, countable outcome, signaled as
    /// `(None, false)`, not an error.
    pub fn reconcile(
        &self,
        secret1: LweValue,
        secret2: LweValue,
    ) -> (Option<LweValue>, bool) {
        let q = self.parameters.modulus_value();
        let threshold = q / 2;
        let diff = secret1.abs_diff(secret2);

        if diff < threshold || diff > q - threshold {
            let sum = u128::from(secret1) + u128::from(secret2);
            (Some((sum / 2 % u128::from(q)) as LweValue), true)
        } else {
            (None, false)
        }
    }

    /// Runs one complete two-party exchange.
    ///
    /// Generates the shared matrix, each party's secret and error,
    /// both public values and both raw shared secrets, then
    /// reconciles. Returns the reconciliation outcome directly; no
    /// retry is performed.
    pub fn full_exchange(&self) -> (bool, Option<LweValue>) {
        let matrix = self.generate_public_matrix();

        // party A
        let secret_a = self.generate_secret_key();
        let error_a = self.generate_error();
        let public_a = self.compute_public_value(&matrix, &secret_a, &error_a);

        // party B
        let secret_b = self.generate_secret_key();
        let error_b = self.generate_error();
        let public_b = self.compute_public_value(&matrix, &secret_b, &error_b);

        // each party uses the counterpart's public value
        let shared_a = self.compute_shared_secret(&secret_a, &public_b);
        let shared_b = self.compute_shared_secret(&secret_b, &public_a);

        let (key, success) = self.reconcile(shared_a, shared_b);
        (success, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exchange_q1024() -> KeyExchange {
        KeyExchange::new(*crate::DEFAULT_PARAMETERS)
    }

    #[test]
    fn test_reconcile_close_secrets() {
        let kex = exchange_q1024();
        assert_eq!(kex.reconcile(100, 100), (Some(100), true));
        assert_eq!(kex.reconcile(200, 700), (Some(450), true));
    }

    #[test]
    fn test_reconcile_wrap_around() {
        let kex = exchange_q1024();
        // diff = 1023 > q - threshold = 512
        assert_eq!(kex.reconcile(0, 1023), (Some(511), true));
        // diff = 600 > 512, succeeds through the wrap-around branch
        assert_eq!(kex.reconcile(100, 700), (Some(400), true));
    }

    #[test]
    fn test_reconcile_exact_failure_point() {
        let kex = exchange_q1024();
        // with q = 1024 the failure window is the single point diff == 512
        assert_eq!(kex.reconcile(0, 512), (None, false));
        assert_eq!(kex.reconcile(100, 612), (None, false));
        assert_eq!(kex.reconcile(0, 511), (Some(255), true));
        assert_eq!(kex.reconcile(0, 513), (Some(256), true));
    }

    #[test]
    fn test_reconcile_odd_modulus_window() {
        let params = Parameters::new(1023, 8, 4).unwrap();
        let kex = KeyExchange::new(params);
        // threshold = 511, failure window is diff in [511, 512]
        assert_eq!(kex.reconcile(0, 511), (None, false));
        assert_eq!(kex.reconcile(0, 512), (None, false));
        assert_eq!(kex.reconcile(0, 510), (Some(255), true));
        assert_eq!(kex.reconcile(0, 513), (Some(256), true));
    }

    #[test]
    fn test_reconcile_is_symmetric() {
        let kex = exchange_q1024();
        for &(x, y) in &[(100u64, 700u64), (0, 1023), (0, 512), (200, 700), (3, 3)] {
            assert_eq!(kex.reconcile(x, y), kex.reconcile(y, x));
        }
    }

    #[test]
    fn test_generated_values_in_range() {
        let kex = exchange_q1024();
        let q = kex.parameters().modulus_value();

        let secret = kex.generate_secret_key();
        assert!(secret.as_slice().iter().all(|&v| v < q));

        let error = kex.generate_error();
        assert!(error.as_slice().iter().all(|&v| (-8..=8).contains(&v)));

        let matrix = kex.generate_public_matrix();
        let public = kex.compute_public_value(&matrix, &secret, &error);
        assert!(public.as_slice().iter().all(|&v| v < q));

        let shared = kex.compute_shared_secret(&secret, &public);
        assert!(shared < q);
    }
}
