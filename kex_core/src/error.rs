use algebra::reduce::LweValue;

/// Errors that may occur.
#[derive(thiserror::Error, Debug)]
pub enum KexCoreError {
    /// Error that occurs when the given modulus is not valid.
    #[error("LWE modulus {0} is not valid!")]
    ModulusUnValid(
        /// The rejected modulus.
        LweValue,
    ),
    /// Error that occurs when the given dimension is not valid.
    #[error("LWE dimension {0} is not valid!")]
    DimensionUnValid(
        /// The rejected dimension.
        usize,
    ),
    /// Error that occurs when the given noise bound
    /// is not compatible with the modulus.
    #[error("Noise bound {noise_bound} is not compatible with modulus {modulus}!")]
    NoiseBoundModulusNotCompatible {
        /// Noise bound
        noise_bound: LweValue,
        /// Modulus
        modulus: LweValue,
    },
}
