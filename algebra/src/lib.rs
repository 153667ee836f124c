#![deny(missing_docs)]

//! Modular arithmetic and sampling utilities for lattice key exchange.

pub mod random;
pub mod reduce;

pub use reduce::{LweNoise, LweValue, Modulus};
