#![deny(missing_docs)]

//! Defines the vector and matrix structures of the LWE key exchange.

mod matrix;
mod vector;

pub use matrix::PublicMatrix;
pub use vector::{ErrorVector, PublicValue, SecretVector};
