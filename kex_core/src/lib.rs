#![deny(missing_docs)]

//! Implementations of the LWE key-exchange core operations.

mod error;
mod exchange;
mod parameter;

pub use error::KexCoreError;
pub use exchange::KeyExchange;
pub use parameter::{Parameters, DEFAULT_PARAMETERS};
