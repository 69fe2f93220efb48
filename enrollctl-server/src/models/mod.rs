//! Request-side models with validation at construction
//!
//! Invalid input returns ValidationError, not panic.

pub mod identifier;
pub mod validation;

pub use identifier::{Identifier, MAX_IDENTIFIER_LEN};
pub use validation::ValidationError;
