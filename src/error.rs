//! Error types for polyr

use thiserror::Error;

/// Result type alias using polyr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in polyr operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Coefficient lookup beyond the stored degree
    #[error("Coefficient index {index} out of bounds for polynomial of degree {degree}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Degree of the polynomial
        degree: usize,
    },
}
