//! src/error.rs
//! Error types for the algebra.
//!
//! Numeric exceptional values (NaN, ±∞, signed zero) are not errors and flow
//! through every operator unchanged. The only checked failure is comparing a
//! [`Scalar`](crate::scalar::Scalar) against a value of another type.

use thiserror::Error;

/// Errors raised by the algebra.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// A value of the wrong type was supplied where a `Scalar` was required.
    #[error("Invalid argument: expected {expected}, found {found}")]
    InvalidArgument {
        /// Type that the operation accepts.
        expected: &'static str,
        /// Type that was actually supplied.
        found: &'static str,
    },
}

/// Result type for fallible algebra operations.
pub type Result<T> = std::result::Result<T, GeometryError>;

impl GeometryError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(expected: &'static str, found: &'static str) -> Self {
        Self::InvalidArgument { expected, found }
    }
}
