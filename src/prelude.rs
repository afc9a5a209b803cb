// src/prelude.rs
//! The "everything" import for the algebra.
//!
//! Brings the value types, the [`Wedge`](crate::grassmann::Wedge) trait and
//! the frame marker in with one glob:
//! ```rust
//! use r3_grassmann::prelude::*;
//! ```

// core data types
pub use crate::grassmann::{Bivector, Trivector, Vector};
pub use crate::r3_element::R3Element;
pub use crate::scalar::Scalar;

// products and extension points
pub use crate::error::GeometryError;
pub use crate::frame::ReferenceFrame;
pub use crate::grassmann::Wedge;
