//! # r3_grassmann Quickstart
//!
//! ```rust
//! use r3_grassmann::prelude::*;
//!
//! let e1 = Vector::new(R3Element::from([1.0, 0.0, 0.0]));
//! let e2 = Vector::new(R3Element::from([0.0, 1.0, 0.0]));
//! let e3 = Vector::new(R3Element::from([0.0, 0.0, 1.0]));
//!
//! // e1 ∧ e2 is the oriented unit area in the xy-plane.
//! let area = e1.wedge(e2);
//! assert_eq!(area, Bivector::new(R3Element::from([0.0, 0.0, 1.0])));
//!
//! // e3 ∧ (e1 ∧ e2) is the unit volume.
//! let volume = e3.wedge(area);
//! assert_eq!(volume, Trivector::new(Scalar::new(1.0)));
//!
//! // The enclosing space of an inner product is always spelled out.
//! let two = Scalar::new(2.0);
//! assert_eq!(Vector::inner_product(two * e1, e1 + e2), two);
//! ```
//!
#![doc = include_str!("../README.md")]

// Core modules
pub mod error;
pub mod frame;
pub mod grassmann;
pub mod prelude;
pub mod r3_element;
pub mod scalar;

// --- Public API exports ---

pub use error::{GeometryError, Result};
pub use frame::ReferenceFrame;
pub use grassmann::{Bivector, Trivector, Vector, Wedge};
pub use r3_element::R3Element;
pub use scalar::Scalar;
