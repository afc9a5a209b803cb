//! src/frame.rs
//! Extension point for frame-indexed quantities.

/// Marker for a reference frame.
///
/// The algebra in this crate is frame-less. A consuming layer implements
/// this trait on zero-sized tag types and parameterizes its own wrappers by
/// them, so that quantities expressed in different frames cannot be combined
/// without an explicit transformation. Nothing here checks frame agreement.
///
/// ```rust
/// use r3_grassmann::prelude::*;
/// use std::marker::PhantomData;
///
/// struct Barycentric;
/// impl ReferenceFrame for Barycentric {}
///
/// struct Displacement<F: ReferenceFrame> {
///     vector: Vector,
///     frame: PhantomData<F>,
/// }
///
/// let d = Displacement::<Barycentric> {
///     vector: Vector::new(R3Element::from([1.0, 2.0, 3.0])),
///     frame: PhantomData,
/// };
/// assert_eq!(d.vector.coordinates.y, Scalar::new(2.0));
/// ```
pub trait ReferenceFrame {}
