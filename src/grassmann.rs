//! src/grassmann.rs
//! Graded elements of the exterior algebra over ℝ³.
//!
//! For k-vectors `v`, `w` the inner product is `Vector::inner_product(v, w)`
//! rather than a method on `v`, so the enclosing space is always named. The
//! wedge product has no enclosing space and is a method through [`Wedge`].
//! Vector-space operations use the operators: `v + w`, `s * v`, `v / s`.
//!
//! Bivectors are stored as their Hodge duals: `e₂₃, e₃₁, e₁₂` map to the
//! `x, y, z` slots of an [`R3Element`]. Vector ∧ vector is then the cross
//! product and vector ∧ bivector is the dot product. This identification
//! holds in exactly three dimensions.

use crate::{r3_element::R3Element, scalar::Scalar};
use approx::{AbsDiffEq, RelativeEq};
use num_traits::Zero;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Grade-additive, antisymmetric, bilinear product.
///
/// Implemented only for pairs whose grades sum to at most 3. Anything else
/// does not compile:
///
/// ```compile_fail
/// use r3_grassmann::prelude::*;
///
/// let b = Bivector::new(R3Element::from([0.0, 0.0, 1.0]));
/// let _ = b.wedge(b); // grade 4
/// ```
///
/// ```compile_fail
/// use r3_grassmann::prelude::*;
///
/// let v = Vector::new(R3Element::from([1.0, 0.0, 0.0]));
/// let t = Trivector::new(Scalar::ONE);
/// let _ = t.wedge(v); // grade 4
/// ```
///
/// ```compile_fail
/// use r3_grassmann::prelude::*;
///
/// let v = Vector::new(R3Element::from([1.0, 0.0, 0.0]));
/// let t = Trivector::new(Scalar::ONE);
/// let _ = v.wedge(t); // grade 4
/// ```
pub trait Wedge<Rhs = Self> {
    /// Element of grade `grade(Self) + grade(Rhs)`.
    type Output;

    /// Wedge `self` with `rhs`.
    fn wedge(self, rhs: Rhs) -> Self::Output;
}

/// A grade-1 element, e.g. a displacement.
///
/// Vectors only combine with vectors under `+` and `-`, and only scale by a
/// `Scalar`:
///
/// ```compile_fail
/// use r3_grassmann::prelude::*;
///
/// let v = Vector::new(R3Element::from([1.0, 0.0, 0.0]));
/// let b = Bivector::new(R3Element::from([1.0, 0.0, 0.0]));
/// let _ = v + b;
/// ```
///
/// ```compile_fail
/// use r3_grassmann::prelude::*;
///
/// let v = Vector::new(R3Element::from([1.0, 0.0, 0.0]));
/// let _ = 2.0 * v;
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    /// Coordinates in the standard basis e₁, e₂, e₃.
    pub coordinates: R3Element,
}

/// A grade-2 element, e.g. an angular momentum.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bivector {
    /// Hodge-dual coordinates: `x` is e₂₃, `y` is e₃₁, `z` is e₁₂.
    pub coordinates: R3Element,
}

/// A grade-3 element (pseudoscalar), e.g. an oriented volume.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trivector {
    /// e₁₂₃ component
    pub coordinate: Scalar,
}

impl Vector {
    /// Create a new `Vector` from its coordinates.
    #[inline(always)]
    pub const fn new(coordinates: R3Element) -> Self {
        Self { coordinates }
    }

    /// Euclidean inner product `⟨left, right⟩`.
    ///
    /// Both operands must be vectors:
    ///
    /// ```compile_fail
    /// use r3_grassmann::prelude::*;
    ///
    /// let v = Vector::new(R3Element::from([1.0, 0.0, 0.0]));
    /// let b = Bivector::new(R3Element::from([1.0, 0.0, 0.0]));
    /// let _ = Vector::inner_product(v, b);
    /// ```
    #[inline(always)]
    pub fn inner_product(left: Vector, right: Vector) -> Scalar {
        left.coordinates.dot(&right.coordinates)
    }

    /// Euclidean norm, `√⟨v, v⟩`.
    #[inline(always)]
    pub fn norm(&self) -> Scalar {
        Vector::inner_product(*self, *self).sqrt()
    }
}

impl Bivector {
    /// Create a new `Bivector` from its Hodge-dual coordinates.
    #[inline(always)]
    pub const fn new(coordinates: R3Element) -> Self {
        Self { coordinates }
    }

    /// Inner product `⟨left, right⟩` induced on Λ²ℝ³.
    #[inline(always)]
    pub fn inner_product(left: Bivector, right: Bivector) -> Scalar {
        left.coordinates.dot(&right.coordinates)
    }

    /// Magnitude of the oriented area, `√⟨B, B⟩`.
    #[inline(always)]
    pub fn norm(&self) -> Scalar {
        Bivector::inner_product(*self, *self).sqrt()
    }
}

impl Trivector {
    /// Create a new `Trivector` from its e₁₂₃ coordinate.
    #[inline(always)]
    pub const fn new(coordinate: Scalar) -> Self {
        Self { coordinate }
    }

    /// Inner product `⟨left, right⟩` on Λ³ℝ³, which is one-dimensional.
    #[inline(always)]
    pub fn inner_product(left: Trivector, right: Trivector) -> Scalar {
        left.coordinate * right.coordinate
    }
}

impl Wedge<Vector> for Vector {
    type Output = Bivector;
    #[inline(always)]
    fn wedge(self, rhs: Vector) -> Bivector {
        Bivector::new(self.coordinates.cross(&rhs.coordinates))
    }
}

impl Wedge<Bivector> for Vector {
    type Output = Trivector;
    #[inline(always)]
    fn wedge(self, rhs: Bivector) -> Trivector {
        Trivector::new(self.coordinates.dot(&rhs.coordinates))
    }
}

// Grades 2 and 1 commute: B ∧ a = (-1)^(2·1) a ∧ B.
impl Wedge<Vector> for Bivector {
    type Output = Trivector;
    #[inline(always)]
    fn wedge(self, rhs: Vector) -> Trivector {
        rhs.wedge(self)
    }
}

impl Wedge<Scalar> for Scalar {
    type Output = Scalar;
    #[inline(always)]
    fn wedge(self, rhs: Scalar) -> Scalar {
        self * rhs
    }
}

macro_rules! impl_graded {
    ($type_:ident { $field:ident : $coord:ty }) => {
        impl From<$coord> for $type_ {
            #[inline(always)]
            fn from($field: $coord) -> Self {
                Self { $field }
            }
        }

        impl Neg for $type_ {
            type Output = $type_;
            #[inline(always)]
            fn neg(self) -> $type_ {
                $type_ { $field: -self.$field }
            }
        }

        impl Add for $type_ {
            type Output = $type_;
            #[inline(always)]
            fn add(self, rhs: $type_) -> $type_ {
                $type_ { $field: self.$field + rhs.$field }
            }
        }

        impl Sub for $type_ {
            type Output = $type_;
            #[inline(always)]
            fn sub(self, rhs: $type_) -> $type_ {
                $type_ { $field: self.$field - rhs.$field }
            }
        }

        impl Mul<$type_> for Scalar {
            type Output = $type_;
            #[inline(always)]
            fn mul(self, rhs: $type_) -> $type_ {
                $type_ { $field: self * rhs.$field }
            }
        }

        impl Mul<Scalar> for $type_ {
            type Output = $type_;
            #[inline(always)]
            fn mul(self, rhs: Scalar) -> $type_ {
                $type_ { $field: self.$field * rhs }
            }
        }

        impl Div<Scalar> for $type_ {
            type Output = $type_;
            #[inline(always)]
            fn div(self, rhs: Scalar) -> $type_ {
                $type_ { $field: self.$field / rhs }
            }
        }

        // A 0-vector wedges by scaling.
        impl Wedge<$type_> for Scalar {
            type Output = $type_;
            #[inline(always)]
            fn wedge(self, rhs: $type_) -> $type_ {
                self * rhs
            }
        }

        impl Wedge<Scalar> for $type_ {
            type Output = $type_;
            #[inline(always)]
            fn wedge(self, rhs: Scalar) -> $type_ {
                self * rhs
            }
        }

        impl Zero for $type_ {
            fn zero() -> Self {
                $type_ { $field: <$coord>::zero() }
            }

            fn is_zero(&self) -> bool {
                self.$field.is_zero()
            }
        }

        impl AbsDiffEq for $type_ {
            type Epsilon = f64;

            fn default_epsilon() -> f64 {
                <$coord>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
                self.$field.abs_diff_eq(&other.$field, epsilon)
            }
        }

        impl RelativeEq for $type_ {
            fn default_max_relative() -> f64 {
                <$coord>::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
                self.$field.relative_eq(&other.$field, epsilon, max_relative)
            }
        }
    };
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Vector{}", self.coordinates)
    }
}

impl fmt::Display for Bivector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Bivector{}", self.coordinates)
    }
}

impl fmt::Display for Trivector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Trivector({})", self.coordinate)
    }
}

impl_graded!(Vector { coordinates: R3Element });
impl_graded!(Bivector { coordinates: R3Element });
impl_graded!(Trivector { coordinate: Scalar });
