//! src/r3_element.rs
//! Ungraded, basis-dependent triples in ℝ³.
//!
//! `R3Element` is the arithmetic substrate of [`Vector`](crate::Vector) and
//! [`Bivector`](crate::Bivector). It is not a physical quantity by itself.

use crate::scalar::Scalar;
use approx::{AbsDiffEq, RelativeEq};
use num_traits::Zero;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A triple of `Scalar`s under componentwise vector-space operations.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct R3Element {
    /// X component.
    pub x: Scalar,
    /// Y component.
    pub y: Scalar,
    /// Z component.
    pub z: Scalar,
}

impl R3Element {
    /// Create a new `R3Element` from components.
    #[inline(always)]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { x, y, z }
    }

    /// Cross product: `(y₁z₂ − z₁y₂, z₁x₂ − x₁z₂, x₁y₂ − y₁x₂)`.
    #[inline(always)]
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Dot product: `x₁x₂ + y₁y₂ + z₁z₂`.
    #[inline(always)]
    pub fn dot(&self, other: &Self) -> Scalar {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl From<[f64; 3]> for R3Element {
    fn from(arr: [f64; 3]) -> R3Element {
        R3Element::new(arr[0].into(), arr[1].into(), arr[2].into())
    }
}

impl From<R3Element> for [f64; 3] {
    fn from(r: R3Element) -> [f64; 3] {
        [r.x.value(), r.y.value(), r.z.value()]
    }
}

impl Add for R3Element {
    type Output = R3Element;
    #[inline(always)]
    fn add(self, rhs: R3Element) -> R3Element {
        R3Element::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for R3Element {
    type Output = R3Element;
    #[inline(always)]
    fn sub(self, rhs: R3Element) -> R3Element {
        R3Element::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for R3Element {
    type Output = R3Element;
    #[inline(always)]
    fn neg(self) -> R3Element {
        R3Element::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<Scalar> for R3Element {
    type Output = R3Element;
    #[inline(always)]
    fn mul(self, rhs: Scalar) -> R3Element {
        R3Element::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<R3Element> for Scalar {
    type Output = R3Element;
    #[inline(always)]
    fn mul(self, rhs: R3Element) -> R3Element {
        R3Element::new(self * rhs.x, self * rhs.y, self * rhs.z)
    }
}

impl Div<Scalar> for R3Element {
    type Output = R3Element;
    #[inline(always)]
    fn div(self, rhs: Scalar) -> R3Element {
        R3Element::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Zero for R3Element {
    fn zero() -> Self {
        R3Element::new(Scalar::ZERO, Scalar::ZERO, Scalar::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }
}

impl fmt::Display for R3Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl AbsDiffEq for R3Element {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        Scalar::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for R3Element {
    fn default_max_relative() -> f64 {
        Scalar::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}
