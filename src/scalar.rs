//! src/scalar.rs
//! The grade-0 element: a strongly-typed real number.

use crate::error::{GeometryError, Result};
use approx::{AbsDiffEq, RelativeEq};
use num_traits::{One, Zero};
use std::any::{type_name, Any};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A real number, wrapped so that it cannot be mixed with raw `f64`s or with
/// elements of higher grade by accident.
///
/// All arithmetic and comparison forwards to IEEE-754 double precision,
/// including NaN, infinities and signed zero. Division is unchecked.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Scalar(f64);

impl Scalar {
    /// Additive identity.
    pub const ZERO: Scalar = Scalar(0.0);
    /// Multiplicative identity.
    pub const ONE: Scalar = Scalar(1.0);

    /// Wrap a raw `f64`.
    #[inline(always)]
    pub const fn new(value: f64) -> Self {
        Scalar(value)
    }

    /// Extract the raw `f64`, bit for bit.
    #[inline(always)]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Absolute value.
    #[inline(always)]
    pub fn abs(self) -> Self {
        Scalar(self.0.abs())
    }

    /// Square root; NaN for negative inputs.
    #[inline(always)]
    pub fn sqrt(self) -> Self {
        Scalar(self.0.sqrt())
    }

    /// Whether the wrapped value is NaN.
    #[inline(always)]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// Whether the wrapped value is neither infinite nor NaN.
    #[inline(always)]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Compare against a value whose type is only known at runtime.
    ///
    /// An absent value always orders below `self`. A present `Scalar` (held
    /// directly, through a `&'static Scalar`, or inside a `Box<dyn Any>`) is
    /// compared with IEEE-754 rules, so a NaN on either side yields
    /// `Ok(None)`. Any other type is rejected with
    /// [`GeometryError::InvalidArgument`].
    ///
    /// ```rust
    /// use r3_grassmann::Scalar;
    /// use std::any::Any;
    /// use std::cmp::Ordering;
    ///
    /// let boxed: Box<dyn Any> = Box::new(Scalar::new(2.0));
    /// let one = Scalar::new(1.0);
    /// assert_eq!(one.compare_to(Some(boxed.as_ref())), Ok(Some(Ordering::Less)));
    /// assert_eq!(one.compare_to(None), Ok(Some(Ordering::Greater)));
    /// assert!(one.compare_to(Some(&1.0_f64)).is_err());
    /// ```
    pub fn compare_to(&self, other: Option<&dyn Any>) -> Result<Option<Ordering>> {
        let Some(other) = other else {
            return Ok(Some(Ordering::Greater));
        };
        match downcast_scalar(other) {
            Some(rhs) => Ok(self.partial_cmp(&rhs)),
            None => {
                let found = NON_SCALAR;
                tracing::debug!(
                    found = found,
                    "rejected comparison of {} against a foreign type",
                    type_name::<Scalar>()
                );
                Err(GeometryError::invalid_argument(type_name::<Scalar>(), found))
            }
        }
    }
}

const NON_SCALAR: &str = "non-Scalar";

fn downcast_scalar(value: &dyn Any) -> Option<Scalar> {
    if let Some(s) = value.downcast_ref::<Scalar>() {
        return Some(*s);
    }
    if let Some(s) = value.downcast_ref::<&'static Scalar>() {
        return Some(**s);
    }
    value
        .downcast_ref::<Box<dyn Any>>()
        .and_then(|inner| downcast_scalar(inner.as_ref()))
}

impl From<f64> for Scalar {
    #[inline(always)]
    fn from(value: f64) -> Self {
        Scalar(value)
    }
}

impl From<Scalar> for f64 {
    #[inline(always)]
    fn from(s: Scalar) -> f64 {
        s.0
    }
}

impl Add for Scalar {
    type Output = Scalar;
    #[inline(always)]
    fn add(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 + rhs.0)
    }
}

impl Sub for Scalar {
    type Output = Scalar;
    #[inline(always)]
    fn sub(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 - rhs.0)
    }
}

impl Mul for Scalar {
    type Output = Scalar;
    #[inline(always)]
    fn mul(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 * rhs.0)
    }
}

impl Div for Scalar {
    type Output = Scalar;
    #[inline(always)]
    fn div(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 / rhs.0)
    }
}

impl Neg for Scalar {
    type Output = Scalar;
    #[inline(always)]
    fn neg(self) -> Scalar {
        Scalar(-self.0)
    }
}

impl Sum for Scalar {
    fn sum<I: Iterator<Item = Scalar>>(iter: I) -> Scalar {
        iter.fold(Scalar::ZERO, |acc, s| acc + s)
    }
}

impl Zero for Scalar {
    fn zero() -> Self {
        Scalar::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl One for Scalar {
    fn one() -> Self {
        Scalar::ONE
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl AbsDiffEq for Scalar {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl RelativeEq for Scalar {
    fn default_max_relative() -> f64 {
        f64::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}
