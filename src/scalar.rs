use std::{
    fmt::{Debug, Display},
    ops::Neg,
};

use f128::f128;
use num::{Float, Num, ToPrimitive};

use crate::util::casting::usize_to_f64;

#[cfg(feature = "mpfr")]
mod mpfr;
#[cfg(feature = "mpfr")]
pub use mpfr::MpFloat;

/// The real part of the complex numbers a polynomial is made of.
///
/// The implementing type fixes the working precision of every computation on
/// polynomials over it. There is no global precision setting: to run the
/// same algorithm at a higher precision, cast the polynomial with
/// [`crate::Poly::cast`] and call it again.
///
/// Unlike [`num::Float`], this does not require [`Copy`], so heap-allocated
/// arbitrary precision numbers can implement it.
pub trait RealScalar: Num + Clone + PartialOrd + Neg<Output = Self> + Debug + Display {
    /// Number of bits in the significand, including the implicit bit.
    fn precision_bits() -> u32;

    /// Difference between `1.0` and the next representable value.
    fn epsilon() -> Self;

    /// Rounds to the nearest representable value.
    fn cast_from_f64(x: f64) -> Self;

    /// Rounds to the nearest `f64`, values outside the range saturate to
    /// infinity.
    fn cast_to_f64(&self) -> f64;

    fn cast_from_usize(n: usize) -> Self {
        Self::cast_from_f64(usize_to_f64(n))
    }

    fn sqrt(&self) -> Self;

    fn abs(&self) -> Self;

    /// Neither infinite nor NaN.
    fn is_finite(&self) -> bool;
}

impl RealScalar for f32 {
    fn precision_bits() -> u32 {
        Self::MANTISSA_DIGITS
    }

    fn epsilon() -> Self {
        Self::EPSILON
    }

    #[allow(clippy::cast_possible_truncation)]
    fn cast_from_f64(x: f64) -> Self {
        x as Self
    }

    fn cast_to_f64(&self) -> f64 {
        f64::from(*self)
    }

    fn sqrt(&self) -> Self {
        Self::sqrt(*self)
    }

    fn abs(&self) -> Self {
        Self::abs(*self)
    }

    fn is_finite(&self) -> bool {
        Self::is_finite(*self)
    }
}

impl RealScalar for f64 {
    fn precision_bits() -> u32 {
        Self::MANTISSA_DIGITS
    }

    fn epsilon() -> Self {
        Self::EPSILON
    }

    fn cast_from_f64(x: f64) -> Self {
        x
    }

    fn cast_to_f64(&self) -> f64 {
        *self
    }

    fn sqrt(&self) -> Self {
        Self::sqrt(*self)
    }

    fn abs(&self) -> Self {
        Self::abs(*self)
    }

    fn is_finite(&self) -> bool {
        Self::is_finite(*self)
    }
}

impl RealScalar for f128 {
    fn precision_bits() -> u32 {
        113
    }

    fn epsilon() -> Self {
        <Self as Float>::epsilon()
    }

    fn cast_from_f64(x: f64) -> Self {
        Self::from(x)
    }

    fn cast_to_f64(&self) -> f64 {
        ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
    }

    fn sqrt(&self) -> Self {
        <Self as Float>::sqrt(*self)
    }

    fn abs(&self) -> Self {
        <Self as Float>::abs(*self)
    }

    fn is_finite(&self) -> bool {
        <Self as Float>::is_finite(*self)
    }
}
