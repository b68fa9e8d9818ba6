use std::{
    fmt::{Debug, Display},
    ops::{Add, Div, Mul, Neg, Rem, Sub},
};

use num::{Num, One, Zero};
use rug::{float::ParseFloatError, Float};

use super::RealScalar;

/// Arbitrary precision float with a significand of `BITS` bits, backed by
/// MPFR.
///
/// The precision is part of the type, so polynomials of different precision
/// cannot be mixed by accident. Every value is rounded to nearest. `BITS` must
/// be at least 1.
///
/// ```
/// use laguerre_poly::{MpFloat, Poly64, RealScalar};
///
/// type F256 = MpFloat<256>;
/// let p: Poly64 = laguerre_poly::poly![-2.0, 0.0, 1.0];
/// let p = p.cast::<F256>();
/// assert_eq!(F256::precision_bits(), 256);
/// assert_eq!(p.degree(), 2);
/// ```
#[derive(Clone, PartialEq, PartialOrd)]
pub struct MpFloat<const BITS: u32>(Float);

impl<const BITS: u32> MpFloat<BITS> {
    #[must_use]
    pub fn new(value: Float) -> Self {
        Self(Float::with_val(BITS, value))
    }

    #[must_use]
    pub const fn as_float(&self) -> &Float {
        &self.0
    }

    #[must_use]
    pub fn into_float(self) -> Float {
        self.0
    }
}

impl<const BITS: u32> From<Float> for MpFloat<BITS> {
    fn from(value: Float) -> Self {
        Self::new(value)
    }
}

impl<const BITS: u32> Debug for MpFloat<BITS> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl<const BITS: u32> Display for MpFloat<BITS> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident) => {
        impl<const BITS: u32> $trait for MpFloat<BITS> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self(self.0.$method(rhs.0))
            }
        }
    };
}

impl_binop!(Add, add);
impl_binop!(Sub, sub);
impl_binop!(Mul, mul);
impl_binop!(Div, div);
impl_binop!(Rem, rem);

impl<const BITS: u32> Neg for MpFloat<BITS> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl<const BITS: u32> Zero for MpFloat<BITS> {
    fn zero() -> Self {
        Self(Float::new(BITS))
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<const BITS: u32> One for MpFloat<BITS> {
    fn one() -> Self {
        Self(Float::with_val(BITS, 1u32))
    }
}

impl<const BITS: u32> Num for MpFloat<BITS> {
    type FromStrRadixErr = ParseFloatError;

    /// # Panics
    /// If `radix` is not in the range `2..=36`
    #[allow(clippy::cast_possible_wrap)]
    fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        let parsed = Float::parse_radix(str, radix as i32)?;
        Ok(Self(Float::with_val(BITS, parsed)))
    }
}

impl<const BITS: u32> RealScalar for MpFloat<BITS> {
    fn precision_bits() -> u32 {
        BITS
    }

    fn epsilon() -> Self {
        Self(Float::with_val(BITS, 1u32) >> (BITS - 1))
    }

    fn cast_from_f64(x: f64) -> Self {
        Self(Float::with_val(BITS, x))
    }

    fn cast_to_f64(&self) -> f64 {
        self.0.to_f64()
    }

    fn cast_from_usize(n: usize) -> Self {
        Self(Float::with_val(BITS, n))
    }

    fn sqrt(&self) -> Self {
        Self(self.0.clone().sqrt())
    }

    fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}
