use std::fmt::Display;

use itertools::Itertools;
use num::{Complex, One, Zero};

use crate::{
    util::{complex::complex_fmt, doc_macros::panic_absurd_size},
    InvalidInput, RealScalar,
};

mod base;
mod calculus;
pub use calculus::differentiate;
mod conversions;

/// A univariate polynomial with complex coefficients, stored in ascending
/// order of degree.
///
/// Polynomials are always normalized: zero coefficients of the highest
/// degrees are dropped on construction, and the zero polynomial is the single
/// coefficient `0`. So there is always at least one coefficient and
/// [`Poly::degree_raw`] is the true degree.
#[derive(Clone, Debug, PartialEq)]
pub struct Poly<T: RealScalar>(pub(crate) Vec<Complex<T>>);

impl<T: RealScalar> Poly<T> {
    /// Create a polynomial from coefficients in ascending order of degree. An
    /// empty slice gives the zero polynomial.
    #[must_use]
    pub fn new(coeffs: &[Complex<T>]) -> Self {
        Self(coeffs.to_owned()).normalize()
    }

    /// Same as [`Poly::new`], but an empty slice is rejected instead of being
    /// read as the zero polynomial.
    ///
    /// # Errors
    /// - `EmptyPolynomial` if `coeffs` is empty
    pub fn try_new(coeffs: &[Complex<T>]) -> Result<Self, InvalidInput> {
        if coeffs.is_empty() {
            return Err(InvalidInput::EmptyPolynomial);
        }
        Ok(Self::new(coeffs))
    }

    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn zero() -> Self {
        Self(vec![Complex::zero()])
    }

    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn one() -> Self {
        Self(vec![Complex::one()])
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        debug_assert!(self.is_normalized());
        self.len_raw() == 1 && self.0[0].is_zero()
    }

    /// The degree of a polynomial (the maximum exponent)
    ///
    /// Note that this will return `-1` for zero polynomials. The degree of
    /// zero polynomials is undefined, but we use the `-1` convention adopted
    /// by some authors. Use [`Poly::degree_raw`] for the degree as used by
    /// the root finders, which is `0` for the zero polynomial.
    ///
    /// # Panics
    #[doc = panic_absurd_size!()]
    #[must_use]
    pub fn degree(&self) -> i64 {
        if self.is_zero() {
            return -1;
        }
        self.degree_raw()
            .try_into()
            .expect("usize did not fit into i64")
    }

    /// Number of coefficients, always at least one.
    #[must_use]
    pub fn size(&self) -> usize {
        debug_assert!(self.is_normalized());
        self.len_raw()
    }

    /// Evaluate the polynomial at a single value of `x`.
    ///
    /// ```
    /// use laguerre_poly::Poly;
    /// use num::Complex;
    ///
    /// let p = Poly::new(&[Complex::new(1.0, 0.0), Complex::new(2.0, 0.0), Complex::new(3.0, 0.0)]);
    /// let x = Complex::new(1.0, 0.0);
    /// assert_eq!(p.eval(x), Complex::new(6.0, 0.0));
    /// ```
    #[must_use]
    pub fn eval(&self, x: Complex<T>) -> Complex<T> {
        // Horner's method, from the highest degree down. Starting from zero
        // rather than the leading coefficient keeps constants on the same path.
        self.0
            .iter()
            .rev()
            .fold(Complex::zero(), |acc, c| acc * x.clone() + c.clone())
    }
}

impl<T: RealScalar> Display for Poly<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let terms = self.iter().enumerate().format_with(" + ", |(i, c), g| {
            if i == 0 {
                g(&complex_fmt(c))
            } else {
                g(&format_args!("{}*x^{i}", complex_fmt(c)))
            }
        });
        write!(f, "{terms}")
    }
}
