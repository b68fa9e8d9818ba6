use std::ops::Index;

use num::Complex;

use crate::{util::complex::c_cast, Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    #[must_use]
    pub fn as_slice(&self) -> &[Complex<T>] {
        self.0.as_slice()
    }

    /// Iterate over coefficients, from the least significant
    pub fn iter(&self) -> std::slice::Iter<'_, Complex<T>> {
        self.0.as_slice().iter()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Complex<T>> {
        Vec::from(self.as_slice())
    }

    /// The same as `Poly::new()`
    #[must_use]
    pub fn from_complex_slice(value: &[Complex<T>]) -> Self {
        Self::new(value)
    }

    #[must_use]
    pub fn from_complex_vec(value: Vec<Complex<T>>) -> Self {
        Self(value).normalize()
    }

    #[must_use]
    pub fn from_real_slice(value: &[T]) -> Self {
        Self::from_real_iterator(value.iter().cloned())
    }

    #[must_use]
    pub fn from_real_iterator(coeffs: impl Iterator<Item = T>) -> Self {
        Self::from_complex_iterator(coeffs.map(Complex::from))
    }

    #[must_use]
    pub fn from_complex_iterator(coeffs: impl Iterator<Item = Complex<T>>) -> Self {
        Self(coeffs.collect()).normalize()
    }

    /// Convert the coefficients to another working precision.
    ///
    /// Goes through `f64`, so widening from `f32` or `f64` is exact, while
    /// narrowing rounds every coefficient to the target precision.
    ///
    /// ```
    /// use laguerre_poly::{poly, Poly128};
    ///
    /// let p = poly![1.0, -0.5, 0.25];
    /// let q: Poly128 = p.cast();
    /// assert_eq!(q.cast::<f64>(), p);
    /// ```
    #[must_use]
    pub fn cast<U: RealScalar>(&self) -> Poly<U> {
        Poly::from_complex_iterator(self.iter().map(c_cast))
    }
}

impl<T: RealScalar> From<&[Complex<T>]> for Poly<T> {
    fn from(value: &[Complex<T>]) -> Self {
        Self::from_complex_slice(value)
    }
}

impl<T: RealScalar> From<Vec<Complex<T>>> for Poly<T> {
    fn from(value: Vec<Complex<T>>) -> Self {
        Self::from_complex_vec(value)
    }
}

impl<T: RealScalar> From<Poly<T>> for Vec<Complex<T>> {
    fn from(val: Poly<T>) -> Self {
        val.0
    }
}

impl<'a, T: RealScalar> IntoIterator for &'a Poly<T> {
    type IntoIter = std::slice::Iter<'a, Complex<T>>;
    type Item = &'a Complex<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Coefficient of the term of the given degree
impl<T: RealScalar> Index<usize> for Poly<T> {
    type Output = Complex<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
