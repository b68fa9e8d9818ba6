use num::Zero;

use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// The length of the polynomial without checking pre-conditions
    pub(crate) fn len_raw(&self) -> usize {
        self.0.len()
    }

    /// The degree of the polynomial, `0` for constants including the zero
    /// polynomial.
    #[inline]
    #[must_use]
    pub fn degree_raw(&self) -> usize {
        self.len_raw() - 1
    }

    pub(crate) fn is_normalized(&self) -> bool {
        let n = self.len_raw();
        if n == 0 {
            // zero-polynomials are represented as a single zero
            return false;
        }
        // a constant is always normalized, as it may be just a constant zero
        if n == 1 {
            return true;
        }
        !self.0[n - 1].is_zero()
    }

    pub(crate) fn normalize(mut self) -> Self {
        if self.is_normalized() {
            return self;
        }
        while self.0.len() > 1 && self.0.last().is_some_and(Zero::is_zero) {
            self.0.pop();
        }
        if self.0.is_empty() {
            return Self::zero();
        }

        // post-condition: polynomial is now normalized
        debug_assert!(self.is_normalized());
        self
    }
}
