use num::Complex;

use crate::{Poly, RealScalar};

/// First derivative of a polynomial.
///
/// The result always has exactly one coefficient fewer than `poly`, except
/// for constants, whose derivative is the zero polynomial `[0]`.
///
/// # Examples
/// ```
/// use laguerre_poly::{differentiate, poly};
///
/// // 2 - 3x + x^2
/// let p = poly![2.0, -3.0, 1.0];
/// assert_eq!(differentiate(&p), poly![-3.0, 2.0]);
/// assert_eq!(differentiate(&poly![5.0]), poly![0.0]);
/// ```
#[must_use]
pub fn differentiate<T: RealScalar>(poly: &Poly<T>) -> Poly<T> {
    debug_assert!(poly.is_normalized());

    // derivative of constant is zero
    if poly.len_raw() < 2 {
        return Poly::zero();
    }

    let coeffs: Vec<_> = poly
        .iter()
        .enumerate()
        .skip(1) // shift degrees down
        .map(|(n, c)| c.clone() * Complex::from(T::cast_from_usize(n)))
        .collect();
    Poly::from_complex_vec(coeffs)
}

impl<T: RealScalar> Poly<T> {
    /// Derivative, see [`differentiate`].
    #[must_use]
    pub fn diff(&self) -> Self {
        differentiate(self)
    }
}
