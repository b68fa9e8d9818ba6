//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;
use num::{complex::Complex64, Complex};

use crate::{
    util::complex::{c_abs, c_cast},
    Poly, Poly64, RealScalar,
};

/// Coefficients of Wilkinson's polynomial of degree 10, `(x-1)(x-2)...(x-10)`,
/// in ascending order, with the constant term moved by `1/16`.
///
/// The perturbation keeps every coefficient exactly representable in `f64`
/// while making the roots irrational, so no working precision can land on one
/// exactly. The roots stay real and close to the integers `1..=10`.
pub const WILKINSON_10: [f64; 11] = [
    3_628_800.062_5,
    -10_628_640.0,
    12_753_576.0,
    -8_409_500.0,
    3_416_930.0,
    -902_055.0,
    157_773.0,
    -18_150.0,
    1_320.0,
    -55.0,
    1.0,
];

/// [`WILKINSON_10`] at the given working precision.
#[must_use]
pub fn wilkinson_10<T: RealScalar>() -> Poly<T> {
    Poly::from_real_iterator(WILKINSON_10.into_iter().map(T::cast_from_f64))
}

/// `(x - r1)(x - r2)`
#[must_use]
pub fn quadratic_from_roots(r1: Complex64, r2: Complex64) -> Poly64 {
    Poly64::from_complex_slice(&[r1 * r2, -(r1 + r2), complex!(1.0)])
}

/// Backward error `|p(z)|` at the working precision of the polynomial
#[must_use]
pub fn residual<T: RealScalar>(poly: &Poly<T>, z: &Complex<T>) -> T {
    c_abs(&poly.eval(z.clone()))
}

#[must_use]
pub fn distance<T: RealScalar>(a: &Complex<T>, b: &Complex<T>) -> T {
    c_abs(&(a.clone() - b.clone()))
}

/// Convert a double precision value to a wider type, exact for every type
/// with at least 53 significand bits.
#[must_use]
pub fn widen<U: RealScalar>(z: &Complex64) -> Complex<U> {
    c_cast(z)
}

/// Check that `root` is within `tol` of one of the `expected` roots
#[must_use]
pub fn check_root(root: Complex64, expected: &[Complex64], tol: f64) -> bool {
    expected.iter().any(|r| (root - r).norm() <= tol)
}

struct RandStreamF64 {
    state: Rng,
}

impl RandStreamF64 {
    fn new(seed: u64) -> Self {
        Self {
            state: Rng::with_seed(seed),
        }
    }
}

impl Iterator for RandStreamF64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.state.f64())
    }
}

/// Infinite stream of real numbers in `[min, max)`, as complex numbers
pub struct RandStreamR64 {
    real_stream: RandStreamF64,
    min: f64,
    max: f64,
}

impl RandStreamR64 {
    #[must_use]
    pub fn new(seed: u64, min: f64, max: f64) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        Self {
            real_stream: RandStreamF64::new(seed),
            min,
            max,
        }
    }
}

impl Iterator for RandStreamR64 {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let re = (self.real_stream.next()?).mul_add(self.max - self.min, self.min);
        Some(complex!(re))
    }
}

/// Infinite stream of complex numbers, uniform over a rectangle
pub struct RandStreamC64Cartesian {
    real_stream: RandStreamF64,
    min_re: f64,
    max_re: f64,
    min_im: f64,
    max_im: f64,
}

impl RandStreamC64Cartesian {
    #[must_use]
    pub fn new(seed: u64, min_re: f64, max_re: f64, min_im: f64, max_im: f64) -> Self {
        assert!(
            min_re <= max_re && min_im <= max_im,
            "minimum should be smaller or equal to maximum"
        );
        Self {
            real_stream: RandStreamF64::new(seed),
            min_re,
            max_re,
            min_im,
            max_im,
        }
    }
}

impl Iterator for RandStreamC64Cartesian {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let re = (self.real_stream.next()?).mul_add(self.max_re - self.min_re, self.min_re);
        let im = (self.real_stream.next()?).mul_add(self.max_im - self.min_im, self.min_im);
        Some(Complex::new(re, im))
    }
}

#[cfg(test)]
mod test {
    use f128::f128;

    use super::{
        check_root, distance, quadratic_from_roots, residual, widen, wilkinson_10,
        RandStreamC64Cartesian, RandStreamR64,
    };
    use crate::{Poly128, Poly64};

    #[test]
    fn streams_are_seeded() {
        let a: Vec<_> = RandStreamC64Cartesian::new(1, -1.0, 1.0, -2.0, 2.0)
            .take(16)
            .collect();
        let b: Vec<_> = RandStreamC64Cartesian::new(1, -1.0, 1.0, -2.0, 2.0)
            .take(16)
            .collect();
        assert_eq!(a, b);
        for z in a {
            assert!((-1.0..1.0).contains(&z.re));
            assert!((-2.0..2.0).contains(&z.im));
        }
        assert!(RandStreamR64::new(2, 3.0, 4.0)
            .take(16)
            .all(|z| z.im == 0.0 && (3.0..4.0).contains(&z.re)));
    }

    #[test]
    fn wilkinson_is_monic_degree_10() {
        let p: Poly64 = wilkinson_10();
        assert_eq!(p.degree(), 10);
        assert_eq!(p[10], complex!(1.0));
        let q: Poly128 = wilkinson_10();
        assert_eq!(q.cast::<f64>(), p);
        assert_eq!(q[0].re, f128::from(3_628_800.062_5));
    }

    #[test]
    fn quadratic() {
        let p = quadratic_from_roots(complex!(1.0), complex!(2.0));
        assert_eq!(p, poly![2.0, -3.0, 1.0]);
        assert!(check_root(complex!(2.0, 1E-9), &[complex!(1.0), complex!(2.0)], 1E-8));
        assert!(!check_root(complex!(1.5), &[complex!(1.0), complex!(2.0)], 1E-8));
        assert_eq!(residual(&p, &complex!(2.0)), 0.0);
        assert_eq!(residual(&p, &complex!(0.0)), 2.0);
    }

    #[test]
    fn widen_is_exact() {
        let z = complex!(0.1, -1.0 / 3.0);
        let wide = widen::<f128>(&z);
        assert_eq!(wide.re, f128::from(0.1));
        assert_eq!(distance(&wide, &wide), f128::from(0.0));
        assert_eq!(distance(&complex!(0.0, 0.0), &complex!(3.0, 4.0)), 5.0);
    }
}
