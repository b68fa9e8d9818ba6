// internal utilities for dealing with Complex annoyiances

use num::{Complex, One, Zero};

use crate::RealScalar;

/// Convert to another precision, going through `f64`
pub(crate) fn c_cast<T: RealScalar, U: RealScalar>(z: &Complex<T>) -> Complex<U> {
    Complex::new(
        U::cast_from_f64(z.re.cast_to_f64()),
        U::cast_from_f64(z.im.cast_to_f64()),
    )
}

/// Modulus of a complex number, scaled so that squaring the parts cannot
/// overflow or underflow. [`Complex::norm`] requires [`num::Float`].
pub(crate) fn c_abs<T: RealScalar>(z: &Complex<T>) -> T {
    let a = z.re.abs();
    let b = z.im.abs();
    let (big, small) = if a >= b { (a, b) } else { (b, a) };
    if big.is_zero() || !big.is_finite() {
        return big;
    }
    let ratio = small / big.clone();
    big * (T::one() + ratio.clone() * ratio).sqrt()
}

/// Complex division by Smith's method, scaled so that large or small divisors
/// do not overflow or underflow the way `re² + im²` does in `Complex::div`.
///
/// Dividing by zero gives NaN parts, like `0.0 / 0.0`.
pub(crate) fn c_div<T: RealScalar>(a: Complex<T>, b: Complex<T>) -> Complex<T> {
    if b.re.abs() >= b.im.abs() {
        let r = b.im.clone() / b.re.clone();
        let den = b.re + b.im * r.clone();
        Complex::new(
            (a.re.clone() + a.im.clone() * r.clone()) / den.clone(),
            (a.im - a.re * r) / den,
        )
    } else {
        let r = b.re.clone() / b.im.clone();
        let den = b.re * r.clone() + b.im;
        Complex::new(
            (a.re.clone() * r.clone() + a.im.clone()) / den.clone(),
            (a.im * r - a.re) / den,
        )
    }
}

/// Principal square root, with the branch cut along the negative real axis.
///
/// On the cut itself the sign of the imaginary part follows the sign of
/// `z.im`, with `-0.0` treated like `0.0`.
pub(crate) fn c_sqrt<T: RealScalar>(z: Complex<T>) -> Complex<T> {
    if z.is_zero() {
        return z;
    }
    let two = T::one() + T::one();
    let r = c_abs(&z);
    if z.re >= T::zero() {
        let t = ((r + z.re) / two.clone()).sqrt();
        let im = z.im / (two * t.clone());
        Complex::new(t, im)
    } else {
        let t = ((r - z.re) / two.clone()).sqrt();
        let re = z.im.abs() / (two * t.clone());
        let im = if z.im < T::zero() { -t } else { t };
        Complex::new(re, im)
    }
}

/// formatting for Complex, because the implementation is not good enough for me
pub(crate) fn complex_fmt<T: std::fmt::Display + Zero + One + PartialEq>(c: &Complex<T>) -> String {
    let r = &c.re;
    let i = &c.im;
    if i.is_zero() {
        format!("{r}")
    } else if i.is_one() {
        format!("({r}+i)")
    } else {
        format!("({r}+i{i})")
    }
}

#[cfg(test)]
mod test {
    use num::complex::Complex64;

    use f128::f128;

    use super::{c_abs, c_cast, c_div, c_sqrt, complex_fmt};

    #[test]
    fn abs_matches_norm() {
        for z in [
            complex!(3.0, 4.0),
            complex!(-3.0, 4.0),
            complex!(0.0, -2.5),
            complex!(1E-200, 1E-200),
            complex!(1E200, -1E200),
        ] {
            let expected: Complex64 = z;
            assert!((c_abs(&z) - expected.norm()).abs() <= expected.norm() * 1E-15);
        }
        assert_eq!(c_abs(&complex!(0.0, 0.0)), 0.0);
    }

    #[test]
    fn div_matches_naive() {
        for (a, b) in [
            (complex!(1.0, 2.0), complex!(3.0, -4.0)),
            (complex!(-2.5, 0.5), complex!(0.25, 8.0)),
            (complex!(0.0, 1.0), complex!(-1.0, 0.0)),
        ] {
            let expected: Complex64 = a / b;
            assert!((c_div(a, b) - expected).norm() <= expected.norm() * 1E-15);
        }
        assert_eq!(c_div(complex!(-3.0), complex!(2.0)), complex!(-1.5));
    }

    #[test]
    fn div_large_and_small_divisors() {
        // the naive formula squares the divisor, 1E400 overflows
        let q = c_div(complex!(2E200, 0.0), complex!(1E200, 1E200));
        assert_eq!(q, complex!(1.0, -1.0));
        let naive: Complex64 = complex!(2E200, 0.0) / complex!(1E200, 1E200);
        assert!(!naive.re.is_finite() || naive.re != 1.0);

        let q = c_div(complex!(1E-200, 0.0), complex!(0.0, 1E-200));
        assert_eq!(q, complex!(0.0, -1.0));
    }

    #[test]
    fn div_by_zero_is_nan() {
        let q: Complex64 = c_div(complex!(1.0, 1.0), complex!(0.0, 0.0));
        assert!(q.re.is_nan() && q.im.is_nan());
    }

    #[test]
    fn sqrt_principal_branch() {
        for z in [
            complex!(4.0, 0.0),
            complex!(-4.0, 0.0),
            complex!(0.0, 2.0),
            complex!(-3.0, -4.0),
            complex!(1.5, -0.25),
        ] {
            let expected: Complex64 = z.sqrt();
            let s = c_sqrt(z);
            assert!((s - expected).norm() < 1E-14, "{s} != {expected}");
            assert!(s.re >= 0.0);
        }
        assert_eq!(c_sqrt(complex!(-4.0, 0.0)), complex!(0.0, 2.0));
        assert_eq!(c_sqrt(complex!(0.0, 0.0)), complex!(0.0, 0.0));
    }

    #[test]
    fn cast() {
        let z = complex!(0.1, -2.5);
        let wide: num::Complex<f128> = c_cast(&z);
        assert_eq!(c_cast::<f128, f64>(&wide), z);
        assert_eq!(c_cast::<f64, f32>(&z), complex!(0.1f32, -2.5));
    }

    #[test]
    fn fmt() {
        assert_eq!(complex_fmt(&complex!(2.0, 0.0)), "2");
        assert_eq!(complex_fmt(&complex!(5.0, 1.0)), "(5+i)");
        assert_eq!(complex_fmt(&complex!(6.0, 1.5)), "(6+i1.5)");
    }
}
