//! Polish a single root of a complex polynomial with Laguerre's method.
//!
//! Polynomials are stored as coefficients in ascending order of degree. The
//! working precision is the real scalar type of the coefficients: [`Poly32`],
//! [`Poly64`] and [`Poly128`] cover the hardware and quad-precision floats,
//! and with the `mpfr` feature enabled, [`MpFloat`] provides any number of
//! significand bits.
//!
//! ```
//! use laguerre_poly::{complex, poly, roots::LaguerreConfig};
//!
//! // 2 - 3x + x^2 has roots at 1 and 2
//! let p = poly![2.0, -3.0, 1.0];
//! let report = p
//!     .laguerre(complex!(0.0), &LaguerreConfig::default(), None)
//!     .unwrap();
//! assert!(!report.failed);
//! assert!((report.root - complex!(1.0)).norm() < 1E-8);
//! ```
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub use num;

/// A more convenient way to write `Complex::new(...)`.
///
/// # Examples
///
/// ```
/// use laguerre_poly::complex;
/// use num::Complex;
///
/// let c1: Complex<f32> = complex!();
/// let c2 = Complex::new(0.0, 0.0);
/// let c3 = complex!(1.0f32, 2.0);
/// let c4 = Complex::new(1.0, 2.0);
///
/// assert_eq!(c1, c2);
/// assert_eq!(c3, c4);
/// assert_eq!(complex!(4.20), complex!(4.20, 0.0));
/// ```
#[macro_export]
macro_rules! complex {
    () => {{
        <$crate::num::Complex<_> as $crate::num::Zero>::zero()
    }};
    ($re:expr) => {{
        $crate::num::Complex::new($re, $crate::num::Zero::zero())
    }};
    ($re:expr, $im: expr) => {{
        $crate::num::Complex::new($re, $im)
    }};
}

/// A more convenient way of writing `Poly::new(&[Complex::new(...)...])`
///
/// It takes ownership of its inputs.
///
/// # Examples
///
/// ```
/// use laguerre_poly::{Poly, poly};
/// use num::Complex;
///
/// // real polynomial, coefficients in ascending order of degree
/// let p1 = poly![1.0, 2.0, 3.0];
/// let p2 = Poly::new(&[Complex::new(1.0, 0.0), Complex::new(2.0, 0.0), Complex::new(3.0, 0.0)]);
/// assert_eq!(p1, p2);
///
/// // complex polynomial, as (re, im) pairs
/// let p3 = poly![(1.0, -1.0), (2.0, 2.0), (3.0, -3.0)];
/// let p4 = Poly::new(&[Complex::new(1.0, -1.0), Complex::new(2.0, 2.0), Complex::new(3.0, -3.0)]);
/// assert_eq!(p3, p4);
///
/// // empty polynomial is the zero polynomial
/// assert_eq!(poly![], Poly::<f64>::zero());
/// ```
#[macro_export]
macro_rules! poly {
    () => {{
        $crate::Poly::zero()
    }};
    ($(($re:expr, $im:expr)),+ $(,)?) => {{
        $crate::Poly::from_complex_vec(vec![$($crate::complex!($re, $im)),+])
    }};
    ($($re:expr),+ $(,)?) => {{
        $crate::Poly::from_real_slice(&[$($re),+])
    }};
}

mod error;
pub use error::InvalidInput;

mod poly;
pub use poly::{differentiate, Poly};

pub mod roots;

mod scalar;
#[cfg(feature = "mpfr")]
pub use scalar::MpFloat;
pub use scalar::RealScalar;

mod util;

// re-exported for integration tests, benches and demos
#[doc(hidden)]
pub use util::__testing;

pub type Poly32 = Poly<f32>;
pub type Poly64 = Poly<f64>;
pub type Poly128 = Poly<f128::f128>;
