//! The same polishing run at increasing working precision.

use f128::f128;
use laguerre_poly::{
    __testing::{distance, residual, widen, wilkinson_10},
    complex,
    roots::{LaguerreConfig, LaguerreReport, Termination},
    Poly128, Poly64, RealScalar,
};
use num::Complex;

/// Root near 5, the start is closer to it than to any other root.
fn z0() -> num::complex::Complex64 {
    complex!(5.3)
}

fn run_f64() -> LaguerreReport<f64> {
    let p: Poly64 = wilkinson_10();
    let config = LaguerreConfig::default().with_epsilon(1E-8).with_max_iter(10);
    p.laguerre(z0(), &config, None).unwrap()
}

fn run_f128() -> LaguerreReport<f128> {
    let p: Poly128 = wilkinson_10();
    let config = LaguerreConfig::default()
        .with_epsilon(f128::cast_from_f64(1E-20))
        .with_max_iter(10);
    p.laguerre(widen(&z0()), &config, None).unwrap()
}

#[test]
fn double_precision_converges() {
    let _ = simple_logger::init_with_level(log::Level::Debug);
    let report = run_f64();
    assert!(!report.failed);
    assert!(report.iterations <= 10);
    assert!((report.root - complex!(5.0)).norm() < 1E-3);
    assert!(report.root.im.abs() < 1E-8);
}

#[test]
fn quad_precision_is_closer() {
    let _ = simple_logger::init_with_level(log::Level::Debug);
    let low = run_f64();
    let high = run_f128();
    assert!(!low.failed);
    assert!(!high.failed);

    // both land on the same root
    let low_wide: Complex<f128> = widen(&low.root);
    assert!(distance(&low_wide, &high.root) < f128::cast_from_f64(1E-8));

    // and the residuals, both evaluated in quad precision, improve
    let p: Poly128 = wilkinson_10();
    let low_residual = residual(&p, &low_wide);
    let high_residual = residual(&p, &high.root);
    assert!(
        high_residual < low_residual,
        "{high_residual} >= {low_residual}"
    );

    // the reported error estimates tighten as well
    assert!(
        high.backward_error < f128::cast_from_f64(low.backward_error),
        "{} >= {}",
        high.backward_error,
        low.backward_error
    );
    assert!(
        high.forward_error < f128::cast_from_f64(low.forward_error),
        "{} >= {}",
        high.forward_error,
        low.forward_error
    );
}

#[test]
fn tight_tolerance_needs_more_precision() {
    let _ = simple_logger::init_with_level(log::Level::Debug);
    // rounding noise near x = 5 keeps every double precision step far above
    // 1E-20, while quad precision gets there
    let p: Poly64 = wilkinson_10();
    let config = LaguerreConfig::default().with_dxtol(1E-20).with_pxtol(0.0);
    let low = p.laguerre(z0(), &config, None).unwrap();
    assert!(low.failed);
    assert_eq!(low.termination, Termination::MaxIter);
    assert_eq!(low.iterations, 10);
    assert!(low.forward_error.is_finite() && low.forward_error > 1E-20);

    let p: Poly128 = wilkinson_10();
    let config = LaguerreConfig::default()
        .with_dxtol(f128::cast_from_f64(1E-20))
        .with_pxtol(f128::cast_from_f64(0.0));
    let high = p.laguerre(widen(&z0()), &config, None).unwrap();
    assert!(!high.failed);
    assert_eq!(high.termination, Termination::ForwardError);
    assert!(high.iterations < 10);

    // the failed run still holds a usable estimate of the same root
    let low_wide: Complex<f128> = widen(&low.root);
    assert!(distance(&low_wide, &high.root) < f128::cast_from_f64(1E-8));
}

#[cfg(feature = "mpfr")]
mod mpfr {
    use f128::f128;
    use laguerre_poly::{
        __testing::{distance, widen, wilkinson_10},
        roots::LaguerreConfig,
        MpFloat, Poly, RealScalar,
    };
    use num::{Complex, Num};

    use super::{run_f128, run_f64, z0};

    type F256 = MpFloat<256>;

    /// f128 has more significand bits than a pair of f64 can hold, the error of
    /// this split is far below the quad precision rounding error of a root.
    fn from_f128(x: f128) -> F256 {
        let hi = x.cast_to_f64();
        let lo = (x - f128::cast_from_f64(hi)).cast_to_f64();
        F256::cast_from_f64(hi) + F256::cast_from_f64(lo)
    }

    #[test]
    fn error_decreases_with_precision() {
        let _ = simple_logger::init_with_level(log::Level::Debug);
        let p: Poly<F256> = wilkinson_10();
        let config = LaguerreConfig::default()
            .with_epsilon(F256::from_str_radix("1e-60", 10).unwrap())
            .with_max_iter(20);
        let reference = p.laguerre(widen(&z0()), &config, None).unwrap();
        assert!(!reference.failed);

        let low = run_f64();
        let high = run_f128();
        let low_error = distance(&widen::<F256>(&low.root), &reference.root);
        let high_error = distance(
            &Complex::new(from_f128(high.root.re), from_f128(high.root.im)),
            &reference.root,
        );
        assert!(high_error < low_error, "{high_error} >= {low_error}");
        assert!(high_error < F256::cast_from_f64(1E-20));
    }
}
