use num::Complex;

use super::{Error, LaguerreStep, TraceSink};
use crate::{
    util::{
        complex::{c_abs, c_div, c_sqrt},
        doc_macros::{errors_invalid_input, errors_no_converge},
    },
    InvalidInput, Poly, RealScalar,
};

/// Stopping criteria for [`laguerre`].
///
/// There is no enforced relationship between the two tolerances. Setting one
/// of them to zero disables it, setting both to zero means the iteration always
/// runs for `max_iter` steps.
#[derive(Clone, Debug, PartialEq)]
pub struct LaguerreConfig<T> {
    /// Forward error tolerance: stop once a step is shorter than this.
    pub dxtol: T,

    /// Backward error tolerance: stop once `|p(x)|` is smaller than this.
    pub pxtol: T,

    /// Maximum number of steps, at least 1.
    pub max_iter: usize,
}

impl<T: RealScalar> Default for LaguerreConfig<T> {
    fn default() -> Self {
        Self {
            dxtol: T::cast_from_f64(1E-8),
            pxtol: T::cast_from_f64(1E-8),
            max_iter: 10,
        }
    }
}

impl<T: RealScalar> LaguerreConfig<T> {
    #[must_use]
    pub fn with_dxtol(mut self, dxtol: T) -> Self {
        self.dxtol = dxtol;
        self
    }

    #[must_use]
    pub fn with_pxtol(mut self, pxtol: T) -> Self {
        self.pxtol = pxtol;
        self
    }

    /// Set both tolerances at once.
    #[must_use]
    pub fn with_epsilon(self, epsilon: T) -> Self {
        self.with_dxtol(epsilon.clone()).with_pxtol(epsilon)
    }

    #[must_use]
    pub const fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// # Errors
    /// - `ZeroMaxIter` if `max_iter` is 0
    /// - `BadTolerance` if a tolerance is negative, infinite or NaN
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if self.max_iter == 0 {
            return Err(InvalidInput::ZeroMaxIter);
        }
        for (name, tol) in [("dxtol", &self.dxtol), ("pxtol", &self.pxtol)] {
            if !(tol.is_finite() && *tol >= T::zero()) {
                return Err(InvalidInput::BadTolerance { name });
            }
        }
        Ok(())
    }
}

/// Which stopping criterion ended a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// `|p(x)| < pxtol` before taking a step
    BackwardError,

    /// `|dx| < dxtol` after taking a step
    ForwardError,

    /// `max_iter` steps taken without meeting either tolerance
    MaxIter,
}

/// Outcome of a [`laguerre`] run.
#[derive(Clone, Debug, PartialEq)]
pub struct LaguerreReport<T> {
    /// Last root estimate
    pub root: Complex<T>,

    /// Magnitude of the last step, zero if no step was taken
    pub forward_error: T,

    /// `|p(root)|`
    pub backward_error: T,

    /// Number of steps taken, never more than `max_iter`
    pub iterations: usize,

    /// Neither tolerance was met within `max_iter` steps
    pub failed: bool,

    pub termination: Termination,
}

impl<T: RealScalar> LaguerreReport<T> {
    /// The root, or the last estimate wrapped in an error if the run failed.
    ///
    /// # Errors
    #[doc = errors_no_converge!()]
    pub fn into_root(self) -> super::Result<T> {
        if self.failed {
            return Err(Error::NoConverge(self.root));
        }
        Ok(self.root)
    }
}

/// Polish a single root of `poly` with Laguerre's method.
///
/// `d1` and `d2` must be the first and second derivative of `poly`, as
/// returned by [`Poly::diff`]. They are taken as arguments so that callers
/// polishing many guesses on the same polynomial compute them only once, see
/// [`Poly::laguerre`] for the convenient version.
///
/// Every step first checks the backward error `|p(x)|` against
/// `config.pxtol`, so an initial guess that is already good enough is
/// returned without taking any step. Otherwise, the step is taken and its
/// length checked against `config.dxtol`. Running out of steps is reported
/// with [`LaguerreReport::failed`], it is not an error.
///
/// If `p(x)` evaluates to exactly zero while `pxtol` is zero, or the
/// step's denominator vanishes, which can happen near roots of higher
/// multiplicity, the step becomes NaN or infinite. This is not corrected, the
/// run then ends with `failed` set. A large but finite `p(x)`, as found far
/// away from every root, does not overflow the step.
///
/// The working precision is the precision of `T`, to retry a failed run at a
/// higher precision, [`Poly::cast`] the polynomial and the initial guess.
///
/// # Errors
#[doc = errors_invalid_input!()]
#[allow(clippy::similar_names)]
pub fn laguerre<T: RealScalar>(
    poly: &Poly<T>,
    d1: &Poly<T>,
    d2: &Poly<T>,
    initial_guess: Complex<T>,
    config: &LaguerreConfig<T>,
    mut trace: Option<&mut dyn TraceSink<T>>,
) -> Result<LaguerreReport<T>, Error<Complex<T>>> {
    config.validate()?;
    check_derivatives(poly, d1, d2)?;

    log::trace!(
        "starting with arguments: {{poly: \"{poly}\", initial_guess: \"{initial_guess}\", dxtol: \"{}\", pxtol: \"{}\", max_iter: {}, precision: {}}}",
        config.dxtol,
        config.pxtol,
        config.max_iter,
        T::precision_bits()
    );

    let degree = poly.degree_raw();
    let n = T::cast_from_usize(degree);
    let n_minus_one = T::cast_from_usize(degree - 1);

    let mut guess = initial_guess;
    let mut px = poly.eval(guess.clone());
    let mut delta_norm = T::zero();

    for i in 0..config.max_iter {
        let px_norm = c_abs(&px);

        // stopping criterion 1: backward error
        if px_norm < config.pxtol {
            log::debug!("stopping because backward error is below tolerance {{iterations: {i}, root: \"{guess}\"}}");
            return Ok(LaguerreReport {
                root: guess,
                forward_error: delta_norm,
                backward_error: px_norm,
                iterations: i,
                failed: false,
                termination: Termination::BackwardError,
            });
        }

        let pdx = d1.eval(guess.clone());
        let pddx = d2.eval(guess.clone());
        let delta = compute_delta(px, pdx, pddx, &n, &n_minus_one);

        guess = guess - delta.clone();
        px = poly.eval(guess.clone());
        delta_norm = c_abs(&delta);

        let step = LaguerreStep {
            step: i + 1,
            root: guess.clone(),
            delta_norm: delta_norm.clone(),
            px_norm: c_abs(&px),
        };
        log::trace!("{step}");
        if !delta_norm.is_finite() {
            log::warn!("degenerate step, p(x) or the denominator vanished {{step: {}, poly: \"{poly}\"}}", i + 1);
        }
        if let Some(sink) = trace.as_mut() {
            sink.record(&step);
        }

        // stopping criterion 2: forward error
        if delta_norm < config.dxtol {
            log::debug!("stopping because step is below tolerance {{iterations: {}, root: \"{guess}\"}}", i + 1);
            return Ok(LaguerreReport {
                root: guess,
                forward_error: delta_norm,
                backward_error: step.px_norm,
                iterations: i + 1,
                failed: false,
                termination: Termination::ForwardError,
            });
        }
    }

    log::debug!(
        "did not converge {{best_guess: \"{guess}\", max_iter: {}, poly: \"{poly}\"}}",
        config.max_iter
    );
    Ok(LaguerreReport {
        backward_error: c_abs(&px),
        root: guess,
        forward_error: delta_norm,
        iterations: config.max_iter,
        failed: true,
        termination: Termination::MaxIter,
    })
}

/// Laguerre step `dx`, such that the next guess is `x - dx`.
///
/// Of the two roots of the local quadratic model, the step goes towards the
/// one with the larger denominator, i.e. the closest one.
fn compute_delta<T: RealScalar>(
    px: Complex<T>,
    pdx: Complex<T>,
    pddx: Complex<T>,
    n: &T,
    n_minus_one: &T,
) -> Complex<T> {
    let l = c_div(pdx, px.clone());
    let l2 = l.clone() * l.clone();
    let m = l2.clone() - c_div(pddx, px);
    let s = c_sqrt((m.scale(n.clone()) - l2).scale(n_minus_one.clone()));

    let denom_plus = l.clone() + s.clone();
    let denom_minus = l - s;
    let denom = if c_abs(&denom_plus) >= c_abs(&denom_minus) {
        denom_plus
    } else {
        denom_minus
    };
    c_div(Complex::from(n.clone()), denom)
}

/// `d1` and `d2` must have the sizes of the first and second derivative of
/// `poly`, which must not be a constant.
fn check_derivatives<T: RealScalar>(
    poly: &Poly<T>,
    d1: &Poly<T>,
    d2: &Poly<T>,
) -> Result<(), InvalidInput> {
    if poly.degree_raw() == 0 {
        return Err(InvalidInput::ConstantPolynomial);
    }
    for (order, expected, found) in [
        (1, poly.size() - 1, d1.size()),
        (2, (d1.size() - 1).max(1), d2.size()),
    ] {
        if expected != found {
            return Err(InvalidInput::DerivativeMismatch {
                order,
                expected,
                found,
            });
        }
    }
    Ok(())
}
