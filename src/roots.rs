//! Root polishing.
//!
//! The root finders in this module refine a single initial guess. They do not
//! deflate or search for every root, and they never retry on their own: if a
//! run fails, the caller decides whether to restart from another guess or at
//! a higher working precision.

use num::Complex;

use crate::{
    util::doc_macros::{errors_invalid_input, errors_no_converge},
    InvalidInput, Poly, RealScalar,
};

mod laguerre;
pub use laguerre::{laguerre, LaguerreConfig, LaguerreReport, Termination};
mod trace;
pub use trace::{LaguerreStep, LogTrace, TraceSink};

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error<T> {
    #[error("root finder did not converge within the given constraints")]
    NoConverge(T),

    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

pub type Result<T> = std::result::Result<Complex<T>, Error<Complex<T>>>;

impl<T: RealScalar> Poly<T> {
    /// Polish a single root with Laguerre's method, starting from
    /// `initial_guess`. The first and second derivatives are computed here,
    /// use [`laguerre`] directly to reuse them across calls.
    ///
    /// # Errors
    #[doc = errors_invalid_input!()]
    pub fn laguerre(
        &self,
        initial_guess: Complex<T>,
        config: &LaguerreConfig<T>,
        trace: Option<&mut dyn TraceSink<T>>,
    ) -> std::result::Result<LaguerreReport<T>, Error<Complex<T>>> {
        let mut diffs = LazyDerivatives::new(self);
        let derivatives = diffs.first_n(2);
        laguerre(
            self,
            &derivatives[0],
            &derivatives[1],
            initial_guess,
            config,
            trace,
        )
    }

    /// Like [`Poly::laguerre`], but only returns the root, turning a failure
    /// to converge into an error.
    ///
    /// # Errors
    #[doc = errors_invalid_input!()]
    #[doc = errors_no_converge!()]
    pub fn laguerre_root(&self, initial_guess: Complex<T>, config: &LaguerreConfig<T>) -> Result<T> {
        self.laguerre(initial_guess, config, None)?.into_root()
    }
}

/// This struct lazily computes derivatives upon request, so that they are only
/// used by methods that require them.
///
/// Many methods use derivatives, but they don't always need to compute them.
/// For ease of implementation, all methods that require derivatives can use
/// this one type.
pub struct LazyDerivatives<'a, T: RealScalar> {
    zeroth: &'a Poly<T>,
    first_and_higher: Vec<Poly<T>>,
}

impl<'a, T: RealScalar> LazyDerivatives<'a, T> {
    #[must_use]
    pub const fn new(poly: &'a Poly<T>) -> Self {
        Self {
            zeroth: poly,
            first_and_higher: vec![],
        }
    }

    pub fn get_nth_derivative(&mut self, n: usize) -> &Poly<T> {
        if n == 0 {
            return self.zeroth;
        }
        &self.first_n(n)[n - 1]
    }

    /// Derivatives of order `1..=n`, computing the missing ones.
    pub fn first_n(&mut self, n: usize) -> &[Poly<T>] {
        for _ in self.first_and_higher.len()..n {
            let next_diff = self
                .first_and_higher
                .last()
                .unwrap_or(self.zeroth)
                .diff();
            self.first_and_higher.push(next_diff);
        }
        &self.first_and_higher[..n]
    }
}

#[cfg(test)]
mod test {
    use super::{Error, LazyDerivatives};
    use crate::InvalidInput;

    #[test]
    fn error_variants() {
        let err: Error<f64> = InvalidInput::ZeroMaxIter.into();
        match err {
            Error::InvalidInput(e) => assert_eq!(e, InvalidInput::ZeroMaxIter),
            Error::NoConverge(_) => panic!("expected invalid input"),
        }
        assert_eq!(
            Error::<f64>::from(InvalidInput::ConstantPolynomial).to_string(),
            "invalid input: cannot search for the root of a constant polynomial"
        );
        assert_eq!(
            Error::NoConverge(1.5).to_string(),
            "root finder did not converge within the given constraints"
        );
    }

    #[test]
    fn lazy_derivative() {
        let poly = poly![1.0, 2.0, 3.0, 4.0];
        let mut lazy = LazyDerivatives::new(&poly);
        assert_eq!(*lazy.get_nth_derivative(0), poly![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(lazy.first_and_higher.len(), 0);
        assert_eq!(*lazy.get_nth_derivative(1), poly![2.0, 6.0, 12.0]);
        assert_eq!(lazy.first_and_higher.len(), 1);
        assert_eq!(*lazy.get_nth_derivative(2), poly![6.0, 24.0]);
        assert_eq!(lazy.first_and_higher.len(), 2);
        assert_eq!(*lazy.get_nth_derivative(3), poly![24.0]);
        assert_eq!(lazy.first_and_higher.len(), 3);
        assert_eq!(*lazy.get_nth_derivative(4), poly![0.0]);
        assert_eq!(lazy.first_and_higher.len(), 4);
    }

    #[test]
    fn lazy_derivative_out_of_order() {
        let poly = poly![1.0, 2.0, 3.0, 4.0];
        let mut lazy = LazyDerivatives::new(&poly);
        assert_eq!(*lazy.get_nth_derivative(2), poly![6.0, 24.0]);
        assert_eq!(lazy.first_and_higher.len(), 2);
        assert_eq!(*lazy.get_nth_derivative(0), poly![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(lazy.first_and_higher.len(), 2);
        assert_eq!(*lazy.get_nth_derivative(3), poly![24.0]);
        assert_eq!(lazy.first_and_higher.len(), 3);
        assert_eq!(lazy.first_n(2), &[poly![2.0, 6.0, 12.0], poly![6.0, 24.0]]);
        assert_eq!(lazy.first_and_higher.len(), 3);
    }
}
