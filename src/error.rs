use thiserror::Error;

/// Malformed arguments, detected before any iteration is run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidInput {
    #[error("polynomial must have at least one coefficient")]
    EmptyPolynomial,

    #[error("cannot search for the root of a constant polynomial")]
    ConstantPolynomial,

    /// The derivatives passed alongside a polynomial do not have the size of
    /// its first or second derivative.
    #[error("derivative {order} should have {expected} coefficients, found {found}")]
    DerivativeMismatch {
        order: usize,
        expected: usize,
        found: usize,
    },

    #[error("max_iter must be at least 1")]
    ZeroMaxIter,

    #[error("{name} must be finite and non-negative")]
    BadTolerance { name: &'static str },
}
