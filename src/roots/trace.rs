use std::fmt::Display;

use num::Complex;

use crate::RealScalar;

/// Diagnostics of one Laguerre step, taken after the step has been applied.
#[derive(Clone, Debug, PartialEq)]
pub struct LaguerreStep<T> {
    /// 1-based index of the step
    pub step: usize,

    /// Root estimate after the step
    pub root: Complex<T>,

    /// Magnitude of the step, the forward error estimate
    pub delta_norm: T,

    /// Magnitude of the polynomial at the new estimate, the backward error
    /// estimate
    pub px_norm: T,
}

impl<T: RealScalar> Display for LaguerreStep<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>4}  re: {}  im: {}  |dx|: {}  |p(x)|: {}",
            self.step, self.root.re, self.root.im, self.delta_norm, self.px_norm
        )
    }
}

/// Receives one record per step taken by a root finder.
pub trait TraceSink<T: RealScalar> {
    fn record(&mut self, step: &LaguerreStep<T>);
}

/// Keeps the whole history of a run.
impl<T: RealScalar> TraceSink<T> for Vec<LaguerreStep<T>> {
    fn record(&mut self, step: &LaguerreStep<T>) {
        self.push(step.clone());
    }
}

/// Forwards every step to the [`log`] facade.
#[derive(Clone, Copy, Debug)]
pub struct LogTrace {
    level: log::Level,
}

impl LogTrace {
    #[must_use]
    pub const fn new(level: log::Level) -> Self {
        Self { level }
    }
}

impl Default for LogTrace {
    fn default() -> Self {
        Self::new(log::Level::Debug)
    }
}

impl<T: RealScalar> TraceSink<T> for LogTrace {
    fn record(&mut self, step: &LaguerreStep<T>) {
        log::log!(
            self.level,
            "laguerre {{step: {}, re: \"{}\", im: \"{}\", delta: \"{}\", residual: \"{}\"}}",
            step.step,
            step.root.re,
            step.root.im,
            step.delta_norm,
            step.px_norm
        );
    }
}
