//! Macros for reducing doc comment boilerplate.

/// Documents panics due to absurdly large polynomials
macro_rules! panic_absurd_size {
    () => {
        r"May theoretically panic for absurdly large polynomials, however such polynomials will likely not fit in memory anyway.\n\n"
    }
}
pub(crate) use panic_absurd_size;

/// Default explanation for [`crate::roots::Error::InvalidInput`] errors.
macro_rules! errors_invalid_input {
    () => {
        r"- `InvalidInput`: the polynomial is constant, the derivatives do not match it, `max_iter` is zero or a tolerance is negative or not finite. Nothing is evaluated in this case.\n"
    };
}
pub(crate) use errors_invalid_input;

/// Default explanation for [`crate::roots::Error::NoConverge`] errors.
macro_rules! errors_no_converge {
    () => {
        r"- `NoConverge`: the root finder did not converge within the given constraints. The best guess so far is returned with the error.\n"
    };
}
pub(crate) use errors_no_converge;
