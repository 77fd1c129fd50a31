use std::convert::Infallible;

/// A scalar function `y ↦ f(y)` that solvers evaluate.
///
/// Functions must be deterministic, always producing the same result for a
/// given input. Solvers borrow them for the duration of one solve and never
/// mutate them, so a function that is also `Sync` can be shared by solves
/// running in parallel.
///
/// Any `Fn(f64) -> f64` closure or function pointer is a `ScalarFunction`
/// that never fails. Wrap a closure returning `Result` in [`Fallible`] to
/// report domain failures.
pub trait ScalarFunction {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `y`.
    ///
    /// # Errors
    ///
    /// Each function defines its own `Error` type to represent inputs outside
    /// its valid range.
    fn call(&self, y: f64) -> Result<f64, Self::Error>;
}

impl<F> ScalarFunction for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, y: f64) -> Result<f64, Self::Error> {
        Ok(self(y))
    }
}

/// Adapts a closure returning `Result<f64, E>` into a [`ScalarFunction`].
///
/// ```
/// use invert_core::{DomainError, Fallible, ScalarFunction};
///
/// let ln = Fallible(|y: f64| {
///     if y > 0.0 {
///         Ok(y.ln())
///     } else {
///         Err(DomainError::new(y, "ln requires y > 0"))
///     }
/// });
///
/// assert!(ln.call(1.0).is_ok());
/// assert!(ln.call(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> ScalarFunction for Fallible<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, y: f64) -> Result<f64, Self::Error> {
        (self.0)(y)
    }
}
