use invert_core::ScalarFunction;

use super::Error;

/// An iterate with its evaluated residual `f(y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The iterate.
    pub y: f64,

    /// The residual at `y`.
    pub residual: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(y: f64, residual: f64) -> Self {
        Self { y, residual }
    }
}

/// Evaluates `f` at `y`.
///
/// # Errors
///
/// Returns [`Error::Function`] if `f` fails (for example with a domain error),
/// or [`Error::NonFiniteValue`] if it returns NaN or an infinity.
pub fn evaluate<F: ScalarFunction>(f: &F, y: f64) -> Result<Point, Error> {
    let residual = f.call(y).map_err(Error::function)?;
    if !residual.is_finite() {
        return Err(Error::NonFiniteValue { y, value: residual });
    }
    Ok(Point::new(y, residual))
}

/// Evaluates the derivative `df` at `y`.
///
/// # Errors
///
/// Returns [`Error::Derivative`] if `df` fails, or [`Error::NonFiniteValue`]
/// if it returns NaN or an infinity.
pub fn derivative<D: ScalarFunction>(df: &D, y: f64) -> Result<f64, Error> {
    let value = df.call(y).map_err(Error::derivative)?;
    if !value.is_finite() {
        return Err(Error::NonFiniteValue { y, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use invert_core::{DomainError, Fallible};

    #[test]
    fn evaluates_closure() {
        let point = evaluate(&|y: f64| y * y - 2.0, 3.0).expect("finite");
        assert_eq!(point, Point::new(3.0, 7.0));
    }

    #[test]
    fn propagates_domain_error() {
        let f = Fallible(|y: f64| {
            if y > 0.0 {
                Ok(y.ln())
            } else {
                Err(DomainError::new(y, "ln requires y > 0"))
            }
        });

        let err = evaluate(&f, -1.0).expect_err("outside domain");
        assert!(matches!(err, Error::Function(_)));

        let err = derivative(&f, 0.0).expect_err("outside domain");
        assert!(matches!(err, Error::Derivative(_)));
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = evaluate(&|y: f64| 1.0 / y, 0.0).expect_err("infinite");
        assert!(matches!(err, Error::NonFiniteValue { y, .. } if y == 0.0));

        let err = derivative(&|_: f64| f64::NAN, 1.0).expect_err("nan");
        assert!(matches!(err, Error::NonFiniteValue { .. }));
    }
}
