//! Built-in functions the CLI can invert.
//!
//! Each entry supplies `f` and its analytic derivative `df` as
//! [`ScalarFunction`](invert_core::ScalarFunction) values.

use std::{f64::consts::PI, fmt};

use invert_core::{DomainError, Fallible};

use crate::error::{CliError, Result};

/// Gravitational constant in CGS units.
pub const G: f64 = 6.6743e-8;

/// A boxed fallible scalar function.
pub type BoxedFn = Box<dyn Fn(f64) -> std::result::Result<f64, DomainError> + Send + Sync>;

/// A function and its derivative, ready for the solvers.
pub struct Pair {
    pub f: Fallible<BoxedFn>,
    pub df: Fallible<BoxedFn>,
}

impl Pair {
    fn new<F, D>(f: F, df: D) -> Self
    where
        F: Fn(f64) -> std::result::Result<f64, DomainError> + Send + Sync + 'static,
        D: Fn(f64) -> std::result::Result<f64, DomainError> + Send + Sync + 'static,
    {
        Self {
            f: Fallible(Box::new(f)),
            df: Fallible(Box::new(df)),
        }
    }
}

/// The functions the CLI knows by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Ryr,
    Sqrt2,
    DoubleRoot,
    Dottie,
}

impl Function {
    pub const ALL: [Function; 4] = [
        Function::Ryr,
        Function::Sqrt2,
        Function::DoubleRoot,
        Function::Dottie,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Function::Ryr => "ryr",
            Function::Sqrt2 => "sqrt2",
            Function::DoubleRoot => "double-root",
            Function::Dottie => "dottie",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Function::Ryr => {
                "magnetized density profile y⁶ - C1·exp(C2(1 - y))·exp(C3(y⁻² - y)), y > 0"
            }
            Function::Sqrt2 => "y² - 2",
            Function::DoubleRoot => "(y + 3)(y - 1)², simple root at -3 and double root at 1",
            Function::Dottie => "cos y - y",
        }
    }

    /// Finds a function by name.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::UnknownFunction`] listing the known names.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|function| function.name() == name)
            .ok_or_else(|| CliError::UnknownFunction {
                name: name.to_owned(),
                available: Self::ALL.map(Function::name).to_vec(),
            })
    }

    /// Builds `f` and `df`; `params` only affects [`Function::Ryr`].
    #[must_use]
    pub fn pair(self, params: &RyrParams) -> Pair {
        match self {
            Function::Ryr => {
                let ryr = Ryr::new(params);
                Pair::new(move |y| ryr.value(y), move |y| ryr.slope(y))
            }
            Function::Sqrt2 => Pair::new(|y| Ok(y * y - 2.0), |y| Ok(2.0 * y)),
            Function::DoubleRoot => Pair::new(
                |y| Ok((y + 3.0) * (y - 1.0).powi(2)),
                |y| Ok((y - 1.0) * (3.0 * y + 5.0)),
            ),
            Function::Dottie => Pair::new(|y| Ok(y.cos() - y), |y| Ok(-y.sin() - 1.0)),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Physical parameters of the `ryr` profile, in CGS units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RyrParams {
    /// Stellar mass `M`.
    pub mass: f64,
    /// Stellar radius `R`.
    pub radius: f64,
    /// Scale length `a`.
    pub a: f64,
    /// Twist `alpha`.
    pub alpha: f64,
    /// Field strength `B`.
    pub b: f64,
    /// Base density `rho`.
    pub rho: f64,
}

impl Default for RyrParams {
    fn default() -> Self {
        Self {
            mass: 2.7839e33,
            radius: 1.2e6,
            a: 3e9,
            alpha: 6.283_185_307_18,
            b: 813_473_751_950_763.0 * (4.0 * PI).sqrt(),
            rho: 316_094_286_571.965_94,
        }
    }
}

/// The `ryr` profile reduced to its three constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ryr {
    c1: f64,
    c2: f64,
    c3: f64,
}

impl Ryr {
    #[must_use]
    pub fn new(params: &RyrParams) -> Self {
        let a2 = params.a * params.a;
        Self {
            c1: 8.0 * PI * params.rho * a2 / (params.b * params.b),
            c2: -G * params.mass / (params.radius * a2),
            c3: params.alpha * params.alpha * params.radius * params.radius / (2.0 * a2),
        }
    }

    #[must_use]
    pub fn constants(&self) -> [f64; 3] {
        [self.c1, self.c2, self.c3]
    }

    /// Evaluates `y⁶ - C1·exp(C2(1 - y))·exp(C3(y⁻² - y))`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] for `y <= 0`.
    pub fn value(&self, y: f64) -> std::result::Result<f64, DomainError> {
        Self::check(y)?;
        Ok(y.powi(6) - self.c1 * self.envelope(y))
    }

    /// Evaluates the derivative of [`value`](Self::value).
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] for `y <= 0`.
    pub fn slope(&self, y: f64) -> std::result::Result<f64, DomainError> {
        Self::check(y)?;
        let chain = -self.c2 + self.c3 * (-1.0 - 2.0 / y.powi(3));
        Ok(6.0 * y.powi(5) - self.c1 * self.envelope(y) * chain)
    }

    fn envelope(&self, y: f64) -> f64 {
        (self.c2 * (1.0 - y)).exp() * (self.c3 * (y.powi(-2) - y)).exp()
    }

    fn check(y: f64) -> std::result::Result<(), DomainError> {
        if y <= 0.0 {
            return Err(DomainError::new(y, "ryr is defined only for y > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use invert_core::ScalarFunction;
    use invert_solvers::equation::{Config, hybrid};

    #[test]
    fn looks_up_every_name() {
        for function in Function::ALL {
            assert_eq!(Function::from_name(function.name()).expect("known"), function);
        }
        assert!(matches!(
            Function::from_name("nope"),
            Err(CliError::UnknownFunction { available, .. }) if available.len() == 4
        ));
    }

    #[test]
    fn ryr_constants_match_defaults() {
        let [c1, c2, c3] = Ryr::new(&RyrParams::default()).constants();
        assert_relative_eq!(c1, 8.598, max_relative = 1e-3);
        assert_relative_eq!(c2, -17.205, max_relative = 1e-3);
        assert_relative_eq!(c3, 3.158e-6, max_relative = 1e-3);
    }

    #[test]
    fn ryr_rejects_non_positive_y() {
        let ryr = Ryr::new(&RyrParams::default());
        assert!(ryr.value(0.0).is_err());
        assert!(ryr.slope(-1.0).is_err());
        assert!(ryr.value(1.0).is_ok());
    }

    #[test]
    fn derivatives_match_finite_differences() {
        let params = RyrParams::default();
        let h = 1e-6;
        for function in Function::ALL {
            let pair = function.pair(&params);
            for y in [0.7, 1.3, 2.0] {
                let above = pair.f.call(y + h).expect("in domain");
                let below = pair.f.call(y - h).expect("in domain");
                let numeric = (above - below) / (2.0 * h);
                let analytic = pair.df.call(y).expect("in domain");
                assert_relative_eq!(analytic, numeric, max_relative = 1e-5, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn ryr_inverts_from_the_default_guess() {
        let pair = Function::Ryr.pair(&RyrParams::default());
        let solution =
            hybrid::full_inversion_unobserved(&pair.f, &pair.df, 1.0, None, &Config::default())
                .expect("converges");

        assert!(solution.root > 0.78 && solution.root < 0.81);
        assert!(solution.residual.abs() < 1e-6);
    }
}
