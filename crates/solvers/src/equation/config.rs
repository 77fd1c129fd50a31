use thiserror::Error;

const DEFAULT_MAX_ITERS: usize = 100;
const DEFAULT_TOL: f64 = 1e-5;
const DEFAULT_SWITCH_THRESHOLD: f64 = 0.01;

/// Configuration shared by the equation solvers.
///
/// - `max_iters` bounds the number of accepted steps.
/// - `tol` is the convergence tolerance on the normalized change between
///   successive iterates, `|Δy| / max(|y|, 1)`. Bracketing solvers also
///   compare the bracket width against `tol · max(|y|, 1)`.
/// - `switch_threshold` is only used by the hybrid solver: above it the
///   iteration takes secant steps, at or below it Newton-Raphson steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tol: f64,
    switch_threshold: f64,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and positive")]
    Tol,

    #[error("switch_threshold must be finite and non-negative")]
    SwitchThreshold,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: DEFAULT_MAX_ITERS,
            tol: DEFAULT_TOL,
            switch_threshold: DEFAULT_SWITCH_THRESHOLD,
        }
    }
}

impl Config {
    /// Creates a config with the default switch threshold of `0.01`.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is non-finite or not positive.
    pub fn new(max_iters: usize, tol: f64) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol <= 0.0 {
            return Err(ConfigError::Tol);
        }

        Ok(Self {
            max_iters,
            tol,
            switch_threshold: DEFAULT_SWITCH_THRESHOLD,
        })
    }

    /// Returns a copy with a different secant/Newton switch threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if `threshold` is negative or non-finite.
    pub fn with_switch_threshold(self, threshold: f64) -> Result<Self, ConfigError> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::SwitchThreshold);
        }

        Ok(Self {
            switch_threshold: threshold,
            ..self
        })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Returns the relative error above which the hybrid solver uses secant steps.
    #[must_use]
    pub fn switch_threshold(&self) -> f64 {
        self.switch_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 100);
        assert_eq!(config.tol(), 1e-5);
        assert_eq!(config.switch_threshold(), 0.01);
        assert_eq!(Config::new(100, 1e-5), Ok(config));
    }

    #[test]
    fn rejects_bad_tolerance() {
        assert_eq!(Config::new(10, 0.0), Err(ConfigError::Tol));
        assert_eq!(Config::new(10, -1e-3), Err(ConfigError::Tol));
        assert_eq!(Config::new(10, f64::NAN), Err(ConfigError::Tol));
    }

    #[test]
    fn switch_threshold_is_configurable() {
        let config = Config::default()
            .with_switch_threshold(0.5)
            .expect("valid threshold");
        assert_eq!(config.switch_threshold(), 0.5);
        assert_eq!(config.tol(), 1e-5);

        assert_eq!(
            Config::default().with_switch_threshold(f64::INFINITY),
            Err(ConfigError::SwitchThreshold)
        );
    }

    #[test]
    fn zero_switch_threshold_is_allowed_but_negative_is_not() {
        let config = Config::default()
            .with_switch_threshold(0.0)
            .expect("zero is valid");
        assert_eq!(config.switch_threshold(), 0.0);

        assert_eq!(
            Config::default().with_switch_threshold(-0.1),
            Err(ConfigError::SwitchThreshold)
        );
    }
}
