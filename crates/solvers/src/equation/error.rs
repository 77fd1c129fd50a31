use std::error::Error as StdError;

use thiserror::Error;

use super::{BracketError, ConfigError, Degeneracy};

/// Errors that can occur while solving an equation.
///
/// Numeric degeneracies are only errors when a solver has no safe next step.
/// Every terminal variant carries the last iterate, error and iteration count
/// so a failure can be diagnosed without re-running the solve.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("derivative is zero at y = {y} (iteration {iters})")]
    ZeroDerivative { y: f64, iters: usize },

    #[error("secant is flat: f({y_prev}) = f({y_curr}) (iteration {iters})")]
    DegenerateSecant {
        y_prev: f64,
        y_curr: f64,
        iters: usize,
    },

    #[error("{cause} and no bracket to fall back on (y = {y}, error = {error}, iteration {iters})")]
    DegenerateStep {
        y: f64,
        error: f64,
        iters: usize,
        cause: Degeneracy,
    },

    #[error("did not converge in {iters} iterations: last y = {y}, last error = {error}")]
    NonConvergence { y: f64, error: f64, iters: usize },

    #[error("function evaluation failed")]
    Function(#[source] Box<dyn StdError + Send + Sync>),

    #[error("derivative evaluation failed")]
    Derivative(#[source] Box<dyn StdError + Send + Sync>),

    #[error("non-finite value {value} at y = {y}")]
    NonFiniteValue { y: f64, value: f64 },
}

impl Error {
    pub(crate) fn function<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Function(Box::new(err))
    }

    pub(crate) fn derivative<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Derivative(Box::new(err))
    }
}
