//! Newton-Raphson iteration.
//!
//! Each step follows the tangent at the current iterate:
//!
//! ```text
//! y_new = y - f(y) / df(y)
//! ```
//!
//! Convergence is quadratic near a simple root, but there is no global
//! guarantee and no notion of a bracket. A zero derivative makes the step
//! undefined; [`propose`] reports it as [`Degeneracy::ZeroDerivative`] and
//! [`solve`] turns it into [`Error::ZeroDerivative`]. Use the
//! [`hybrid`](super::hybrid) solver to recover from it instead.

use invert_core::{Observer, ScalarFunction};

use super::{
    Action, Config, Degeneracy, Error, Point, Proposal, Solution, Status,
    convergence::relative_change, derivative, evaluate,
};

/// Iteration event emitted by the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// The iterate the step started from.
    pub from: Point,
    /// Derivative at `from`.
    pub slope: f64,
    /// The accepted iterate.
    pub point: Point,
    /// Relative change of this step.
    pub error: f64,
}

/// Computes a Newton-Raphson step from an evaluated iterate.
#[must_use]
pub fn propose(y: f64, residual: f64, slope: f64) -> Proposal {
    if slope == 0.0 {
        Proposal::Degenerate(Degeneracy::ZeroDerivative { y })
    } else {
        Proposal::Candidate(y - residual / slope)
    }
}

/// Evaluates `f` and `df` at `y` and proposes the next iterate.
///
/// # Errors
///
/// Returns an error if `f` or `df` fails or returns a non-finite value.
pub fn step<F, D>(f: &F, df: &D, y: f64) -> Result<Proposal, Error>
where
    F: ScalarFunction,
    D: ScalarFunction,
{
    let point = evaluate(f, y)?;
    let slope = derivative(df, y)?;
    Ok(propose(point.y, point.residual, slope))
}

/// Finds a root of `f` with Newton-Raphson iteration from `y0`.
///
/// The observer sees every accepted step and may stop the solve early.
///
/// # Errors
///
/// Returns an error if the config is invalid, the derivative vanishes, the
/// iteration budget runs out, or `f`/`df` fails.
pub fn solve<F, D, Obs>(
    f: &F,
    df: &D,
    y0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarFunction,
    D: ScalarFunction,
    Obs: Observer<Event, Action>,
{
    let mut current = evaluate(f, y0)?;
    if current.residual == 0.0 {
        return Ok(Solution::converged(current, 0.0, 0));
    }

    let mut error = f64::INFINITY;
    for iter in 1..=config.max_iters() {
        let slope = derivative(df, current.y)?;
        let y_new = match propose(current.y, current.residual, slope) {
            Proposal::Candidate(y) => y,
            Proposal::Degenerate(_) => {
                return Err(Error::ZeroDerivative {
                    y: current.y,
                    iters: iter,
                });
            }
        };

        let next = evaluate(f, y_new)?;
        error = if next.residual == 0.0 {
            0.0
        } else {
            relative_change(current.y, next.y)
        };

        let event = Event {
            iter,
            from: current,
            slope,
            point: next,
            error,
        };
        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Ok(Solution::new(Status::StoppedByObserver, next, error, iter));
                }
            }
        }

        current = next;
        if error < config.tol() {
            return Ok(Solution::converged(current, error, iter));
        }
    }

    Err(Error::NonConvergence {
        y: current.y,
        error,
        iters: config.max_iters(),
    })
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F, D>(f: &F, df: &D, y0: f64, config: &Config) -> Result<Solution, Error>
where
    F: ScalarFunction,
    D: ScalarFunction,
{
    solve(f, df, y0, config, ())
}
