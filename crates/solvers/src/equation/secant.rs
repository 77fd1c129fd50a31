//! Secant iteration.
//!
//! Each step follows the line through the two most recent iterates:
//!
//! ```text
//! y_new = y_curr - f(y_curr) · (y_curr - y_prev) / (f(y_curr) - f(y_prev))
//! ```
//!
//! No derivative is needed and convergence is superlinear near a simple root,
//! with no global guarantee. Equal residuals make the line flat; [`propose`]
//! reports it as [`Degeneracy::FlatSecant`] and [`solve`] turns it into
//! [`Error::DegenerateSecant`].

use invert_core::{Observer, ScalarFunction};

use super::{
    Action, Config, Degeneracy, Error, Point, Proposal, Solution, Status,
    convergence::relative_change, evaluate,
};

/// Iteration event emitted by the secant solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// The older of the two points defining the secant.
    pub previous: Point,
    /// The newer of the two points defining the secant.
    pub from: Point,
    /// The accepted iterate.
    pub point: Point,
    /// Relative change of this step.
    pub error: f64,
}

/// Computes a secant step from two evaluated iterates.
#[must_use]
pub fn propose(previous: Point, current: Point) -> Proposal {
    let rise = current.residual - previous.residual;
    if rise == 0.0 {
        return Proposal::Degenerate(Degeneracy::FlatSecant {
            y_prev: previous.y,
            y_curr: current.y,
        });
    }
    Proposal::Candidate(current.y - current.residual * (current.y - previous.y) / rise)
}

/// Evaluates `f` at `y_prev` and `y_curr` and proposes the next iterate.
///
/// # Errors
///
/// Returns an error if `f` fails or returns a non-finite value.
pub fn step<F: ScalarFunction>(f: &F, y_prev: f64, y_curr: f64) -> Result<Proposal, Error> {
    let previous = evaluate(f, y_prev)?;
    let current = evaluate(f, y_curr)?;
    Ok(propose(previous, current))
}

/// Finds a root of `f` with secant iteration from `y0` and `y1`.
///
/// The observer sees every accepted step and may stop the solve early.
///
/// # Errors
///
/// Returns an error if the secant becomes flat, the iteration budget runs
/// out, or `f` fails.
pub fn solve<F, Obs>(
    f: &F,
    y0: f64,
    y1: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarFunction,
    Obs: Observer<Event, Action>,
{
    let mut previous = evaluate(f, y0)?;
    if previous.residual == 0.0 {
        return Ok(Solution::converged(previous, 0.0, 0));
    }
    let mut current = evaluate(f, y1)?;
    if current.residual == 0.0 {
        return Ok(Solution::converged(current, 0.0, 0));
    }

    let mut error = relative_change(previous.y, current.y);
    for iter in 1..=config.max_iters() {
        let y_new = match propose(previous, current) {
            Proposal::Candidate(y) => y,
            Proposal::Degenerate(_) => {
                return Err(Error::DegenerateSecant {
                    y_prev: previous.y,
                    y_curr: current.y,
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
            previous,
            from: current,
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

        previous = current;
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

/// Runs secant iteration without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: ScalarFunction>(
    f: &F,
    y0: f64,
    y1: f64,
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, y0, y1, config, ())
}
