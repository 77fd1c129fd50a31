//! Brent-Dekker root finding within a bracket.
//!
//! # Algorithm
//!
//! Each step tries inverse quadratic interpolation through the two bracket
//! endpoints and the previous iterate, or linear interpolation when only two
//! distinct points are known. The interpolated point is rejected in favor of
//! the bracket midpoint whenever it strays too far toward the contrapoint or
//! fails to shrink the step fast enough. See [`BrentDekker`] for the exact
//! rules.
//!
//! Every point lies inside the current bracket and the bracket never widens,
//! so the method converges for any continuous function with a valid bracket.
//!
//! # Convergence
//!
//! The solve converges when the bracket width drops below
//! `tol · max(|midpoint|, 1)` or a residual is exactly zero. The reported
//! root is the bracket endpoint with the smaller residual.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per evaluated point. The event carries the
//! bracket the point was chosen from, before the point updates it.

mod stepper;


pub use stepper::{BrentDekker, Step, StepKind};

use invert_core::{Observer, ScalarFunction};

use super::{Action, Bracket, Config, Error, Point, Solution, Status, bracket::Bounds, evaluate};

/// Iteration event emitted by the Brent-Dekker solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// How the point was chosen.
    pub kind: StepKind,
    /// The bracket the point was chosen from.
    pub bracket: Bracket,
    /// The evaluated point.
    pub point: Point,
    /// Relative bracket width after this point is applied.
    pub error: f64,
}

/// Finds a root of `f` inside `bracket` with Brent-Dekker steps.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, the iteration budget runs out,
/// or `f` fails.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarFunction,
    Obs: Observer<Event, Action>,
{
    let bounds = Bounds::new(bracket)?;

    let left = evaluate(f, bounds.left)?;
    if left.residual == 0.0 {
        return Ok(Solution::converged(left, 0.0, 0));
    }
    let right = evaluate(f, bounds.right)?;
    if right.residual == 0.0 {
        return Ok(Solution::converged(right, 0.0, 0));
    }

    let mut bracket = Bracket::new(left, right)?;
    let mut stepper = BrentDekker::new(config.tol());

    for iter in 1..=config.max_iters() {
        let step = stepper.propose(&bracket);
        let point = evaluate(f, step.y)?;

        let mut next = bracket;
        next.update(point)?;
        let error = if point.residual == 0.0 {
            0.0
        } else {
            next.relative_width()
        };

        let event = Event {
            iter,
            kind: step.kind,
            bracket,
            point,
            error,
        };
        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Ok(Solution::new(Status::StoppedByObserver, point, error, iter));
                }
            }
        }

        stepper.accept(bracket.best(), point);
        bracket = next;

        if point.residual == 0.0 {
            return Ok(Solution::converged(point, 0.0, iter));
        }
        if error < config.tol() {
            return Ok(Solution::converged(bracket.best(), error, iter));
        }
    }

    Err(Error::NonConvergence {
        y: bracket.best().y,
        error: bracket.relative_width(),
        iters: config.max_iters(),
    })
}

/// Runs Brent-Dekker without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: ScalarFunction>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, bracket, config, ())
}
