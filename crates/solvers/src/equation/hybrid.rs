//! Hybrid Newton-Raphson / secant / Brent-Dekker inversion.
//!
//! # Algorithm
//!
//! Each iteration picks a method from the relative change of the latest step:
//!
//! - above the switch threshold (and with two iterates known), a secant step
//! - otherwise a Newton-Raphson step
//!
//! When a bracket is known, every candidate must land inside it. A candidate
//! that is degenerate, non-finite or outside the bracket is replaced by a
//! Brent-Dekker step, and an iterate that has stopped moving while the
//! bracket is still wide gets one too. A zero derivative is first retried as
//! a secant step. Without a bracket, a degenerate step is a
//! [`DegenerateStep`](super::Error::DegenerateStep) error.
//!
//! A bracket may be given up front or is established as soon as two
//! consecutive iterates have residuals of opposite sign. Once known it stays
//! valid and never widens. A given bracket is validated before anything is
//! returned, and a root at `y0` outside it is not reported.
//!
//! # Convergence
//!
//! The solve converges when a residual is exactly zero, or when the relative
//! change drops below `tol` and any known bracket is also narrower than
//! `tol · max(|midpoint|, 1)`. With a bracket, the reported root is the
//! endpoint with the smaller residual.
//!
//! # Observer Events
//!
//! One [`Event`] per accepted step, emitted before the bracket is updated.
//! Returning [`Action::StopEarly`] ends the solve at that step.

mod batch;
mod event;
mod select;
mod state;


pub use batch::invert_all;
pub use event::{Event, Fallback, Method};

use invert_core::{Observer, ScalarFunction};
use tracing::{debug, trace};

use super::{
    Action, Bracket, Config, Error, Solution, Status, bracket::Bounds, brent::BrentDekker,
    convergence::relative_change, evaluate,
};

use select::select;
use state::IterationState;

/// Finds a root of `f` starting from `y0`, optionally within `bracket`.
///
/// See the [module docs](self) for method selection and fallbacks.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, a step degenerates with no
/// bracket to fall back on, the iteration budget runs out, or `f`/`df`
/// fails.
pub fn full_inversion<F, D, Obs>(
    f: &F,
    df: &D,
    y0: f64,
    bracket: Option<[f64; 2]>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarFunction,
    D: ScalarFunction,
    Obs: Observer<Event, Action>,
{
    let bounds = bracket.map(Bounds::new).transpose()?;

    let start = evaluate(f, y0)?;

    let mut bracket = match bounds {
        Some(bounds) => {
            let left = evaluate(f, bounds.left)?;
            if left.residual == 0.0 {
                return Ok(Solution::converged(left, 0.0, 0));
            }
            let right = evaluate(f, bounds.right)?;
            if right.residual == 0.0 {
                return Ok(Solution::converged(right, 0.0, 0));
            }
            let mut bracket = Bracket::new(left, right)?;
            if bracket.contains(start.y) {
                if start.residual == 0.0 {
                    return Ok(Solution::converged(start, 0.0, 0));
                }
                bracket.update(start)?;
            }
            Some(bracket)
        }
        None if start.residual == 0.0 => return Ok(Solution::converged(start, 0.0, 0)),
        None => None,
    };

    let mut state = IterationState::new(start);
    let mut stepper = BrentDekker::new(config.tol());

    for iter in 1..=config.max_iters() {
        let selection = select(df, &state, bracket.as_ref(), &stepper, config, iter)?;
        if let Some(fallback) = selection.fallback {
            debug!(iter, method = %selection.method, %fallback, "hybrid fallback");
        }

        let point = evaluate(f, selection.y)?;
        let error = if point.residual == 0.0 {
            0.0
        } else {
            relative_change(state.current.y, point.y)
        };
        trace!(iter, method = %selection.method, y = point.y, residual = point.residual, error);

        let event = Event {
            iter,
            method: selection.method,
            fallback: selection.fallback,
            y: point.y,
            residual: point.residual,
            bracket,
            relative_error: error,
        };
        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Ok(Solution::new(Status::StoppedByObserver, point, error, iter));
                }
            }
        }

        match bracket.as_mut() {
            Some(bracket) => bracket.update(point)?,
            None => bracket = Bracket::new(state.current, point).ok(),
        }

        // Brent-Dekker history only spans consecutive Brent-Dekker steps.
        match selection.method {
            Method::BrentDekker => stepper.accept(state.current, point),
            _ => stepper = BrentDekker::new(config.tol()),
        }
        state.advance(point, error);

        if point.residual == 0.0 {
            return Ok(Solution::converged(point, 0.0, iter));
        }
        match bracket {
            None if error < config.tol() => {
                return Ok(Solution::converged(point, error, iter));
            }
            Some(bracket) if error < config.tol() && bracket.is_converged(config.tol()) => {
                return Ok(Solution::converged(bracket.best(), error, iter));
            }
            _ => {}
        }
    }

    Err(Error::NonConvergence {
        y: state.current.y,
        error: state.relative_error,
        iters: config.max_iters(),
    })
}

/// Runs the hybrid inversion without observation.
///
/// # Errors
///
/// See [`full_inversion`].
pub fn full_inversion_unobserved<F, D>(
    f: &F,
    df: &D,
    y0: f64,
    bracket: Option<[f64; 2]>,
    config: &Config,
) -> Result<Solution, Error>
where
    F: ScalarFunction,
    D: ScalarFunction,
{
    full_inversion(f, df, y0, bracket, config, ())
}
