use invert_core::ScalarFunction;

use crate::equation::{
    Bracket, Config, Error, Proposal, brent::BrentDekker, derivative, newton, secant,
};

use super::{Fallback, Method, state::IterationState};

/// The point the driver will evaluate next and how it was chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Selection {
    pub(super) method: Method,
    pub(super) fallback: Option<Fallback>,
    pub(super) y: f64,
}

/// Chooses the next iterate.
///
/// Anything the open methods cannot deliver inside the bracket becomes a
/// Brent-Dekker step. Without a bracket there is nothing to fall back on, so
/// a degenerate or non-finite step ends the solve.
pub(super) fn select<D: ScalarFunction>(
    df: &D,
    state: &IterationState,
    bracket: Option<&Bracket>,
    stepper: &BrentDekker,
    config: &Config,
    iter: usize,
) -> Result<Selection, Error> {
    let Some(bracket) = bracket else {
        return match open_method(df, state, None, config)? {
            Ok(selection) => Ok(selection),
            Err(Fallback::Degenerate(cause)) => Err(Error::DegenerateStep {
                y: state.current.y,
                error: state.relative_error,
                iters: iter,
                cause,
            }),
            Err(Fallback::OutsideBracket { candidate, .. }) => Err(Error::NonFiniteValue {
                y: state.current.y,
                value: candidate,
            }),
            Err(Fallback::Stalled) => Err(Error::NonConvergence {
                y: state.current.y,
                error: state.relative_error,
                iters: iter,
            }),
        };
    };

    if state.relative_error < config.tol() && !bracket.is_converged(config.tol()) {
        return Ok(brent(bracket, stepper, Fallback::Stalled));
    }

    match open_method(df, state, Some(bracket), config)? {
        Ok(selection) => Ok(selection),
        Err(fallback) => Ok(brent(bracket, stepper, fallback)),
    }
}

/// Proposes a secant or Newton-Raphson step.
///
/// Secant while the latest relative change exceeds the switch threshold,
/// Newton-Raphson otherwise. A zero derivative is retried as a secant step
/// when a previous iterate exists.
fn open_method<D: ScalarFunction>(
    df: &D,
    state: &IterationState,
    bracket: Option<&Bracket>,
    config: &Config,
) -> Result<Result<Selection, Fallback>, Error> {
    let current = state.current;

    if let Some(previous) = state.previous {
        if state.relative_error > config.switch_threshold() {
            return Ok(admit(Method::Secant, secant::propose(previous, current), bracket));
        }
    }

    let slope = derivative(df, current.y)?;
    let tangent = admit(
        Method::NewtonRaphson,
        newton::propose(current.y, current.residual, slope),
        bracket,
    );

    Ok(match (tangent, state.previous) {
        (Err(Fallback::Degenerate(cause)), Some(previous)) => {
            admit(Method::Secant, secant::propose(previous, current), bracket).map(|selection| {
                Selection {
                    fallback: Some(Fallback::Degenerate(cause)),
                    ..selection
                }
            })
        }
        (tangent, _) => tangent,
    })
}

/// Accepts a finite candidate inside the bracket, or names the fallback.
fn admit(
    method: Method,
    proposal: Proposal,
    bracket: Option<&Bracket>,
) -> Result<Selection, Fallback> {
    match proposal {
        Proposal::Degenerate(cause) => Err(Fallback::Degenerate(cause)),
        Proposal::Candidate(y) if y.is_finite() && bracket.is_none_or(|b| b.contains(y)) => {
            Ok(Selection {
                method,
                fallback: None,
                y,
            })
        }
        Proposal::Candidate(candidate) => Err(Fallback::OutsideBracket { candidate, method }),
    }
}

fn brent(bracket: &Bracket, stepper: &BrentDekker, fallback: Fallback) -> Selection {
    Selection {
        method: Method::BrentDekker,
        fallback: Some(fallback),
        y: stepper.propose(bracket).y,
    }
}
