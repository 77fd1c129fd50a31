use std::fmt;

use crate::equation::{Bracket, Degeneracy};

/// The method that produced an accepted step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    NewtonRaphson,
    Secant,
    BrentDekker,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NewtonRaphson => "Newton-Raphson",
            Self::Secant => "secant",
            Self::BrentDekker => "Brent-Dekker",
        })
    }
}

/// Why the driver replaced the method it would normally use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fallback {
    /// The open method could not compute a step.
    Degenerate(Degeneracy),

    /// The open method proposed a point outside the bracket, or a non-finite
    /// one.
    OutsideBracket { candidate: f64, method: Method },

    /// The iterate stopped moving while the bracket is still wide.
    Stalled,
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degenerate(cause) => write!(f, "{cause}"),
            Self::OutsideBracket { candidate, method } => {
                write!(f, "{method} candidate {candidate} outside bracket")
            }
            Self::Stalled => f.write_str("stalled inside a wide bracket"),
        }
    }
}

/// Event emitted by the hybrid driver for each accepted step.
///
/// `bracket` is the bracket the step was checked against, before the new
/// point updates it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Method that produced `y`.
    pub method: Method,
    /// Set when `method` replaced the normal choice.
    pub fallback: Option<Fallback>,
    /// The accepted iterate.
    pub y: f64,
    /// Residual `f(y)`.
    pub residual: f64,
    /// Bracket before this step, if one is known.
    pub bracket: Option<Bracket>,
    /// Relative change of this step.
    pub relative_error: f64,
}
