use std::fmt;

/// The outcome of asking an open method (Newton-Raphson or secant) for a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Proposal {
    /// The next iterate the method suggests.
    Candidate(f64),

    /// The step could not be computed.
    Degenerate(Degeneracy),
}

/// Why an open-method step could not be computed.
///
/// Degeneracies are signals, not failures: the hybrid solver reacts to them
/// by switching method. Only the fixed-method solvers turn them into errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Degeneracy {
    /// `df(y) = 0` during a Newton-Raphson step.
    ZeroDerivative { y: f64 },

    /// `f(y_curr) = f(y_prev)` during a secant step.
    FlatSecant { y_prev: f64, y_curr: f64 },
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDerivative { y } => write!(f, "zero derivative at y = {y}"),
            Self::FlatSecant { y_prev, y_curr } => {
                write!(f, "flat secant: f({y_prev}) = f({y_curr})")
            }
        }
    }
}
