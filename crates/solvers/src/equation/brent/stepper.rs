use crate::equation::{Bracket, Point, convergence::scaled_tol};

/// How the stepper produced a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Inverse quadratic interpolation through three distinct points.
    InverseQuadratic,
    /// Linear interpolation between the bracket endpoints.
    Linear,
    /// The bracket midpoint.
    Bisection,
}

/// A point proposed by [`BrentDekker::propose`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub y: f64,
    pub kind: StepKind,
}

/// Brent-Dekker step selection within a bracket.
///
/// The stepper remembers the iterate before the latest one (the third point
/// for inverse quadratic interpolation) and the length of the latest step.
/// Both are fed through [`accept`](Self::accept) after every accepted step,
/// whichever method produced it.
///
/// An interpolated point is used only if it lies strictly between `b` and
/// `(3c + b) / 4`, where `b` is the endpoint with the smaller residual and
/// `c` the other endpoint, and if it moves less than half the latest step.
/// Otherwise the stepper bisects. Accepted steps shorter than
/// `2·ε·|b| + tol·max(|b|, 1)/2` are lengthened to that floor toward the
/// midpoint, so an approach from one side eventually crosses the root. A step
/// no longer than twice the floor is always followed by bisection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrentDekker {
    previous: Option<Point>,
    last_step: f64,
    tol: f64,
}

impl BrentDekker {
    /// Creates a stepper with no history.
    #[must_use]
    pub fn new(tol: f64) -> Self {
        Self {
            previous: None,
            last_step: f64::INFINITY,
            tol,
        }
    }

    /// Proposes the next point strictly inside `bracket`.
    #[must_use]
    pub fn propose(&self, bracket: &Bracket) -> Step {
        let b = bracket.best();
        let c = bracket.contrapoint();
        let midpoint = bracket.midpoint();

        let floor = 2.0 * f64::EPSILON * b.y.abs() + 0.5 * scaled_tol(self.tol, b.y);

        let interpolated = if self.last_step > 2.0 * floor {
            match self.previous.filter(|a| distinct(*a, b, c)) {
                Some(a) => inverse_quadratic(a, b, c).map(|y| (y, StepKind::InverseQuadratic)),
                None => linear(b, c).map(|y| (y, StepKind::Linear)),
            }
        } else {
            None
        };

        if let Some((y, kind)) = interpolated.filter(|&(y, _)| self.accepts(b, c, y)) {
            if (y - b.y).abs() >= floor {
                return Step { y, kind };
            }
            if floor < 0.5 * bracket.width() {
                return Step {
                    y: b.y + floor.copysign(midpoint - b.y),
                    kind,
                };
            }
        }

        Step {
            y: midpoint,
            kind: StepKind::Bisection,
        }
    }

    /// Records an accepted step from `from` to `to`.
    pub fn accept(&mut self, from: Point, to: Point) {
        self.previous = Some(from);
        self.last_step = (to.y - from.y).abs();
    }

    fn accepts(&self, b: Point, c: Point, y: f64) -> bool {
        let edge = 0.25 * (3.0 * c.y + b.y);
        let (lo, hi) = if edge < b.y { (edge, b.y) } else { (b.y, edge) };
        lo < y && y < hi && (y - b.y).abs() < 0.5 * self.last_step
    }
}

/// Returns true if `a` can serve as a third interpolation point with `b`, `c`.
#[allow(clippy::float_cmp)]
fn distinct(a: Point, b: Point, c: Point) -> bool {
    a.y != b.y
        && a.y != c.y
        && a.residual != b.residual
        && a.residual != c.residual
        && b.residual != c.residual
}

/// Interpolates `y` as a quadratic in the residual through three points.
fn inverse_quadratic(a: Point, b: Point, c: Point) -> Option<f64> {
    let (fa, fb, fc) = (a.residual, b.residual, c.residual);
    let y = a.y * fb * fc / ((fa - fb) * (fa - fc))
        + b.y * fa * fc / ((fb - fa) * (fb - fc))
        + c.y * fa * fb / ((fc - fa) * (fc - fb));
    y.is_finite().then_some(y)
}

/// Interpolates along the line through `b` and `c`.
fn linear(b: Point, c: Point) -> Option<f64> {
    let y = b.y - b.residual * (b.y - c.y) / (b.residual - c.residual);
    y.is_finite().then_some(y)
}
