use super::Point;

/// Indicates why a successful solve finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a successful solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Estimate of the root.
    pub root: f64,

    /// Residual `f(root)`.
    pub residual: f64,

    /// Relative change of the final step, or the relative bracket width for
    /// Brent-Dekker. Zero when `root` is an exact root.
    pub error: f64,

    /// Iterations used; zero when the starting point was already a root.
    pub iters: usize,
}

impl Solution {
    pub(super) fn new(status: Status, point: Point, error: f64, iters: usize) -> Self {
        Self {
            status,
            root: point.y,
            residual: point.residual,
            error,
            iters,
        }
    }

    pub(super) fn converged(point: Point, error: f64, iters: usize) -> Self {
        Self::new(Status::Converged, point, error, iters)
    }
}
