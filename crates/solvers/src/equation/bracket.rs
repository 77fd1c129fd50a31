use thiserror::Error;

use super::{Point, convergence::scaled_tol};

/// Errors that can occur when creating or updating a [`Bracket`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,

    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,

    /// Residual signs do not bracket a root.
    #[error("no sign change: f({left}) = {f_left}, f({right}) = {f_right}")]
    NoSignChange {
        left: f64,
        right: f64,
        f_left: f64,
        f_right: f64,
    },

    /// An update point lies outside the bracket.
    #[error("y = {y} lies outside [{left}, {right}]")]
    Outside { y: f64, left: f64, right: f64 },
}

/// An interval known to contain a root.
///
/// The endpoints are ordered (`left < right`) and their residuals have
/// opposite [`Sign`]. Updates replace the endpoint whose residual shares the
/// new point's sign, so a valid bracket stays valid and never widens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: Point,
    right: Point,
}

impl Bracket {
    /// Creates a validated bracket from two evaluated points in either order.
    ///
    /// # Errors
    ///
    /// Returns a [`BracketError`] if a coordinate or residual is non-finite,
    /// the points coincide, or the residual signs do not bracket a root.
    pub fn new(a: Point, b: Point) -> Result<Self, BracketError> {
        if !a.residual.is_finite() || !b.residual.is_finite() {
            return Err(BracketError::NonFinite);
        }

        Bounds::new([a.y, b.y])?;
        let (left, right) = if a.y < b.y { (a, b) } else { (b, a) };

        if Sign::of(left.residual) == Sign::of(right.residual) {
            return Err(BracketError::NoSignChange {
                left: left.y,
                right: right.y,
                f_left: left.residual,
                f_right: right.residual,
            });
        }

        Ok(Self { left, right })
    }

    /// Returns the left endpoint.
    #[must_use]
    pub fn left(&self) -> Point {
        self.left
    }

    /// Returns the right endpoint.
    #[must_use]
    pub fn right(&self) -> Point {
        self.right
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left.y, self.right.y]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left.y + self.right.y)
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right.y - self.left.y
    }

    /// Returns true if `y` lies within the closed interval.
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        self.left.y <= y && y <= self.right.y
    }

    /// Returns the endpoint with the smaller residual magnitude.
    #[must_use]
    pub fn best(&self) -> Point {
        if self.left.residual.abs() <= self.right.residual.abs() {
            self.left
        } else {
            self.right
        }
    }

    /// Returns the endpoint that is not [`best`](Self::best).
    #[must_use]
    pub fn contrapoint(&self) -> Point {
        if self.left.residual.abs() <= self.right.residual.abs() {
            self.right
        } else {
            self.left
        }
    }

    /// Returns the width normalized by `max(|midpoint|, 1)`.
    #[must_use]
    pub fn relative_width(&self) -> f64 {
        self.width() / self.midpoint().abs().max(1.0)
    }

    /// Returns true if the width is below `tol · max(|midpoint|, 1)`.
    #[must_use]
    pub fn is_converged(&self, tol: f64) -> bool {
        self.width() < scaled_tol(tol, self.midpoint())
    }

    /// Shrinks the bracket to a new interior point.
    ///
    /// The endpoint whose residual shares the point's sign is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`BracketError::Outside`] (leaving the bracket unchanged) if
    /// the point lies outside the bracket, and [`BracketError::NonFinite`] if
    /// its residual is not finite.
    pub fn update(&mut self, point: Point) -> Result<(), BracketError> {
        if !self.contains(point.y) {
            return Err(BracketError::Outside {
                y: point.y,
                left: self.left.y,
                right: self.right.y,
            });
        }
        if !point.residual.is_finite() {
            return Err(BracketError::NonFinite);
        }

        if Sign::of(self.left.residual) == Sign::of(point.residual) {
            self.left = point;
        } else {
            self.right = point;
        }
        Ok(())
    }
}

/// The sign of a residual for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Residual is positive (or zero).
    Positive,
    /// Residual is negative.
    Negative,
}

impl Sign {
    /// Returns the sign of a residual value.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Ordered finite bounds, validated before any function evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) left: f64,
    pub(crate) right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub(crate) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [a, b] = bracket;

        if !a.is_finite() || !b.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if a == b {
            return Err(BracketError::ZeroWidth);
        }

        if a < b {
            Ok(Self { left: a, right: b })
        } else {
            Ok(Self { left: b, right: a })
        }
    }
}
