//! Accessors shared by every solver's events and actions.
//!
//! Each solver in `invert-solvers` has its own `Event` type. Implementing
//! these traits for all of them lets one observer serve Newton-Raphson,
//! secant, Brent-Dekker and the hybrid driver alike.
//!
//! Events expose their residual through [`HasResidual`] and their evaluated
//! `y` through [`HasIterate`]. [`CanStopEarly`] builds the stop action.
//!
//! # Example
//!
//! Stop once two successive iterates are within `width` of each other:
//!
//! ```rust
//! use invert_core::Observer;
//! use invert_observers::traits::{CanStopEarly, HasIterate};
//! use invert_solvers::equation::{Config, Status, brent};
//!
//! struct Pinned {
//!     width: f64,
//!     last: Option<f64>,
//! }
//!
//! impl<E: HasIterate, A: CanStopEarly> Observer<E, A> for Pinned {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let y = event.iterate();
//!         let pinned = self.last.is_some_and(|last| (y - last).abs() < self.width);
//!         self.last = Some(y);
//!         pinned.then(A::stop_early)
//!     }
//! }
//!
//! let observer = Pinned { width: 1e-3, last: None };
//! let f = |y: f64| y * y - 2.0;
//! let solution = brent::solve(&f, [0.0, 2.0], &Config::new(100, 1e-12)?, observer)?;
//!
//! assert_eq!(solution.status, Status::StoppedByObserver);
//! assert!((solution.root - 2.0_f64.sqrt()).abs() < 1e-2);
//! # Ok::<(), invert_solvers::equation::Error>(())
//! ```

use invert_solvers::equation::{Action, brent, hybrid, newton, secant};

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual `f(y)` of the evaluated iterate.
    fn residual(&self) -> f64;
}

/// An event that carries the iterate it evaluated.
pub trait HasIterate {
    /// Returns the evaluated `y`.
    fn iterate(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasResidual for newton::Event {
    fn residual(&self) -> f64 {
        self.point.residual
    }
}

impl HasResidual for secant::Event {
    fn residual(&self) -> f64 {
        self.point.residual
    }
}

impl HasResidual for brent::Event {
    fn residual(&self) -> f64 {
        self.point.residual
    }
}

impl HasResidual for hybrid::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

impl HasIterate for newton::Event {
    fn iterate(&self) -> f64 {
        self.point.y
    }
}

impl HasIterate for secant::Event {
    fn iterate(&self) -> f64 {
        self.point.y
    }
}

impl HasIterate for brent::Event {
    fn iterate(&self) -> f64 {
        self.point.y
    }
}

impl HasIterate for hybrid::Event {
    fn iterate(&self) -> f64 {
        self.y
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
