//! Solvers for scalar equations `f(y) = 0`.
//!
//! Each solver evaluates a [`ScalarFunction`] (and, for Newton-Raphson, its
//! derivative) and drives the residual `f(y)` toward zero.
//!
//! # Solvers
//!
//! - [`newton`] — Newton-Raphson, quadratic near a simple root, needs `df`
//! - [`secant`] — derivative-free, superlinear, needs two starting points
//! - [`brent`] — Brent-Dekker, guaranteed convergence on a valid bracket
//! - [`hybrid`] — switches among the three per iteration; the recommended
//!   entry point is [`hybrid::full_inversion`]
//!
//! All solvers share [`Config`], [`Solution`], [`Error`] and [`Action`], and
//! report every accepted step to an [`Observer`].
//!
//! [`ScalarFunction`]: invert_core::ScalarFunction
//! [`Observer`]: invert_core::Observer

mod action;
mod bracket;
mod config;
mod convergence;
mod error;
mod evaluate;
mod proposal;
mod solution;

pub mod brent;
pub mod hybrid;
pub mod newton;
pub mod secant;

pub use action::Action;
pub use bracket::{Bracket, BracketError, Sign};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use evaluate::{Point, derivative, evaluate};
pub use proposal::{Degeneracy, Proposal};
pub use solution::{Solution, Status};
