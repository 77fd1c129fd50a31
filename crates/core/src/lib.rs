//! Core traits and types for hybrid scalar inversion.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`ScalarFunction`] — a fallible mapping from `f64` to `f64`
//! - [`Fallible`] — adapts a `Fn(f64) -> Result<f64, E>` closure
//! - [`DomainError`] — the error a function reports outside its valid range
//! - [`Observer`] — receives solver events and optionally returns control actions

mod domain;
mod function;
mod observer;

pub use domain::DomainError;
pub use function::{Fallible, ScalarFunction};
pub use observer::Observer;
