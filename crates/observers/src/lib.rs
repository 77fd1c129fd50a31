//! Reusable observers for the inversion solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the solvers in `invert-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasIterate`], [`CanStopEarly`])
//! - [`trace`] — [`Trace`], a recorder of hybrid steps
//! - [`log`] — [`TracingObserver`], which forwards events to `tracing`
//! - [`timing`] — [`timed`], wall-clock timing of a whole solve
//!
//! [`Observer`]: invert_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasIterate`]: traits::HasIterate
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod log;
pub mod timing;
pub mod trace;
pub mod traits;

pub use log::TracingObserver;
pub use timing::timed;
pub use trace::Trace;
