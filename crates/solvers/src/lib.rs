//! Scalar equation solvers for hybrid inversion.
//!
//! See [`equation`] for the available solvers. The headline entry point is
//! [`equation::hybrid::full_inversion`], which combines Newton-Raphson, secant
//! and Brent-Dekker steps into one globally convergent procedure.

pub mod equation;
