//! Command-line front end for hybrid scalar inversion.
//!
//! The `invert` binary resolves a built-in function by name, merges solver
//! options from flags and an optional TOML settings file, runs the chosen
//! solver and prints the root.

pub mod args;
pub mod error;
pub mod functions;
pub mod run;
pub mod settings;

pub use args::{Args, MethodArg};
pub use error::{CliError, Result};
pub use run::run;
