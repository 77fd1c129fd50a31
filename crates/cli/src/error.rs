//! CLI error types.

use std::{io, path::PathBuf};

use invert_solvers::equation::{self, ConfigError};
use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Everything that can stop the `invert` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("could not read settings file {}", .path.display())]
    ReadSettings {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse settings file {}", .path.display())]
    ParseSettings {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("[ryr] table is missing {}", .missing.join(", "))]
    IncompleteParameters { missing: Vec<&'static str> },

    #[error("unknown function `{name}` (available: {})", .available.join(", "))]
    UnknownFunction {
        name: String,
        available: Vec<&'static str>,
    },

    #[error("no function given; pass a function name or --list")]
    MissingFunction,

    #[error("the brent method needs --bracket")]
    MissingBracket,

    #[error("invalid solver settings")]
    Config(#[from] ConfigError),

    #[error("inversion failed")]
    Solve(#[from] equation::Error),

    #[error("could not write output")]
    Output(#[from] io::Error),
}
