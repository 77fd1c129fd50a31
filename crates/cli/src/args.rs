//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Solve f(y) = 0 for a built-in function with a hybrid Newton-Raphson /
/// secant / Brent-Dekker inversion.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "invert", version)]
pub struct Args {
    /// Built-in function to invert (see --list).
    pub function: Option<String>,

    /// Initial guess [default: bracket midpoint, else 1.0].
    #[arg(long, allow_negative_numbers = true)]
    pub y0: Option<f64>,

    /// Second starting point for the secant method [default: y0 + 1].
    #[arg(long, allow_negative_numbers = true)]
    pub y1: Option<f64>,

    /// Convergence tolerance [default: 1e-5].
    #[arg(long)]
    pub tol: Option<f64>,

    /// Maximum number of iterations [default: 100].
    #[arg(long = "max-iter")]
    pub max_iter: Option<usize>,

    /// Interval known to contain a root.
    #[arg(long, num_args = 2, value_names = ["A", "B"], allow_negative_numbers = true)]
    pub bracket: Option<Vec<f64>>,

    /// Solver to run.
    #[arg(long, value_enum, default_value_t = MethodArg::Hybrid)]
    pub method: MethodArg,

    /// TOML settings file with [solver] and [ryr] tables.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// List the built-in functions and exit.
    #[arg(long)]
    pub list: bool,

    /// Print every hybrid step after the result.
    #[arg(long)]
    pub trace: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    Hybrid,
    Newton,
    Secant,
    Brent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_numbers_unset() {
        let args = Args::try_parse_from(["invert", "sqrt2"]).expect("valid args");

        assert_eq!(args.function.as_deref(), Some("sqrt2"));
        assert_eq!(args.method, MethodArg::Hybrid);
        assert!(args.y0.is_none());
        assert!(args.bracket.is_none());
        assert!(!args.list);
    }

    #[test]
    fn parses_negative_bracket_and_method() {
        let args = Args::try_parse_from([
            "invert",
            "double-root",
            "--y0",
            "-3.5",
            "--bracket",
            "-4",
            "1.3333",
            "--method",
            "brent",
            "--max-iter",
            "200",
        ])
        .expect("valid args");

        assert_eq!(args.y0, Some(-3.5));
        assert_eq!(args.bracket, Some(vec![-4.0, 1.3333]));
        assert_eq!(args.method, MethodArg::Brent);
        assert_eq!(args.max_iter, Some(200));
    }

    #[test]
    fn bracket_needs_two_values() {
        assert!(Args::try_parse_from(["invert", "sqrt2", "--bracket", "1"]).is_err());
    }
}
