//! Executes one CLI invocation.

use std::io::Write;

use invert_observers::{Trace, TracingObserver, timed};
use invert_solvers::equation::{Config, Solution, brent, hybrid, newton, secant};
use tracing::info;

use crate::{
    args::{Args, MethodArg},
    error::{CliError, Result},
    functions::{Function, Pair},
    settings::Settings,
};

const DEFAULT_Y0: f64 = 1.0;

/// Solver inputs after merging flags, the settings file and defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved {
    pub config: Config,
    pub y0: f64,
    pub bracket: Option<[f64; 2]>,
}

impl Resolved {
    /// Merges flags over file settings over defaults.
    ///
    /// Without an explicit `y0`, the guess is the bracket midpoint if there is
    /// a bracket and `1.0` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Config`] if the merged tolerance or switch
    /// threshold is invalid.
    pub fn new(args: &Args, settings: &Settings) -> Result<Self> {
        let defaults = Config::default();
        let solver = &settings.solver;

        let max_iters = args
            .max_iter
            .or(solver.max_iter)
            .unwrap_or(defaults.max_iters());
        let tol = args.tol.or(solver.tol).unwrap_or(defaults.tol());
        let threshold = solver
            .switch_threshold
            .unwrap_or(defaults.switch_threshold());
        let config = Config::new(max_iters, tol)?.with_switch_threshold(threshold)?;

        let bracket = match args.bracket.as_deref() {
            Some(&[a, b]) => Some([a, b]),
            _ => solver.bracket,
        };

        let y0 = args
            .y0
            .or(solver.y0)
            .unwrap_or_else(|| bracket.map_or(DEFAULT_Y0, |[a, b]| 0.5 * (a + b)));

        Ok(Self {
            config,
            y0,
            bracket,
        })
    }
}

/// Runs the CLI, writing the report to `out`.
///
/// # Errors
///
/// Returns an error if the settings cannot be loaded, the function is
/// unknown, the options are invalid, or the solver fails.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    if args.list {
        for function in Function::ALL {
            writeln!(out, "{:<12} {}", function.name(), function.description())?;
        }
        return Ok(());
    }

    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let name = args.function.as_deref().ok_or(CliError::MissingFunction)?;
    let function = Function::from_name(name)?;
    let pair = function.pair(&settings.ryr_params()?);
    let resolved = Resolved::new(args, &settings)?;

    info!(
        function = %function,
        method = ?args.method,
        y0 = resolved.y0,
        tol = resolved.config.tol(),
        max_iters = resolved.config.max_iters(),
        bracket = ?resolved.bracket,
        "starting inversion"
    );

    let mut trace = Trace::new();
    let solution = timed(
        function.name(),
        || solve(args, &pair, &resolved, &mut trace),
        |operation, elapsed| {
            info!(operation, elapsed_ms = elapsed.as_secs_f64() * 1e3, "solve finished");
        },
    )?;

    writeln!(
        out,
        "Root found: y = {}. Precision error: {}. Found in {} iterations.",
        solution.root, solution.error, solution.iters
    )?;

    if args.trace {
        write_trace(out, &trace)?;
    }
    Ok(())
}

fn solve(args: &Args, pair: &Pair, resolved: &Resolved, trace: &mut Trace) -> Result<Solution> {
    let Resolved {
        config,
        y0,
        bracket,
    } = *resolved;

    let solution = match args.method {
        MethodArg::Hybrid => hybrid::full_inversion(
            &pair.f,
            &pair.df,
            y0,
            bracket,
            &config,
            (trace, TracingObserver::new("hybrid")),
        )?,
        MethodArg::Newton => {
            newton::solve(&pair.f, &pair.df, y0, &config, TracingObserver::new("newton"))?
        }
        MethodArg::Secant => {
            let y1 = args.y1.unwrap_or(y0 + 1.0);
            secant::solve(&pair.f, y0, y1, &config, TracingObserver::new("secant"))?
        }
        MethodArg::Brent => {
            let bracket = bracket.ok_or(CliError::MissingBracket)?;
            brent::solve(&pair.f, bracket, &config, TracingObserver::new("brent"))?
        }
    };
    Ok(solution)
}

fn write_trace<W: Write>(out: &mut W, trace: &Trace) -> Result<()> {
    writeln!(
        out,
        "{:>4}  {:<14}  {:>22}  {:>12}  {:>12}  fallback",
        "iter", "method", "y", "residual", "error"
    )?;
    for event in trace.events() {
        let fallback = event
            .fallback
            .map_or_else(|| "-".to_owned(), |fallback| fallback.to_string());
        writeln!(
            out,
            "{:>4}  {:<14}  {:>22.15e}  {:>12.4e}  {:>12.4e}  {fallback}",
            event.iter,
            event.method.to_string(),
            event.y,
            event.residual,
            event.relative_error
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use clap::Parser;
    use invert_solvers::equation;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("invert").chain(argv.iter().copied()))
            .expect("valid args")
    }

    fn output(argv: &[&str]) -> Result<String> {
        let mut out = Vec::new();
        run(&parse(argv), &mut out)?;
        Ok(String::from_utf8(out).expect("utf-8"))
    }

    #[test]
    fn flags_override_file_and_defaults() {
        let args = parse(&["sqrt2", "--tol", "1e-9"]);
        let mut settings = Settings::default();
        settings.solver.tol = Some(1e-3);
        settings.solver.max_iter = Some(7);
        settings.solver.y0 = Some(3.0);

        let resolved = Resolved::new(&args, &settings).expect("valid");

        assert_relative_eq!(resolved.config.tol(), 1e-9);
        assert_eq!(resolved.config.max_iters(), 7);
        assert_relative_eq!(resolved.y0, 3.0);
        assert!(resolved.bracket.is_none());
    }

    #[test]
    fn guess_defaults_to_bracket_midpoint() {
        let args = parse(&["double-root", "--bracket", "-4", "1.3333"]);
        let resolved = Resolved::new(&args, &Settings::default()).expect("valid");
        assert_relative_eq!(resolved.y0, -1.33335, epsilon = 1e-12);

        let resolved = Resolved::new(&parse(&["sqrt2"]), &Settings::default()).expect("valid");
        assert_relative_eq!(resolved.y0, DEFAULT_Y0);
    }

    #[test]
    fn double_root_bracket_alone_finds_the_simple_root() {
        let text = output(&["double-root", "--bracket", "-4", "1.3333"]).expect("solves");
        assert!(!text.contains("Found in 0 iterations"), "{text}");
        assert!(
            text.starts_with("Root found: y = -3") || text.starts_with("Root found: y = -2.9999"),
            "{text}"
        );
    }

    #[test]
    fn invalid_tolerance_is_a_config_error() {
        let args = parse(&["sqrt2", "--tol", "0"]);
        assert!(matches!(
            Resolved::new(&args, &Settings::default()),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn prints_the_root_line() {
        let text = output(&["sqrt2"]).expect("solves");
        assert!(text.starts_with("Root found: y = 1.41421"));
        assert!(text.contains("Precision error: "));
        assert!(text.trim_end().ends_with("iterations."));
    }

    #[test]
    fn every_method_solves_sqrt2() {
        for method in ["hybrid", "newton", "secant", "brent"] {
            let text =
                output(&["sqrt2", "--method", method, "--bracket", "0", "2"]).expect("solves");
            assert!(text.starts_with("Root found: y = 1.4142"), "{method}: {text}");
        }
    }

    #[test]
    fn brent_without_bracket_is_rejected() {
        assert!(matches!(
            output(&["sqrt2", "--method", "brent"]),
            Err(CliError::MissingBracket)
        ));
    }

    #[test]
    fn trace_lists_each_step() {
        let text = output(&[
            "double-root",
            "--y0",
            "1.3333",
            "--bracket",
            "-4",
            "1.3333",
            "--max-iter",
            "200",
            "--trace",
        ])
        .expect("solves");

        let mut lines = text.lines();
        let root = lines.next().expect("root line");
        assert!(
            root.starts_with("Root found: y = -3") || root.starts_with("Root found: y = -2.9999")
        );
        assert!(lines.next().expect("header").contains("fallback"));
        assert!(lines.any(|line| line.contains("Brent-Dekker")));
    }

    #[test]
    fn list_names_every_function() {
        let text = output(&["--list"]).expect("lists");
        for function in Function::ALL {
            assert!(text.contains(function.name()));
        }
    }

    #[test]
    fn missing_and_unknown_functions_are_errors() {
        assert!(matches!(output(&[]), Err(CliError::MissingFunction)));
        assert!(matches!(
            output(&["nope"]),
            Err(CliError::UnknownFunction { .. })
        ));
    }

    #[test]
    fn solver_failures_keep_their_cause() {
        let result = output(&["sqrt2", "--y0", "0"]);
        assert!(matches!(
            result,
            Err(CliError::Solve(equation::Error::DegenerateStep { .. }))
        ));
    }
}
