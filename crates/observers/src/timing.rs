//! Wall-clock timing of a whole solve.

use std::time::{Duration, Instant};

/// Runs `run` and reports how long it took.
///
/// `on_done` is called exactly once with `operation` and the elapsed time,
/// after `run` returns and whatever it returned.
///
/// # Example
///
/// ```
/// use invert_observers::timed;
/// use invert_solvers::equation::{Config, hybrid};
///
/// let f = |y: f64| y * y - 2.0;
/// let df = |y: f64| 2.0 * y;
///
/// let result = timed(
///     "sqrt2",
///     || hybrid::full_inversion_unobserved(&f, &df, 1.0, None, &Config::default()),
///     |operation, elapsed| println!("{operation} took {elapsed:?}"),
/// );
/// assert!(result.is_ok());
/// ```
pub fn timed<T, R, D>(operation: &str, run: R, on_done: D) -> T
where
    R: FnOnce() -> T,
    D: FnOnce(&str, Duration),
{
    let start = Instant::now();
    let output = run();
    on_done(operation, start.elapsed());
    output
}
