use invert_core::ScalarFunction;

use crate::equation::{Config, Error, Solution};

use super::full_inversion_unobserved;

/// Runs one hybrid inversion per initial guess.
///
/// Results are returned in the order of `guesses`. With the `parallel`
/// feature the solves run on the rayon thread pool.
pub fn invert_all<F, D>(
    f: &F,
    df: &D,
    guesses: &[f64],
    bracket: Option<[f64; 2]>,
    config: &Config,
) -> Vec<Result<Solution, Error>>
where
    F: ScalarFunction + Sync,
    D: ScalarFunction + Sync,
{
    let solve = |&y0: &f64| full_inversion_unobserved(f, df, y0, bracket, config);

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        guesses.par_iter().map(solve).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        guesses.iter().map(solve).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn keeps_input_order() {
        let f = |y: f64| y * y - 4.0;
        let df = |y: f64| 2.0 * y;

        let results = invert_all(&f, &df, &[3.0, -3.0, 0.0], None, &Config::default());

        assert_eq!(results.len(), 3);
        assert_relative_eq!(results[0].as_ref().expect("converges").root, 2.0, epsilon = 1e-5);
        assert_relative_eq!(results[1].as_ref().expect("converges").root, -2.0, epsilon = 1e-5);
        assert!(matches!(results[2], Err(Error::DegenerateStep { .. })));
    }
}
