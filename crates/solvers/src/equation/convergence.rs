//! Shared convergence measures.

/// Normalized change between successive iterates.
///
/// This is `|next - previous| / max(|next|, 1)`: the absolute change for
/// iterates of magnitude at most one and the relative change above that.
pub(crate) fn relative_change(previous: f64, next: f64) -> f64 {
    (next - previous).abs() / next.abs().max(1.0)
}

/// Absolute length corresponding to the relative tolerance at `y`.
pub(crate) fn scaled_tol(tol: f64, y: f64) -> f64 {
    tol * y.abs().max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn change_is_absolute_near_zero() {
        assert_relative_eq!(relative_change(0.1, 0.2), 0.1);
        assert_relative_eq!(relative_change(0.0, -0.5), 0.5);
    }

    #[test]
    fn change_is_relative_for_large_iterates() {
        assert_relative_eq!(relative_change(1000.0, 1010.0), 10.0 / 1010.0);
    }

    #[test]
    fn change_is_never_negative() {
        assert!(relative_change(5.0, -5.0) > 0.0);
        assert_relative_eq!(relative_change(3.0, 3.0), 0.0);
    }

    #[test]
    fn tolerance_scales_above_one() {
        assert_relative_eq!(scaled_tol(1e-5, 0.25), 1e-5);
        assert_relative_eq!(scaled_tol(1e-5, -200.0), 2e-3);
    }
}
