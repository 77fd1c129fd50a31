use crate::equation::Point;

/// Iterates carried between hybrid iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct IterationState {
    pub(super) previous: Option<Point>,
    pub(super) current: Point,
    /// Relative change of the latest step; infinite before the first one.
    pub(super) relative_error: f64,
    pub(super) iters: usize,
}

impl IterationState {
    pub(super) fn new(start: Point) -> Self {
        Self {
            previous: None,
            current: start,
            relative_error: f64::INFINITY,
            iters: 0,
        }
    }

    pub(super) fn advance(&mut self, point: Point, relative_error: f64) {
        self.previous = Some(self.current);
        self.current = point;
        self.relative_error = relative_error;
        self.iters += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_shifts_iterates() {
        let mut state = IterationState::new(Point::new(1.0, -1.0));
        assert!(state.previous.is_none());
        assert!(state.relative_error.is_infinite());

        state.advance(Point::new(1.5, 0.25), 1.0 / 3.0);

        assert_eq!(state.previous, Some(Point::new(1.0, -1.0)));
        assert_eq!(state.current, Point::new(1.5, 0.25));
        assert_eq!(state.iters, 1);
    }
}
