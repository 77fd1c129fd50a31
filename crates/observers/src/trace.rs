//! Recording of hybrid steps.

use invert_core::Observer;
use invert_solvers::equation::hybrid::{Event, Fallback, Method};

/// An observer that records every hybrid step.
///
/// Pass `&mut Trace` as the observer so the recording is still available
/// after the solve returns.
///
/// # Example
///
/// ```
/// use invert_observers::Trace;
/// use invert_solvers::equation::{Config, hybrid};
///
/// let mut trace = Trace::new();
/// let solution = hybrid::full_inversion(
///     &|y: f64| y * y - 2.0,
///     &|y: f64| 2.0 * y,
///     1.0,
///     Some([0.0, 2.0]),
///     &Config::default(),
///     &mut trace,
/// )?;
///
/// assert_eq!(trace.len(), solution.iters);
/// # Ok::<(), invert_solvers::equation::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Trace {
    events: Vec<Event>,
}

impl Trace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step.
    pub fn record(&mut self, event: &Event) {
        self.events.push(*event);
    }

    /// Returns the recorded steps in order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Counts the steps taken by `method`.
    #[must_use]
    pub fn count(&self, method: Method) -> usize {
        self.events.iter().filter(|e| e.method == method).count()
    }

    /// Iterates over the steps that replaced the normal method choice.
    pub fn fallbacks(&self) -> impl Iterator<Item = (&Event, Fallback)> + '_ {
        self.events
            .iter()
            .filter_map(|event| event.fallback.map(|fallback| (event, fallback)))
    }

    /// Returns the residual of each step.
    #[must_use]
    pub fn residuals(&self) -> Vec<f64> {
        self.events.iter().map(|e| e.residual).collect()
    }
}

impl<A> Observer<Event, A> for Trace {
    fn observe(&mut self, event: &Event) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows `&mut Trace` to be passed to solvers that take an observer by value.
impl<A> Observer<Event, A> for &mut Trace {
    fn observe(&mut self, event: &Event) -> Option<A> {
        (*self).record(event);
        None
    }
}
