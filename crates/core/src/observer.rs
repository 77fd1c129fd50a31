/// Receives solver events and decides how the iteration should proceed.
///
/// Every solver in the workspace reports its progress through an observer:
/// one event per accepted step. Observers can log, record a trace, or stop a
/// solve early without the solver knowing which of those is happening.
///
/// `observe` returns `Option<A>`. `Some(action)` requests a solver-specific
/// action and `None` lets the iteration continue unchanged.
///
/// Implementations provided here:
///
/// - closures `FnMut(&E) -> Option<A>`
/// - `()`, a no-op observer
/// - pairs `(first, second)`, which show each event to both observers and
///   return the first observer's action if it has one
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, O1, O2> Observer<E, A> for (O1, O2)
where
    O1: Observer<E, A>,
    O2: Observer<E, A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let first = self.0.observe(event);
        let second = self.1.observe(event);
        first.or(second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Action {
        Stop,
        Skip,
    }

    fn run<O: Observer<usize, Action>>(mut observer: O, events: usize) -> Option<Action> {
        (1..=events).find_map(|event| observer.observe(&event))
    }

    #[test]
    fn unit_never_acts() {
        assert_eq!(run((), 10), None);
    }

    #[test]
    fn closure_sees_every_event() {
        let mut seen = Vec::new();
        let action = run(
            |event: &usize| {
                seen.push(*event);
                (*event == 3).then_some(Action::Stop)
            },
            10,
        );

        assert_eq!(action, Some(Action::Stop));
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn pair_shows_events_to_both_and_prefers_first() {
        let mut first_calls = 0;
        let mut second_calls = 0;

        let pair = (
            |event: &usize| {
                first_calls += 1;
                (*event == 2).then_some(Action::Stop)
            },
            |_: &usize| {
                second_calls += 1;
                Some(Action::Skip)
            },
        );

        assert_eq!(run(pair, 5), Some(Action::Skip));
        assert_eq!(first_calls, 1);
        assert_eq!(second_calls, 1);

        let pair = (
            |_: &usize| Some(Action::Stop),
            |_: &usize| Some(Action::Skip),
        );
        assert_eq!(run(pair, 5), Some(Action::Stop));
    }
}
