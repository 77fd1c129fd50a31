//! Forwarding solver events to `tracing`.

use std::fmt;

use invert_core::Observer;
use tracing::{Level, debug, error, info, trace, warn};

use crate::traits::{HasIterate, HasResidual};

/// An observer that emits one `tracing` event per solver step.
///
/// Each record carries the solver label, the iterate, its residual and the
/// full event in `Debug` form. The observer never acts on the solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingObserver {
    solver: &'static str,
    level: Level,
}

impl TracingObserver {
    /// Creates an observer that logs at `DEBUG` under the given label.
    #[must_use]
    pub fn new(solver: &'static str) -> Self {
        Self {
            solver,
            level: Level::DEBUG,
        }
    }

    /// Sets the level records are emitted at.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl<E, A> Observer<E, A> for TracingObserver
where
    E: HasIterate + HasResidual + fmt::Debug,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let solver = self.solver;
        let y = event.iterate();
        let residual = event.residual();

        if self.level == Level::ERROR {
            error!(solver, y, residual, ?event, "solver step");
        } else if self.level == Level::WARN {
            warn!(solver, y, residual, ?event, "solver step");
        } else if self.level == Level::INFO {
            info!(solver, y, residual, ?event, "solver step");
        } else if self.level == Level::DEBUG {
            debug!(solver, y, residual, ?event, "solver step");
        } else {
            trace!(solver, y, residual, ?event, "solver step");
        }
        None
    }
}
