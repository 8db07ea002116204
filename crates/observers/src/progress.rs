use paver_core::Observer;
use paver_solvers::search::Event;
use tracing::info;

/// Logs search progress at `info` every `interval` visited cells.
///
/// Each report carries the iteration count, the number of cells created, the
/// buffer length, and the solutions found so far. Install a `tracing`
/// subscriber to see them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressLog {
    interval: usize,
    visits: usize,
    reports: usize,
}

impl ProgressLog {
    /// Creates an observer that reports every `interval` visits.
    ///
    /// An interval of zero is treated as one.
    #[must_use]
    pub fn new(interval: usize) -> Self {
        Self {
            interval: interval.max(1),
            visits: 0,
            reports: 0,
        }
    }

    /// Returns how many reports have been logged.
    #[must_use]
    pub fn reports(&self) -> usize {
        self.reports
    }
}

impl<A> Observer<Event<'_>, A> for ProgressLog {
    fn observe(&mut self, event: &Event<'_>) -> Option<A> {
        if let Event::Visit {
            buffer_len, stats, ..
        } = event
        {
            self.visits += 1;
            if self.visits % self.interval == 0 {
                self.reports += 1;
                info!(
                    iterations = stats.iterations,
                    nodes = stats.nodes,
                    buffer_len,
                    solutions = stats.solutions,
                    "search progress"
                );
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use paver_core::{Capabilities, Cell, IntervalBox};
    use paver_solvers::{
        bisect::RoundRobin,
        contract::Identity,
        search::{Action, Advance, Config, Solver, Stats},
    };

    #[test]
    fn reports_at_each_interval() {
        let mut progress = ProgressLog::new(4);
        let mut solver = Solver::new(
            Identity::new(1),
            RoundRobin::midpoint(0.25).unwrap(),
            Config::default(),
        );
        solver.start(IntervalBox::from_bounds(&[(0.0, 1.0)])).unwrap();

        let mut out = Vec::new();
        while solver.advance(&mut out, &mut progress).unwrap() == Advance::Continue {}

        // Three bisections and four leaves make seven visits.
        assert_eq!(solver.stats().iterations, 7);
        assert_eq!(progress.reports(), 1);
    }

    #[test]
    fn zero_interval_reports_every_visit() {
        let mut progress = ProgressLog::new(0);
        let cell = Cell::root(IntervalBox::from_bounds(&[(0.0, 1.0)]), Capabilities::NONE);
        let stats = Stats::default();
        let event = Event::Visit {
            cell: &cell,
            buffer_len: 1,
            stats: &stats,
        };

        for _ in 0..2 {
            let action: Option<Action> = progress.observe(&event);
            assert_eq!(action, None);
        }
        assert_eq!(progress.reports(), 2);
    }
}
