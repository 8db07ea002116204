use paver_core::Observer;
use paver_solvers::search::Event;

use crate::traits::CanStopEarly;

/// Stops the search once a number of boxes have been accepted.
///
/// Useful when any solution will do, or to stream the first few solutions of
/// a large paving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionLimit {
    max: usize,
    found: usize,
}

impl SolutionLimit {
    /// Creates an observer that stops after `max` solutions.
    #[must_use]
    pub fn new(max: usize) -> Self {
        Self { max, found: 0 }
    }

    /// Returns the number of solutions seen so far.
    #[must_use]
    pub fn found(&self) -> usize {
        self.found
    }
}

impl<A: CanStopEarly> Observer<Event<'_>, A> for SolutionLimit {
    fn observe(&mut self, event: &Event<'_>) -> Option<A> {
        if let Event::Solution { .. } = event {
            self.found += 1;
            if self.found >= self.max {
                return Some(A::stop_early());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use paver_core::IntervalBox;
    use paver_solvers::{
        bisect::RoundRobin,
        contract::Identity,
        search::{Advance, Config, Solver},
    };

    /// Paves `[0, 1]` down to `prec`, stepping until the search stops.
    fn pave(prec: f64, limit: &mut SolutionLimit) -> (Advance, Vec<IntervalBox>) {
        let mut solver = Solver::new(
            Identity::new(1),
            RoundRobin::midpoint(prec).unwrap(),
            Config::default(),
        );
        solver.start(IntervalBox::from_bounds(&[(0.0, 1.0)])).unwrap();

        let mut out = Vec::new();
        loop {
            match solver.advance(&mut out, limit).unwrap() {
                Advance::Continue => {}
                other => return (other, out),
            }
        }
    }

    #[test]
    fn stops_after_enough_solutions() {
        let mut limit = SolutionLimit::new(3);

        let (advance, boxes) = pave(0.1, &mut limit);

        assert_eq!(advance, Advance::StoppedByObserver);
        assert_eq!(boxes.len(), 3);
        assert_eq!(limit.found(), 3);
    }

    #[test]
    fn small_search_finishes_first() {
        let mut limit = SolutionLimit::new(100);

        let (advance, boxes) = pave(0.5, &mut limit);

        assert_eq!(advance, Advance::Finished);
        assert_eq!(boxes.len(), 2);
        assert_eq!(limit.found(), 2);
    }
}
