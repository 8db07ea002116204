use paver_core::IntervalBox;

use super::Stats;

/// Resource limits that can end an `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// The accumulated wall-clock time reached the configured limit.
    Time,

    /// The number of cells created by bisection reached the configured limit.
    Cells,
}

/// The outcome of one call to [`Solver::advance`](super::Solver::advance).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// A terminal cell was dispositioned and cells remain in the buffer.
    Continue,

    /// The buffer is empty; the search is complete.
    Finished,

    /// A resource limit was reached. The buffer is left as it is.
    LimitReached(Limit),

    /// An observer returned [`Action::StopEarly`](super::Action::StopEarly).
    StoppedByObserver,
}

/// Indicates how a search session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every cell was processed.
    Complete,

    /// Stopped at the time limit.
    TimeLimit,

    /// Stopped at the cell limit.
    CellLimit,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl From<Limit> for Status {
    fn from(limit: Limit) -> Self {
        match limit {
            Limit::Time => Self::TimeLimit,
            Limit::Cells => Self::CellLimit,
        }
    }
}

/// The result of a full search session.
#[derive(Debug, Clone)]
pub struct Solution {
    /// How the session ended.
    pub status: Status,

    /// Accepted boxes, in the order they were found.
    pub boxes: Vec<IntervalBox>,

    /// Statistics at the end of the session.
    pub stats: Stats,
}
