use paver_core::{Cell, IntervalBox};

use super::{Limit, Stats};

/// Events emitted by the search engine.
#[derive(Debug)]
pub enum Event<'a> {
    /// A cell is about to be processed.
    ///
    /// Returning [`Action::StopEarly`](super::Action::StopEarly) here leaves
    /// the cell untouched at the top of the buffer.
    Visit {
        /// The cell at the top of the buffer.
        cell: &'a Cell,

        /// Number of cells in the buffer, including this one.
        buffer_len: usize,

        /// Statistics before this cell is processed.
        stats: &'a Stats,
    },

    /// A box was accepted as a solution.
    Solution {
        /// The accepted box.
        bx: &'a IntervalBox,

        /// Position of this solution in the session, starting at zero.
        index: usize,

        /// Statistics including this solution.
        stats: &'a Stats,
    },

    /// A resource limit ended the current `advance` call.
    ///
    /// Any action returned for this event is ignored.
    LimitReached {
        /// Which limit was reached.
        limit: Limit,

        /// Statistics when the limit was detected.
        stats: &'a Stats,
    },
}

impl Event<'_> {
    /// Returns the statistics carried by the event.
    #[must_use]
    pub fn stats(&self) -> &Stats {
        match self {
            Self::Visit { stats, .. }
            | Self::Solution { stats, .. }
            | Self::LimitReached { stats, .. } => stats,
        }
    }
}
