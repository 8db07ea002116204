use std::time::Duration;

/// Counters describing the work done by a search session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Cells created by bisection (the root is not counted).
    pub nodes: u64,

    /// Successful bisections.
    pub bisections: usize,

    /// Cells taken from the buffer and processed.
    pub iterations: usize,

    /// Cells contracted to an empty box.
    pub emptied: usize,

    /// Non-bisectable cells refused by the solution test.
    pub rejected: usize,

    /// Accepted solutions.
    pub solutions: usize,

    /// Wall-clock time accumulated across `advance` calls.
    pub elapsed: Duration,
}
