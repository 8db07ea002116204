use crate::{Cell, CellId};

/// The work queue of live cells.
///
/// A buffer holds handles, not cells. The engine owns every cell in its arena
/// and passes a reference on `push` so priority-based buffers can compute an
/// ordering key once. The buffer decides traversal order; the engine only
/// requires that every pushed handle is eventually returned by `pop` or
/// `flush`.
pub trait CellBuffer {
    /// Adds a cell to the buffer.
    fn push(&mut self, id: CellId, cell: &Cell);

    /// Removes and returns the cell the policy considers most promising.
    fn pop(&mut self) -> Option<CellId>;

    /// Returns the cell `pop` would return next, without removing it.
    fn top(&self) -> Option<CellId>;

    /// Returns the number of cells in the buffer.
    fn len(&self) -> usize;

    /// Returns `true` if the buffer holds no cells.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every cell, returning their handles so the owner can destroy them.
    fn flush(&mut self) -> Vec<CellId>;
}
