use std::collections::VecDeque;

use paver_core::{Cell, CellBuffer, CellId};

/// A first-in, first-out buffer giving a breadth-first search.
#[derive(Debug, Clone, Default)]
pub struct CellQueue {
    cells: VecDeque<CellId>,
}

impl CellBuffer for CellQueue {
    fn push(&mut self, id: CellId, _cell: &Cell) {
        self.cells.push_back(id);
    }

    fn pop(&mut self) -> Option<CellId> {
        self.cells.pop_front()
    }

    fn top(&self) -> Option<CellId> {
        self.cells.front().copied()
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn flush(&mut self) -> Vec<CellId> {
        self.cells.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use paver_core::{Capabilities, IntervalBox};

    #[test]
    fn pops_oldest_first() {
        let cell = Cell::root(IntervalBox::from_bounds(&[(0.0, 1.0)]), Capabilities::NONE);
        let mut queue = CellQueue::default();
        queue.push(CellId::new(0), &cell);
        queue.push(CellId::new(1), &cell);

        assert_eq!(queue.top(), Some(CellId::new(0)));
        assert_eq!(queue.pop(), Some(CellId::new(0)));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.flush(), vec![CellId::new(1)]);
        assert!(queue.is_empty());
    }
}
