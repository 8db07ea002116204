use paver_core::{Cell, CellBuffer, CellId};

/// A last-in, first-out buffer giving a depth-first search.
#[derive(Debug, Clone, Default)]
pub struct CellStack {
    cells: Vec<CellId>,
}

impl CellBuffer for CellStack {
    fn push(&mut self, id: CellId, _cell: &Cell) {
        self.cells.push(id);
    }

    fn pop(&mut self) -> Option<CellId> {
        self.cells.pop()
    }

    fn top(&self) -> Option<CellId> {
        self.cells.last().copied()
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn flush(&mut self) -> Vec<CellId> {
        std::mem::take(&mut self.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use paver_core::{Capabilities, IntervalBox};

    #[test]
    fn pops_most_recent_first() {
        let cell = Cell::root(IntervalBox::from_bounds(&[(0.0, 1.0)]), Capabilities::NONE);
        let mut stack = CellStack::default();
        stack.push(CellId::new(0), &cell);
        stack.push(CellId::new(1), &cell);

        assert_eq!(stack.top(), Some(CellId::new(1)));
        assert_eq!(stack.pop(), Some(CellId::new(1)));
        assert_eq!(stack.pop(), Some(CellId::new(0)));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn flush_returns_every_handle() {
        let cell = Cell::root(IntervalBox::from_bounds(&[(0.0, 1.0)]), Capabilities::NONE);
        let mut stack = CellStack::default();
        stack.push(CellId::new(3), &cell);
        stack.push(CellId::new(4), &cell);

        assert_eq!(stack.flush(), vec![CellId::new(3), CellId::new(4)]);
        assert_eq!(stack.len(), 0);
    }
}
