use std::ops::{Index, IndexMut};

use paver_core::{Cell, CellId};

/// Owns every live cell of a search, addressed by [`CellId`].
///
/// Slots of removed cells are reused, so a handle is valid only until the
/// cell it names is removed.
#[derive(Debug, Default)]
pub(super) struct CellArena {
    slots: Vec<Option<Cell>>,
    free: Vec<usize>,
    live: usize,
}

impl CellArena {
    pub(super) fn insert(&mut self, cell: Cell) -> CellId {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            self.slots[index] = Some(cell);
            CellId::new(index)
        } else {
            self.slots.push(Some(cell));
            CellId::new(self.slots.len() - 1)
        }
    }

    /// Removes a cell, returning it if the handle was live.
    pub(super) fn remove(&mut self, id: CellId) -> Option<Cell> {
        let cell = self.slots.get_mut(id.index())?.take()?;
        self.free.push(id.index());
        self.live -= 1;
        Some(cell)
    }

    pub(super) fn get(&self, id: CellId) -> Option<&Cell> {
        self.slots.get(id.index())?.as_ref()
    }

    /// Returns the number of live cells.
    pub(super) fn len(&self) -> usize {
        self.live
    }

    pub(super) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.live = 0;
    }
}

/// # Panics
///
/// Panics if the handle does not name a live cell.
impl Index<CellId> for CellArena {
    type Output = Cell;

    fn index(&self, id: CellId) -> &Cell {
        match self.get(id) {
            Some(cell) => cell,
            None => panic!("no live cell for {id:?}"),
        }
    }
}

/// # Panics
///
/// Panics if the handle does not name a live cell.
impl IndexMut<CellId> for CellArena {
    fn index_mut(&mut self, id: CellId) -> &mut Cell {
        match self.slots.get_mut(id.index()).and_then(Option::as_mut) {
            Some(cell) => cell,
            None => panic!("no live cell for {id:?}"),
        }
    }
}
