use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use paver_core::{Cell, CellBuffer, CellId};

/// A best-first buffer: the cell with the lowest cost comes first.
///
/// The cost of a cell is computed once, when it is pushed. Cells with equal
/// cost come out in the order they were pushed.
#[derive(Clone)]
pub struct CellHeap<F = fn(&Cell) -> f64> {
    cost: F,
    entries: BinaryHeap<Entry>,
    pushed: u64,
}

impl<F> CellHeap<F>
where
    F: Fn(&Cell) -> f64,
{
    /// Creates a heap ordered by `cost`, lowest first.
    pub fn new(cost: F) -> Self {
        Self {
            cost,
            entries: BinaryHeap::new(),
            pushed: 0,
        }
    }
}

impl CellHeap {
    /// Creates a heap that processes the cell with the widest box first.
    #[must_use]
    pub fn largest_first() -> Self {
        Self::new(|cell| -cell.bx.max_diam())
    }

    /// Creates a heap that processes the cell with the lowest cached
    /// objective bound first.
    ///
    /// Cells without a relaxation cache are treated as unbounded below.
    #[must_use]
    pub fn lowest_bound() -> Self {
        Self::new(|cell| {
            cell.data
                .relaxation
                .map_or(f64::NEG_INFINITY, |cache| cache.lower_bound)
        })
    }
}

impl<F> CellBuffer for CellHeap<F>
where
    F: Fn(&Cell) -> f64,
{
    fn push(&mut self, id: CellId, cell: &Cell) {
        self.entries.push(Entry {
            cost: (self.cost)(cell),
            seq: self.pushed,
            id,
        });
        self.pushed += 1;
    }

    fn pop(&mut self) -> Option<CellId> {
        self.entries.pop().map(|entry| entry.id)
    }

    fn top(&self) -> Option<CellId> {
        self.entries.peek().map(|entry| entry.id)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn flush(&mut self) -> Vec<CellId> {
        self.entries.drain().map(|entry| entry.id).collect()
    }
}

impl<F> fmt::Debug for CellHeap<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellHeap")
            .field("len", &self.entries.len())
            .field("pushed", &self.pushed)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    cost: f64,
    seq: u64,
    id: CellId,
}

impl Ord for Entry {
    /// `BinaryHeap` is a max-heap, so "greater" means "comes out first":
    /// lower cost, then earlier push.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}
