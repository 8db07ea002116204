//! Work-queue policies for the search engine.
//!
//! The buffer decides which cell the engine processes next, and with it the
//! shape of the search:
//!
//! - [`CellStack`] — depth-first; the most recently created cell comes first
//! - [`CellQueue`] — breadth-first; the oldest cell comes first
//! - [`CellHeap`] — best-first by a cost computed when the cell is pushed

mod heap;
mod queue;
mod stack;

pub use heap::CellHeap;
pub use queue::CellQueue;
pub use stack::CellStack;
