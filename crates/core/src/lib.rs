//! Core traits and types for the Paver search engine.
//!
//! This crate defines the shared abstractions that the search engine,
//! its collaborators, and observers build on:
//!
//! - [`Interval`], [`IntervalBox`] — closed intervals and interval vectors,
//!   the regions the engine searches
//! - [`Impact`] — the set of dimensions that changed since the last
//!   contraction
//! - [`Cell`] — a search-tree node pairing a box with attached data
//! - [`CellBuffer`] — the work-queue contract the engine pops cells from
//! - [`Contractor`], [`Bisector`], [`SolutionTest`], [`Hooks`] — the
//!   pluggable numerical collaborators driven by the engine
//! - [`Observer`] — receives engine events and optionally returns control
//!   actions

mod buffer;
mod cell;
mod collaborators;
mod impact;
mod interval;
mod interval_box;
mod observer;

pub use buffer::CellBuffer;
pub use cell::{Capabilities, Cell, CellData, CellId, RelaxationCache};
pub use collaborators::{Bisection, Bisector, Contractor, HookPoint, Hooks, SolutionTest};
pub use impact::Impact;
pub use interval::Interval;
pub use interval_box::IntervalBox;
pub use observer::Observer;
