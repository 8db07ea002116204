//! Capability traits for generic observers.
//!
//! These traits abstract over engine-specific event and action types, so an
//! observer can be written once against the capabilities it needs.
//!
//! # Event traits
//!
//! - [`HasNodeCount`] — events that report how many cells have been created
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use paver_core::Observer;
//! use paver_observers::traits::{CanStopEarly, HasNodeCount};
//!
//! struct NodeBudget {
//!     max: u64,
//! }
//!
//! impl<E: HasNodeCount, A: CanStopEarly> Observer<E, A> for NodeBudget {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.nodes() >= self.max).then(A::stop_early)
//!     }
//! }
//! ```

use paver_solvers::search;

/// An event that reports the number of cells created so far.
pub trait HasNodeCount {
    /// Returns the number of cells created by bisection.
    fn nodes(&self) -> u64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the search early.
    fn stop_early() -> Self;
}

impl HasNodeCount for search::Event<'_> {
    fn nodes(&self) -> u64 {
        self.stats().nodes
    }
}

impl CanStopEarly for search::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
