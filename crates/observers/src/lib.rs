//! Reusable observers for the Paver search engine.
//!
//! This crate provides [`Observer`] implementations and capability traits for
//! monitoring and steering a search.
//!
//! # Modules
//!
//! - [`traits`] — capability traits for generic observers
//!   ([`HasNodeCount`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`SolutionLimit`] — stops the search after a number of accepted boxes
//! - [`ProgressLog`] — reports search progress through `tracing`
//!
//! [`Observer`]: paver_core::Observer
//! [`HasNodeCount`]: traits::HasNodeCount
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod progress;
mod solution_limit;

pub use progress::ProgressLog;
pub use solution_limit::SolutionLimit;
