//! The Paver interval branch-and-bound search engine.
//!
//! [`search::Solver`] paves a box by repeatedly contracting, bisecting, and
//! testing cells until every region is either discarded as infeasible or
//! accepted as a solution. The remaining modules provide reference
//! collaborators that plug into it:
//!
//! - [`buffers`] — depth-first, breadth-first, and best-first work queues
//! - [`bisect`] — bisection policies
//! - [`contract`] — simple sound contractors
//! - [`accept`] — solution tests
//! - [`optim`] — an incumbent-tracking hook for optimization

pub mod accept;
pub mod bisect;
pub mod buffers;
pub mod contract;
pub mod optim;
pub mod search;
