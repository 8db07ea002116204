//! Reference contractors.
//!
//! Both are sound for any problem whose solutions lie in the search box:
//! they never remove a point that could be a solution.

mod identity;
mod intersect;

pub use identity::Identity;
pub use intersect::Intersect;
