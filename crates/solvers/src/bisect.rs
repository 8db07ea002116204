//! Bisection policies.
//!
//! Both policies refuse to split a dimension whose diameter is at or below a
//! precision `prec`, which bounds the depth of the search tree. A cell whose
//! every dimension is that small is reported as
//! [`Bisection::NotBisectable`](paver_core::Bisection::NotBisectable).
//! A dimension is also skipped when no `f64` lies strictly between its
//! bounds, so every split yields two children strictly smaller than the
//! parent and the search always finishes.
//!
//! - [`RoundRobin`] — cycles through the dimensions, starting after the one
//!   split last
//! - [`LargestFirst`] — always splits the widest dimension

mod largest_first;
mod round_robin;

pub use largest_first::LargestFirst;
pub use round_robin::RoundRobin;

use thiserror::Error;

/// Errors that can occur when configuring a bisector.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BisectorError {
    #[error("prec must be finite and non-negative (got {0})")]
    Prec(f64),

    #[error("ratio must lie strictly between 0 and 1 (got {0})")]
    Ratio(f64),
}

/// Validates a precision and split ratio shared by every policy.
fn validate(prec: f64, ratio: f64) -> Result<(), BisectorError> {
    if !prec.is_finite() || prec < 0.0 {
        return Err(BisectorError::Prec(prec));
    }
    if !(ratio > 0.0 && ratio < 1.0) {
        return Err(BisectorError::Ratio(ratio));
    }
    Ok(())
}
