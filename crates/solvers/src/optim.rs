//! Incumbent tracking for minimization.
//!
//! [`LoupFinder`] turns a paving search into a branch-and-bound minimizer.
//! It keeps the lowest objective value seen at a point so far (the loup,
//! "lowest upper bound") and discards every cell whose objective lower bound
//! exceeds it. Cells that survive to the bisector's precision enclose the
//! global minimizers.

use std::convert::Infallible;

use paver_core::{Capabilities, Cell, Hooks, Interval, IntervalBox, RelaxationCache};
use tracing::trace;

/// Hooks that maintain an incumbent and prune cells against it.
///
/// - `objective` evaluates the objective at a point.
/// - `bound` returns an interval enclosing the objective over a box.
///
/// Every point of the search box is assumed feasible, so any evaluated
/// midpoint is a valid incumbent.
pub struct LoupFinder<F, G> {
    objective: F,
    bound: G,
    loup: f64,
    loup_point: Option<Vec<f64>>,
}

impl<F, G> LoupFinder<F, G>
where
    F: FnMut(&[f64]) -> f64,
    G: FnMut(&IntervalBox) -> Interval,
{
    /// Creates a loup finder with no incumbent.
    pub fn new(objective: F, bound: G) -> Self {
        Self {
            objective,
            bound,
            loup: f64::INFINITY,
            loup_point: None,
        }
    }

    /// Returns the best objective value found so far (`+∞` if none).
    #[must_use]
    pub fn loup(&self) -> f64 {
        self.loup
    }

    /// Returns the point where the best objective value was found.
    #[must_use]
    pub fn loup_point(&self) -> Option<&[f64]> {
        self.loup_point.as_deref()
    }
}

impl<F, G> Hooks for LoupFinder<F, G>
where
    F: FnMut(&[f64]) -> f64,
    G: FnMut(&IntervalBox) -> Interval,
{
    type Error = Infallible;

    fn capabilities(&self) -> Capabilities {
        Capabilities::RELAXATION
    }

    /// Bounds the objective over the box and empties it if no point in it can
    /// beat the incumbent.
    fn other_checks(&mut self, cell: &mut Cell) -> Result<(), Self::Error> {
        let enclosure = (self.bound)(&cell.bx);
        if enclosure.is_empty() {
            return Ok(());
        }

        let inherited = cell
            .data
            .relaxation
            .map_or(f64::NEG_INFINITY, |cache| cache.lower_bound);
        let lower_bound = enclosure.lb().max(inherited);
        if cell.data.relaxation.is_some() {
            cell.data.relaxation = Some(RelaxationCache::fresh(lower_bound));
        }

        if lower_bound > self.loup {
            trace!(lower_bound, loup = self.loup, bx = %cell.bx, "pruned by incumbent");
            cell.bx.set_empty();
        }
        Ok(())
    }

    /// Evaluates the objective at the midpoint and keeps it if it improves
    /// the incumbent.
    fn prebisect(&mut self, cell: &mut Cell) -> Result<(), Self::Error> {
        let point = cell.bx.mid();
        let value = (self.objective)(&point);
        if value < self.loup {
            trace!(value, previous = self.loup, "incumbent improved");
            self.loup = value;
            self.loup_point = Some(point);
        }
        Ok(())
    }
}
