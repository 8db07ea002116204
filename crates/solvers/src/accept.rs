//! Solution tests for non-bisectable cells.

use paver_core::{Cell, SolutionTest};

/// Accepts every box that reaches it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcceptAll;

impl SolutionTest for AcceptAll {
    fn accepts(&mut self, _cell: &Cell) -> bool {
        true
    }
}

/// Accepts boxes whose widest dimension is at most `eps`.
///
/// Paired with a bisector whose precision is above `eps`, this rejects the
/// boxes the bisector gave up on while they were still too wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxDiameter(pub f64);

impl SolutionTest for MaxDiameter {
    fn accepts(&mut self, cell: &Cell) -> bool {
        cell.bx.max_diam() <= self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use paver_core::{Capabilities, IntervalBox};

    #[test]
    fn max_diameter_checks_widest_dimension() {
        let narrow = Cell::root(
            IntervalBox::from_bounds(&[(0.0, 0.1), (0.0, 0.05)]),
            Capabilities::NONE,
        );
        let wide = Cell::root(
            IntervalBox::from_bounds(&[(0.0, 0.1), (0.0, 0.5)]),
            Capabilities::NONE,
        );
        let mut test = MaxDiameter(0.1);

        assert!(test.accepts(&narrow));
        assert!(!test.accepts(&wide));
        assert!(AcceptAll.accepts(&wide));
    }
}
