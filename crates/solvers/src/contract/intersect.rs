use std::convert::Infallible;

use paver_core::{Contractor, Impact, IntervalBox};

/// Intersects boxes with a fixed domain.
///
/// Only the impacted dimensions are intersected: a dimension the search has
/// not touched since the last contraction already lies inside the domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersect {
    domain: IntervalBox,
}

impl Intersect {
    /// Creates a contractor for the given domain.
    #[must_use]
    pub fn new(domain: IntervalBox) -> Self {
        Self { domain }
    }

    /// Returns the domain.
    #[must_use]
    pub fn domain(&self) -> &IntervalBox {
        &self.domain
    }
}

impl Contractor for Intersect {
    type Error = Infallible;

    fn nb_var(&self) -> usize {
        self.domain.dim()
    }

    fn contract(&mut self, bx: &mut IntervalBox, impact: &Impact) -> Result<(), Self::Error> {
        for i in impact.iter() {
            bx[i] = bx[i].intersect(&self.domain[i]);
            if bx[i].is_empty() {
                bx.set_empty();
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use paver_core::Interval;

    #[test]
    fn narrows_impacted_dimensions_only() {
        let mut contractor = Intersect::new(IntervalBox::from_bounds(&[(0.0, 1.0), (0.0, 1.0)]));
        let mut bx = IntervalBox::from_bounds(&[(-1.0, 2.0), (-1.0, 2.0)]);
        let mut impact = Impact::none(2);
        impact.add(1);

        contractor.contract(&mut bx, &impact).unwrap();

        assert_eq!(bx[0], Interval::new(-1.0, 2.0));
        assert_eq!(bx[1], Interval::new(0.0, 1.0));
    }

    #[test]
    fn disjoint_box_becomes_empty() {
        let mut contractor = Intersect::new(IntervalBox::from_bounds(&[(0.0, 1.0), (0.0, 1.0)]));
        let mut bx = IntervalBox::from_bounds(&[(2.0, 3.0), (0.0, 1.0)]);

        contractor.contract(&mut bx, &Impact::all(2)).unwrap();

        assert!(bx.is_empty());
    }
}
