use std::convert::Infallible;

use paver_core::{Bisection, Bisector, Cell};

use super::{BisectorError, validate};

/// Splits the dimensions in turn.
///
/// The first dimension tried is the one after the cell's last bisected
/// variable (dimension 0 for the root), wrapping around. Dimensions no wider
/// than `prec`, or with no room for a split point, are skipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundRobin {
    prec: f64,
    ratio: f64,
}

impl RoundRobin {
    /// Creates a round-robin bisector.
    ///
    /// # Errors
    ///
    /// Returns an error if `prec` is negative or non-finite, or if `ratio` is
    /// not in `(0, 1)`.
    pub fn new(prec: f64, ratio: f64) -> Result<Self, BisectorError> {
        validate(prec, ratio)?;
        Ok(Self { prec, ratio })
    }

    /// Creates a round-robin bisector that splits at the midpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if `prec` is negative or non-finite.
    pub fn midpoint(prec: f64) -> Result<Self, BisectorError> {
        Self::new(prec, 0.5)
    }

    /// Returns the minimum width below which a dimension is not split.
    #[must_use]
    pub fn prec(&self) -> f64 {
        self.prec
    }

    /// Returns the split ratio.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }
}

impl Bisector for RoundRobin {
    type Error = Infallible;

    fn bisect(&mut self, cell: &Cell) -> Result<Bisection, Self::Error> {
        let n = cell.bx.dim();
        if n == 0 || cell.bx.is_empty() {
            return Ok(Bisection::NotBisectable);
        }

        let first = cell.data.last_bisected.map_or(0, |last| (last + 1) % n);
        let split = (0..n)
            .map(|offset| (first + offset) % n)
            .filter(|&i| cell.bx[i].diam() > self.prec)
            .find_map(|var| {
                let (left, right) = cell.bx.bisect(var, self.ratio)?;
                Some(Bisection::Split { var, left, right })
            });

        Ok(split.unwrap_or(Bisection::NotBisectable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use paver_core::{Capabilities, IntervalBox};

    fn split_var(bisection: &Bisection) -> Option<usize> {
        match bisection {
            Bisection::Split { var, .. } => Some(*var),
            Bisection::NotBisectable => None,
        }
    }

    #[test]
    fn root_starts_with_first_dimension() {
        let mut bisector = RoundRobin::midpoint(0.1).unwrap();
        let root = Cell::root(
            IntervalBox::from_bounds(&[(0.0, 1.0), (0.0, 1.0)]),
            Capabilities::NONE,
        );

        let bisection = bisector.bisect(&root).unwrap();
        assert_eq!(split_var(&bisection), Some(0));
    }

    #[test]
    fn cycles_after_last_bisected() {
        let mut bisector = RoundRobin::midpoint(0.1).unwrap();
        let root = Cell::root(
            IntervalBox::from_bounds(&[(0.0, 1.0), (0.0, 1.0), (0.0, 1.0)]),
            Capabilities::NONE,
        );
        let (left, right) = root.bx.bisect(2, 0.5).unwrap();
        let (child, _) = root.split(2, left, right);

        let bisection = bisector.bisect(&child).unwrap();
        assert_eq!(split_var(&bisection), Some(0));
    }

    #[test]
    fn skips_narrow_dimensions() {
        let mut bisector = RoundRobin::midpoint(0.1).unwrap();
        let root = Cell::root(
            IntervalBox::from_bounds(&[(0.0, 0.05), (0.0, 1.0)]),
            Capabilities::NONE,
        );

        let bisection = bisector.bisect(&root).unwrap();
        assert_eq!(split_var(&bisection), Some(1));
    }

    #[test]
    fn splits_at_ratio() {
        let mut bisector = RoundRobin::new(0.0, 0.25).unwrap();
        let root = Cell::root(IntervalBox::from_bounds(&[(0.0, 4.0)]), Capabilities::NONE);

        match bisector.bisect(&root).unwrap() {
            Bisection::Split { left, right, .. } => {
                assert_relative_eq!(left[0].ub(), 1.0);
                assert_relative_eq!(right[0].lb(), 1.0);
            }
            Bisection::NotBisectable => panic!("expected a split"),
        }
    }

    #[test]
    fn small_box_is_not_bisectable() {
        let mut bisector = RoundRobin::midpoint(0.1).unwrap();
        let root = Cell::root(
            IntervalBox::from_bounds(&[(0.0, 0.1), (0.0, 0.01)]),
            Capabilities::NONE,
        );

        assert_eq!(bisector.bisect(&root).unwrap(), Bisection::NotBisectable);
    }

    #[test]
    fn skips_dimensions_without_a_split_point() {
        let mut bisector = RoundRobin::midpoint(1.0).unwrap();
        let root = Cell::root(
            IntervalBox::from_bounds(&[(1e16, 1e16 + 2.0), (0.0, 4.0)]),
            Capabilities::NONE,
        );

        let bisection = bisector.bisect(&root).unwrap();
        assert_eq!(split_var(&bisection), Some(1));

        let tight = Cell::root(
            IntervalBox::from_bounds(&[(1e16, 1e16 + 2.0)]),
            Capabilities::NONE,
        );
        assert_eq!(bisector.bisect(&tight).unwrap(), Bisection::NotBisectable);
    }

    #[test]
    fn splits_half_line_at_a_finite_point() {
        let mut bisector = RoundRobin::midpoint(1.0).unwrap();
        let root = Cell::root(
            IntervalBox::from_bounds(&[(f64::NEG_INFINITY, 0.0)]),
            Capabilities::NONE,
        );

        match bisector.bisect(&root).unwrap() {
            Bisection::Split { left, right, .. } => {
                assert_relative_eq!(left[0].ub(), -1.0);
                assert_relative_eq!(right[0].lb(), -1.0);
                assert!(left[0].lb().is_infinite());
            }
            Bisection::NotBisectable => panic!("expected a split"),
        }
    }

    #[test]
    fn rejects_invalid_settings() {
        assert_eq!(RoundRobin::new(-1.0, 0.5), Err(BisectorError::Prec(-1.0)));
        assert_eq!(RoundRobin::new(0.1, 1.0), Err(BisectorError::Ratio(1.0)));
        assert!(RoundRobin::new(0.1, f64::NAN).is_err());
    }
}
