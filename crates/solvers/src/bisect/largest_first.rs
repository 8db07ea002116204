use std::convert::Infallible;

use paver_core::{Bisection, Bisector, Cell};

use super::{BisectorError, validate};

/// Splits the widest dimension.
///
/// Dimensions whose bounds are too close to hold a split point are passed
/// over in favor of the next widest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LargestFirst {
    prec: f64,
    ratio: f64,
}

impl LargestFirst {
    /// Creates a largest-first bisector.
    ///
    /// # Errors
    ///
    /// Returns an error if `prec` is negative or non-finite, or if `ratio` is
    /// not in `(0, 1)`.
    pub fn new(prec: f64, ratio: f64) -> Result<Self, BisectorError> {
        validate(prec, ratio)?;
        Ok(Self { prec, ratio })
    }
}

impl Bisector for LargestFirst {
    type Error = Infallible;

    fn bisect(&mut self, cell: &Cell) -> Result<Bisection, Self::Error> {
        if cell.bx.is_empty() {
            return Ok(Bisection::NotBisectable);
        }

        let widest = cell
            .bx
            .iter()
            .enumerate()
            .filter(|(_, x)| x.diam() > self.prec && x.split_point(self.ratio).is_some())
            .fold(None, |best: Option<(usize, f64)>, (i, x)| match best {
                Some((_, d)) if d >= x.diam() => best,
                _ => Some((i, x.diam())),
            });

        Ok(widest
            .and_then(|(var, _)| {
                let (left, right) = cell.bx.bisect(var, self.ratio)?;
                Some(Bisection::Split { var, left, right })
            })
            .unwrap_or(Bisection::NotBisectable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use paver_core::{Capabilities, IntervalBox};

    #[test]
    fn splits_widest_dimension() {
        let mut bisector = LargestFirst::new(0.1, 0.5).unwrap();
        let root = Cell::root(
            IntervalBox::from_bounds(&[(0.0, 1.0), (0.0, 3.0)]),
            Capabilities::NONE,
        );

        match bisector.bisect(&root).unwrap() {
            Bisection::Split { var, left, right } => {
                assert_eq!(var, 1);
                assert_eq!(left, IntervalBox::from_bounds(&[(0.0, 1.0), (0.0, 1.5)]));
                assert_eq!(right, IntervalBox::from_bounds(&[(0.0, 1.0), (1.5, 3.0)]));
            }
            Bisection::NotBisectable => panic!("expected a split"),
        }
    }

    #[test]
    fn stops_at_precision() {
        let mut bisector = LargestFirst::new(0.5, 0.5).unwrap();
        let root = Cell::root(
            IntervalBox::from_bounds(&[(0.0, 0.5), (0.0, 0.25)]),
            Capabilities::NONE,
        );

        assert_eq!(bisector.bisect(&root).unwrap(), Bisection::NotBisectable);
    }

    #[test]
    fn passes_over_dimensions_without_a_split_point() {
        let mut bisector = LargestFirst::new(0.0, 0.5).unwrap();
        let root = Cell::root(
            IntervalBox::from_bounds(&[(0.0, 1.0), (1e16, 1e16 + 2.0)]),
            Capabilities::NONE,
        );

        match bisector.bisect(&root).unwrap() {
            Bisection::Split { var, .. } => assert_eq!(var, 0),
            Bisection::NotBisectable => panic!("expected a split"),
        }
    }

    #[test]
    fn unsplittable_half_line_is_not_bisectable() {
        let mut bisector = LargestFirst::new(1.0, 0.5).unwrap();
        let root = Cell::root(
            IntervalBox::from_bounds(&[(f64::NEG_INFINITY, f64::MIN)]),
            Capabilities::NONE,
        );

        assert_eq!(bisector.bisect(&root).unwrap(), Bisection::NotBisectable);
    }
}
