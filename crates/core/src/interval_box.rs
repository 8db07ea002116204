use std::fmt;
use std::ops::{Index, IndexMut};

use crate::Interval;

/// An axis-aligned box: one [`Interval`] per dimension.
///
/// A box is empty as soon as any component is empty. [`IntervalBox::set_empty`]
/// puts it in the canonical empty form where every component is empty, so
/// two empty boxes of the same dimension always compare equal.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalBox {
    components: Vec<Interval>,
}

impl IntervalBox {
    /// Creates a box from its components.
    ///
    /// A box with any empty component is normalized to the canonical empty box.
    #[must_use]
    pub fn new(components: Vec<Interval>) -> Self {
        let mut bx = Self { components };
        if bx.components.iter().any(Interval::is_empty) {
            bx.set_empty();
        }
        bx
    }

    /// Creates a box from `(lb, ub)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if any pair is not a valid interval.
    #[must_use]
    pub fn from_bounds(bounds: &[(f64, f64)]) -> Self {
        Self::new(
            bounds
                .iter()
                .map(|&(lb, ub)| Interval::new(lb, ub))
                .collect(),
        )
    }

    /// Returns the number of dimensions.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if any component is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.iter().any(Interval::is_empty)
    }

    /// Empties every component.
    pub fn set_empty(&mut self) {
        self.components.fill(Interval::EMPTY);
    }

    /// Returns the components as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Interval] {
        &self.components
    }

    /// Iterates over the components.
    pub fn iter(&self) -> impl Iterator<Item = &Interval> {
        self.components.iter()
    }

    /// Returns the largest component diameter (0 for an empty box).
    #[must_use]
    pub fn max_diam(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.components
            .iter()
            .map(Interval::diam)
            .fold(0.0, f64::max)
    }

    /// Returns the index of the widest component, preferring the lowest index
    /// among ties, or `None` for an empty or zero-dimensional box.
    #[must_use]
    pub fn widest_dim(&self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.components
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, x)| match best {
                Some((_, d)) if d >= x.diam() => best,
                _ => Some((i, x.diam())),
            })
            .map(|(i, _)| i)
    }

    /// Returns the midpoint of every component.
    #[must_use]
    pub fn mid(&self) -> Vec<f64> {
        self.components.iter().map(Interval::mid).collect()
    }

    /// Returns `true` if the point lies inside the box.
    ///
    /// A point of the wrong dimension is never contained.
    #[must_use]
    pub fn contains_point(&self, point: &[f64]) -> bool {
        point.len() == self.dim()
            && self
                .components
                .iter()
                .zip(point)
                .all(|(x, &p)| x.contains(p))
    }

    /// Intersects this box with `other` in place.
    ///
    /// # Panics
    ///
    /// Panics if the boxes differ in dimension.
    pub fn intersect_with(&mut self, other: &Self) {
        assert_eq!(
            self.dim(),
            other.dim(),
            "cannot intersect boxes of different dimensions"
        );
        for (x, y) in self.components.iter_mut().zip(&other.components) {
            *x = x.intersect(y);
        }
        if self.is_empty() {
            self.set_empty();
        }
    }

    /// Returns `true` if every component of `self` lies in the matching
    /// component of `other`. The empty box is a subset of every box.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.is_empty()
            || (self.dim() == other.dim()
                && self
                    .components
                    .iter()
                    .zip(&other.components)
                    .all(|(x, y)| x.is_subset(y)))
    }

    /// Splits the box along `dim` near `ratio` of its width.
    ///
    /// Returns `None` if that component cannot be split into two strictly
    /// smaller halves (see [`Interval::bisect`]).
    ///
    /// # Panics
    ///
    /// Panics if `dim` is out of range.
    #[must_use]
    pub fn bisect(&self, dim: usize, ratio: f64) -> Option<(Self, Self)> {
        let (lo, hi) = self.components[dim].bisect(ratio)?;
        let mut left = self.clone();
        let mut right = self.clone();
        left.components[dim] = lo;
        right.components[dim] = hi;
        Some((left, right))
    }
}

impl Index<usize> for IntervalBox {
    type Output = Interval;

    fn index(&self, index: usize) -> &Interval {
        &self.components[index]
    }
}

impl IndexMut<usize> for IntervalBox {
    fn index_mut(&mut self, index: usize) -> &mut Interval {
        &mut self.components[index]
    }
}

impl From<Vec<Interval>> for IntervalBox {
    fn from(components: Vec<Interval>) -> Self {
        Self::new(components)
    }
}

impl fmt::Display for IntervalBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(empty)");
        }
        write!(f, "(")?;
        for (i, x) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, " ; ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, ")")
    }
}
