use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A closed real interval `[lb, ub]`, or the canonical empty interval.
///
/// Arithmetic is the plain `f64` extension of each operation. Directed
/// rounding is not performed here; callers that need certified enclosures
/// must widen results themselves.
///
/// # Invariants
///
/// A non-empty interval always has `lb <= ub` and neither bound is NaN.
/// The empty interval is stored as `[NaN, NaN]` and never compares equal to
/// a non-empty one.
#[derive(Clone, Copy)]
pub struct Interval {
    lb: f64,
    ub: f64,
}

impl Interval {
    /// The empty interval.
    pub const EMPTY: Self = Self {
        lb: f64::NAN,
        ub: f64::NAN,
    };

    /// The whole real line `(-∞, +∞)`.
    pub const ENTIRE: Self = Self {
        lb: f64::NEG_INFINITY,
        ub: f64::INFINITY,
    };

    /// Creates the interval `[lb, ub]`.
    ///
    /// # Panics
    ///
    /// Panics if either bound is NaN or if `lb > ub`.
    #[must_use]
    pub fn new(lb: f64, ub: f64) -> Self {
        assert!(
            lb <= ub,
            "invalid interval: lb ({lb}) must be less than or equal to ub ({ub})"
        );
        Self { lb, ub }
    }

    /// Creates the interval `[lb, ub]`, or `None` if the bounds are invalid.
    #[must_use]
    pub fn try_new(lb: f64, ub: f64) -> Option<Self> {
        (lb <= ub).then_some(Self { lb, ub })
    }

    /// Creates the degenerate interval `[x, x]`.
    ///
    /// Returns the empty interval if `x` is NaN.
    #[must_use]
    pub fn point(x: f64) -> Self {
        Self::try_new(x, x).unwrap_or(Self::EMPTY)
    }

    /// Returns the lower bound (NaN for the empty interval).
    #[must_use]
    pub fn lb(&self) -> f64 {
        self.lb
    }

    /// Returns the upper bound (NaN for the empty interval).
    #[must_use]
    pub fn ub(&self) -> f64 {
        self.ub
    }

    /// Returns `true` if this is the empty interval.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lb.is_nan()
    }

    /// Returns the midpoint.
    ///
    /// Unbounded sides are clamped to the largest finite `f64` so the
    /// midpoint of a half-line stays finite.
    #[must_use]
    pub fn mid(&self) -> f64 {
        if self.is_empty() {
            return f64::NAN;
        }
        let lb = self.lb.max(f64::MIN);
        let ub = self.ub.min(f64::MAX);
        0.5 * lb + 0.5 * ub
    }

    /// Returns the diameter `ub - lb`, or `0.0` for the empty interval.
    #[must_use]
    pub fn diam(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.ub - self.lb
        }
    }

    /// Returns `true` if `x` lies in the interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.lb <= x && x <= self.ub
    }

    /// Returns `true` if every point of `self` lies in `other`.
    ///
    /// The empty interval is a subset of every interval.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.is_empty() || (other.lb <= self.lb && self.ub <= other.ub)
    }

    /// Returns the intersection of two intervals.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::EMPTY;
        }
        Self::try_new(self.lb.max(other.lb), self.ub.min(other.ub)).unwrap_or(Self::EMPTY)
    }

    /// Returns the smallest interval containing both intervals.
    #[must_use]
    pub fn hull(&self, other: &Self) -> Self {
        match (self.is_empty(), other.is_empty()) {
            (true, _) => *other,
            (_, true) => *self,
            _ => Self {
                lb: self.lb.min(other.lb),
                ub: self.ub.max(other.ub),
            },
        }
    }

    /// Returns a finite point strictly inside the interval near
    /// `lb + ratio * diam`, or `None` if there is none.
    ///
    /// Bounded intervals fall back to the midpoint when the ratio point
    /// rounds onto a bound. A half-line is split one unit (or one magnitude
    /// of its finite bound, if larger) away from that bound, and the whole
    /// line at zero.
    #[must_use]
    pub fn split_point(&self, ratio: f64) -> Option<f64> {
        debug_assert!(
            ratio > 0.0 && ratio < 1.0,
            "called `Interval::split_point` with ratio outside (0, 1): {ratio}"
        );
        if self.is_empty() {
            return None;
        }
        let inside = |p: f64| p.is_finite() && self.lb < p && p < self.ub;

        let point = match (self.lb.is_finite(), self.ub.is_finite()) {
            (true, true) => {
                let p = self.lb + ratio * (self.ub - self.lb);
                if inside(p) { p } else { self.mid() }
            }
            (false, true) => self.ub - self.ub.abs().max(1.0),
            (true, false) => self.lb + self.lb.abs().max(1.0),
            (false, false) => 0.0,
        };
        inside(point).then_some(point)
    }

    /// Returns `true` if the interval can be split into two strictly
    /// smaller halves.
    #[must_use]
    pub fn is_bisectable(&self) -> bool {
        self.split_point(0.5).is_some()
    }

    /// Splits the interval at [`split_point`](Self::split_point).
    ///
    /// The two halves share the split point and are both strictly smaller
    /// than `self`. Returns `None` if no such split exists, which happens for
    /// the empty interval, a degenerate one, or bounds so close that no
    /// `f64` lies between them.
    #[must_use]
    pub fn bisect(&self, ratio: f64) -> Option<(Self, Self)> {
        let point = self.split_point(ratio)?;
        Some((
            Self {
                lb: self.lb,
                ub: point,
            },
            Self {
                lb: point,
                ub: self.ub,
            },
        ))
    }

    /// Returns the image of the interval under `x ↦ x²`.
    #[must_use]
    pub fn sqr(&self) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        let (a, b) = (self.lb * self.lb, self.ub * self.ub);
        if self.contains(0.0) {
            Self { lb: 0.0, ub: a.max(b) }
        } else {
            Self {
                lb: a.min(b),
                ub: a.max(b),
            }
        }
    }

    /// Returns the image of the non-negative part of the interval under `√`.
    ///
    /// The result is empty if the interval lies entirely below zero.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        let domain = self.intersect(&Self {
            lb: 0.0,
            ub: f64::INFINITY,
        });
        if domain.is_empty() {
            return Self::EMPTY;
        }
        Self {
            lb: domain.lb.sqrt(),
            ub: domain.ub.sqrt(),
        }
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::ENTIRE
    }
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => true,
            (false, false) => self.lb == other.lb && self.ub == other.ub,
            _ => false,
        }
    }
}

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "[empty]")
        } else {
            write!(f, "[{}, {}]", self.lb, self.ub)
        }
    }
}

impl From<f64> for Interval {
    fn from(x: f64) -> Self {
        Self::point(x)
    }
}

impl Neg for Interval {
    type Output = Self;

    fn neg(self) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        Self {
            lb: -self.ub,
            ub: -self.lb,
        }
    }
}

impl Add for Interval {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        if self.is_empty() || rhs.is_empty() {
            return Self::EMPTY;
        }
        Self {
            lb: self.lb + rhs.lb,
            ub: self.ub + rhs.ub,
        }
    }
}

impl Sub for Interval {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Mul for Interval {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        if self.is_empty() || rhs.is_empty() {
            return Self::EMPTY;
        }
        // 0 * ∞ is taken as 0 so products with unbounded factors stay valid.
        let product = |a: f64, b: f64| if a == 0.0 || b == 0.0 { 0.0 } else { a * b };
        let candidates = [
            product(self.lb, rhs.lb),
            product(self.lb, rhs.ub),
            product(self.ub, rhs.lb),
            product(self.ub, rhs.ub),
        ];
        Self {
            lb: candidates.iter().copied().fold(f64::INFINITY, f64::min),
            ub: candidates.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn new_interval_reports_bounds() {
        let x = Interval::new(-1.0, 3.0);

        assert_relative_eq!(x.lb(), -1.0);
        assert_relative_eq!(x.ub(), 3.0);
        assert_relative_eq!(x.mid(), 1.0);
        assert_relative_eq!(x.diam(), 4.0);
        assert!(!x.is_empty());
    }

    #[test]
    #[should_panic(expected = "invalid interval")]
    fn new_rejects_reversed_bounds() {
        let _ = Interval::new(2.0, 1.0);
    }

    #[test]
    fn try_new_rejects_nan() {
        assert!(Interval::try_new(f64::NAN, 1.0).is_none());
        assert!(Interval::try_new(0.0, f64::NAN).is_none());
        assert!(Interval::point(f64::NAN).is_empty());
    }

    #[test]
    fn empty_interval_behaves() {
        let e = Interval::EMPTY;

        assert!(e.is_empty());
        assert_relative_eq!(e.diam(), 0.0);
        assert!(!e.contains(0.0));
        assert!(e.is_subset(&Interval::new(0.0, 1.0)));
        assert_eq!(e, Interval::EMPTY);
        assert_ne!(e, Interval::point(0.0));
        assert_eq!(format!("{e}"), "[empty]");
    }

    #[test]
    fn intersection_and_hull() {
        let a = Interval::new(0.0, 2.0);
        let b = Interval::new(1.0, 3.0);
        let c = Interval::new(5.0, 6.0);

        assert_eq!(a.intersect(&b), Interval::new(1.0, 2.0));
        assert!(a.intersect(&c).is_empty());
        assert_eq!(a.hull(&c), Interval::new(0.0, 6.0));
        assert_eq!(Interval::EMPTY.hull(&a), a);
    }

    #[test]
    fn touching_intervals_intersect_in_a_point() {
        let a = Interval::new(0.0, 1.0);
        let b = Interval::new(1.0, 2.0);

        assert_eq!(a.intersect(&b), Interval::point(1.0));
    }

    #[test]
    fn bisect_shares_split_point() {
        let (left, right) = Interval::new(-10.0, 10.0).bisect(0.5).unwrap();

        assert_eq!(left, Interval::new(-10.0, 0.0));
        assert_eq!(right, Interval::new(0.0, 10.0));

        let (left, right) = Interval::new(0.0, 4.0).bisect(0.25).unwrap();
        assert_relative_eq!(left.ub(), 1.0);
        assert_relative_eq!(right.lb(), 1.0);
    }

    #[test]
    fn bisect_unbounded_interval_stays_finite() {
        let (left, right) = Interval::ENTIRE.bisect(0.5).unwrap();

        assert_relative_eq!(left.ub(), 0.0);
        assert_relative_eq!(right.lb(), 0.0);
    }

    #[test]
    fn half_lines_split_strictly_inside() {
        let (left, right) = Interval::new(f64::NEG_INFINITY, 0.0).bisect(0.5).unwrap();
        assert_eq!(left, Interval::new(f64::NEG_INFINITY, -1.0));
        assert_eq!(right, Interval::new(-1.0, 0.0));

        let (left, right) = Interval::new(1e300, f64::INFINITY).bisect(0.5).unwrap();
        assert_relative_eq!(left.ub(), 2e300);
        assert!(right.lb() > 1e300 && right.lb().is_finite());

        // No finite value lies below f64::MIN.
        assert!(Interval::new(f64::NEG_INFINITY, f64::MIN).bisect(0.5).is_none());
        assert!(!Interval::new(f64::MAX, f64::INFINITY).is_bisectable());
    }

    #[test]
    fn split_point_never_lands_on_a_bound() {
        // The ulp at 1e16 is 2, so lb + 1 rounds back onto lb.
        let tight = Interval::new(1e16, 1e16 + 2.0);
        assert_eq!(tight.split_point(0.5), None);
        assert!(!tight.is_bisectable());

        let wider = Interval::new(1e16, 1e16 + 4.0);
        assert_eq!(wider.split_point(0.5), Some(1e16 + 2.0));

        // A tiny ratio that rounds onto lb falls back to the midpoint.
        let unit = Interval::new(1.0, 1.0 + 4.0 * f64::EPSILON);
        assert_eq!(unit.split_point(1e-20), Some(1.0 + 2.0 * f64::EPSILON));

        assert_eq!(Interval::point(3.0).split_point(0.5), None);
        assert_eq!(Interval::EMPTY.split_point(0.5), None);
    }

    #[test]
    fn sqr_handles_sign_straddle() {
        assert_eq!(Interval::new(-2.0, 1.0).sqr(), Interval::new(0.0, 4.0));
        assert_eq!(Interval::new(-3.0, -1.0).sqr(), Interval::new(1.0, 9.0));
        assert_eq!(Interval::new(2.0, 3.0).sqr(), Interval::new(4.0, 9.0));
    }

    #[test]
    fn sqrt_uses_non_negative_part() {
        assert_eq!(Interval::new(-1.0, 4.0).sqrt(), Interval::new(0.0, 2.0));
        assert!(Interval::new(-4.0, -1.0).sqrt().is_empty());
    }

    #[test]
    fn arithmetic_encloses_point_results() {
        let a = Interval::new(1.0, 2.0);
        let b = Interval::new(-3.0, 4.0);

        assert_eq!(a + b, Interval::new(-2.0, 6.0));
        assert_eq!(a - b, Interval::new(-3.0, 5.0));
        assert_eq!(a * b, Interval::new(-6.0, 8.0));
        assert_eq!(-a, Interval::new(-2.0, -1.0));
        assert!((a + Interval::EMPTY).is_empty());
    }

    #[test]
    fn multiplication_by_zero_with_unbounded_factor() {
        let zero = Interval::point(0.0);

        assert_eq!(zero * Interval::ENTIRE, zero);
    }
}
