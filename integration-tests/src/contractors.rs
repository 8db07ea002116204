use std::convert::Infallible;

use paver_core::{Contractor, Impact, Interval, IntervalBox};

/// Contracts boxes onto the disk `x² + y² ≤ r²` by forward-backward
/// propagation through the constraint's expression tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk {
    pub radius: f64,
}

impl Contractor for Disk {
    type Error = Infallible;

    fn nb_var(&self) -> usize {
        2
    }

    fn contract(&mut self, bx: &mut IntervalBox, _impact: &Impact) -> Result<(), Self::Error> {
        let (x, y) = (bx[0], bx[1]);

        // Forward: evaluate each node over the box.
        let x2 = x.sqr();
        let y2 = y.sqr();
        let sum = (x2 + y2).intersect(&Interval::new(0.0, self.radius * self.radius));
        if sum.is_empty() {
            bx.set_empty();
            return Ok(());
        }

        // Backward: project the narrowed sum onto each variable.
        let x2 = x2.intersect(&(sum - y2));
        let y2 = y2.intersect(&(sum - x2));
        bx[0] = sqr_inverse(x, x2);
        bx[1] = sqr_inverse(y, y2);
        if bx.is_empty() {
            bx.set_empty();
        }
        Ok(())
    }
}

/// Narrows `x` to the values whose square lies in `square`.
fn sqr_inverse(x: Interval, square: Interval) -> Interval {
    let root = square.sqrt();
    x.intersect(&root).hull(&x.intersect(&-root))
}
