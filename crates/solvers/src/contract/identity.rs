use std::convert::Infallible;

use paver_core::{Contractor, Impact, IntervalBox};

/// A contractor that leaves every box unchanged.
///
/// With it, the search reduces to a plain paving of the initial box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    nb_var: usize,
}

impl Identity {
    /// Creates an identity contractor over `nb_var` variables.
    #[must_use]
    pub fn new(nb_var: usize) -> Self {
        Self { nb_var }
    }
}

impl Contractor for Identity {
    type Error = Infallible;

    fn nb_var(&self) -> usize {
        self.nb_var
    }

    fn contract(&mut self, _bx: &mut IntervalBox, _impact: &Impact) -> Result<(), Self::Error> {
        Ok(())
    }
}
