use fixedbitset::FixedBitSet;

/// The set of dimensions assumed to have changed since the last contraction.
///
/// Contractors use it to skip propagation through variables that did not
/// move. Passing a full set is always sound, only slower.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Impact {
    bits: FixedBitSet,
}

impl Impact {
    /// Creates an empty impact set over `n` dimensions.
    #[must_use]
    pub fn none(n: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(n),
        }
    }

    /// Creates an impact set containing all `n` dimensions.
    #[must_use]
    pub fn all(n: usize) -> Self {
        let mut impact = Self::none(n);
        impact.fill();
        impact
    }

    /// Returns the number of dimensions the set ranges over.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.bits.len()
    }

    /// Adds dimension `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn add(&mut self, i: usize) {
        self.bits.insert(i);
    }

    /// Removes dimension `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn remove(&mut self, i: usize) {
        self.bits.set(i, false);
    }

    /// Adds every dimension.
    pub fn fill(&mut self) {
        self.bits.insert_range(..);
    }

    /// Removes every dimension.
    pub fn clear(&mut self) {
        self.bits.clear();
    }

    /// Returns `true` if dimension `i` is in the set.
    #[must_use]
    pub fn contains(&self, i: usize) -> bool {
        self.bits.contains(i)
    }

    /// Returns how many dimensions are in the set.
    #[must_use]
    pub fn count(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Returns `true` if no dimension is in the set.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.count() == 0
    }

    /// Returns `true` if every dimension is in the set.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count() == self.dim()
    }

    /// Iterates over the dimensions in the set, in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.ones()
    }
}
