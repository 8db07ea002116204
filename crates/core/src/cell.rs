use std::ops::BitOr;

use crate::IntervalBox;

/// A handle to a live cell in the engine's arena.
///
/// Handles are only meaningful to the engine that issued them and may be
/// reused once the cell they referred to has been discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(usize);

impl CellId {
    /// Creates a handle from a raw arena index.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw arena index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Payload kinds a collaborator can ask to have attached to every cell.
///
/// The last bisected variable is always tracked and needs no tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities(u8);

impl Capabilities {
    /// No optional payloads.
    pub const NONE: Self = Self(0);

    /// A cached objective lower bound from a relaxation.
    pub const RELAXATION: Self = Self(1);

    /// Returns `true` if every tag in `other` is also in `self`.
    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Capabilities {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// A lower bound on the objective over a cell's box.
///
/// A child inherits its parent's bound marked as stale: the bound is still
/// valid for the smaller box, but a tighter one may exist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelaxationCache {
    pub lower_bound: f64,
    pub stale: bool,
}

impl RelaxationCache {
    /// A cache holding no information yet.
    pub const UNBOUNDED: Self = Self {
        lower_bound: f64::NEG_INFINITY,
        stale: true,
    };

    /// A freshly computed bound.
    #[must_use]
    pub fn fresh(lower_bound: f64) -> Self {
        Self {
            lower_bound,
            stale: false,
        }
    }

    fn inherited(self) -> Self {
        Self {
            stale: true,
            ..self
        }
    }
}

/// Algorithm data attached to a cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellData {
    /// The variable whose split produced this cell, or `None` for the root.
    pub last_bisected: Option<usize>,

    /// Present only when a collaborator requested [`Capabilities::RELAXATION`].
    pub relaxation: Option<RelaxationCache>,
}

impl CellData {
    fn root(capabilities: Capabilities) -> Self {
        Self {
            last_bisected: None,
            relaxation: capabilities
                .contains(Capabilities::RELAXATION)
                .then_some(RelaxationCache::UNBOUNDED),
        }
    }

    fn child(&self, var: usize) -> Self {
        Self {
            last_bisected: Some(var),
            relaxation: self.relaxation.map(RelaxationCache::inherited),
        }
    }
}

/// A node of the search tree: a box plus its attached data.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub bx: IntervalBox,
    pub data: CellData,
    pub depth: usize,
}

impl Cell {
    /// Creates the root cell with the payloads named by `capabilities`.
    #[must_use]
    pub fn root(bx: IntervalBox, capabilities: Capabilities) -> Self {
        Self {
            bx,
            data: CellData::root(capabilities),
            depth: 0,
        }
    }

    /// Creates the two children of a split along `var`.
    ///
    /// Each payload derives its child value from the parent's.
    #[must_use]
    pub fn split(&self, var: usize, left: IntervalBox, right: IntervalBox) -> (Self, Self) {
        let child = |bx| Self {
            bx,
            data: self.data.child(var),
            depth: self.depth + 1,
        };
        (child(left), child(right))
    }

    /// Returns `true` if this is the root of the search tree.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.data.last_bisected.is_none()
    }
}
