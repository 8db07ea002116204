//! Contracts for the pluggable pieces of a search.
//!
//! The engine drives these collaborators but never inspects how they work.
//! Every fallible collaborator names its own error type, which the engine
//! wraps with the failing cell's context before returning it.

use std::convert::Infallible;
use std::fmt;

use crate::{Capabilities, Cell, Impact, IntervalBox};

/// Narrows a box without removing any point that could be a solution.
pub trait Contractor {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the number of variables the contractor works over.
    fn nb_var(&self) -> usize;

    /// Contracts `bx` in place, emptying it if it provably holds no solution.
    ///
    /// `impact` names the dimensions that changed since the box was last
    /// contracted. Calling this twice on the same box must remain sound.
    ///
    /// # Errors
    ///
    /// Returns an error if contraction cannot be carried out.
    fn contract(&mut self, bx: &mut IntervalBox, impact: &Impact) -> Result<(), Self::Error>;
}

/// The outcome of asking a [`Bisector`] to split a cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Bisection {
    /// The box was split along `var` into two sub-boxes.
    Split {
        var: usize,
        left: IntervalBox,
        right: IntervalBox,
    },

    /// No dimension can be split without violating the minimum width.
    NotBisectable,
}

/// Chooses a dimension and splits a cell's box along it.
pub trait Bisector {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the cell payloads this bisector needs.
    fn capabilities(&self) -> Capabilities {
        Capabilities::NONE
    }

    /// Splits the cell, or reports that it cannot be split.
    ///
    /// # Errors
    ///
    /// Returns an error if the bisector fails for a reason other than the
    /// cell being too small to split.
    fn bisect(&mut self, cell: &Cell) -> Result<Bisection, Self::Error>;
}

/// Decides whether a non-bisectable cell is an accepted solution.
pub trait SolutionTest {
    fn accepts(&mut self, cell: &Cell) -> bool;
}

impl<F> SolutionTest for F
where
    F: FnMut(&Cell) -> bool,
{
    fn accepts(&mut self, cell: &Cell) -> bool {
        self(cell)
    }
}

/// Names a hook point, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookPoint {
    Precontract,
    OtherChecks,
    Postcontract,
    Prebisect,
    UpdateBufferInfo,
    Postsolution,
    InitBufferInfo,
}

impl fmt::Display for HookPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Precontract => "precontract",
            Self::OtherChecks => "other_checks",
            Self::Postcontract => "postcontract",
            Self::Prebisect => "prebisect",
            Self::UpdateBufferInfo => "update_buffer_info",
            Self::Postsolution => "postsolution",
            Self::InitBufferInfo => "init_buffer_info",
        };
        f.write_str(name)
    }
}

/// Extension points called by the engine as it processes each cell.
///
/// Every method defaults to a no-op. Hooks may narrow or empty a cell's box,
/// which the engine treats like a contraction. `()` is the empty hook set.
pub trait Hooks {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the cell payloads these hooks need.
    fn capabilities(&self) -> Capabilities {
        Capabilities::NONE
    }

    /// Called before the cell is contracted.
    ///
    /// # Errors
    ///
    /// Implementations decide; the engine stops the search and reports it.
    fn precontract(&mut self, _cell: &mut Cell) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called after contraction, only if the box is still non-empty.
    ///
    /// # Errors
    ///
    /// Implementations decide; the engine stops the search and reports it.
    fn other_checks(&mut self, _cell: &mut Cell) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called once contraction and checks are done, whether or not the box
    /// was emptied.
    ///
    /// # Errors
    ///
    /// Implementations decide; the engine stops the search and reports it.
    fn postcontract(&mut self, _cell: &mut Cell) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called right before the cell is bisected.
    ///
    /// # Errors
    ///
    /// Implementations decide; the engine stops the search and reports it.
    fn prebisect(&mut self, _cell: &mut Cell) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called after a successful split, before the parent leaves the buffer.
    ///
    /// # Errors
    ///
    /// Implementations decide; the engine stops the search and reports it.
    fn update_buffer_info(&mut self, _cell: &Cell) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called after a solution has been accepted.
    ///
    /// # Errors
    ///
    /// Implementations decide; the engine stops the search and reports it.
    fn postsolution(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called on every new cell before it is pushed into the buffer.
    ///
    /// # Errors
    ///
    /// Implementations decide; the engine stops the search and reports it.
    fn init_buffer_info(&mut self, _cell: &mut Cell) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Hooks for () {
    type Error = Infallible;
}
