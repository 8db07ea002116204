use std::error::Error as StdError;

use thiserror::Error;

use paver_core::{HookPoint, IntervalBox};

/// Errors that can occur during a search.
///
/// Reaching a time or cell limit is not an error; see
/// [`Advance::LimitReached`](super::Advance::LimitReached). Invalid limits
/// are rejected earlier, when the [`Config`](super::Config) is built.
///
/// A failing collaborator leaves the search resumable with another call to
/// `advance`: the cell it was working on stays in the buffer, unless it had
/// already been accepted as a solution.
#[derive(Debug, Error)]
pub enum Error {
    #[error("initial box is empty")]
    EmptyInitialBox,

    #[error("initial box has no dimensions")]
    ZeroDimension,

    #[error("initial box has {found} dimensions but the contractor expects {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("advance called before start")]
    NotStarted,

    #[error("bisector split variable {var} invalidly at iteration {iteration} on {bx}")]
    InvalidSplit {
        iteration: usize,
        var: usize,
        bx: IntervalBox,
    },

    #[error("contractor failed at iteration {iteration} on {bx}")]
    Contractor {
        iteration: usize,
        bx: IntervalBox,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("bisector failed at iteration {iteration} on {bx}")]
    Bisector {
        iteration: usize,
        bx: IntervalBox,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("{point} hook failed at iteration {iteration} on {bx}")]
    Hook {
        point: HookPoint,
        iteration: usize,
        bx: IntervalBox,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    pub(super) fn contractor<E>(iteration: usize, bx: &IntervalBox, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Contractor {
            iteration,
            bx: bx.clone(),
            source: Box::new(source),
        }
    }

    pub(super) fn bisector<E>(iteration: usize, bx: &IntervalBox, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Bisector {
            iteration,
            bx: bx.clone(),
            source: Box::new(source),
        }
    }

    pub(super) fn hook<E>(point: HookPoint, iteration: usize, bx: &IntervalBox, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Hook {
            point,
            iteration,
            bx: bx.clone(),
            source: Box::new(source),
        }
    }
}
