//! Interval branch-and-bound search.
//!
//! # Algorithm
//!
//! The solver keeps a buffer of cells, each holding a box. Starting from the
//! root cell built from the initial box, every iteration takes the cell at the
//! top of the buffer and:
//!
//! 1. Sets the impact set: all dimensions for the root, otherwise only the
//!    variable whose bisection produced the cell.
//! 2. Calls the `precontract` hook, then the [`Contractor`] if the box is still
//!    non-empty, then the `other_checks` hook if it is still non-empty.
//! 3. Calls the `postcontract` hook. An empty box proves the region holds no
//!    solution: the cell is discarded and the next one is taken.
//! 4. Calls the `prebisect` hook and asks the [`Bisector`] for a split. On
//!    success, the `update_buffer_info` hook sees the parent, which is then
//!    replaced in the buffer by its two children. The cell limit and then the
//!    time limit are checked.
//! 5. A cell that cannot be split is terminal. If the [`SolutionTest`] accepts
//!    it, its box is appended to the output and the `postsolution` hook runs.
//!    Either way the cell is discarded and [`Solver::advance`] returns.
//!
//! The time limit is checked only after a successful bisection. A long run of
//! terminal or emptied cells can therefore overrun it.
//!
//! # Limits
//!
//! Reaching a limit is not an error: `advance` returns
//! [`Advance::LimitReached`] and leaves the buffer intact. Collaborator
//! failures are returned as [`Error`] with the failing box and iteration.
//!
//! # Observer Events
//!
//! - [`Event::Visit`] — before each cell is processed
//! - [`Event::Solution`] — after each accepted box
//! - [`Event::LimitReached`] — when a limit ends an `advance` call
//!
//! Observers can return [`Action::StopEarly`] from `Visit` or `Solution` to
//! end the current `advance` with [`Advance::StoppedByObserver`].

mod action;
mod arena;
mod clock;
mod config;
mod engine;
mod error;
mod event;
mod solution;
mod stats;


pub use action::Action;
pub use config::{Config, ConfigError, TraceLevel};
pub use error::Error;
pub use event::Event;
pub use solution::{Advance, Limit, Solution, Status};
pub use stats::Stats;

use paver_core::{
    Bisector, Capabilities, Cell, CellBuffer, Contractor, HookPoint, Hooks, Impact, IntervalBox,
    Observer, SolutionTest,
};

use crate::{accept::AcceptAll, buffers::CellStack};

use arena::CellArena;
use clock::Stopwatch;

/// A branch-and-bound search over interval boxes.
///
/// The solver owns its collaborators, the cells of the current session, and
/// the session's statistics and elapsed time. Several solvers can run side by
/// side without sharing any state.
#[derive(Debug)]
pub struct Solver<C, B, S = AcceptAll, H = (), Q = CellStack> {
    contractor: C,
    bisector: B,
    test: S,
    hooks: H,
    buffer: Q,
    config: Config,
    arena: CellArena,
    impact: Impact,
    stats: Stats,
    clock: Stopwatch,
    started: bool,
}

impl<C, B> Solver<C, B>
where
    C: Contractor,
    B: Bisector,
{
    /// Creates a depth-first solver that accepts every terminal box.
    pub fn new(contractor: C, bisector: B, config: Config) -> Self {
        Self {
            contractor,
            bisector,
            test: AcceptAll,
            hooks: (),
            buffer: CellStack::default(),
            config,
            arena: CellArena::default(),
            impact: Impact::none(0),
            stats: Stats::default(),
            clock: Stopwatch::default(),
            started: false,
        }
    }
}

impl<C, B, S, H, Q> Solver<C, B, S, H, Q>
where
    C: Contractor,
    B: Bisector,
    S: SolutionTest,
    H: Hooks,
    Q: CellBuffer,
{
    /// Replaces the solution test.
    #[must_use]
    pub fn with_solution_test<S2: SolutionTest>(self, test: S2) -> Solver<C, B, S2, H, Q> {
        Solver {
            contractor: self.contractor,
            bisector: self.bisector,
            test,
            hooks: self.hooks,
            buffer: self.buffer,
            config: self.config,
            arena: self.arena,
            impact: self.impact,
            stats: self.stats,
            clock: self.clock,
            started: self.started,
        }
    }

    /// Replaces the hook set.
    #[must_use]
    pub fn with_hooks<H2: Hooks>(self, hooks: H2) -> Solver<C, B, S, H2, Q> {
        Solver {
            contractor: self.contractor,
            bisector: self.bisector,
            test: self.test,
            hooks,
            buffer: self.buffer,
            config: self.config,
            arena: self.arena,
            impact: self.impact,
            stats: self.stats,
            clock: self.clock,
            started: self.started,
        }
    }

    /// Replaces the buffer, which sets the traversal order.
    ///
    /// Cells of an already started session are discarded, so the solver must
    /// be started again.
    #[must_use]
    pub fn with_buffer<Q2: CellBuffer>(self, buffer: Q2) -> Solver<C, B, S, H, Q2> {
        let mut arena = self.arena;
        arena.clear();
        Solver {
            contractor: self.contractor,
            bisector: self.bisector,
            test: self.test,
            hooks: self.hooks,
            buffer,
            config: self.config,
            arena,
            impact: self.impact,
            stats: self.stats,
            clock: self.clock,
            started: false,
        }
    }

    /// Starts a new session from `initial`.
    ///
    /// Any cells left from a previous session are discarded. Statistics and
    /// the elapsed time restart from zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the box is empty, has no dimensions, or does not
    /// match the contractor's variable count, or if the `init_buffer_info`
    /// hook fails on the root cell.
    pub fn start(&mut self, initial: IntervalBox) -> Result<(), Error> {
        if initial.dim() == 0 {
            return Err(Error::ZeroDimension);
        }
        if initial.is_empty() {
            return Err(Error::EmptyInitialBox);
        }
        let expected = self.contractor.nb_var();
        if initial.dim() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                found: initial.dim(),
            });
        }

        for id in self.buffer.flush() {
            self.arena.remove(id);
        }
        debug_assert_eq!(self.arena.len(), 0, "cells outlived the buffer");
        self.arena.clear();
        self.started = false;

        self.impact = Impact::all(initial.dim());
        self.stats = Stats::default();
        self.clock.reset();

        let capabilities: Capabilities = self.bisector.capabilities() | self.hooks.capabilities();
        let mut root = Cell::root(initial, capabilities);
        self.hooks
            .init_buffer_info(&mut root)
            .map_err(|e| Error::hook(HookPoint::InitBufferInfo, 0, &root.bx, e))?;

        let id = self.arena.insert(root);
        self.buffer.push(id, &self.arena[id]);
        self.started = true;
        Ok(())
    }

    /// Processes cells until a terminal cell is dispositioned, the buffer runs
    /// empty, a limit is reached, or the observer stops the search.
    ///
    /// Accepted boxes are appended to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] if [`start`](Self::start) has not been
    /// called, or an error if a collaborator fails.
    pub fn advance<Obs>(
        &mut self,
        out: &mut Vec<IntervalBox>,
        observer: &mut Obs,
    ) -> Result<Advance, Error>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        if !self.started {
            return Err(Error::NotStarted);
        }
        self.advance_started(out, observer)
    }

    /// Runs a full session from `initial` and returns every accepted box.
    ///
    /// The session ends when the buffer is empty, a limit is reached, or the
    /// observer stops it; the partial result is returned in each case.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial box is invalid or a collaborator fails.
    pub fn solve<Obs>(&mut self, initial: IntervalBox, mut observer: Obs) -> Result<Solution, Error>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        self.start(initial)?;

        let mut boxes = Vec::new();
        let status = loop {
            match self.advance(&mut boxes, &mut observer)? {
                Advance::Continue => {}
                Advance::Finished => break Status::Complete,
                Advance::LimitReached(limit) => break Status::from(limit),
                Advance::StoppedByObserver => break Status::StoppedByObserver,
            }
        };

        Ok(Solution {
            status,
            boxes,
            stats: self.stats,
        })
    }

    /// Runs a full session without observer support.
    ///
    /// This is a convenience wrapper around [`solve`](Self::solve) that uses
    /// a no-op observer.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial box is invalid or a collaborator fails.
    pub fn solve_unobserved(&mut self, initial: IntervalBox) -> Result<Solution, Error> {
        self.solve(initial, ())
    }

    /// Returns the statistics of the current session.
    #[must_use]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the number of cells waiting in the buffer.
    #[must_use]
    pub fn buffer_len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the hook set, for reading results such as an incumbent.
    #[must_use]
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Returns the contractor.
    #[must_use]
    pub fn contractor(&self) -> &C {
        &self.contractor
    }
}
