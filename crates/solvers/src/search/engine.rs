use paver_core::{
    Bisection, Bisector, CellBuffer, CellId, Contractor, HookPoint, Hooks, IntervalBox, Observer,
    SolutionTest,
};
use tracing::{debug, info};

use super::{Action, Advance, Error, Event, Limit, Solver, TraceLevel};

/// Reasons to leave the per-cell logic early.
///
/// Limits and observer stops are control flow, not failures. They unwind
/// through `?` like errors but are turned back into an [`Advance`] at the
/// `advance` boundary.
enum Interrupt {
    Limit(Limit),
    Stop,
    Failure(Error),
}

impl From<Error> for Interrupt {
    fn from(error: Error) -> Self {
        Self::Failure(error)
    }
}

/// How processing one cell ended, when no interrupt was raised.
enum Step {
    /// The cell was emptied or split; keep going.
    Continue,

    /// The cell could not be split and has been discarded.
    Terminal,
}

impl<C, B, S, H, Q> Solver<C, B, S, H, Q>
where
    C: Contractor,
    B: Bisector,
    S: SolutionTest,
    H: Hooks,
    Q: CellBuffer,
{
    pub(super) fn advance_started<Obs>(
        &mut self,
        out: &mut Vec<IntervalBox>,
        observer: &mut Obs,
    ) -> Result<Advance, Error>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        self.clock.resume();
        let outcome = self.run(out, observer);
        self.clock.pause();
        self.stats.elapsed = self.clock.elapsed();

        match outcome {
            Ok(advance) => Ok(advance),
            Err(Interrupt::Limit(limit)) => {
                match limit {
                    Limit::Time => info!(elapsed = ?self.stats.elapsed, "time limit reached"),
                    Limit::Cells => info!(nodes = self.stats.nodes, "cell limit reached"),
                }
                let event = Event::LimitReached {
                    limit,
                    stats: &self.stats,
                };
                let _ = observer.observe(&event);
                Ok(Advance::LimitReached(limit))
            }
            Err(Interrupt::Stop) => Ok(Advance::StoppedByObserver),
            Err(Interrupt::Failure(error)) => Err(error),
        }
    }

    fn run<Obs>(
        &mut self,
        out: &mut Vec<IntervalBox>,
        observer: &mut Obs,
    ) -> Result<Advance, Interrupt>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        while let Some(id) = self.buffer.top() {
            if let Step::Terminal = self.step(id, out, observer)? {
                return Ok(if self.buffer.is_empty() {
                    Advance::Finished
                } else {
                    Advance::Continue
                });
            }
        }
        Ok(Advance::Finished)
    }

    /// Processes the cell at the top of the buffer.
    fn step<Obs>(
        &mut self,
        id: CellId,
        out: &mut Vec<IntervalBox>,
        observer: &mut Obs,
    ) -> Result<Step, Interrupt>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        let buffer_len = self.buffer.len();
        if self.config.trace() >= TraceLevel::Buffer {
            debug!(
                buffer_len,
                nodes = self.stats.nodes,
                top = %self.arena[id].bx,
                "visiting cell"
            );
        }
        let event = Event::Visit {
            cell: &self.arena[id],
            buffer_len,
            stats: &self.stats,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Err(Interrupt::Stop);
        }

        self.stats.iterations += 1;
        let iteration = self.stats.iterations;
        let last_bisected = self.arena[id].data.last_bisected;

        match last_bisected {
            Some(var) => {
                self.impact.clear();
                self.impact.add(var);
            }
            None => self.impact.fill(),
        }

        self.contract(id, iteration)?;

        self.hooks
            .postcontract(&mut self.arena[id])
            .map_err(|e| Error::hook(HookPoint::Postcontract, iteration, &self.arena[id].bx, e))?;

        // The contraction has now accounted for the split variable.
        match last_bisected {
            Some(var) => self.impact.remove(var),
            None => self.impact.clear(),
        }

        if self.arena[id].bx.is_empty() {
            self.discard(id);
            self.stats.emptied += 1;
            return Ok(Step::Continue);
        }

        self.hooks
            .prebisect(&mut self.arena[id])
            .map_err(|e| Error::hook(HookPoint::Prebisect, iteration, &self.arena[id].bx, e))?;

        let bisection = self
            .bisector
            .bisect(&self.arena[id])
            .map_err(|e| Error::bisector(iteration, &self.arena[id].bx, e))?;

        match bisection {
            Bisection::Split { var, left, right } => {
                self.check_split(id, iteration, var, &left, &right)?;
                self.split(id, iteration, var, left, right)?;
                self.check_limits()?;
                Ok(Step::Continue)
            }
            Bisection::NotBisectable => {
                self.conclude(id, iteration, out, observer)?;
                Ok(Step::Terminal)
            }
        }
    }

    /// Runs the contraction phase on a cell: `precontract`, the contractor,
    /// and `other_checks`, stopping as soon as the box is empty.
    fn contract(&mut self, id: CellId, iteration: usize) -> Result<(), Error> {
        self.hooks
            .precontract(&mut self.arena[id])
            .map_err(|e| Error::hook(HookPoint::Precontract, iteration, &self.arena[id].bx, e))?;

        if self.arena[id].bx.is_empty() {
            return Ok(());
        }
        self.contractor
            .contract(&mut self.arena[id].bx, &self.impact)
            .map_err(|e| Error::contractor(iteration, &self.arena[id].bx, e))?;

        if self.arena[id].bx.is_empty() {
            return Ok(());
        }
        self.hooks
            .other_checks(&mut self.arena[id])
            .map_err(|e| Error::hook(HookPoint::OtherChecks, iteration, &self.arena[id].bx, e))
    }

    /// Rejects a split that would corrupt the search: a variable out of
    /// range, children of the wrong dimension, or a child equal to its parent.
    fn check_split(
        &self,
        id: CellId,
        iteration: usize,
        var: usize,
        left: &IntervalBox,
        right: &IntervalBox,
    ) -> Result<(), Error> {
        let parent = &self.arena[id].bx;
        let dim = parent.dim();
        let valid = var < dim
            && left.dim() == dim
            && right.dim() == dim
            && left != parent
            && right != parent;
        if valid {
            Ok(())
        } else {
            Err(Error::InvalidSplit {
                iteration,
                var,
                bx: parent.clone(),
            })
        }
    }

    /// Replaces a cell in the buffer by its two children.
    ///
    /// The parent stays at the top of the buffer until both children are
    /// initialized, so a failing hook leaves the search resumable.
    fn split(
        &mut self,
        id: CellId,
        iteration: usize,
        var: usize,
        left: IntervalBox,
        right: IntervalBox,
    ) -> Result<(), Error> {
        self.hooks
            .update_buffer_info(&self.arena[id])
            .map_err(|e| {
                Error::hook(HookPoint::UpdateBufferInfo, iteration, &self.arena[id].bx, e)
            })?;

        let (mut first, mut second) = self.arena[id].split(var, left, right);
        for child in [&mut first, &mut second] {
            self.hooks
                .init_buffer_info(child)
                .map_err(|e| Error::hook(HookPoint::InitBufferInfo, iteration, &child.bx, e))?;
        }

        self.discard(id);
        self.stats.bisections += 1;
        self.stats.nodes += 2;
        for child in [first, second] {
            let child_id = self.arena.insert(child);
            self.buffer.push(child_id, &self.arena[child_id]);
        }
        Ok(())
    }

    /// Checks the cell limit, then the time limit.
    fn check_limits(&mut self) -> Result<(), Interrupt> {
        if let Some(max) = self.config.cell_limit() {
            if self.stats.nodes >= max {
                return Err(Interrupt::Limit(Limit::Cells));
            }
        }
        if let Some(max) = self.config.time_limit() {
            self.stats.elapsed = self.clock.elapsed();
            if self.stats.elapsed >= max {
                return Err(Interrupt::Limit(Limit::Time));
            }
        }
        Ok(())
    }

    /// Accepts or rejects a cell that cannot be split, then discards it.
    fn conclude<Obs>(
        &mut self,
        id: CellId,
        iteration: usize,
        out: &mut Vec<IntervalBox>,
        observer: &mut Obs,
    ) -> Result<(), Interrupt>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        let accepted = !self.arena[id].bx.is_empty() && self.test.accepts(&self.arena[id]);
        if !accepted {
            self.discard(id);
            self.stats.rejected += 1;
            return Ok(());
        }

        let index = self.stats.solutions;
        out.push(self.arena[id].bx.clone());
        self.stats.solutions += 1;
        if self.config.trace() >= TraceLevel::Solutions {
            info!(
                index,
                nodes = self.stats.nodes,
                bx = %self.arena[id].bx,
                "solution found"
            );
        }

        self.discard(id);
        self.hooks
            .postsolution()
            .map_err(|e| Error::hook(HookPoint::Postsolution, iteration, &out[out.len() - 1], e))?;

        let event = Event::Solution {
            bx: &out[out.len() - 1],
            index,
            stats: &self.stats,
        };
        match observer.observe(&event) {
            Some(Action::StopEarly) => Err(Interrupt::Stop),
            None => Ok(()),
        }
    }

    /// Pops the top cell and destroys it.
    fn discard(&mut self, id: CellId) {
        let popped = self.buffer.pop();
        debug_assert_eq!(popped, Some(id), "processed cell was not at the top");
        self.arena.remove(id);
    }
}
