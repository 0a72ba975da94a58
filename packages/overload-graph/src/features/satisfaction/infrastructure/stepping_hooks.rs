//! Step-by-step execution
//!
//! [`SteppingHooks`] suspends the engine before selected events until the
//! driver grants a step permit through its [`StepController`]. Dropping the
//! controller cancels the run: the next halting event fails with
//! [`HookError::Cancelled`].
//!
//! Waiting uses `blocking_recv`, so the engine must not run on an async
//! runtime worker thread. Run it on a plain thread (or `spawn_blocking`) and
//! drive it from anywhere.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::features::constraint_graph::Graph;
use crate::features::satisfaction::domain::SatisfactionStats;
use crate::features::satisfaction::ports::{
    HookError, HookResult, MatrixCell, NoopHooks, SatisfactionHooks,
};
use crate::shared::models::{ConstraintId, PositionId};

/// Which events wait for a permit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HaltPolicy {
    pub on_start: bool,
    pub on_constraint: bool,
    pub on_type_check: bool,
    pub on_elimination: bool,
    pub on_match: bool,
}

impl HaltPolicy {
    /// One permit per dequeued constraint
    pub fn per_constraint() -> Self {
        Self {
            on_start: false,
            on_constraint: true,
            on_type_check: false,
            on_elimination: false,
            on_match: false,
        }
    }

    pub fn every_event() -> Self {
        Self {
            on_start: true,
            on_constraint: true,
            on_type_check: true,
            on_elimination: true,
            on_match: true,
        }
    }
}

impl Default for HaltPolicy {
    fn default() -> Self {
        Self::per_constraint()
    }
}

/// Driver side of a [`SteppingHooks`] pair
#[derive(Debug, Clone)]
pub struct StepController {
    permits: UnboundedSender<()>,
}

impl StepController {
    /// Grant one step; false once the engine side is gone
    pub fn step(&self) -> bool {
        self.permits.send(()).is_ok()
    }

    /// Grant `n` steps
    pub fn step_n(&self, n: usize) -> bool {
        (0..n).all(|_| self.step())
    }

    /// Stop the run at its next halting event
    pub fn cancel(self) {
        drop(self);
    }

    pub fn is_closed(&self) -> bool {
        self.permits.is_closed()
    }
}

/// Hook sink that waits for a permit before forwarding halting events
#[derive(Debug)]
pub struct SteppingHooks<H = NoopHooks> {
    inner: H,
    policy: HaltPolicy,
    permits: UnboundedReceiver<()>,
    halts: usize,
}

impl<H: SatisfactionHooks> SteppingHooks<H> {
    pub fn new(inner: H, policy: HaltPolicy) -> (Self, StepController) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let hooks = Self {
            inner,
            policy,
            permits: receiver,
            halts: 0,
        };
        (hooks, StepController { permits: sender })
    }

    /// Permits consumed so far
    pub fn halts(&self) -> usize {
        self.halts
    }

    pub fn into_inner(self) -> H {
        self.inner
    }

    fn wait(&mut self, halting: bool) -> HookResult {
        if !halting {
            return Ok(());
        }
        self.permits.blocking_recv().ok_or(HookError::Cancelled)?;
        self.halts += 1;
        Ok(())
    }
}

impl<H: SatisfactionHooks> SatisfactionHooks for SteppingHooks<H> {
    fn on_start(&mut self, graph: &Graph, pending: &[ConstraintId]) -> HookResult {
        self.wait(self.policy.on_start)?;
        self.inner.on_start(graph, pending)
    }

    fn on_constraint(&mut self, graph: &Graph, constraint: ConstraintId) -> HookResult {
        self.wait(self.policy.on_constraint)?;
        self.inner.on_constraint(graph, constraint)
    }

    fn on_type_check(
        &mut self,
        graph: &Graph,
        accepting: MatrixCell<'_>,
        supplying: MatrixCell<'_>,
    ) -> HookResult {
        self.wait(self.policy.on_type_check)?;
        self.inner.on_type_check(graph, accepting, supplying)
    }

    fn on_elimination(
        &mut self,
        graph: &Graph,
        unmatched: MatrixCell<'_>,
        against: PositionId,
    ) -> HookResult {
        self.wait(self.policy.on_elimination)?;
        self.inner.on_elimination(graph, unmatched, against)
    }

    fn on_match(
        &mut self,
        graph: &Graph,
        accepting: MatrixCell<'_>,
        supplying: MatrixCell<'_>,
    ) -> HookResult {
        self.wait(self.policy.on_match)?;
        self.inner.on_match(graph, accepting, supplying)
    }

    fn on_completion(&mut self, graph: &Graph, stats: &SatisfactionStats) -> HookResult {
        self.inner.on_completion(graph, stats)
    }
}
