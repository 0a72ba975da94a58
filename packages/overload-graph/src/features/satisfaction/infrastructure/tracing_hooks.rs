//! Hook sink that mirrors engine events into `tracing`

use tracing::trace;

use crate::features::constraint_graph::Graph;
use crate::features::satisfaction::domain::SatisfactionStats;
use crate::features::satisfaction::ports::{HookResult, MatrixCell, NoopHooks, SatisfactionHooks};
use crate::shared::models::{ConstraintId, PositionId};

/// Emits a `trace!` per event, then forwards to `inner`
#[derive(Debug, Clone, Default)]
pub struct TracingHooks<H = NoopHooks> {
    inner: H,
}

impl<H: SatisfactionHooks> TracingHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }

    pub fn into_inner(self) -> H {
        self.inner
    }
}

fn cell(graph: &Graph, cell: MatrixCell<'_>) -> String {
    match cell.ty(graph) {
        Some(ty) => format!("{}:{} on {}", graph.label_of(cell.position), ty, cell.candidate),
        None => format!("{}:? on {}", graph.label_of(cell.position), cell.candidate),
    }
}

impl<H: SatisfactionHooks> SatisfactionHooks for TracingHooks<H> {
    fn on_start(&mut self, graph: &Graph, pending: &[ConstraintId]) -> HookResult {
        trace!(target: "overload_graph::hooks", pending = pending.len(), "start");
        self.inner.on_start(graph, pending)
    }

    fn on_constraint(&mut self, graph: &Graph, constraint: ConstraintId) -> HookResult {
        trace!(
            target: "overload_graph::hooks",
            constraint = %graph.constraint_label(constraint),
            "constraint"
        );
        self.inner.on_constraint(graph, constraint)
    }

    fn on_type_check(
        &mut self,
        graph: &Graph,
        accepting: MatrixCell<'_>,
        supplying: MatrixCell<'_>,
    ) -> HookResult {
        trace!(
            target: "overload_graph::hooks",
            accepting = %cell(graph, accepting),
            supplying = %cell(graph, supplying),
            "type check"
        );
        self.inner.on_type_check(graph, accepting, supplying)
    }

    fn on_elimination(
        &mut self,
        graph: &Graph,
        unmatched: MatrixCell<'_>,
        against: PositionId,
    ) -> HookResult {
        trace!(
            target: "overload_graph::hooks",
            unmatched = %cell(graph, unmatched),
            against = %graph.label_of(against),
            "elimination"
        );
        self.inner.on_elimination(graph, unmatched, against)
    }

    fn on_match(
        &mut self,
        graph: &Graph,
        accepting: MatrixCell<'_>,
        supplying: MatrixCell<'_>,
    ) -> HookResult {
        trace!(
            target: "overload_graph::hooks",
            accepting = %cell(graph, accepting),
            supplying = %cell(graph, supplying),
            "match"
        );
        self.inner.on_match(graph, accepting, supplying)
    }

    fn on_completion(&mut self, graph: &Graph, stats: &SatisfactionStats) -> HookResult {
        trace!(
            target: "overload_graph::hooks",
            steps = stats.steps,
            eliminations = stats.eliminations,
            "completion"
        );
        self.inner.on_completion(graph, stats)
    }
}
