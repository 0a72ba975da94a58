/*
 * Arc-Consistency Solver for Overload Resolution
 *
 * Worklist fixpoint over the constraint graph (AC-3).
 *
 * Algorithm:
 * 1. Enqueue every constraint
 * 2. While worklist not empty:
 *    a. Pop constraint (tail <- head)
 *    b. Narrow tail: keep c if some head candidate d has
 *       tail(c).is_assignable_from(head(d))
 *    c. Narrow head against the narrowed tail
 *    d. If a node lost candidates: requeue its other constraints
 * 3. Fixpoint reached when worklist empty
 *
 * Candidate lists only shrink, so the loop terminates after at most
 * (constraints + total candidates x node degree) steps. The final candidate
 * sets do not depend on the processing order.
 *
 * Empty or multi-candidate nodes are ordinary results; the solver never
 * fails on them. The only error path is a hook returning Err, which stops
 * the run and leaves the graph partially narrowed.
 */

use tracing::{debug, trace};

use crate::features::constraint_graph::Graph;
use crate::features::satisfaction::domain::{SatisfactionStats, WorklistOrder};
use crate::features::satisfaction::ports::{
    HookError, MatrixCell, NoopHooks, SatisfactionHooks,
};
use crate::features::type_lattice::FunctionSignature;
use crate::shared::models::ConstraintId;

use super::worklist::Worklist;

/// Narrow `graph` to arc consistency, processing constraints first-in first-out
pub fn satisfy(
    graph: &mut Graph,
    hooks: &mut dyn SatisfactionHooks,
) -> Result<SatisfactionStats, HookError> {
    satisfy_with(graph, hooks, WorklistOrder::Fifo)
}

/// [`satisfy`] with an explicit worklist order
pub fn satisfy_with(
    graph: &mut Graph,
    hooks: &mut dyn SatisfactionHooks,
    order: WorklistOrder,
) -> Result<SatisfactionStats, HookError> {
    ArcConsistencySolver::new(order).solve(graph, hooks)
}

/// Eliminations one more check of `constraint` would make, without mutating
///
/// Zero for every constraint once [`satisfy`] has returned.
pub fn pending_eliminations(graph: &Graph, constraint: ConstraintId) -> usize {
    let mut scratch = graph.clone();
    let mut stats = SatisfactionStats::default();
    ArcConsistencySolver::narrow(&mut scratch, constraint, &mut NoopHooks, &mut stats)
        .map(|(tail_removed, head_removed)| tail_removed + head_removed)
        .unwrap_or(0)
}

/// Which end of a constraint is being narrowed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum End {
    Tail,
    Head,
}

/// Worklist-driven arc-consistency solver
#[derive(Debug, Clone, Default)]
pub struct ArcConsistencySolver {
    order: WorklistOrder,
}

impl ArcConsistencySolver {
    pub fn new(order: WorklistOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> WorklistOrder {
        self.order
    }

    /// Run to fixpoint
    pub fn solve(
        &self,
        graph: &mut Graph,
        hooks: &mut dyn SatisfactionHooks,
    ) -> Result<SatisfactionStats, HookError> {
        let mut stats = SatisfactionStats::default();
        let mut worklist = Worklist::new(self.order, graph.constraint_count());
        for id in graph.constraint_ids() {
            worklist.push(id);
        }

        debug!(
            nodes = graph.node_count(),
            constraints = graph.constraint_count(),
            order = %self.order,
            "Starting satisfaction"
        );
        hooks.on_start(graph, &worklist.snapshot())?;

        while let Some(id) = worklist.pop() {
            stats.steps += 1;
            trace!(constraint = %graph.constraint_label(id), pending = worklist.len(), "Step");
            hooks.on_constraint(graph, id)?;

            let (tail_removed, head_removed) = Self::narrow(graph, id, hooks, &mut stats)?;

            let constraint = graph.constraint(id);
            let mut touched = Vec::with_capacity(2);
            if tail_removed > 0 {
                touched.push(graph.node_of(constraint.tail));
            }
            if head_removed > 0 {
                let head_node = graph.node_of(constraint.head);
                if !touched.contains(&head_node) {
                    touched.push(head_node);
                }
            }

            for node in touched {
                for &other in &graph.node(node).constraints {
                    if other != id && worklist.push(other) {
                        stats.requeued += 1;
                    }
                }
            }
        }

        debug!(
            steps = stats.steps,
            type_checks = stats.type_checks,
            eliminations = stats.eliminations,
            requeued = stats.requeued,
            "Satisfaction complete"
        );
        hooks.on_completion(graph, &stats)?;

        Ok(stats)
    }

    /// Narrow the tail, then the head; returns removal counts per end
    fn narrow(
        graph: &mut Graph,
        id: ConstraintId,
        hooks: &mut dyn SatisfactionHooks,
        stats: &mut SatisfactionStats,
    ) -> Result<(usize, usize), HookError> {
        let constraint = graph.constraint(id);

        let keep = Self::revise(graph, id, End::Tail, hooks, stats)?;
        let tail_removed = graph.retain_candidates(graph.node_of(constraint.tail), &keep);
        stats.eliminations += tail_removed;

        let keep = Self::revise(graph, id, End::Head, hooks, stats)?;
        let head_removed = graph.retain_candidates(graph.node_of(constraint.head), &keep);
        stats.eliminations += head_removed;

        Ok((tail_removed, head_removed))
    }

    /// Keep-flags for the candidates of one end of `id`
    ///
    /// A candidate is kept when at least one candidate on the other end makes
    /// the constraint hold. When both ends sit on the same node the only
    /// partner of a candidate is itself.
    fn revise(
        graph: &Graph,
        id: ConstraintId,
        end: End,
        hooks: &mut dyn SatisfactionHooks,
        stats: &mut SatisfactionStats,
    ) -> Result<Vec<bool>, HookError> {
        let constraint = graph.constraint(id);
        let (own, other) = match end {
            End::Tail => (constraint.tail, constraint.head),
            End::Head => (constraint.head, constraint.tail),
        };
        let own_node = graph.node_of(own);
        let other_node = graph.node_of(other);
        let same_node = own_node == other_node;

        let candidates = graph.candidates(own_node);
        let mut keep = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            let partners: &[FunctionSignature] = if same_node {
                std::slice::from_ref(candidate)
            } else {
                graph.candidates(other_node)
            };

            let own_cell = MatrixCell::new(own, candidate);
            let mut supported = false;

            for partner in partners {
                let other_cell = MatrixCell::new(other, partner);
                let (accepting, supplying) = match end {
                    End::Tail => (own_cell, other_cell),
                    End::Head => (other_cell, own_cell),
                };

                stats.type_checks += 1;
                hooks.on_type_check(graph, accepting, supplying)?;

                if compatible(graph, accepting, supplying) {
                    stats.matches += 1;
                    hooks.on_match(graph, accepting, supplying)?;
                    supported = true;
                    break;
                }
            }

            if !supported {
                trace!(
                    position = %graph.label_of(own),
                    candidate = %candidate,
                    against = %graph.label_of(other),
                    "Eliminating candidate"
                );
                hooks.on_elimination(graph, own_cell, other)?;
            }
            keep.push(supported);
        }

        Ok(keep)
    }
}

fn compatible(graph: &Graph, accepting: MatrixCell<'_>, supplying: MatrixCell<'_>) -> bool {
    match (accepting.ty(graph), supplying.ty(graph)) {
        (Some(accepting), Some(supplying)) => accepting.is_assignable_from(supplying),
        _ => false,
    }
}
