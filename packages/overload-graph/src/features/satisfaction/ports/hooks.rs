//! Observation hooks
//!
//! The engine reports every step through [`SatisfactionHooks`]. Hooks see the
//! graph read-only and may block (waiting on user input, for instance); the
//! engine simply waits for each call to return. A hook returning an error
//! stops satisfaction and the error surfaces unchanged from `satisfy`.

use thiserror::Error;

use crate::features::constraint_graph::Graph;
use crate::features::satisfaction::domain::SatisfactionStats;
use crate::features::type_lattice::{FunctionSignature, Type};
use crate::shared::models::{ConstraintId, PositionId};

/// Error raised from inside a hook
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HookError {
    /// The driver withdrew permission to continue
    #[error("Satisfaction cancelled")]
    Cancelled,

    #[error("{0}")]
    Custom(String),
}

pub type HookResult = Result<(), HookError>;

/// One `(position, candidate)` cell of a node's type matrix
#[derive(Debug, Clone, Copy)]
pub struct MatrixCell<'g> {
    pub position: PositionId,
    pub candidate: &'g FunctionSignature,
}

impl<'g> MatrixCell<'g> {
    pub fn new(position: PositionId, candidate: &'g FunctionSignature) -> Self {
        Self {
            position,
            candidate,
        }
    }

    /// Type of the position on this cell's candidate
    pub fn ty(&self, graph: &Graph) -> Option<&'g Type> {
        graph.type_on(self.position, self.candidate)
    }
}

/// Event sink for the satisfaction engine
///
/// Every method defaults to a no-op, so sinks override only what they need.
/// In `on_type_check` and `on_match`, `accepting` is the cell on the
/// constraint's tail and `supplying` the cell on its head.
pub trait SatisfactionHooks {
    /// Before the first step, with every constraint pending
    fn on_start(&mut self, graph: &Graph, pending: &[ConstraintId]) -> HookResult {
        let _ = (graph, pending);
        Ok(())
    }

    /// A constraint was taken from the worklist
    fn on_constraint(&mut self, graph: &Graph, constraint: ConstraintId) -> HookResult {
        let _ = (graph, constraint);
        Ok(())
    }

    /// Two cells are about to be compared
    fn on_type_check(
        &mut self,
        graph: &Graph,
        accepting: MatrixCell<'_>,
        supplying: MatrixCell<'_>,
    ) -> HookResult {
        let _ = (graph, accepting, supplying);
        Ok(())
    }

    /// `unmatched` found no compatible cell on position `against`
    fn on_elimination(
        &mut self,
        graph: &Graph,
        unmatched: MatrixCell<'_>,
        against: PositionId,
    ) -> HookResult {
        let _ = (graph, unmatched, against);
        Ok(())
    }

    /// The compared cells are compatible
    fn on_match(
        &mut self,
        graph: &Graph,
        accepting: MatrixCell<'_>,
        supplying: MatrixCell<'_>,
    ) -> HookResult {
        let _ = (graph, accepting, supplying);
        Ok(())
    }

    /// The worklist is empty
    fn on_completion(&mut self, graph: &Graph, stats: &SatisfactionStats) -> HookResult {
        let _ = (graph, stats);
        Ok(())
    }
}

/// Hooks that observe nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl SatisfactionHooks for NoopHooks {}

impl<H: SatisfactionHooks + ?Sized> SatisfactionHooks for &mut H {
    fn on_start(&mut self, graph: &Graph, pending: &[ConstraintId]) -> HookResult {
        (**self).on_start(graph, pending)
    }

    fn on_constraint(&mut self, graph: &Graph, constraint: ConstraintId) -> HookResult {
        (**self).on_constraint(graph, constraint)
    }

    fn on_type_check(
        &mut self,
        graph: &Graph,
        accepting: MatrixCell<'_>,
        supplying: MatrixCell<'_>,
    ) -> HookResult {
        (**self).on_type_check(graph, accepting, supplying)
    }

    fn on_elimination(
        &mut self,
        graph: &Graph,
        unmatched: MatrixCell<'_>,
        against: PositionId,
    ) -> HookResult {
        (**self).on_elimination(graph, unmatched, against)
    }

    fn on_match(
        &mut self,
        graph: &Graph,
        accepting: MatrixCell<'_>,
        supplying: MatrixCell<'_>,
    ) -> HookResult {
        (**self).on_match(graph, accepting, supplying)
    }

    fn on_completion(&mut self, graph: &Graph, stats: &SatisfactionStats) -> HookResult {
        (**self).on_completion(graph, stats)
    }
}
