//! Event-recording hook sink
//!
//! Captures every engine event as plain data (labels and rendered types)
//! so a run can be asserted on after the fact or exported as JSON.

use serde::{Deserialize, Serialize};

use crate::features::constraint_graph::Graph;
use crate::features::satisfaction::domain::SatisfactionStats;
use crate::features::satisfaction::ports::{HookResult, MatrixCell, SatisfactionHooks};
use crate::shared::models::{ConstraintId, PositionId};

/// A matrix cell rendered for the record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    /// Position label (`p3`)
    pub position: String,
    /// Candidate signature
    pub candidate: String,
    /// Type of the position on the candidate
    pub ty: Option<String>,
}

impl CellRecord {
    fn capture(graph: &Graph, cell: MatrixCell<'_>) -> Self {
        Self {
            position: graph.label_of(cell.position).into_owned(),
            candidate: cell.candidate.to_string(),
            ty: cell.ty(graph).map(|ty| ty.to_string()),
        }
    }
}

/// One engine event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SatisfactionEvent {
    Start {
        pending: Vec<String>,
    },
    Constraint {
        constraint: String,
    },
    TypeCheck {
        accepting: CellRecord,
        supplying: CellRecord,
    },
    Elimination {
        unmatched: CellRecord,
        against: String,
    },
    Match {
        accepting: CellRecord,
        supplying: CellRecord,
    },
    Completion {
        stats: SatisfactionStats,
    },
}

impl SatisfactionEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            SatisfactionEvent::Start { .. } => "start",
            SatisfactionEvent::Constraint { .. } => "constraint",
            SatisfactionEvent::TypeCheck { .. } => "type_check",
            SatisfactionEvent::Elimination { .. } => "elimination",
            SatisfactionEvent::Match { .. } => "match",
            SatisfactionEvent::Completion { .. } => "completion",
        }
    }
}

/// Hook sink that keeps every event in order
#[derive(Debug, Clone, Default)]
pub struct RecordingHooks {
    events: Vec<SatisfactionEvent>,
}

impl RecordingHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SatisfactionEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<SatisfactionEvent> {
        self.events
    }

    /// Number of recorded events of `kind` (see [`SatisfactionEvent::kind`])
    pub fn count(&self, kind: &str) -> usize {
        self.events.iter().filter(|event| event.kind() == kind).count()
    }

    /// Constraint labels in dequeue order
    pub fn steps(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SatisfactionEvent::Constraint { constraint } => Some(constraint.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Eliminated cells in order
    pub fn eliminated(&self) -> Vec<&CellRecord> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SatisfactionEvent::Elimination { unmatched, .. } => Some(unmatched),
                _ => None,
            })
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.events)
    }

    fn push(&mut self, event: SatisfactionEvent) -> HookResult {
        self.events.push(event);
        Ok(())
    }
}

impl SatisfactionHooks for RecordingHooks {
    fn on_start(&mut self, graph: &Graph, pending: &[ConstraintId]) -> HookResult {
        let pending = pending
            .iter()
            .map(|id| graph.constraint_label(*id))
            .collect();
        self.push(SatisfactionEvent::Start { pending })
    }

    fn on_constraint(&mut self, graph: &Graph, constraint: ConstraintId) -> HookResult {
        self.push(SatisfactionEvent::Constraint {
            constraint: graph.constraint_label(constraint),
        })
    }

    fn on_type_check(
        &mut self,
        graph: &Graph,
        accepting: MatrixCell<'_>,
        supplying: MatrixCell<'_>,
    ) -> HookResult {
        self.push(SatisfactionEvent::TypeCheck {
            accepting: CellRecord::capture(graph, accepting),
            supplying: CellRecord::capture(graph, supplying),
        })
    }

    fn on_elimination(
        &mut self,
        graph: &Graph,
        unmatched: MatrixCell<'_>,
        against: PositionId,
    ) -> HookResult {
        self.push(SatisfactionEvent::Elimination {
            unmatched: CellRecord::capture(graph, unmatched),
            against: graph.label_of(against).into_owned(),
        })
    }

    fn on_match(
        &mut self,
        graph: &Graph,
        accepting: MatrixCell<'_>,
        supplying: MatrixCell<'_>,
    ) -> HookResult {
        self.push(SatisfactionEvent::Match {
            accepting: CellRecord::capture(graph, accepting),
            supplying: CellRecord::capture(graph, supplying),
        })
    }

    fn on_completion(&mut self, _graph: &Graph, stats: &SatisfactionStats) -> HookResult {
        self.push(SatisfactionEvent::Completion {
            stats: stats.clone(),
        })
    }
}
