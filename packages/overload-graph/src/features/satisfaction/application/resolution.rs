//! Result of one resolution run

use serde::{Deserialize, Serialize};

use crate::features::constraint_graph::Graph;
use crate::features::satisfaction::domain::SatisfactionStats;
use crate::features::type_lattice::{FunctionSignature, Type};
use crate::shared::models::NodeId;

/// Outcome of one call site after satisfaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "candidates", rename_all = "snake_case")]
pub enum CallOutcome {
    Resolved,
    Ambiguous(usize),
    Unsatisfiable,
}

impl CallOutcome {
    pub fn from_count(candidates: usize) -> Self {
        match candidates {
            0 => CallOutcome::Unsatisfiable,
            1 => CallOutcome::Resolved,
            n => CallOutcome::Ambiguous(n),
        }
    }
}

/// Narrowed graph plus run statistics
#[derive(Debug, Clone)]
pub struct Resolution {
    graph: Graph,
    stats: SatisfactionStats,
}

impl Resolution {
    pub fn new(graph: Graph, stats: SatisfactionStats) -> Self {
        Self { graph, stats }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    pub fn stats(&self) -> &SatisfactionStats {
        &self.stats
    }

    /// Remaining overloads of the top-level call
    pub fn root_candidates(&self) -> &[FunctionSignature] {
        &self.graph.root_node().candidates
    }

    /// Type of the root `Image` position on each remaining candidate
    pub fn root_image_types(&self) -> Vec<&Type> {
        self.graph.types_of(self.graph.root_node().image)
    }

    pub fn outcome_of(&self, node: NodeId) -> CallOutcome {
        CallOutcome::from_count(self.graph.candidates(node).len())
    }

    pub fn root_outcome(&self) -> CallOutcome {
        self.outcome_of(self.graph.root())
    }

    /// Every call site kept exactly one overload
    pub fn is_resolved(&self) -> bool {
        self.graph.nodes().all(|(_, node)| node.is_resolved())
    }

    /// Call sites left with no overload, in depth order
    pub fn unsatisfiable_nodes(&self) -> Vec<NodeId> {
        self.graph
            .sorted_nodes()
            .iter()
            .copied()
            .filter(|id| self.graph.node(*id).is_unsatisfiable())
            .collect()
    }

    pub fn report(&self) -> ResolutionReport {
        let calls = self
            .graph
            .sorted_nodes()
            .iter()
            .map(|id| {
                let node = self.graph.node(*id);
                CallReport {
                    label: node.label.clone(),
                    call: node.call.to_string(),
                    outcome: self.outcome_of(*id),
                    candidates: node.candidates.iter().map(|c| c.to_string()).collect(),
                }
            })
            .collect();

        ResolutionReport {
            root: self.graph.root_node().call.to_string(),
            outcome: self.root_outcome(),
            image_types: self
                .root_image_types()
                .into_iter()
                .map(|ty| ty.to_string())
                .collect(),
            calls,
            stats: self.stats.clone(),
        }
    }
}

/// Per-call-site entry of a [`ResolutionReport`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallReport {
    pub label: String,
    pub call: String,
    pub outcome: CallOutcome,
    pub candidates: Vec<String>,
}

/// Serialisable summary of a [`Resolution`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionReport {
    pub root: String,
    pub outcome: CallOutcome,
    pub image_types: Vec<String>,
    pub calls: Vec<CallReport>,
    pub stats: SatisfactionStats,
}

impl ResolutionReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
