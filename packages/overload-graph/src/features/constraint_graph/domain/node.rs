//! Call-site nodes

use crate::features::expression::FunctionCall;
use crate::features::type_lattice::FunctionSignature;
use crate::shared::models::{ConstraintId, PositionId};

/// One node per call expression
///
/// The candidate list only ever shrinks after construction. `positions`
/// always ends with the node's `Image` position.
#[derive(Debug, Clone)]
pub struct GraphNode {
    /// Call expression this node stands for
    pub call: FunctionCall,

    /// Overloads still considered possible
    pub candidates: Vec<FunctionSignature>,

    /// Listed positions, `image` last
    pub positions: Vec<PositionId>,

    /// The node's own contributed type
    pub image: PositionId,

    /// Every constraint with an end on one of this node's positions
    pub constraints: Vec<ConstraintId>,

    /// Call nesting depth, root = 0
    pub depth: usize,

    /// Unique display label
    pub label: String,
}

impl GraphNode {
    pub fn name(&self) -> &str {
        &self.call.name
    }

    /// Exactly one candidate left
    pub fn is_resolved(&self) -> bool {
        self.candidates.len() == 1
    }

    /// No candidate left
    pub fn is_unsatisfiable(&self) -> bool {
        self.candidates.is_empty()
    }

    /// More than one candidate left
    pub fn is_ambiguous(&self) -> bool {
        self.candidates.len() > 1
    }
}
