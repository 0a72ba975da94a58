//! Typed slots of a call site
//!
//! A position's type is only known once an overload candidate is assumed
//! for its owning node. Closure positions read through the function type of
//! the argument slot they belong to.

use serde::{Deserialize, Serialize};

use crate::features::type_lattice::{FunctionSignature, FunctionType, Type};
use crate::shared::models::{NodeId, PositionId};

use super::graph::Graph;

/// Position kinds
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// `candidate.params[index]`
    Argument { node: NodeId, index: usize },

    /// `candidate.params[argument.index].params[param_index]`
    ClosureParameter {
        node: NodeId,
        name: String,
        argument: PositionId,
        param_index: usize,
    },

    /// `candidate.params[argument.index].image`
    ClosureImage { node: NodeId, argument: PositionId },

    /// `candidate.image`
    Image { node: NodeId },
}

/// Position kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionKind {
    Argument,
    ClosureParameter,
    ClosureImage,
    Image,
}

impl Position {
    /// Owning call-site node
    pub fn node(&self) -> NodeId {
        match self {
            Position::Argument { node, .. }
            | Position::ClosureParameter { node, .. }
            | Position::ClosureImage { node, .. }
            | Position::Image { node } => *node,
        }
    }

    pub fn kind(&self) -> PositionKind {
        match self {
            Position::Argument { .. } => PositionKind::Argument,
            Position::ClosureParameter { .. } => PositionKind::ClosureParameter,
            Position::ClosureImage { .. } => PositionKind::ClosureImage,
            Position::Image { .. } => PositionKind::Image,
        }
    }

    /// Type of this slot when `candidate` is assumed for the owning node
    ///
    /// `None` only when a closure position is asked about a candidate whose
    /// argument slot is not a function type. Candidates are filtered by
    /// closure arity at construction, so this never happens for candidates
    /// still present in the owning node.
    pub fn type_on<'c>(&self, graph: &Graph, candidate: &'c FunctionSignature) -> Option<&'c Type> {
        match self {
            Position::Argument { index, .. } => candidate.params.get(*index),
            Position::ClosureParameter {
                argument,
                param_index,
                ..
            } => closure_type_on(graph, *argument, candidate)?
                .params
                .get(*param_index),
            Position::ClosureImage { argument, .. } => {
                closure_type_on(graph, *argument, candidate).map(|closure| closure.image.as_ref())
            }
            Position::Image { .. } => Some(&candidate.image),
        }
    }
}

fn closure_type_on<'c>(
    graph: &Graph,
    argument: PositionId,
    candidate: &'c FunctionSignature,
) -> Option<&'c FunctionType> {
    match graph.position(argument) {
        Position::Argument { index, .. } => candidate.params.get(*index)?.as_function(),
        _ => None,
    }
}
