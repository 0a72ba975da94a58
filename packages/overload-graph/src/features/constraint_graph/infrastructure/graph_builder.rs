//! Constraint graph construction
//!
//! One recursive pass over the call tree:
//! 1. Reserve a node (and its `Image` slot) for the call
//! 2. Per argument, allocate its positions and constraints:
//!    - nested call:   `Argument <- inner Image`
//!    - variable:      `Argument <- bound ClosureParameter`
//!    - filled closure: one `ClosureParameter` per parameter, then
//!      `ClosureImage <- body` with the parameters in scope
//!    - empty closure: a lone `ClosureImage`, unconstrained
//! 3. Fetch candidates filtered by name, arity, and closure arities
//!
//! Positions are arena handles allocated once per slot, so constraints can
//! point at slots of nodes whose construction has not finished yet.

use tracing::debug;

use crate::errors::{OverloadError, Result};
use crate::features::constraint_graph::domain::{Graph, Position};
use crate::features::expression::{Closure, Expression, FunctionCall};
use crate::features::symbol_table::{ClosureArity, SymbolLookup};
use crate::shared::models::{NodeId, PositionId};
use crate::shared::ScopeStack;

/// Build the constraint graph of `call`
pub fn build_graph(call: &FunctionCall, symbols: &dyn SymbolLookup) -> Result<Graph> {
    GraphBuilder::new(symbols).build(call)
}

/// Single-use constraint graph builder
pub struct GraphBuilder<'s> {
    symbols: &'s dyn SymbolLookup,
    graph: Graph,
}

impl<'s> GraphBuilder<'s> {
    pub fn new(symbols: &'s dyn SymbolLookup) -> Self {
        Self {
            symbols,
            graph: Graph::new(),
        }
    }

    pub fn build(mut self, call: &FunctionCall) -> Result<Graph> {
        let mut scope = ScopeStack::new();
        let root = self.build_call(call, 0, &mut scope)?;
        self.graph.seal(root);

        debug!(
            root = %call.name,
            nodes = self.graph.node_count(),
            positions = self.graph.position_count(),
            constraints = self.graph.constraint_count(),
            "constraint graph built"
        );
        Ok(self.graph)
    }

    fn build_call(
        &mut self,
        call: &FunctionCall,
        depth: usize,
        scope: &mut ScopeStack<PositionId>,
    ) -> Result<NodeId> {
        let node = self.graph.alloc_node(call.clone(), depth);
        let mut positions = Vec::with_capacity(call.arguments.len());
        let mut closure_arities = Vec::new();

        for (index, argument) in call.arguments.iter().enumerate() {
            let argument_position = self.graph.alloc_position(Position::Argument { node, index });

            match argument {
                Expression::Call(inner) => {
                    let inner_node = self.build_call(inner, depth + 1, scope)?;
                    let inner_image = self.graph.node(inner_node).image;
                    self.graph.add_constraint(argument_position, inner_image);
                    positions.push(argument_position);
                }
                Expression::Variable(variable) => {
                    let bound = *scope
                        .resolve(&variable.name)
                        .ok_or_else(|| OverloadError::unbound(&variable.name))?;
                    self.graph.add_constraint(argument_position, bound);
                    positions.push(argument_position);
                }
                Expression::Closure(closure) => {
                    closure_arities.push(ClosureArity::new(index, closure.parameter_count()));
                    self.build_closure(node, argument_position, closure, depth, scope, &mut positions)?;
                }
            }
        }

        let candidates = self
            .symbols
            .find_functions_by(&call.name, call.arity(), &closure_arities);
        self.graph.finish_node(node, positions, candidates);
        Ok(node)
    }

    fn build_closure(
        &mut self,
        node: NodeId,
        argument: PositionId,
        closure: &Closure,
        depth: usize,
        scope: &mut ScopeStack<PositionId>,
        positions: &mut Vec<PositionId>,
    ) -> Result<()> {
        let (body, parameters) = match closure {
            Closure::Empty => {
                let image = self.graph.alloc_position(Position::ClosureImage { node, argument });
                positions.push(image);
                return Ok(());
            }
            Closure::Filled { body, parameters } => (body, parameters),
        };

        let bindings: Vec<(String, PositionId)> = parameters
            .iter()
            .enumerate()
            .map(|(param_index, parameter)| {
                let position = self.graph.alloc_position(Position::ClosureParameter {
                    node,
                    name: parameter.name.clone(),
                    argument,
                    param_index,
                });
                (parameter.name.clone(), position)
            })
            .collect();
        positions.extend(bindings.iter().map(|(_, position)| *position));

        let image = self.graph.alloc_position(Position::ClosureImage { node, argument });
        let body_position = scope.with_frame(self, bindings, |builder, scope| {
            builder.build_closure_body(body, depth, scope)
        })?;
        self.graph.add_constraint(image, body_position);
        positions.push(image);
        Ok(())
    }

    /// Position produced by a closure body
    fn build_closure_body(
        &mut self,
        body: &Expression,
        depth: usize,
        scope: &mut ScopeStack<PositionId>,
    ) -> Result<PositionId> {
        match body {
            Expression::Call(call) => {
                let inner = self.build_call(call, depth + 1, scope)?;
                Ok(self.graph.node(inner).image)
            }
            Expression::Variable(variable) => scope
                .resolve(&variable.name)
                .copied()
                .ok_or_else(|| OverloadError::unbound(&variable.name)),
            Expression::Closure(_) => Err(OverloadError::UnsupportedTopLevelClosure),
        }
    }
}
