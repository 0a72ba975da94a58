//! Constraint graph arena
//!
//! Nodes, positions, and constraints are stored in flat vectors and addressed
//! by [`NodeId`], [`PositionId`], and [`ConstraintId`]. The structure is fixed
//! once built; only candidate lists change afterwards, and only by removal.

use std::borrow::Cow;
use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::features::expression::FunctionCall;
use crate::features::type_lattice::{FunctionSignature, Type};
use crate::shared::models::{ConstraintId, NodeId, PositionId};

use super::constraint::Constraint;
use super::node::GraphNode;
use super::position::Position;

/// Constraint graph rooted at one call expression
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    positions: Vec<Position>,
    constraints: Vec<Constraint>,
    constraint_index: FxHashMap<Constraint, ConstraintId>,
    root: NodeId,
    /// Nodes by nesting depth, root first
    order: Vec<NodeId>,
    position_labels: FxHashMap<PositionId, String>,
}

impl Graph {
    pub(crate) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            positions: Vec::new(),
            constraints: Vec::new(),
            constraint_index: FxHashMap::default(),
            root: NodeId::new(0),
            order: Vec::new(),
            position_labels: FxHashMap::default(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Construction
    // ═══════════════════════════════════════════════════════════════════════

    /// Reserve a node and its `Image` slot before its arguments are built
    pub(crate) fn alloc_node(&mut self, call: FunctionCall, depth: usize) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        let image = self.alloc_position(Position::Image { node: id });
        self.nodes.push(GraphNode {
            label: call.name.clone(),
            call,
            candidates: Vec::new(),
            positions: Vec::new(),
            image,
            constraints: Vec::new(),
            depth,
        });
        id
    }

    pub(crate) fn alloc_position(&mut self, position: Position) -> PositionId {
        let id = PositionId::new(self.positions.len());
        self.positions.push(position);
        id
    }

    /// Add `tail <- head`, reusing the existing constraint for the same pair
    pub(crate) fn add_constraint(&mut self, tail: PositionId, head: PositionId) -> ConstraintId {
        let constraint = Constraint::new(tail, head);
        if let Some(&existing) = self.constraint_index.get(&constraint) {
            return existing;
        }

        let id = ConstraintId::new(self.constraints.len());
        self.constraints.push(constraint);
        self.constraint_index.insert(constraint, id);

        let tail_node = self.node_of(tail);
        let head_node = self.node_of(head);
        self.nodes[tail_node.index()].constraints.push(id);
        if head_node != tail_node {
            self.nodes[head_node.index()].constraints.push(id);
        }
        id
    }

    /// Attach the listed positions and initial candidates; the image goes last
    pub(crate) fn finish_node(
        &mut self,
        node: NodeId,
        mut positions: Vec<PositionId>,
        candidates: Vec<FunctionSignature>,
    ) {
        let entry = &mut self.nodes[node.index()];
        positions.push(entry.image);
        entry.positions = positions;
        entry.candidates = candidates;
    }

    /// Fix the root, the depth order, and the display labels
    pub(crate) fn seal(&mut self, root: NodeId) {
        self.root = root;

        let mut order: Vec<NodeId> = (0..self.nodes.len()).map(NodeId::new).collect();
        order.sort_by_key(|id| (self.nodes[id.index()].depth, *id));

        let mut used: FxHashSet<String> = FxHashSet::default();
        for id in &order {
            let name = self.nodes[id.index()].call.name.clone();
            let label = if used.contains(&name) {
                (0..)
                    .map(|i| format!("{}{}", name, i))
                    .find(|candidate| !used.contains(candidate))
                    .unwrap_or_default()
            } else {
                name
            };
            used.insert(label.clone());
            self.nodes[id.index()].label = label;
        }

        let mut counter = 0usize;
        for id in &order {
            for position in &self.nodes[id.index()].positions {
                self.position_labels
                    .insert(*position, format!("p{}", counter));
                counter += 1;
            }
        }

        self.order = order;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Queries
    // ═══════════════════════════════════════════════════════════════════════

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn root_node(&self) -> &GraphNode {
        self.node(self.root)
    }

    pub fn node(&self, id: NodeId) -> &GraphNode {
        &self.nodes[id.index()]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Nodes by nesting depth, root first
    pub fn sorted_nodes(&self) -> &[NodeId] {
        &self.order
    }

    /// All nodes with their handles, in allocation order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &GraphNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::new(i), node))
    }

    /// First node (in depth order) calling `name`
    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.order
            .iter()
            .copied()
            .find(|id| self.node(*id).call.name == name)
    }

    pub fn position(&self, id: PositionId) -> &Position {
        &self.positions[id.index()]
    }

    pub fn position_count(&self) -> usize {
        self.positions.len()
    }

    pub fn node_of(&self, position: PositionId) -> NodeId {
        self.position(position).node()
    }

    pub fn constraint(&self, id: ConstraintId) -> Constraint {
        self.constraints[id.index()]
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    pub fn constraint_ids(&self) -> impl Iterator<Item = ConstraintId> {
        (0..self.constraints.len()).map(ConstraintId::new)
    }

    pub fn constraints(&self) -> impl Iterator<Item = (ConstraintId, Constraint)> + '_ {
        self.constraints
            .iter()
            .enumerate()
            .map(|(i, constraint)| (ConstraintId::new(i), *constraint))
    }

    pub fn candidates(&self, node: NodeId) -> &[FunctionSignature] {
        &self.node(node).candidates
    }

    /// Type of `position` when `candidate` is assumed for its node
    pub fn type_on<'c>(
        &self,
        position: PositionId,
        candidate: &'c FunctionSignature,
    ) -> Option<&'c Type> {
        self.position(position).type_on(self, candidate)
    }

    /// Type of `position` on each remaining candidate of its node
    pub fn types_of(&self, position: PositionId) -> Vec<&Type> {
        self.candidates(self.node_of(position))
            .iter()
            .filter_map(|candidate| self.type_on(position, candidate))
            .collect()
    }

    /// `p0`, `p1`, ... in depth order; unlisted slots fall back to their handle
    pub fn label_of(&self, position: PositionId) -> Cow<'_, str> {
        match self.position_labels.get(&position) {
            Some(label) => Cow::Borrowed(label.as_str()),
            None => Cow::Owned(position.to_string()),
        }
    }

    /// `tail <- head`
    pub fn constraint_label(&self, id: ConstraintId) -> String {
        let constraint = self.constraint(id);
        format!(
            "{} <- {}",
            self.label_of(constraint.tail),
            self.label_of(constraint.head)
        )
    }

    /// Remove every candidate of `node` whose flag in `keep` is false
    pub(crate) fn retain_candidates(&mut self, node: NodeId, keep: &[bool]) -> usize {
        let candidates = &mut self.nodes[node.index()].candidates;
        let before = candidates.len();
        let mut flags = keep.iter();
        candidates.retain(|_| flags.next().copied().unwrap_or(true));
        before - candidates.len()
    }

    /// One text matrix per node: a column per position, a row per candidate
    fn write_matrix(&self, f: &mut fmt::Formatter<'_>, id: NodeId) -> fmt::Result {
        let node = self.node(id);
        let mut columns: Vec<Vec<String>> = Vec::with_capacity(node.positions.len() + 1);

        let mut header = vec![node.label.clone()];
        header.extend(node.candidates.iter().map(|_| String::new()));
        columns.push(header);

        for position in &node.positions {
            let mut column = vec![self.label_of(*position).into_owned()];
            column.extend(node.candidates.iter().map(|candidate| {
                self.type_on(*position, candidate)
                    .map(|ty| ty.to_string())
                    .unwrap_or_else(|| "?".to_string())
            }));
            columns.push(column);
        }

        let widths: Vec<usize> = columns
            .iter()
            .map(|column| column.iter().map(|cell| cell.len()).max().unwrap_or(0))
            .collect();

        for row in 0..=node.candidates.len() {
            for (column, width) in columns.iter().zip(&widths) {
                write!(f, "|{:>width$}", column[row], width = *width)?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.order.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            self.write_matrix(f, *id)?;
        }
        Ok(())
    }
}
