//! Domain model of the constraint graph
//!
//! - Graph: arena of nodes, positions, constraints
//! - GraphNode: one call site and its shrinking candidate list
//! - Position: typed slot whose type depends on the assumed candidate
//! - Constraint: directed `tail <- head` assignability requirement

pub mod constraint;
pub mod graph;
pub mod node;
pub mod position;

pub use constraint::Constraint;
pub use graph::Graph;
pub use node::GraphNode;
pub use position::{Position, PositionKind};
