//! # Constraint Graph
//!
//! One node per call site, one position per typed slot, one constraint per
//! type-flow edge. Built once from a call tree, then narrowed in place by the
//! satisfaction engine.
//!
//! ## Usage
//! ```text
//! use overload_graph::features::constraint_graph::build_graph;
//!
//! let graph = build_graph(&call, &symbols)?;
//! for (id, constraint) in graph.constraints() {
//!     println!("{}", graph.constraint_label(id));
//! }
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::{Constraint, Graph, GraphNode, Position, PositionKind};
pub use infrastructure::{build_graph, to_dot, to_petgraph, GraphBuilder};
