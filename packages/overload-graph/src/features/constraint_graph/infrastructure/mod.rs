//! Infrastructure layer for the constraint graph
//!
//! - **GraphBuilder**: one-pass construction from a call tree
//! - **export**: petgraph / Graphviz DOT views for external tooling

pub mod export;
pub mod graph_builder;

pub use export::{to_dot, to_petgraph};
pub use graph_builder::{build_graph, GraphBuilder};
