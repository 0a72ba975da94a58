//! Graph export for external tooling
//!
//! Collapses positions onto their call-site nodes: one petgraph node per
//! call site, one edge per constraint, pointing from the consumer's node to
//! the producer's node.

use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::features::constraint_graph::domain::Graph;

/// Call-site view of the constraint graph
///
/// Node weight: `label [candidates]`. Edge weight: `tail <- head` labels.
pub fn to_petgraph(graph: &Graph) -> DiGraph<String, String> {
    let mut view = DiGraph::with_capacity(graph.node_count(), graph.constraint_count());

    let indices: Vec<NodeIndex> = graph
        .nodes()
        .map(|(_, node)| view.add_node(format!("{} [{}]", node.label, node.candidates.len())))
        .collect();

    for (id, constraint) in graph.constraints() {
        let tail = indices[graph.node_of(constraint.tail).index()];
        let head = indices[graph.node_of(constraint.head).index()];
        view.add_edge(tail, head, graph.constraint_label(id));
    }

    view
}

/// Graphviz DOT rendering of [`to_petgraph`]
pub fn to_dot(graph: &Graph) -> String {
    let view = to_petgraph(graph);
    format!("{}", Dot::with_config(&view, &[]))
}

impl Graph {
    pub fn to_petgraph(&self) -> DiGraph<String, String> {
        to_petgraph(self)
    }

    pub fn to_dot(&self) -> String {
        to_dot(self)
    }
}
