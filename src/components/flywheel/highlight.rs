//! Emphasis state for nodes and edges relative to the active node.
//!
//! Membership is always checked against the canonical edge set, never the
//! raw `connects_to` lists, so the direction a relationship was declared in
//! has no effect on what lights up.

use serde::Serialize;

use super::graph::FlywheelGraph;
use super::types::Edge;

/// How a node should be drawn given the current active node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeState {
	/// Nothing is active.
	Neutral,
	/// This is the active node.
	Active,
	/// Shares an edge with the active node.
	Connected,
	/// Something else is active and this node is unrelated to it.
	Dimmed,
}

impl NodeState {
	pub fn is_emphasized(self) -> bool {
		matches!(self, NodeState::Active | NodeState::Connected)
	}
}

/// Answers highlight queries against one graph's edge set.
#[derive(Clone, Copy, Debug)]
pub struct HighlightResolver<'a> {
	graph: &'a FlywheelGraph,
}

impl<'a> HighlightResolver<'a> {
	pub fn new(graph: &'a FlywheelGraph) -> Self {
		Self { graph }
	}

	/// True when `active_id` is an endpoint of `edge` and the edge is part of the graph.
	pub fn is_edge_highlighted(&self, edge: &Edge, active_id: Option<&str>) -> bool {
		match active_id {
			Some(active) => {
				edge.touches(active) && self.graph.membership().contains(&edge.key())
			}
			None => false,
		}
	}

	pub fn node_state(&self, node_id: &str, active_id: Option<&str>) -> NodeState {
		match active_id {
			None => NodeState::Neutral,
			Some(active) if active == node_id => NodeState::Active,
			Some(active) if self.graph.has_edge(active, node_id) => NodeState::Connected,
			Some(_) => NodeState::Dimmed,
		}
	}

	/// Highlight flag for every graph edge, index-aligned with [`FlywheelGraph::edges`].
	pub fn edge_flags(&self, active_id: Option<&str>) -> Vec<bool> {
		self.graph
			.edges()
			.iter()
			.map(|edge| self.is_edge_highlighted(edge, active_id))
			.collect()
	}

	/// State for every node, index-aligned with [`FlywheelGraph::nodes`].
	pub fn node_states(&self, active_id: Option<&str>) -> Vec<NodeState> {
		self.graph
			.nodes()
			.iter()
			.map(|node| self.node_state(&node.id, active_id))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::flywheel::types::ToolNode;
	use pretty_assertions::assert_eq;

	fn graph() -> FlywheelGraph {
		FlywheelGraph::new(vec![
			ToolNode::new("a", "A", "A", "sky").connects_to(["b"]),
			ToolNode::new("b", "B", "B", "sky"),
			ToolNode::new("c", "C", "C", "sky"),
		])
		.unwrap()
	}

	#[test]
	fn nothing_active_is_neutral() {
		let g = graph();
		let hl = HighlightResolver::new(&g);
		assert_eq!(hl.node_states(None), vec![NodeState::Neutral; 3]);
		assert_eq!(hl.edge_flags(None), vec![false]);
	}

	#[test]
	fn either_endpoint_highlights_the_edge() {
		let g = graph();
		let hl = HighlightResolver::new(&g);
		assert_eq!(hl.edge_flags(Some("a")), vec![true]);
		assert_eq!(hl.edge_flags(Some("b")), vec![true]);
		assert_eq!(hl.edge_flags(Some("c")), vec![false]);
	}

	#[test]
	fn edges_outside_the_graph_never_highlight() {
		let g = graph();
		let hl = HighlightResolver::new(&g);
		assert!(!hl.is_edge_highlighted(&Edge::new("a", "c"), Some("a")));
		assert!(hl.is_edge_highlighted(&Edge::new("b", "a"), Some("a")));
	}

	#[test]
	fn states_relative_to_declaring_and_receiving_side() {
		let g = graph();
		let hl = HighlightResolver::new(&g);
		assert_eq!(
			hl.node_states(Some("b")),
			vec![NodeState::Connected, NodeState::Active, NodeState::Dimmed]
		);
	}

	#[test]
	fn active_node_is_always_active() {
		let g = graph();
		let hl = HighlightResolver::new(&g);
		for node in g.nodes() {
			assert_eq!(hl.node_state(&node.id, Some(&node.id)), NodeState::Active);
		}
	}
}
