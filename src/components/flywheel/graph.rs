//! Node set normalization: canonical edges, lookups, and integrity diagnostics.

use std::collections::{HashMap, HashSet};

use log::{info, warn};

use super::error::{Diagnostic, FlywheelError};
use super::types::{Edge, ToolNode, pair_key};

/// Result of [`build_edges`]: the canonical edges plus anything that was dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeSet {
	pub edges: Vec<Edge>,
	pub diagnostics: Vec<Diagnostic>,
}

/// Derive one undirected edge per related pair from the per-node `connects_to` lists.
///
/// Nodes are walked in order, so the first declaration of a pair decides the
/// edge's `a`/`b` orientation. Unknown and self references are skipped and
/// reported.
pub fn build_edges(nodes: &[ToolNode]) -> EdgeSet {
	let known: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
	let mut seen: HashSet<(String, String)> = HashSet::new();
	let mut out = EdgeSet::default();

	for node in nodes {
		for target in &node.connects_to {
			if !known.contains(target.as_str()) {
				out.diagnostics.push(Diagnostic::UnknownReference {
					from: node.id.clone(),
					target: target.clone(),
				});
				continue;
			}
			if *target == node.id {
				out.diagnostics
					.push(Diagnostic::SelfReference { id: node.id.clone() });
				continue;
			}
			if seen.insert(pair_key(&node.id, target)) {
				out.edges.push(Edge::new(node.id.clone(), target.clone()));
			}
		}
	}

	out
}

/// Validated, immutable flywheel dataset.
///
/// Built once from authored content. Cheap to share for reads; interaction
/// state lives elsewhere.
#[derive(Clone, Debug)]
pub struct FlywheelGraph {
	nodes: Vec<ToolNode>,
	edges: Vec<Edge>,
	index: HashMap<String, usize>,
	membership: HashSet<(String, String)>,
	diagnostics: Vec<Diagnostic>,
}

impl FlywheelGraph {
	/// Validate the node list and normalize its edges.
	///
	/// Fails on an empty list or a repeated id. Dangling references are
	/// logged and dropped.
	pub fn new(nodes: Vec<ToolNode>) -> Result<Self, FlywheelError> {
		if nodes.is_empty() {
			return Err(FlywheelError::EmptyGraph);
		}

		let mut index = HashMap::with_capacity(nodes.len());
		for (i, node) in nodes.iter().enumerate() {
			if index.insert(node.id.clone(), i).is_some() {
				return Err(FlywheelError::DuplicateNodeId(node.id.clone()));
			}
		}

		let EdgeSet { edges, diagnostics } = build_edges(&nodes);
		for diag in &diagnostics {
			warn!("flywheel: {}", diag);
		}
		let membership = edges.iter().map(Edge::key).collect();

		info!(
			"flywheel: {} nodes, {} edges ({} dropped references)",
			nodes.len(),
			edges.len(),
			diagnostics.len()
		);

		Ok(Self {
			nodes,
			edges,
			index,
			membership,
			diagnostics,
		})
	}

	pub fn nodes(&self) -> &[ToolNode] {
		&self.nodes
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	pub fn diagnostics(&self) -> &[Diagnostic] {
		&self.diagnostics
	}

	/// Number of nodes. Never zero.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Always false; an empty graph cannot be constructed.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn node(&self, id: &str) -> Option<&ToolNode> {
		self.index_of(id).map(|i| &self.nodes[i])
	}

	pub fn index_of(&self, id: &str) -> Option<usize> {
		self.index.get(id).copied()
	}

	pub fn contains(&self, id: &str) -> bool {
		self.index.contains_key(id)
	}

	/// Whether an edge joins `a` and `b`, in either direction.
	pub fn has_edge(&self, a: &str, b: &str) -> bool {
		self.membership.contains(&pair_key(a, b))
	}

	/// Nodes sharing an edge with `id`, in node order.
	pub fn neighbors(&self, id: &str) -> Vec<&ToolNode> {
		self.nodes
			.iter()
			.filter(|n| n.id != id && self.has_edge(id, &n.id))
			.collect()
	}

	/// Note attached to the `a`–`b` relationship.
	///
	/// Prefers what `a` wrote about `b`, then what `b` wrote about `a`.
	pub fn connection_note(&self, a: &str, b: &str) -> Option<&str> {
		let from_a = self
			.node(a)
			.and_then(|n| n.connection_notes.get(b))
			.map(String::as_str);
		from_a.or_else(|| {
			self.node(b)
				.and_then(|n| n.connection_notes.get(a))
				.map(String::as_str)
		})
	}

	pub(crate) fn membership(&self) -> &HashSet<(String, String)> {
		&self.membership
	}
}
