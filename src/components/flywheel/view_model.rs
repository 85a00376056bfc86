//! Everything a renderer needs for one frame, derived from data and state.

use std::num::NonZeroUsize;

use serde::Serialize;

use super::config::FlywheelConfig;
use super::curve::{EdgeCurve, curve};
use super::detail::DetailPanel;
use super::graph::FlywheelGraph;
use super::highlight::{HighlightResolver, NodeState};
use super::layout::RadialLayout;
use super::scale::{ScaledValues, SizeClass};
use super::state::InteractionState;
use super::types::{NodePosition, Point};

/// Renderer input for one frame.
///
/// Node vectors are index-aligned with [`FlywheelGraph::nodes`], edge vectors
/// with [`FlywheelGraph::edges`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
	pub scale: f64,
	pub center: Point,
	pub node_positions: Vec<NodePosition>,
	pub edge_curves: Vec<EdgeCurve>,
	pub edge_highlights: Vec<bool>,
	pub node_states: Vec<NodeState>,
	pub active_id: Option<String>,
	pub detail_target_id: Option<String>,
}

impl ViewModel {
	/// Node under the pointer: the nearest center within `hit_radius`.
	pub fn node_at(&self, x: f64, y: f64, hit_radius: f64) -> Option<&str> {
		let pointer = Point::new(x, y);
		self.node_positions
			.iter()
			.map(|p| (p, p.point().distance(pointer)))
			.filter(|(_, d)| *d <= hit_radius)
			.min_by(|(_, a), (_, b)| a.total_cmp(b))
			.map(|(p, _)| p.id.as_str())
	}
}

/// Lay out, curve, and classify the whole graph for the current state.
///
/// Pure: the same inputs always give the same view model.
pub fn derive_view_model(
	graph: &FlywheelGraph,
	config: &FlywheelConfig,
	state: &InteractionState,
	size_class: SizeClass,
	center: Point,
) -> ViewModel {
	let scaled = ScaledValues::new(config, size_class);

	let layout = RadialLayout {
		total: NonZeroUsize::new(graph.len()).unwrap_or(NonZeroUsize::MIN),
		radius: scaled.radius,
		center,
	};
	let node_positions = layout.positions(graph.nodes());

	let point_of = |id: &str| {
		graph
			.index_of(id)
			.map(|i| node_positions[i].point())
			.unwrap_or(center)
	};
	let edge_curves = graph
		.edges()
		.iter()
		.map(|edge| curve(point_of(&edge.a), point_of(&edge.b), center, config.pull_factor))
		.collect();

	let active_id = state.active_id();
	let highlight = HighlightResolver::new(graph);

	ViewModel {
		scale: scaled.k,
		center,
		edge_curves,
		edge_highlights: highlight.edge_flags(active_id),
		node_states: highlight.node_states(active_id),
		active_id: active_id.map(str::to_string),
		detail_target_id: DetailPanel::current_detail_id(state).map(str::to_string),
		node_positions,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::flywheel::types::ToolNode;
	use pretty_assertions::assert_eq;

	fn graph() -> FlywheelGraph {
		FlywheelGraph::new(vec![
			ToolNode::new("a", "A", "A", "sky").connects_to(["c"]),
			ToolNode::new("b", "B", "B", "sky"),
			ToolNode::new("c", "C", "C", "sky"),
			ToolNode::new("d", "D", "D", "sky"),
		])
		.unwrap()
	}

	#[test]
	fn idle_view_model_is_neutral() {
		let g = graph();
		let vm = derive_view_model(
			&g,
			&FlywheelConfig::default(),
			&InteractionState::new(),
			SizeClass::Full,
			Point::new(300.0, 300.0),
		);
		assert_eq!(vm.node_positions.len(), 4);
		assert_eq!(vm.edge_curves.len(), 1);
		assert_eq!(vm.edge_highlights, vec![false]);
		assert_eq!(vm.node_states, vec![NodeState::Neutral; 4]);
		assert_eq!(vm.active_id, None);
		assert_eq!(vm.detail_target_id, None);
	}

	#[test]
	fn hover_highlights_without_opening_detail() {
		let g = graph();
		let mut state = InteractionState::new();
		state.hover_enter("c");
		let vm = derive_view_model(
			&g,
			&FlywheelConfig::default(),
			&state,
			SizeClass::Full,
			Point::default(),
		);
		assert_eq!(vm.active_id.as_deref(), Some("c"));
		assert_eq!(vm.detail_target_id, None);
		assert_eq!(vm.edge_highlights, vec![true]);
		assert_eq!(
			vm.node_states,
			vec![
				NodeState::Connected,
				NodeState::Dimmed,
				NodeState::Active,
				NodeState::Dimmed
			]
		);
	}

	#[test]
	fn edge_curves_start_and_end_on_node_positions() {
		let g = graph();
		let vm = derive_view_model(
			&g,
			&FlywheelConfig::default(),
			&InteractionState::new(),
			SizeClass::Full,
			Point::new(50.0, 50.0),
		);
		assert_eq!(vm.edge_curves[0].start, vm.node_positions[0].point());
		assert_eq!(vm.edge_curves[0].end, vm.node_positions[2].point());
	}

	#[test]
	fn compact_scaling_preserves_angles() {
		let g = graph();
		let config = FlywheelConfig::default();
		let center = Point::new(0.0, 0.0);
		let state = InteractionState::new();
		let full = derive_view_model(&g, &config, &state, SizeClass::Full, center);
		let compact = derive_view_model(&g, &config, &state, SizeClass::Compact, center);
		assert_eq!(compact.scale, 0.6);
		for (f, c) in full.node_positions.iter().zip(&compact.node_positions) {
			let fa = (f.y - center.y).atan2(f.x - center.x);
			let ca = (c.y - center.y).atan2(c.x - center.x);
			assert!((fa - ca).abs() < 1e-9);
			let ratio = c.point().distance(center) / f.point().distance(center);
			assert!((ratio - 0.6).abs() < 1e-9);
		}
	}

	#[test]
	fn node_at_picks_nearest_within_radius() {
		let g = graph();
		let vm = derive_view_model(
			&g,
			&FlywheelConfig::default(),
			&InteractionState::new(),
			SizeClass::Full,
			Point::new(0.0, 0.0),
		);
		let top = vm.node_positions[0].point();
		assert_eq!(vm.node_at(top.x + 3.0, top.y, 30.0), Some("a"));
		assert_eq!(vm.node_at(0.0, 0.0, 30.0), None);
	}

	#[test]
	fn serializes_camel_case() {
		let g = graph();
		let vm = derive_view_model(
			&g,
			&FlywheelConfig::default(),
			&InteractionState::new(),
			SizeClass::Medium,
			Point::default(),
		);
		let json = serde_json::to_value(&vm).unwrap();
		assert!(json.get("nodePositions").is_some());
		assert!(json.get("detailTargetId").is_some());
		assert_eq!(json["nodeStates"][0], "neutral");
	}
}
