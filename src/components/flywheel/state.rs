//! Hover and selection tracking.
//!
//! [`InteractionState`] is the bare state machine: two optional ids mutated
//! by discrete input events. [`Flywheel`] pairs it with a validated graph and
//! config so callers have one object to feed events into and derive view
//! models from.

use log::debug;

use super::config::FlywheelConfig;
use super::error::FlywheelError;
use super::graph::FlywheelGraph;
use super::scale::SizeClass;
use super::types::{Point, ToolNode};
use super::view_model::{ViewModel, derive_view_model};

/// A discrete input event from the rendering layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InteractionEvent {
	/// Pointer entered a node.
	HoverEnter(String),
	/// Pointer left a node.
	HoverLeave(String),
	/// Click/tap on a node: toggles its selection.
	Activate(String),
	/// Close the detail panel.
	Dismiss,
}

impl InteractionEvent {
	/// The node the event names, if any.
	pub fn target(&self) -> Option<&str> {
		match self {
			InteractionEvent::HoverEnter(id)
			| InteractionEvent::HoverLeave(id)
			| InteractionEvent::Activate(id) => Some(id),
			InteractionEvent::Dismiss => None,
		}
	}
}

/// Current hover and selection.
///
/// Both may be set at once. Selection always wins when resolving the active
/// node; hover is still recorded underneath it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
	hovered: Option<String>,
	selected: Option<String>,
}

impl InteractionState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn hovered_id(&self) -> Option<&str> {
		self.hovered.as_deref()
	}

	pub fn selected_id(&self) -> Option<&str> {
		self.selected.as_deref()
	}

	pub fn hover_enter(&mut self, id: &str) {
		self.hovered = Some(id.to_string());
	}

	/// Clears hover only if `id` is the node currently hovered; stale leaves are ignored.
	pub fn hover_leave(&mut self, id: &str) {
		if self.hovered.as_deref() == Some(id) {
			self.hovered = None;
		}
	}

	/// Toggle selection of `id`, replacing any other selection.
	pub fn activate(&mut self, id: &str) {
		if self.selected.as_deref() == Some(id) {
			self.selected = None;
		} else {
			self.selected = Some(id.to_string());
		}
	}

	pub fn dismiss(&mut self) {
		self.selected = None;
	}

	/// Selection if present, otherwise hover.
	pub fn active_id(&self) -> Option<&str> {
		self.selected.as_deref().or(self.hovered.as_deref())
	}

	pub fn apply(&mut self, event: &InteractionEvent) {
		match event {
			InteractionEvent::HoverEnter(id) => self.hover_enter(id),
			InteractionEvent::HoverLeave(id) => self.hover_leave(id),
			InteractionEvent::Activate(id) => self.activate(id),
			InteractionEvent::Dismiss => self.dismiss(),
		}
	}
}

/// One visualization instance: immutable graph and config plus its own
/// interaction state.
#[derive(Clone, Debug)]
pub struct Flywheel {
	graph: FlywheelGraph,
	config: FlywheelConfig,
	state: InteractionState,
}

impl Flywheel {
	/// Validate config and content. Fails on empty or duplicate-id node lists
	/// and on out-of-range config values.
	pub fn new(nodes: Vec<ToolNode>, config: FlywheelConfig) -> Result<Self, FlywheelError> {
		config.validate()?;
		let graph = FlywheelGraph::new(nodes)?;
		Ok(Self {
			graph,
			config,
			state: InteractionState::new(),
		})
	}

	pub fn graph(&self) -> &FlywheelGraph {
		&self.graph
	}

	pub fn config(&self) -> &FlywheelConfig {
		&self.config
	}

	pub fn state(&self) -> &InteractionState {
		&self.state
	}

	/// Apply an input event. Events naming ids outside the graph are dropped.
	///
	/// Returns whether the interaction state changed.
	pub fn dispatch(&mut self, event: InteractionEvent) -> bool {
		if let Some(id) = event.target() {
			if !self.graph.contains(id) {
				debug!("flywheel: ignoring {:?} for unknown node", event);
				return false;
			}
		}
		let before = self.state.clone();
		self.state.apply(&event);
		before != self.state
	}

	pub fn hover_enter(&mut self, id: &str) -> bool {
		self.dispatch(InteractionEvent::HoverEnter(id.to_string()))
	}

	pub fn hover_leave(&mut self, id: &str) -> bool {
		self.dispatch(InteractionEvent::HoverLeave(id.to_string()))
	}

	pub fn activate(&mut self, id: &str) -> bool {
		self.dispatch(InteractionEvent::Activate(id.to_string()))
	}

	pub fn dismiss(&mut self) -> bool {
		self.dispatch(InteractionEvent::Dismiss)
	}

	/// Point the pointer at `hit`, emitting the leave/enter pair a hover
	/// change implies. Returns whether anything changed.
	pub fn set_hover(&mut self, hit: Option<&str>) -> bool {
		if self.state.hovered_id() == hit {
			return false;
		}
		let mut changed = false;
		if let Some(prev) = self.state.hovered_id().map(str::to_string) {
			changed |= self.hover_leave(&prev);
		}
		if let Some(id) = hit {
			changed |= self.hover_enter(id);
		}
		changed
	}

	pub fn view_model(&self, size_class: SizeClass, center: Point) -> ViewModel {
		derive_view_model(&self.graph, &self.config, &self.state, size_class, center)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn hover_does_not_override_selection() {
		let mut state = InteractionState::new();
		state.activate("a");
		state.hover_enter("b");
		assert_eq!(state.active_id(), Some("a"));
		assert_eq!(state.hovered_id(), Some("b"));
	}

	#[test]
	fn hover_resolves_when_nothing_selected() {
		let mut state = InteractionState::new();
		state.hover_enter("b");
		assert_eq!(state.active_id(), Some("b"));
		state.hover_leave("b");
		assert_eq!(state.active_id(), None);
	}

	#[test]
	fn stale_leave_is_ignored() {
		let mut state = InteractionState::new();
		state.hover_enter("a");
		state.hover_enter("b");
		state.hover_leave("a");
		assert_eq!(state.hovered_id(), Some("b"));
	}

	#[test]
	fn activate_replaces_prior_selection() {
		let mut state = InteractionState::new();
		state.activate("a");
		state.activate("b");
		assert_eq!(state.selected_id(), Some("b"));
	}

	#[test]
	fn dismiss_clears_selection_but_keeps_hover() {
		let mut state = InteractionState::new();
		state.hover_enter("h");
		state.activate("a");
		state.apply(&InteractionEvent::Dismiss);
		assert_eq!(state.selected_id(), None);
		assert_eq!(state.active_id(), Some("h"));
	}

	fn flywheel() -> Flywheel {
		let nodes = vec![
			ToolNode::new("a", "A", "A", "sky").connects_to(["b"]),
			ToolNode::new("b", "B", "B", "sky"),
		];
		Flywheel::new(nodes, FlywheelConfig::default()).unwrap()
	}

	#[test]
	fn dispatch_drops_unknown_ids() {
		let mut fw = flywheel();
		assert!(!fw.activate("ghost"));
		assert_eq!(fw.state().selected_id(), None);
	}

	#[test]
	fn dispatch_reports_changes() {
		let mut fw = flywheel();
		assert!(fw.hover_enter("a"));
		assert!(!fw.hover_enter("a"));
		assert!(fw.activate("b"));
		assert!(fw.activate("b"));
		assert!(!fw.dismiss());
	}

	#[test]
	fn set_hover_moves_between_nodes() {
		let mut fw = flywheel();
		assert!(fw.set_hover(Some("a")));
		assert!(fw.set_hover(Some("b")));
		assert_eq!(fw.state().hovered_id(), Some("b"));
		assert!(fw.set_hover(None));
		assert_eq!(fw.state().hovered_id(), None);
		assert!(!fw.set_hover(None));
	}

	#[test]
	fn invalid_config_fails_construction() {
		let config = FlywheelConfig {
			radius: -1.0,
			..FlywheelConfig::default()
		};
		let nodes = vec![ToolNode::new("a", "A", "A", "sky")];
		assert!(matches!(
			Flywheel::new(nodes, config),
			Err(FlywheelError::InvalidConfig { field: "radius", .. })
		));
	}

	fn arb_event() -> impl Strategy<Value = InteractionEvent> {
		let id = prop::sample::select(vec!["a", "b", "c"]).prop_map(String::from);
		prop_oneof![
			id.clone().prop_map(InteractionEvent::HoverEnter),
			id.clone().prop_map(InteractionEvent::HoverLeave),
			id.prop_map(InteractionEvent::Activate),
			Just(InteractionEvent::Dismiss),
		]
	}

	proptest! {
		#[test]
		fn double_activate_clears_selection(events in prop::collection::vec(arb_event(), 0..20), id in "[abc]") {
			let mut state = InteractionState::new();
			for e in &events {
				state.apply(e);
			}
			state.dismiss();
			state.activate(&id);
			state.activate(&id);
			prop_assert_eq!(state.selected_id(), None);
		}

		#[test]
		fn selection_always_wins(events in prop::collection::vec(arb_event(), 0..30)) {
			let mut state = InteractionState::new();
			for e in &events {
				state.apply(e);
				if let Some(selected) = state.selected_id() {
					prop_assert_eq!(state.active_id(), Some(selected));
				}
			}
		}

		#[test]
		fn repeated_events_are_idempotent(events in prop::collection::vec(arb_event(), 0..20), last in arb_event()) {
			prop_assume!(!matches!(last, InteractionEvent::Activate(_)));
			let mut state = InteractionState::new();
			for e in &events {
				state.apply(e);
			}
			state.apply(&last);
			let once = state.clone();
			state.apply(&last);
			prop_assert_eq!(once, state);
		}
	}
}
