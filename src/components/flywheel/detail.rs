//! The single detail panel.
//!
//! The open panel is the selection; there is no separate open flag.

use serde::Serialize;

use super::graph::FlywheelGraph;
use super::state::InteractionState;

/// Where the caller should put the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DetailPresentation {
	/// Beside the diagram.
	Inline,
	/// Over the diagram, for compact viewports.
	Overlay,
}

impl DetailPresentation {
	pub fn for_compact(compact: bool) -> Self {
		if compact {
			DetailPresentation::Overlay
		} else {
			DetailPresentation::Inline
		}
	}
}

/// One related tool listed in the panel.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailConnection {
	pub id: String,
	pub name: String,
	pub color_token: String,
	pub note: Option<String>,
}

/// Everything the panel shows for the selected tool.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView {
	pub id: String,
	pub name: String,
	pub short_label: String,
	pub color_token: String,
	pub description: Option<String>,
	pub connections: Vec<DetailConnection>,
}

pub struct DetailPanel;

impl DetailPanel {
	/// Id of the node whose panel is open.
	pub fn current_detail_id(state: &InteractionState) -> Option<&str> {
		state.selected_id()
	}

	/// Panel contents for the current selection, if any.
	pub fn view(graph: &FlywheelGraph, state: &InteractionState) -> Option<DetailView> {
		let node = graph.node(Self::current_detail_id(state)?)?;
		let connections = graph
			.neighbors(&node.id)
			.into_iter()
			.map(|other| DetailConnection {
				id: other.id.clone(),
				name: other.name.clone(),
				color_token: other.color_token.clone(),
				note: graph.connection_note(&node.id, &other.id).map(str::to_string),
			})
			.collect();

		Some(DetailView {
			id: node.id.clone(),
			name: node.name.clone(),
			short_label: node.short_label.clone(),
			color_token: node.color_token.clone(),
			description: node.description.clone(),
			connections,
		})
	}
}
