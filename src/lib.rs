//! flywheel-graph: Radial relationship diagram for tool flywheels.
//!
//! This crate provides a platform-agnostic layout and interaction engine
//! (edge normalization, circular layout, curved edges, hover/selection
//! highlighting, detail panel) plus a WASM canvas component that renders it.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::flywheel::{
	Diagnostic, Edge, EdgeCurve, Flywheel, FlywheelCanvas, FlywheelConfig, FlywheelError,
	FlywheelGraph, HighlightResolver, InteractionEvent, InteractionState, NodeState, Point,
	SizeClass, ToolNode, ViewModel, build_edges, derive_view_model,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("flywheel-graph: logging initialized");
}

/// Text content of the `<script>` element with the given id.
fn script_text(id: &str) -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(id)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Load tool nodes from a script element with id="flywheel-data".
/// Expected format: JSON array of `ToolNode` records.
fn load_nodes() -> Option<Vec<ToolNode>> {
	let json_text = script_text("flywheel-data")?;

	match serde_json::from_str::<Vec<ToolNode>>(&json_text) {
		Ok(nodes) => {
			info!("flywheel-graph: loaded {} tools", nodes.len());
			Some(nodes)
		}
		Err(e) => {
			warn!("flywheel-graph: failed to parse tool data: {}", e);
			None
		}
	}
}

/// Load layout overrides from a script element with id="flywheel-config".
/// Missing or invalid config falls back to defaults.
fn load_config() -> FlywheelConfig {
	let Some(json_text) = script_text("flywheel-config") else {
		return FlywheelConfig::default();
	};

	FlywheelConfig::from_json(&json_text).unwrap_or_else(|e| {
		warn!("flywheel-graph: ignoring config: {}", e);
		FlywheelConfig::default()
	})
}

/// Main application component.
/// Loads tool data from the DOM and renders the flywheel.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let nodes = load_nodes().unwrap_or_default();
	let nodes_signal = Signal::derive(move || nodes.clone());
	let config = load_config();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Tool Flywheel" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="flywheel-page">
			<h1>"How the tools fit together"</h1>
			<p class="subtitle">"Hover a tool to see its connections. Click to open details."</p>
			<FlywheelCanvas nodes=nodes_signal config=config />
		</div>
	}
}
