//! Canvas rendering for the flywheel.
//!
//! Draws one [`ViewModel`] in passes for correct z-ordering:
//! 1. Background
//! 2. Resting/dimmed edges, then highlighted edges on top
//! 3. Non-emphasized nodes, then active/connected nodes on top

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::graph::FlywheelGraph;
use super::scale::ScaledValues;
use super::theme::Theme;
use super::view_model::ViewModel;

/// Renders the complete diagram to the canvas.
pub fn render(
	ctx: &CanvasRenderingContext2d,
	width: f64,
	height: f64,
	graph: &FlywheelGraph,
	vm: &ViewModel,
	scale: &ScaledValues,
	theme: &Theme,
) {
	ctx.set_fill_style_str(&theme.background.to_css());
	ctx.fill_rect(0.0, 0.0, width, height);

	draw_edges(ctx, vm, scale, theme);
	draw_nodes(ctx, graph, vm, scale, theme);
}

fn draw_edges(ctx: &CanvasRenderingContext2d, vm: &ViewModel, scale: &ScaledValues, theme: &Theme) {
	let any_active = vm.active_id.is_some();

	for pass_highlighted in [false, true] {
		for (curve, &highlighted) in vm.edge_curves.iter().zip(&vm.edge_highlights) {
			if highlighted != pass_highlighted {
				continue;
			}

			let color = theme.edge_color(highlighted, any_active);
			let width = if highlighted {
				theme.edge.highlight_width
			} else {
				theme.edge.line_width
			};
			ctx.set_stroke_style_str(&color.to_css());
			ctx.set_line_width(width * scale.k);

			match theme.edge.dimmed_dash {
				Some((dash, gap)) if any_active && !highlighted => {
					let _ = ctx.set_line_dash(&js_sys::Array::of2(
						&JsValue::from_f64(dash * scale.k),
						&JsValue::from_f64(gap * scale.k),
					));
				}
				_ => {
					let _ = ctx.set_line_dash(&js_sys::Array::new());
				}
			}

			ctx.begin_path();
			ctx.move_to(curve.start.x, curve.start.y);
			ctx.quadratic_curve_to(curve.control.x, curve.control.y, curve.end.x, curve.end.y);
			ctx.stroke();
		}
	}

	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_nodes(
	ctx: &CanvasRenderingContext2d,
	graph: &FlywheelGraph,
	vm: &ViewModel,
	scale: &ScaledValues,
	theme: &Theme,
) {
	ctx.set_font(&scale.label_font);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	for pass_emphasized in [false, true] {
		let nodes = graph.nodes().iter().zip(&vm.node_positions).zip(&vm.node_states);
		for (i, ((node, pos), &state)) in nodes.enumerate() {
			if state.is_emphasized() != pass_emphasized {
				continue;
			}

			let emphasis = theme.emphasis(state);
			let radius = scale.node_radius * emphasis.radius_mult;
			let color = theme.resolve(&node.color_token, i);

			ctx.set_global_alpha(emphasis.alpha);

			ctx.begin_path();
			let _ = ctx.arc(pos.x, pos.y, radius, 0.0, TAU);
			ctx.set_fill_style_str(&color.to_css());
			ctx.fill();

			if emphasis.ring {
				ctx.begin_path();
				let _ = ctx.arc(pos.x, pos.y, radius + 4.0 * scale.k, 0.0, TAU);
				ctx.set_stroke_style_str(&theme.ring.with_alpha(0.8).to_css());
				ctx.set_line_width(2.0 * scale.k);
				ctx.stroke();
			}

			ctx.set_fill_style_str(&theme.label.to_css());
			let _ = ctx.fill_text(&node.short_label, pos.x, pos.y);

			ctx.set_global_alpha(1.0);
		}
	}
}
