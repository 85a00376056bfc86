//! Leptos component wrapping the flywheel canvas and its detail panel.
//!
//! The component owns the only viewport measurement: it classifies the window
//! width into a [`SizeClass`], turns pointer events into hover/activate events,
//! and redraws the canvas after every state change. There is no animation
//! loop; each redraw is a direct response to input or a resize.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::config::FlywheelConfig;
use super::detail::{DetailPanel, DetailPresentation, DetailView};
use super::render;
use super::scale::{ScaledValues, SizeClass};
use super::state::Flywheel;
use super::theme::Theme;
use super::types::{Point, ToolNode};
use super::view_model::ViewModel;

/// Bundles the flywheel instance with the canvas it draws to.
struct FlywheelContext {
	flywheel: Flywheel,
	theme: Theme,
	ctx: CanvasRenderingContext2d,
	width: f64,
	height: f64,
	size_class: SizeClass,
}

impl FlywheelContext {
	fn center(&self) -> Point {
		Point::new(self.width / 2.0, self.height / 2.0)
	}

	fn scaled(&self) -> ScaledValues {
		ScaledValues::new(self.flywheel.config(), self.size_class)
	}

	fn view_model(&self) -> ViewModel {
		self.flywheel.view_model(self.size_class, self.center())
	}

	fn node_at(&self, x: f64, y: f64) -> Option<String> {
		self.view_model()
			.node_at(x, y, self.scaled().hit_radius)
			.map(str::to_string)
	}

	fn redraw(&self) {
		render::render(
			&self.ctx,
			self.width,
			self.height,
			self.flywheel.graph(),
			&self.view_model(),
			&self.scaled(),
			&self.theme,
		);
	}
}

fn window_width(window: &Window) -> f64 {
	window
		.inner_width()
		.ok()
		.and_then(|w| w.as_f64())
		.unwrap_or(1024.0)
}

fn canvas_size(canvas: &HtmlCanvasElement, width: Option<f64>, height: Option<f64>) -> (f64, f64) {
	let parent = canvas.parent_element();
	(
		width.unwrap_or_else(|| {
			parent
				.as_ref()
				.map(|p| p.client_width() as f64)
				.filter(|w| *w > 0.0)
				.unwrap_or(600.0)
		}),
		height.unwrap_or_else(|| {
			parent
				.as_ref()
				.map(|p| p.client_height() as f64)
				.filter(|h| *h > 0.0)
				.unwrap_or(600.0)
		}),
	)
}

fn pointer(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Renders the flywheel diagram on a canvas with a single detail panel.
///
/// The panel opens for the selected tool and is shown inline, or as an
/// overlay when the viewport classifies as compact. Explicit `width`/`height`
/// override sizing from the parent element.
#[component]
pub fn FlywheelCanvas(
	#[prop(into)] nodes: Signal<Vec<ToolNode>>,
	#[prop(optional)] config: FlywheelConfig,
	#[prop(default = false)] light: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FlywheelContext>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let detail = RwSignal::new(None::<DetailView>);
	let presentation = RwSignal::new(DetailPresentation::Inline);

	let sync = move |c: &FlywheelContext| {
		c.redraw();
		detail.set(DetailPanel::view(c.flywheel.graph(), c.flywheel.state()));
		presentation.set(DetailPresentation::for_compact(c.size_class.is_compact()));
	};

	let (context_init, resize_cb_init) = (context.clone(), resize_cb.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let flywheel = match Flywheel::new(nodes.get(), config.clone()) {
			Ok(f) => f,
			Err(e) => {
				warn!("flywheel: not rendering: {}", e);
				return;
			}
		};

		let ctx: CanvasRenderingContext2d = match canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		{
			Some(ctx) => ctx,
			None => {
				warn!("flywheel: canvas 2d context unavailable");
				return;
			}
		};

		let (w, h) = canvas_size(&canvas, width, height);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		let size_class = flywheel.config().breakpoints.classify(window_width(&window));

		let c = FlywheelContext {
			flywheel,
			theme: if light { Theme::light() } else { Theme::default() },
			ctx,
			width: w,
			height: h,
			size_class,
		};
		sync(&c);
		*context_init.borrow_mut() = Some(c);

		if resize_cb_init.borrow().is_none() {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					let (nw, nh) = canvas_size(&canvas_resize, width, height);
					canvas_resize.set_width(nw as u32);
					canvas_resize.set_height(nh as u32);
					c.width = nw;
					c.height = nh;
					c.size_class = c.flywheel.config().breakpoints.classify(window_width(&win));
					sync(c);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
	});

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			let hit = c.node_at(x, y);
			if c.flywheel.set_hover(hit.as_deref()) {
				sync(c);
			}
		}
	};

	let context_cl = context.clone();
	let on_click = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut c) = *context_cl.borrow_mut() {
			let changed = match c.node_at(x, y) {
				Some(id) => c.flywheel.activate(&id),
				None => c.flywheel.dismiss(),
			};
			if changed {
				sync(c);
			}
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			if c.flywheel.set_hover(None) {
				sync(c);
			}
		}
	};

	let context_close = context.clone();
	let on_close = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_close.borrow_mut() {
			if c.flywheel.dismiss() {
				sync(c);
			}
		}
	};

	let panel_class = move || match presentation.get() {
		DetailPresentation::Inline => "flywheel-detail flywheel-detail-inline",
		DetailPresentation::Overlay => "flywheel-detail flywheel-detail-overlay",
	};

	view! {
		<div class="flywheel">
			<canvas
				node_ref=canvas_ref
				class="flywheel-canvas"
				on:mousemove=on_mousemove
				on:click=on_click
				on:mouseleave=on_mouseleave
				style="display: block; cursor: pointer;"
			/>
			<aside class=panel_class hidden=move || detail.with(Option::is_none)>
				<button class="flywheel-detail-close" on:click=on_close>
					"×"
				</button>
				{move || detail.get().map(|d| view! {
					<h2 data-token=d.color_token.clone()>{d.name.clone()}</h2>
					<p class="flywheel-detail-label">{d.short_label.clone()}</p>
					{d.description.clone().map(|text| view! { <p>{text}</p> })}
					<ul class="flywheel-detail-connections">
						{d
							.connections
							.into_iter()
							.map(|conn| view! {
								<li data-token=conn.color_token>
									<strong>{conn.name}</strong>
									{conn.note.map(|note| view! { <span>{note}</span> })}
								</li>
							})
							.collect_view()}
					</ul>
				})}
			</aside>
		</div>
	}
}
