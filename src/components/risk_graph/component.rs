use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent};

use super::config::GraphConfig;
use super::error::SurfaceError;
use super::hover::{HoverRequest, HoverToken, HoverTracker, InputModality, place_tooltip};
use super::layout::{PositionedNode, ViewportClass, hit_test, position_nodes};
use super::render::{self, Scene};
use super::routing::route_edges;
use super::store::GraphStateStore;
use super::tooltip::NodeTooltip;
use super::types::{HoveredNodeState, Point};

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SurfaceError> {
	canvas
		.get_context("2d")
		.map_err(SurfaceError::context)?
		.ok_or_else(|| SurfaceError::Context("2d context not supported".into()))?
		.dyn_into()
		.map_err(|_| SurfaceError::Context("unexpected context type".into()))
}

fn viewport_width() -> Result<f64, SurfaceError> {
	let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
	Ok(window
		.inner_width()
		.map_err(SurfaceError::js)?
		.as_f64()
		.unwrap_or_default())
}

/// Sizes the canvas to its parent and returns `(viewport, container)` widths.
fn fit_canvas(canvas: &HtmlCanvasElement, height: f64) -> Result<(f64, f64), SurfaceError> {
	let viewport = viewport_width()?;
	let container = canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.unwrap_or(viewport);
	canvas.set_width(container as u32);
	canvas.set_height(height as u32);
	Ok((viewport, container))
}

fn local_point(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> Point {
	let rect = canvas.get_bounding_client_rect();
	Point::new(
		client_x as f64 - rect.left(),
		client_y as f64 - rect.top(),
	)
}

/// Interactive risk graph drawn on a 2d canvas.
///
/// Layout and routing are memos over the store's snapshot and the viewport
/// width; the canvas redraws whenever either memo, the tooltip or the
/// selection changes.
#[component]
pub fn RiskGraphCanvas(
	/// Shared graph state; the canvas reads the snapshot and writes the selection.
	store: GraphStateStore,
	/// Geometry and timing; defaults match the dashboard.
	#[prop(optional)]
	config: GraphConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let viewport = RwSignal::new(viewport_width().unwrap_or(config.layout.desktop_min_width));
	let container = RwSignal::new(config.layout.desktop_min_width);
	let hover = RwSignal::new(HoverTracker::default());
	let dismiss_timer: StoredValue<Option<TimeoutHandle>> = StoredValue::new(None);
	let (graph_data, selected_node) = (store.graph_data(), store.selected_node());

	let positioned = Memo::new(move |_| {
		let class = ViewportClass::from_width(viewport.get(), &config.layout);
		graph_data.with(|data| {
			data.as_ref()
				.map(|d| position_nodes(&d.nodes, class, &config.layout))
				.unwrap_or_default()
		})
	});

	let routed = Memo::new(move |_| {
		positioned.with(|nodes| {
			graph_data.with(|data| {
				data.as_ref()
					.map(|d| route_edges(nodes, &d.edges, &config.routing))
					.unwrap_or_default()
			})
		})
	});

	let refit = move |canvas: &HtmlCanvasElement| match fit_canvas(canvas, config.canvas_height) {
		Ok((viewport_w, container_w)) => {
			debug!("Graph surface resized to {container_w}px (viewport {viewport_w}px)");
			viewport.set(viewport_w);
			container.set(container_w);
		}
		Err(err) => warn!("Could not size graph canvas: {err}"),
	};

	Effect::new(move |_| {
		if let Some(canvas) = canvas_ref.get() {
			refit(&canvas);
		}
	});

	let resize = window_event_listener(ev::resize, move |_| {
		if let Some(canvas) = canvas_ref.get_untracked() {
			refit(&canvas);
		}
	});

	on_cleanup(move || {
		debug!("Detaching graph surface listeners");
		resize.remove();
		if let Some(Some(handle)) = dismiss_timer.try_get_value() {
			handle.clear();
		}
	});

	Effect::new(move |_| {
		let hovered = hover.with(|h| h.current().map(|s| s.node.id.clone()));
		let selected = selected_node.with(|s| s.as_ref().map(|d| d.node.id.clone()));
		let width = container.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		positioned.with(|nodes| {
			routed.with(|edges| {
				let scene = Scene {
					nodes,
					edges,
					hovered: hovered.as_deref(),
					selected: selected.as_deref(),
					width,
					height: config.canvas_height,
					routing: &config.routing,
				};
				if let Err(err) = context_2d(&canvas).and_then(|ctx| render::render(&scene, &ctx)) {
					warn!("Graph render failed: {err}");
				}
			})
		});
	});

	let node_at = move |client_x: i32, client_y: i32| -> Option<PositionedNode> {
		let canvas = canvas_ref.get_untracked()?;
		let point = local_point(&canvas, client_x, client_y);
		positioned.with_untracked(|nodes| {
			hit_test(nodes, point.x, point.y, config.routing.node_radius).cloned()
		})
	};

	let show_tooltip = move |target: PositionedNode, modality: InputModality| -> Option<HoverToken> {
		let already_shown = hover.with_untracked(|h| {
			h.current().is_some_and(|s| s.node.id == target.node.id)
		});
		if already_shown {
			return None;
		}
		let content = store.tooltip(&target.node)?;
		let placement = place_tooltip(
			&HoverRequest {
				slot: target.index,
				position: target.position,
				container_width: container.get_untracked(),
				viewport_width: viewport.get_untracked(),
			},
			&config.hover,
		);
		debug!("Tooltip for node {} via {modality:?}", target.node.id);
		let state = HoveredNodeState {
			node: target.node,
			content,
			position: placement.anchor,
		};
		hover.try_update(|h| h.show(state, modality))
	};

	let cancel_dismiss = move || {
		if let Some(Some(handle)) = dismiss_timer.try_get_value() {
			handle.clear();
			dismiss_timer.set_value(None);
		}
	};

	let schedule_dismiss = move |token: HoverToken, delay: Duration| {
		cancel_dismiss();
		match set_timeout_with_handle(
			move || {
				hover.try_update(|h| h.expire(token));
			},
			delay,
		) {
			Ok(handle) => dismiss_timer.set_value(Some(handle)),
			Err(err) => warn!("{}", SurfaceError::timer(err)),
		}
	};

	let dismiss_all = move || {
		cancel_dismiss();
		hover.update(HoverTracker::dismiss);
	};

	// Only notifies tooltip readers when a tooltip was actually cleared.
	let leave = move || {
		let width = viewport.get_untracked();
		hover.maybe_update(|h| h.leave(width, &config.hover));
	};

	let on_mousemove = move |ev: MouseEvent| match node_at(ev.client_x(), ev.client_y()) {
		Some(target) => {
			show_tooltip(target, InputModality::Pointer);
		}
		None => leave(),
	};

	let on_mouseleave = move |_: MouseEvent| leave();

	let on_click = move |ev: MouseEvent| match node_at(ev.client_x(), ev.client_y()) {
		Some(target) => store.select_node(
			target.node,
			Point::new(ev.client_x() as f64, ev.client_y() as f64),
		),
		None => {
			store.clear_selection();
			dismiss_all();
		}
	};

	let on_touchstart = move |ev: TouchEvent| {
		let Some(touch) = ev.touches().get(0) else {
			return;
		};
		match node_at(touch.client_x(), touch.client_y()) {
			Some(target) => {
				if let Some(token) = show_tooltip(target, InputModality::Touch) {
					schedule_dismiss(token, config.hover.touch_dismiss);
				}
			}
			None => dismiss_all(),
		}
	};

	view! {
		<div class="risk-graph" style="position: relative; width: 100%;">
			<canvas
				node_ref=canvas_ref
				class="risk-graph-canvas"
				on:mousemove=on_mousemove
				on:mouseleave=on_mouseleave
				on:click=on_click
				on:touchstart=on_touchstart
				style="display: block; cursor: pointer;"
			/>
			<NodeTooltip hovered=Signal::derive(move || hover.with(|h| h.current().cloned())) />
		</div>
	}
}
