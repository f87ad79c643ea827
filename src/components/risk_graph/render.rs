use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::config::RoutingConfig;
use super::error::SurfaceError;
use super::layout::PositionedNode;
use super::routing::{Arrowhead, PathCommand, RoutedEdge};
use super::types::Point;

const BACKGROUND: &str = "#0f172a";
const EDGE_COLOR: &str = "rgba(148, 163, 184, 0.8)";
const ANIMATED_EDGE_COLOR: &str = "rgba(96, 165, 250, 0.9)";

/// One frame worth of geometry plus the interaction highlights.
pub struct Scene<'a> {
	pub nodes: &'a [PositionedNode],
	pub edges: &'a [RoutedEdge],
	pub hovered: Option<&'a str>,
	pub selected: Option<&'a str>,
	pub width: f64,
	pub height: f64,
	pub routing: &'a RoutingConfig,
}

pub fn render(scene: &Scene, ctx: &CanvasRenderingContext2d) -> Result<(), SurfaceError> {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, scene.width, scene.height);
	draw_edges(scene, ctx)?;
	draw_nodes(scene, ctx)
}

fn trace(ctx: &CanvasRenderingContext2d, commands: &[PathCommand]) {
	ctx.begin_path();
	for command in commands {
		match *command {
			PathCommand::MoveTo(p) => ctx.move_to(p.x, p.y),
			PathCommand::LineTo(p) => ctx.line_to(p.x, p.y),
			PathCommand::CubicTo { c1, c2, to } => {
				ctx.bezier_curve_to(c1.x, c1.y, c2.x, c2.y, to.x, to.y)
			}
		}
	}
}

fn draw_edges(scene: &Scene, ctx: &CanvasRenderingContext2d) -> Result<(), SurfaceError> {
	ctx.set_line_width(2.0);
	for edge in scene.edges {
		let color = if edge.animated {
			ANIMATED_EDGE_COLOR
		} else {
			EDGE_COLOR
		};
		let dash = if edge.animated {
			js_sys::Array::of2(&JsValue::from_f64(8.0), &JsValue::from_f64(4.0))
		} else {
			js_sys::Array::new()
		};
		ctx.set_line_dash(&dash).map_err(SurfaceError::js)?;
		ctx.set_stroke_style_str(color);
		trace(ctx, &edge.path.commands);
		ctx.stroke();

		ctx.set_line_dash(&js_sys::Array::new())
			.map_err(SurfaceError::js)?;
		ctx.set_fill_style_str(color);
		draw_arrowhead(ctx, &edge.path.arrow, scene.routing.arrow_width);
	}
	Ok(())
}

fn draw_arrowhead(ctx: &CanvasRenderingContext2d, arrow: &Arrowhead, width: f64) {
	let (ux, uy) = (arrow.angle.cos(), arrow.angle.sin());
	let (tip_x, tip_y) = (arrow.tip.x, arrow.tip.y);
	let Point { x: back_x, y: back_y } = arrow.base();
	let (px, py) = (-uy * width * 0.5, ux * width * 0.5);
	ctx.begin_path();
	ctx.move_to(tip_x, tip_y);
	ctx.line_to(back_x + px, back_y + py);
	ctx.line_to(back_x - px, back_y - py);
	ctx.close_path();
	ctx.fill();
}

fn draw_nodes(scene: &Scene, ctx: &CanvasRenderingContext2d) -> Result<(), SurfaceError> {
	let radius = scene.routing.node_radius;
	for positioned in scene.nodes {
		let node = &positioned.node;
		let (x, y) = (positioned.position.x, positioned.position.y);
		let id = node.id.as_str();
		let is_selected = scene.selected == Some(id);
		let is_hovered = scene.hovered == Some(id);

		if is_selected || is_hovered {
			let glow_radius = radius * 1.8;
			let gradient = ctx
				.create_radial_gradient(x, y, radius * 0.3, x, y, glow_radius)
				.map_err(SurfaceError::js)?;
			let alpha = if is_selected { 0.45 } else { 0.3 };
			gradient
				.add_color_stop(0.0, &format!("rgba(255, 255, 255, {})", alpha))
				.map_err(SurfaceError::js)?;
			gradient
				.add_color_stop(1.0, "rgba(255, 255, 255, 0)")
				.map_err(SurfaceError::js)?;
			ctx.begin_path();
			ctx.arc(x, y, glow_radius, 0.0, 2.0 * PI)
				.map_err(SurfaceError::js)?;
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
			ctx.fill();
		}

		ctx.begin_path();
		ctx.arc(x, y, radius, 0.0, 2.0 * PI)
			.map_err(SurfaceError::js)?;
		ctx.set_fill_style_str(node.fill_color());
		ctx.fill();

		if is_selected {
			ctx.set_stroke_style_str("white");
			ctx.set_line_width(3.0);
			ctx.stroke();
		}

		ctx.set_text_align("center");
		ctx.set_fill_style_str("white");
		ctx.set_font("13px sans-serif");
		ctx.fill_text(&node.label, x, y + radius + 18.0)
			.map_err(SurfaceError::js)?;
		if let Some(sublabel) = &node.sublabel {
			ctx.set_fill_style_str("rgba(226, 232, 240, 0.7)");
			ctx.set_font("11px sans-serif");
			ctx.fill_text(sublabel, x, y + radius + 33.0)
				.map_err(SurfaceError::js)?;
		}

		if let Some(badge) = node.badge {
			let (bx, by) = (x + radius * 0.75, y - radius * 0.75);
			ctx.begin_path();
			ctx.arc(bx, by, 9.0, 0.0, 2.0 * PI)
				.map_err(SurfaceError::js)?;
			ctx.set_fill_style_str("#DC2626");
			ctx.fill();
			ctx.set_fill_style_str("white");
			ctx.set_font("bold 10px sans-serif");
			ctx.fill_text(&badge.to_string(), bx, by + 3.5)
				.map_err(SurfaceError::js)?;
		}
	}
	Ok(())
}
