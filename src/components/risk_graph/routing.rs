//! Edge geometry.
//!
//! Plain edges are straight segments trimmed to the node rims. Branch edges
//! (hub to a branch node) leave the hub horizontally, ease into the branch
//! row with a cubic S-curve, then run straight into the target.

use std::collections::HashMap;

use log::debug;

use super::config::RoutingConfig;
use super::layout::{HUB_SLOT, PositionedNode, is_branch_slot};
use super::types::{GraphEdge, Point};

/// One drawing instruction with absolute coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
	/// Start a new subpath.
	MoveTo(Point),
	/// Straight segment.
	LineTo(Point),
	/// Cubic Bézier segment.
	CubicTo {
		/// First control point.
		c1: Point,
		/// Second control point.
		c2: Point,
		/// End point.
		to: Point,
	},
}

impl PathCommand {
	/// Pen position after the command.
	pub fn end_point(&self) -> Point {
		match *self {
			PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
			PathCommand::CubicTo { to, .. } => to,
		}
	}
}

/// Routing style of an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeRole {
	/// Straight trimmed segment.
	Plain,
	/// Hub to a branch node: horizontal run plus S-curve.
	Branch,
}

impl EdgeRole {
	/// Branch only for hub slot to a branch slot.
	pub fn classify(source_index: usize, target_index: usize) -> Self {
		if source_index == HUB_SLOT && is_branch_slot(target_index) {
			EdgeRole::Branch
		} else {
			EdgeRole::Plain
		}
	}
}

/// Where the arrowhead goes and which way it points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrowhead {
	/// Point of the triangle.
	pub tip: Point,
	/// Radians, pointing from the path end towards the tip.
	pub angle: f64,
	/// Tip to base distance. The base sits exactly on the path end.
	pub length: f64,
}

impl Arrowhead {
	/// Arrowhead whose base sits on `end`, pointing along `angle`.
	pub fn at_end(end: Point, angle: f64, length: f64) -> Self {
		Self {
			tip: end.along(angle, length),
			angle,
			length,
		}
	}

	/// Centre of the triangle's base.
	pub fn base(&self) -> Point {
		self.tip.along(self.angle, -self.length)
	}
}

/// Polyline or curve for one edge, plus its arrowhead.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgePath {
	/// Drawing commands, starting with a `MoveTo`.
	pub commands: Vec<PathCommand>,
	/// Arrowhead at the target end.
	pub arrow: Arrowhead,
}

/// An edge resolved against the current layout.
#[derive(Clone, Debug, PartialEq)]
pub struct RoutedEdge {
	/// Source node id.
	pub source: String,
	/// Target node id.
	pub target: String,
	/// Routing style used.
	pub role: EdgeRole,
	/// Drawn dashed when set.
	pub animated: bool,
	/// Geometry to draw.
	pub path: EdgePath,
}

/// Straight segment between the rims, ending `arrow_space` short of the
/// target rim.
pub fn route_plain(source: Point, target: Point, config: &RoutingConfig) -> EdgePath {
	let angle = (target.y - source.y).atan2(target.x - source.x);
	let rim = config.node_radius + config.clearance;
	let start = source.along(angle, rim);
	let end = target.along(angle, -(rim + config.arrow_space));
	EdgePath {
		commands: vec![PathCommand::MoveTo(start), PathCommand::LineTo(end)],
		arrow: Arrowhead::at_end(end, angle, config.arrow_space),
	}
}

/// Straight and curve shares of the horizontal span, scaled down together
/// if they overshoot the span.
fn branch_ratios(config: &RoutingConfig) -> (f64, f64) {
	let straight = config.branch_straight_ratio.clamp(0.0, 1.0);
	let curve = config.branch_curve_ratio.clamp(0.0, 1.0);
	let sum = straight + curve;
	if sum > 1.0 {
		(straight / sum, curve / sum)
	} else {
		(straight, curve)
	}
}

/// Horizontal run from the hub, S-curve into the branch row, then straight
/// into the target.
pub fn route_branch(source: Point, target: Point, config: &RoutingConfig) -> EdgePath {
	let start = Point::new(source.x + config.node_radius + config.clearance, source.y);
	let end = Point::new(target.x - config.node_radius - config.arrow_space, target.y);
	let span = end.x - start.x;
	let (straight, curve) = branch_ratios(config);

	let curve_start = Point::new(start.x + span * straight, start.y);
	let curve_len = span * curve;
	let curve_end = Point::new(curve_start.x + curve_len, end.y);
	let mid_x = curve_start.x + curve_len / 2.0;

	EdgePath {
		commands: vec![
			PathCommand::MoveTo(start),
			PathCommand::LineTo(curve_start),
			PathCommand::CubicTo {
				c1: Point::new(mid_x, start.y),
				c2: Point::new(mid_x, end.y),
				to: curve_end,
			},
			PathCommand::LineTo(end),
		],
		arrow: Arrowhead::at_end(end, 0.0, config.arrow_space),
	}
}

/// Routes every edge against the current layout. Endpoints missing from
/// `nodes` are routed from or to the origin.
pub fn route_edges(
	nodes: &[PositionedNode],
	edges: &[GraphEdge],
	config: &RoutingConfig,
) -> Vec<RoutedEdge> {
	let by_id: HashMap<&str, &PositionedNode> =
		nodes.iter().map(|n| (n.node.id.as_str(), n)).collect();

	edges
		.iter()
		.map(|edge| {
			let source = by_id.get(edge.source.as_str());
			let target = by_id.get(edge.target.as_str());
			if source.is_none() || target.is_none() {
				debug!("Edge {} -> {} has a missing endpoint", edge.source, edge.target);
			}
			let role = match (source, target) {
				(Some(s), Some(t)) => EdgeRole::classify(s.index, t.index),
				_ => EdgeRole::Plain,
			};
			let from = source.map_or(Point::ORIGIN, |n| n.position);
			let to = target.map_or(Point::ORIGIN, |n| n.position);
			let path = match role {
				EdgeRole::Plain => route_plain(from, to, config),
				EdgeRole::Branch => route_branch(from, to, config),
			};
			RoutedEdge {
				source: edge.source.clone(),
				target: edge.target.clone(),
				role,
				animated: edge.animated,
				path,
			}
		})
		.collect()
}
