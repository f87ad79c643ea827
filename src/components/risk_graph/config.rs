//! Tunable geometry and timing for the risk graph.

use std::time::Duration;

/// Placement constants for the fixed topology.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
	/// x of slot 0.
	pub start_x: f64,
	/// y shared by every node on the main row.
	pub baseline_y: f64,
	/// Horizontal distance between slots on desktop.
	pub desktop_spacing: f64,
	/// Horizontal distance between slots on tablet.
	pub tablet_spacing: f64,
	/// Horizontal distance between slots on mobile.
	pub mobile_spacing: f64,
	/// Vertical distance of each branch node from the baseline.
	pub desktop_branch_offset: f64,
	/// Branch offset on tablet.
	pub tablet_branch_offset: f64,
	/// Branch offset on mobile.
	pub mobile_branch_offset: f64,
	/// Widths at or above this are tablet.
	pub tablet_min_width: f64,
	/// Widths at or above this are desktop.
	pub desktop_min_width: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			start_x: 100.0,
			baseline_y: 250.0,
			desktop_spacing: 200.0,
			tablet_spacing: 160.0,
			mobile_spacing: 110.0,
			desktop_branch_offset: 100.0,
			tablet_branch_offset: 80.0,
			mobile_branch_offset: 60.0,
			tablet_min_width: 768.0,
			desktop_min_width: 1024.0,
		}
	}
}

/// Edge geometry constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoutingConfig {
	/// Drawn radius of every node; also the hit-test radius.
	pub node_radius: f64,
	/// Gap between a node's rim and the start of its edges.
	pub clearance: f64,
	/// Room left before the target rim; also the arrowhead's length.
	pub arrow_space: f64,
	/// Width of the arrowhead's base.
	pub arrow_width: f64,
	/// Share of a branch edge's horizontal span run straight before the curve.
	pub branch_straight_ratio: f64,
	/// Share of the span taken by the S-curve. Sum with the above must be <= 1.
	pub branch_curve_ratio: f64,
}

impl Default for RoutingConfig {
	fn default() -> Self {
		Self {
			node_radius: 30.0,
			clearance: 5.0,
			arrow_space: 10.0,
			arrow_width: 8.0,
			branch_straight_ratio: 0.39,
			branch_curve_ratio: 0.31,
		}
	}
}

/// Tooltip placement rules and touch timing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverConfig {
	/// Nodes left of this x always get a right-hand tooltip.
	pub left_edge: f64,
	/// Nodes within this distance of the right edge flip left.
	pub right_margin: f64,
	/// Nodes above this y get a tooltip below.
	pub top_edge: f64,
	/// x offset of a right-hand tooltip.
	pub right_offset_x: f64,
	/// Negative: the tooltip sits above the node.
	pub above_offset_y: f64,
	/// x offset of a left-hand tooltip.
	pub left_offset_x: f64,
	/// y offset of a tooltip below the node.
	pub below_offset_y: f64,
	/// Fixed x offset for branch nodes on mobile.
	pub mobile_edge_offset_x: f64,
	/// Rendered tooltip width, used for centring on mobile.
	pub tooltip_width: f64,
	/// Widths below this are treated as mobile.
	pub mobile_breakpoint: f64,
	/// How long a tapped tooltip stays up.
	pub touch_dismiss: Duration,
}

impl Default for HoverConfig {
	fn default() -> Self {
		Self {
			left_edge: 200.0,
			right_margin: 250.0,
			top_edge: 100.0,
			right_offset_x: 30.0,
			above_offset_y: -70.0,
			left_offset_x: -250.0,
			below_offset_y: 40.0,
			mobile_edge_offset_x: -240.0,
			tooltip_width: 220.0,
			mobile_breakpoint: 768.0,
			touch_dismiss: Duration::from_secs(3),
		}
	}
}

/// Popover paging and ring geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopoverConfig {
	/// Assets per page.
	pub page_size: usize,
	/// Radius of the risk ring.
	pub ring_radius: f64,
}

impl Default for PopoverConfig {
	fn default() -> Self {
		Self {
			page_size: 2,
			ring_radius: 50.0,
		}
	}
}

/// Everything the graph view can be tuned with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphConfig {
	/// Node placement.
	pub layout: LayoutConfig,
	/// Edge geometry.
	pub routing: RoutingConfig,
	/// Tooltip rules.
	pub hover: HoverConfig,
	/// Popover paging.
	pub popover: PopoverConfig,
	/// Canvas height in pixels; the width follows the container.
	pub canvas_height: f64,
	/// Simulated provider latency for `load()`.
	pub load_latency: Duration,
}

impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			layout: LayoutConfig::default(),
			routing: RoutingConfig::default(),
			hover: HoverConfig::default(),
			popover: PopoverConfig::default(),
			canvas_height: 500.0,
			load_latency: Duration::from_millis(500),
		}
	}
}
