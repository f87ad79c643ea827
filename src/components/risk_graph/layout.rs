//! Deterministic placement for the five-slot topology.
//!
//! Slots 0..=2 sit on the baseline, slot 2 being the hub. Slots 3 and 4 are
//! branch nodes sharing one x, three spacings from the start, mirrored above
//! and below the baseline. Any node past the slot table falls back to
//! `x = start + index * spacing`, `y = baseline`.

use super::config::LayoutConfig;
use super::types::{GraphNode, Point};

/// Slot whose outgoing edges to the branch slots are S-curves.
pub const HUB_SLOT: usize = 2;
/// Branch node above the baseline.
pub const UPPER_BRANCH_SLOT: usize = 3;
/// Branch node below the baseline.
pub const LOWER_BRANCH_SLOT: usize = 4;

/// Slots 3 and 4.
pub fn is_branch_slot(index: usize) -> bool {
	index == UPPER_BRANCH_SLOT || index == LOWER_BRANCH_SLOT
}

/// Width bucket picking the spacing table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
	/// Below `tablet_min_width`.
	Mobile,
	/// From `tablet_min_width` up to `desktop_min_width`.
	Tablet,
	/// At or above `desktop_min_width`.
	Desktop,
}

impl ViewportClass {
	/// Classifies a window width.
	pub fn from_width(width: f64, config: &LayoutConfig) -> Self {
		if width >= config.desktop_min_width {
			ViewportClass::Desktop
		} else if width >= config.tablet_min_width {
			ViewportClass::Tablet
		} else {
			ViewportClass::Mobile
		}
	}

	fn spacing(self, config: &LayoutConfig) -> f64 {
		match self {
			ViewportClass::Desktop => config.desktop_spacing,
			ViewportClass::Tablet => config.tablet_spacing,
			ViewportClass::Mobile => config.mobile_spacing,
		}
	}

	fn branch_offset(self, config: &LayoutConfig) -> f64 {
		match self {
			ViewportClass::Desktop => config.desktop_branch_offset,
			ViewportClass::Tablet => config.tablet_branch_offset,
			ViewportClass::Mobile => config.mobile_branch_offset,
		}
	}
}

/// A node together with the position the layout assigned it.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedNode {
	/// Slot, i.e. index in the snapshot's node list.
	pub index: usize,
	/// The node itself.
	pub node: GraphNode,
	/// Centre in canvas coordinates.
	pub position: Point,
}

/// Centre of slot `index`, using the fallback rule past the slot table.
pub fn slot_position(index: usize, viewport: ViewportClass, config: &LayoutConfig) -> Point {
	let spacing = viewport.spacing(config);
	let branch_offset = viewport.branch_offset(config);
	let branch_x = config.start_x + 3.0 * spacing;
	match index {
		UPPER_BRANCH_SLOT => Point::new(branch_x, config.baseline_y - branch_offset),
		LOWER_BRANCH_SLOT => Point::new(branch_x, config.baseline_y + branch_offset),
		_ => Point::new(config.start_x + index as f64 * spacing, config.baseline_y),
	}
}

/// Places every node by its index.
pub fn position_nodes(
	nodes: &[GraphNode],
	viewport: ViewportClass,
	config: &LayoutConfig,
) -> Vec<PositionedNode> {
	nodes
		.iter()
		.enumerate()
		.map(|(index, node)| PositionedNode {
			index,
			node: node.clone(),
			position: slot_position(index, viewport, config),
		})
		.collect()
}

/// Position of `id`, or the origin when it is not in `nodes`.
pub fn position_of(nodes: &[PositionedNode], id: &str) -> Point {
	nodes
		.iter()
		.find(|n| n.node.id == id)
		.map(|n| n.position)
		.unwrap_or(Point::ORIGIN)
}

/// The topmost node under `(x, y)`. Later nodes are drawn over earlier ones.
pub fn hit_test(nodes: &[PositionedNode], x: f64, y: f64, radius: f64) -> Option<&PositionedNode> {
	nodes.iter().rev().find(|n| {
		let (dx, dy) = (n.position.x - x, n.position.y - y);
		(dx * dx + dy * dy).sqrt() <= radius
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::risk_graph::provider::{GraphDataProvider, SampleGraphProvider};
	use crate::components::risk_graph::types::NodeStatus;

	const VIEWPORTS: [ViewportClass; 3] = [
		ViewportClass::Mobile,
		ViewportClass::Tablet,
		ViewportClass::Desktop,
	];

	fn nodes(count: usize) -> Vec<GraphNode> {
		(0..count)
			.map(|i| GraphNode {
				id: i.to_string(),
				label: format!("Node {i}"),
				sublabel: None,
				value: 0.0,
				color: None,
				icon: None,
				badge: None,
				status: NodeStatus::Info,
			})
			.collect()
	}

	#[test]
	fn viewport_thresholds() {
		let config = LayoutConfig::default();
		assert_eq!(ViewportClass::from_width(1280.0, &config), ViewportClass::Desktop);
		assert_eq!(ViewportClass::from_width(1024.0, &config), ViewportClass::Desktop);
		assert_eq!(ViewportClass::from_width(1023.0, &config), ViewportClass::Tablet);
		assert_eq!(ViewportClass::from_width(768.0, &config), ViewportClass::Tablet);
		assert_eq!(ViewportClass::from_width(767.0, &config), ViewportClass::Mobile);
	}

	#[test]
	fn branch_nodes_mirror_around_hub_at_every_viewport() {
		let config = LayoutConfig::default();
		for viewport in VIEWPORTS {
			let placed = position_nodes(&nodes(5), viewport, &config);
			let hub = placed[HUB_SLOT].position;
			let upper = placed[UPPER_BRANCH_SLOT].position;
			let lower = placed[LOWER_BRANCH_SLOT].position;
			assert_eq!(upper.x, lower.x, "{viewport:?}");
			assert!(upper.x > hub.x);
			assert_eq!(hub.y - upper.y, lower.y - hub.y, "{viewport:?}");
			assert_eq!(
				hub.y - upper.y,
				viewport.branch_offset(&config),
				"{viewport:?}"
			);
		}
	}

	#[test]
	fn baseline_nodes_are_evenly_spaced() {
		let config = LayoutConfig::default();
		let placed = position_nodes(&nodes(3), ViewportClass::Desktop, &config);
		assert_eq!(placed[0].position, Point::new(100.0, 250.0));
		assert_eq!(placed[1].position, Point::new(300.0, 250.0));
		assert_eq!(placed[2].position, Point::new(500.0, 250.0));
	}

	#[test]
	fn nodes_past_the_slot_table_extend_the_baseline() {
		let config = LayoutConfig::default();
		for viewport in VIEWPORTS {
			let placed = position_nodes(&nodes(6), viewport, &config);
			let spacing = viewport.spacing(&config);
			assert_eq!(
				placed[5].position,
				Point::new(config.start_x + 5.0 * spacing, config.baseline_y)
			);
		}
	}

	#[test]
	fn empty_input_yields_no_positions() {
		let placed = position_nodes(&[], ViewportClass::Desktop, &LayoutConfig::default());
		assert!(placed.is_empty());
	}

	#[test]
	fn sample_graph_places_branches_around_node_three() {
		let data = SampleGraphProvider.graph_data();
		let placed = position_nodes(&data.nodes, ViewportClass::Desktop, &LayoutConfig::default());
		let hub = position_of(&placed, "3");
		let four = position_of(&placed, "4");
		let five = position_of(&placed, "5");
		assert_eq!(four.x, five.x);
		assert_eq!(hub.y - four.y, five.y - hub.y);
	}

	#[test]
	fn unknown_id_falls_back_to_origin() {
		let placed = position_nodes(&nodes(2), ViewportClass::Desktop, &LayoutConfig::default());
		assert_eq!(position_of(&placed, "missing"), Point::ORIGIN);
	}

	#[test]
	fn hit_test_finds_node_within_radius() {
		let placed = position_nodes(&nodes(3), ViewportClass::Desktop, &LayoutConfig::default());
		let hit = hit_test(&placed, 310.0, 245.0, 30.0).map(|n| n.node.id.as_str());
		assert_eq!(hit, Some("1"));
		assert!(hit_test(&placed, 200.0, 250.0, 30.0).is_none());
	}
}
