//! Tooltip placement and lifetime.
//!
//! Placement starts right of and above the node, then applies the edge
//! rules in order: near the left edge keeps it right, near the right edge
//! flips it left, near the top flips it below. On mobile the two branch
//! nodes get a fixed leftward offset and every other node is centred in the
//! container.

use std::time::Duration;

use super::config::HoverConfig;
use super::layout::is_branch_slot;
use super::types::{HoveredNodeState, Point};

/// How the tooltip was summoned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputModality {
	/// Mouse or pen hover.
	Pointer,
	/// Tap.
	Touch,
}

/// Which side of the node the tooltip ends up on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalSide {
	/// Left of the node.
	Left,
	/// Right of the node.
	Right,
	/// Centred in the container (mobile).
	Centered,
}

/// Whether the tooltip sits above or below the node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalSide {
	/// Above the node.
	Above,
	/// Below the node.
	Below,
}

/// Everything placement needs to know about one hover.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverRequest {
	/// Layout slot of the hovered node.
	pub slot: usize,
	/// Node centre in container coordinates.
	pub position: Point,
	/// Width of the element hosting the canvas.
	pub container_width: f64,
	/// Window inner width.
	pub viewport_width: f64,
}

/// Result of [`place_tooltip`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipPlacement {
	/// Top-left corner of the tooltip in container coordinates.
	pub anchor: Point,
	/// Horizontal side chosen.
	pub horizontal: HorizontalSide,
	/// Vertical side chosen.
	pub vertical: VerticalSide,
}

/// When a shown tooltip goes away.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissPolicy {
	/// Cleared when the pointer leaves the node.
	OnLeave,
	/// Stays until an outside interaction.
	Sticky,
	/// Cleared automatically after the delay.
	AfterDelay(Duration),
}

/// Viewports narrower than the mobile breakpoint.
pub fn is_mobile(viewport_width: f64, config: &HoverConfig) -> bool {
	viewport_width < config.mobile_breakpoint
}

/// Anchors a tooltip next to the hovered node.
pub fn place_tooltip(request: &HoverRequest, config: &HoverConfig) -> TooltipPlacement {
	let Point { x, y } = request.position;

	if is_mobile(request.viewport_width, config) {
		if is_branch_slot(request.slot) {
			return TooltipPlacement {
				anchor: Point::new(x + config.mobile_edge_offset_x, y + config.above_offset_y),
				horizontal: HorizontalSide::Left,
				vertical: VerticalSide::Above,
			};
		}
		let (dy, vertical) = vertical_offset(y, config);
		return TooltipPlacement {
			anchor: Point::new((request.container_width - config.tooltip_width) / 2.0, y + dy),
			horizontal: HorizontalSide::Centered,
			vertical,
		};
	}

	let (dx, horizontal) = if x < config.left_edge {
		(config.right_offset_x, HorizontalSide::Right)
	} else if x > request.container_width - config.right_margin {
		(config.left_offset_x, HorizontalSide::Left)
	} else {
		(config.right_offset_x, HorizontalSide::Right)
	};
	let (dy, vertical) = vertical_offset(y, config);

	TooltipPlacement {
		anchor: Point::new(x + dx, y + dy),
		horizontal,
		vertical,
	}
}

fn vertical_offset(y: f64, config: &HoverConfig) -> (f64, VerticalSide) {
	if y < config.top_edge {
		(config.below_offset_y, VerticalSide::Below)
	} else {
		(config.above_offset_y, VerticalSide::Above)
	}
}

/// Policy for a tooltip shown via `modality` at `viewport_width`.
pub fn dismiss_policy(modality: InputModality, viewport_width: f64, config: &HoverConfig) -> DismissPolicy {
	match modality {
		InputModality::Touch => DismissPolicy::AfterDelay(config.touch_dismiss),
		InputModality::Pointer if is_mobile(viewport_width, config) => DismissPolicy::Sticky,
		InputModality::Pointer => DismissPolicy::OnLeave,
	}
}

/// Identifies one shown tooltip, so a late timer cannot clear a newer one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverToken(u64);

/// The single ephemeral tooltip slot.
///
/// Remembers how the tooltip was summoned rather than its policy, so a
/// resize between show and leave is honoured.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoverTracker {
	current: Option<(HoveredNodeState, InputModality)>,
	issued: u64,
}

impl HoverTracker {
	/// The tooltip on screen, if any.
	pub fn current(&self) -> Option<&HoveredNodeState> {
		self.current.as_ref().map(|(state, _)| state)
	}

	/// How the current tooltip was summoned.
	pub fn modality(&self) -> Option<InputModality> {
		self.current.as_ref().map(|(_, modality)| *modality)
	}

	/// Replaces the slot and returns a token for a later [`expire`](Self::expire).
	pub fn show(&mut self, state: HoveredNodeState, modality: InputModality) -> HoverToken {
		self.issued += 1;
		self.current = Some((state, modality));
		HoverToken(self.issued)
	}

	/// Pointer left the node. Clears the tooltip only if its policy at the
	/// current `viewport_width` is `OnLeave`.
	pub fn leave(&mut self, viewport_width: f64, config: &HoverConfig) -> bool {
		let Some(modality) = self.modality() else {
			return false;
		};
		if dismiss_policy(modality, viewport_width, config) != DismissPolicy::OnLeave {
			return false;
		}
		self.current = None;
		true
	}

	/// Timer fired for `token`. Ignored if another tooltip replaced it.
	pub fn expire(&mut self, token: HoverToken) -> bool {
		if token.0 == self.issued && self.current.is_some() {
			self.current = None;
			return true;
		}
		false
	}

	/// Interaction outside any node.
	pub fn dismiss(&mut self) {
		self.current = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::risk_graph::types::{GraphNode, NodeStatus, TooltipContent};

	const WIDTH: f64 = 1200.0;

	fn request(slot: usize, x: f64, y: f64) -> HoverRequest {
		HoverRequest {
			slot,
			position: Point::new(x, y),
			container_width: WIDTH,
			viewport_width: WIDTH,
		}
	}

	fn hovered(id: &str) -> HoveredNodeState {
		HoveredNodeState {
			node: GraphNode {
				id: id.into(),
				label: id.into(),
				sublabel: None,
				value: 0.0,
				color: None,
				icon: None,
				badge: None,
				status: NodeStatus::Info,
			},
			content: TooltipContent::Server {
				server_name: id.into(),
				ip_address: "10.0.0.1".into(),
				grid_numbers: Vec::new(),
			},
			position: Point::ORIGIN,
		}
	}

	#[test]
	fn near_left_edge_anchors_right() {
		let config = HoverConfig::default();
		let placement = place_tooltip(&request(0, 150.0, 250.0), &config);
		assert_eq!(placement.horizontal, HorizontalSide::Right);
		assert!(placement.anchor.x > 150.0);
	}

	#[test]
	fn near_right_edge_anchors_left() {
		let config = HoverConfig::default();
		let placement = place_tooltip(&request(1, WIDTH - 100.0, 250.0), &config);
		assert_eq!(placement.horizontal, HorizontalSide::Left);
		assert!(placement.anchor.x < WIDTH - 100.0);
	}

	#[test]
	fn near_top_anchors_below() {
		let config = HoverConfig::default();
		let placement = place_tooltip(&request(1, 500.0, 50.0), &config);
		assert_eq!(placement.vertical, VerticalSide::Below);
		assert!(placement.anchor.y > 50.0);
	}

	#[test]
	fn default_is_right_and_above() {
		let config = HoverConfig::default();
		let placement = place_tooltip(&request(1, 500.0, 250.0), &config);
		assert_eq!(placement.anchor, Point::new(530.0, 180.0));
		assert_eq!(placement.vertical, VerticalSide::Above);
	}

	#[test]
	fn mobile_branch_nodes_use_fixed_left_offset() {
		let config = HoverConfig::default();
		let req = HoverRequest {
			container_width: 400.0,
			viewport_width: 400.0,
			..request(3, 430.0, 190.0)
		};
		let placement = place_tooltip(&req, &config);
		assert_eq!(placement.anchor.x, 430.0 + config.mobile_edge_offset_x);
		assert_eq!(placement.horizontal, HorizontalSide::Left);
	}

	#[test]
	fn mobile_other_nodes_are_centered_in_container() {
		let config = HoverConfig::default();
		let req = HoverRequest {
			container_width: 400.0,
			viewport_width: 400.0,
			..request(0, 100.0, 250.0)
		};
		let placement = place_tooltip(&req, &config);
		assert_eq!(placement.anchor.x, (400.0 - config.tooltip_width) / 2.0);
		assert_eq!(placement.horizontal, HorizontalSide::Centered);
	}

	#[test]
	fn dismissal_depends_on_modality_and_width() {
		let config = HoverConfig::default();
		assert_eq!(
			dismiss_policy(InputModality::Pointer, 1200.0, &config),
			DismissPolicy::OnLeave
		);
		assert_eq!(
			dismiss_policy(InputModality::Pointer, 500.0, &config),
			DismissPolicy::Sticky
		);
		assert_eq!(
			dismiss_policy(InputModality::Touch, 1200.0, &config),
			DismissPolicy::AfterDelay(Duration::from_secs(3))
		);
	}

	#[test]
	fn pointer_leave_is_noop_on_mobile() {
		let config = HoverConfig::default();
		let mut tracker = HoverTracker::default();
		tracker.show(hovered("1"), InputModality::Pointer);
		assert!(!tracker.leave(500.0, &config));
		assert!(tracker.current().is_some());

		assert!(tracker.leave(1200.0, &config));
		assert!(tracker.current().is_none());
	}

	#[test]
	fn leave_without_tooltip_changes_nothing() {
		let config = HoverConfig::default();
		let mut tracker = HoverTracker::default();
		let before = tracker.clone();
		assert!(!tracker.leave(1200.0, &config));
		assert_eq!(tracker, before);
	}

	#[test]
	fn leave_uses_width_at_leave_time() {
		let config = HoverConfig::default();
		let mut tracker = HoverTracker::default();
		tracker.show(hovered("1"), InputModality::Pointer);
		// Shown on desktop, window shrunk to mobile before the pointer left.
		assert!(!tracker.leave(500.0, &config));
		assert!(tracker.current().is_some());

		tracker.show(hovered("2"), InputModality::Pointer);
		// Shown on mobile, window widened before the pointer left.
		assert!(tracker.leave(1200.0, &config));
		assert!(tracker.current().is_none());
	}

	#[test]
	fn touch_tooltip_clears_when_its_timer_fires() {
		let config = HoverConfig::default();
		let mut tracker = HoverTracker::default();
		let token = tracker.show(hovered("2"), InputModality::Touch);

		assert_eq!(tracker.modality(), Some(InputModality::Touch));
		assert!(!tracker.leave(1200.0, &config));
		assert!(tracker.expire(token));
		assert!(tracker.current().is_none());
	}

	#[test]
	fn stale_timer_leaves_newer_tooltip() {
		let mut tracker = HoverTracker::default();
		let first = tracker.show(hovered("1"), InputModality::Touch);
		let second = tracker.show(hovered("2"), InputModality::Touch);

		assert!(!tracker.expire(first));
		assert_eq!(tracker.current().map(|s| s.node.id.as_str()), Some("2"));
		assert!(tracker.expire(second));
	}

	#[test]
	fn outside_interaction_dismisses() {
		let mut tracker = HoverTracker::default();
		tracker.show(hovered("1"), InputModality::Pointer);
		tracker.dismiss();
		assert!(tracker.current().is_none());
	}
}
