//! Data model shared by the store, the geometry passes and the overlays.

/// A point in canvas pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal, growing right.
	pub x: f64,
	/// Vertical, growing down.
	pub y: f64,
}

impl Point {
	/// `(0, 0)`, the fallback position for unknown node ids.
	pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

	/// Point at `(x, y)`.
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Moves `distance` along `angle` (radians).
	pub fn along(self, angle: f64, distance: f64) -> Self {
		Self {
			x: self.x + angle.cos() * distance,
			y: self.y + angle.sin() * distance,
		}
	}
}

/// Severity shown by a node's default fill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeStatus {
	/// Red.
	Critical,
	/// Amber.
	Warning,
	/// Green.
	Success,
	/// Blue.
	#[default]
	Info,
}

impl NodeStatus {
	/// Fill colour used when the node has none of its own.
	pub fn color(self) -> &'static str {
		match self {
			NodeStatus::Critical => "#EF4444",
			NodeStatus::Warning => "#F59E0B",
			NodeStatus::Success => "#10B981",
			NodeStatus::Info => "#3B82F6",
		}
	}
}

/// A diagram vertex as supplied by the data provider.
///
/// Nodes carry no coordinates. Positions only exist on
/// [`PositionedNode`](super::layout::PositionedNode), which the layout pass
/// produces.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	/// Unique within a snapshot; edges refer to nodes by it.
	pub id: String,
	/// Text under the node.
	pub label: String,
	/// Second line under the label.
	pub sublabel: Option<String>,
	/// Provider-defined weight. Not used for geometry.
	pub value: f64,
	/// CSS colour overriding the status colour.
	pub color: Option<String>,
	/// Node kind, e.g. `"email"` or `"server"`. Selects the tooltip variant.
	pub icon: Option<String>,
	/// Count drawn in a small circle on the rim.
	pub badge: Option<u32>,
	/// Severity, used when `color` is unset.
	pub status: NodeStatus,
}

impl GraphNode {
	/// `color` if set, otherwise the status colour.
	pub fn fill_color(&self) -> &str {
		self.color.as_deref().unwrap_or_else(|| self.status.color())
	}
}

/// Directed link between two node ids.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphEdge {
	/// Id of the node the arrow leaves.
	pub source: String,
	/// Id of the node the arrow points at.
	pub target: String,
	/// Provider-defined weight.
	pub value: Option<f64>,
	/// Drawn dashed in the highlight colour.
	pub animated: bool,
}

/// A complete snapshot from the provider. Replaced wholesale on reload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	/// Nodes in slot order.
	pub nodes: Vec<GraphNode>,
	/// Edges between `nodes`.
	pub edges: Vec<GraphEdge>,
}

/// Ordered from most to least severe; ring-chart arcs stack in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
	/// Exploited or one step from it.
	Critical,
	/// Reachable from a compromised host.
	High,
	/// Exposed but not reachable.
	Medium,
	/// Informational.
	Low,
}

impl RiskLevel {
	/// Every level, most severe first.
	pub const ALL: [RiskLevel; 4] = [
		RiskLevel::Critical,
		RiskLevel::High,
		RiskLevel::Medium,
		RiskLevel::Low,
	];

	/// Display name.
	pub fn label(self) -> &'static str {
		match self {
			RiskLevel::Critical => "Critical",
			RiskLevel::High => "High",
			RiskLevel::Medium => "Medium",
			RiskLevel::Low => "Low",
		}
	}

	/// Legend and ring colour.
	pub fn color(self) -> &'static str {
		match self {
			RiskLevel::Critical => "#DC2626",
			RiskLevel::High => "#F97316",
			RiskLevel::Medium => "#FACC15",
			RiskLevel::Low => "#22C55E",
		}
	}
}

/// A machine affected through a node.
#[derive(Clone, Debug, PartialEq)]
pub struct Asset {
	/// Unique within the node's asset list.
	pub id: String,
	/// Host name.
	pub name: String,
	/// Dotted IPv4 address, kept as text.
	pub ip_address: String,
	/// Severity for this asset.
	pub risk_level: RiskLevel,
}

/// Counts of assets per risk level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RiskSummary {
	/// Assets at [`RiskLevel::Critical`].
	pub critical: usize,
	/// Assets at [`RiskLevel::High`].
	pub high: usize,
	/// Assets at [`RiskLevel::Medium`].
	pub medium: usize,
	/// Assets at [`RiskLevel::Low`].
	pub low: usize,
}

impl RiskSummary {
	/// Counts `assets` by level.
	pub fn tally<'a>(assets: impl IntoIterator<Item = &'a Asset>) -> Self {
		let mut summary = Self::default();
		for asset in assets {
			match asset.risk_level {
				RiskLevel::Critical => summary.critical += 1,
				RiskLevel::High => summary.high += 1,
				RiskLevel::Medium => summary.medium += 1,
				RiskLevel::Low => summary.low += 1,
			}
		}
		summary
	}

	/// Count for one level.
	pub fn count(&self, level: RiskLevel) -> usize {
		match level {
			RiskLevel::Critical => self.critical,
			RiskLevel::High => self.high,
			RiskLevel::Medium => self.medium,
			RiskLevel::Low => self.low,
		}
	}

	/// Sum over all levels.
	pub fn total(&self) -> usize {
		self.critical + self.high + self.medium + self.low
	}
}

/// Free-form facts shown in the popover header.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeMetadata {
	/// Detection date as displayed.
	pub date: String,
	/// Node kind as displayed, e.g. "Mail Server".
	pub kind: String,
	/// Incident status as displayed.
	pub status: String,
	/// Whether an analyst confirmed the finding.
	pub verified: bool,
}

/// Everything the popover shows about one node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeDetails {
	/// Popover heading.
	pub title: String,
	/// Paragraph under the heading.
	pub description: String,
	/// Affected assets, paged by the popover.
	pub assets: Vec<Asset>,
	/// Header facts.
	pub metadata: NodeMetadata,
	/// Whole-set counts, as opposed to the per-page counts of the popover.
	pub risk_summary: RiskSummary,
}

/// The single selection slot: node, its details and the click position.
#[derive(Clone, Debug, PartialEq)]
pub struct PopoverData {
	/// The selected node.
	pub node: GraphNode,
	/// Its details, fetched together with the selection.
	pub details: NodeDetails,
	/// Click position in client coordinates.
	pub position: Point,
}

/// Coloured pill in a branch-server tooltip.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipBadge {
	/// CSS background colour.
	pub color: String,
	/// Pill text.
	pub text: String,
}

/// Tooltip body, one variant per node kind.
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum TooltipContent {
	/// Phishing mail preview.
	Email {
		title: String,
		document_title: String,
		content_lines: Vec<String>,
	},
	/// Server with the grid cells it touches.
	Server {
		server_name: String,
		ip_address: String,
		grid_numbers: Vec<String>,
	},
	/// Branch server with status pills.
	BranchServer {
		server_name: String,
		ip_address: String,
		badges: Vec<TooltipBadge>,
	},
}

/// Transient tooltip state for one hover or touch interaction.
#[derive(Clone, Debug, PartialEq)]
pub struct HoveredNodeState {
	/// The hovered node.
	pub node: GraphNode,
	/// Tooltip body.
	pub content: TooltipContent,
	/// Tooltip anchor in container coordinates.
	pub position: Point,
}
