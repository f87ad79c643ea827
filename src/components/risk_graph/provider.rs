//! Where graph snapshots come from.

use super::types::{
	Asset, GraphData, GraphEdge, GraphNode, NodeDetails, NodeMetadata, NodeStatus, RiskLevel,
	RiskSummary, TooltipBadge, TooltipContent,
};

/// Source of graph snapshots and per-node records.
///
/// Implementations hand back complete values; the store never sees a
/// partially built graph.
pub trait GraphDataProvider: Send + Sync {
	/// The whole graph.
	fn graph_data(&self) -> GraphData;
	/// Popover record for `node`.
	fn node_details(&self, node: &GraphNode) -> NodeDetails;
	/// Tooltip body for `node`.
	fn tooltip(&self, node: &GraphNode) -> TooltipContent;
}

/// Fixed demo graph: an email flowing through two servers into a hub that
/// fans out to two branch servers.
#[derive(Clone, Copy, Debug, Default)]
pub struct SampleGraphProvider;

fn node(id: &str, label: &str, sublabel: &str, value: f64, icon: &str, status: NodeStatus) -> GraphNode {
	GraphNode {
		id: id.into(),
		label: label.into(),
		sublabel: Some(sublabel.into()),
		value,
		color: None,
		icon: Some(icon.into()),
		badge: None,
		status,
	}
}

fn edge(source: &str, target: &str, animated: bool) -> GraphEdge {
	GraphEdge {
		source: source.into(),
		target: target.into(),
		value: None,
		animated,
	}
}

fn asset(id: usize, name: &str, ip: &str, risk_level: RiskLevel) -> Asset {
	Asset {
		id: format!("asset-{id}"),
		name: name.into(),
		ip_address: ip.into(),
		risk_level,
	}
}

impl GraphDataProvider for SampleGraphProvider {
	fn graph_data(&self) -> GraphData {
		let mut nodes = vec![
			node("1", "Phishing Email", "Inbound", 100.0, "email", NodeStatus::Warning),
			node("2", "Mail Gateway", "Relay", 200.0, "server", NodeStatus::Info),
			node("3", "Core Server", "Hub", 150.0, "server", NodeStatus::Critical),
			node("4", "Branch A", "Branch server", 300.0, "branch-server", NodeStatus::Critical),
			node("5", "Branch B", "Branch server", 120.0, "branch-server", NodeStatus::Success),
		];
		nodes[2].badge = Some(4);
		GraphData {
			nodes,
			edges: vec![
				edge("1", "2", true),
				edge("2", "3", false),
				edge("3", "4", false),
				edge("3", "5", false),
			],
		}
	}

	fn node_details(&self, node: &GraphNode) -> NodeDetails {
		let assets = match node.id.as_str() {
			"3" => vec![
				asset(1, "db-primary", "10.0.1.10", RiskLevel::Critical),
				asset(2, "db-replica", "10.0.1.11", RiskLevel::Critical),
				asset(3, "app-server", "10.0.1.20", RiskLevel::Critical),
				asset(4, "backup-store", "10.0.1.30", RiskLevel::Low),
			],
			"4" => vec![
				asset(5, "branch-a-fs", "10.1.0.5", RiskLevel::High),
				asset(6, "branch-a-print", "10.1.0.6", RiskLevel::Medium),
				asset(7, "branch-a-pos", "10.1.0.7", RiskLevel::High),
			],
			"5" => vec![asset(8, "branch-b-fs", "10.2.0.5", RiskLevel::Low)],
			"2" => vec![
				asset(9, "mx-1", "192.168.0.25", RiskLevel::Medium),
				asset(10, "mx-2", "192.168.0.26", RiskLevel::Low),
			],
			_ => Vec::new(),
		};
		NodeDetails {
			title: node.label.clone(),
			description: format!("Assets reachable from {}.", node.label),
			risk_summary: RiskSummary::tally(&assets),
			assets,
			metadata: NodeMetadata {
				date: "2025-01-15".into(),
				kind: node.icon.clone().unwrap_or_default(),
				status: "Active".into(),
				verified: node.status != NodeStatus::Critical,
			},
		}
	}

	fn tooltip(&self, node: &GraphNode) -> TooltipContent {
		match node.icon.as_deref() {
			Some("email") => TooltipContent::Email {
				title: node.label.clone(),
				document_title: "Invoice_2025.pdf".into(),
				content_lines: vec![
					"From: billing@example.net".into(),
					"Attachment flagged by sandbox".into(),
				],
			},
			Some("branch-server") => TooltipContent::BranchServer {
				server_name: node.label.clone(),
				ip_address: format!("10.{}.0.1", node.id),
				badges: vec![TooltipBadge {
					color: node.fill_color().into(),
					text: format!("{:?}", node.status),
				}],
			},
			_ => TooltipContent::Server {
				server_name: node.label.clone(),
				ip_address: format!("192.168.0.{}", node.id),
				grid_numbers: vec!["22".into(), "80".into(), "443".into()],
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn sample_edges_reference_existing_nodes() {
		let data = SampleGraphProvider.graph_data();
		let ids: HashSet<_> = data.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(data.nodes.len(), 5);
		for edge in &data.edges {
			assert!(ids.contains(edge.source.as_str()));
			assert!(ids.contains(edge.target.as_str()));
		}
		assert!(data.edges[0].animated);
	}

	#[test]
	fn details_summary_covers_all_assets() {
		let provider = SampleGraphProvider;
		for node in provider.graph_data().nodes {
			let details = provider.node_details(&node);
			assert_eq!(details.risk_summary.total(), details.assets.len());
		}
	}

	#[test]
	fn tooltip_variant_follows_icon() {
		let provider = SampleGraphProvider;
		let nodes = provider.graph_data().nodes;
		assert!(matches!(provider.tooltip(&nodes[0]), TooltipContent::Email { .. }));
		assert!(matches!(provider.tooltip(&nodes[2]), TooltipContent::Server { .. }));
		assert!(matches!(
			provider.tooltip(&nodes[4]),
			TooltipContent::BranchServer { .. }
		));
	}
}
