//! Paging over a node's assets and the risk ring chart of the visible page.

use std::f64::consts::PI;
use std::ops::Range;

use super::types::{Asset, NodeDetails, PopoverData, RiskLevel, RiskSummary};

/// 1-based page cursor over `item_count` items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
	page: usize,
	page_size: usize,
	item_count: usize,
}

impl Pagination {
	/// Cursor on page 1. A zero `page_size` is treated as 1.
	pub fn new(item_count: usize, page_size: usize) -> Self {
		Self {
			page: 1,
			page_size: page_size.max(1),
			item_count,
		}
	}

	/// Current page, starting at 1.
	pub fn page(&self) -> usize {
		self.page
	}

	/// `ceil(items / page_size)`.
	pub fn page_count(&self) -> usize {
		self.item_count.div_ceil(self.page_size)
	}

	/// Item indices on the current page.
	pub fn range(&self) -> Range<usize> {
		let start = ((self.page - 1) * self.page_size).min(self.item_count);
		let end = (start + self.page_size).min(self.item_count);
		start..end
	}

	/// The slice of `items` on the current page.
	pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
		items.get(self.range()).unwrap_or(&[])
	}

	/// Whether `next()` would move.
	pub fn has_next(&self) -> bool {
		self.page < self.page_count()
	}

	/// Whether `prev()` would move.
	pub fn has_prev(&self) -> bool {
		self.page > 1
	}

	/// Moves one page forward; no-op on the last page.
	pub fn next(&mut self) {
		if self.has_next() {
			self.page += 1;
		}
	}

	/// Moves one page back; no-op on page 1.
	pub fn prev(&mut self) {
		if self.has_prev() {
			self.page -= 1;
		}
	}
}

/// One stacked segment of the ring, in stroke-dash terms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingArc {
	/// Risk level this arc stands for.
	pub level: RiskLevel,
	/// Arc length along the circumference.
	pub length: f64,
	/// Negative cumulative length of the arcs drawn before this one.
	pub offset: f64,
	circumference: f64,
}

impl RingArc {
	/// Remainder of the circumference after this arc.
	pub fn gap(&self) -> f64 {
		self.circumference - self.length
	}

	/// SVG `stroke-dasharray` value: `"<length> <gap>"`.
	pub fn dash_array(&self) -> String {
		format!("{} {}", self.length, self.gap())
	}
}

/// Donut encoding of one page's risk counts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingChart {
	/// Ring radius in pixels.
	pub radius: f64,
	/// `2 * PI * radius`.
	pub circumference: f64,
	/// Critical, High, Medium, Low, in drawing order.
	pub arcs: [RingArc; 4],
}

impl RingChart {
	/// Turns counts into contiguous arcs starting at angle 0. A zero total
	/// gives four zero-length arcs.
	pub fn from_summary(summary: &RiskSummary, radius: f64) -> Self {
		let circumference = 2.0 * PI * radius;
		let total = summary.total();
		let mut drawn = 0.0;
		let arcs = RiskLevel::ALL.map(|level| {
			let length = if total == 0 {
				0.0
			} else {
				summary.count(level) as f64 / total as f64 * circumference
			};
			let arc = RingArc {
				level,
				length,
				offset: -drawn,
				circumference,
			};
			drawn += length;
			arc
		});
		Self {
			radius,
			circumference,
			arcs,
		}
	}
}

/// Everything the popover renders for one page.
#[derive(Clone, Debug, PartialEq)]
pub struct PageView {
	/// Assets on the page.
	pub assets: Vec<Asset>,
	/// Counts for the page only.
	pub summary: RiskSummary,
	/// Ring chart of `summary`.
	pub chart: RingChart,
	/// Current page, starting at 1.
	pub page: usize,
	/// Total number of pages.
	pub page_count: usize,
}

/// Slices out the current page of `details` and charts its risk counts.
pub fn aggregate(details: &NodeDetails, pagination: &Pagination, ring_radius: f64) -> PageView {
	let assets = pagination.visible(&details.assets);
	let summary = RiskSummary::tally(assets);
	PageView {
		assets: assets.to_vec(),
		summary,
		chart: RingChart::from_summary(&summary, ring_radius),
		page: pagination.page(),
		page_count: pagination.page_count(),
	}
}

/// Page cursor bound to the current selection.
///
/// Every `select` starts over on page 1, including re-selecting the node
/// already shown.
#[derive(Clone, Debug, PartialEq)]
pub struct PopoverAggregator {
	selection: Option<PopoverData>,
	pagination: Pagination,
	page_size: usize,
}

impl PopoverAggregator {
	/// Empty aggregator paging `page_size` assets at a time.
	pub fn new(page_size: usize) -> Self {
		Self {
			selection: None,
			pagination: Pagination::new(0, page_size),
			page_size,
		}
	}

	/// Replaces the selection and resets to page 1.
	pub fn select(&mut self, selection: Option<PopoverData>) {
		let assets = selection.as_ref().map_or(0, |d| d.details.assets.len());
		self.pagination = Pagination::new(assets, self.page_size);
		self.selection = selection;
	}

	/// The selection being paged, if any.
	pub fn selection(&self) -> Option<&PopoverData> {
		self.selection.as_ref()
	}

	/// Current page, starting at 1.
	pub fn page(&self) -> usize {
		self.pagination.page()
	}

	/// Number of pages; zero without a selection.
	pub fn page_count(&self) -> usize {
		if self.selection.is_none() {
			return 0;
		}
		self.pagination.page_count()
	}

	/// Assets on the current page.
	pub fn visible_page(&self) -> &[Asset] {
		self.selection
			.as_ref()
			.map_or(&[][..], |d| self.pagination.visible(&d.details.assets))
	}

	/// Whether `next()` would move.
	pub fn has_next(&self) -> bool {
		self.pagination.has_next()
	}

	/// Whether `prev()` would move.
	pub fn has_prev(&self) -> bool {
		self.pagination.has_prev()
	}

	/// Moves one page forward, clamped to the last page.
	pub fn next(&mut self) {
		self.pagination.next();
	}

	/// Moves one page back, clamped to page 1.
	pub fn prev(&mut self) {
		self.pagination.prev();
	}

	/// Page contents and ring chart, or `None` without a selection.
	pub fn page_view(&self, ring_radius: f64) -> Option<PageView> {
		self.selection
			.as_ref()
			.map(|d| aggregate(&d.details, &self.pagination, ring_radius))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::risk_graph::types::{GraphNode, NodeMetadata, NodeStatus, Point};

	const EPS: f64 = 1e-9;

	fn details(levels: &[RiskLevel]) -> NodeDetails {
		let assets: Vec<Asset> = levels
			.iter()
			.enumerate()
			.map(|(i, &risk_level)| Asset {
				id: i.to_string(),
				name: format!("asset-{i}"),
				ip_address: format!("10.0.0.{i}"),
				risk_level,
			})
			.collect();
		NodeDetails {
			title: "node".into(),
			description: String::new(),
			risk_summary: RiskSummary::tally(&assets),
			assets,
			metadata: NodeMetadata::default(),
		}
	}

	#[test]
	fn page_count_is_ceiling_of_half() {
		for n in 0..9 {
			assert_eq!(Pagination::new(n, 2).page_count(), n.div_ceil(2), "n = {n}");
		}
		assert_eq!(PopoverAggregator::new(2).page_count(), 0);
	}

	#[test]
	fn paging_is_clamped_at_both_ends() {
		let mut pages = Pagination::new(5, 2);
		pages.prev();
		assert_eq!(pages.page(), 1);
		pages.next();
		pages.next();
		assert_eq!(pages.page(), 3);
		pages.next();
		assert_eq!(pages.page(), 3);
		assert_eq!(pages.range(), 4..5);
	}

	#[test]
	fn empty_asset_list_has_no_pages() {
		let mut pages = Pagination::new(0, 2);
		pages.next();
		assert_eq!(pages.page(), 1);
		assert_eq!(pages.page_count(), 0);
		assert!(pages.visible::<Asset>(&[]).is_empty());
	}

	#[test]
	fn summary_is_scoped_to_the_visible_page() {
		let details = details(&[
			RiskLevel::Critical,
			RiskLevel::Critical,
			RiskLevel::Critical,
			RiskLevel::Low,
		]);
		let mut pages = Pagination::new(details.assets.len(), 2);
		let first = aggregate(&details, &pages, 50.0);
		assert_eq!(first.page_count, 2);
		assert_eq!(
			first.summary,
			RiskSummary {
				critical: 2,
				high: 0,
				medium: 0,
				low: 0
			}
		);

		pages.next();
		let second = aggregate(&details, &pages, 50.0);
		assert_eq!(
			second.summary,
			RiskSummary {
				critical: 1,
				high: 0,
				medium: 0,
				low: 1
			}
		);
		assert_eq!(second.assets.len(), 2);
	}

	#[test]
	fn arcs_fill_the_circumference() {
		let summary = RiskSummary {
			critical: 1,
			high: 2,
			medium: 0,
			low: 3,
		};
		let chart = RingChart::from_summary(&summary, 50.0);
		let total: f64 = chart.arcs.iter().map(|a| a.length).sum();
		assert!((total - chart.circumference).abs() < EPS);
		assert!((chart.circumference - 2.0 * PI * 50.0).abs() < EPS);
	}

	#[test]
	fn arcs_stack_contiguously_from_zero() {
		let summary = RiskSummary {
			critical: 1,
			high: 1,
			medium: 1,
			low: 1,
		};
		let chart = RingChart::from_summary(&summary, 50.0);
		let quarter = chart.circumference / 4.0;
		assert_eq!(chart.arcs[0].level, RiskLevel::Critical);
		assert_eq!(chart.arcs[0].offset, 0.0);
		for (i, arc) in chart.arcs.iter().enumerate() {
			assert!((arc.offset + quarter * i as f64).abs() < EPS);
		}
	}

	#[test]
	fn empty_page_draws_zero_arcs() {
		let chart = RingChart::from_summary(&RiskSummary::default(), 50.0);
		for arc in chart.arcs {
			assert_eq!(arc.length, 0.0);
			assert_eq!(arc.offset, 0.0);
			assert_eq!(arc.gap(), chart.circumference);
			assert_eq!(arc.dash_array(), format!("0 {}", chart.circumference));
		}
	}

	fn selection(id: &str, levels: &[RiskLevel]) -> PopoverData {
		PopoverData {
			node: GraphNode {
				id: id.into(),
				label: format!("Node {id}"),
				sublabel: None,
				value: 0.0,
				color: None,
				icon: None,
				badge: None,
				status: NodeStatus::Info,
			},
			details: details(levels),
			position: Point::ORIGIN,
		}
	}

	#[test]
	fn new_selection_starts_on_first_page() {
		let levels = [RiskLevel::High; 5];
		let mut popover = PopoverAggregator::new(2);
		popover.select(Some(selection("a", &levels)));
		popover.next();
		assert_eq!(popover.page(), 2);

		popover.select(Some(selection("b", &levels)));
		assert_eq!(popover.page(), 1);
		assert_eq!(popover.selection().map(|d| d.node.id.as_str()), Some("b"));
	}

	#[test]
	fn reselecting_same_node_starts_on_first_page() {
		let levels = [RiskLevel::Low; 4];
		let mut popover = PopoverAggregator::new(2);
		popover.select(Some(selection("a", &levels)));
		popover.next();
		assert_eq!(popover.page(), 2);

		popover.select(Some(selection("a", &levels)));
		assert_eq!(popover.page(), 1);
	}

	#[test]
	fn aggregator_pages_visible_assets_and_clamps() {
		let mut popover = PopoverAggregator::new(2);
		popover.select(Some(selection(
			"a",
			&[RiskLevel::Critical, RiskLevel::Critical, RiskLevel::Critical, RiskLevel::Low],
		)));
		assert_eq!(popover.page_count(), 2);
		popover.prev();
		assert_eq!(popover.page(), 1);
		popover.next();
		popover.next();
		assert_eq!(popover.page(), 2);
		assert_eq!(popover.visible_page().len(), 2);
		let page = popover.page_view(50.0).expect("page view");
		assert_eq!(page.summary.critical, 1);
		assert_eq!(page.summary.low, 1);
	}

	#[test]
	fn deselecting_clears_pages() {
		let mut popover = PopoverAggregator::new(2);
		popover.select(Some(selection("a", &[RiskLevel::Medium; 3])));
		popover.next();
		popover.select(None);
		assert_eq!(popover.page(), 1);
		assert_eq!(popover.page_count(), 0);
		assert!(popover.visible_page().is_empty());
		assert!(popover.page_view(50.0).is_none());
	}
}
