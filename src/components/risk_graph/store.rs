//! Reactive graph state: the loaded snapshot, the loading flag and the
//! current selection.
//!
//! The store is `Copy` and is passed to each view that needs it. Every
//! mutation is a single signal write, so readers observe either the old or
//! the new value and never a half-built one.

use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;
use log::{debug, info, warn};

use super::error::SurfaceError;
use super::provider::GraphDataProvider;
use super::types::{GraphData, GraphNode, PopoverData, Point, TooltipContent};

/// Identifies one `load()` call. Only the latest ticket may install data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Process-local graph state shared by the canvas and the popover.
///
/// Holds one provider for the lifetime of the view; `load()` and
/// `select_node()` ask it for complete snapshots.
#[derive(Clone, Copy)]
pub struct GraphStateStore {
	graph_data: RwSignal<Option<GraphData>>,
	is_loading: RwSignal<bool>,
	selected_node: RwSignal<Option<PopoverData>>,
	latest_load: StoredValue<u64>,
	provider: StoredValue<Arc<dyn GraphDataProvider>>,
}

impl GraphStateStore {
	/// Empty store backed by `provider`. Call [`load`](Self::load) to fill it.
	pub fn new(provider: Arc<dyn GraphDataProvider>) -> Self {
		Self {
			graph_data: RwSignal::new(None),
			is_loading: RwSignal::new(false),
			selected_node: RwSignal::new(None),
			latest_load: StoredValue::new(0),
			provider: StoredValue::new(provider),
		}
	}

	/// Latest installed snapshot; `None` before the first load lands.
	pub fn graph_data(&self) -> ReadSignal<Option<GraphData>> {
		self.graph_data.read_only()
	}

	/// True while the newest `load()` has not landed.
	pub fn is_loading(&self) -> ReadSignal<bool> {
		self.is_loading.read_only()
	}

	/// The selection slot.
	pub fn selected_node(&self) -> ReadSignal<Option<PopoverData>> {
		self.selected_node.read_only()
	}

	/// Starts a reload and installs the provider's snapshot after `latency`.
	///
	/// Overlapping calls are allowed; only the most recent one lands.
	pub fn load(&self, latency: Duration) -> Result<(), SurfaceError> {
		let ticket = self.begin_load();
		info!("Loading graph data ({ticket:?})");
		let store = *self;
		set_timeout_with_handle(
			move || {
				let Some(data) = store.provider.try_with_value(|p| p.graph_data()) else {
					return;
				};
				store.finish_load(ticket, data);
			},
			latency,
		)
		.map(|_| ())
		.map_err(SurfaceError::timer)
	}

	/// Marks the store as loading and issues the newest ticket.
	pub fn begin_load(&self) -> LoadTicket {
		self.latest_load.update_value(|generation| *generation += 1);
		self.is_loading.set(true);
		LoadTicket(self.latest_load.get_value())
	}

	/// Installs `data` if `ticket` is still the latest load. Returns whether
	/// the snapshot was installed.
	pub fn finish_load(&self, ticket: LoadTicket, data: GraphData) -> bool {
		if self.latest_load.try_get_value() != Some(ticket.0) {
			warn!("Discarding stale graph load {ticket:?}");
			return false;
		}
		info!(
			"Graph data loaded: {} nodes, {} edges",
			data.nodes.len(),
			data.edges.len()
		);
		self.graph_data.set(Some(data));
		self.is_loading.set(false);
		true
	}

	/// Replaces the selection slot with `node`, its details and `position`.
	pub fn select_node(&self, node: GraphNode, position: Point) {
		let Some(details) = self.provider.try_with_value(|p| p.node_details(&node)) else {
			return;
		};
		debug!("Selected node {}", node.id);
		self.selected_node.set(Some(PopoverData {
			node,
			details,
			position,
		}));
	}

	/// Empties the selection slot.
	pub fn clear_selection(&self) {
		self.selected_node.set(None);
	}

	/// Tooltip body for `node`, from the provider.
	pub fn tooltip(&self, node: &GraphNode) -> Option<TooltipContent> {
		self.provider.try_with_value(|p| p.tooltip(node))
	}
}
