use std::sync::Arc;

use leptos::prelude::*;
use log::warn;

use crate::components::risk_graph::{
	GraphConfig, GraphStateStore, NodePopover, RiskGraphCanvas, SampleGraphProvider,
};

/// Risk dashboard: one store, the graph canvas and the selection popover.
#[component]
pub fn Home() -> impl IntoView {
	let config = GraphConfig::default();
	let store = GraphStateStore::new(Arc::new(SampleGraphProvider));
	let (is_loading, selected_node) = (store.is_loading(), store.selected_node());

	let reload = move || {
		if let Err(err) = store.load(config.load_latency) {
			warn!("Could not schedule graph load: {err}");
		}
	};
	reload();

	view! {
		<div class="dashboard">
			<header class="dashboard-header">
				<h1>"Threat Propagation"</h1>
				<p class="subtitle">"Hover or tap a node for a summary. Click it for affected assets."</p>
				<button
					class="reload"
					on:click=move |_| reload()
					disabled=move || is_loading.get()
				>
					"Reload"
				</button>
			</header>

			<Show when=move || is_loading.get()>
				<div class="loading">"Loading graph…"</div>
			</Show>

			<RiskGraphCanvas store=store config=config />

			<NodePopover
				selection=selected_node
				config=config.popover
				on_close=move |_| store.clear_selection()
			/>
		</div>
	}
}
