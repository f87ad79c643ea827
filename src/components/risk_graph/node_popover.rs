use leptos::prelude::*;

use super::config::PopoverConfig;
use super::popover::{PageView, PopoverAggregator};
use super::types::{PopoverData, RiskLevel};

/// Detail card for the selected node.
///
/// Stays mounted for the lifetime of the page. Each value pushed through
/// `selection` goes through [`PopoverAggregator::select`], which puts the
/// pager back on page 1; `None` hides the card.
#[component]
pub fn NodePopover(
	/// Current selection, usually [`GraphStateStore::selected_node`](super::store::GraphStateStore::selected_node).
	#[prop(into)]
	selection: Signal<Option<PopoverData>>,
	/// Page size and ring geometry.
	#[prop(optional)]
	config: PopoverConfig,
	/// Runs when the close button is pressed.
	#[prop(into)]
	on_close: Callback<()>,
) -> impl IntoView {
	let aggregator = RwSignal::new(PopoverAggregator::new(config.page_size));
	Effect::new(move |_| {
		let current = selection.get();
		aggregator.update(|a| a.select(current));
	});

	let shown = Memo::new(move |_| aggregator.with(|a| a.selection().cloned()));
	let page = Memo::new(move |_| aggregator.with(|a| a.page_view(config.ring_radius)));

	move || {
		shown
			.get()
			.map(|data| card(data, config, page, aggregator, on_close))
	}
}

fn card(
	data: PopoverData,
	config: PopoverConfig,
	page: Memo<Option<PageView>>,
	aggregator: RwSignal<PopoverAggregator>,
	on_close: Callback<()>,
) -> AnyView {
	let PopoverData {
		node,
		details,
		position,
	} = data;
	let metadata = details.metadata;
	let (title, description) = (details.title, details.description);
	let whole_set = details.risk_summary;

	let size = config.ring_radius * 2.0 + 24.0;
	let center = (size / 2.0).to_string();
	let radius = config.ring_radius.to_string();
	let style = format!(
		"position: fixed; left: {}px; top: {}px;",
		position.x, position.y
	);

	let arcs = {
		let (center, radius) = (center.clone(), radius.clone());
		move || {
			page.get()
				.map(|p| p.chart.arcs.to_vec())
				.unwrap_or_default()
				.into_iter()
				.map(|arc| {
					view! {
						<circle
							cx=center.clone()
							cy=center.clone()
							r=radius.clone()
							fill="none"
							stroke=arc.level.color()
							stroke-width="16"
							stroke-dasharray=arc.dash_array()
							stroke-dashoffset=arc.offset.to_string()
							transform=format!("rotate(-90 {center} {center})")
						/>
					}
				})
				.collect_view()
		}
	};

	view! {
		<div class="node-popover" style=style>
			<header class="popover-header">
				<div>
					<h3>{title}</h3>
					<p class="popover-node">{node.label.clone()}</p>
				</div>
				<button class="popover-close" on:click=move |_| on_close.run(())>
					"×"
				</button>
			</header>
			<p class="popover-description">{description}</p>
			<dl class="popover-metadata">
				<dt>"Date"</dt>
				<dd>{metadata.date}</dd>
				<dt>"Type"</dt>
				<dd>{metadata.kind}</dd>
				<dt>"Status"</dt>
				<dd>{metadata.status}</dd>
				<dt>"Verified"</dt>
				<dd>{if metadata.verified { "Yes" } else { "No" }}</dd>
			</dl>
			<p class="popover-total">
				{format!("{} assets at risk", whole_set.total())}
			</p>

			<div class="popover-body">
				<svg
					class="risk-ring"
					width=size.to_string()
					height=size.to_string()
					viewBox=format!("0 0 {size} {size}")
				>
					<circle
						cx=center.clone()
						cy=center.clone()
						r=radius.clone()
						fill="none"
						stroke="#1e293b"
						stroke-width="16"
					/>
					{arcs}
				</svg>

				<ul class="risk-legend">
					{move || {
						let summary = page.get().map(|p| p.summary).unwrap_or_default();
						RiskLevel::ALL
							.into_iter()
							.map(|level| {
								view! {
									<li>
										<span
											class="legend-swatch"
											style=format!("background-color: {};", level.color())
										/>
										{format!("{}: {}", level.label(), summary.count(level))}
									</li>
								}
							})
							.collect_view()
					}}
				</ul>
			</div>

			<table class="asset-table">
				<thead>
					<tr>
						<th>"Asset"</th>
						<th>"IP address"</th>
						<th>"Risk"</th>
					</tr>
				</thead>
				<tbody>
					{move || {
						page.get()
							.map(|p| p.assets)
							.unwrap_or_default()
							.into_iter()
							.map(|asset| {
								view! {
									<tr>
										<td>{asset.name}</td>
										<td>{asset.ip_address}</td>
										<td class=format!("risk-{}", asset.risk_level.label().to_lowercase())>
											{asset.risk_level.label()}
										</td>
									</tr>
								}
							})
							.collect_view()
					}}
				</tbody>
			</table>

			<footer class="popover-pager">
				<button
					on:click=move |_| aggregator.update(PopoverAggregator::prev)
					disabled=move || aggregator.with(|a| !a.has_prev())
				>
					"Prev"
				</button>
				<span>
					{move || {
						aggregator.with(|a| format!("Page {} of {}", a.page(), a.page_count()))
					}}
				</span>
				<button
					on:click=move |_| aggregator.update(PopoverAggregator::next)
					disabled=move || aggregator.with(|a| !a.has_next())
				>
					"Next"
				</button>
			</footer>
		</div>
	}
	.into_any()
}
