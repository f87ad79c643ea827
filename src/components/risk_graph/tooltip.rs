use leptos::prelude::*;

use super::types::{HoveredNodeState, TooltipContent};

fn content_view(content: TooltipContent) -> AnyView {
	match content {
		TooltipContent::Email {
			title,
			document_title,
			content_lines,
		} => view! {
			<div class="tooltip-email">
				<h4>{title}</h4>
				<p class="tooltip-document">{document_title}</p>
				{content_lines
					.into_iter()
					.map(|line| view! { <p class="tooltip-line">{line}</p> })
					.collect_view()}
			</div>
		}
		.into_any(),
		TooltipContent::Server {
			server_name,
			ip_address,
			grid_numbers,
		} => view! {
			<div class="tooltip-server">
				<h4>{server_name}</h4>
				<p class="tooltip-ip">{ip_address}</p>
				<div class="tooltip-grid">
					{grid_numbers
						.into_iter()
						.map(|n| view! { <span class="tooltip-cell">{n}</span> })
						.collect_view()}
				</div>
			</div>
		}
		.into_any(),
		TooltipContent::BranchServer {
			server_name,
			ip_address,
			badges,
		} => view! {
			<div class="tooltip-branch-server">
				<h4>{server_name}</h4>
				<p class="tooltip-ip">{ip_address}</p>
				<div class="tooltip-badges">
					{badges
						.into_iter()
						.map(|badge| {
							view! {
								<span
									class="tooltip-badge"
									style=format!("background-color: {};", badge.color)
								>
									{badge.text}
								</span>
							}
						})
						.collect_view()}
				</div>
			</div>
		}
		.into_any(),
	}
}

/// Floating tooltip anchored at the hovered node's computed position.
#[component]
pub fn NodeTooltip(#[prop(into)] hovered: Signal<Option<HoveredNodeState>>) -> impl IntoView {
	move || {
		hovered.get().map(|state| {
			let style = format!(
				"position: absolute; left: {}px; top: {}px; pointer-events: none;",
				state.position.x, state.position.y
			);
			view! {
				<div class="node-tooltip" style=style>
					{content_view(state.content)}
				</div>
			}
		})
	}
}
