//! Risk propagation dashboard for the browser.
//!
//! [`App`] serves one page hosting the
//! [`RiskGraphCanvas`](components::risk_graph::RiskGraphCanvas) and its
//! selection popover. Everything under [`components::risk_graph`] apart from
//! the views is plain Rust and is exercised by native tests.

use leptos::prelude::*;
use leptos_meta::{Html, Meta, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use log::{Level, info};

pub mod components;
mod pages;

use pages::home::Home;
use pages::not_found::NotFound;

/// Console verbosity: everything in debug builds, `Info` and up in release.
pub fn log_level() -> Level {
	if cfg!(debug_assertions) {
		Level::Debug
	} else {
		Level::Info
	}
}

/// Routes `log` output to the browser console and installs the panic hook.
///
/// Calling it twice is harmless; the second logger registration is ignored.
pub fn init_logging() {
	console_error_panic_hook::set_once();
	let level = log_level();
	if console_log::init_with_level(level).is_ok() {
		info!("Console logging at {level}");
	}
}

/// Dashboard shell: document metadata and the route table.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:data-theme="dark" />
		<Title text="Risk Graph" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta
			name="description"
			content="How a phishing mail spreads through servers, and which assets are at risk."
		/>

		<Router>
			<main class="risk-dashboard">
				<Routes fallback=NotFound>
					<Route path=path!("/") view=Home />
				</Routes>
			</main>
		</Router>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn debug_builds_log_at_debug() {
		assert_eq!(log_level() == Level::Debug, cfg!(debug_assertions));
		assert!(log_level() >= Level::Info);
	}
}
