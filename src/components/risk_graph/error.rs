//! Errors raised by the browser surface.

use thiserror::Error;

/// Failures of the browser surface the graph draws on.
///
/// None of these abort the view; they are logged and the previous frame
/// stays on screen.
#[derive(Debug, Error)]
pub enum SurfaceError {
	/// `web_sys::window()` returned nothing.
	#[error("no browser window available")]
	NoWindow,
	/// `getContext("2d")` failed or returned something else.
	#[error("canvas 2d context unavailable: {0}")]
	Context(String),
	/// A timer could not be registered.
	#[error("timer registration failed: {0}")]
	Timer(String),
	/// Any other DOM or canvas call threw.
	#[error("browser call failed: {0}")]
	Js(String),
}

impl SurfaceError {
	pub(crate) fn context(err: wasm_bindgen::JsValue) -> Self {
		Self::Context(format!("{err:?}"))
	}

	pub(crate) fn timer(err: wasm_bindgen::JsValue) -> Self {
		Self::Timer(format!("{err:?}"))
	}

	pub(crate) fn js(err: wasm_bindgen::JsValue) -> Self {
		Self::Js(format!("{err:?}"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn draw_failures_are_not_reported_as_context_errors() {
		let err = SurfaceError::Js("InvalidStateError".into());
		assert_eq!(err.to_string(), "browser call failed: InvalidStateError");
		assert!(!err.to_string().contains("context"));
	}

	#[test]
	fn context_errors_name_the_context() {
		let err = SurfaceError::Context("2d context not supported".into());
		assert_eq!(
			err.to_string(),
			"canvas 2d context unavailable: 2d context not supported"
		);
	}
}
