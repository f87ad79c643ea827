//! Risk propagation graph: state store, layout, edge routing, tooltip
//! placement and popover aggregation, plus the Leptos views that draw them.

mod component;
pub mod config;
pub mod error;
pub mod hover;
pub mod layout;
mod node_popover;
pub mod popover;
pub mod provider;
mod render;
pub mod routing;
pub mod store;
mod tooltip;
pub mod types;

pub use component::RiskGraphCanvas;
pub use config::GraphConfig;
pub use node_popover::NodePopover;
pub use provider::{GraphDataProvider, SampleGraphProvider};
pub use store::GraphStateStore;
