//! Reusable views.

pub mod risk_graph;
