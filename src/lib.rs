//! line-graph-rs: an embeddable line-graph widget renderer.
//!
//! The crate turns a bounded window of `(label, value)` points into an ordered,
//! backend-agnostic list of draw commands (grid lines, markers, segments and
//! labels), and ships a headless renderer plus optional Cairo/GTK4 backends.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{LineGraph, LineGraphConfig, build_line_graph_frame, compact_value};
pub use error::{ChartError, ChartResult};
