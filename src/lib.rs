//! price-chart: interactive price/volume chart renderer.
//!
//! The engine maps an ascending `(timestamp, price, volume)` series onto an
//! owned drawing surface in two phases: a static frame (area, line, volume
//! bars, reference line, time axis) rebuilt on every data or size change, and
//! a crosshair/tooltip overlay replaced on every pointer move.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartEngine, ChartEngineConfig, RenderOutcome, SkipReason};
pub use error::{ChartError, ChartResult};
