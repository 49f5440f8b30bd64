//! kandil-core
//!
//! Summary analytics and chart projections for daily OHLCV series.
//!
//! - `timeseries`: chronological normalization, the single dependency of
//!   everything downstream.
//! - `metrics`: the six summary analytics over a retrieved window.
//! - `projection`: chart-ready price/volume panels with axis-formatting
//!   metadata attached as data, not rendered pixels.
//!
//! Every entry point is a pure synchronous function of its arguments: no
//! I/O, no shared state, no logging on the default build. Error conditions
//! surface as explicit result states for the caller to render; nothing in
//! this crate panics on malformed market data.
#![warn(missing_docs)]

mod error;
/// The six summary analytics over a normalized window.
pub mod metrics;
/// Chart-ready panel construction and axis-label formatting.
pub mod projection;
/// Series ordering utilities.
pub mod timeseries;
pub mod types;

pub use error::KandilError;
pub use metrics::{SummaryMetrics, compute};
pub use projection::{
    ChartPanels, ChartProjection, PricePanel, PriceSeries, SeriesDraw, VolumePanel, VolumeSeries,
    date_label, project, volume_tick_label,
};
pub use timeseries::normalize;
pub use types::*;
