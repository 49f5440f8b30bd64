//! Chart-ready projections of an OHLCV window.
//!
//! The projector turns a series into plain derived data: ordered date
//! labels, named numeric series for the price panel, one volume series, and
//! the axis-formatting contracts (`date_label`, `volume_tick_label`) the
//! shell applies when rendering. Nothing here draws pixels or owns UI state.

use chrono::NaiveDate;
use kandil_types::{ChartKind, Company, OhlcvBar, range_labels};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::timeseries::normalize;

/// How the shell should draw a price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesDraw {
    /// A connected line, optionally filled under the curve.
    Line {
        /// Fill the area between the line and the axis.
        filled: bool,
    },
    /// Discrete per-date bars.
    Bar,
}

/// One named numeric series for the price panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSeries {
    /// Legend label, e.g. `"Close Price"`.
    pub name: String,
    /// Values aligned 1:1 with the shared date labels.
    pub values: Vec<Decimal>,
    /// Draw metadata for the shell.
    pub draw: SeriesDraw,
}

/// The price panel: title plus one or more series over the shared labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePanel {
    /// Title text, e.g. `"AAPL - Line Chart (1 Month)"`.
    pub title: String,
    /// The series to overlay, in draw order.
    pub series: Vec<PriceSeries>,
}

/// The single volume series accompanying every chart kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeSeries {
    /// Legend label, always `"Volume"`.
    pub name: String,
    /// Share counts aligned 1:1 with the shared date labels.
    pub values: Vec<u64>,
}

/// The volume panel: title plus exactly one bar series.
///
/// Axis ticks follow the [`volume_tick_label`] scaling contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumePanel {
    /// Title text, e.g. `"AAPL Trading Volume (1 Month)"`.
    pub title: String,
    /// The volume bars.
    pub series: VolumeSeries,
}

/// Both panels plus the shared chronological date labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPanels {
    /// Dates of the window, ascending, formatted with [`date_label`].
    pub labels: Vec<String>,
    /// The price panel for the requested chart kind.
    pub price: PricePanel,
    /// The companion volume panel, independent of chart kind.
    pub volume: VolumePanel,
}

/// Result of projecting a window: panels, or an explicit no-data marker.
///
/// No-data is a defined result, not a failure; the shell renders a
/// placeholder mentioning the symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartProjection {
    /// The window held no bars.
    NoData {
        /// Symbol the placeholder should mention.
        symbol: String,
    },
    /// Chart-ready panels.
    Ready(ChartPanels),
}

impl ChartProjection {
    /// Whether this projection is the no-data marker.
    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData { .. })
    }

    /// The panels, when data was available.
    #[must_use]
    pub const fn panels(&self) -> Option<&ChartPanels> {
        match self {
            Self::Ready(panels) => Some(panels),
            Self::NoData { .. } => None,
        }
    }
}

/// Format a date label the way the shell's axis expects: US short form,
/// `M/D/YYYY`, no zero padding.
#[must_use]
pub fn date_label(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Scale a raw volume value into a human tick label.
///
/// Millions get one decimal and an `M` suffix, thousands one decimal and a
/// `K` suffix, anything smaller is printed unscaled. The exact strings are
/// a compatibility contract with existing visual tests.
#[must_use]
pub fn volume_tick_label(v: u64) -> String {
    if v >= 1_000_000 {
        format!("{:.1}M", v as f64 / 1_000_000.0)
    } else if v >= 1_000 {
        format!("{:.1}K", v as f64 / 1_000.0)
    } else {
        v.to_string()
    }
}

/// Project a window into chart-ready panels for the requested kind.
///
/// The input may arrive in any order; it is normalized internally, and the
/// projection is a pure function of `(bars, kind, window_days)` plus the
/// company symbol used in titles. An empty input yields
/// [`ChartProjection::NoData`].
///
/// The candlestick kind produces three overlaid line series (high, low,
/// close) by design; it is an approximation, not true OHLC candles.
#[must_use]
pub fn project(
    bars: &[OhlcvBar],
    company: &Company,
    kind: ChartKind,
    window_days: u32,
) -> ChartProjection {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        symbol = %company.symbol,
        bars = bars.len(),
        ?kind,
        window_days,
        "projecting chart panels"
    );

    if bars.is_empty() {
        return ChartProjection::NoData {
            symbol: company.symbol.clone(),
        };
    }

    let bars = normalize(bars);
    let labels: Vec<String> = bars.iter().map(|b| date_label(b.date)).collect();
    let range = range_labels(window_days);

    let closes = |draw: SeriesDraw| PriceSeries {
        name: "Close Price".to_string(),
        values: bars.iter().map(|b| b.close).collect(),
        draw,
    };

    let series = match kind {
        ChartKind::Line => vec![closes(SeriesDraw::Line { filled: false })],
        ChartKind::Area => vec![closes(SeriesDraw::Line { filled: true })],
        ChartKind::Bar => vec![closes(SeriesDraw::Bar)],
        ChartKind::Candlestick => vec![
            PriceSeries {
                name: "High".to_string(),
                values: bars.iter().map(|b| b.high).collect(),
                draw: SeriesDraw::Line { filled: false },
            },
            PriceSeries {
                name: "Low".to_string(),
                values: bars.iter().map(|b| b.low).collect(),
                draw: SeriesDraw::Line { filled: false },
            },
            PriceSeries {
                name: "Close".to_string(),
                values: bars.iter().map(|b| b.close).collect(),
                draw: SeriesDraw::Line { filled: false },
            },
        ],
    };

    let price = PricePanel {
        title: format!("{} - {} ({})", company.symbol, kind.label(), range.long),
        series,
    };
    let volume = VolumePanel {
        title: format!("{} Trading Volume ({})", company.symbol, range.long),
        series: VolumeSeries {
            name: "Volume".to_string(),
            values: bars.iter().map(|b| b.volume).collect(),
        },
    };

    ChartProjection::Ready(ChartPanels {
        labels,
        price,
        volume,
    })
}
