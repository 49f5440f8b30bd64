//! Chart vocabulary shared by the projector and the presentation shell.

use serde::{Deserialize, Serialize};

/// The supported chart renderings for the price panel.
///
/// `Candlestick` is a deliberate approximation: three overlaid line series
/// (high, low, close) rather than true candle bodies and wicks. Callers
/// depending on the output contract must not "fix" this into real candles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Single close-price line, not filled.
    #[default]
    Line,
    /// Single close-price line, filled under the curve.
    Area,
    /// Close price as discrete bars.
    Bar,
    /// High/low/close as three overlaid lines.
    Candlestick,
}

impl ChartKind {
    /// Human-readable label used in chart titles.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Line => "Line Chart",
            Self::Area => "Area Chart",
            Self::Bar => "Bar Chart",
            Self::Candlestick => "Candlestick Chart",
        }
    }

    /// Parse a kind from its lowercase wire name.
    ///
    /// Unknown names fall back to [`ChartKind::Line`]; the parse is total
    /// because the shell forwards user input verbatim.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "area" => Self::Area,
            "bar" => Self::Bar,
            "candlestick" => Self::Candlestick,
            _ => Self::Line,
        }
    }
}

impl From<&str> for ChartKind {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}
