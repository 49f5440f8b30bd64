//! Static catalog mapping lookback windows (in days) to display labels.

use serde::Serialize;

/// Short and long display labels for a lookback window.
///
/// Output-only: labels flow toward the presentation shell, never back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeLabels {
    /// Compact label for pickers, e.g. `"3M"`.
    pub short: &'static str,
    /// Full label for titles, e.g. `"3 Months"`.
    pub long: &'static str,
}

/// The window sizes carrying catalog entries, ascending.
pub const CATALOGED_WINDOWS: [u32; 8] = [7, 30, 90, 180, 365, 730, 1095, 1825];

/// Look up the display labels for a window size in days.
///
/// Any uncataloged value falls back to the 30-day entry in both slots.
/// The fallback is load-bearing: titles for ad-hoc windows read "1 Month"
/// on purpose, matching the existing display contract.
#[must_use]
pub const fn range_labels(days: u32) -> RangeLabels {
    match days {
        7 => RangeLabels {
            short: "1W",
            long: "1 Week",
        },
        90 => RangeLabels {
            short: "3M",
            long: "3 Months",
        },
        180 => RangeLabels {
            short: "6M",
            long: "6 Months",
        },
        365 => RangeLabels {
            short: "1Y",
            long: "1 Year",
        },
        730 => RangeLabels {
            short: "2Y",
            long: "2 Years",
        },
        1095 => RangeLabels {
            short: "3Y",
            long: "3 Years",
        },
        1825 => RangeLabels {
            short: "5Y",
            long: "5 Years",
        },
        _ => RangeLabels {
            short: "1M",
            long: "1 Month",
        },
    }
}
