//! The daily OHLCV bar, the unit of every Kandil series.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One trading day of price and volume activity for a single instrument.
///
/// Prices are currency amounts carried as [`Decimal`] so 2-decimal values
/// survive round-trips exactly; `Decimal` also rules out NaN and infinity,
/// which the downstream analytics rely on. A well-formed bar satisfies
/// `low <= {open, close} <= high`, but the core does not enforce this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OhlcvBar {
    /// Calendar date of the bar. No time-of-day semantics.
    pub date: NaiveDate,
    /// Opening price.
    pub open: Decimal,
    /// Highest traded price of the day.
    pub high: Decimal,
    /// Lowest traded price of the day.
    pub low: Decimal,
    /// Closing price.
    pub close: Decimal,
    /// Shares traded.
    pub volume: u64,
}

impl OhlcvBar {
    /// Build a bar from its parts.
    #[must_use]
    pub const fn new(
        date: NaiveDate,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: u64,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}
