//! The six summary analytics over a retrieved OHLCV window.

use kandil_types::OhlcvBar;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::KandilError;
use crate::timeseries::normalize;

/// Summary analytics for one instrument over one retrieved window.
///
/// Percent and volatility fields are rounded to 2 decimal places, half away
/// from zero. Currency fields are raw decimals; display formatting is the
/// caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    /// Close of the latest bar in the window.
    pub current_price: Decimal,
    /// Latest close minus earliest close.
    pub price_change: Decimal,
    /// Price change as a percent of the earliest close, 2 dp.
    ///
    /// `None` when the earliest close is zero (the zero-baseline sentinel;
    /// serializes as `null`), never an infinity.
    pub price_change_percent: Option<Decimal>,
    /// Maximum high across the window.
    pub window_high: Decimal,
    /// Minimum low across the window.
    pub window_low: Decimal,
    /// Mean volume, rounded half up to the nearest share.
    pub average_volume: u64,
    /// Standard deviation of day-over-day percent returns, 2 dp.
    ///
    /// Zero for a single-bar window, where no return exists.
    pub volatility_percent: Decimal,
    /// Whether the window change is a gain; zero change counts as positive.
    /// Display-sign only, carried for the caller's convenience.
    pub is_positive: bool,
}

/// Round to 2 decimal places, half away from zero.
fn round2(v: Decimal) -> Decimal {
    v.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Compute the summary analytics for `bars`.
///
/// The input may arrive in any order; it is normalized internally, so the
/// result is invariant under permutation of the input. Single-bar windows
/// use the defined fallbacks (zero change, zero volatility) rather than
/// producing undefined math.
///
/// # Errors
/// Returns [`KandilError::EmptySeries`] when `bars` is empty.
pub fn compute(bars: &[OhlcvBar]) -> Result<SummaryMetrics, KandilError> {
    #[cfg(feature = "tracing")]
    tracing::debug!(bars = bars.len(), "computing summary metrics");

    let bars = normalize(bars);
    let (Some(first), Some(last)) = (bars.first(), bars.last()) else {
        return Err(KandilError::EmptySeries);
    };

    let current_price = last.close;
    let previous_price = first.close;
    let price_change = current_price - previous_price;
    let price_change_percent = if previous_price.is_zero() {
        None
    } else {
        Some(round2(price_change / previous_price * Decimal::ONE_HUNDRED))
    };

    let mut window_high = first.high;
    let mut window_low = first.low;
    let mut volume_sum: u128 = 0;
    for b in &bars {
        if b.high > window_high {
            window_high = b.high;
        }
        if b.low < window_low {
            window_low = b.low;
        }
        volume_sum += u128::from(b.volume);
    }

    // Round half up; the mean of u64 values fits back into u64.
    let n = bars.len() as u128;
    let average_volume = u64::try_from((volume_sum + n / 2) / n).unwrap_or(u64::MAX);

    Ok(SummaryMetrics {
        current_price,
        price_change,
        price_change_percent,
        window_high,
        window_low,
        average_volume,
        volatility_percent: volatility(&bars),
        is_positive: price_change >= Decimal::ZERO,
    })
}

/// Standard deviation of day-over-day percent returns, 2 dp.
///
/// Returns with a zero-close baseline are skipped (the division is
/// undefined); a window with no usable return yields zero.
fn volatility(bars: &[OhlcvBar]) -> Decimal {
    let mut returns = Vec::with_capacity(bars.len().saturating_sub(1));
    for pair in bars.windows(2) {
        let prev = pair[0].close;
        if prev.is_zero() {
            continue;
        }
        returns.push((pair[1].close - prev) / prev * Decimal::ONE_HUNDRED);
    }
    if returns.is_empty() {
        return Decimal::ZERO;
    }

    let n = Decimal::from(returns.len());
    let mean = returns.iter().sum::<Decimal>() / n;
    let variance = returns
        .iter()
        .map(|r| {
            let dev = *r - mean;
            dev * dev
        })
        .sum::<Decimal>()
        / n;
    round2(variance.sqrt().unwrap_or_default())
}
