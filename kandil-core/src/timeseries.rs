//! Chronological normalization of OHLCV series.
//!
//! Everything downstream (metrics, projection) consumes a series in
//! ascending date order; this module is the single place that establishes
//! that order.

use kandil_types::OhlcvBar;

/// Return a copy of `bars` sorted ascending by date.
///
/// The sort is stable, so bars sharing a date keep their input order; the
/// core does not deduplicate dates. The input is borrowed and never
/// mutated. Empty and single-bar inputs pass through unchanged, and the
/// function is idempotent: normalizing an already-sorted series returns an
/// equal series.
#[must_use]
pub fn normalize(bars: &[OhlcvBar]) -> Vec<OhlcvBar> {
    let mut out = bars.to_vec();
    out.sort_by_key(|b| b.date);
    out
}
