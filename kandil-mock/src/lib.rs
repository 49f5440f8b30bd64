//! Deterministic sample data for Kandil tests and demos.
//!
//! Provides the sample company catalog, small fixed history fixtures, and a
//! seeded random-walk generator, so every consumer sees the same data on
//! every run with no network in sight.

use kandil_core::{Company, KandilError, OhlcvBar};

mod fixtures;
mod walk;

pub use walk::generate_history;

/// The sample company catalog, with stable ids.
#[must_use]
pub fn companies() -> Vec<Company> {
    fixtures::companies::all()
}

/// Fixed fixture history for a symbol, when one exists.
///
/// Fixtures are small hand-written series meant for exact-value assertions;
/// use [`generate_history`] when a window-sized series is needed.
#[must_use]
pub fn fixture_history(symbol: &str) -> Option<Vec<OhlcvBar>> {
    fixtures::history::by_symbol(symbol)
}

/// History for a symbol and window: the fixed fixture when one exists,
/// otherwise a generated walk.
///
/// Mirrors the fixture-first shape of a live-data-then-fallback feed,
/// minus the network.
///
/// # Errors
/// Returns [`KandilError::Data`] if the generated walk produced a
/// non-finite price, which indicates a bug in the generator parameters.
pub fn history(symbol: &str, days: u32) -> Result<Vec<OhlcvBar>, KandilError> {
    match fixtures::history::by_symbol(symbol) {
        Some(bars) => Ok(bars),
        None => generate_history(symbol, days),
    }
}
