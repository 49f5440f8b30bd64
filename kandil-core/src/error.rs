use thiserror::Error;

/// Unified error type for the kandil workspace.
///
/// The analytics surface is deliberately hard to fail: short histories and
/// zero baselines are defined fallbacks on [`crate::SummaryMetrics`], and an
/// empty projection input yields an explicit no-data result. Only conditions
/// with no meaningful output at all are errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KandilError {
    /// A computation that needs at least one bar received none.
    ///
    /// "Earliest" and "latest" are undefined on an empty window, so the
    /// summary metrics cannot be produced, even as fallbacks.
    #[error("empty series: summary metrics need at least one bar")]
    EmptySeries,

    /// Issues with the provided data (missing fixture, malformed bar, etc.).
    #[error("data issue: {0}")]
    Data(String),
}

impl KandilError {
    /// Helper: build a `Data` error from any message.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }
}
