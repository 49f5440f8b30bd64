//! Re-export of foundational types from `kandil-types`.
// Consolidated re-exports so downstream crates can depend on `kandil-core` only

pub use kandil_types::{CATALOGED_WINDOWS, ChartKind, Company, OhlcvBar, RangeLabels, range_labels};

pub use rust_decimal::Decimal;
