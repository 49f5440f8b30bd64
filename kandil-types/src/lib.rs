//! Kandil-specific data transfer objects shared by the analytics core and its callers.
#![warn(missing_docs)]

mod bar;
mod chart;
mod company;
mod range;

pub use bar::OhlcvBar;
pub use chart::ChartKind;
pub use company::Company;
pub use range::{CATALOGED_WINDOWS, RangeLabels, range_labels};
