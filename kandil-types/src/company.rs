use serde::{Deserialize, Serialize};

/// Descriptor of a listed company, used for chart titles and listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Stable numeric identifier.
    pub id: u32,
    /// Ticker symbol, e.g. `"AAPL"`.
    pub symbol: String,
    /// Full company name.
    pub name: String,
    /// Sector classification, e.g. `"Technology"`.
    pub sector: String,
    /// Free-form business description, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
