//! Daily volume lookup over an analytics overview series.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a chain's analytics overview.
///
/// Only `date` is required. Every other column may be null, missing or
/// fractional on any row without failing the whole series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEntry {
    /// Day-aligned unix timestamp (seconds).
    pub date: i64,
    /// Traded volume in USD for that day.
    #[serde(rename = "volumeUSD", default)]
    pub volume_usd: Option<Decimal>,
    /// Number of swaps recorded that day.
    #[serde(rename = "transactionCounts", default)]
    pub transaction_counts: Option<Decimal>,
    /// Total value locked in USD at the end of that day.
    #[serde(rename = "tvlUSD", default)]
    pub tvl_usd: Option<Decimal>,
}

/// Volume of the entry whose `date` equals `day` exactly.
///
/// `day` must already be day-aligned; an unaligned value silently
/// matches nothing. A matched row without a volume also yields `None`.
pub fn daily_volume(entries: &[AnalyticsEntry], day: i64) -> Option<Decimal> {
    entries
        .iter()
        .find(|entry| entry.date == day)
        .and_then(|entry| entry.volume_usd)
}

/// Smallest `date` in the series, or `None` when it is empty.
pub fn earliest_date(entries: &[AnalyticsEntry]) -> Option<i64> {
    entries.iter().map(|entry| entry.date).min()
}
